//! Cache-first catalog synchronization.

pub mod sync;

pub use sync::CatalogSynchronizer;
