//! Core library for kinocache.
//!
//! This crate contains everything below the terminal UI:
//!
//! - `api`: Kinopoisk API client and failure taxonomy
//! - `cache`: per-dataset persisted JSON cache store
//! - `catalog`: cache-first catalog synchronizer
//! - `favorites`: durable user-curated favorites set
//! - `models`: film, genre, country and filter taxonomy records
//! - `testing`: mock catalog client for tests

pub mod api;
pub mod cache;
pub mod catalog;
pub mod favorites;
pub mod models;
pub mod testing;
