//! Keyboard input handling for the TUI.
//!
//! This module handles all keyboard events and translates them into
//! application state changes.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, AppState, Tab, PAGE_SCROLL_SIZE};

/// Handle keyboard input. Returns true if the app should quit.
pub async fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // Handle help overlay
    if matches!(app.state, AppState::ShowingHelp) {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.state = AppState::Normal;
        }
        return Ok(false);
    }

    // Handle clear-favorites confirmation
    if matches!(app.state, AppState::ConfirmingClearFavorites) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.state = AppState::Normal;
                app.clear_favorites().await;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return Ok(false);
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('?') => app.state = AppState::ShowingHelp,

        KeyCode::Tab => app.switch_tab(app.current_tab.next()),
        KeyCode::BackTab => app.switch_tab(app.current_tab.prev()),
        KeyCode::Char('1') => app.switch_tab(Tab::Films),
        KeyCode::Char('2') => app.switch_tab(Tab::Favorites),

        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::PageDown => app.move_selection(PAGE_SCROLL_SIZE as isize),
        KeyCode::PageUp => app.move_selection(-(PAGE_SCROLL_SIZE as isize)),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        KeyCode::Enter => app.open_details(),
        KeyCode::Esc => app.close_details(),

        KeyCode::Char('f') => app.toggle_favorite().await,
        KeyCode::Char('r') => app.refresh(),

        KeyCode::Char('g') if app.current_tab == Tab::Films => app.cycle_genre(),
        KeyCode::Char('c') if app.current_tab == Tab::Films => app.cycle_country(),

        KeyCode::Char('C') if app.current_tab == Tab::Favorites => {
            if !app.favorite_films.is_empty() {
                app.state = AppState::ConfirmingClearFavorites;
            }
        }

        _ => {}
    }

    Ok(false)
}
