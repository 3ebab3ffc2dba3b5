use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, AppState, Tab};

use super::styles;
use super::tabs::{favorites, films};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Tabs
            Constraint::Min(10),   // Main content
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0]);
    render_tabs(frame, app, chunks[1]);
    render_main_content(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);

    if matches!(app.state, AppState::ShowingHelp) {
        render_help_overlay(frame);
    }

    if matches!(app.state, AppState::ConfirmingClearFavorites) {
        render_clear_favorites_overlay(frame);
    }
}

fn render_title_bar(frame: &mut Frame, _app: &App, area: Rect) {
    let title = "  Kinocache";
    let help_hint = "[?] Help";

    let title_line = Line::from(vec![
        Span::styled(title, styles::title_style()),
        Span::raw(" ".repeat(
            area.width
                .saturating_sub(title.len() as u16 + help_hint.len() as u16 + 4)
                as usize,
        )),
        Span::styled(help_hint, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    frame.render_widget(Paragraph::new(title_line).block(block), area);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let main_tabs = [Tab::Films, Tab::Favorites];

    let mut spans = vec![Span::raw(" ")];
    for (i, tab) in main_tabs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style()));
        }
        let label = format!("[{}] {}", i + 1, tab.title());
        if app.current_tab == *tab {
            spans.push(Span::styled(label, styles::tab_style(true)));
        } else {
            spans.push(Span::styled(label, styles::muted_style()));
        }
    }

    // Show the active filters on the right when on the Films tab
    if app.current_tab == Tab::Films {
        let genre = app
            .genres
            .get(app.selected_genre)
            .map(|g| g.display_name())
            .unwrap_or("-");
        let country = app
            .countries
            .get(app.selected_country)
            .map(|c| c.display_name())
            .unwrap_or("-");

        let filters = format!("[g] {} | [c] {}", genre, country);
        let main_width: usize = spans.iter().map(|s| s.content.len()).sum();
        let padding = (area.width as usize).saturating_sub(main_width + filters.chars().count() + 2);

        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(filters, styles::highlight_style()));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_main_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.current_tab {
        Tab::Films => films::render(frame, app, area),
        Tab::Favorites => favorites::render(frame, app, area),
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = if app.is_loading_films || app.is_loading_filters {
        " Loading... ".to_string()
    } else if let Some(ref msg) = app.status_message {
        format!(" {} ", msg)
    } else {
        format!(
            " {} films · {} favorites ",
            app.films.len(),
            app.favorite_films.len()
        )
    };

    let right_text = " [r]efresh | [q]uit ";
    let padding = (area.width as usize)
        .saturating_sub(left_text.chars().count())
        .saturating_sub(right_text.len());

    let status_line = Line::from(vec![
        Span::styled(left_text, styles::muted_style()),
        Span::raw(" ".repeat(padding)),
        Span::styled(right_text, styles::muted_style()),
    ]);

    frame.render_widget(
        Paragraph::new(status_line).style(styles::status_bar_style()),
        area,
    );
}

fn render_help_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(46, 18, frame.area());
    frame.render_widget(Clear, area);

    let bindings = [
        ("1 / 2 / Tab", "Switch tab"),
        ("j / k, ↓ / ↑", "Move selection"),
        ("PgUp / PgDn", "Scroll a page"),
        ("Home / End", "Jump to first/last"),
        ("Enter", "Fetch full film details"),
        ("Esc", "Close details"),
        ("f", "Toggle favorite"),
        ("g / c", "Cycle genre / country filter"),
        ("C", "Clear favorites"),
        ("r", "Refresh from the API"),
        ("?", "This help"),
        ("q", "Quit"),
    ];

    let mut lines = vec![Line::from("")];
    for (key, description) in bindings {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{:<14}", key), styles::help_key_style()),
            Span::styled(description, styles::help_desc_style()),
        ]));
    }

    let block = Block::default()
        .title(" Help ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_clear_favorites_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(40, 5, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  Clear all favorites? "),
            Span::styled("[y]", styles::help_key_style()),
            Span::raw("es / "),
            Span::styled("[n]", styles::help_key_style()),
            Span::raw("o"),
        ]),
    ];

    let block = Block::default()
        .title(" Confirm ")
        .title_style(styles::error_style())
        .borders(Borders::ALL)
        .border_style(styles::error_style());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Center a fixed-size rect inside `area`, clamped to its bounds.
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
