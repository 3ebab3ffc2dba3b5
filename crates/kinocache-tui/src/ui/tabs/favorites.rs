use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::ui::styles;
use crate::ui::tabs::films::{film_row, render_film_detail};

/// Render the Favorites tab - favorites table with a detail panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_favorites_table(frame, app, chunks[0]);
    render_film_detail(frame, app.detail_film(), chunks[1], app.details.is_some());
}

fn render_favorites_table(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new([
        Cell::from(" "),
        Cell::from("Title"),
        Cell::from("Year"),
        Cell::from("Rating"),
        Cell::from("Genres"),
    ])
    .style(styles::title_style())
    .height(1);

    let rows: Vec<Row> = app.favorite_films.iter().map(film_row).collect();

    let widths = [
        Constraint::Length(1),
        Constraint::Percentage(40),
        Constraint::Length(6),
        Constraint::Length(7),
        Constraint::Fill(1),
    ];

    let title = format!(
        " Favorites ({}) - [f] remove  [C] clear all ",
        app.favorite_films.len()
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .title_style(styles::muted_style())
                .borders(Borders::ALL)
                .border_style(styles::border_style(true)),
        )
        .row_highlight_style(styles::selected_style());

    let mut state = TableState::default();
    state.select((!app.favorite_films.is_empty()).then_some(app.favorites_selection));

    frame.render_stateful_widget(table, area, &mut state);
}
