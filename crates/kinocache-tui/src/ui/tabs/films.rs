use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use kinocache_core::models::Film;

use crate::app::App;
use crate::ui::styles;
use crate::utils::{format_film_length, format_rating, join_names, truncate};

/// Render the Films tab - filterable film table with a detail panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_film_table(frame, app, chunks[0]);
    render_film_detail(frame, app.detail_film(), chunks[1], app.details.is_some());
}

fn render_film_table(frame: &mut Frame, app: &App, area: Rect) {
    let visible = app.visible_films();

    let header = Row::new([
        Cell::from(" "),
        Cell::from("Title"),
        Cell::from("Year"),
        Cell::from("Rating"),
        Cell::from("Genres"),
    ])
    .style(styles::title_style())
    .height(1);

    let rows: Vec<Row> = visible
        .iter()
        .map(|film| film_row(film))
        .collect();

    let widths = [
        Constraint::Length(1),      // Favorite marker
        Constraint::Percentage(40), // Title
        Constraint::Length(6),      // Year
        Constraint::Length(7),      // Rating
        Constraint::Fill(1),        // Genres
    ];

    let title = if visible.len() == app.films.len() {
        format!(" Films ({}) ", app.films.len())
    } else {
        format!(" Films ({}/{}) ", visible.len(), app.films.len())
    };

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
    state.select((!visible.is_empty()).then_some(app.film_selection));

    frame.render_stateful_widget(table, area, &mut state);
}

/// Build a table row for a film. Shared with the Favorites tab.
pub fn film_row(film: &Film) -> Row<'static> {
    let marker = if film.is_favorite { "♥" } else { " " };
    let rating = film
        .rating_kinopoisk
        .map(|r| format!("{:.1}", r))
        .unwrap_or_else(|| "-".to_string());
    let genres = join_names(film.genres.iter().map(|g| g.name.as_deref()));

    Row::new([
        Cell::from(Span::styled(marker.to_string(), styles::favorite_style())),
        Cell::from(truncate(film.title(), 48)),
        Cell::from(film.year.clone().unwrap_or_else(|| "-".to_string())),
        Cell::from(rating),
        Cell::from(truncate(&genres, 30)),
    ])
    .style(styles::list_item_style())
}

/// Render the detail panel for a film. Shared with the Favorites tab.
/// `expanded` marks a panel backed by an on-demand detail fetch.
pub fn render_film_detail(frame: &mut Frame, film: Option<&Film>, area: Rect, expanded: bool) {
    let content = match film {
        Some(film) => detail_lines(film),
        None => vec![Line::from(Span::styled(
            "No film selected",
            styles::muted_style(),
        ))],
    };

    let block = Block::default()
        .title(" Details ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(expanded));

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn field_line(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, styles::muted_style()),
        Span::raw(value),
    ])
}

fn detail_lines(film: &Film) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let mut title = film.title().to_string();
    if film.is_favorite {
        title = format!("♥ {}", title);
    }
    lines.push(Line::from(Span::styled(title, styles::title_style())));

    if let Some(alternate) = film.alternate_title() {
        lines.push(Line::from(Span::styled(
            alternate.to_string(),
            styles::muted_style(),
        )));
    }
    lines.push(Line::from(""));

    lines.push(field_line(
        "Year:      ",
        film.year.clone().unwrap_or_else(|| "-".to_string()),
    ));
    lines.push(field_line(
        "Length:    ",
        format_film_length(film.film_length.as_deref()),
    ));
    lines.push(field_line(
        "Genres:    ",
        join_names(film.genres.iter().map(|g| g.name.as_deref())),
    ));
    lines.push(field_line(
        "Countries: ",
        join_names(film.countries.iter().map(|c| c.name.as_deref())),
    ));
    if let Some(ref age) = film.rating_age_limits {
        lines.push(field_line("Age:       ", age.clone()));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Ratings", styles::highlight_style())));
    lines.push(field_line(
        "Kinopoisk: ",
        format_rating(film.rating_kinopoisk, film.rating_kinopoisk_vote_count),
    ));
    lines.push(field_line(
        "IMDb:      ",
        format_rating(film.rating_imdb, film.rating_imdb_vote_count),
    ));
    if film.rating_film_critics.is_some() {
        lines.push(field_line(
            "Critics:   ",
            format_rating(film.rating_film_critics, film.rating_film_critics_vote_count),
        ));
    }
    lines.push(Line::from(""));

    if let Some(ref slogan) = film.slogan {
        lines.push(Line::from(Span::styled(
            format!("«{}»", slogan),
            styles::highlight_style(),
        )));
        lines.push(Line::from(""));
    }

    if let Some(description) = film
        .description
        .as_deref()
        .or(film.short_description.as_deref())
    {
        lines.push(Line::from(description.to_string()));
        lines.push(Line::from(""));
    }

    if let Some(ref url) = film.web_url {
        lines.push(Line::from(Span::styled(url.clone(), styles::muted_style())));
    }

    lines
}
