/// Case-insensitive string equality. Allocates, but the compared names are
/// short and may be non-ASCII (Russian genre/country labels).
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Format a rating with its vote count, e.g. "7.8 (412 311)".
pub fn format_rating(rating: Option<f64>, votes: Option<i64>) -> String {
    match rating {
        Some(rating) => match votes {
            Some(votes) => format!("{:.1} ({})", rating, group_digits(votes)),
            None => format!("{:.1}", rating),
        },
        None => "-".to_string(),
    }
}

/// Format a film length for display.
/// Handles both encodings the API uses: plain minutes ("136") and
/// hours:minutes ("02:16").
pub fn format_film_length(length: Option<&str>) -> String {
    let Some(length) = length else {
        return "-".to_string();
    };

    if let Some((hours, minutes)) = length.split_once(':') {
        if let (Ok(h), Ok(m)) = (hours.parse::<u32>(), minutes.parse::<u32>()) {
            return format_hours_minutes(h * 60 + m);
        }
    }

    if let Ok(total) = length.trim().parse::<u32>() {
        return format_hours_minutes(total);
    }

    length.to_string() // Return original if it doesn't look like a duration
}

fn format_hours_minutes(total_minutes: u32) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if hours == 0 {
        format!("{}m", minutes)
    } else if minutes == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, minutes)
    }
}

/// Truncate a string to a maximum number of characters, adding an ellipsis
/// if needed
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Join optional display names with ", ", skipping entries without one.
pub fn join_names<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let joined: Vec<&str> = names.into_iter().flatten().collect();
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined.join(", ")
    }
}

/// Group digits with thin spaces for readability: 412311 -> "412 311"
fn group_digits(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case("драма", "Драма"));
        assert!(eq_ignore_case("USA", "usa"));
        assert!(!eq_ignore_case("драма", "драм"));
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(Some(7.8), Some(412311)), "7.8 (412 311)");
        assert_eq!(format_rating(Some(8.0), None), "8.0");
        assert_eq!(format_rating(None, Some(10)), "-");
    }

    #[test]
    fn test_format_film_length_minutes() {
        assert_eq!(format_film_length(Some("136")), "2h 16m");
        assert_eq!(format_film_length(Some("60")), "1h");
        assert_eq!(format_film_length(Some("45")), "45m");
    }

    #[test]
    fn test_format_film_length_colon_format() {
        assert_eq!(format_film_length(Some("02:16")), "2h 16m");
        assert_eq!(format_film_length(Some("1:00")), "1h");
    }

    #[test]
    fn test_format_film_length_passthrough() {
        assert_eq!(format_film_length(None), "-");
        assert_eq!(format_film_length(Some("unknown")), "unknown");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello", 10), "Hello");
        assert_eq!(truncate("Hello World", 8), "Hello...");
        assert_eq!(truncate("Матрица: Перезагрузка", 10), "Матрица...");
        assert_eq!(truncate("Hi", 2), "Hi");
    }

    #[test]
    fn test_join_names() {
        assert_eq!(
            join_names([Some("драма"), None, Some("комедия")]),
            "драма, комедия"
        );
        assert_eq!(join_names([None, None]), "-");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(412311), "412 311");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1 000");
        assert_eq!(group_digits(1234567), "1 234 567");
    }
}
