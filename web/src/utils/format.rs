use chrono::{DateTime, NaiveDateTime};

/// Renders an API timestamp for display, e.g. "Sat, Nov 14, 2026 at 9:00 PM".
/// Anything that is not RFC 3339 (or a naive `YYYY-MM-DDTHH:MM:SS`) is shown as-is.
pub fn format_event_date(raw: &str) -> String {
    const DISPLAY: &str = "%a, %b %-d, %Y at %-I:%M %p";

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return date.format(DISPLAY).to_string();
    }
    if let Ok(date) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return date.format(DISPLAY).to_string();
    }
    raw.to_string()
}

/// "1 ticket", "3 tickets".
pub fn pluralize_tickets(count: u32) -> String {
    if count == 1 {
        "1 ticket".to_string()
    } else {
        format!("{} tickets", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339_and_naive_dates() {
        assert_eq!(
            format_event_date("2026-11-14T21:00:00Z"),
            "Sat, Nov 14, 2026 at 9:00 PM"
        );
        assert_eq!(
            format_event_date("2026-12-05T09:30:00"),
            "Sat, Dec 5, 2026 at 9:30 AM"
        );
        assert_eq!(format_event_date("next week"), "next week");
    }

    #[test]
    fn pluralizes() {
        assert_eq!(pluralize_tickets(1), "1 ticket");
        assert_eq!(pluralize_tickets(0), "0 tickets");
        assert_eq!(pluralize_tickets(4), "4 tickets");
    }
}
