//! Shared helpers for the view renderers.

use chrono::{DateTime, NaiveDate};
use ratatui::widgets::{Block, Borders};

use crate::theme::{BORDER_STYLE, FOCUSED_BORDER_STYLE};

/// Standard bordered block with an optional title.
pub fn bordered_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        FOCUSED_BORDER_STYLE
    } else {
        BORDER_STYLE
    };
    let mut block = Block::default().borders(Borders::ALL).border_style(style);
    if !title.is_empty() {
        block = block.title(format!(" {title} "));
    }
    block
}

/// Formats a backend timestamp for table rows.
///
/// Accepts RFC 3339 datetimes and bare dates; anything else is shown
/// verbatim rather than hidden.
pub fn format_date(raw: &str) -> String {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return datetime.format("%d %b %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d %b %Y").to_string();
    }
    raw.to_string()
}

/// Formats a monetary amount.
pub fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Dash placeholder for optional columns.
pub fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "-",
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_rfc3339() {
        assert_eq!(format_date("2024-03-01T10:00:00Z"), "01 Mar 2024");
    }

    #[test]
    fn test_format_date_bare_date() {
        assert_eq!(format_date("2024-04-15"), "15 Apr 2024");
    }

    #[test]
    fn test_format_date_passthrough() {
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1200.0), "$1200.00");
        assert_eq!(format_amount(999.991), "$999.99");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(Some("x")), "x");
    }
}
