//! Display formatting for event dates.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

use chrono::NaiveDate;

/// Format an API date string as a long date, e.g. "March 15, 2026".
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates. Unparseable
/// input is returned verbatim so a backend quirk never blanks the UI.
pub fn format_event_date(raw: &str) -> String {
    parse_date(raw).map_or_else(|| raw.to_owned(), |date| date.format("%B %-d, %Y").to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Format an API timestamp for message lists, e.g. "March 15, 2026 14:05".
pub fn format_timestamp(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map_or_else(|_| raw.to_owned(), |ts| ts.format("%B %-d, %Y %H:%M").to_string())
}
