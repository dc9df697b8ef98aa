use super::*;

#[test]
fn formats_rfc3339_timestamps() {
    assert_eq!(format_event_date("2026-03-15T00:00:00.000Z"), "March 15, 2026");
}

#[test]
fn formats_plain_dates() {
    assert_eq!(format_event_date("2026-03-05"), "March 5, 2026");
}

#[test]
fn unparseable_input_is_returned_verbatim() {
    assert_eq!(format_event_date("next Tuesday"), "next Tuesday");
}

#[test]
fn timestamps_include_time_of_day() {
    assert_eq!(
        format_timestamp("2026-03-15T14:05:00.000Z"),
        "March 15, 2026 14:05"
    );
}

#[test]
fn timestamp_fallback_is_verbatim() {
    assert_eq!(format_timestamp(""), "");
}
