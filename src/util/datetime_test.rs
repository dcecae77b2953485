use super::*;

#[test]
fn short_date_takes_date_part() {
    assert_eq!(short_date("2025-05-10T11:59:00.000Z"), "2025-05-10");
    assert_eq!(short_date("2025-05-10"), "2025-05-10");
}

#[test]
fn short_date_passes_through_short_values() {
    assert_eq!(short_date(""), "");
    assert_eq!(short_date("n/a"), "n/a");
}

#[test]
fn date_time_formats_timeline_stamp() {
    assert_eq!(date_time("2025-05-10T12:01:00.000Z"), "2025-05-10 12:01");
    assert_eq!(date_time("invalid"), "invalid");
}
