//! Display helpers for the backend's ISO-8601 timestamp strings.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

/// The date part (`YYYY-MM-DD`) of an ISO timestamp, or the raw value
/// when it is shorter than a date.
pub fn short_date(iso: &str) -> &str {
    iso.get(..10).unwrap_or(iso)
}

/// `YYYY-MM-DD HH:MM` for timeline entries; falls back to the raw value.
pub fn date_time(iso: &str) -> String {
    match (iso.get(..10), iso.get(11..16)) {
        (Some(date), Some(time)) => format!("{date} {time}"),
        _ => iso.to_owned(),
    }
}
