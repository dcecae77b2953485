//! Comma-separated tag field handling.
//!
//! Forms hold tags as one free-text field; the wire format is an array.
//! Parsing trims each entry and drops empties, so `"a, b , c"` and
//! `["a","b"]` round-trip through edit forms without drift.

#[cfg(test)]
#[path = "tags_test.rs"]
mod tags_test;

/// Split a raw form value into clean tags.
pub fn parse(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Join tags back into the form representation.
pub fn join(tags: &[String]) -> String {
    tags.join(", ")
}
