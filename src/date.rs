use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

static NON_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9]+").unwrap());

/// Canonical `YYYYMMDD` token derived from a raw "date taken" string,
/// or the raw string carried along for diagnostics when it cannot be
/// decomposed into month/day/year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalDate {
    Token(String),
    Unparseable(String),
}

/// Collapse a raw metadata date string to its digit groups and rebuild
/// `YYYYMMDD` from the first three, read as month, day, year.
///
/// The month-first token order matches the localized rendering the
/// metadata reader produces; a source with a different order would swap
/// day and month silently, so the order is a heuristic, not a contract.
/// Malformed input yields `Unparseable`, never a panic.
pub fn normalize(raw: &str) -> CanonicalDate {
    let groups: Vec<&str> = NON_DIGIT.split(raw).filter(|g| !g.is_empty()).collect();
    if groups.len() < 3 {
        return CanonicalDate::Unparseable(raw.to_string());
    }

    let (month, day, year) = (groups[0], groups[1], groups[2]);
    if year.len() != 4 || month.len() > 2 || day.len() > 2 {
        return CanonicalDate::Unparseable(raw.to_string());
    }

    // Groups are pure ASCII digits of at most two chars, so parsing
    // cannot overflow; a failure still falls through to Unparseable.
    let (Ok(m), Ok(d)) = (month.parse::<u32>(), day.parse::<u32>()) else {
        return CanonicalDate::Unparseable(raw.to_string());
    };

    // Digit-valid but sloppy calendar dates pass on purpose; the source
    // format does not guarantee calendar correctness.
    if !(1..=12).contains(&m) || !(1..=31).contains(&d) {
        return CanonicalDate::Unparseable(raw.to_string());
    }

    CanonicalDate::Token(format!("{year}{m:02}{d:02}"))
}

/// Format a file's last-modified time as the same `YYYYMMDD` token.
pub fn from_modified(modified: &NaiveDateTime) -> String {
    modified.format("%Y%m%d").to_string()
}
