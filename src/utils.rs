use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing_subscriber::EnvFilter;

/// Time of day (and whatever follows it) after a `T` or whitespace.
static TIME_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:T\d{1,2}|\s+\d{1,2}:\d{2}).*$").unwrap());

/// Trailing `Z` or `+HH:MM` / `-HH:MM` offset on a date with no time part.
static OFFSET_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:Z|[+-]\d{2}:\d{2})$").unwrap());

/// Numeric date layouts, tried in order against the date part of a value.
const NUMERIC_DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%m-%d-%Y"];

/// Two-digit year fallback, only reached once the four-digit layouts fail.
const SHORT_YEAR_FORMAT: &str = "%m/%d/%y";

/// Month-name layouts.
const TEXTUAL_DATE_FORMATS: [&str; 3] = ["%B %d, %Y", "%B %d %Y", "%d %B %Y"];

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

/// Lowercases and drops everything that isn't an ASCII letter or digit:
/// `"Draw Date"`, `"draw_date"` and `"DRAW-DATE"` all become `"drawdate"`.
pub fn normalize_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Parses a date cell into a calendar date.
///
/// A time of day and any timezone offset (`Z`, `+05:00`) are discarded, so
/// the calendar date written in the value is kept as-is and never shifted
/// across timezones. Returns `None` for values that match no known layout;
/// callers treat that as a missing value.
pub fn normalize_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    let without_time = TIME_SUFFIX.replace(value, "");
    let date_part = OFFSET_SUFFIX.replace(without_time.trim(), "");
    let date_part = date_part.trim();

    parse_with(date_part, &TEXTUAL_DATE_FORMATS)
        .or_else(|| parse_with(date_part, &NUMERIC_DATE_FORMATS))
        .or_else(|| NaiveDate::parse_from_str(date_part, SHORT_YEAR_FORMAT).ok())
}

fn parse_with(value: &str, formats: &[&str]) -> Option<NaiveDate> {
    formats
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        // "%Y" happily reads "24" as year 24
        .find(|date| (1000..=9999).contains(&date.year()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `normalize_date` followed by `format_date`.
pub fn canonical_date(raw: &str) -> Option<String> {
    normalize_date(raw).map(format_date)
}
