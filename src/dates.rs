//! Permissive date parsing and the `YYYY-MM-DDT00:00:00-00:00` boundary format
//! sent as `timeMin` / `timeMax`.
//!
//! Accepted inputs (case-insensitive where words are involved):
//! - `today`, `now`, `tomorrow`, `yesterday` (relative to the caller's clock)
//! - `2024-03-05`, `2024/03/05`, `2024-03-05 10:30`, `2024-03-05T10:30:00`
//! - RFC 3339 (`2024-03-05T10:30:00+02:00`) and RFC 2822 date-times
//! - `03/05/2024` (US order) and `05.03.2024` (European order)
//! - `March 5, 2024`, `Mar 5 2024`, `5 March 2024`, `Tuesday, March 5th, 2024`
//! - `March 2024`, `Dec, 2025` (first day of that month)
//!
//! The year must be written with four digits: `1/5/24`, `05.03.24` and `20240305`
//! are rejected. For inputs that carry a time and an offset, the calendar date as
//! written is kept.

use crate::error::{HolidayError, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

/// Suffix appended to every boundary date.
pub const MIDNIGHT_UTC: &str = "T00:00:00-00:00";

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

// %B / %A also accept the abbreviated names when parsing.
const DATE_FORMATS: &[&str] = &[
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%A, %B %d, %Y",
    "%A %B %d %Y",
    "%A, %d %B %Y",
];

// Month-and-year input, parsed with a leading "1 " for the day.
const MONTH_FORMATS: &[&str] = &["%d %B %Y", "%d %B, %Y"];

static ORDINAL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d{1,2})(st|nd|rd|th)\b").expect("static regex"));

static YEAR_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{4}\b").expect("static regex"));

/// Parse a human-readable or ISO date.
///
/// Formats are tried in order; a match only counts if its year appears in `input` as a
/// standalone four-digit number. This keeps `March 2024` from being read as day 20 of
/// year 24.
///
/// ### Errors
/// [`HolidayError::DateParse`] when no supported format matches. Its source is the
/// failure of the plain `YYYY-MM-DD` attempt.
pub fn parse_natural(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let trimmed = input.trim();

    match trimmed.to_ascii_lowercase().as_str() {
        "today" | "now" => return Ok(today),
        "tomorrow" => return Ok(today.succ_opt().unwrap_or(today)),
        "yesterday" => return Ok(today.pred_opt().unwrap_or(today)),
        _ => {}
    }

    let iso = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d");
    let cleaned = ORDINAL_SUFFIX.replace_all(trimmed, "$1");
    let first_of_month = format!("1 {cleaned}");

    let found = iso
        .as_ref()
        .ok()
        .copied()
        .into_iter()
        .chain(DateTime::parse_from_rfc3339(trimmed).ok().map(|dt| dt.date_naive()))
        .chain(DateTime::parse_from_rfc2822(trimmed).ok().map(|dt| dt.date_naive()))
        .chain(
            DATE_TIME_FORMATS
                .iter()
                .filter_map(|f| NaiveDateTime::parse_from_str(trimmed, f).ok())
                .map(|dt| dt.date()),
        )
        .chain(
            DATE_FORMATS
                .iter()
                .filter_map(|f| NaiveDate::parse_from_str(&cleaned, f).ok()),
        )
        .chain(
            MONTH_FORMATS
                .iter()
                .filter_map(|f| NaiveDate::parse_from_str(&first_of_month, f).ok()),
        )
        .find(|d| has_year_token(trimmed, *d));

    found.ok_or_else(|| HolidayError::DateParse {
        input: input.to_string(),
        source: iso.err(),
    })
}

fn has_year_token(input: &str, date: NaiveDate) -> bool {
    YEAR_TOKEN
        .find_iter(input)
        .any(|m| m.as_str().parse::<i32>() == Ok(date.year()))
}

/// Render a date as `YYYY-MM-DDT00:00:00-00:00`.
pub fn boundary(date: NaiveDate) -> String {
    format!("{}{}", date.format("%Y-%m-%d"), MIDNIGHT_UTC)
}

/// January 1st of the year after `today`.
pub fn next_new_year(today: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(today.year() + 1, 1, 1).unwrap_or(NaiveDate::MAX)
}
