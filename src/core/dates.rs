//! History-date normalization
//!
//! The source logs carry dates either as native spreadsheet date cells or as
//! Korean "M월D일" (month/day) text with no year. Text dates are anchored to
//! a fixed assumed year. Anything else is "no date" and the row is dropped
//! by the importer.

use calamine::Data;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Year assumed for "M월D일" text dates, which carry no year of their own
pub const ASSUMED_YEAR: i32 = 2020;

fn month_day_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{1,2})월(\d{1,2})일").unwrap())
}

/// Parse a "M월D일" text date, anchored to [`ASSUMED_YEAR`].
///
/// The month/day pair must form a real calendar date; "13월45일" is no date.
pub fn parse_month_day_text(text: &str) -> Option<String> {
    let caps = month_day_pattern().captures(text.trim())?;
    let month: u32 = caps[1].parse().ok()?;
    let day: u32 = caps[2].parse().ok()?;
    let date = NaiveDate::from_ymd_opt(ASSUMED_YEAR, month, day)?;
    Some(date.format("%Y-%m-%d").to_string())
}

/// Normalize a date cell to a `YYYY-MM-DD` string.
///
/// Native date/datetime cells convert directly; string cells go through the
/// "M월D일" pattern. Every other cell kind yields `None`.
pub fn parse_cell_date(cell: &Data) -> Option<String> {
    match cell {
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| d.format("%Y-%m-%d").to_string()),
        Data::DateTimeIso(s) => {
            // ISO cells keep their own calendar date
            let date_part = s.split('T').next().unwrap_or(s);
            NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
                .ok()
                .map(|d| d.format("%Y-%m-%d").to_string())
        }
        Data::String(s) => parse_month_day_text(s),
        _ => None,
    }
}
