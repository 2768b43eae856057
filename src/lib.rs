//! ISO 8601 date, time and datetime parsing and formatting.
//!
//! Parsing recognizes every basic and extended calendar, ordinal and week
//! date representation, reduced precision forms, decimal fractions of the
//! finest time field, and UTC offsets. Formatting goes through strftime-like
//! patterns (see [`Pattern`]); the named [`DateFormat`], [`TimeFormat`] and
//! [`TzFormat`] tags stand for the standard ones.
//!
//! ```
//! use isodate::{DateFormat, YearDigits, date_isoformat, parse_date};
//!
//! let date = parse_date("1985-W15-5", YearDigits::Four).unwrap();
//! assert_eq!(date_isoformat(&date, DateFormat::ExtComplete, YearDigits::Four).unwrap(), "1985-04-12");
//! ```

#[macro_use]
mod logging;

mod config;
mod consts;
mod date;
mod datetime;
mod format;
mod parse;
mod pattern;
mod prelude;
mod time;
mod types;

#[cfg(test)]
mod test_utils;

pub use config::YearDigits;
pub use consts::*;
pub use date::{Date, Precision};
pub use datetime::DateTime;
pub use format::{DateFormat, Style, TimeFormat, TzFormat};
pub use pattern::{FormatError, Pattern};
pub use time::{FixedOffset, Offset, Sign, Time};
pub use types::{Day, Month, Year, days_in_month, days_in_year, is_leap_year, iso_weeks_in_year};

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Empty {_0} string")]
    EmptyInput(&'static str),
    #[display(fmt = "Unrecognized {kind} string: {input:?}")]
    Unrecognized { kind: &'static str, input: String },
    #[display(fmt = "Basic and extended notation mixed in {_0:?}")]
    MixedStyles(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i64),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Invalid ordinal day {ordinal} for year {year}")]
    InvalidOrdinal { year: i32, ordinal: u16 },
    #[display(fmt = "Invalid week {week} for ISO year {year}")]
    InvalidWeek { year: i32, week: u8 },
    #[display(fmt = "Invalid weekday: {_0} (must be 1-7)")]
    InvalidWeekday(u8),
    #[display(fmt = "Invalid time {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u8, minute: u8, second: u8 },
    #[display(fmt = "Invalid nanosecond: {_0}")]
    InvalidNanosecond(u32),
    #[display(fmt = "Invalid UTC offset {hours:02}:{minutes:02}")]
    InvalidOffset { hours: u8, minutes: u8 },
    #[display(fmt = "Missing {_0} field")]
    MissingField(&'static str),
    #[display(fmt = "Conflicting {_0} fields")]
    ConflictingFields(&'static str),
    #[display(fmt = "Invalid year digits: {_0} (must be 4 or 6)")]
    InvalidYearDigits(u8),
    #[display(fmt = "Unknown format: {_0:?}")]
    UnknownFormat(String),
}

impl std::error::Error for ParseError {}

/// Parses any ISO 8601 date representation.
///
/// Variants are tried in a fixed order and the whole input must match one
/// of them. Reduced forms resolve to their first day: `1985-04` is April 1st
/// and a century `19` is January 1st, 1901.
///
/// # Errors
/// Returns `ParseError::Unrecognized` if no variant matches, or a range error
/// such as `ParseError::InvalidDay` if the matched fields name no date.
pub fn parse_date(text: &str, year_digits: YearDigits) -> Result<Date, ParseError> {
    parse::date(text, year_digits)
}

/// Parses a date in exactly the given representation. This is the only way
/// to read the basic year-month form `YYYYMM`.
///
/// # Errors
/// Returns `ParseError::Unrecognized` if the text is not in `format`.
pub fn parse_date_as(text: &str, format: DateFormat, year_digits: YearDigits) -> Result<Date, ParseError> {
    parse::date_as(text, format, year_digits)
}

/// Parses an ISO 8601 time of day with an optional leading `T`, decimal
/// fraction and UTC offset.
///
/// # Errors
/// Returns `ParseError::MixedStyles` if the offset notation contradicts the
/// time notation, `ParseError::Unrecognized` if nothing matches.
pub fn parse_time(text: &str) -> Result<Time, ParseError> {
    parse::time(text)
}

/// Parses a time in exactly the given representation, offset optional.
///
/// # Errors
/// Returns `ParseError::Unrecognized` if the text is not in `format`.
pub fn parse_time_as(text: &str, format: TimeFormat) -> Result<Time, ParseError> {
    parse::time_as(text, format)
}

/// Parses `<date>T<time>` with four-digit years.
///
/// # Errors
/// Returns `ParseError` if the text does not contain exactly one `T`, either
/// half fails to parse, or the halves mix basic and extended notation.
pub fn parse_datetime(text: &str) -> Result<DateTime, ParseError> {
    parse::datetime(text, YearDigits::Four)
}

/// Renders a date under a pattern string or a [`DateFormat`] tag.
///
/// # Errors
/// Returns `FormatError` if the pattern needs time fields or the year does
/// not fit `year_digits`.
pub fn date_isoformat(date: &Date, pattern: impl AsRef<str>, year_digits: YearDigits) -> Result<String, FormatError> {
    date.isoformat(pattern, year_digits)
}

/// Renders a time under a pattern string or a [`TimeFormat`] tag.
///
/// # Errors
/// Returns `FormatError::MissingField` if the pattern needs date fields.
pub fn time_isoformat(time: &Time, pattern: impl AsRef<str>) -> Result<String, FormatError> {
    time.isoformat(pattern)
}

/// Renders with four-digit years.
///
/// # Errors
/// Returns `FormatError::YearOutOfRange` if the year is outside `0..=9999`.
pub fn datetime_isoformat(datetime: &DateTime, pattern: impl AsRef<str>) -> Result<String, FormatError> {
    datetime.isoformat(pattern, YearDigits::Four)
}
