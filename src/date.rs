use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{
    DateFormat, ParseError, YearDigits,
    consts::{JANUARY, MIN_DAY},
    pattern::{FormatError, Pattern},
    prelude::*,
    types::{self, Day, Month, Year},
};

/// How much of a date the source text actually specified.
///
/// Under-specified dates still resolve to a concrete day (the first one the
/// text can mean); the precision records what was filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    #[display(fmt = "century")]
    Century,
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "week")]
    Week,
    #[display(fmt = "day")]
    Day,
}

impl Precision {
    /// The extended representation that writes exactly this much of a date.
    pub const fn format(self) -> DateFormat {
        match self {
            Self::Century => DateFormat::Century,
            Self::Year => DateFormat::Year,
            Self::Month => DateFormat::ExtMonth,
            Self::Week => DateFormat::ExtWeek,
            Self::Day => DateFormat::ExtComplete,
        }
    }
}

/// A proleptic Gregorian calendar date.
///
/// Equality, ordering and hashing consider the calendar day only; the
/// [`Precision`] is carried along as metadata about the source text.
#[derive(Debug, Clone, Copy)]
pub struct Date {
    year:      Year,
    month:     Month,
    day:       Day,
    precision: Precision,
}

impl Date {
    /// Creates a fully specified date.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear`, `InvalidMonth` or `InvalidDay` for
    /// components outside the calendar.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year.get(), month)?;
        Ok(Self {
            year,
            month,
            day,
            precision: Precision::Day,
        })
    }

    /// Creates a date from a year and a 1-based day of that year.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidOrdinal` if the year has no such day.
    pub fn from_ordinal(year: i32, ordinal: u16) -> Result<Self, ParseError> {
        Year::new(year)?;
        if ordinal == 0 || ordinal > types::days_in_year(year) {
            return Err(ParseError::InvalidOrdinal { year, ordinal });
        }
        let days = types::days_from_civil(year, JANUARY, MIN_DAY) + i64::from(ordinal) - 1;
        Self::from_days(days)
    }

    /// Creates a date from an ISO week date. `iso_year` is the week-numbering
    /// year, which differs from the calendar year around New Year.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidWeek` or `InvalidWeekday` for a week the
    /// year does not have or a weekday outside `1..=7`.
    pub fn from_iso_week(iso_year: i32, week: u8, weekday: u8) -> Result<Self, ParseError> {
        Year::new(iso_year)?;
        if week == 0 || week > types::iso_weeks_in_year(iso_year) {
            return Err(ParseError::InvalidWeek { year: iso_year, week });
        }
        if !(1..=7).contains(&weekday) {
            return Err(ParseError::InvalidWeekday(weekday));
        }
        let days = types::iso_week_one_monday(iso_year) + i64::from(week - 1) * 7 + i64::from(weekday - 1);
        Self::from_days(days)
    }

    fn from_days(days: i64) -> Result<Self, ParseError> {
        let (year, month, day) = types::civil_from_days(days);
        let year = i32::try_from(year).map_err(|_| ParseError::InvalidYear(year))?;
        Self::new(year, month, day)
    }

    /// Returns the same day tagged with `precision`.
    #[must_use]
    pub const fn with_precision(self, precision: Precision) -> Self {
        Self { precision, ..self }
    }

    pub const fn year(&self) -> i32 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    pub const fn precision(&self) -> Precision {
        self.precision
    }

    /// Day of the year, starting at 1.
    pub const fn ordinal(&self) -> u16 {
        types::ordinal_of(self.year(), self.month(), self.day())
    }

    /// ISO weekday, 1 = Monday .. 7 = Sunday.
    pub const fn weekday(&self) -> u8 {
        types::weekday_from_days(self.to_days())
    }

    /// ISO week date as `(iso_year, week, weekday)`.
    pub const fn iso_week(&self) -> (i32, u8, u8) {
        let (iso_year, week, weekday) = types::iso_week_from_days(self.to_days());
        (iso_year as i32, week, weekday)
    }

    pub(crate) const fn to_days(&self) -> i64 {
        types::days_from_civil(self.year(), self.month(), self.day())
    }

    /// Renders the date under `pattern`.
    ///
    /// # Errors
    /// Returns `FormatError` if the pattern asks for time fields or the year
    /// does not fit `year_digits`.
    pub fn isoformat(&self, pattern: impl AsRef<str>, year_digits: YearDigits) -> Result<String, FormatError> {
        Pattern::compile(pattern.as_ref()).format_date(self, year_digits)
    }

    const fn key(&self) -> (Year, Month, Day) {
        (self.year, self.month, self.day)
    }
}

impl PartialEq for Date {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Date {}

impl Hash for Date {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for Date {
    /// Writes as much of the date as its precision covers, e.g. `1985-04`
    /// for a month-precision date; years outside `0..=9999` use six digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .isoformat(self.precision.format(), YearDigits::fitting(self.year()))
            .map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        crate::parse_date(trimmed, YearDigits::detect(trimmed))
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
