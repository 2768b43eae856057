use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    DATETIME_SEPARATOR, Date, Offset, ParseError, Time, YearDigits,
    pattern::{FormatError, Pattern},
};

/// A calendar date combined with a time of day. The UTC offset, if any,
/// lives on the time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTime {
    date: Date,
    time: Time,
}

impl DateTime {
    pub const fn new(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    /// Parses `<date>T<time>` with the given year width.
    ///
    /// # Errors
    /// Returns `ParseError` if either half is malformed or the halves mix
    /// basic and extended notation.
    pub fn parse(text: &str, year_digits: YearDigits) -> Result<Self, ParseError> {
        crate::parse::datetime(text, year_digits)
    }

    pub const fn date(&self) -> Date {
        self.date
    }

    pub const fn time(&self) -> Time {
        self.time
    }

    pub const fn offset(&self) -> Option<Offset> {
        self.time.offset()
    }

    /// Renders the datetime under `pattern`.
    ///
    /// # Errors
    /// Returns `FormatError::YearOutOfRange` if the year does not fit `year_digits`.
    pub fn isoformat(&self, pattern: impl AsRef<str>, year_digits: YearDigits) -> Result<String, FormatError> {
        Pattern::compile(pattern.as_ref()).format_datetime(self, year_digits)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{DATETIME_SEPARATOR}{}", self.date, self.time)
    }
}

impl FromStr for DateTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::parse(trimmed, YearDigits::detect(trimmed))
    }
}

impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
