use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    MAX_HOUR, MAX_MINUTE, MAX_OFFSET_HOUR, ParseError, TzFormat,
    consts::{NANOS_PER_MICRO, NANOS_PER_SECOND},
    pattern::{FormatError, Pattern},
    prelude::*,
};

/// Direction of a fixed offset from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Sign {
    #[display(fmt = "+")]
    Plus,
    #[display(fmt = "-")]
    Minus,
}

/// A constant displacement from UTC, with no daylight-saving rules attached.
///
/// A zero offset is always stored with a positive sign, so `-00:00` and
/// `+00:00` compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedOffset {
    sign:    Sign,
    hours:   u8,
    minutes: u8,
}

impl FixedOffset {
    /// # Errors
    /// Returns `ParseError::InvalidOffset` if `hours > 23` or `minutes > 59`.
    pub const fn new(sign: Sign, hours: u8, minutes: u8) -> Result<Self, ParseError> {
        if hours > MAX_OFFSET_HOUR || minutes > MAX_MINUTE {
            return Err(ParseError::InvalidOffset { hours, minutes });
        }
        let sign = if hours == 0 && minutes == 0 { Sign::Plus } else { sign };
        Ok(Self { sign, hours, minutes })
    }

    /// Offset east of UTC, e.g. `FixedOffset::east(-5, 0)` for `-05:00`.
    ///
    /// # Errors
    /// Same bounds as [`FixedOffset::new`].
    pub fn east(hours: i8, minutes: u8) -> Result<Self, ParseError> {
        let sign = if hours < 0 { Sign::Minus } else { Sign::Plus };
        Self::new(sign, hours.unsigned_abs(), minutes)
    }

    pub const fn sign(self) -> Sign {
        self.sign
    }

    pub const fn hours(self) -> u8 {
        self.hours
    }

    pub const fn minutes(self) -> u8 {
        self.minutes
    }

    /// Signed total displacement in minutes.
    pub const fn total_minutes(self) -> i32 {
        let magnitude = self.hours as i32 * 60 + self.minutes as i32;
        match self.sign {
            Sign::Plus => magnitude,
            Sign::Minus => -magnitude,
        }
    }

    pub const fn is_zero(self) -> bool {
        self.hours == 0 && self.minutes == 0
    }
}

/// The timezone designator carried by a [`Time`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Offset {
    /// `Z`
    Utc,
    Fixed(FixedOffset),
}

impl Offset {
    /// Signed displacement from UTC in minutes.
    pub const fn total_minutes(self) -> i32 {
        match self {
            Self::Utc => 0,
            Self::Fixed(offset) => offset.total_minutes(),
        }
    }

    /// Renders the offset in the given notation. UTC and zero offsets are
    /// written as `Z`; [`TzFormat::Hour`] drops any minutes.
    pub fn isoformat(self, format: TzFormat) -> String {
        match self {
            Self::Fixed(offset) if !offset.is_zero() => match format {
                TzFormat::Basic => format!("{}{:02}{:02}", offset.sign, offset.hours, offset.minutes),
                TzFormat::Extended => format!("{}{:02}:{:02}", offset.sign, offset.hours, offset.minutes),
                TzFormat::Hour => format!("{}{:02}", offset.sign, offset.hours),
            },
            _ => "Z".to_owned(),
        }
    }
}

impl From<FixedOffset> for Offset {
    fn from(offset: FixedOffset) -> Self {
        Self::Fixed(offset)
    }
}

/// Extended notation. Unlike [`Offset::isoformat`], a zero fixed offset is
/// written as `+00:00` so that it reads back as the same value.
impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utc => f.write_str("Z"),
            Self::Fixed(offset) => write!(f, "{}{:02}:{:02}", offset.sign, offset.hours, offset.minutes),
        }
    }
}

/// A time of day with an optional fixed UTC offset.
///
/// `24:00:00` is representable as the end-of-day instant; any other time
/// with hour 24 is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Time {
    hour:       u8,
    minute:     u8,
    second:     u8,
    nanosecond: u32,
    offset:     Option<Offset>,
}

impl Time {
    /// # Errors
    /// Returns `ParseError::InvalidTime` if a component is out of range.
    pub const fn from_hms(hour: u8, minute: u8, second: u8) -> Result<Self, ParseError> {
        Self::from_hms_nano(hour, minute, second, 0)
    }

    /// # Errors
    /// Returns `ParseError::InvalidTime` if a component is out of range, or
    /// `ParseError::InvalidNanosecond` if `nanosecond` is a whole second or more.
    pub const fn from_hms_nano(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Result<Self, ParseError> {
        if hour > MAX_HOUR
            || minute > MAX_MINUTE
            || second > MAX_MINUTE
            || (hour == MAX_HOUR && (minute != 0 || second != 0))
        {
            return Err(ParseError::InvalidTime { hour, minute, second });
        }
        if nanosecond as u64 >= NANOS_PER_SECOND || (hour == MAX_HOUR && nanosecond != 0) {
            return Err(ParseError::InvalidNanosecond(nanosecond));
        }
        Ok(Self {
            hour,
            minute,
            second,
            nanosecond,
            offset: None,
        })
    }

    /// Returns the same time carrying `offset`.
    #[must_use]
    pub const fn with_offset(self, offset: Option<Offset>) -> Self {
        Self { offset, ..self }
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    pub const fn nanosecond(&self) -> u32 {
        self.nanosecond
    }

    /// Sub-second part truncated to microseconds
    pub const fn microsecond(&self) -> u32 {
        self.nanosecond / NANOS_PER_MICRO
    }

    pub const fn offset(&self) -> Option<Offset> {
        self.offset
    }

    /// Renders the time under `pattern`.
    ///
    /// # Errors
    /// Returns `FormatError::MissingField` if the pattern asks for date fields.
    pub fn isoformat(&self, pattern: impl AsRef<str>) -> Result<String, FormatError> {
        Pattern::compile(pattern.as_ref()).format_time(self)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        if self.nanosecond != 0 {
            let digits = format!("{:09}", self.nanosecond);
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }
        if let Some(offset) = self.offset {
            write!(f, "{offset}")?;
        }
        Ok(())
    }
}

impl FromStr for Time {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_time(s.trim())
    }
}

impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
