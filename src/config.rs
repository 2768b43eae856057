use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{MAX_YEAR_FOUR_DIGITS, ParseError, prelude::*};

/// How many digits a year occupies in parsed and formatted text.
///
/// `Four` is the common `1985` form. `Six` is the expanded representation
/// ISO 8601 allows by mutual agreement: a mandatory sign followed by six
/// digits (`+001985`), with centuries written as a sign plus four digits
/// (`+0019`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum YearDigits {
    #[default]
    #[display(fmt = "4")]
    Four,
    #[display(fmt = "6")]
    Six,
}

impl YearDigits {
    /// Digits in a year, sign excluded.
    pub const fn get(self) -> u8 {
        match self {
            Self::Four => 4,
            Self::Six => 6,
        }
    }

    /// Digits in a century, sign excluded.
    pub const fn century_digits(self) -> u8 {
        self.get() - 2
    }

    /// Whether a leading `+`/`-` is required.
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::Six)
    }

    /// The narrowest setting able to represent `year`.
    pub const fn fitting(year: i32) -> Self {
        if year >= 0 && year <= MAX_YEAR_FOUR_DIGITS {
            Self::Four
        } else {
            Self::Six
        }
    }

    /// Guesses the setting from the shape of some ISO text: a leading sign
    /// can only come from the expanded form.
    pub(crate) fn detect(text: &str) -> Self {
        if text.starts_with(['+', '-']) {
            Self::Six
        } else {
            Self::Four
        }
    }
}

impl TryFrom<u8> for YearDigits {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::Four),
            6 => Ok(Self::Six),
            other => Err(ParseError::InvalidYearDigits(other)),
        }
    }
}

impl From<YearDigits> for u8 {
    fn from(digits: YearDigits) -> Self {
        digits.get()
    }
}

impl FromStr for YearDigits {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u8>()
            .map_err(|_| ParseError::UnknownFormat(s.to_owned()))?;
        Self::try_from(value)
    }
}
