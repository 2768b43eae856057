use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_BEFORE_MONTH, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU8;

/// Days from 0000-03-01 to 1970-01-01 in the proleptic Gregorian calendar
const UNIX_EPOCH_SHIFT: i64 = 719_468;
/// Days in one 400-year Gregorian cycle
const DAYS_PER_ERA: i64 = 146_097;

/// A proleptic Gregorian year in the range `MIN_YEAR..=MAX_YEAR`.
/// Year 0 exists (astronomical numbering), so 1 BCE is year 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{_0}")]
#[serde(try_from = "i32", into = "i32")]
pub struct Year(i32);

impl Year {
    /// Creates a new Year, validating the six digit range
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is outside `MIN_YEAR..=MAX_YEAR`.
    pub fn new(value: i32) -> Result<Self, ParseError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(ParseError::InvalidYear(i64::from(value)));
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0)
    }
}

impl TryFrom<i32> for Year {
    type Error = ParseError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.0
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{_0}")]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        NonZeroU8::new(value)
            .filter(|m| m.get() <= MAX_MONTH)
            .map(Self)
            .ok_or(ParseError::InvalidMonth(value))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

/// A day-of-month value. Constructed through [`Day::new`] it is guaranteed
/// to exist in the given year and month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{_0}")]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the length of the given month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: i32, month: Month) -> Result<Self, ParseError> {
        NonZeroU8::new(value)
            .filter(|d| d.get() <= days_in_month(year, month.get()))
            .map(Self)
            .ok_or(ParseError::InvalidDay {
                year,
                month: month.get(),
                day: value,
            })
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    // Without year/month context only the 1..=31 bound can be checked.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        NonZeroU8::new(value)
            .filter(|d| d.get() <= DAYS_IN_MONTH[usize::from(JANUARY)])
            .map(Self)
            .ok_or(ParseError::InvalidDay {
                year: 0,
                month: 0,
                day: value,
            })
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

// Calendar arithmetic

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Day of the year (1-based) for a valid calendar date.
pub(crate) const fn ordinal_of(year: i32, month: u8, day: u8) -> u16 {
    let leap_shift = if month > FEBRUARY && is_leap_year(year) { 1 } else { 0 };
    DAYS_BEFORE_MONTH[month as usize] + leap_shift + day as u16
}

/// Days since 1970-01-01 for a valid calendar date.
pub(crate) const fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let y = if month <= FEBRUARY { year as i64 - 1 } else { year as i64 };
    let era = y.div_euclid(400);
    let year_of_era = y - era * 400;
    let shifted_month = (month as i64 + 9) % 12;
    let day_of_year = (153 * shifted_month + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_ERA + day_of_era - UNIX_EPOCH_SHIFT
}

/// Inverse of [`days_from_civil`]: `(year, month, day)`.
pub(crate) const fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + UNIX_EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let day_of_era = z - era * DAYS_PER_ERA;
    let year_of_era = (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * shifted_month + 2) / 5 + 1) as u8;
    let month = (if shifted_month < 10 { shifted_month + 3 } else { shifted_month - 9 }) as u8;
    let year = year_of_era + era * 400 + if month <= FEBRUARY { 1 } else { 0 };
    (year, month, day)
}

/// ISO weekday, 1 = Monday .. 7 = Sunday. 1970-01-01 was a Thursday.
pub(crate) const fn weekday_from_days(days: i64) -> u8 {
    ((days + 3).rem_euclid(7) + 1) as u8
}

/// Days-since-epoch of the Monday starting ISO week 1 of `iso_year`,
/// i.e. the week holding the year's first Thursday (equivalently January 4th).
pub(crate) const fn iso_week_one_monday(iso_year: i32) -> i64 {
    let january_fourth = days_from_civil(iso_year, JANUARY, 4);
    january_fourth - (weekday_from_days(january_fourth) as i64 - 1)
}

/// Number of ISO weeks (52 or 53) in `iso_year`.
pub const fn iso_weeks_in_year(iso_year: i32) -> u8 {
    ((iso_week_one_monday(iso_year + 1) - iso_week_one_monday(iso_year)) / 7) as u8
}

/// ISO week date `(iso_year, week, weekday)` of a days-since-epoch value.
pub(crate) const fn iso_week_from_days(days: i64) -> (i64, u8, u8) {
    let weekday = weekday_from_days(days);
    // The Thursday of a week decides which ISO year the week belongs to.
    let thursday = days + (4 - weekday as i64);
    let (iso_year, _, _) = civil_from_days(thursday);
    let week = (thursday - days_from_civil(iso_year as i32, JANUARY, MIN_DAY)) / 7 + 1;
    (iso_year, week as u8, weekday)
}
