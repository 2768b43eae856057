//! Variant dispatch and field resolution.
//!
//! Matching a pattern yields a [`Parsed`] bag of raw numeric fields. Only
//! resolution checks ranges, so a well-shaped but impossible value such as
//! `1985-13-01` fails with a precise error instead of falling through to the
//! next variant.

use crate::{
    Date, DateFormat, DateTime, FixedOffset, Offset, ParseError, Precision, Sign, Style, Time, TimeFormat, YearDigits,
    consts::{
        DATETIME_SEPARATOR, JANUARY, MAX_FRACTION_DIGITS, MIN_DAY, NANOS_PER_MICRO, NANOS_PER_SECOND,
        SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
    },
    format::styles_agree,
    pattern::{self, Pattern},
};

/// A decimal fraction `numerator / denominator` of the finest time field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fraction {
    numerator:   u128,
    denominator: u128,
}

impl Fraction {
    /// Digits past [`MAX_FRACTION_DIGITS`] are below nanosecond resolution
    /// for any unit and are ignored.
    pub(crate) fn from_digits(digits: &str) -> Self {
        let significant = &digits.as_bytes()[..digits.len().min(MAX_FRACTION_DIGITS)];
        let numerator = significant
            .iter()
            .fold(0_u128, |acc, digit| acc * 10 + u128::from(digit - b'0'));
        Self {
            numerator,
            denominator: 10_u128.pow(significant.len() as u32),
        }
    }

    /// The fraction of `unit`, rounded down.
    #[allow(clippy::cast_possible_truncation)]
    const fn of(self, unit: u64) -> u64 {
        (self.numerator * unit as u128 / self.denominator) as u64
    }
}

/// A matched offset before range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OffsetField {
    Utc,
    Fixed { sign: Sign, hours: u8, minutes: u8 },
}

impl OffsetField {
    fn resolve(self) -> Result<Offset, ParseError> {
        match self {
            Self::Utc => Ok(Offset::Utc),
            Self::Fixed { sign, hours, minutes } => FixedOffset::new(sign, hours, minutes).map(Offset::Fixed),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Parsed {
    pub(crate) negative:     bool,
    pub(crate) century:      Option<u32>,
    pub(crate) year:         Option<u32>,
    pub(crate) month:        Option<u8>,
    pub(crate) day:          Option<u8>,
    pub(crate) ordinal:      Option<u16>,
    pub(crate) week:         Option<u8>,
    pub(crate) weekday:      Option<u8>,
    pub(crate) hour:         Option<u8>,
    pub(crate) minute:       Option<u8>,
    pub(crate) second:       Option<u8>,
    pub(crate) microsecond:  Option<u32>,
    pub(crate) fraction:     Option<Fraction>,
    pub(crate) offset:       Option<OffsetField>,
    pub(crate) offset_style: Option<Style>,
}

impl Parsed {
    const fn signed(&self, magnitude: u32) -> i32 {
        // Year-like fields hold at most six digits.
        #[allow(clippy::cast_possible_wrap)]
        let value = magnitude as i32;
        if self.negative { -value } else { value }
    }

    const fn has_calendar_fields(&self) -> bool {
        self.month.is_some()
            || self.day.is_some()
            || self.ordinal.is_some()
            || self.week.is_some()
            || self.weekday.is_some()
    }

    /// Resolves the date fields. Reduced forms are anchored at their first
    /// day and remember their precision; a century `N` names year `N*100+1`.
    pub(crate) fn to_date(&self) -> Result<Date, ParseError> {
        if let Some(century) = self.century {
            if self.year.is_some() || self.has_calendar_fields() {
                return Err(ParseError::ConflictingFields("date"));
            }
            let year = self.signed(century * 100 + 1);
            return Ok(Date::new(year, JANUARY, MIN_DAY)?.with_precision(Precision::Century));
        }

        let year = self.signed(self.year.ok_or(ParseError::MissingField("year"))?);
        match (self.month, self.day, self.ordinal, self.week, self.weekday) {
            (None, None, None, None, None) => Ok(Date::new(year, JANUARY, MIN_DAY)?.with_precision(Precision::Year)),
            (Some(month), None, None, None, None) => {
                Ok(Date::new(year, month, MIN_DAY)?.with_precision(Precision::Month))
            }
            (Some(month), Some(day), None, None, None) => Date::new(year, month, day),
            (None, None, Some(ordinal), None, None) => Date::from_ordinal(year, ordinal),
            (None, None, None, Some(week), None) => {
                Ok(Date::from_iso_week(year, week, 1)?.with_precision(Precision::Week))
            }
            (None, None, None, Some(week), Some(weekday)) => Date::from_iso_week(year, week, weekday),
            _ => Err(ParseError::ConflictingFields("date")),
        }
    }

    /// Resolves the time fields, expanding a fraction of the finest field
    /// into the finer ones.
    pub(crate) fn to_time(&self) -> Result<Time, ParseError> {
        let hour = self.hour.ok_or(ParseError::MissingField("hour"))?;
        let unit_seconds = match (self.minute, self.second) {
            (None, None) if self.microsecond.is_none() => SECONDS_PER_HOUR,
            (Some(_), None) if self.microsecond.is_none() => SECONDS_PER_MINUTE,
            (Some(_), Some(_)) => 1,
            _ => return Err(ParseError::ConflictingFields("time")),
        };

        let mut minute = self.minute.unwrap_or(0);
        let mut second = self.second.unwrap_or(0);
        let mut nanosecond = self.microsecond.map_or(0, |micros| micros * NANOS_PER_MICRO);
        if let Some(fraction) = self.fraction {
            let nanos = fraction.of(unit_seconds * NANOS_PER_SECOND);
            let whole_seconds = nanos / NANOS_PER_SECOND;
            // Both quotients are below 60 since the fraction is below one unit.
            #[allow(clippy::cast_possible_truncation)]
            let (extra_minutes, extra_seconds, nanos) = (
                (whole_seconds / SECONDS_PER_MINUTE) as u8,
                (whole_seconds % SECONDS_PER_MINUTE) as u8,
                (nanos % NANOS_PER_SECOND) as u32,
            );
            minute += extra_minutes;
            second += extra_seconds;
            nanosecond = nanos;
        }

        let offset = self.offset.map(OffsetField::resolve).transpose()?;
        Ok(Time::from_hms_nano(hour, minute, second, nanosecond)?.with_offset(offset))
    }
}

fn match_date_as(text: &str, format: DateFormat, year_digits: YearDigits) -> Option<Parsed> {
    match Pattern::compile(format.pattern()).match_prefix(text, year_digits) {
        Some((parsed, "")) => Some(parsed),
        _ => None,
    }
}

fn match_date(text: &str, year_digits: YearDigits) -> Result<(DateFormat, Parsed), ParseError> {
    if text.is_empty() {
        return Err(ParseError::EmptyInput("date"));
    }
    for format in DateFormat::DISPATCH_ORDER {
        if let Some(parsed) = match_date_as(text, format, year_digits) {
            trace!("Matched date {text:?} as {format}");
            return Ok((format, parsed));
        }
    }
    debug!("No date variant matches {text:?} with {year_digits} year digits");
    Err(ParseError::Unrecognized {
        kind:  "date",
        input: text.to_owned(),
    })
}

/// Matches a time body followed by an optional offset. A shape match whose
/// offset notation contradicts the time notation is an error, not a miss.
fn match_time_as(text: &str, format: TimeFormat) -> Result<Option<Parsed>, ParseError> {
    let Some((mut parsed, rest)) = Pattern::compile(format.pattern()).match_prefix(text, YearDigits::Four) else {
        return Ok(None);
    };
    let Some((offset, offset_style, "")) = pattern::match_offset(rest) else {
        return Ok(None);
    };
    if !styles_agree(format.style(), offset_style) {
        debug!("Time {text:?} mixes {format} with a {offset_style:?} offset");
        return Err(ParseError::MixedStyles(text.to_owned()));
    }
    parsed.offset = offset;
    parsed.offset_style = offset_style;
    Ok(Some(parsed))
}

fn match_time(text: &str) -> Result<(TimeFormat, Parsed), ParseError> {
    if text.is_empty() {
        return Err(ParseError::EmptyInput("time"));
    }
    for format in TimeFormat::DISPATCH_ORDER {
        if let Some(parsed) = match_time_as(text, format)? {
            trace!("Matched time {text:?} as {format}");
            return Ok((format, parsed));
        }
    }
    debug!("No time variant matches {text:?}");
    Err(ParseError::Unrecognized {
        kind:  "time",
        input: text.to_owned(),
    })
}

/// A standalone time may carry the `T` designator.
fn strip_designator(text: &str) -> &str {
    text.strip_prefix(DATETIME_SEPARATOR).unwrap_or(text)
}

pub(crate) fn date(text: &str, year_digits: YearDigits) -> Result<Date, ParseError> {
    let (_, parsed) = match_date(text, year_digits)?;
    parsed.to_date()
}

pub(crate) fn date_as(text: &str, format: DateFormat, year_digits: YearDigits) -> Result<Date, ParseError> {
    if text.is_empty() {
        return Err(ParseError::EmptyInput("date"));
    }
    match_date_as(text, format, year_digits)
        .ok_or_else(|| ParseError::Unrecognized {
            kind:  format.name(),
            input: text.to_owned(),
        })?
        .to_date()
}

pub(crate) fn time(text: &str) -> Result<Time, ParseError> {
    let (_, parsed) = match_time(strip_designator(text))?;
    parsed.to_time()
}

pub(crate) fn time_as(text: &str, format: TimeFormat) -> Result<Time, ParseError> {
    let body = strip_designator(text);
    if body.is_empty() {
        return Err(ParseError::EmptyInput("time"));
    }
    match_time_as(body, format)?
        .ok_or_else(|| ParseError::Unrecognized {
            kind:  format.name(),
            input: text.to_owned(),
        })?
        .to_time()
}

/// Splits on the single `T`, parses each half, and requires both halves to
/// use the same notation. An hour-only time takes its style from the offset.
pub(crate) fn datetime(text: &str, year_digits: YearDigits) -> Result<DateTime, ParseError> {
    if text.is_empty() {
        return Err(ParseError::EmptyInput("datetime"));
    }
    let mut halves = text.split(DATETIME_SEPARATOR);
    let (Some(date_text), Some(time_text), None) = (halves.next(), halves.next(), halves.next()) else {
        return Err(ParseError::Unrecognized {
            kind:  "datetime",
            input: text.to_owned(),
        });
    };

    let (date_format, date_parsed) = match_date(date_text, year_digits)?;
    let (time_format, time_parsed) = match_time(time_text)?;
    let time_style = time_format.style().or(time_parsed.offset_style);
    if !styles_agree(date_format.style(), time_style) {
        debug!("Datetime {text:?} mixes {date_format} with {time_format}");
        return Err(ParseError::MixedStyles(text.to_owned()));
    }

    Ok(DateTime::new(date_parsed.to_date()?, time_parsed.to_time()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date as ymd, offset, time as hms};

    #[test]
    fn test_fraction_of_unit() {
        struct TestCase {
            digits:   &'static str,
            unit:     u64,
            expected: u64,
        }

        let cases = [
            TestCase {
                digits:   "5",
                unit:     SECONDS_PER_HOUR * NANOS_PER_SECOND,
                expected: 1_800 * NANOS_PER_SECOND,
            },
            TestCase {
                digits:   "8",
                unit:     SECONDS_PER_MINUTE * NANOS_PER_SECOND,
                expected: 48 * NANOS_PER_SECOND,
            },
            TestCase {
                digits:   "123456789",
                unit:     NANOS_PER_SECOND,
                expected: 123_456_789,
            },
            TestCase {
                digits:   "0000001",
                unit:     NANOS_PER_SECOND,
                expected: 100,
            },
            TestCase {
                digits:   "99999999999999999999999",
                unit:     NANOS_PER_SECOND,
                expected: 999_999_999,
            },
        ];

        for case in &cases {
            assert_eq!(
                Fraction::from_digits(case.digits).of(case.unit),
                case.expected,
                "digits {}",
                case.digits
            );
        }
    }

    #[test]
    fn test_date_dispatch_variants() {
        struct TestCase {
            input:     &'static str,
            format:    DateFormat,
            expected:  Date,
            precision: Precision,
        }

        let cases = [
            TestCase {
                input:     "19",
                format:    DateFormat::Century,
                expected:  ymd(1901, 1, 1),
                precision: Precision::Century,
            },
            TestCase {
                input:     "1985",
                format:    DateFormat::Year,
                expected:  ymd(1985, 1, 1),
                precision: Precision::Year,
            },
            TestCase {
                input:     "1985-04",
                format:    DateFormat::ExtMonth,
                expected:  ymd(1985, 4, 1),
                precision: Precision::Month,
            },
            TestCase {
                input:     "19850412",
                format:    DateFormat::BasComplete,
                expected:  ymd(1985, 4, 12),
                precision: Precision::Day,
            },
            TestCase {
                input:     "1985-102",
                format:    DateFormat::ExtOrdComplete,
                expected:  ymd(1985, 4, 12),
                precision: Precision::Day,
            },
            TestCase {
                input:     "1985102",
                format:    DateFormat::BasOrdComplete,
                expected:  ymd(1985, 4, 12),
                precision: Precision::Day,
            },
            TestCase {
                input:     "1985-W15-5",
                format:    DateFormat::ExtWeekComplete,
                expected:  ymd(1985, 4, 12),
                precision: Precision::Day,
            },
            TestCase {
                input:     "1985W15",
                format:    DateFormat::BasWeek,
                expected:  ymd(1985, 4, 8),
                precision: Precision::Week,
            },
        ];

        for case in &cases {
            let (format, parsed) = match_date(case.input, YearDigits::Four).unwrap();
            assert_eq!(format, case.format, "input {}", case.input);
            let resolved = parsed.to_date().unwrap();
            assert_eq!(resolved, case.expected, "input {}", case.input);
            assert_eq!(resolved.precision(), case.precision, "input {}", case.input);
        }
    }

    #[test]
    fn test_date_basic_month_only_when_named() {
        assert!(matches!(
            date("198504", YearDigits::Four),
            Err(ParseError::Unrecognized { kind: "date", .. })
        ));
        let d = date_as("198504", DateFormat::BasMonth, YearDigits::Four).unwrap();
        assert_eq!(d, ymd(1985, 4, 1));
        assert_eq!(d.precision(), Precision::Month);
    }

    #[test]
    fn test_date_as_rejects_other_shapes() {
        let result = date_as("1985-04-12", DateFormat::BasComplete, YearDigits::Four);
        assert!(matches!(
            result,
            Err(ParseError::Unrecognized {
                kind: "date-bas-complete",
                ..
            })
        ));
    }

    #[test]
    fn test_date_range_errors() {
        assert!(matches!(
            date("1985-13-01", YearDigits::Four),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            date("1985-02-29", YearDigits::Four),
            Err(ParseError::InvalidDay { .. })
        ));
        assert!(matches!(
            date("1985-366", YearDigits::Four),
            Err(ParseError::InvalidOrdinal { .. })
        ));
        assert!(matches!(
            date("1985-W53-1", YearDigits::Four),
            Err(ParseError::InvalidWeek { .. })
        ));
        assert!(matches!(
            date("1985-W15-8", YearDigits::Four),
            Err(ParseError::InvalidWeekday(8))
        ));
    }

    #[test]
    fn test_six_digit_years() {
        assert_eq!(date("+001985-04-12", YearDigits::Six).unwrap(), ymd(1985, 4, 12));
        assert_eq!(date("-0000", YearDigits::Six).unwrap(), ymd(-1, 1, 1));
        assert_eq!(date("+0019", YearDigits::Six).unwrap(), ymd(1901, 1, 1));
        assert!(date("1985-04-12", YearDigits::Six).is_err());
    }

    #[test]
    fn test_time_variants_and_fractions() {
        struct TestCase {
            input:    &'static str,
            expected: Time,
        }

        let cases = [
            TestCase {
                input:    "232050",
                expected: hms(23, 20, 50),
            },
            TestCase {
                input:    "23:20:50.5",
                expected: Time::from_hms_nano(23, 20, 50, 500_000_000).unwrap(),
            },
            TestCase {
                input:    "2320,8",
                expected: hms(23, 20, 48),
            },
            TestCase {
                input:    "23,3",
                expected: hms(23, 18, 0),
            },
            TestCase {
                input:    "T10:15",
                expected: hms(10, 15, 0),
            },
            TestCase {
                input:    "24:00:00",
                expected: hms(24, 0, 0),
            },
            TestCase {
                input:    "1015Z",
                expected: hms(10, 15, 0).with_offset(Some(Offset::Utc)),
            },
            TestCase {
                input:    "10:15-05:30",
                expected: hms(10, 15, 0).with_offset(Some(offset(Sign::Minus, 5, 30))),
            },
            TestCase {
                input:    "10-05",
                expected: hms(10, 0, 0).with_offset(Some(offset(Sign::Minus, 5, 0))),
            },
        ];

        for case in &cases {
            assert_eq!(time(case.input).unwrap(), case.expected, "input {}", case.input);
        }
    }

    #[test]
    fn test_time_errors() {
        assert!(matches!(time("15:27:46+0100"), Err(ParseError::MixedStyles(_))));
        assert!(matches!(time("152746+01:00"), Err(ParseError::MixedStyles(_))));
        assert!(matches!(time("24:00:01"), Err(ParseError::InvalidTime { .. })));
        assert!(matches!(time("25"), Err(ParseError::InvalidTime { .. })));
        assert!(matches!(time("10:15+24:00"), Err(ParseError::InvalidOffset { .. })));
        assert!(matches!(time("10:15:"), Err(ParseError::Unrecognized { kind: "time", .. })));
        assert!(matches!(time(""), Err(ParseError::EmptyInput("time"))));
        assert!(matches!(time("T"), Err(ParseError::EmptyInput("time"))));
    }

    #[test]
    fn test_time_as() {
        assert_eq!(time_as("T1015", TimeFormat::BasMinute).unwrap(), hms(10, 15, 0));
        assert!(matches!(
            time_as("10:15", TimeFormat::BasMinute),
            Err(ParseError::Unrecognized {
                kind: "time-bas-minute",
                ..
            })
        ));
    }

    #[test]
    fn test_datetime_style_agreement() {
        let dt = datetime("19850412T1015+0400", YearDigits::Four).unwrap();
        assert_eq!(dt.date(), ymd(1985, 4, 12));
        assert_eq!(dt.time(), hms(10, 15, 0).with_offset(Some(offset(Sign::Plus, 4, 0))));

        // An hour-only time borrows the offset's style.
        assert!(datetime("1985-04-12T10+04:00", YearDigits::Four).is_ok());
        assert!(matches!(
            datetime("1985-04-12T10+0400", YearDigits::Four),
            Err(ParseError::MixedStyles(_))
        ));
        assert!(matches!(
            datetime("19850412T10:15", YearDigits::Four),
            Err(ParseError::MixedStyles(_))
        ));
        // Century and year carry no style.
        assert!(datetime("1985T10:15", YearDigits::Four).is_ok());
    }

    #[test]
    fn test_datetime_separator_count() {
        for input in ["1985-04-12", "1985-04-12T10:15T", "1985-04-12 10:15"] {
            assert!(
                matches!(
                    datetime(input, YearDigits::Four),
                    Err(ParseError::Unrecognized { kind: "datetime", .. })
                ),
                "input {input}"
            );
        }
        assert!(matches!(
            datetime("T10:15", YearDigits::Four),
            Err(ParseError::EmptyInput("date"))
        ));
    }

    #[test]
    fn test_conflicting_time_fields() {
        let parsed = Parsed {
            hour: Some(10),
            second: Some(5),
            ..Parsed::default()
        };
        assert!(matches!(parsed.to_time(), Err(ParseError::ConflictingFields("time"))));
    }
}
