//! Format patterns.
//!
//! A pattern is a strftime-like string: `%`-directives stand for numeric
//! fields, everything else is literal text. A compiled [`Pattern`] drives both
//! directions: rendering a value into text and matching text into the raw
//! fields a value is resolved from.
//!
//! | Directive | Field |
//! |-----------|-------|
//! | `%C` | century, 2 digits (sign + 4 with six-digit years) |
//! | `%Y` | year, 4 digits (sign + 6); the ISO week-year when `%W` is present |
//! | `%m` `%d` | month, day of month |
//! | `%j` | ordinal day, 3 digits |
//! | `%W` `%w` | ISO week, 2 digits; ISO weekday, 1 digit |
//! | `%H` `%M` `%S` | hour, minute, second |
//! | `%f` | microseconds, 6 digits |
//! | `%z` `%Z` `%h` | UTC offset: basic, extended, hours only |
//! | `%%` | a literal `%` |
//!
//! Unknown directives are kept as literal text.

use std::fmt::{self, Write};

use crate::{
    Date, DateTime, ParseError, Sign, Style, Time, TzFormat, YearDigits,
    consts::{MAX_YEAR_FOUR_DIGITS, TIME_SEPARATOR},
    parse::{Fraction, OffsetField, Parsed},
};

/// Error type for rendering a value under a pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The pattern needs a field the value does not carry, e.g. `%H` on a date.
    #[error("Directive {directive} needs a {field} the value does not carry")]
    MissingField {
        directive: &'static str,
        field:     &'static str,
    },

    /// The year cannot be written with the requested number of digits.
    #[error("Year {year} does not fit {digits} year digits")]
    YearOutOfRange { year: i32, digits: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Directive {
    Century,
    Year,
    Month,
    Day,
    Ordinal,
    Week,
    Weekday,
    Hour,
    Minute,
    Second,
    Microsecond,
    Offset(TzFormat),
}

impl Directive {
    const fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'C' => Self::Century,
            'Y' => Self::Year,
            'm' => Self::Month,
            'd' => Self::Day,
            'j' => Self::Ordinal,
            'W' => Self::Week,
            'w' => Self::Weekday,
            'H' => Self::Hour,
            'M' => Self::Minute,
            'S' => Self::Second,
            'f' => Self::Microsecond,
            'z' => Self::Offset(TzFormat::Basic),
            'Z' => Self::Offset(TzFormat::Extended),
            'h' => Self::Offset(TzFormat::Hour),
            _ => return None,
        })
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Century => "%C",
            Self::Year => "%Y",
            Self::Month => "%m",
            Self::Day => "%d",
            Self::Ordinal => "%j",
            Self::Week => "%W",
            Self::Weekday => "%w",
            Self::Hour => "%H",
            Self::Minute => "%M",
            Self::Second => "%S",
            Self::Microsecond => "%f",
            Self::Offset(format) => format.pattern(),
        }
    }

    /// Fields a fraction may be attached to.
    const fn takes_fraction(self) -> bool {
        matches!(self, Self::Hour | Self::Minute | Self::Second)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Item {
    Literal(char),
    Directive(Directive),
}

/// A compiled pattern string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    items:         Vec<Item>,
    /// `%Y` means the ISO week-numbering year.
    week_based:    bool,
    /// Index of the item after which a `,`/`.` fraction may appear.
    fraction_slot: Option<usize>,
}

impl Pattern {
    /// Compiles a pattern string. Compilation cannot fail: anything that is
    /// not a known directive is literal text.
    pub fn compile(pattern: &str) -> Self {
        let mut items = Vec::with_capacity(pattern.len());
        let mut chars = pattern.chars().peekable();
        while let Some(c) = chars.next() {
            if c != '%' {
                items.push(Item::Literal(c));
                continue;
            }
            match chars.peek().copied() {
                Some('%') => {
                    chars.next();
                    items.push(Item::Literal('%'));
                }
                Some(next) => match Directive::from_char(next) {
                    Some(directive) => {
                        chars.next();
                        items.push(Item::Directive(directive));
                    }
                    None => items.push(Item::Literal('%')),
                },
                None => items.push(Item::Literal('%')),
            }
        }

        let week_based = items.contains(&Item::Directive(Directive::Week));
        let fraction_slot = if items.contains(&Item::Directive(Directive::Microsecond)) {
            None
        } else {
            items
                .iter()
                .rposition(|item| matches!(item, Item::Directive(d) if d.takes_fraction()))
        };

        Self {
            items,
            week_based,
            fraction_slot,
        }
    }

    /// # Errors
    /// Returns `FormatError` if the pattern asks for time fields or the year
    /// does not fit `year_digits`.
    pub fn format_date(&self, date: &Date, year_digits: YearDigits) -> Result<String, FormatError> {
        self.render(Some(date), None, year_digits)
    }

    /// # Errors
    /// Returns `FormatError::MissingField` if the pattern asks for date fields.
    pub fn format_time(&self, time: &Time) -> Result<String, FormatError> {
        self.render(None, Some(time), YearDigits::Four)
    }

    /// # Errors
    /// Returns `FormatError::YearOutOfRange` if the year does not fit `year_digits`.
    pub fn format_datetime(&self, datetime: &DateTime, year_digits: YearDigits) -> Result<String, FormatError> {
        self.render(Some(&datetime.date()), Some(&datetime.time()), year_digits)
    }

    fn render(&self, date: Option<&Date>, time: Option<&Time>, year_digits: YearDigits) -> Result<String, FormatError> {
        let mut out = String::with_capacity(self.items.len() * 2);
        for item in &self.items {
            match *item {
                Item::Literal(c) => out.push(c),
                Item::Directive(directive) => self.render_directive(&mut out, directive, date, time, year_digits)?,
            }
        }
        Ok(out)
    }

    fn render_directive(
        &self,
        out: &mut String,
        directive: Directive,
        date: Option<&Date>,
        time: Option<&Time>,
        year_digits: YearDigits,
    ) -> Result<(), FormatError> {
        let need_date = || {
            date.ok_or(FormatError::MissingField {
                directive: directive.as_str(),
                field:     "date",
            })
        };
        let need_time = || {
            time.ok_or(FormatError::MissingField {
                directive: directive.as_str(),
                field:     "time",
            })
        };

        match directive {
            Directive::Century => write_century(out, need_date()?.year(), year_digits)?,
            Directive::Year => {
                let date = need_date()?;
                let year = if self.week_based {
                    date.iso_week().0
                } else {
                    date.year()
                };
                write_year(out, year, year_digits)?;
            }
            Directive::Month => push(out, format_args!("{:02}", need_date()?.month())),
            Directive::Day => push(out, format_args!("{:02}", need_date()?.day())),
            Directive::Ordinal => push(out, format_args!("{:03}", need_date()?.ordinal())),
            Directive::Week => push(out, format_args!("{:02}", need_date()?.iso_week().1)),
            Directive::Weekday => push(out, format_args!("{}", need_date()?.weekday())),
            Directive::Hour => push(out, format_args!("{:02}", need_time()?.hour())),
            Directive::Minute => push(out, format_args!("{:02}", need_time()?.minute())),
            Directive::Second => push(out, format_args!("{:02}", need_time()?.second())),
            Directive::Microsecond => push(out, format_args!("{:06}", need_time()?.microsecond())),
            // A time without an offset renders the placeholder as nothing.
            Directive::Offset(format) => {
                if let Some(offset) = need_time()?.offset() {
                    out.push_str(&offset.isoformat(format));
                }
            }
        }
        Ok(())
    }

    /// Parses a date laid out exactly as this pattern describes.
    ///
    /// # Errors
    /// Returns `ParseError` if the text does not follow the pattern or the
    /// matched fields do not name a valid date.
    pub fn parse_date(&self, text: &str, year_digits: YearDigits) -> Result<Date, ParseError> {
        self.match_exact(text, year_digits, "date")?.to_date()
    }

    /// Parses a time laid out exactly as this pattern describes.
    ///
    /// # Errors
    /// Returns `ParseError` if the text does not follow the pattern or the
    /// matched fields do not name a valid time.
    pub fn parse_time(&self, text: &str) -> Result<Time, ParseError> {
        self.match_exact(text, YearDigits::Four, "time")?.to_time()
    }

    /// Parses a datetime laid out exactly as this pattern describes.
    ///
    /// # Errors
    /// Returns `ParseError` if the text does not follow the pattern or either
    /// half is invalid.
    pub fn parse_datetime(&self, text: &str, year_digits: YearDigits) -> Result<DateTime, ParseError> {
        let parsed = self.match_exact(text, year_digits, "datetime")?;
        Ok(DateTime::new(parsed.to_date()?, parsed.to_time()?))
    }

    fn match_exact(&self, text: &str, year_digits: YearDigits, kind: &'static str) -> Result<Parsed, ParseError> {
        if text.is_empty() {
            return Err(ParseError::EmptyInput(kind));
        }
        match self.match_prefix(text, year_digits) {
            Some((parsed, "")) => Ok(parsed),
            _ => Err(ParseError::Unrecognized {
                kind,
                input: text.to_owned(),
            }),
        }
    }

    /// Matches the pattern against the start of `input` by shape only (literal
    /// positions and digit counts). Returns the raw fields and the unmatched
    /// remainder; range checks happen when the fields are resolved.
    pub(crate) fn match_prefix<'a>(&self, input: &'a str, year_digits: YearDigits) -> Option<(Parsed, &'a str)> {
        let mut parsed = Parsed::default();
        let mut rest = input;
        for (index, item) in self.items.iter().enumerate() {
            rest = match *item {
                Item::Literal(c) => rest.strip_prefix(c)?,
                Item::Directive(directive) => scan_directive(&mut parsed, directive, rest, year_digits)?,
            };
            if self.fraction_slot == Some(index) {
                rest = scan_fraction(&mut parsed, rest)?;
            }
        }
        Some((parsed, rest))
    }
}

fn write_year(out: &mut String, year: i32, year_digits: YearDigits) -> Result<(), FormatError> {
    match year_digits {
        YearDigits::Four => {
            if !(0..=MAX_YEAR_FOUR_DIGITS).contains(&year) {
                return Err(FormatError::YearOutOfRange {
                    year,
                    digits: year_digits.get(),
                });
            }
            push(out, format_args!("{year:04}"));
        }
        YearDigits::Six => push(out, format_args!("{}{:06}", sign_of(year), year.unsigned_abs())),
    }
    Ok(())
}

fn write_century(out: &mut String, year: i32, year_digits: YearDigits) -> Result<(), FormatError> {
    match year_digits {
        YearDigits::Four => {
            if !(0..=MAX_YEAR_FOUR_DIGITS).contains(&year) {
                return Err(FormatError::YearOutOfRange {
                    year,
                    digits: year_digits.get(),
                });
            }
            push(out, format_args!("{:02}", year / 100));
        }
        YearDigits::Six => push(out, format_args!("{}{:04}", sign_of(year), year.unsigned_abs() / 100)),
    }
    Ok(())
}

/// Writing into a `String` cannot fail.
fn push(out: &mut String, args: fmt::Arguments<'_>) {
    let _ = out.write_fmt(args);
}

const fn sign_of(year: i32) -> Sign {
    if year < 0 { Sign::Minus } else { Sign::Plus }
}

/// Exactly `count` ASCII digits.
fn digits(input: &str, count: usize) -> Option<(u32, &str)> {
    let head = input.as_bytes().get(..count)?;
    if !head.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let value = head
        .iter()
        .fold(0_u32, |acc, digit| acc * 10 + u32::from(digit - b'0'));
    Some((value, input.get(count..)?))
}

fn sign(input: &str) -> Option<(Sign, &str)> {
    if let Some(rest) = input.strip_prefix('+') {
        Some((Sign::Plus, rest))
    } else {
        input.strip_prefix('-').map(|rest| (Sign::Minus, rest))
    }
}

/// A year-like field: unsigned with four-digit years, mandatory sign otherwise.
fn signed_digits(input: &str, year_digits: YearDigits, count: u8) -> Option<(bool, u32, &str)> {
    let (negative, input) = if year_digits.is_signed() {
        let (sign, rest) = sign(input)?;
        (sign == Sign::Minus, rest)
    } else {
        (false, input)
    };
    let (value, rest) = digits(input, usize::from(count))?;
    Some((negative, value, rest))
}

fn two_digits(input: &str) -> Option<(u8, &str)> {
    digits(input, 2).map(|(value, rest)| (value as u8, rest))
}

fn scan_directive<'a>(
    parsed: &mut Parsed,
    directive: Directive,
    input: &'a str,
    year_digits: YearDigits,
) -> Option<&'a str> {
    let rest = match directive {
        Directive::Century => {
            let (negative, century, rest) = signed_digits(input, year_digits, year_digits.century_digits())?;
            parsed.negative = negative;
            parsed.century = Some(century);
            rest
        }
        Directive::Year => {
            let (negative, year, rest) = signed_digits(input, year_digits, year_digits.get())?;
            parsed.negative = negative;
            parsed.year = Some(year);
            rest
        }
        Directive::Month => {
            let (month, rest) = two_digits(input)?;
            parsed.month = Some(month);
            rest
        }
        Directive::Day => {
            let (day, rest) = two_digits(input)?;
            parsed.day = Some(day);
            rest
        }
        Directive::Ordinal => {
            let (ordinal, rest) = digits(input, 3)?;
            parsed.ordinal = Some(ordinal as u16);
            rest
        }
        Directive::Week => {
            let (week, rest) = two_digits(input)?;
            parsed.week = Some(week);
            rest
        }
        Directive::Weekday => {
            let (weekday, rest) = digits(input, 1)?;
            parsed.weekday = Some(weekday as u8);
            rest
        }
        Directive::Hour => {
            let (hour, rest) = two_digits(input)?;
            parsed.hour = Some(hour);
            rest
        }
        Directive::Minute => {
            let (minute, rest) = two_digits(input)?;
            parsed.minute = Some(minute);
            rest
        }
        Directive::Second => {
            let (second, rest) = two_digits(input)?;
            parsed.second = Some(second);
            rest
        }
        Directive::Microsecond => {
            let (microsecond, rest) = digits(input, 6)?;
            parsed.microsecond = Some(microsecond);
            rest
        }
        Directive::Offset(format) => {
            let (offset, style, rest) = match_offset(input)?;
            let compatible = match format {
                TzFormat::Basic => style != Some(Style::Extended),
                TzFormat::Extended => style != Some(Style::Basic),
                TzFormat::Hour => style.is_none(),
            };
            if !compatible {
                return None;
            }
            parsed.offset = offset;
            parsed.offset_style = style;
            rest
        }
    };
    Some(rest)
}

/// An optional `,`/`.` decimal fraction. A decimal mark must be followed by
/// at least one digit.
fn scan_fraction<'a>(parsed: &mut Parsed, input: &'a str) -> Option<&'a str> {
    let Some(after_mark) = input.strip_prefix([',', '.']) else {
        return Some(input);
    };
    let count = after_mark.bytes().take_while(u8::is_ascii_digit).count();
    if count == 0 {
        return None;
    }
    let (digits, rest) = after_mark.split_at(count);
    parsed.fraction = Some(Fraction::from_digits(digits));
    Some(rest)
}

/// An optional UTC offset in any notation: `Z`/`z`, `±HH:MM`, `±HHMM` or
/// `±HH`. The returned style is `None` for notations that carry no
/// separator information. Nothing is consumed if no offset starts here.
pub(crate) fn match_offset(input: &str) -> Option<(Option<OffsetField>, Option<Style>, &str)> {
    if let Some(rest) = input.strip_prefix(['Z', 'z']) {
        return Some((Some(OffsetField::Utc), None, rest));
    }
    let Some((sign, rest)) = sign(input) else {
        return Some((None, None, input));
    };
    let (hours, rest) = two_digits(rest)?;
    if let Some(after_colon) = rest.strip_prefix(TIME_SEPARATOR) {
        let (minutes, rest) = two_digits(after_colon)?;
        return Some((
            Some(OffsetField::Fixed { sign, hours, minutes }),
            Some(Style::Extended),
            rest,
        ));
    }
    if let Some((minutes, rest)) = two_digits(rest) {
        return Some((
            Some(OffsetField::Fixed { sign, hours, minutes }),
            Some(Style::Basic),
            rest,
        ));
    }
    Some((
        Some(OffsetField::Fixed {
            sign,
            hours,
            minutes: 0,
        }),
        None,
        rest,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Offset, consts::*,
        test_utils::{date, offset, time},
    };

    #[test]
    fn test_compile_items() {
        let pattern = Pattern::compile("%Y-W%W-%w");
        assert_eq!(
            pattern.items,
            vec![
                Item::Directive(Directive::Year),
                Item::Literal('-'),
                Item::Literal('W'),
                Item::Directive(Directive::Week),
                Item::Literal('-'),
                Item::Directive(Directive::Weekday),
            ]
        );
        assert!(pattern.week_based);
        assert_eq!(pattern.fraction_slot, None);
    }

    #[test]
    fn test_compile_literal_percent_and_unknown() {
        let pattern = Pattern::compile("%%%q%");
        assert_eq!(
            pattern.items,
            vec![
                Item::Literal('%'),
                Item::Literal('%'),
                Item::Literal('q'),
                Item::Literal('%'),
            ]
        );
    }

    #[test]
    fn test_fraction_slot_is_finest_time_field() {
        assert_eq!(Pattern::compile("%H:%M").fraction_slot, Some(2));
        assert_eq!(Pattern::compile("%H%z").fraction_slot, Some(0));
        assert_eq!(Pattern::compile("%H:%M:%S.%f").fraction_slot, None);
        assert_eq!(Pattern::compile("%Y-%m-%d").fraction_slot, None);
    }

    #[test]
    fn test_format_date_variants() {
        struct TestCase {
            pattern:     &'static str,
            year_digits: YearDigits,
            date:        Date,
            expected:    &'static str,
        }

        let cases = [
            TestCase {
                pattern:     DATE_CENTURY,
                year_digits: YearDigits::Four,
                date:        date(1901, 1, 1),
                expected:    "19",
            },
            TestCase {
                pattern:     DATE_CENTURY,
                year_digits: YearDigits::Six,
                date:        date(1901, 1, 1),
                expected:    "+0019",
            },
            TestCase {
                pattern:     DATE_YEAR,
                year_digits: YearDigits::Six,
                date:        date(1985, 1, 1),
                expected:    "+001985",
            },
            TestCase {
                pattern:     DATE_BAS_COMPLETE,
                year_digits: YearDigits::Four,
                date:        date(1985, 4, 12),
                expected:    "19850412",
            },
            TestCase {
                pattern:     DATE_EXT_ORD_COMPLETE,
                year_digits: YearDigits::Four,
                date:        date(1985, 4, 12),
                expected:    "1985-102",
            },
            TestCase {
                pattern:     DATE_BAS_WEEK_COMPLETE,
                year_digits: YearDigits::Four,
                date:        date(1985, 4, 12),
                expected:    "1985W155",
            },
            TestCase {
                pattern:     DATE_EXT_WEEK_COMPLETE,
                year_digits: YearDigits::Six,
                date:        date(1985, 4, 12),
                expected:    "+001985-W15-5",
            },
            TestCase {
                pattern:     DATE_EXT_WEEK_COMPLETE,
                year_digits: YearDigits::Four,
                date:        date(2008, 12, 29),
                expected:    "2009-W01-1",
            },
            TestCase {
                pattern:     "%d/%m/%Y",
                year_digits: YearDigits::Four,
                date:        date(1985, 4, 12),
                expected:    "12/04/1985",
            },
        ];

        for case in &cases {
            assert_eq!(
                Pattern::compile(case.pattern)
                    .format_date(&case.date, case.year_digits)
                    .unwrap(),
                case.expected,
                "pattern {}",
                case.pattern
            );
        }
    }

    #[test]
    fn test_format_negative_six_digit_year() {
        let d = date(-1985, 4, 12);
        assert_eq!(
            Pattern::compile(DATE_EXT_COMPLETE)
                .format_date(&d, YearDigits::Six)
                .unwrap(),
            "-001985-04-12"
        );
        assert_eq!(
            Pattern::compile(DATE_CENTURY)
                .format_date(&d, YearDigits::Six)
                .unwrap(),
            "-0019"
        );
    }

    #[test]
    fn test_format_year_out_of_range() {
        let result = Pattern::compile(DATE_YEAR).format_date(&date(12_345, 1, 1), YearDigits::Four);
        assert_eq!(
            result,
            Err(FormatError::YearOutOfRange {
                year:   12_345,
                digits: 4,
            })
        );
        let result = Pattern::compile(DATE_CENTURY).format_date(&date(-1, 1, 1), YearDigits::Four);
        assert!(matches!(result, Err(FormatError::YearOutOfRange { .. })));
    }

    #[test]
    fn test_format_error_display() {
        let missing = FormatError::MissingField {
            directive: "%H",
            field:     "time",
        };
        let out_of_range = FormatError::YearOutOfRange {
            year:   -44,
            digits: 4,
        };
        for error in [missing, out_of_range] {
            let expected = match &error {
                FormatError::MissingField { .. } => "Directive %H needs a time the value does not carry",
                FormatError::YearOutOfRange { .. } => "Year -44 does not fit 4 year digits",
            };
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_format_missing_fields() {
        let result = Pattern::compile(TIME_EXT_COMPLETE).format_date(&date(1985, 4, 12), YearDigits::Four);
        assert_eq!(
            result,
            Err(FormatError::MissingField {
                directive: "%H",
                field:     "time",
            })
        );

        let result = Pattern::compile(DATE_EXT_COMPLETE).format_time(&time(10, 15, 0));
        assert!(matches!(result, Err(FormatError::MissingField { field: "date", .. })));
    }

    #[test]
    fn test_format_time_and_offsets() {
        let t = time(15, 27, 46).with_offset(Some(offset(Sign::Minus, 5, 0)));
        let render = |pattern: &str| Pattern::compile(pattern).format_time(&t).unwrap();
        assert_eq!(render("%H%M%S%z"), "152746-0500");
        assert_eq!(render("%H:%M:%S%Z"), "15:27:46-05:00");
        assert_eq!(render("%H%M%S%h"), "152746-05");

        let naive = time(23, 20, 50);
        assert_eq!(Pattern::compile("%H%M%S%z").format_time(&naive).unwrap(), "232050");

        let utc = time(23, 20, 30).with_offset(Some(Offset::Utc));
        assert_eq!(Pattern::compile("%H:%M%Z").format_time(&utc).unwrap(), "23:20Z");
    }

    #[test]
    fn test_format_microseconds() {
        let t = Time::from_hms_nano(23, 20, 50, 500_000_000).unwrap();
        assert_eq!(
            Pattern::compile("%H:%M:%S.%f").format_time(&t).unwrap(),
            "23:20:50.500000"
        );
    }

    #[test]
    fn test_match_prefix_leaves_remainder() {
        let (parsed, rest) = Pattern::compile("%H%M")
            .match_prefix("1015+0400", YearDigits::Four)
            .unwrap();
        assert_eq!(parsed.hour, Some(10));
        assert_eq!(parsed.minute, Some(15));
        assert_eq!(rest, "+0400");
    }

    #[test]
    fn test_match_prefix_shape_only() {
        let pattern = Pattern::compile(DATE_EXT_COMPLETE);
        // Out-of-range values still match the shape.
        assert!(pattern.match_prefix("1985-13-45", YearDigits::Four).is_some());
        assert!(pattern.match_prefix("1985-4-12", YearDigits::Four).is_none());
        assert!(pattern.match_prefix("85-04-12", YearDigits::Four).is_none());
        assert!(pattern.match_prefix("+001985-04-12", YearDigits::Four).is_none());
        assert!(pattern.match_prefix("001985-04-12", YearDigits::Six).is_none());
    }

    #[test]
    fn test_match_fraction_requires_digit() {
        let pattern = Pattern::compile("%H:%M");
        assert!(pattern.match_prefix("23:20,", YearDigits::Four).is_none());
        let (parsed, rest) = pattern.match_prefix("23:20.8Z", YearDigits::Four).unwrap();
        assert!(parsed.fraction.is_some());
        assert_eq!(rest, "Z");
    }

    #[test]
    fn test_match_offset_notations() {
        struct TestCase {
            input:    &'static str,
            offset:   Option<OffsetField>,
            style:    Option<Style>,
            rest:     &'static str,
        }

        let cases = [
            TestCase {
                input:  "Z",
                offset: Some(OffsetField::Utc),
                style:  None,
                rest:   "",
            },
            TestCase {
                input:  "z",
                offset: Some(OffsetField::Utc),
                style:  None,
                rest:   "",
            },
            TestCase {
                input:  "+0100",
                offset: Some(OffsetField::Fixed {
                    sign:    Sign::Plus,
                    hours:   1,
                    minutes: 0,
                }),
                style:  Some(Style::Basic),
                rest:   "",
            },
            TestCase {
                input:  "-05:30",
                offset: Some(OffsetField::Fixed {
                    sign:    Sign::Minus,
                    hours:   5,
                    minutes: 30,
                }),
                style:  Some(Style::Extended),
                rest:   "",
            },
            TestCase {
                input:  "-05",
                offset: Some(OffsetField::Fixed {
                    sign:    Sign::Minus,
                    hours:   5,
                    minutes: 0,
                }),
                style:  None,
                rest:   "",
            },
            TestCase {
                input:  "",
                offset: None,
                style:  None,
                rest:   "",
            },
            TestCase {
                input:  "x",
                offset: None,
                style:  None,
                rest:   "x",
            },
        ];

        for case in &cases {
            let (offset, style, rest) = match_offset(case.input).unwrap();
            assert_eq!(offset, case.offset, "input {:?}", case.input);
            assert_eq!(style, case.style, "input {:?}", case.input);
            assert_eq!(rest, case.rest, "input {:?}", case.input);
        }

        assert!(match_offset("+1").is_none());
        assert!(match_offset("+01:3").is_none());
    }

    #[test]
    fn test_offset_directive_enforces_notation() {
        let basic = Pattern::compile("%H%z");
        assert!(basic.match_prefix("10+01:00", YearDigits::Four).is_none());
        assert!(basic.match_prefix("10+0100", YearDigits::Four).is_some());
        // The offset is optional.
        assert!(basic.match_prefix("10", YearDigits::Four).is_some());

        let hour_only = Pattern::compile("%H%h");
        assert!(hour_only.match_prefix("10+0130", YearDigits::Four).is_none());
        assert!(hour_only.match_prefix("10-05", YearDigits::Four).is_some());
    }

    #[test]
    fn test_lenient_parse_custom_pattern() {
        let pattern = Pattern::compile("%d/%m/%Y");
        assert_eq!(pattern.parse_date("12/04/1985", YearDigits::Four).unwrap(), date(1985, 4, 12));
        assert!(matches!(
            pattern.parse_date("12/04/1985 ", YearDigits::Four),
            Err(ParseError::Unrecognized { kind: "date", .. })
        ));
        assert!(matches!(
            pattern.parse_date("", YearDigits::Four),
            Err(ParseError::EmptyInput("date"))
        ));
    }

    #[test]
    fn test_lenient_parse_conflicting_fields() {
        let pattern = Pattern::compile("%Y %d");
        assert!(matches!(
            pattern.parse_date("1985 12", YearDigits::Four),
            Err(ParseError::ConflictingFields("date"))
        ));
    }

    #[test]
    fn test_lenient_parse_datetime() {
        let pattern = Pattern::compile("%d.%m.%Y %H:%M%Z");
        let dt = pattern.parse_datetime("12.04.1985 10:15+04:00", YearDigits::Four).unwrap();
        assert_eq!(dt.date(), date(1985, 4, 12));
        assert_eq!(dt.time(), time(10, 15, 0).with_offset(Some(offset(Sign::Plus, 4, 0))));
    }

    #[test]
    fn test_lenient_parse_time_with_microseconds() {
        let pattern = Pattern::compile("%H:%M:%S.%f");
        let t = pattern.parse_time("23:20:50.000250").unwrap();
        assert_eq!(t.nanosecond(), 250_000);
    }
}
