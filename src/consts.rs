/// Largest year magnitude representable with six year digits
pub const MAX_YEAR: i32 = 999_999;
/// Smallest year representable with six year digits
pub const MIN_YEAR: i32 = -999_999;

/// Largest year that fits the unsigned four digit form
pub const MAX_YEAR_FOUR_DIGITS: i32 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days before the first of each month in a common year (index 0 unused)
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] = [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Maximum hour; only valid as the end-of-day instant 24:00:00
pub const MAX_HOUR: u8 = 24;
/// Maximum minute and second value
pub const MAX_MINUTE: u8 = 59;
/// Maximum offset hour magnitude
pub const MAX_OFFSET_HOUR: u8 = 23;

pub(crate) const SECONDS_PER_MINUTE: u64 = 60;
pub(crate) const SECONDS_PER_HOUR: u64 = 3_600;
pub(crate) const NANOS_PER_SECOND: u64 = 1_000_000_000;
pub(crate) const NANOS_PER_MICRO: u32 = 1_000;

/// Fraction digits taken into account; the rest are ignored
pub(crate) const MAX_FRACTION_DIGITS: usize = 18;

/// Date component separator (extended format)
pub const DATE_SEPARATOR: char = '-';
/// Time component separator (extended format)
pub const TIME_SEPARATOR: char = ':';
/// Separator between the date and time halves of a datetime
pub const DATETIME_SEPARATOR: char = 'T';
/// Week designator in week dates
pub const WEEK_DESIGNATOR: char = 'W';

/// Century: `19`
pub const DATE_CENTURY: &str = "%C";
/// Year: `1985`
pub const DATE_YEAR: &str = "%Y";
/// Calendar month, basic format: `198504`
pub const DATE_BAS_MONTH: &str = "%Y%m";
/// Calendar month, extended format: `1985-04`
pub const DATE_EXT_MONTH: &str = "%Y-%m";
/// Calendar month (extended format)
pub const DATE_MONTH: &str = DATE_EXT_MONTH;
/// Complete calendar date, basic format: `19850412`
pub const DATE_BAS_COMPLETE: &str = "%Y%m%d";
/// Complete calendar date, extended format: `1985-04-12`
pub const DATE_EXT_COMPLETE: &str = "%Y-%m-%d";
/// Complete ordinal date, basic format: `1985102`
pub const DATE_BAS_ORD_COMPLETE: &str = "%Y%j";
/// Complete ordinal date, extended format: `1985-102`
pub const DATE_EXT_ORD_COMPLETE: &str = "%Y-%j";
/// Complete week date, basic format: `1985W155`
pub const DATE_BAS_WEEK_COMPLETE: &str = "%YW%W%w";
/// Complete week date, extended format: `1985-W15-5`
pub const DATE_EXT_WEEK_COMPLETE: &str = "%Y-W%W-%w";
/// Week, basic format: `1985W15`
pub const DATE_BAS_WEEK: &str = "%YW%W";
/// Week, extended format: `1985-W15`
pub const DATE_EXT_WEEK: &str = "%Y-W%W";

/// Hour: `23`
pub const TIME_HOUR: &str = "%H";
/// Hour and minute, basic format: `2320`
pub const TIME_BAS_MINUTE: &str = "%H%M";
/// Hour and minute, extended format: `23:20`
pub const TIME_EXT_MINUTE: &str = "%H:%M";
/// Complete time, basic format: `232050`
pub const TIME_BAS_COMPLETE: &str = "%H%M%S";
/// Complete time, extended format: `23:20:50`
pub const TIME_EXT_COMPLETE: &str = "%H:%M:%S";

/// Offset, basic format: `+0100`
pub const TZ_BAS: &str = "%z";
/// Offset, extended format: `+01:00`
pub const TZ_EXT: &str = "%Z";
/// Offset, hours only: `+01`
pub const TZ_HOUR: &str = "%h";

/// Complete datetime, extended format: `1985-04-12T23:20:50+01:00`
pub const DT_EXT_COMPLETE: &str = "%Y-%m-%dT%H:%M:%S%Z";
/// Complete datetime, basic format: `19850412T232050+0100`
pub const DT_BAS_COMPLETE: &str = "%Y%m%dT%H%M%S%z";
/// Ordinal datetime, extended format: `1985-102T23:20:50+01:00`
pub const DT_EXT_ORD_COMPLETE: &str = "%Y-%jT%H:%M:%S%Z";
/// Ordinal datetime, basic format: `1985102T232050+0100`
pub const DT_BAS_ORD_COMPLETE: &str = "%Y%jT%H%M%S%z";
/// Week datetime, extended format: `1985-W15-5T23:20:50+01:00`
pub const DT_EXT_WEEK_COMPLETE: &str = "%Y-W%W-%wT%H:%M:%S%Z";
/// Week datetime, basic format: `1985W155T232050+0100`
pub const DT_BAS_WEEK_COMPLETE: &str = "%YW%W%wT%H%M%S%z";
