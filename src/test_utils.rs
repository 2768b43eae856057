use crate::{Date, FixedOffset, Offset, Sign, Time};

pub(crate) fn date(year: i32, month: u8, day: u8) -> Date {
    Date::new(year, month, day).unwrap()
}

pub(crate) fn time(hour: u8, minute: u8, second: u8) -> Time {
    Time::from_hms(hour, minute, second).unwrap()
}

pub(crate) fn offset(sign: Sign, hours: u8, minutes: u8) -> Offset {
    Offset::Fixed(FixedOffset::new(sign, hours, minutes).unwrap())
}
