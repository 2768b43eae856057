//! Named ISO 8601 representations.
//!
//! Each tag stands for one grammar variant and knows its pattern string
//! (see [`crate::Pattern`]) and whether it is written in the basic or
//! extended style. Tags are accepted wherever a pattern string is, so
//! `DateFormat::ExtComplete` and `"%Y-%m-%d"` are interchangeable.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ParseError, consts::*, prelude::*};

/// Basic (no separators) versus extended (`-` and `:` separators) notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[display(fmt = "basic")]
    Basic,
    #[display(fmt = "extended")]
    Extended,
}

/// Compatibility of two optional styles: an unknown side never conflicts.
pub(crate) fn styles_agree(a: Option<Style>, b: Option<Style>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        _ => true,
    }
}

macro_rules! named_formats {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => ($tag:literal, $pattern:expr, $style:expr),)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $tag)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Stable identifier of the variant.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)+
                }
            }

            /// The pattern string rendering and matching this variant.
            pub const fn pattern(self) -> &'static str {
                match self {
                    $(Self::$variant => $pattern,)+
                }
            }

            /// Notation style, or `None` when the variant has no separators to tell.
            pub const fn style(self) -> Option<Style> {
                match self {
                    $(Self::$variant => $style,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|format| format.name() == s.trim())
                    .ok_or_else(|| ParseError::UnknownFormat(s.to_owned()))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.pattern()
            }
        }
    };
}

named_formats! {
    /// Date representations.
    pub enum DateFormat {
        Century => ("date-century", DATE_CENTURY, None),
        Year => ("date-year", DATE_YEAR, None),
        BasMonth => ("date-bas-month", DATE_BAS_MONTH, Some(Style::Basic)),
        ExtMonth => ("date-ext-month", DATE_EXT_MONTH, Some(Style::Extended)),
        BasComplete => ("date-bas-complete", DATE_BAS_COMPLETE, Some(Style::Basic)),
        ExtComplete => ("date-ext-complete", DATE_EXT_COMPLETE, Some(Style::Extended)),
        BasOrdComplete => ("date-bas-ord-complete", DATE_BAS_ORD_COMPLETE, Some(Style::Basic)),
        ExtOrdComplete => ("date-ext-ord-complete", DATE_EXT_ORD_COMPLETE, Some(Style::Extended)),
        BasWeekComplete => ("date-bas-week-complete", DATE_BAS_WEEK_COMPLETE, Some(Style::Basic)),
        ExtWeekComplete => ("date-ext-week-complete", DATE_EXT_WEEK_COMPLETE, Some(Style::Extended)),
        BasWeek => ("date-bas-week", DATE_BAS_WEEK, Some(Style::Basic)),
        ExtWeek => ("date-ext-week", DATE_EXT_WEEK, Some(Style::Extended)),
    }
}

impl DateFormat {
    /// Variants tried, in order, when parsing a date of unknown shape.
    ///
    /// `BasMonth` is left out: `YYYYMM` is not a legal ISO 8601 date on its
    /// own, and only [`crate::parse_date_as`] accepts it.
    pub const DISPATCH_ORDER: [Self; 11] = [
        Self::Century,
        Self::Year,
        Self::ExtMonth,
        Self::ExtComplete,
        Self::BasComplete,
        Self::ExtOrdComplete,
        Self::BasOrdComplete,
        Self::ExtWeekComplete,
        Self::BasWeekComplete,
        Self::ExtWeek,
        Self::BasWeek,
    ];
}

named_formats! {
    /// Time-of-day representations, offsets excluded.
    pub enum TimeFormat {
        Hour => ("time-hour", TIME_HOUR, None),
        BasMinute => ("time-bas-minute", TIME_BAS_MINUTE, Some(Style::Basic)),
        ExtMinute => ("time-ext-minute", TIME_EXT_MINUTE, Some(Style::Extended)),
        BasComplete => ("time-bas-complete", TIME_BAS_COMPLETE, Some(Style::Basic)),
        ExtComplete => ("time-ext-complete", TIME_EXT_COMPLETE, Some(Style::Extended)),
    }
}

impl TimeFormat {
    /// Variants tried, in order, when parsing a time of unknown shape.
    pub const DISPATCH_ORDER: [Self; 5] = [
        Self::ExtComplete,
        Self::BasComplete,
        Self::ExtMinute,
        Self::BasMinute,
        Self::Hour,
    ];
}

named_formats! {
    /// UTC offset representations.
    pub enum TzFormat {
        Basic => ("tz-bas", TZ_BAS, Some(Style::Basic)),
        Extended => ("tz-ext", TZ_EXT, Some(Style::Extended)),
        Hour => ("tz-hour", TZ_HOUR, None),
    }
}
