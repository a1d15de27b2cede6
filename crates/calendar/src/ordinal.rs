//! Weekday-of-month ordinals.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::CalendarError;

/// Which occurrence of its weekday a date is within its month.
///
/// The ordinal is derived from the day of month alone: days 1-7 are the
/// first occurrence, 8-14 the second and so on. Days 29-31 map to
/// [`WeekdayOfMonth::Last`], which is really the fifth occurrence; a weekday
/// that occurs only four times in a month has its last occurrence classified
/// as [`WeekdayOfMonth::Fourth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum WeekdayOfMonth {
    /// Days 1-7.
    First = 1,
    /// Days 8-14.
    Second = 2,
    /// Days 15-21.
    Third = 3,
    /// Days 22-28.
    Fourth = 4,
    /// Days 29-31, the fifth occurrence of the weekday.
    Last = 5,
}

impl WeekdayOfMonth {
    /// All ordinals in ascending order.
    pub const ALL: [WeekdayOfMonth; 5] = [
        WeekdayOfMonth::First,
        WeekdayOfMonth::Second,
        WeekdayOfMonth::Third,
        WeekdayOfMonth::Fourth,
        WeekdayOfMonth::Last,
    ];

    /// Classifies a 1-based day of month.
    ///
    /// Returns `None` if `day` is not in 1..=31.
    pub fn from_day_of_month(day: u32) -> Option<Self> {
        match day {
            1..=7 => Some(WeekdayOfMonth::First),
            8..=14 => Some(WeekdayOfMonth::Second),
            15..=21 => Some(WeekdayOfMonth::Third),
            22..=28 => Some(WeekdayOfMonth::Fourth),
            29..=31 => Some(WeekdayOfMonth::Last),
            _ => None,
        }
    }

    /// Returns the ordinal number (1..=5).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Returns the display name, identical to the variant name.
    pub fn name(self) -> &'static str {
        match self {
            WeekdayOfMonth::First => "First",
            WeekdayOfMonth::Second => "Second",
            WeekdayOfMonth::Third => "Third",
            WeekdayOfMonth::Fourth => "Fourth",
            WeekdayOfMonth::Last => "Last",
        }
    }
}

impl fmt::Display for WeekdayOfMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for WeekdayOfMonth {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(WeekdayOfMonth::First),
            2 => Ok(WeekdayOfMonth::Second),
            3 => Ok(WeekdayOfMonth::Third),
            4 => Ok(WeekdayOfMonth::Fourth),
            5 => Ok(WeekdayOfMonth::Last),
            _ => Err(CalendarError::InvalidOrdinal { value }),
        }
    }
}

impl FromStr for WeekdayOfMonth {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ordinal| ordinal.name() == s)
            .ok_or_else(|| CalendarError::UnknownOrdinal {
                name: s.to_string(),
            })
    }
}

impl Serialize for WeekdayOfMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}
