// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};

/// Day of the week, numbered from Monday = 1 to Sunday = 7.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
#[expect(missing_docs)]
pub enum WeekDay {
    #[default]
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl WeekDay {
    /// ISO number of the day, Monday = 1.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Day for an ISO number, Monday = 1.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=7 => Some(Self::from_offset(number as i64 - 1)),
            _ => None,
        }
    }

    /// The `occurrence`-th instance of this day in a month or year, negative counting from the end.
    ///
    /// ```
    /// use aimcal_rrule::WeekDay;
    ///
    /// assert_eq!(WeekDay::Monday.nth(20).to_string(), "+20 Monday");
    /// assert_eq!(WeekDay::Friday.nth(-1).to_string(), "-1 Friday");
    /// ```
    #[must_use]
    pub const fn nth(self, occurrence: i8) -> WeekDayNum {
        WeekDayNum {
            day: self,
            occurrence: Some(occurrence),
        }
    }

    /// Days since Monday.
    pub(crate) const fn offset(self) -> i64 {
        self as i64 - 1
    }

    /// Day a number of days after Monday, taken modulo a week.
    pub(crate) const fn from_offset(offset: i64) -> Self {
        match offset.rem_euclid(7) {
            0 => WeekDay::Monday,
            1 => WeekDay::Tuesday,
            2 => WeekDay::Wednesday,
            3 => WeekDay::Thursday,
            4 => WeekDay::Friday,
            5 => WeekDay::Saturday,
            _ => WeekDay::Sunday,
        }
    }
}

#[cfg(feature = "jiff")]
impl From<WeekDay> for jiff::civil::Weekday {
    fn from(value: WeekDay) -> Self {
        jiff::civil::Weekday::from_monday_one_offset(value.number() as i8)
            .unwrap_or(jiff::civil::Weekday::Monday)
    }
}

#[cfg(feature = "jiff")]
impl From<jiff::civil::Weekday> for WeekDay {
    fn from(value: jiff::civil::Weekday) -> Self {
        WeekDay::from_offset(i64::from(value.to_monday_zero_offset()))
    }
}

/// Day of week with optional occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeekDayNum {
    /// Day of the week
    pub day: WeekDay,

    /// Occurrence within the month or year, negative counting from the end
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub occurrence: Option<i8>,
}

impl From<WeekDay> for WeekDayNum {
    fn from(day: WeekDay) -> Self {
        WeekDayNum {
            day,
            occurrence: None,
        }
    }
}

impl Display for WeekDayNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.occurrence {
            Some(n) => write!(f, "{n:+} {}", self.day),
            None => write!(f, "{}", self.day),
        }
    }
}
