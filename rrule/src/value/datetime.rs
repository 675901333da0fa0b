// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::calendar::{self, Date, MAX_YEAR, Time};
use crate::error::Error;
use crate::value::WeekDay;

/// A naive local date-time, always a real day of years 1 to 9999, to the second.
///
/// Date-times order chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    date: Date,
    time: Time,
}

impl DateTime {
    /// Create a date-time, rejecting days that do not exist in the calendar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateTime`] if any component is out of range.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, Error> {
        Self::from_parts((year, month, day), (hour, minute, second)).ok_or_else(|| {
            Error::InvalidDateTime {
                value: format!(
                    "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}"
                ),
            }
        })
    }

    /// Create a date-time at midnight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateTime`] if the date does not exist.
    pub fn from_date(year: i32, month: u8, day: u8) -> Result<Self, Error> {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Combine a date and a time if they form a valid date-time.
    pub(crate) fn from_parts(date: Date, time: Time) -> Option<Self> {
        let (hour, minute, second) = time;
        let valid = (1..=MAX_YEAR).contains(&date.0)
            && calendar::is_valid_date(date)
            && hour < 24
            && minute < 60
            && second < 60;
        valid.then_some(DateTime { date, time })
    }

    /// Date and time components, for comparison with candidates that may not be real dates.
    pub(crate) const fn parts(self) -> (Date, Time) {
        (self.date, self.time)
    }

    /// Year component.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.date.0
    }

    /// Month component, 1-12.
    #[must_use]
    pub const fn month(self) -> u8 {
        self.date.1
    }

    /// Day component, 1-31.
    #[must_use]
    pub const fn day(self) -> u8 {
        self.date.2
    }

    /// Hour component, 0-23.
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.time.0
    }

    /// Minute component, 0-59.
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.time.1
    }

    /// Second component, 0-59.
    #[must_use]
    pub const fn second(self) -> u8 {
        self.time.2
    }

    /// Day of the week.
    #[must_use]
    pub fn weekday(self) -> WeekDay {
        let (year, month, day) = self.date;
        calendar::weekday(calendar::ordinal(year, month, day))
    }

    /// Convert to `jiff::civil::DateTime`.
    #[cfg(feature = "jiff")]
    #[must_use]
    pub fn civil_date_time(self) -> jiff::civil::DateTime {
        self.into()
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ((year, month, day), (hour, minute, second)) = self.parts();
        write!(
            f,
            "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}"
        )
    }
}

/// Reads `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`.
impl FromStr for DateTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidDateTime {
            value: s.to_owned(),
        };

        let (date, time) = match s.split_once(['T', ' ']) {
            Some((date, time)) => (date, Some(time)),
            None => (s, None),
        };

        let mut date = date.splitn(3, '-');
        let mut next_date = || date.next().ok_or_else(invalid);
        let year: i32 = next_date()?.parse().map_err(|_| invalid())?;
        let month: u8 = next_date()?.parse().map_err(|_| invalid())?;
        let day: u8 = next_date()?.parse().map_err(|_| invalid())?;

        let (hour, minute, second) = match time {
            Some(time) => {
                let mut fields = time.splitn(3, ':').map(str::parse::<u8>);
                let mut next_time = || match fields.next() {
                    Some(Ok(v)) => Ok(v),
                    _ => Err(invalid()),
                };
                (next_time()?, next_time()?, next_time()?)
            }
            None => (0, 0, 0),
        };

        Self::from_parts((year, month, day), (hour, minute, second)).ok_or_else(invalid)
    }
}

#[cfg(feature = "jiff")]
impl From<DateTime> for jiff::civil::DateTime {
    fn from(value: DateTime) -> Self {
        let ((year, month, day), (hour, minute, second)) = value.parts();
        jiff::civil::datetime(
            year as i16,
            month as i8,
            day as i8,
            hour as i8,
            minute as i8,
            second as i8,
            0,
        )
    }
}

#[cfg(feature = "jiff")]
impl TryFrom<jiff::civil::DateTime> for DateTime {
    type Error = Error;

    /// Drops any fraction of a second.
    fn try_from(value: jiff::civil::DateTime) -> Result<Self, Self::Error> {
        DateTime::new(
            i32::from(value.year()),
            value.month() as u8,
            value.day() as u8,
            value.hour() as u8,
            value.minute() as u8,
            value.second() as u8,
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de;

        struct DateTimeVisitor;

        impl de::Visitor<'_> for DateTimeVisitor {
            type Value = DateTime;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(r#"a date-time string like "1997-09-02T09:00:00""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(DateTimeVisitor)
    }
}
