// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::value::{Frequency, WeekDayNum};

/// Errors raised while building a recurrence rule or expanding it.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An indexed week day was given with a frequency that has no month or year to count in.
    #[error("Indexed week day '{week_day}' requires a YEARLY or MONTHLY frequency, got {frequency}")]
    WeekDayOccurrence {
        /// The rule frequency
        frequency: Frequency,
        /// The offending week day
        week_day: WeekDayNum,
    },

    /// A constraint value is outside the range its property accepts.
    #[error("Value {value} is out of range for {kind}")]
    ValueOutOfRange {
        /// The property the value was given for
        kind: PropertyKind,
        /// The rejected value
        value: i32,
    },

    /// A set position is zero or beyond the largest possible candidate list.
    #[error("Set position {value} is out of range")]
    SetPositionOutOfRange {
        /// The rejected position
        value: i16,
    },

    /// Interval of zero periods.
    #[error("Interval must be at least 1")]
    ZeroInterval,

    /// Count of zero occurrences.
    #[error("Count must be at least 1")]
    ZeroCount,

    /// A date-time that does not exist in the calendar.
    #[error("Invalid date-time: {value}")]
    InvalidDateTime {
        /// The rejected input, as written
        value: String,
    },

    /// The expansion ran past the last representable year.
    #[error("Recurrence exceeded the maximum year {max}, reached {year}", max = crate::calendar::MAX_YEAR)]
    RangeExhausted {
        /// The first year beyond the maximum
        year: i32,
    },
}

/// The kinds of constraint a recurrence rule may carry.
///
/// The declaration order is the order in which constraints are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum PropertyKind {
    /// `BYMONTH`
    #[strum(serialize = "on_months")]
    Months,
    /// `BYWEEKNO`
    #[strum(serialize = "on_weeks")]
    Weeks,
    /// `BYYEARDAY`
    #[strum(serialize = "on_year_days")]
    YearDays,
    /// `BYMONTHDAY`
    #[strum(serialize = "on_month_days")]
    MonthDays,
    /// `BYDAY`
    #[strum(serialize = "on_week_days")]
    WeekDays,
    /// `BYHOUR`
    #[strum(serialize = "on_hours")]
    Hours,
    /// `BYMINUTE`
    #[strum(serialize = "on_minutes")]
    Minutes,
    /// `BYSECOND`
    #[strum(serialize = "on_seconds")]
    Seconds,
}
