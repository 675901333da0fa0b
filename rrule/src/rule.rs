// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence rule options and the validated rule built from them.

use crate::error::{Error, PropertyKind};
use crate::iter::Occurrences;
use crate::property::{DateProperty, TimeProperty};
use crate::value::{DateTime, Frequency, WeekDay, WeekDayNum};

/// Options of a recurrence rule.
///
/// Empty lists mean the constraint is not given. Options are checked and normalized by
/// [`RuleOptions::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleOptions {
    /// Base period of the recurrence
    pub frequency: Frequency,

    /// Number of periods between two iterations, default 1
    #[cfg_attr(feature = "serde", serde(default = "default_interval"))]
    pub interval: u32,

    /// First day of the week for week numbers and weekly periods, default Monday
    #[cfg_attr(feature = "serde", serde(default))]
    pub week_start: WeekDay,

    /// Months of the year, 1 to 12
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub on_months: Vec<u8>,

    /// Week numbers, 1 to 53 or -53 to -1
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub on_weeks: Vec<i8>,

    /// Days of the year, 1 to 366 or -366 to -1
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub on_year_days: Vec<i16>,

    /// Days of the month, 1 to 31 or -31 to -1
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub on_month_days: Vec<i8>,

    /// Days of the week, optionally the `n`th of the month or year
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub on_week_days: Vec<WeekDayNum>,

    /// Hours, 0 to 23
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub on_hours: Vec<u8>,

    /// Minutes, 0 to 59
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub on_minutes: Vec<u8>,

    /// Seconds, 0 to 59
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub on_seconds: Vec<u8>,

    /// Positions within each period's occurrences, 1-based, negative counting from the end
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub on_set_pos: Vec<i16>,

    /// Maximum number of occurrences
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub count: Option<u32>,

    /// Last date-time an occurrence may fall on, inclusive
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub until: Option<DateTime>,
}

#[cfg(feature = "serde")]
const fn default_interval() -> u32 {
    1
}

impl RuleOptions {
    /// Options repeating every period of `frequency`, without constraints or bounds.
    #[must_use]
    pub const fn new(frequency: Frequency) -> Self {
        RuleOptions {
            frequency,
            interval: 1,
            week_start: WeekDay::Monday,
            on_months: Vec::new(),
            on_weeks: Vec::new(),
            on_year_days: Vec::new(),
            on_month_days: Vec::new(),
            on_week_days: Vec::new(),
            on_hours: Vec::new(),
            on_minutes: Vec::new(),
            on_seconds: Vec::new(),
            on_set_pos: Vec::new(),
            count: None,
            until: None,
        }
    }

    /// Set the interval.
    #[must_use]
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    /// Set the week start day.
    #[must_use]
    pub fn with_week_start(mut self, week_start: WeekDay) -> Self {
        self.week_start = week_start;
        self
    }

    /// Set the months.
    #[must_use]
    pub fn with_months(mut self, months: impl IntoIterator<Item = u8>) -> Self {
        self.on_months = months.into_iter().collect();
        self
    }

    /// Set the week numbers.
    #[must_use]
    pub fn with_weeks(mut self, weeks: impl IntoIterator<Item = i8>) -> Self {
        self.on_weeks = weeks.into_iter().collect();
        self
    }

    /// Set the days of the year.
    #[must_use]
    pub fn with_year_days(mut self, days: impl IntoIterator<Item = i16>) -> Self {
        self.on_year_days = days.into_iter().collect();
        self
    }

    /// Set the days of the month.
    #[must_use]
    pub fn with_month_days(mut self, days: impl IntoIterator<Item = i8>) -> Self {
        self.on_month_days = days.into_iter().collect();
        self
    }

    /// Set the days of the week, plain [`WeekDay`]s or indexed [`WeekDayNum`]s.
    #[must_use]
    pub fn with_week_days<T>(mut self, days: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<WeekDayNum>,
    {
        self.on_week_days = days.into_iter().map(Into::into).collect();
        self
    }

    /// Set the hours.
    #[must_use]
    pub fn with_hours(mut self, hours: impl IntoIterator<Item = u8>) -> Self {
        self.on_hours = hours.into_iter().collect();
        self
    }

    /// Set the minutes.
    #[must_use]
    pub fn with_minutes(mut self, minutes: impl IntoIterator<Item = u8>) -> Self {
        self.on_minutes = minutes.into_iter().collect();
        self
    }

    /// Set the seconds.
    #[must_use]
    pub fn with_seconds(mut self, seconds: impl IntoIterator<Item = u8>) -> Self {
        self.on_seconds = seconds.into_iter().collect();
        self
    }

    /// Set the set positions.
    #[must_use]
    pub fn with_set_pos(mut self, positions: impl IntoIterator<Item = i16>) -> Self {
        self.on_set_pos = positions.into_iter().collect();
        self
    }

    /// Set the maximum number of occurrences.
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Set the inclusive upper bound.
    #[must_use]
    pub fn with_until(mut self, until: DateTime) -> Self {
        self.until = Some(until);
        self
    }

    /// Validate the options into a rule.
    ///
    /// # Errors
    ///
    /// See [`RecurrenceRule::new`].
    pub fn build(self) -> Result<RecurrenceRule, Error> {
        RecurrenceRule::new(self)
    }
}

/// A validated, immutable recurrence rule.
///
/// A rule holds no iteration state: any number of [`Occurrences`] may run over it at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub(crate) frequency: Frequency,
    pub(crate) interval: u32,
    pub(crate) week_start: WeekDay,
    pub(crate) date_properties: Vec<DateProperty>,
    pub(crate) time_properties: Vec<TimeProperty>,
    pub(crate) set_positions: Vec<i16>,
    pub(crate) count: Option<u32>,
    pub(crate) until: Option<DateTime>,
}

impl RecurrenceRule {
    /// Validate `options` into a rule.
    ///
    /// # Errors
    ///
    /// - [`Error::WeekDayOccurrence`] if an indexed week day is given with a frequency other than
    ///   yearly or monthly.
    /// - [`Error::ValueOutOfRange`] or [`Error::SetPositionOutOfRange`] if a constraint value is
    ///   out of range.
    /// - [`Error::ZeroInterval`] or [`Error::ZeroCount`] for a zero interval or count.
    #[tracing::instrument(level = "debug", skip_all, fields(frequency = %options.frequency))]
    pub fn new(options: RuleOptions) -> Result<Self, Error> {
        let RuleOptions {
            frequency,
            interval,
            week_start,
            on_months,
            on_weeks,
            on_year_days,
            on_month_days,
            on_week_days,
            on_hours,
            on_minutes,
            on_seconds,
            on_set_pos,
            count,
            until,
        } = options;

        if interval == 0 {
            return Err(Error::ZeroInterval);
        }
        if count == Some(0) {
            return Err(Error::ZeroCount);
        }

        for &week_day in &on_week_days {
            let Some(n) = week_day.occurrence else {
                continue;
            };
            if !frequency.allows_week_day_occurrence() {
                return Err(Error::WeekDayOccurrence {
                    frequency,
                    week_day,
                });
            }
            if n == 0 || n.unsigned_abs() > 53 {
                return Err(Error::ValueOutOfRange {
                    kind: PropertyKind::WeekDays,
                    value: n.into(),
                });
            }
        }

        let mut date_properties = Vec::new();
        if let Some(v) = checked(on_months, PropertyKind::Months, |v| (1..=12).contains(&v))? {
            date_properties.push(DateProperty::Months(v));
        }
        if let Some(v) = checked(on_weeks, PropertyKind::Weeks, signed_within(53))? {
            date_properties.push(DateProperty::Weeks(v));
        }
        if let Some(v) = checked(on_year_days, PropertyKind::YearDays, signed_within(366))? {
            date_properties.push(DateProperty::YearDays(v));
        }
        if let Some(v) = checked(on_month_days, PropertyKind::MonthDays, signed_within(31))? {
            date_properties.push(DateProperty::MonthDays(v));
        }
        if !on_week_days.is_empty() {
            let mut v = on_week_days;
            v.sort_unstable();
            v.dedup();
            date_properties.push(DateProperty::WeekDays(v));
        }

        let mut time_properties = Vec::new();
        if let Some(v) = checked(on_hours, PropertyKind::Hours, |v| (0..24).contains(&v))? {
            time_properties.push(TimeProperty::Hours(v));
        }
        if let Some(v) = checked(on_minutes, PropertyKind::Minutes, |v| (0..60).contains(&v))? {
            time_properties.push(TimeProperty::Minutes(v));
        }
        if let Some(v) = checked(on_seconds, PropertyKind::Seconds, |v| (0..60).contains(&v))? {
            time_properties.push(TimeProperty::Seconds(v));
        }

        let mut set_positions = on_set_pos;
        if let Some(&value) = set_positions
            .iter()
            .find(|&&p| !signed_within(366)(p.into()))
        {
            return Err(Error::SetPositionOutOfRange { value });
        }
        set_positions.sort_unstable();
        set_positions.dedup();

        tracing::debug!(
            interval,
            date_constraints = date_properties.len(),
            time_constraints = time_properties.len(),
            "recurrence rule built"
        );

        Ok(RecurrenceRule {
            frequency,
            interval,
            week_start,
            date_properties,
            time_properties,
            set_positions,
            count,
            until,
        })
    }

    /// Base period of the recurrence.
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Number of periods between two iterations.
    #[must_use]
    pub const fn interval(&self) -> u32 {
        self.interval
    }

    /// First day of the week.
    #[must_use]
    pub const fn week_start(&self) -> WeekDay {
        self.week_start
    }

    /// Maximum number of occurrences, if bounded.
    #[must_use]
    pub const fn count(&self) -> Option<u32> {
        self.count
    }

    /// Inclusive upper bound, if any.
    #[must_use]
    pub const fn until(&self) -> Option<DateTime> {
        self.until
    }

    /// Occurrences on or after `start`, which also fixes the position the rule repeats.
    #[must_use]
    pub fn iter_from(&self, start: DateTime) -> Occurrences<'_> {
        Occurrences::new(self, start)
    }

    /// Occurrences from the current local time, truncated to the second.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateTime`] if the clock is outside the supported years.
    #[cfg(feature = "jiff")]
    pub fn iter_from_now(&self) -> Result<Occurrences<'_>, Error> {
        let now = jiff::Zoned::now().datetime();
        Ok(self.iter_from(DateTime::try_from(now)?))
    }
}

impl TryFrom<RuleOptions> for RecurrenceRule {
    type Error = Error;

    fn try_from(options: RuleOptions) -> Result<Self, Self::Error> {
        RecurrenceRule::new(options)
    }
}

/// Checks every value, then sorts and deduplicates them. An empty list yields `None`.
fn checked<T>(
    mut values: Vec<T>,
    kind: PropertyKind,
    valid: impl Fn(i32) -> bool,
) -> Result<Option<Vec<T>>, Error>
where
    T: Copy + Ord + Into<i32>,
{
    if values.is_empty() {
        return Ok(None);
    }
    if let Some(&value) = values.iter().find(|&&v| !valid(v.into())) {
        return Err(Error::ValueOutOfRange {
            kind,
            value: value.into(),
        });
    }

    values.sort_unstable();
    values.dedup();
    Ok(Some(values))
}

fn signed_within(max: i32) -> impl Fn(i32) -> bool {
    move |v| v != 0 && (-max..=max).contains(&v)
}
