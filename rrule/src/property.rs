// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Constraint evaluation (the `BY*` rule parts) within one period.

mod date;
mod time;

use std::ops::Range;

pub(crate) use crate::property::date::DateProperty;
pub(crate) use crate::property::time::{TimeProperty, TimeSet};

use crate::error::PropertyKind;
use crate::frequency::YearInfo;
use crate::property::date::{Container, DateContext, DaySet, MonthsBehaviour};
use crate::value::{DateTime, Frequency};

/// The date constraints of a rule, completed for one iteration start.
#[derive(Debug, Clone)]
pub(crate) struct DateChain {
    properties: Vec<DateProperty>,
    months: MonthsBehaviour,
    nth_container: Container,
    start_day: u8,
}

impl DateChain {
    /// Returns `None` when the rule has no date constraints, leaving the period anchor as the only
    /// candidate date.
    pub fn new(
        rule_properties: &[DateProperty],
        frequency: Frequency,
        start: DateTime,
    ) -> Option<Self> {
        if rule_properties.is_empty() {
            return None;
        }

        let months = if rule_properties.len() > 1 {
            MonthsBehaviour::Expand
        } else {
            MonthsBehaviour::Collapse
        };

        let properties = with_implicit(rule_properties, frequency, start);
        let has_months = properties.iter().any(|p| p.kind() == PropertyKind::Months);
        let nth_container = match frequency {
            Frequency::Monthly => Container::Month,
            Frequency::Yearly if has_months => Container::Month,
            _ => Container::Year,
        };

        Some(DateChain {
            properties,
            months,
            nth_container,
            start_day: start.day(),
        })
    }

    /// Whether a yearly period must cover the whole week-year.
    pub fn spans_weeks(&self) -> bool {
        self.properties
            .iter()
            .any(|p| p.kind() == PropertyKind::Weeks)
    }

    /// Runs every constraint in order over the days of `range`.
    pub fn evaluate(&self, year: &YearInfo, range: Range<i32>, frequency: Frequency) -> DaySet {
        let mut days: DaySet = range.collect();
        for property in &self.properties {
            let (Some(&first), Some(&last)) = (days.first(), days.last()) else {
                break;
            };

            let ctx = DateContext {
                frequency,
                year,
                bounds: first..last + 1,
                months: self.months,
                nth_container: self.nth_container,
                start_day: self.start_day,
            };
            days = property.evaluate(&days, &ctx);
        }
        days
    }
}

/// Adds the constraint that pins the start date's position in its period, unless the rule
/// already generalizes it.
fn with_implicit(
    properties: &[DateProperty],
    frequency: Frequency,
    start: DateTime,
) -> Vec<DateProperty> {
    let has = |kind| properties.iter().any(|p| p.kind() == kind);
    let months = has(PropertyKind::Months);
    let weeks = has(PropertyKind::Weeks);
    let year_days = has(PropertyKind::YearDays);
    let month_days = has(PropertyKind::MonthDays);
    let week_days = has(PropertyKind::WeekDays);

    let start_month = || DateProperty::Months(vec![start.month()]);
    let start_month_day = || DateProperty::MonthDays(vec![start.day() as i8]);
    let start_week_day = || DateProperty::WeekDays(vec![start.weekday().into()]);

    let implicit = match frequency {
        Frequency::Yearly if year_days => None,
        Frequency::Yearly if !months && !weeks && (month_days || !week_days) => Some(start_month()),
        Frequency::Yearly if !month_days && !weeks && !week_days => Some(start_month_day()),
        Frequency::Yearly if weeks && !month_days && !week_days => Some(start_week_day()),
        Frequency::Monthly if !month_days && !week_days => Some(start_month_day()),
        Frequency::Weekly if !week_days => Some(start_week_day()),
        _ => None,
    };

    let mut properties = properties.to_vec();
    properties.extend(implicit);
    properties.sort_by_key(DateProperty::kind);
    properties
}
