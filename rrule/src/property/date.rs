// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;
use std::ops::Range;

use crate::calendar::{self, resolve_index};
use crate::error::PropertyKind;
use crate::frequency::YearInfo;
use crate::value::{Frequency, WeekDay, WeekDayNum};

/// Day-of-year offsets relative to January 1st of the period's year.
pub(crate) type DaySet = BTreeSet<i32>;

/// A date constraint and its literal values, sorted and deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DateProperty {
    Months(Vec<u8>),
    Weeks(Vec<i8>),
    YearDays(Vec<i16>),
    MonthDays(Vec<i8>),
    WeekDays(Vec<WeekDayNum>),
}

/// What a months constraint does in a yearly period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MonthsBehaviour {
    /// Every day of each listed month
    Expand,
    /// The start date's day of month in each listed month
    Collapse,
}

/// Where the `n`th occurrence of a week day is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Container {
    Month,
    Year,
}

/// Per-period facts handed to each date constraint.
#[derive(Debug, Clone)]
pub(crate) struct DateContext<'a> {
    pub frequency: Frequency,
    pub year: &'a YearInfo,
    /// Smallest range holding every remaining candidate
    pub bounds: Range<i32>,
    pub months: MonthsBehaviour,
    pub nth_container: Container,
    pub start_day: u8,
}

impl DateProperty {
    pub fn kind(&self) -> PropertyKind {
        match self {
            DateProperty::Months(_) => PropertyKind::Months,
            DateProperty::Weeks(_) => PropertyKind::Weeks,
            DateProperty::YearDays(_) => PropertyKind::YearDays,
            DateProperty::MonthDays(_) => PropertyKind::MonthDays,
            DateProperty::WeekDays(_) => PropertyKind::WeekDays,
        }
    }

    /// Narrows or expands `candidates`. An empty result means no occurrence in this period.
    pub fn evaluate(&self, candidates: &DaySet, ctx: &DateContext<'_>) -> DaySet {
        match self {
            DateProperty::Months(months) => by_months(candidates, months, ctx),
            DateProperty::Weeks(weeks) => by_weeks(candidates, weeks, ctx),
            DateProperty::YearDays(days) => by_year_days(candidates, days, ctx),
            DateProperty::MonthDays(days) => by_month_days(candidates, days, ctx),
            DateProperty::WeekDays(days) => by_week_days(candidates, days, ctx),
        }
    }
}

fn by_months(candidates: &DaySet, months: &[u8], ctx: &DateContext<'_>) -> DaySet {
    let year = ctx.year;
    if ctx.frequency >= Frequency::Monthly {
        return candidates
            .iter()
            .copied()
            .filter(|&doy| months.contains(&year.date_of(doy).1))
            .collect();
    }

    match ctx.months {
        MonthsBehaviour::Expand => months
            .iter()
            .flat_map(|&month| month_span(year, month))
            .filter(|doy| ctx.bounds.contains(doy) && candidates.contains(doy))
            .collect(),

        MonthsBehaviour::Collapse => months
            .iter()
            .filter(|&&month| ctx.start_day <= calendar::days_in_month(year.year, month))
            .map(|&month| month_span(year, month).start + i32::from(ctx.start_day) - 1)
            .filter(|doy| candidates.contains(doy))
            .collect(),
    }
}

fn by_weeks(candidates: &DaySet, weeks: &[i8], ctx: &DateContext<'_>) -> DaySet {
    let year = ctx.year;
    if ctx.frequency >= Frequency::Weekly {
        return candidates
            .iter()
            .copied()
            .filter(|&doy| {
                let (week, count) = week_of(year, doy);
                weeks
                    .iter()
                    .any(|&w| resolve_index(w.into(), count) == Some(week))
            })
            .collect();
    }

    weeks
        .iter()
        .filter_map(|&w| resolve_index(w.into(), year.week_count))
        .flat_map(|week| {
            let first = year.iso_offset + 7 * week;
            first..first + 7
        })
        .filter(|doy| ctx.bounds.contains(doy) && candidates.contains(doy))
        .collect()
}

/// Zero-based week index of a day, with the week count of the week-year owning it.
fn week_of(year: &YearInfo, doy: i32) -> (i32, i32) {
    let week = (doy - year.iso_offset).div_euclid(7);
    if week < 0 {
        let previous = year.neighbour(-1);
        let week = (doy + previous.len - previous.iso_offset).div_euclid(7);
        (week, previous.week_count)
    } else if week >= year.week_count {
        (week - year.week_count, year.neighbour(1).week_count)
    } else {
        (week, year.week_count)
    }
}

fn by_year_days(candidates: &DaySet, days: &[i16], ctx: &DateContext<'_>) -> DaySet {
    let year = ctx.year;
    candidates
        .iter()
        .copied()
        .filter(|&doy| {
            // days outside the period's year count in their own year
            let (index, len) = if doy < 0 {
                let len = calendar::year_length(year.year - 1);
                (doy + len, len)
            } else if doy >= year.len {
                (doy - year.len, calendar::year_length(year.year + 1))
            } else {
                (doy, year.len)
            };
            days.iter()
                .any(|&d| resolve_index(d.into(), len) == Some(index))
        })
        .collect()
}

fn by_month_days(candidates: &DaySet, days: &[i8], ctx: &DateContext<'_>) -> DaySet {
    months_within(ctx.year, &ctx.bounds)
        .into_iter()
        .flat_map(|month| {
            let len = month.end - month.start;
            days.iter()
                .filter_map(move |&d| resolve_index(d.into(), len))
                .map(move |index| month.start + index)
        })
        .filter(|doy| candidates.contains(doy))
        .collect()
}

fn by_week_days(candidates: &DaySet, days: &[WeekDayNum], ctx: &DateContext<'_>) -> DaySet {
    let year = ctx.year;
    let mut result = DaySet::new();
    for week_day in days {
        match week_day.occurrence {
            None => result.extend(
                ctx.bounds
                    .clone()
                    .filter(|&doy| year.weekday_of(doy) == week_day.day)
                    .filter(|doy| candidates.contains(doy)),
            ),

            Some(n) => {
                let containers = match ctx.nth_container {
                    Container::Month => months_within(year, &ctx.bounds),
                    Container::Year => vec![0..year.len],
                };
                result.extend(
                    containers
                        .into_iter()
                        .filter_map(|container| nth_week_day(year, container, week_day.day, n))
                        .filter(|doy| candidates.contains(doy)),
                );
            }
        }
    }
    result
}

/// The `n`th `day` inside `container`, negative counting from its end.
fn nth_week_day(year: &YearInfo, container: Range<i32>, day: WeekDay, n: i8) -> Option<i32> {
    let last_doy = container.end - 1;
    let first = container.start
        + (day.offset() - year.weekday_of(container.start).offset()).rem_euclid(7) as i32;
    let last = last_doy - (year.weekday_of(last_doy).offset() - day.offset()).rem_euclid(7) as i32;
    let count = (last - first) / 7 + 1;
    resolve_index(n.into(), count).map(|index| first + 7 * index)
}

/// Day-of-year span of a month of the period's year.
fn month_span(year: &YearInfo, month: u8) -> Range<i32> {
    let start = calendar::days_before_month(year.is_leap, month);
    start..calendar::days_before_month(year.is_leap, month + 1)
}

/// Day-of-year spans of every calendar month overlapping `bounds`, which may leave the year.
fn months_within(year: &YearInfo, bounds: &Range<i32>) -> Vec<Range<i32>> {
    let mut months = Vec::new();
    if bounds.is_empty() {
        return months;
    }

    let (mut y, mut m, _) = year.date_of(bounds.start);
    loop {
        let start = year.doy_of((y, m, 1));
        if start >= bounds.end {
            break;
        }
        months.push(start..start + i32::from(calendar::days_in_month(y, m)));
        (y, m) = if m == 12 { (y + 1, 1) } else { (y, m + 1) };
    }
    months
}
