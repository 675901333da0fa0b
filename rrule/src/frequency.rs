// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Period arithmetic for each recurrence frequency.

use std::ops::Range;

use crate::calendar::{self, Date, Time};
use crate::value::{Frequency, WeekDay};

/// The span a frequency iterates over. Sub-daily frequencies share the daily period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Period {
    Year,
    Month,
    Week,
    Day,
}

impl Frequency {
    pub(crate) const fn period(self) -> Period {
        match self {
            Frequency::Yearly => Period::Year,
            Frequency::Monthly => Period::Month,
            Frequency::Weekly => Period::Week,
            Frequency::Daily | Frequency::Hourly | Frequency::Minutely | Frequency::Secondly => {
                Period::Day
            }
        }
    }

    /// Moves `interval` periods ahead.
    ///
    /// Yearly and monthly steps keep the day of month as is, even when the target month is too
    /// short for it, so that the anchor keeps its day across short months.
    pub(crate) fn advance(self, anchor: (Date, Time), interval: u32) -> (Date, Time) {
        let ((year, month, day), (hour, minute, second)) = anchor;
        let n = i64::from(interval);
        let date = (year, i64::from(month), i64::from(day));
        let time = (i64::from(hour), i64::from(minute), i64::from(second));

        match self {
            Frequency::Yearly => {
                let year = calendar::saturate_year(i64::from(year) + n);
                ((year, month, day), anchor.1)
            }
            Frequency::Monthly => {
                let months = i64::from(month) - 1 + n;
                let year = calendar::saturate_year(i64::from(year) + months.div_euclid(12));
                let month = months.rem_euclid(12) as u8 + 1;
                ((year, month, day), anchor.1)
            }
            Frequency::Weekly => (calendar::normalize_date(year, date.1, date.2 + 7 * n), anchor.1),
            Frequency::Daily => (calendar::normalize_date(year, date.1, date.2 + n), anchor.1),
            Frequency::Hourly => calendar::normalize_date_time(date, (time.0 + n, time.1, time.2)),
            Frequency::Minutely => {
                calendar::normalize_date_time(date, (time.0, time.1 + n, time.2))
            }
            Frequency::Secondly => {
                calendar::normalize_date_time(date, (time.0, time.1, time.2 + n))
            }
        }
    }
}

impl Period {
    /// First day of the period containing `date`.
    pub(crate) fn align_start(self, date: Date, week_start: WeekDay) -> Date {
        let (year, month, day) = date;
        match self {
            Period::Year => (year, 1, 1),
            Period::Month => (year, month, 1),
            Period::Week => {
                let ordinal = calendar::ordinal(year, month, day);
                let back = (ordinal - 1 - week_start.offset()).rem_euclid(7);
                calendar::from_ordinal(ordinal - back)
            }
            Period::Day => date,
        }
    }

    /// Year the period starting on `aligned` is evaluated in.
    ///
    /// A week belongs to the year holding its fourth day, so a week straddling New Year is
    /// handled as a whole.
    pub(crate) fn logical_year(self, aligned: Date) -> i32 {
        match self {
            Period::Week => {
                let (year, month, day) = aligned;
                calendar::from_ordinal(calendar::ordinal(year, month, day) + 3).0
            }
            Period::Year | Period::Month | Period::Day => aligned.0,
        }
    }

    /// Day-of-year offsets in `year` covered by the period starting on `aligned`.
    ///
    /// A yearly period widens to the whole week-year when `spans_weeks` is set, so that week
    /// numbers reach the days they own in the neighbouring years.
    pub(crate) fn day_range(self, aligned: Date, year: &YearInfo, spans_weeks: bool) -> Range<i32> {
        match self {
            Period::Year if spans_weeks => {
                year.iso_offset.min(0)..year.next_iso_offset().max(year.len)
            }
            Period::Year => 0..year.len,
            Period::Month => {
                let month = aligned.1;
                calendar::days_before_month(year.is_leap, month)
                    ..calendar::days_before_month(year.is_leap, month + 1)
            }
            Period::Week => {
                let start = year.doy_of(aligned);
                start..start + 7
            }
            Period::Day => {
                let doy = year.doy_of(aligned);
                doy..doy + 1
            }
        }
    }
}

/// Calendar facts about the year a period is evaluated in.
#[derive(Debug, Clone, Copy)]
pub(crate) struct YearInfo {
    pub year: i32,
    pub first_ordinal: i64,
    pub is_leap: bool,
    pub len: i32,
    pub week_start_offset: i64,
    /// Offset of the first day of week 1, possibly negative
    pub iso_offset: i32,
    pub week_count: i32,
}

impl YearInfo {
    pub fn new(year: i32, week_start: WeekDay) -> Self {
        let first_ordinal = calendar::days_before_year(year) + 1;
        let is_leap = calendar::is_leap_year(year);
        let week_start_offset = week_start.offset();
        let week_one = calendar::first_week_start(first_ordinal, week_start_offset);

        YearInfo {
            year,
            first_ordinal,
            is_leap,
            len: calendar::year_length(year),
            week_start_offset,
            iso_offset: (week_one - first_ordinal) as i32,
            week_count: calendar::week_count_in_year(first_ordinal, is_leap, week_start_offset),
        }
    }

    /// Information on the year before or after this one.
    pub fn neighbour(&self, delta: i32) -> Self {
        YearInfo::new(
            self.year.saturating_add(delta),
            WeekDay::from_offset(self.week_start_offset),
        )
    }

    /// Offset of the first day of week 1 of the next year.
    pub fn next_iso_offset(&self) -> i32 {
        let next_first = self.first_ordinal + i64::from(self.len);
        (calendar::first_week_start(next_first, self.week_start_offset) - self.first_ordinal) as i32
    }

    pub fn date_of(&self, doy: i32) -> Date {
        calendar::doy_to_date(self.year, self.is_leap, doy)
    }

    pub fn doy_of(&self, date: Date) -> i32 {
        let (year, month, day) = date;
        (calendar::ordinal(year, month, day) - self.first_ordinal) as i32
    }

    pub fn weekday_of(&self, doy: i32) -> WeekDay {
        calendar::weekday(self.first_ordinal + i64::from(doy))
    }
}
