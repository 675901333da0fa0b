// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Proleptic Gregorian calendar arithmetic.
//!
//! Dates are plain `(year, month, day)` tuples and ordinals count days from 0001-01-01, which is
//! ordinal 1 and a Monday. Every function here is pure integer arithmetic.

use crate::value::WeekDay;

/// A `(year, month, day)` triple, not necessarily a real date.
pub type Date = (i32, u8, u8);

/// An `(hour, minute, second)` triple.
pub type Time = (u8, u8, u8);

/// The last year a recurrence may produce.
pub const MAX_YEAR: i32 = 9999;

const DAYS_IN_400_YEARS: i64 = 146_097;
const DAYS_IN_100_YEARS: i64 = 36_524;
const DAYS_IN_4_YEARS: i64 = 1_461;
const DAYS_IN_YEAR: i64 = 365;

/// Days covered on each side of a year by the day-of-year lookup table.
const DOY_MARGIN: usize = 7;
const DOY_TABLE_LEN: usize = DOY_MARGIN + 366 + DOY_MARGIN;

#[derive(Debug, Clone, Copy)]
struct DoyEntry {
    year_offset: i8,
    month: u8,
    day: u8,
}

/// Day-of-year offset (shifted by [`DOY_MARGIN`]) to date, for common years.
static DOY_COMMON: [DoyEntry; DOY_TABLE_LEN] = build_doy_table(false);

/// Day-of-year offset (shifted by [`DOY_MARGIN`]) to date, for leap years.
static DOY_LEAP: [DoyEntry; DOY_TABLE_LEN] = build_doy_table(true);

// loop bounds keep every index below DOY_TABLE_LEN
#[expect(clippy::indexing_slicing)]
const fn build_doy_table(leap: bool) -> [DoyEntry; DOY_TABLE_LEN] {
    let mut table = [DoyEntry {
        year_offset: 0,
        month: 1,
        day: 1,
    }; DOY_TABLE_LEN];

    // December 25..31 of the previous year
    let mut i = 0;
    while i < DOY_MARGIN {
        table[i] = DoyEntry {
            year_offset: -1,
            month: 12,
            day: (32 - DOY_MARGIN + i) as u8,
        };
        i += 1;
    }

    let mut month = 1;
    while month <= 12 {
        let mut day = 1;
        while day <= month_length(leap, month) {
            table[i] = DoyEntry {
                year_offset: 0,
                month,
                day,
            };
            i += 1;
            day += 1;
        }
        month += 1;
    }

    // January of the next year fills the rest
    let mut day = 1;
    while i < DOY_TABLE_LEN {
        table[i] = DoyEntry {
            year_offset: 1,
            month: 1,
            day,
        };
        i += 1;
        day += 1;
    }

    table
}

/// Whether `year` has a February 29th.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `year`.
#[must_use]
pub const fn year_length(year: i32) -> i32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Number of days in `month` (1-12) of `year`, or 0 for any other month.
#[must_use]
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    month_length(is_leap_year(year), month)
}

const fn month_length(is_leap: bool, month: u8) -> u8 {
    match month {
        2 if is_leap => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        _ => 0,
    }
}

/// Number of days of the year before the first day of `month` (1-13).
///
/// Month 13 stands for the end of the year. Month 0 counts as January and months past 13 as 13.
#[must_use]
pub const fn days_before_month(is_leap: bool, month: u8) -> i32 {
    let days = match month {
        0 | 1 => 0,
        2 => 31,
        3 => 59,
        4 => 90,
        5 => 120,
        6 => 151,
        7 => 181,
        8 => 212,
        9 => 243,
        10 => 273,
        11 => 304,
        12 => 334,
        _ => 365,
    };
    if is_leap && month > 2 { days + 1 } else { days }
}

/// Number of days between 0001-01-01 and January 1st of `year`.
#[must_use]
pub const fn days_before_year(year: i32) -> i64 {
    let y = year as i64 - 1;
    y * DAYS_IN_YEAR + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
}

/// Ordinal of the given date, where 0001-01-01 is 1.
///
/// `day` may run past the end of the month; the ordinal then lands in a later month.
#[must_use]
pub const fn ordinal(year: i32, month: u8, day: u8) -> i64 {
    days_before_year(year) + days_before_month(is_leap_year(year), month) as i64 + day as i64
}

/// Date of the given ordinal.
#[must_use]
pub fn from_ordinal(ordinal: i64) -> Date {
    let n = ordinal - 1;
    let n400 = n.div_euclid(DAYS_IN_400_YEARS);
    let n = n.rem_euclid(DAYS_IN_400_YEARS);
    let (n100, n) = (n / DAYS_IN_100_YEARS, n % DAYS_IN_100_YEARS);
    let (n4, n) = (n / DAYS_IN_4_YEARS, n % DAYS_IN_4_YEARS);
    let (n1, doy) = (n / DAYS_IN_YEAR, n % DAYS_IN_YEAR);

    let year = saturate_year(n400 * 400 + n100 * 100 + n4 * 4 + n1 + 1);
    if n1 == 4 || n100 == 4 {
        // last day of a leap cycle
        return (year.saturating_sub(1), 12, 31);
    }

    doy_to_date(year, is_leap_year(year), doy as i32)
}

/// Date of a zero-based day-of-year offset, which may fall before or after `year`.
///
/// `is_leap` must describe `year`. Offsets within a week of the year are served from a table.
#[must_use]
pub fn doy_to_date(year: i32, is_leap: bool, doy: i32) -> Date {
    let table = if is_leap { &DOY_LEAP } else { &DOY_COMMON };
    let entry = usize::try_from(i64::from(doy) + DOY_MARGIN as i64)
        .ok()
        .and_then(|index| table.get(index));

    match entry {
        Some(entry) => (
            year.saturating_add(i32::from(entry.year_offset)),
            entry.month,
            entry.day,
        ),
        None => from_ordinal(days_before_year(year) + 1 + i64::from(doy)),
    }
}

/// Whether `date` names a day that exists in the calendar.
#[must_use]
pub const fn is_valid_date(date: Date) -> bool {
    let (year, month, day) = date;
    1 <= month && month <= 12 && 1 <= day && day <= days_in_month(year, month)
}

/// Carries overflowing months into years and overflowing days into months.
///
/// `month` and `day` may be any value, including zero or negative ones, which borrow from the
/// previous month or year.
#[must_use]
pub fn normalize_date(year: i32, month: i64, day: i64) -> Date {
    let month = month - 1;
    let year = saturate_year(i64::from(year) + month.div_euclid(12));
    let month = month.rem_euclid(12) as u8 + 1;

    let first = ordinal(year, month, 1);
    from_ordinal(first + day - 1)
}

/// Carries overflowing seconds, minutes and hours, returning the whole days carried out.
#[must_use]
pub const fn normalize_time(hour: i64, minute: i64, second: i64) -> (i64, Time) {
    let minute = minute + second.div_euclid(60);
    let second = second.rem_euclid(60);
    let hour = hour + minute.div_euclid(60);
    let minute = minute.rem_euclid(60);
    let days = hour.div_euclid(24);
    let hour = hour.rem_euclid(24);
    (days, (hour as u8, minute as u8, second as u8))
}

/// Normalizes a time and folds the carried days into the date.
#[must_use]
pub fn normalize_date_time(date: (i32, i64, i64), time: (i64, i64, i64)) -> (Date, Time) {
    let (days, time) = normalize_time(time.0, time.1, time.2);
    let (year, month, day) = date;
    (normalize_date(year, month, day + days), time)
}

/// Week day of an ordinal.
#[must_use]
pub fn weekday(ordinal: i64) -> WeekDay {
    WeekDay::from_offset((ordinal - 1).rem_euclid(7))
}

/// Ordinal of the first day of week 1, for the year whose January 1st is `first_ordinal`.
///
/// Week 1 is the first week, starting on the week start day, with at least four days in the year.
#[must_use]
pub const fn first_week_start(first_ordinal: i64, week_start_offset: i64) -> i64 {
    let dow = (first_ordinal - week_start_offset - 1).rem_euclid(7);
    if dow >= 4 {
        first_ordinal - dow + 7
    } else {
        first_ordinal - dow
    }
}

/// Number of weeks, 52 or 53, in the year whose January 1st is `first_ordinal`.
#[must_use]
pub const fn week_count_in_year(first_ordinal: i64, is_leap: bool, week_start_offset: i64) -> i32 {
    let dow = (first_ordinal - week_start_offset - 1).rem_euclid(7);
    if dow == 3 || (dow == 2 && is_leap) {
        53
    } else {
        52
    }
}

/// Zero-based index of a signed one-based `value` in a list of `len` items.
///
/// Negative values count from the end, so `-1` is the last item.
pub(crate) fn resolve_index(value: i32, len: i32) -> Option<i32> {
    match value {
        1.. if value <= len => Some(value - 1),
        ..=-1 if -value <= len => Some(len + value),
        _ => None,
    }
}

pub(crate) fn saturate_year(year: i64) -> i32 {
    year.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
