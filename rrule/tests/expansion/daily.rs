// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Daily recurrences.

use aimcal_rrule::{Frequency, RuleOptions};

use crate::common::{days_at, dt, expand};

#[test]
fn daily_1() {
    // RRULE:FREQ=DAILY;COUNT=10
    let options = RuleOptions::new(Frequency::Daily)
        .with_count(10);
    let start = dt(1997, 9, 2, 9, 0);
    let expected = days_at(
        (9, 0),
        &[
            (1997, 9, 2), (1997, 9, 3), (1997, 9, 4), (1997, 9, 5), (1997, 9, 6), (1997, 9, 7),
            (1997, 9, 8), (1997, 9, 9), (1997, 9, 10), (1997, 9, 11),
        ],
    );
    assert_eq!(expand(&options, start), expected);
}

#[test]
fn daily_2() {
    // RRULE:FREQ=DAILY;UNTIL=19971224T000000
    let options = RuleOptions::new(Frequency::Daily)
        .with_until(dt(1997, 12, 24, 0, 0));
    let start = dt(1997, 9, 2, 9, 0);
    let expected = days_at(
        (9, 0),
        &[
            (1997, 9, 2), (1997, 9, 3), (1997, 9, 4), (1997, 9, 5), (1997, 9, 6), (1997, 9, 7),
            (1997, 9, 8), (1997, 9, 9), (1997, 9, 10), (1997, 9, 11), (1997, 9, 12), (1997, 9, 13),
            (1997, 9, 14), (1997, 9, 15), (1997, 9, 16), (1997, 9, 17), (1997, 9, 18),
            (1997, 9, 19), (1997, 9, 20), (1997, 9, 21), (1997, 9, 22), (1997, 9, 23),
            (1997, 9, 24), (1997, 9, 25), (1997, 9, 26), (1997, 9, 27), (1997, 9, 28),
            (1997, 9, 29), (1997, 9, 30), (1997, 10, 1), (1997, 10, 2), (1997, 10, 3),
            (1997, 10, 4), (1997, 10, 5), (1997, 10, 6), (1997, 10, 7), (1997, 10, 8),
            (1997, 10, 9), (1997, 10, 10), (1997, 10, 11), (1997, 10, 12), (1997, 10, 13),
            (1997, 10, 14), (1997, 10, 15), (1997, 10, 16), (1997, 10, 17), (1997, 10, 18),
            (1997, 10, 19), (1997, 10, 20), (1997, 10, 21), (1997, 10, 22), (1997, 10, 23),
            (1997, 10, 24), (1997, 10, 25), (1997, 10, 26), (1997, 10, 27), (1997, 10, 28),
            (1997, 10, 29), (1997, 10, 30), (1997, 10, 31), (1997, 11, 1), (1997, 11, 2),
            (1997, 11, 3), (1997, 11, 4), (1997, 11, 5), (1997, 11, 6), (1997, 11, 7),
            (1997, 11, 8), (1997, 11, 9), (1997, 11, 10), (1997, 11, 11), (1997, 11, 12),
            (1997, 11, 13), (1997, 11, 14), (1997, 11, 15), (1997, 11, 16), (1997, 11, 17),
            (1997, 11, 18), (1997, 11, 19), (1997, 11, 20), (1997, 11, 21), (1997, 11, 22),
            (1997, 11, 23), (1997, 11, 24), (1997, 11, 25), (1997, 11, 26), (1997, 11, 27),
            (1997, 11, 28), (1997, 11, 29), (1997, 11, 30), (1997, 12, 1), (1997, 12, 2),
            (1997, 12, 3), (1997, 12, 4), (1997, 12, 5), (1997, 12, 6), (1997, 12, 7),
            (1997, 12, 8), (1997, 12, 9), (1997, 12, 10), (1997, 12, 11), (1997, 12, 12),
            (1997, 12, 13), (1997, 12, 14), (1997, 12, 15), (1997, 12, 16), (1997, 12, 17),
            (1997, 12, 18), (1997, 12, 19), (1997, 12, 20), (1997, 12, 21), (1997, 12, 22),
            (1997, 12, 23),
        ],
    );
    assert_eq!(expand(&options, start), expected);
}

#[test]
fn every_2_days() {
    // RRULE:FREQ=DAILY;INTERVAL=2;COUNT=20
    let options = RuleOptions::new(Frequency::Daily)
        .with_interval(2)
        .with_count(20);
    let start = dt(1997, 9, 2, 9, 0);
    let expected = days_at(
        (9, 0),
        &[
            (1997, 9, 2), (1997, 9, 4), (1997, 9, 6), (1997, 9, 8), (1997, 9, 10), (1997, 9, 12),
            (1997, 9, 14), (1997, 9, 16), (1997, 9, 18), (1997, 9, 20), (1997, 9, 22),
            (1997, 9, 24), (1997, 9, 26), (1997, 9, 28), (1997, 9, 30), (1997, 10, 2),
            (1997, 10, 4), (1997, 10, 6), (1997, 10, 8), (1997, 10, 10),
        ],
    );
    assert_eq!(expand(&options, start), expected);
}

#[test]
fn every_10_days() {
    // RRULE:FREQ=DAILY;INTERVAL=10;COUNT=5
    let options = RuleOptions::new(Frequency::Daily)
        .with_interval(10)
        .with_count(5);
    let start = dt(1997, 9, 2, 9, 0);
    let expected = days_at(
        (9, 0),
        &[
            (1997, 9, 2), (1997, 9, 12), (1997, 9, 22), (1997, 10, 2), (1997, 10, 12),
        ],
    );
    assert_eq!(expand(&options, start), expected);
}

#[test]
fn daily_on_month() {
    // RRULE:FREQ=DAILY;UNTIL=20000131T140000;BYMONTH=1
    let options = RuleOptions::new(Frequency::Daily)
        .with_months([1])
        .with_until(dt(2000, 1, 31, 14, 0));
    let start = dt(1998, 1, 1, 9, 0);
    let expected = days_at(
        (9, 0),
        &[
            (1998, 1, 1), (1998, 1, 2), (1998, 1, 3), (1998, 1, 4), (1998, 1, 5), (1998, 1, 6),
            (1998, 1, 7), (1998, 1, 8), (1998, 1, 9), (1998, 1, 10), (1998, 1, 11), (1998, 1, 12),
            (1998, 1, 13), (1998, 1, 14), (1998, 1, 15), (1998, 1, 16), (1998, 1, 17),
            (1998, 1, 18), (1998, 1, 19), (1998, 1, 20), (1998, 1, 21), (1998, 1, 22),
            (1998, 1, 23), (1998, 1, 24), (1998, 1, 25), (1998, 1, 26), (1998, 1, 27),
            (1998, 1, 28), (1998, 1, 29), (1998, 1, 30), (1998, 1, 31), (1999, 1, 1), (1999, 1, 2),
            (1999, 1, 3), (1999, 1, 4), (1999, 1, 5), (1999, 1, 6), (1999, 1, 7), (1999, 1, 8),
            (1999, 1, 9), (1999, 1, 10), (1999, 1, 11), (1999, 1, 12), (1999, 1, 13),
            (1999, 1, 14), (1999, 1, 15), (1999, 1, 16), (1999, 1, 17), (1999, 1, 18),
            (1999, 1, 19), (1999, 1, 20), (1999, 1, 21), (1999, 1, 22), (1999, 1, 23),
            (1999, 1, 24), (1999, 1, 25), (1999, 1, 26), (1999, 1, 27), (1999, 1, 28),
            (1999, 1, 29), (1999, 1, 30), (1999, 1, 31), (2000, 1, 1), (2000, 1, 2), (2000, 1, 3),
            (2000, 1, 4), (2000, 1, 5), (2000, 1, 6), (2000, 1, 7), (2000, 1, 8), (2000, 1, 9),
            (2000, 1, 10), (2000, 1, 11), (2000, 1, 12), (2000, 1, 13), (2000, 1, 14),
            (2000, 1, 15), (2000, 1, 16), (2000, 1, 17), (2000, 1, 18), (2000, 1, 19),
            (2000, 1, 20), (2000, 1, 21), (2000, 1, 22), (2000, 1, 23), (2000, 1, 24),
            (2000, 1, 25), (2000, 1, 26), (2000, 1, 27), (2000, 1, 28), (2000, 1, 29),
            (2000, 1, 30), (2000, 1, 31),
        ],
    );
    assert_eq!(expand(&options, start), expected);
}

#[test]
fn daily_on_hours_and_minutes() {
    // RRULE:FREQ=DAILY;BYHOUR=9,10,11,12,13,14,15,16;BYMINUTE=0,20,40;COUNT=48
    let options = RuleOptions::new(Frequency::Daily)
        .with_hours([9, 10, 11, 12, 13, 14, 15, 16])
        .with_minutes([0, 20, 40])
        .with_count(48);
    let start = dt(1997, 9, 2, 9, 0);
    let expected = [
        dt(1997, 9, 2, 9, 0),
        dt(1997, 9, 2, 9, 20),
        dt(1997, 9, 2, 9, 40),
        dt(1997, 9, 2, 10, 0),
        dt(1997, 9, 2, 10, 20),
        dt(1997, 9, 2, 10, 40),
        dt(1997, 9, 2, 11, 0),
        dt(1997, 9, 2, 11, 20),
        dt(1997, 9, 2, 11, 40),
        dt(1997, 9, 2, 12, 0),
        dt(1997, 9, 2, 12, 20),
        dt(1997, 9, 2, 12, 40),
        dt(1997, 9, 2, 13, 0),
        dt(1997, 9, 2, 13, 20),
        dt(1997, 9, 2, 13, 40),
        dt(1997, 9, 2, 14, 0),
        dt(1997, 9, 2, 14, 20),
        dt(1997, 9, 2, 14, 40),
        dt(1997, 9, 2, 15, 0),
        dt(1997, 9, 2, 15, 20),
        dt(1997, 9, 2, 15, 40),
        dt(1997, 9, 2, 16, 0),
        dt(1997, 9, 2, 16, 20),
        dt(1997, 9, 2, 16, 40),
        dt(1997, 9, 3, 9, 0),
        dt(1997, 9, 3, 9, 20),
        dt(1997, 9, 3, 9, 40),
        dt(1997, 9, 3, 10, 0),
        dt(1997, 9, 3, 10, 20),
        dt(1997, 9, 3, 10, 40),
        dt(1997, 9, 3, 11, 0),
        dt(1997, 9, 3, 11, 20),
        dt(1997, 9, 3, 11, 40),
        dt(1997, 9, 3, 12, 0),
        dt(1997, 9, 3, 12, 20),
        dt(1997, 9, 3, 12, 40),
        dt(1997, 9, 3, 13, 0),
        dt(1997, 9, 3, 13, 20),
        dt(1997, 9, 3, 13, 40),
        dt(1997, 9, 3, 14, 0),
        dt(1997, 9, 3, 14, 20),
        dt(1997, 9, 3, 14, 40),
        dt(1997, 9, 3, 15, 0),
        dt(1997, 9, 3, 15, 20),
        dt(1997, 9, 3, 15, 40),
        dt(1997, 9, 3, 16, 0),
        dt(1997, 9, 3, 16, 20),
        dt(1997, 9, 3, 16, 40),
    ];
    assert_eq!(expand(&options, start), expected);
}

#[test]
fn daily_on_months() {
    // RRULE:FREQ=DAILY;UNTIL=20141206T000000;BYMONTH=11,12,1,2,3,4,10
    let options = RuleOptions::new(Frequency::Daily)
        .with_months([11, 12, 1, 2, 3, 4, 10])
        .with_until(dt(2014, 12, 6, 0, 0));
    let start = dt(2014, 10, 30, 0, 0);
    let expected = days_at(
        (0, 0),
        &[
            (2014, 10, 30), (2014, 10, 31), (2014, 11, 1), (2014, 11, 2), (2014, 11, 3),
            (2014, 11, 4), (2014, 11, 5), (2014, 11, 6), (2014, 11, 7), (2014, 11, 8),
            (2014, 11, 9), (2014, 11, 10), (2014, 11, 11), (2014, 11, 12), (2014, 11, 13),
            (2014, 11, 14), (2014, 11, 15), (2014, 11, 16), (2014, 11, 17), (2014, 11, 18),
            (2014, 11, 19), (2014, 11, 20), (2014, 11, 21), (2014, 11, 22), (2014, 11, 23),
            (2014, 11, 24), (2014, 11, 25), (2014, 11, 26), (2014, 11, 27), (2014, 11, 28),
            (2014, 11, 29), (2014, 11, 30), (2014, 12, 1), (2014, 12, 2), (2014, 12, 3),
            (2014, 12, 4), (2014, 12, 5), (2014, 12, 6),
        ],
    );
    assert_eq!(expand(&options, start), expected);
}

#[test]
fn daily_on_week() {
    // RRULE:FREQ=DAILY;UNTIL=19870101T000000;BYWEEKNO=1
    let options = RuleOptions::new(Frequency::Daily)
        .with_weeks([1])
        .with_until(dt(1987, 1, 1, 0, 0));
    let start = dt(1985, 1, 1, 9, 0);
    let expected = days_at(
        (9, 0),
        &[
            (1985, 1, 1), (1985, 1, 2), (1985, 1, 3), (1985, 1, 4), (1985, 1, 5), (1985, 1, 6),
            (1985, 12, 30), (1985, 12, 31), (1986, 1, 1), (1986, 1, 2), (1986, 1, 3), (1986, 1, 4),
            (1986, 1, 5), (1986, 12, 29), (1986, 12, 30), (1986, 12, 31),
        ],
    );
    assert_eq!(expand(&options, start), expected);
}
