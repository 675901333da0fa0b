// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Period-by-period expansion of a recurrence rule.

use std::collections::{BTreeSet, VecDeque};
use std::iter::FusedIterator;

use crate::calendar::{self, Date, MAX_YEAR, Time};
use crate::error::Error;
use crate::frequency::YearInfo;
use crate::property::{DateChain, TimeSet};
use crate::rule::RecurrenceRule;
use crate::value::DateTime;

/// Upper bound of rules without an until date-time.
const LATEST: (Date, Time) = ((MAX_YEAR, 12, 31), (23, 59, 59));

/// Occurrences of a [`RecurrenceRule`], in strictly increasing order.
///
/// The sequence is lazy: each period is only expanded once the occurrences before it have been
/// consumed. It ends when the count or until bound is reached. Without an until date-time it ends
/// after the last second of year 9999, or with [`Error::RangeExhausted`] if nothing occurred by
/// then. It yields nothing after an error.
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    rule: &'a RecurrenceRule,
    dates: Option<DateChain>,
    start: (Date, Time),
    /// Unaligned anchor of the current period
    anchor: (Date, Time),
    last: Option<(Date, Time)>,
    emitted: u32,
    pending: VecDeque<DateTime>,
    failure: Option<Error>,
    done: bool,
}

impl<'a> Occurrences<'a> {
    pub(crate) fn new(rule: &'a RecurrenceRule, start: DateTime) -> Self {
        tracing::debug!(
            frequency = %rule.frequency,
            %start,
            count = ?rule.count,
            until = ?rule.until,
            "expanding recurrence"
        );

        Occurrences {
            rule,
            dates: DateChain::new(&rule.date_properties, rule.frequency, start),
            start: start.parts(),
            anchor: start.parts(),
            last: None,
            emitted: 0,
            pending: VecDeque::new(),
            failure: None,
            done: false,
        }
    }

    /// Expands the current period, then moves the anchor to the next one.
    fn step(&mut self) {
        let rule = self.rule;
        let (floor, dates) = self.candidate_dates();
        let until = rule.until.map(DateTime::parts);

        if until.is_some_and(|until| (floor, (0, 0, 0)) > until) {
            tracing::trace!(?floor, "period starts after until");
            self.done = true;
            return;
        }
        if floor.0 > MAX_YEAR {
            if self.emitted == 0 {
                self.fail(floor.0);
            } else {
                tracing::trace!(?floor, "period starts after the maximum year");
                self.done = true;
            }
            return;
        }

        if !dates.is_empty() {
            let times = self.candidate_times();
            let candidates: Vec<_> = dates
                .iter()
                .flat_map(|&date| times.iter().map(move |&time| (date, time)))
                .collect();
            tracing::trace!(
                ?floor,
                candidates = candidates.len(),
                "expanded period"
            );
            let bound = until.unwrap_or(LATEST);
            self.emit(select_positions(candidates, &rule.set_positions), bound);
        }

        if !self.done {
            self.anchor = rule.frequency.advance(self.anchor, rule.interval);
        }
    }

    /// Candidate dates of the current period, with the first day the period covers.
    fn candidate_dates(&self) -> (Date, Vec<Date>) {
        let (date, _) = self.anchor;
        let Some(chain) = &self.dates else {
            return (date, vec![date]);
        };

        let rule = self.rule;
        let period = rule.frequency.period();
        let aligned = period.align_start(date, rule.week_start);
        let year = YearInfo::new(period.logical_year(aligned), rule.week_start);
        let range = period.day_range(aligned, &year, chain.spans_weeks());
        let floor = year.date_of(range.start);

        let days = chain.evaluate(&year, range, rule.frequency);
        (floor, days.into_iter().map(|doy| year.date_of(doy)).collect())
    }

    fn candidate_times(&self) -> TimeSet {
        let mut times = TimeSet::from([self.anchor.1]);
        for property in &self.rule.time_properties {
            times = property.evaluate(&times, self.rule.frequency);
            if times.is_empty() {
                break;
            }
        }
        times
    }

    fn emit(&mut self, candidates: Vec<(Date, Time)>, until: (Date, Time)) {
        for candidate in candidates {
            if candidate > until {
                self.done = true;
                return;
            }
            if candidate < self.start || self.last.is_some_and(|last| candidate <= last) {
                continue;
            }
            if !calendar::is_valid_date(candidate.0) {
                tracing::trace!(date = ?candidate.0, "skipping day not in calendar");
                continue;
            }
            let Some(occurrence) = DateTime::from_parts(candidate.0, candidate.1) else {
                continue;
            };
            self.pending.push_back(occurrence);
            self.last = Some(candidate);
            self.emitted += 1;
            if self.rule.count.is_some_and(|count| self.emitted >= count) {
                self.done = true;
                return;
            }
        }
    }

    fn fail(&mut self, year: i32) {
        tracing::warn!(year, "recurrence ran past the maximum year");
        self.failure = Some(Error::RangeExhausted { year });
        self.done = true;
    }
}

impl Iterator for Occurrences<'_> {
    type Item = Result<DateTime, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(occurrence) = self.pending.pop_front() {
                return Some(Ok(occurrence));
            }
            if let Some(err) = self.failure.take() {
                return Some(Err(err));
            }
            if self.done {
                return None;
            }
            self.step();
        }
    }
}

impl FusedIterator for Occurrences<'_> {}

/// Keeps the candidates at the given 1-based positions, negative counting from the end.
fn select_positions(candidates: Vec<(Date, Time)>, positions: &[i16]) -> Vec<(Date, Time)> {
    if positions.is_empty() {
        return candidates;
    }

    let len = i32::try_from(candidates.len()).unwrap_or(i32::MAX);
    let picked: BTreeSet<usize> = positions
        .iter()
        .filter_map(|&p| calendar::resolve_index(p.into(), len))
        .map(|index| index as usize)
        .collect();

    picked
        .into_iter()
        .filter_map(|index| candidates.get(index).copied())
        .collect()
}
