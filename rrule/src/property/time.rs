// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use crate::calendar::Time;
use crate::value::Frequency;

pub(crate) type TimeSet = BTreeSet<Time>;

/// A time constraint and its literal values, sorted and deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TimeProperty {
    Hours(Vec<u8>),
    Minutes(Vec<u8>),
    Seconds(Vec<u8>),
}

impl TimeProperty {
    /// Filters the candidates when the rule is at least as fine as this field, and otherwise
    /// pairs every candidate with every listed value.
    pub fn evaluate(&self, candidates: &TimeSet, frequency: Frequency) -> TimeSet {
        let (values, field_frequency) = match self {
            TimeProperty::Hours(values) => (values, Frequency::Hourly),
            TimeProperty::Minutes(values) => (values, Frequency::Minutely),
            TimeProperty::Seconds(values) => (values, Frequency::Secondly),
        };

        if frequency >= field_frequency {
            candidates
                .iter()
                .copied()
                .filter(|&time| values.contains(&self.field(time)))
                .collect()
        } else {
            candidates
                .iter()
                .flat_map(|&time| values.iter().map(move |&value| self.with_field(time, value)))
                .collect()
        }
    }

    fn field(&self, (hour, minute, second): Time) -> u8 {
        match self {
            TimeProperty::Hours(_) => hour,
            TimeProperty::Minutes(_) => minute,
            TimeProperty::Seconds(_) => second,
        }
    }

    fn with_field(&self, (hour, minute, second): Time, value: u8) -> Time {
        match self {
            TimeProperty::Hours(_) => (value, minute, second),
            TimeProperty::Minutes(_) => (hour, value, second),
            TimeProperty::Seconds(_) => (hour, minute, value),
        }
    }
}
