// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use aimcal_rrule::{DateTime, Error, RuleOptions};
use tracing_subscriber::EnvFilter;

/// Creates a date-time at the start of the given minute.
///
/// # Panics
///
/// Panics if the date-time does not exist.
#[must_use]
pub fn dt(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> DateTime {
    DateTime::new(year, month, day, hour, minute, 0).expect("valid date-time")
}

/// Creates one date-time per day, all at the same time of day.
///
/// # Example
///
/// ```ignore
/// let expected = days_at((9, 0), &[(1997, 9, 2), (1997, 9, 3)]);
/// ```
#[must_use]
pub fn days_at((hour, minute): (u8, u8), days: &[(i32, u8, u8)]) -> Vec<DateTime> {
    days.iter()
        .map(|&(year, month, day)| dt(year, month, day, hour, minute))
        .collect()
}

/// Builds the rule and collects every occurrence from `start`.
///
/// # Panics
///
/// Panics if the options are rejected or the expansion fails.
#[must_use]
pub fn expand(options: &RuleOptions, start: DateTime) -> Vec<DateTime> {
    expand_all(options, start).expect("expansion should succeed")
}

/// Builds the rule and collects every occurrence from `start`, stopping at the first error.
///
/// # Errors
///
/// Returns the error raised while building or expanding the rule.
pub fn expand_all(options: &RuleOptions, start: DateTime) -> Result<Vec<DateTime>, Error> {
    init_tracing();
    let rule = options.clone().build()?;
    rule.iter_from(start).collect()
}

/// Installs a test subscriber honouring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
