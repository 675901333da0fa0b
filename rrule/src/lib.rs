// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Expand iCalendar recurrence rules (RFC 5545 `RRULE`) into concrete date-times.
//!
//! A [`RecurrenceRule`] is built once from [`RuleOptions`] and never changes afterwards. Each call
//! to [`RecurrenceRule::iter_from`] starts an independent, lazy [`Occurrences`] sequence:
//!
//! ```
//! use aimcal_rrule::{DateTime, Frequency, RuleOptions};
//!
//! let rule = RuleOptions::new(Frequency::Monthly)
//!     .with_month_days([-3])
//!     .with_count(3)
//!     .build()?;
//!
//! let start = DateTime::new(1997, 9, 28, 9, 0, 0)?;
//! let dates = rule
//!     .iter_from(start)
//!     .map(|occurrence| occurrence.map(|dt| dt.to_string()))
//!     .collect::<Result<Vec<_>, _>>()?;
//!
//! assert_eq!(
//!     dates,
//!     ["1997-09-28T09:00:00", "1997-10-29T09:00:00", "1997-11-28T09:00:00"]
//! );
//! # Ok::<(), aimcal_rrule::Error>(())
//! ```
//!
//! All arithmetic is done on naive local date-times in the proleptic Gregorian calendar.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Calendar arithmetic narrows validated values between integer widths all the time
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::similar_names,
    clippy::single_match_else
)]

pub mod calendar;
mod error;
mod frequency;
mod iter;
mod property;
mod rule;
pub mod value;

pub use crate::error::{Error, PropertyKind};
pub use crate::iter::Occurrences;
pub use crate::rule::{RecurrenceRule, RuleOptions};
pub use crate::value::{DateTime, Frequency, WeekDay, WeekDayNum};
