// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Value types of recurrence rules and their occurrences.

mod datetime;
mod frequency;
mod weekday;

pub use crate::value::datetime::DateTime;
pub use crate::value::frequency::Frequency;
pub use crate::value::weekday::{WeekDay, WeekDayNum};
