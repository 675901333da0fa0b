// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Recurrence frequency.
///
/// Variants are ordered from the coarsest to the finest period, so `Yearly < Monthly` and
/// `freq >= Frequency::Weekly` reads as "weekly or finer".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[strum(serialize_all = "UPPERCASE")]
#[expect(missing_docs)]
pub enum Frequency {
    Yearly,
    Monthly,
    Weekly,
    Daily,
    Hourly,
    Minutely,
    Secondly,
}

impl Frequency {
    /// Whether an indexed week day (`2TU`, `-1FR`) has a container to count in.
    #[must_use]
    pub const fn allows_week_day_occurrence(self) -> bool {
        matches!(self, Frequency::Yearly | Frequency::Monthly)
    }
}
