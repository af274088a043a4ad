//! Happy-hour promotion window model

use serde::{Deserialize, Serialize};

/// Weekday coverage of a promotion window: the `"all"` wildcard or an
/// explicit list of weekday indices (0 = Sunday .. 6 = Saturday).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DaySpec {
    Wildcard(DayWildcard),
    Days(Vec<u8>),
}

/// The literal `"all"` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayWildcard {
    All,
}

impl DaySpec {
    /// Every day of the week.
    pub fn all() -> Self {
        DaySpec::Wildcard(DayWildcard::All)
    }

    /// Whether the given weekday index (0 = Sunday) is covered.
    pub fn contains(&self, weekday: u8) -> bool {
        match self {
            DaySpec::Wildcard(DayWildcard::All) => true,
            DaySpec::Days(days) => days.contains(&weekday),
        }
    }
}

/// A day/hour-bounded promotional window granting a category-scoped
/// percentage discount. Active iff the weekday is covered and
/// `start_hour <= hour < end_hour` (end-exclusive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HappyHourWindow {
    pub days: DaySpec,
    /// First active hour, 0..=23.
    pub start_hour: u8,
    /// First inactive hour, 0..=23 (exclusive bound).
    pub end_hour: u8,
    /// Discount percentage, e.g. 15 for 15% off.
    pub discount: u8,
    /// Banner text shown while the window is active.
    pub label: String,
    /// Menu categories the discount applies to; `"all"` is a wildcard.
    pub categories: Vec<String>,
}
