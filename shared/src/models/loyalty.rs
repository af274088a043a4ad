//! Loyalty tier model

use serde::{Deserialize, Serialize};

/// A named band of accumulated points granting status and benefits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyaltyTier {
    pub name: String,
    /// Points threshold at which the tier starts.
    pub min: u32,
    /// Display color, e.g. `#cd7f32`.
    pub color: String,
    pub icon: String,
}

impl LoyaltyTier {
    pub fn new(name: &str, min: u32, color: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            min,
            color: color.to_string(),
            icon: icon.to_string(),
        }
    }
}
