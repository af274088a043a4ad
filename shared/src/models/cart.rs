//! Cart line model
//!
//! A line is keyed by `(name, spice level, add-ons)`; two lines with the
//! same key are the same line and merge by summing quantity.

use serde::{Deserialize, Serialize};

/// A selected add-on attached to a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addon {
    pub name: String,
    /// Price in whole rupees.
    pub price: i64,
}

/// One distinct cart entry with a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub name: String,
    /// Unit price in whole rupees, add-ons excluded.
    pub price: i64,
    pub quantity: i32,
    pub spice_level: String,
    #[serde(default)]
    pub addons: Vec<Addon>,
}

impl CartLine {
    /// Unit price including add-ons.
    pub fn unit_total(&self) -> i64 {
        self.price + self.addons.iter().map(|a| a.price).sum::<i64>()
    }

    /// Line total: `(price + add-on prices) × quantity`.
    pub fn line_total(&self) -> i64 {
        self.unit_total() * i64::from(self.quantity)
    }

    /// Whether this line is the same line as `(name, spice_level, addons)`.
    ///
    /// Add-on order is irrelevant: the identity key sorts add-ons by
    /// `(name, price)` before comparing.
    pub fn matches(&self, name: &str, spice_level: &str, addons: &[Addon]) -> bool {
        self.name == name
            && self.spice_level == spice_level
            && addon_key(&self.addons) == addon_key(addons)
    }
}

fn addon_key(addons: &[Addon]) -> Vec<(&str, i64)> {
    let mut key: Vec<(&str, i64)> = addons.iter().map(|a| (a.name.as_str(), a.price)).collect();
    key.sort_unstable();
    key
}
