//! Checkout breakdown model

use serde::{Deserialize, Serialize};

/// The computed breakdown of what a customer owes. Not persisted.
///
/// Holds `total = subtotal + delivery_fee - discount` with
/// `0 <= discount <= subtotal` and `total >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutTotals {
    pub subtotal: i64,
    pub delivery_fee: i64,
    pub discount: i64,
    pub total: i64,
}
