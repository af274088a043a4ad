//! Coupon model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a coupon's `discount` value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponKind {
    /// `discount` is a percentage of the subtotal.
    Percent,
    /// `discount` is a fixed rupee amount.
    Flat,
}

/// A discount rule with activity, expiry, usage-cap and minimum-order
/// constraints. Immutable once handed to validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    #[serde(default)]
    pub active: bool,
    #[serde(rename = "type")]
    pub kind: CouponKind,
    /// Percent rate or flat rupee amount, depending on `kind`.
    pub discount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_count: Option<u32>,
    /// Minimum subtotal (whole rupees) required to redeem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_order: Option<i64>,
    /// Cap on the computed discount; percent-type only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_discount: Option<i64>,
    /// Display text shown when the coupon is applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}
