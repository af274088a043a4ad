//! Coupon validation and discount calculation
//!
//! Validation and calculation are deliberately decoupled: a caller may show
//! a discount preview before full validation, or reject a coupon while
//! still knowing its theoretical value. [`calc_discount`] never calls
//! [`validate_coupon`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use shared::models::{Coupon, CouponKind};
use thiserror::Error;

/// Why a coupon was rejected. The display text is shown to the customer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CouponRejection {
    #[error("this coupon is no longer active")]
    NotActive,

    #[error("this coupon has expired")]
    Expired,

    #[error("this coupon has reached its usage limit")]
    UsageLimitReached,

    #[error("minimum order of \u{20B9}{min_order} required")]
    BelowMinimumOrder { min_order: i64 },
}

/// Validate a coupon against the order context.
///
/// Preconditions are checked in a fixed order so the customer always sees
/// the first failing reason: active, expiry, usage cap, minimum order.
/// A missing coupon rejects as not active.
pub fn validate_coupon(
    coupon: Option<&Coupon>,
    subtotal: i64,
    now: DateTime<Utc>,
) -> Result<(), CouponRejection> {
    let Some(coupon) = coupon else {
        return Err(CouponRejection::NotActive);
    };
    if !coupon.active {
        return Err(CouponRejection::NotActive);
    }
    if let Some(expires_at) = coupon.expires_at
        && expires_at < now
    {
        return Err(CouponRejection::Expired);
    }
    if let Some(limit) = coupon.usage_limit
        && coupon.used_count.unwrap_or(0) >= limit
    {
        return Err(CouponRejection::UsageLimitReached);
    }
    if let Some(min_order) = coupon.min_order
        && subtotal < min_order
    {
        return Err(CouponRejection::BelowMinimumOrder { min_order });
    }
    Ok(())
}

/// Compute the rupee discount a coupon grants on `subtotal`.
///
/// Percent coupons floor to whole rupees and honour `max_discount`; flat
/// coupons are taken at face value. Either way the result is clamped to
/// `[0, subtotal]`, so a discount can never push a total negative.
pub fn calc_discount(coupon: Option<&Coupon>, subtotal: i64) -> i64 {
    let Some(coupon) = coupon else {
        return 0;
    };

    let amount = match coupon.kind {
        CouponKind::Percent => {
            let computed = (Decimal::from(subtotal) * coupon.discount / Decimal::ONE_HUNDRED)
                .floor()
                .to_i64()
                .unwrap_or(0);
            match coupon.max_discount {
                Some(cap) => computed.min(cap),
                None => computed,
            }
        }
        CouponKind::Flat => coupon.discount.trunc().to_i64().unwrap_or(0),
    };

    amount.clamp(0, subtotal.max(0))
}
