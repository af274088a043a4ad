//! Checkout totalisation
//!
//! A pure projection of cart state plus an optional coupon into the
//! breakdown the customer sees. No side effects.

use super::calc_discount;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use shared::models::{CartLine, CheckoutTotals, Coupon};

/// Delivery-fee policy: a fixed fee, waived at a subtotal threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryPolicy {
    pub free_delivery_threshold: i64,
    pub delivery_fee: i64,
}

/// Sum of line totals: `(price + add-on prices) × quantity` per line.
pub fn subtotal(lines: &[CartLine]) -> i64 {
    lines.iter().map(CartLine::line_total).sum()
}

/// The delivery fee owed for a given subtotal.
pub fn delivery_fee(subtotal: i64, policy: &DeliveryPolicy) -> i64 {
    if subtotal >= policy.free_delivery_threshold {
        0
    } else {
        policy.delivery_fee
    }
}

/// Compute the checkout breakdown for a cart and an optional coupon.
///
/// The coupon is expected to have been accepted by
/// [`validate_coupon`](super::validate_coupon) already; only the `active`
/// flag is re-checked here as a final guard, and inactive or missing
/// coupons contribute no discount. Coupon and happy-hour pricing stack
/// independently: the discount applies to the raw subtotal and promotional
/// unit prices are a separate, display-level computation.
pub fn checkout_totals(
    lines: &[CartLine],
    coupon: Option<&Coupon>,
    policy: &DeliveryPolicy,
) -> CheckoutTotals {
    let subtotal = subtotal(lines);
    let delivery_fee = delivery_fee(subtotal, policy);
    let discount = match coupon {
        Some(coupon) if coupon.active => calc_discount(Some(coupon), subtotal),
        _ => 0,
    };
    let total = (subtotal + delivery_fee - discount).max(0);
    CheckoutTotals {
        subtotal,
        delivery_fee,
        discount,
        total,
    }
}

/// Combo-meal price: the summed item price under the combo discount rate,
/// rounded half-up to whole rupees.
pub fn combo_price(total: i64, combo_discount: Decimal) -> i64 {
    (Decimal::from(total) * (Decimal::ONE - combo_discount))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Addon, CouponKind};

    const POLICY: DeliveryPolicy = DeliveryPolicy {
        free_delivery_threshold: 500,
        delivery_fee: 49,
    };

    fn line(name: &str, price: i64, quantity: i32) -> CartLine {
        CartLine {
            name: name.to_string(),
            price,
            quantity,
            spice_level: "medium".to_string(),
            addons: vec![],
        }
    }

    fn percent_coupon(discount: i64) -> Coupon {
        Coupon {
            active: true,
            kind: CouponKind::Percent,
            discount: Decimal::from(discount),
            expires_at: None,
            usage_limit: None,
            used_count: None,
            min_order: None,
            max_discount: None,
            label: None,
        }
    }

    #[test]
    fn test_delivery_fee_below_threshold() {
        // Two Chicken Dum Biryani at 249: subtotal 498, under the 500 bar.
        let lines = vec![line("Chicken Dum Biryani", 249, 2)];
        let totals = checkout_totals(&lines, None, &POLICY);
        assert_eq!(totals.subtotal, 498);
        assert_eq!(totals.delivery_fee, 49);
        assert_eq!(totals.total, 547);
    }

    #[test]
    fn test_delivery_fee_waived_at_threshold() {
        // Adding a ₹30 item lifts the subtotal to 528 and waives the fee.
        let lines = vec![line("Chicken Dum Biryani", 249, 2), line("Tea", 30, 1)];
        let totals = checkout_totals(&lines, None, &POLICY);
        assert_eq!(totals.subtotal, 528);
        assert_eq!(totals.delivery_fee, 0);
        assert_eq!(totals.total, 528);
    }

    #[test]
    fn test_subtotal_includes_addons() {
        let mut biryani = line("Chicken Dum Biryani", 249, 2);
        biryani.addons = vec![Addon {
            name: "Raita".to_string(),
            price: 40,
        }];
        assert_eq!(subtotal(&[biryani]), 578);
    }

    #[test]
    fn test_percent_coupon_applied_to_subtotal() {
        // 20% of 498 floors to 99.
        let lines = vec![line("Chicken Dum Biryani", 249, 2)];
        let totals = checkout_totals(&lines, Some(&percent_coupon(20)), &POLICY);
        assert_eq!(totals.discount, 99);
        assert_eq!(totals.total, 498 + 49 - 99);
        assert_eq!(totals.total, totals.subtotal + totals.delivery_fee - totals.discount);
    }

    #[test]
    fn test_inactive_coupon_contributes_nothing() {
        let lines = vec![line("Chicken Dum Biryani", 249, 2)];
        let mut coupon = percent_coupon(20);
        coupon.active = false;
        let totals = checkout_totals(&lines, Some(&coupon), &POLICY);
        assert_eq!(totals.discount, 0);
    }

    #[test]
    fn test_flat_coupon_capped_at_subtotal() {
        let lines = vec![line("Tea", 30, 1)];
        let mut coupon = percent_coupon(0);
        coupon.kind = CouponKind::Flat;
        coupon.discount = Decimal::from(100);
        let totals = checkout_totals(&lines, Some(&coupon), &POLICY);
        assert_eq!(totals.discount, 30);
        // Delivery is still owed on the discounted order.
        assert_eq!(totals.total, 49);
    }

    #[test]
    fn test_total_never_negative() {
        let lines = vec![line("Tea", 30, 1)];
        let totals = checkout_totals(&lines, Some(&percent_coupon(500)), &POLICY);
        assert!(totals.total >= 0);
        assert!(totals.discount <= totals.subtotal);
    }

    #[test]
    fn test_empty_cart() {
        let totals = checkout_totals(&[], None, &POLICY);
        assert_eq!(totals.subtotal, 0);
        assert_eq!(totals.delivery_fee, 49);
        assert_eq!(totals.discount, 0);
    }

    #[test]
    fn test_combo_price_rounds_half_up() {
        // 249 + 220 + 45 = 514; 15% off is 436.9, rounded to 437.
        assert_eq!(combo_price(514, Decimal::new(15, 2)), 437);
        assert_eq!(combo_price(0, Decimal::new(15, 2)), 0);
    }
}
