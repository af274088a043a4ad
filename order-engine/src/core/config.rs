//! Engine configuration
//!
//! All settings can be overridden through environment variables:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | WORK_DIR | /var/lib/amogha/engine | Working directory for the local store |
//! | FREE_DELIVERY_THRESHOLD | 500 | Subtotal (rupees) at which delivery is free |
//! | DELIVERY_FEE | 49 | Delivery fee (rupees) below the threshold |
//! | COMBO_DISCOUNT | 0.15 | Combo-meal discount rate |
//! | LOG_LEVEL | info | Tracing level filter |

use crate::pricing::{DeliveryPolicy, LoyaltyLadder};
use rust_decimal::Decimal;
use shared::models::{DaySpec, HappyHourWindow};

/// Engine configuration.
///
/// Happy-hour windows and the loyalty ladder ship with the defaults the
/// restaurant runs today; embedding applications may replace them after
/// `from_env`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the embedded key-value store.
    pub work_dir: String,
    /// Subtotal at or above which the delivery fee is waived.
    pub free_delivery_threshold: i64,
    /// Delivery fee charged below the threshold.
    pub delivery_fee: i64,
    /// Discount rate for combo meals, e.g. 0.15.
    pub combo_discount: Decimal,
    /// Tracing level filter.
    pub log_level: String,
    /// Time-boxed promotional windows, in declaration order.
    pub happy_hours: Vec<HappyHourWindow>,
    /// Loyalty tier thresholds.
    pub loyalty_ladder: LoyaltyLadder,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR")
                .unwrap_or_else(|_| "/var/lib/amogha/engine".into()),
            free_delivery_threshold: std::env::var("FREE_DELIVERY_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(500),
            delivery_fee: std::env::var("DELIVERY_FEE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(49),
            combo_discount: std::env::var("COMBO_DISCOUNT")
                .ok()
                .and_then(|v| v.parse::<Decimal>().ok())
                .unwrap_or_else(|| Decimal::new(15, 2)),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            happy_hours: default_happy_hours(),
            loyalty_ladder: LoyaltyLadder::default(),
        }
    }

    /// Override the work directory, for tests.
    pub fn with_work_dir(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    /// The delivery-fee policy slice of this configuration.
    pub fn delivery_policy(&self) -> DeliveryPolicy {
        DeliveryPolicy {
            free_delivery_threshold: self.free_delivery_threshold,
            delivery_fee: self.delivery_fee,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// The promotional windows the restaurant runs today: weekday afternoon
/// beverages, late-night everything.
fn default_happy_hours() -> Vec<HappyHourWindow> {
    vec![
        HappyHourWindow {
            days: DaySpec::Days(vec![1, 2, 3, 4, 5]),
            start_hour: 14,
            end_hour: 17,
            discount: 15,
            label: "Happy Hour - 15% OFF!".to_string(),
            categories: vec!["beverages".to_string()],
        },
        HappyHourWindow {
            days: DaySpec::all(),
            start_hour: 22,
            end_hour: 23,
            discount: 20,
            label: "Late Night Deal - 20% OFF!".to_string(),
            categories: vec!["all".to_string()],
        },
    ]
}
