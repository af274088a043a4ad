//! Happy-hour window selection
//!
//! Pure functions over the configured window table; the caller supplies the
//! timestamp, nothing here reads a clock.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Weekday};
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use shared::models::HappyHourWindow;

/// Map a chrono weekday to the 0 = Sunday .. 6 = Saturday index the window
/// tables use.
pub fn weekday_index(weekday: Weekday) -> u8 {
    match weekday {
        Weekday::Sun => 0,
        Weekday::Mon => 1,
        Weekday::Tue => 2,
        Weekday::Wed => 3,
        Weekday::Thu => 4,
        Weekday::Fri => 5,
        Weekday::Sat => 6,
    }
}

/// The first window in declaration order active at `now`, if any.
///
/// A window is active iff the weekday is covered and
/// `start_hour <= hour < end_hour`; the end hour is exclusive, so a
/// `[14, 17)` window is live at 16:59 and over at 17:00 sharp. Overlaps are
/// resolved by table order alone.
pub fn active_window<'a, Tz: TimeZone>(
    windows: &'a [HappyHourWindow],
    now: &DateTime<Tz>,
) -> Option<&'a HappyHourWindow> {
    let day = weekday_index(now.weekday());
    let hour = now.hour() as u8;
    windows
        .iter()
        .find(|w| w.days.contains(day) && hour >= w.start_hour && hour < w.end_hour)
}

/// Whether a window's discount covers the given menu category.
///
/// `"all"` is a wildcard; otherwise a configured name matches any category
/// id containing it (so `beverages` covers `menu-beverages-hot`).
pub fn applies_to(window: &HappyHourWindow, category: &str) -> bool {
    if window.categories.iter().any(|c| c == "all") {
        return true;
    }
    let category = category.to_lowercase();
    window.categories.iter().any(|c| category.contains(c.as_str()))
}

/// Promotional unit price under a percentage discount, rounded half-up to
/// whole rupees.
pub fn discounted_price(price: i64, discount_percent: u8) -> i64 {
    let multiplier = Decimal::ONE - Decimal::from(discount_percent) / Decimal::ONE_HUNDRED;
    (Decimal::from(price) * multiplier)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(price)
}
