//! Loyalty tier resolution and point accrual
//!
//! Tier lookup is "greatest threshold at or below the balance" over a
//! strictly-ascending ladder; the ladder is validated at construction so
//! lookup can stay infallible.

use chrono::NaiveDate;
use shared::models::LoyaltyTier;
use thiserror::Error;

/// Points earned per block of this many rupees spent.
const POINTS_PER_RUPEES: i64 = 10;

/// Redeemable rupees per block of this many points.
const REDEEM_BLOCK_POINTS: u32 = 100;
const REDEEM_BLOCK_VALUE: i64 = 10;

/// Ladder construction errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LadderError {
    #[error("loyalty ladder must have at least one tier")]
    Empty,

    #[error("loyalty ladder must start at zero points, found {0}")]
    FirstTierNotZero(u32),

    #[error("loyalty ladder thresholds must be strictly ascending at tier '{0}'")]
    NotAscending(String),
}

/// An ordered table of loyalty tiers with strictly-ascending thresholds
/// starting at zero, so every non-negative balance resolves to a tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoyaltyLadder {
    tiers: Vec<LoyaltyTier>,
}

impl LoyaltyLadder {
    /// Build a ladder, rejecting tables a lookup could fall through.
    pub fn new(tiers: Vec<LoyaltyTier>) -> Result<Self, LadderError> {
        let Some(first) = tiers.first() else {
            return Err(LadderError::Empty);
        };
        if first.min != 0 {
            return Err(LadderError::FirstTierNotZero(first.min));
        }
        for pair in tiers.windows(2) {
            if pair[1].min <= pair[0].min {
                return Err(LadderError::NotAscending(pair[1].name.clone()));
            }
        }
        Ok(Self { tiers })
    }

    /// The tier with the greatest threshold at or below `points`.
    pub fn tier_for(&self, points: u32) -> &LoyaltyTier {
        self.tiers
            .iter()
            .rev()
            .find(|tier| points >= tier.min)
            .unwrap_or(&self.tiers[0])
    }

    /// Position of the resolved tier within the ladder.
    pub fn tier_index(&self, points: u32) -> usize {
        let tier = self.tier_for(points);
        self.tiers.iter().position(|t| t.min == tier.min).unwrap_or(0)
    }

    /// The next tier above `points`, if the customer is not already at the top.
    pub fn next_tier(&self, points: u32) -> Option<&LoyaltyTier> {
        self.tiers.iter().find(|tier| tier.min > points)
    }

    /// Percent progress (0..=100) from the current tier toward the next.
    pub fn progress_to_next(&self, points: u32) -> u8 {
        let current = self.tier_for(points);
        match self.next_tier(points) {
            Some(next) => {
                let span = u64::from(next.min - current.min);
                let into = u64::from(points - current.min);
                (into * 100 / span).min(100) as u8
            }
            None => 100,
        }
    }

    pub fn tiers(&self) -> &[LoyaltyTier] {
        &self.tiers
    }
}

impl Default for LoyaltyLadder {
    fn default() -> Self {
        Self {
            tiers: vec![
                LoyaltyTier::new("Bronze", 0, "#cd7f32", "\u{1F949}"),
                LoyaltyTier::new("Silver", 500, "#c0c0c0", "\u{1F948}"),
                LoyaltyTier::new("Gold", 1000, "#D4A017", "\u{1F947}"),
            ],
        }
    }
}

/// Points earned for an order: one point per ₹10 spent, doubled when the
/// last three order dates form a consecutive-day streak.
pub fn points_earned(order_total: i64, order_dates: &[NaiveDate]) -> u32 {
    let base = (order_total / POINTS_PER_RUPEES).max(0) as u32;
    if has_three_day_streak(order_dates) {
        base * 2
    } else {
        base
    }
}

/// Rupee value redeemable for a points balance: ₹10 per 100 points.
pub fn redeemable_value(points: u32) -> i64 {
    i64::from(points / REDEEM_BLOCK_POINTS) * REDEEM_BLOCK_VALUE
}

fn has_three_day_streak(dates: &[NaiveDate]) -> bool {
    if dates.len() < 3 {
        return false;
    }
    let last3 = &dates[dates.len() - 3..];
    (last3[1] - last3[0]).num_days() == 1 && (last3[2] - last3[1]).num_days() == 1
}
