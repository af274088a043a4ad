//! Cart ledger
//!
//! Owns the ordered line collection for one session. Lines with the same
//! identity key (name, spice level, add-ons) merge instead of duplicating.
//! Every mutation persists synchronously through the key-value store before
//! returning, so any reader triggered afterwards observes a consistent
//! ledger; persisted state is a side effect, never a second source of truth.

use crate::pricing::{DeliveryPolicy, checkout_totals};
use crate::store::KeyValueStore;
use shared::models::{Addon, CartLine, CheckoutTotals, Coupon};
use std::sync::Arc;

/// Storage key the web clients already use for the persisted cart.
pub const CART_STORAGE_KEY: &str = "amoghaCart";

/// Result of a quantity update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityOutcome {
    /// The line now has this quantity.
    Updated(i32),
    /// The quantity dropped to zero or below and the line was removed.
    Removed,
    /// The index did not name a line; nothing changed.
    OutOfRange,
}

/// Result of an explicit removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    OutOfRange,
}

/// The in-memory cart for one session, persisted on every mutation.
pub struct CartLedger {
    lines: Vec<CartLine>,
    store: Arc<dyn KeyValueStore>,
}

impl CartLedger {
    /// Restore the ledger from the store. Missing or corrupt state yields
    /// an empty cart; this never fails.
    pub fn restore(store: Arc<dyn KeyValueStore>) -> Self {
        let lines = match store.get(CART_STORAGE_KEY) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(lines) => lines,
                Err(err) => {
                    tracing::warn!(error = %err, "persisted cart unreadable, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Self { lines, store }
    }

    /// Add one unit of an item. Merges into an existing line when the
    /// identity key matches, otherwise appends a new line with quantity 1.
    pub fn add_line(&mut self, name: &str, price: i64, spice_level: &str, addons: Vec<Addon>) {
        match self
            .lines
            .iter_mut()
            .find(|line| line.matches(name, spice_level, &addons))
        {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                name: name.to_string(),
                price,
                quantity: 1,
                spice_level: spice_level.to_string(),
                addons,
            }),
        }
        self.persist();
    }

    /// Apply a quantity delta to the line at `index`.
    ///
    /// An out-of-range index is a no-op (the UI and ledger can briefly
    /// disagree); a resulting quantity of zero or below removes the line
    /// rather than keeping a zero-quantity record.
    pub fn update_quantity(&mut self, index: usize, delta: i32) -> QuantityOutcome {
        let Some(line) = self.lines.get_mut(index) else {
            return QuantityOutcome::OutOfRange;
        };
        line.quantity += delta;
        let new_quantity = line.quantity;
        let outcome = if new_quantity <= 0 {
            self.lines.remove(index);
            QuantityOutcome::Removed
        } else {
            QuantityOutcome::Updated(new_quantity)
        };
        self.persist();
        outcome
    }

    /// Remove the line at `index` regardless of quantity.
    pub fn remove_line(&mut self, index: usize) -> RemoveOutcome {
        if index >= self.lines.len() {
            return RemoveOutcome::OutOfRange;
        }
        self.lines.remove(index);
        self.persist();
        RemoveOutcome::Removed
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total unit count across all lines.
    pub fn item_count(&self) -> i32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of line totals in whole rupees.
    pub fn subtotal(&self) -> i64 {
        crate::pricing::subtotal(&self.lines)
    }

    /// The checkout breakdown for the current lines and an optional,
    /// already-validated coupon.
    pub fn checkout_totals(
        &self,
        coupon: Option<&Coupon>,
        policy: &DeliveryPolicy,
    ) -> CheckoutTotals {
        checkout_totals(&self.lines, coupon, policy)
    }

    fn persist(&self) {
        match serde_json::to_string(&self.lines) {
            Ok(raw) => self.store.set(CART_STORAGE_KEY, &raw),
            Err(err) => tracing::warn!(error = %err, "cart serialization failed, skipping persist"),
        }
    }
}
