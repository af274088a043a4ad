//! Amogha Ordering Engine
//!
//! Deterministic pricing and checkout core of the Amogha restaurant
//! ordering application, with embedded persistence for the cart and the
//! read-through cache.
//!
//! # Module structure
//!
//! ```text
//! order-engine/src/
//! ├── core/          # Configuration
//! ├── store/         # Key-value storage (redb, in-memory)
//! ├── cart/          # Cart ledger
//! ├── pricing/       # Coupons, loyalty, happy hour, totals
//! ├── remote/        # Remote document-store interface
//! ├── cache/         # Cached read-through helper
//! ├── catalog/       # Add-on / specials fetchers
//! └── utils/         # Logging setup
//! ```

pub mod cache;
pub mod cart;
pub mod catalog;
pub mod core;
pub mod pricing;
pub mod remote;
pub mod store;
pub mod utils;

// Re-export public types
pub use crate::core::Config;
pub use cache::{CacheEntry, Clock, FetchOutcome, SystemClock, cached_get};
pub use cart::{CartLedger, QuantityOutcome, RemoveOutcome};
pub use pricing::{
    CouponRejection, DeliveryPolicy, LoyaltyLadder, active_window, calc_discount,
    checkout_totals, validate_coupon,
};
pub use remote::{DocumentStore, QueryOptions, RemoteError};
pub use store::{KeyValueStore, MemoryKvStore, RedbKvStore, StorageError};
