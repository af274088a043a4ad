//! Shared types for the Amogha ordering engine
//!
//! Domain models exchanged between the engine, storage and any client
//! surface: cart lines, coupons, promotional windows, loyalty tiers and
//! checkout breakdowns. All models are serde-serializable with the field
//! names the existing web clients persist (camelCase).

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
