//! Pricing Module
//!
//! The deterministic computation core: coupon validation and discount
//! calculation, loyalty-tier resolution, happy-hour window selection and
//! checkout totalisation. Everything here is a pure function over model
//! values; time-sensitive functions take an explicit timestamp.

mod coupon;
mod happy_hour;
mod loyalty;
mod totals;

pub use coupon::*;
pub use happy_hour::*;
pub use loyalty::*;
pub use totals::*;
