//! Cart ledger

mod ledger;

pub use ledger::*;
