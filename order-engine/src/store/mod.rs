//! Local key-value storage
//!
//! The cart ledger and the read-through cache persist through the narrow
//! [`KeyValueStore`] trait: string keys, string payloads. The production
//! backend is an embedded redb database; an in-memory map backs tests and
//! ephemeral sessions.
//!
//! Failures below this seam are absorbed, not surfaced: a read that cannot
//! be completed behaves as a missing key and a failed write leaves the
//! previous value in place, both logged at warn. The checkout flow must
//! never crash on a storage fault.

mod memory;
mod redb_kv;

pub use memory::MemoryKvStore;
pub use redb_kv::{RedbKvStore, StorageError, StorageResult};

/// Synchronous string key-value storage.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, if any. Unreadable values are absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
}
