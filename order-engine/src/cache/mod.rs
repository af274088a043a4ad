//! Cached read-through helper
//!
//! Wraps a remote collection fetch with a TTL'd local cache and a
//! stale-on-error fallback. The web clients lean on this to keep remote
//! reads to a handful per day; the contract is precise:
//!
//! - no remote handle: skip entirely, render nothing (offline startup keeps
//!   whatever was last rendered)
//! - fresh cache: render the cached data, no remote call
//! - stale or missing cache: one remote fetch, transform, render, write back
//! - fetch failure: render the stale entry if one exists, else nothing
//!
//! `render` runs at most once per call, on whichever path has data.
//! Concurrent calls for the same key are not de-duplicated; both fetch and
//! both render correct data.

use crate::remote::{DocumentStore, QueryOptions};
use crate::store::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A source of "now", injectable so TTL logic tests without real timers.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        shared::util::now_millis()
    }
}

/// A cached payload stamped with its write time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// Write time, epoch milliseconds.
    pub ts: i64,
    pub data: T,
}

/// Which path a [`cached_get`] call took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// No remote handle configured; nothing rendered.
    Skipped,
    /// Cache was fresh; rendered without a remote call.
    Fresh,
    /// Fetched from the remote store and cached.
    Fetched,
    /// Fetch failed; rendered the stale cache entry.
    StaleFallback,
    /// Fetch failed and no cache entry existed; nothing rendered.
    Failed,
}

/// Read `collection` through the cache under `cache_key`.
///
/// `transform` shapes the raw documents into the cached/rendered value;
/// `render` consumes it. See the module docs for the path contract.
pub async fn cached_get<T, F, R>(
    remote: Option<&dyn DocumentStore>,
    cache: &dyn KeyValueStore,
    clock: &dyn Clock,
    collection: &str,
    cache_key: &str,
    ttl_seconds: u64,
    query: &QueryOptions,
    transform: F,
    render: R,
) -> FetchOutcome
where
    T: Serialize + DeserializeOwned,
    F: FnOnce(Vec<Value>) -> T,
    R: FnOnce(T),
{
    let Some(remote) = remote else {
        return FetchOutcome::Skipped;
    };

    let now = clock.now_millis();
    let ttl_millis = ttl_seconds as i64 * 1000;
    let cached: Option<CacheEntry<T>> = cache
        .get(cache_key)
        .and_then(|raw| serde_json::from_str(&raw).ok());

    // A fresh cache short-circuits the remote entirely; a stale entry is
    // kept around as the fallback should the fetch fail.
    let stale = match cached {
        Some(entry) if now - entry.ts < ttl_millis => {
            render(entry.data);
            return FetchOutcome::Fresh;
        }
        other => other,
    };

    match remote.fetch(collection, query).await {
        Ok(docs) => {
            let entry = CacheEntry {
                ts: now,
                data: transform(docs),
            };
            match serde_json::to_string(&entry) {
                Ok(raw) => cache.set(cache_key, &raw),
                Err(err) => {
                    tracing::warn!(key = %cache_key, error = %err, "cache write-back skipped")
                }
            }
            render(entry.data);
            FetchOutcome::Fetched
        }
        Err(err) => {
            tracing::warn!(collection = %collection, error = %err, "remote fetch failed");
            match stale {
                Some(entry) => {
                    render(entry.data);
                    FetchOutcome::StaleFallback
                }
                None => FetchOutcome::Failed,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::RemoteError;
    use crate::store::MemoryKvStore;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedClock(i64);

    impl Clock for FixedClock {
        fn now_millis(&self) -> i64 {
            self.0
        }
    }

    /// Remote double: serves a fixed document list or fails, counting calls.
    struct FakeRemote {
        docs: Option<Vec<Value>>,
        calls: AtomicUsize,
    }

    impl FakeRemote {
        fn serving(docs: Vec<Value>) -> Self {
            Self {
                docs: Some(docs),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                docs: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DocumentStore for FakeRemote {
        async fn fetch(
            &self,
            _collection: &str,
            _query: &QueryOptions,
        ) -> Result<Vec<Value>, RemoteError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.docs {
                Some(docs) => Ok(docs.clone()),
                None => Err(RemoteError::Fetch("network error".to_string())),
            }
        }
    }

    const TTL: u64 = 60;

    fn names(docs: Vec<Value>) -> Vec<String> {
        docs.into_iter()
            .filter_map(|doc| doc.get("name").and_then(Value::as_str).map(String::from))
            .collect()
    }

    fn seed_cache(cache: &MemoryKvStore, ts: i64, data: &[&str]) {
        let entry = CacheEntry {
            ts,
            data: data.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
        };
        cache.set("menu_cache", &serde_json::to_string(&entry).unwrap());
    }

    #[tokio::test]
    async fn test_fresh_cache_skips_remote() {
        let remote = FakeRemote::serving(vec![json!({"name": "Remote Dish"})]);
        let cache = MemoryKvStore::new();
        seed_cache(&cache, 1_000, &["Chicken Biryani"]);
        let clock = FixedClock(1_000 + (TTL as i64 - 1) * 1000);

        let mut rendered = Vec::new();
        let outcome = cached_get(
            Some(&remote),
            &cache,
            &clock,
            "menu",
            "menu_cache",
            TTL,
            &QueryOptions::new(),
            names,
            |data: Vec<String>| rendered = data,
        )
        .await;

        assert_eq!(outcome, FetchOutcome::Fresh);
        assert_eq!(rendered, vec!["Chicken Biryani"]);
        assert_eq!(remote.call_count(), 0);
    }

    #[tokio::test]
    async fn test_stale_cache_refetches_and_writes_back() {
        let remote = FakeRemote::serving(vec![json!({"name": "Special Dish"})]);
        let cache = MemoryKvStore::new();
        seed_cache(&cache, 0, &["Old Dish"]);
        let clock = FixedClock((TTL as i64 + 10) * 1000);

        let mut rendered = Vec::new();
        let outcome = cached_get(
            Some(&remote),
            &cache,
            &clock,
            "menu",
            "menu_cache",
            TTL,
            &QueryOptions::new(),
            names,
            |data: Vec<String>| rendered = data,
        )
        .await;

        assert_eq!(outcome, FetchOutcome::Fetched);
        assert_eq!(rendered, vec!["Special Dish"]);
        assert_eq!(remote.call_count(), 1);

        let written: CacheEntry<Vec<String>> =
            serde_json::from_str(&cache.get("menu_cache").unwrap()).unwrap();
        assert_eq!(written.ts, clock.0);
        assert_eq!(written.data, vec!["Special Dish"]);
    }

    #[tokio::test]
    async fn test_missing_cache_fetches() {
        let remote = FakeRemote::serving(vec![json!({"name": "New Item"})]);
        let cache = MemoryKvStore::new();
        let clock = FixedClock(0);

        let mut rendered = Vec::new();
        let outcome = cached_get(
            Some(&remote),
            &cache,
            &clock,
            "menu",
            "menu_cache",
            TTL,
            &QueryOptions::new(),
            names,
            |data: Vec<String>| rendered = data,
        )
        .await;

        assert_eq!(outcome, FetchOutcome::Fetched);
        assert_eq!(rendered, vec!["New Item"]);
    }

    #[tokio::test]
    async fn test_fetch_failure_falls_back_to_stale_cache() {
        let remote = FakeRemote::failing();
        let cache = MemoryKvStore::new();
        seed_cache(&cache, 0, &["Stale Biryani"]);
        let clock = FixedClock(999_999_000);

        let mut rendered = Vec::new();
        let outcome = cached_get(
            Some(&remote),
            &cache,
            &clock,
            "menu",
            "menu_cache",
            TTL,
            &QueryOptions::new(),
            names,
            |data: Vec<String>| rendered = data,
        )
        .await;

        assert_eq!(outcome, FetchOutcome::StaleFallback);
        assert_eq!(rendered, vec!["Stale Biryani"]);
    }

    #[tokio::test]
    async fn test_fetch_failure_without_cache_renders_nothing() {
        let remote = FakeRemote::failing();
        let cache = MemoryKvStore::new();
        let clock = FixedClock(0);

        let mut render_calls = 0;
        let outcome = cached_get(
            Some(&remote),
            &cache,
            &clock,
            "menu",
            "menu_cache",
            TTL,
            &QueryOptions::new(),
            names,
            |_data: Vec<String>| render_calls += 1,
        )
        .await;

        assert_eq!(outcome, FetchOutcome::Failed);
        assert_eq!(render_calls, 0);
    }

    #[tokio::test]
    async fn test_no_remote_handle_is_silent_even_with_fresh_cache() {
        let cache = MemoryKvStore::new();
        seed_cache(&cache, 0, &["Cached"]);
        let clock = FixedClock(0);

        let mut render_calls = 0;
        let outcome = cached_get(
            None,
            &cache,
            &clock,
            "menu",
            "menu_cache",
            TTL,
            &QueryOptions::new(),
            names,
            |_data: Vec<String>| render_calls += 1,
        )
        .await;

        assert_eq!(outcome, FetchOutcome::Skipped);
        assert_eq!(render_calls, 0);
    }

    #[tokio::test]
    async fn test_corrupt_cache_entry_reads_as_missing() {
        let remote = FakeRemote::serving(vec![json!({"name": "Fresh"})]);
        let cache = MemoryKvStore::new();
        cache.set("menu_cache", "{not json");
        let clock = FixedClock(0);

        let mut rendered = Vec::new();
        let outcome = cached_get(
            Some(&remote),
            &cache,
            &clock,
            "menu",
            "menu_cache",
            TTL,
            &QueryOptions::new(),
            names,
            |data: Vec<String>| rendered = data,
        )
        .await;

        assert_eq!(outcome, FetchOutcome::Fetched);
        assert_eq!(rendered, vec!["Fresh"]);
        assert_eq!(remote.call_count(), 1);
    }
}
