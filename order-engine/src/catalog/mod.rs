//! Catalog fetchers
//!
//! Typed consumers of the read-through cache for the remote collections the
//! ordering flow needs: add-on options for the picker and the daily
//! specials board. Documents that fail to decode are skipped individually
//! so one malformed record never blanks a whole section.

use crate::cache::{Clock, FetchOutcome, cached_get};
use crate::remote::{DocumentStore, QueryOptions};
use crate::store::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::models::{Addon, Special};
use std::sync::Arc;

/// Cache key / TTL for the add-on picker options.
pub const ADDONS_CACHE_KEY: &str = "addons_cache";
pub const ADDONS_TTL_SECONDS: u64 = 600;

/// Cache key / TTL for the daily specials board.
pub const SPECIALS_CACHE_KEY: &str = "specials_cache";
pub const SPECIALS_TTL_SECONDS: u64 = 300;

/// An add-on as configured in the `addons` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonOption {
    pub name: String,
    /// Price in whole rupees.
    pub price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

impl AddonOption {
    /// The cart-line add-on for this option.
    pub fn to_addon(&self) -> Addon {
        Addon {
            name: self.name.clone(),
            price: self.price,
        }
    }
}

/// Cached access to the remote menu collections.
///
/// The remote handle is optional: offline sessions construct the catalog
/// without one and every load is a silent no-op, keeping whatever the
/// caller last rendered.
pub struct Catalog {
    remote: Option<Arc<dyn DocumentStore>>,
    cache: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl Catalog {
    pub fn new(
        remote: Option<Arc<dyn DocumentStore>>,
        cache: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            remote,
            cache,
            clock,
        }
    }

    /// Load the active add-on options, ordered by `sortOrder`.
    pub async fn load_addons(&self, render: impl FnOnce(Vec<AddonOption>)) -> FetchOutcome {
        cached_get(
            self.remote.as_deref(),
            self.cache.as_ref(),
            self.clock.as_ref(),
            "addons",
            ADDONS_CACHE_KEY,
            ADDONS_TTL_SECONDS,
            &QueryOptions::new()
                .where_eq("active", true)
                .order_by("sortOrder"),
            decode_documents::<AddonOption>,
            render,
        )
        .await
    }

    /// Load the daily specials, ordered by `sortOrder`.
    pub async fn load_specials(&self, render: impl FnOnce(Vec<Special>)) -> FetchOutcome {
        cached_get(
            self.remote.as_deref(),
            self.cache.as_ref(),
            self.clock.as_ref(),
            "specials",
            SPECIALS_CACHE_KEY,
            SPECIALS_TTL_SECONDS,
            &QueryOptions::new().order_by("sortOrder"),
            decode_documents::<Special>,
            render,
        )
        .await
    }
}

/// Decode each document, dropping the ones that do not fit the model.
fn decode_documents<T: DeserializeOwned>(docs: Vec<Value>) -> Vec<T> {
    docs.into_iter()
        .filter_map(|doc| match serde_json::from_value(doc) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                tracing::debug!(error = %err, "skipping undecodable document");
                None
            }
        })
        .collect()
}
