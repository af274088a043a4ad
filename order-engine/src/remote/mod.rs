//! Remote document-store interface
//!
//! The engine reads remote collections (coupons, add-ons, specials) through
//! this seam only; the concrete backend lives with the embedding
//! application. Writes (order placement, coupon usage increments) happen
//! behind the same boundary and are not part of this interface.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Remote fetch errors
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("remote store unavailable")]
    Unavailable,

    #[error("remote fetch failed: {0}")]
    Fetch(String),
}

/// An equality filter on a document field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub field: String,
    pub value: Value,
}

/// Query shape for a collection read: optional equality filter plus an
/// optional ordering field, mirroring the
/// `collection(..).where(..).orderBy(..).get()` surface the clients use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only documents whose `field` equals `value`.
    pub fn where_eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.filter = Some(Filter {
            field: field.to_string(),
            value: value.into(),
        });
        self
    }

    /// Order results by the given field, ascending.
    pub fn order_by(mut self, field: &str) -> Self {
        self.order_by = Some(field.to_string());
        self
    }
}

/// An async read source of JSON documents keyed by collection name.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch the documents of `collection` matching `query`, in query order.
    async fn fetch(&self, collection: &str, query: &QueryOptions)
    -> Result<Vec<Value>, RemoteError>;
}
