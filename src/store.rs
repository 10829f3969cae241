//! Record store client.
//!
//! Handlers talk to storage only through [`RecordStore`]; the store handle is built once per
//! process and passed to the handlers, never held in a global.

/// DynamoDB-backed store.
pub mod dynamo;

/// In-process store for local development and tests.
pub mod memory;

use crate::error::StoreResult;

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::Value;

/// A schemaless record: attribute names mapped to JSON values, in insertion order.
pub type Record = IndexMap<String, Value>;

/// Key-value operations against one table keyed by one primary-key attribute.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Inserts the record, replacing any record stored under the same key.
    async fn put(&self, record: Record) -> StoreResult<()>;

    /// Fetches the record stored under `key`.
    async fn get_one(&self, key: &str) -> StoreResult<Option<Record>>;

    /// Returns every stored record, in store-defined order.
    async fn scan_all(&self) -> StoreResult<Vec<Record>>;

    /// Assigns `attributes` on the existing record under `key`, leaving other attributes as
    /// they are, and returns the new values of the assigned attributes.
    ///
    /// Fails with [`KeyNotFound`](crate::error::StoreError::KeyNotFound) when nothing is
    /// stored under `key`.
    async fn update_attributes(&self, key: &str, attributes: Record) -> StoreResult<Record>;

    /// Removes the record under `key`; removing an absent key succeeds.
    async fn delete(&self, key: &str) -> StoreResult<()>;
}
