use crate::error::{StoreError, StoreResult};
use crate::store::{Record, RecordStore};

use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::RwLock;
use serde_json::Value;

/// [`RecordStore`] holding records in process memory, in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    primary_key: String,
    records: RwLock<IndexMap<String, Record>>,
}

impl InMemoryRecordStore {
    /// Creates an empty store keyed by `primary_key`.
    pub fn new(primary_key: impl Into<String>) -> Self {
        Self {
            primary_key: primary_key.into(),
            records: RwLock::default(),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    fn key_of(&self, record: &Record) -> StoreResult<String> {
        match record.get(&self.primary_key) {
            Some(Value::String(key)) if !key.is_empty() => Ok(key.clone()),
            _ => Err(StoreError::Execution(format!(
                "record has no string value for primary key '{}'",
                self.primary_key
            ))),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn put(&self, record: Record) -> StoreResult<()> {
        let key = self.key_of(&record)?;
        self.records.write().insert(key, record);
        Ok(())
    }

    async fn get_one(&self, key: &str) -> StoreResult<Option<Record>> {
        Ok(self.records.read().get(key).cloned())
    }

    async fn scan_all(&self) -> StoreResult<Vec<Record>> {
        Ok(self.records.read().values().cloned().collect())
    }

    async fn update_attributes(&self, key: &str, attributes: Record) -> StoreResult<Record> {
        if attributes.contains_key(&self.primary_key) {
            return Err(StoreError::Execution(format!(
                "primary key '{}' cannot be updated",
                self.primary_key
            )));
        }
        let mut records = self.records.write();
        let record = records
            .get_mut(key)
            .ok_or_else(|| StoreError::KeyNotFound(key.to_string()))?;
        for (name, value) in &attributes {
            record.insert(name.clone(), value.clone());
        }
        Ok(attributes)
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        self.records.write().shift_remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    fn record(value: Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_update_is_selective() {
        let store = InMemoryRecordStore::new("itemId");
        store
            .put(record(json!({"itemId": "k", "a": 1, "b": 2, "c": 3})))
            .await
            .unwrap();
        let updated = store
            .update_attributes("k", record(json!({"b": 99})))
            .await
            .unwrap();
        assert_eq!(updated, record(json!({"b": 99})));
        let stored = store.get_one("k").await.unwrap().unwrap();
        assert_eq!(stored, record(json!({"itemId": "k", "a": 1, "b": 99, "c": 3})));
    }

    #[tokio::test]
    async fn test_update_missing_key() {
        let store = InMemoryRecordStore::new("itemId");
        let actual = store
            .update_attributes("missing", record(json!({"a": 1})))
            .await;
        assert!(matches!(actual, Err(StoreError::KeyNotFound(key)) if key == "missing"));
    }

    #[tokio::test]
    async fn test_put_replaces_and_delete_is_idempotent() {
        let store = InMemoryRecordStore::new("itemId");
        store
            .put(record(json!({"itemId": "k", "a": 1})))
            .await
            .unwrap();
        store
            .put(record(json!({"itemId": "k", "b": 2})))
            .await
            .unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get_one("k").await.unwrap(),
            Some(record(json!({"itemId": "k", "b": 2})))
        );
        store.delete("k").await.unwrap();
        store.delete("k").await.unwrap();
        assert!(store.is_empty());
        assert_eq!(store.get_one("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_requires_primary_key() {
        let store = InMemoryRecordStore::new("itemId");
        let actual = store.put(record(json!({"name": "widget"}))).await;
        assert!(matches!(actual, Err(StoreError::Execution(_))));
    }

    #[tokio::test]
    async fn test_scan_all_in_insertion_order() {
        let store = InMemoryRecordStore::new("itemId");
        for key in ["c", "a", "b"] {
            store.put(record(json!({"itemId": key}))).await.unwrap();
        }
        let keys: Vec<Value> = store
            .scan_all()
            .await
            .unwrap()
            .into_iter()
            .map(|record| record["itemId"].clone())
            .collect();
        assert_eq!(keys, vec![json!("c"), json!("a"), json!("b")]);
    }
}
