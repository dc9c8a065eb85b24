//! In-memory store backend.
//!
//! Used for local development (`STORE_BACKEND=memory`) and by the tests.
//! Tables are vectors so a scan returns records in insertion order; a put
//! with an existing primary key replaces that record in place.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{KeyValueStore, Record, StoreError, StoreResult, Table};

/// In-memory storage backend.
///
/// Data is not persisted and is lost when the last clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<HashMap<Table, Vec<Record>>>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held in `table`.
    #[cfg(test)]
    pub async fn len(&self, table: Table) -> usize {
        self.tables.read().await.get(&table).map_or(0, Vec::len)
    }
}

fn primary_key(table: Table, record: &Record) -> StoreResult<&serde_json::Value> {
    record.get(table.key_attribute()).ok_or_else(|| {
        StoreError::new(format!(
            "One of the required keys was not given a value: {} on {}",
            table.key_attribute(),
            table
        ))
    })
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn scan(&self, table: Table, limit: Option<i32>) -> StoreResult<Vec<Record>> {
        let tables = self.tables.read().await;
        let records = tables.get(&table).map(Vec::as_slice).unwrap_or_default();
        let take = limit.map_or(records.len(), |l| l.max(0) as usize);

        Ok(records.iter().take(take).cloned().collect())
    }

    async fn get_item(&self, table: Table, key: Record) -> StoreResult<Option<Record>> {
        let wanted = primary_key(table, &key)?;
        let tables = self.tables.read().await;

        Ok(tables.get(&table).and_then(|records| {
            records
                .iter()
                .find(|record| record.get(table.key_attribute()) == Some(wanted))
                .cloned()
        }))
    }

    async fn put_item(&self, table: Table, item: Record) -> StoreResult<()> {
        let key = primary_key(table, &item)?.clone();
        let mut tables = self.tables.write().await;
        let records = tables.entry(table).or_default();

        match records
            .iter_mut()
            .find(|record| record.get(table.key_attribute()) == Some(&key))
        {
            Some(existing) => *existing = item,
            None => records.push(item),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("test record must be an object"),
        }
    }

    #[tokio::test]
    async fn test_scan_empty_table() {
        let store = InMemoryStore::new();
        assert!(store.scan(Table::Photographers, None).await.unwrap().is_empty());
        assert_eq!(store.len(Table::Photographers).await, 0);
    }

    #[tokio::test]
    async fn test_scan_respects_limit_and_insertion_order() {
        let store = InMemoryStore::new();
        for url in ["a", "b", "c", "d"] {
            store
                .put_item(Table::GalleryImages, record(json!({ "image_url": url })))
                .await
                .unwrap();
        }

        let limited = store.scan(Table::GalleryImages, Some(3)).await.unwrap();
        let urls: Vec<_> = limited.iter().map(|r| r["image_url"].clone()).collect();
        assert_eq!(urls, vec![json!("a"), json!("b"), json!("c")]);

        assert_eq!(store.scan(Table::GalleryImages, None).await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_put_overwrites_by_key() {
        let store = InMemoryStore::new();
        store
            .put_item(Table::Photographers, record(json!({ "id": 1, "name": "old" })))
            .await
            .unwrap();
        store
            .put_item(Table::Photographers, record(json!({ "id": 1, "name": "new" })))
            .await
            .unwrap();

        assert_eq!(store.len(Table::Photographers).await, 1);
        let found = store
            .get_item(Table::Photographers, record(json!({ "id": 1 })))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found["name"], json!("new"));
    }

    #[tokio::test]
    async fn test_get_item_missing() {
        let store = InMemoryStore::new();
        let found = store
            .get_item(Table::Photographers, record(json!({ "id": 42 })))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_put_without_key_fails() {
        let store = InMemoryStore::new();
        let err = store
            .put_item(Table::Bookings, record(json!({ "name": "no key" })))
            .await
            .unwrap_err();
        assert!(err.message.contains("booking_id"));
    }

    #[tokio::test]
    async fn test_tables_are_independent() {
        let store = InMemoryStore::new();
        store
            .put_item(Table::Bookings, record(json!({ "booking_id": "x" })))
            .await
            .unwrap();

        assert_eq!(store.len(Table::Bookings).await, 1);
        assert_eq!(store.len(Table::Photographers).await, 0);
    }
}
