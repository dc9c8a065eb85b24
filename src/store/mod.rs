//! Key-value store access.
//!
//! Handlers never talk to a backend directly; they go through [`StoreClient`],
//! a cloneable façade over a [`KeyValueStore`] implementation. The store only
//! knows about three named tables and schemaless records keyed by a single
//! primary-key attribute.

pub mod dynamodb;
pub mod memory;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value as JsonValue};

use crate::models::{Booking, GalleryImage, Photographer};

pub use dynamodb::DynamoDbStore;
pub use memory::InMemoryStore;

/// A flat, schemaless record as stored in a table.
pub type Record = Map<String, JsonValue>;

/// The tables this site reads from and writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Photographers,
    GalleryImages,
    Bookings,
}

impl Table {
    pub const ALL: [Table; 3] = [Table::Photographers, Table::GalleryImages, Table::Bookings];

    /// Name of the table in the backing store.
    pub fn name(self) -> &'static str {
        match self {
            Table::Photographers => "photographers",
            Table::GalleryImages => "gallery_images",
            Table::Bookings => "bookings",
        }
    }

    /// Attribute holding the primary key.
    pub fn key_attribute(self) -> &'static str {
        match self {
            Table::Photographers => "id",
            Table::GalleryImages => "image_url",
            Table::Bookings => "booking_id",
        }
    }

    /// Whether the primary key is numeric (otherwise it is a string).
    pub fn numeric_key(self) -> bool {
        matches!(self, Table::Photographers)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any failure reported by the store: connectivity, throttling, a missing
/// table, or a record that does not decode. No sub-classification: every
/// caller handles all of them the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// The three primitives every backend provides.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Return up to `limit` records (all records when `None`) in no
    /// particular order.
    async fn scan(&self, table: Table, limit: Option<i32>) -> StoreResult<Vec<Record>>;

    /// Fetch the record whose primary key matches `key`.
    async fn get_item(&self, table: Table, key: Record) -> StoreResult<Option<Record>>;

    /// Insert `item`, overwriting any record with the same primary key.
    async fn put_item(&self, table: Table, item: Record) -> StoreResult<()>;
}

/// Shareable store client for use across async handlers.
///
/// Wraps the raw primitives with typed accessors for the site's entities.
/// No retries, no caching, no batching: one call is one round trip.
#[derive(Clone)]
pub struct StoreClient {
    inner: Arc<dyn KeyValueStore>,
}

impl StoreClient {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }

    pub async fn scan(&self, table: Table, limit: Option<i32>) -> StoreResult<Vec<Record>> {
        self.inner.scan(table, limit).await
    }

    pub async fn get_item(&self, table: Table, key: Record) -> StoreResult<Option<Record>> {
        self.inner.get_item(table, key).await
    }

    pub async fn put_item(&self, table: Table, item: Record) -> StoreResult<()> {
        self.inner.put_item(table, item).await
    }

    /// Scan the photographers table, optionally capped at `limit` records.
    pub async fn photographers(&self, limit: Option<i32>) -> StoreResult<Vec<Photographer>> {
        let records = self.scan(Table::Photographers, limit).await?;
        Ok(decode_rows(Table::Photographers, records))
    }

    /// Look up a single photographer by id.
    pub async fn photographer(&self, id: i64) -> StoreResult<Option<Photographer>> {
        let mut key = Record::new();
        key.insert(Table::Photographers.key_attribute().to_string(), id.into());

        self.get_item(Table::Photographers, key)
            .await?
            .map(from_record)
            .transpose()
    }

    /// All gallery images.
    pub async fn gallery_images(&self) -> StoreResult<Vec<GalleryImage>> {
        let records = self.scan(Table::GalleryImages, None).await?;
        Ok(decode_rows(Table::GalleryImages, records))
    }

    /// Persist a new booking request.
    pub async fn put_booking(&self, booking: &Booking) -> StoreResult<()> {
        self.put_item(Table::Bookings, to_record(booking)?).await
    }
}

/// Serialize an entity into a store record.
pub fn to_record<T: Serialize>(value: &T) -> StoreResult<Record> {
    match serde_json::to_value(value) {
        Ok(JsonValue::Object(map)) => Ok(map),
        Ok(other) => Err(StoreError::new(format!(
            "Expected an object record, got {}",
            other
        ))),
        Err(err) => Err(StoreError::new(format!("Failed to encode record: {}", err))),
    }
}

/// Decode scanned rows, skipping any that do not fit the entity.
fn decode_rows<T: DeserializeOwned>(table: Table, records: Vec<Record>) -> Vec<T> {
    records
        .into_iter()
        .filter_map(|record| match from_record(record) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Skipping undecodable row in {}: {}", table, e);
                None
            }
        })
        .collect()
}

/// Decode a store record into an entity.
pub fn from_record<T: DeserializeOwned>(record: Record) -> StoreResult<T> {
    serde_json::from_value(JsonValue::Object(record))
        .map_err(|err| StoreError::new(format!("Failed to decode record: {}", err)))
}
