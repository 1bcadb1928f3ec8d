//! In memory implementations of the object and record stores.
//! Used for local runs of the pipeline and for end to end tests.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::domain::{
    models::{ContactTraceRecord, WriteAck},
    ports::{ContactTraceRecordStore, TranscriptObjectStore},
};

/// The errors produced by the in memory stores
#[derive(Debug, Error)]
pub enum InMemoryStoreErr {
    /// there is no object at the requested location
    #[error("object {key} does not exist in bucket {bucket}")]
    ObjectNotFound {
        /// the requested bucket
        bucket: String,
        /// the requested key
        key: String,
    },
}

/// An object store holding its objects in a map keyed by (bucket, key)
#[derive(Debug, Clone, Default)]
pub struct InMemoryObjectStore {
    objects: Arc<RwLock<HashMap<(String, String), Vec<u8>>>>,
}

impl InMemoryObjectStore {
    /// create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// store `content` at `key` in `bucket`, replacing anything already there
    pub async fn insert(&self, bucket: &str, key: &str, content: impl Into<Vec<u8>>) {
        let mut objects = self.objects.write().await;
        objects.insert((bucket.to_string(), key.to_string()), content.into());
    }
}

impl TranscriptObjectStore for InMemoryObjectStore {
    type Err = InMemoryStoreErr;

    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, InMemoryStoreErr> {
        let objects = self.objects.read().await;
        objects
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
            .ok_or_else(|| InMemoryStoreErr::ObjectNotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
    }
}

/// A record store holding its records in a map keyed by contact id
#[derive(Debug, Clone)]
pub struct InMemoryRecordStore {
    records: Arc<RwLock<HashMap<String, ContactTraceRecord>>>,
    write_status: u16,
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRecordStore {
    /// create an empty store which accepts every write
    pub fn new() -> Self {
        InMemoryRecordStore {
            records: Arc::new(RwLock::new(HashMap::new())),
            write_status: WriteAck::OK.status_code,
        }
    }

    /// create an empty store which answers every write with `status_code`.
    /// Writes answered with a non 2xx status are not applied.
    pub fn with_write_status(status_code: u16) -> Self {
        InMemoryRecordStore {
            write_status: status_code,
            ..Self::new()
        }
    }

    /// insert or replace a record directly, bypassing the write status
    pub async fn insert(&self, record: ContactTraceRecord) {
        let mut records = self.records.write().await;
        records.insert(record.contact_id.clone(), record);
    }

    /// read a record directly
    pub async fn get(&self, contact_id: &str) -> Option<ContactTraceRecord> {
        let records = self.records.read().await;
        records.get(contact_id).cloned()
    }

    /// the number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// true when no records are stored
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl ContactTraceRecordStore for InMemoryRecordStore {
    type Err = InMemoryStoreErr;

    async fn get_record(
        &self,
        contact_id: &str,
    ) -> Result<Option<ContactTraceRecord>, InMemoryStoreErr> {
        Ok(self.get(contact_id).await)
    }

    async fn put_record(&self, record: ContactTraceRecord) -> Result<WriteAck, InMemoryStoreErr> {
        let ack = WriteAck {
            status_code: self.write_status,
        };
        if ack.is_success() {
            self.insert(record).await;
        }
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use cool_asserts::assert_matches;

    use super::*;

    #[tokio::test]
    async fn objects_are_read_back() {
        let store = InMemoryObjectStore::new();
        store.insert("bucket", "a:b.json", "{}").await;

        assert_eq!(store.get_object("bucket", "a:b.json").await.unwrap(), b"{}");
        assert_matches!(
            store.get_object("bucket", "a%3Ab.json").await,
            Err(InMemoryStoreErr::ObjectNotFound { .. })
        );
    }

    #[tokio::test]
    async fn rejected_writes_are_not_applied() {
        let store = InMemoryRecordStore::with_write_status(500);
        store.insert(ContactTraceRecord::new("C1", "Pending")).await;

        let ack = store
            .put_record(ContactTraceRecord::new("C1", "Completed"))
            .await
            .unwrap();

        assert!(!ack.is_success());
        assert_eq!(
            store.get("C1").await.unwrap().status.as_deref(),
            Some("Pending")
        );
    }

    #[tokio::test]
    async fn accepted_writes_replace_the_record() {
        let store = InMemoryRecordStore::new();
        store.insert(ContactTraceRecord::new("C1", "Pending")).await;

        let ack = store
            .put_record(ContactTraceRecord::new("C1", "Completed"))
            .await
            .unwrap();

        assert_eq!(ack, WriteAck::OK);
        assert_eq!(store.len().await, 1);
        assert!(store.get("C1").await.unwrap().is_completed());
    }
}
