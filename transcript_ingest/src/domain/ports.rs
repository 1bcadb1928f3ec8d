//! This module defines all of the ports that the transcript ingest domain requires

use chrono::{DateTime, Local};

use crate::domain::models::{ContactTraceRecord, IngestErr, IngestOutcome, WriteAck};

/// Read access to the object store the transcripts are written to
#[cfg_attr(test, mockall::automock(type Err = anyhow::Error;))]
pub trait TranscriptObjectStore: Send + Sync + 'static {
    /// The error type that can occur
    type Err: Send;

    /// read the full content of the object at `key` in `bucket`
    fn get_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> impl Future<Output = Result<Vec<u8>, Self::Err>> + Send;
}

/// Trait for interacting with the storage of [ContactTraceRecord] records
#[cfg_attr(test, mockall::automock(type Err = anyhow::Error;))]
pub trait ContactTraceRecordStore: Send + Sync + 'static {
    /// The error type that can occur
    type Err: Send;

    /// look up the record keyed by `contact_id`
    fn get_record(
        &self,
        contact_id: &str,
    ) -> impl Future<Output = Result<Option<ContactTraceRecord>, Self::Err>> + Send;

    /// replace the stored record with `record`.
    /// A write the store answered with a non 2xx status is returned as a [WriteAck], not an error.
    fn put_record(
        &self,
        record: ContactTraceRecord,
    ) -> impl Future<Output = Result<WriteAck, Self::Err>> + Send;
}

/// port for getting the current local time.
/// Having a trait allows tests to pin the `UpdatedAt` stamp
#[cfg_attr(test, mockall::automock)]
pub trait TimeGetter: Send + Sync + 'static {
    /// get the current time in the process time zone
    fn now(&self) -> DateTime<Local>;
}

/// The service level interface for ingesting one queued storage change notification
pub trait TranscriptIngestService: Send + Sync + 'static {
    /// run the fetch, parse and conditional upsert pipeline for one sqs message body
    fn ingest_message(
        &self,
        body: &str,
    ) -> impl Future<Output = Result<IngestOutcome, IngestErr>> + Send;
}
