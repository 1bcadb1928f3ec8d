//! This module defines the services that are exposed by this crate

use crate::{
    domain::{
        models::{
            IngestErr, IngestOutcome, ObjectLocation, TranscriptDocument, TranscriptPointer,
            TranscriptsWrapper,
        },
        ports::{ContactTraceRecordStore, TimeGetter, TranscriptIngestService, TranscriptObjectStore},
    },
    outbound::time::DefaultTime,
};


/// concrete struct which implements [TranscriptIngestService]
#[derive(Clone)]
pub struct TranscriptIngestImpl<O, R, T> {
    object_store: O,
    record_store: R,
    time: T,
}

impl<O, R, T> TranscriptIngestImpl<O, R, T>
where
    O: TranscriptObjectStore,
    anyhow::Error: From<O::Err>,
    R: ContactTraceRecordStore,
    anyhow::Error: From<R::Err>,
    T: TimeGetter,
{
    /// create a new instance of this service
    pub fn new(object_store: O, record_store: R, time: T) -> Self {
        TranscriptIngestImpl {
            object_store,
            record_store,
            time,
        }
    }

    /// Reads the object at `location` and decodes it as utf-8 text.
    /// `location` is expected to be normalized already.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_transcript_text(&self, location: &ObjectLocation) -> Result<String, IngestErr> {
        let bytes = self
            .object_store
            .get_object(&location.bucket, &location.key)
            .await
            .map_err(|e| IngestErr::ObjectFetch {
                bucket: location.bucket.clone(),
                key: location.key.clone(),
                source: anyhow::Error::from(e),
            })?;

        tracing::trace!(byte_count = bytes.len(), "object retrieved");

        String::from_utf8(bytes).map_err(|source| IngestErr::NotUtf8 {
            bucket: location.bucket.clone(),
            key: location.key.clone(),
            source,
        })
    }

    /// Attaches the transcript to the record keyed by `contact_id`, if that record exists.
    ///
    /// A missing record is not an error: nothing is written and
    /// [IngestOutcome::RecordNotFound] is returned.
    #[tracing::instrument(skip(self, transcripts), fields(transcript_entries = transcripts.len()))]
    pub async fn upsert_transcript(
        &self,
        contact_id: &str,
        transcripts: &TranscriptsWrapper,
        location: &ObjectLocation,
    ) -> Result<IngestOutcome, IngestErr> {
        let existing = self
            .record_store
            .get_record(contact_id)
            .await
            .map_err(|e| IngestErr::RecordStore {
                contact_id: contact_id.to_string(),
                source: anyhow::Error::from(e),
            })?;

        let Some(record) = existing else {
            tracing::info!("contact trace record does not exist, skipping");
            return Ok(IngestOutcome::RecordNotFound {
                contact_id: contact_id.to_string(),
            });
        };

        tracing::trace!(status=?record.status, "found contact trace record");

        let transcript_json = transcripts.to_json_text().map_err(IngestErr::Payload)?;
        let record = record.complete_with_transcript(
            transcript_json,
            TranscriptPointer::from(location),
            self.time.now(),
        );

        let ack = self
            .record_store
            .put_record(record)
            .await
            .map_err(|e| IngestErr::RecordStore {
                contact_id: contact_id.to_string(),
                source: anyhow::Error::from(e),
            })?;

        if !ack.is_success() {
            tracing::warn!(
                status_code = ack.status_code,
                "contact trace record write was not acknowledged"
            );
            return Ok(IngestOutcome::WriteNotAcknowledged {
                contact_id: contact_id.to_string(),
                status_code: ack.status_code,
            });
        }

        tracing::info!("contact trace record saved");

        Ok(IngestOutcome::Completed {
            contact_id: contact_id.to_string(),
        })
    }
}

impl<O, R> TranscriptIngestImpl<O, R, DefaultTime>
where
    O: TranscriptObjectStore,
    anyhow::Error: From<O::Err>,
    R: ContactTraceRecordStore,
    anyhow::Error: From<R::Err>,
{
    /// create an instance of self passing the default impl for [TimeGetter]
    pub fn new_with_default_time(object_store: O, record_store: R) -> Self {
        Self::new(object_store, record_store, DefaultTime)
    }
}

impl<O, R, T> TranscriptIngestService for TranscriptIngestImpl<O, R, T>
where
    O: TranscriptObjectStore,
    anyhow::Error: From<O::Err>,
    R: ContactTraceRecordStore,
    anyhow::Error: From<R::Err>,
    T: TimeGetter,
{
    #[tracing::instrument(skip_all)]
    async fn ingest_message(&self, body: &str) -> Result<IngestOutcome, IngestErr> {
        let location = ObjectLocation::from_notification_body(body)?.normalized();

        tracing::info!(bucket=%location.bucket, key=%location.key, "processing transcript object");

        let text = self.fetch_transcript_text(&location).await?;

        let (contact_id, transcripts) = TranscriptDocument::parse(&text)
            .map_err(IngestErr::Payload)?
            .into_parts();

        tracing::info!(contact_id=%contact_id, "parsed transcript document");

        self.upsert_transcript(&contact_id, &transcripts, &location)
            .await
    }
}
