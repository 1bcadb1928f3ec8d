//! The sqs lambda entrypoint.
//!
//! The queue receives the s3 `ObjectCreated` notifications of the transcript bucket. Messages of
//! a batch are processed one after another and a failing message never stops the rest of the
//! batch. Nothing is reported back to the queue: redelivery is left to the queue configuration.

use std::sync::Arc;

use aws_lambda_events::event::sqs::SqsEvent;
use lambda_runtime::{Error, LambdaEvent};
use tracing::Instrument;

use crate::domain::{
    models::{BatchStats, IngestOutcome},
    ports::TranscriptIngestService,
};

#[cfg(test)]
mod tests;

/// Processes every message of the batch in order and returns the per outcome counts
#[tracing::instrument(skip_all, fields(record_count = event.records.len()))]
pub async fn handle_batch<S>(service: &S, event: SqsEvent) -> BatchStats
where
    S: TranscriptIngestService,
{
    let mut stats = BatchStats::default();

    for message in event.records {
        let message_id = message.message_id.unwrap_or_default();
        let body = message.body.as_deref().unwrap_or_default();

        let span = tracing::info_span!("process_message", message_id = %message_id);
        let result = service.ingest_message(body).instrument(span).await;

        match &result {
            Ok(IngestOutcome::Completed { contact_id }) => {
                tracing::trace!(message_id=%message_id, contact_id=%contact_id, "message completed");
            }
            Ok(IngestOutcome::RecordNotFound { contact_id }) => {
                tracing::info!(message_id=%message_id, contact_id=%contact_id, "message skipped, record does not exist");
            }
            Ok(IngestOutcome::WriteNotAcknowledged {
                contact_id,
                status_code,
            }) => {
                tracing::warn!(message_id=%message_id, contact_id=%contact_id, status_code, "message processed but the write was not acknowledged");
            }
            Err(e) => {
                tracing::error!(error=?e, message_id=%message_id, "unable to ingest transcript message");
            }
        }

        stats.record(&result);
    }

    tracing::info!(
        received = stats.received,
        completed = stats.completed,
        record_not_found = stats.record_not_found,
        write_not_acknowledged = stats.write_not_acknowledged,
        failed = stats.failed,
        "batch processed"
    );

    stats
}

/// Handles the SQS event
#[tracing::instrument(skip_all, fields(request_id = %event.context.request_id))]
pub async fn handler<S>(service: Arc<S>, event: LambdaEvent<SqsEvent>) -> Result<(), Error>
where
    S: TranscriptIngestService,
{
    tracing::info!(
        record_count = event.payload.records.len(),
        "processing sqs event"
    );

    handle_batch(service.as_ref(), event.payload).await;

    Ok(())
}
