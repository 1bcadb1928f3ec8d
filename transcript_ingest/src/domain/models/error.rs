use std::string::FromUtf8Error;
use thiserror::Error;

use super::EnvelopeErr;

/// The reasons a single message could not be ingested.
/// None of these are fatal for the batch the message arrived in.
#[derive(Debug, Error)]
pub enum IngestErr {
    /// The message body did not name an object
    #[error(transparent)]
    Envelope(#[from] EnvelopeErr),
    /// The object could not be read from the object store
    #[error("could not fetch object {key} from bucket {bucket}")]
    ObjectFetch {
        /// the bucket that was read
        bucket: String,
        /// the normalized key that was read
        key: String,
        /// the underlying store error
        #[source]
        source: anyhow::Error,
    },
    /// The object content is not utf-8 text
    #[error("object {key} in bucket {bucket} is not valid utf-8")]
    NotUtf8 {
        /// the bucket that was read
        bucket: String,
        /// the normalized key that was read
        key: String,
        /// the decode error
        #[source]
        source: FromUtf8Error,
    },
    /// The object content is not a transcript document
    #[error("malformed transcript document")]
    Payload(#[source] serde_json::Error),
    /// The record store failed to read or write the record
    #[error("record store failure for contact {contact_id}")]
    RecordStore {
        /// the contact being ingested
        contact_id: String,
        /// the underlying store error
        #[source]
        source: anyhow::Error,
    },
}
