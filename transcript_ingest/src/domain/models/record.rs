use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt::Display};

use super::ObjectLocation;

/// The partition key attribute of the contact trace record table
pub const CONTACT_ID_ATTRIBUTE: &str = "ContactId";

/// The status a record is moved to once its transcript has been attached
pub const COMPLETED_STATUS: &str = "Completed";

/// `yyyy-MM-dd HH:mm:ss`, the format of [ContactTraceRecord::updated_at]
pub const UPDATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The `Status` attribute
pub const STATUS_ATTRIBUTE: &str = "Status";

/// The `Transcript` attribute
pub const TRANSCRIPT_ATTRIBUTE: &str = "Transcript";

/// The `UpdatedAt` attribute
pub const UPDATED_AT_ATTRIBUTE: &str = "UpdatedAt";

/// The `TranscriptS3URI` attribute
pub const TRANSCRIPT_S3_URI_ATTRIBUTE: &str = "TranscriptS3URI";

/// A row of the contact trace record table.
///
/// Records are created upstream when a contact starts. This crate only ever updates a record
/// which already exists. Attributes this crate does not know about, and known attributes stored
/// with an unexpected type, are kept as raw dynamodb values in [ContactTraceRecord::attributes]
/// so they are written back exactly as they were read.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactTraceRecord {
    /// The partition key
    pub contact_id: String,
    /// The processing status, e.g. `Pending` or [COMPLETED_STATUS]
    pub status: Option<String>,
    /// The serialized [super::TranscriptsWrapper]
    pub transcript: Option<String>,
    /// When the transcript was attached, formatted with [UPDATED_AT_FORMAT]
    pub updated_at: Option<String>,
    /// Where the transcript was read from
    pub transcript_s3_uri: Option<TranscriptPointer>,
    /// Every other attribute of the record, carried through untouched.
    /// The typed fields above take precedence over an entry of the same name.
    pub attributes: HashMap<String, AttributeValue>,
}

/// The s3 location of a transcript, stored on the record as a map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptPointer {
    /// The bucket the transcript lives in
    #[serde(rename = "S3BucketName")]
    pub bucket_name: String,
    /// The key of the transcript object
    #[serde(rename = "S3Key")]
    pub key: String,
}

impl From<&ObjectLocation> for TranscriptPointer {
    fn from(location: &ObjectLocation) -> Self {
        TranscriptPointer {
            bucket_name: location.bucket.clone(),
            key: location.key.clone(),
        }
    }
}

impl ContactTraceRecord {
    /// create a bare record with only the partition key and a status set
    pub fn new(contact_id: impl Into<String>, status: impl Into<String>) -> Self {
        ContactTraceRecord {
            contact_id: contact_id.into(),
            status: Some(status.into()),
            transcript: None,
            updated_at: None,
            transcript_s3_uri: None,
            attributes: Default::default(),
        }
    }

    /// true once a transcript has been attached to this record
    pub fn is_completed(&self) -> bool {
        self.status.as_deref() == Some(COMPLETED_STATUS)
    }

    /// Attach a transcript to this record and mark it completed.
    /// All attributes not named here are left as they were.
    pub fn complete_with_transcript<Tz>(
        mut self,
        transcript_json: String,
        pointer: TranscriptPointer,
        updated_at: DateTime<Tz>,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        for name in [
            STATUS_ATTRIBUTE,
            TRANSCRIPT_ATTRIBUTE,
            UPDATED_AT_ATTRIBUTE,
            TRANSCRIPT_S3_URI_ATTRIBUTE,
        ] {
            self.attributes.remove(name);
        }
        self.transcript = Some(transcript_json);
        self.updated_at = Some(updated_at.format(UPDATED_AT_FORMAT).to_string());
        self.transcript_s3_uri = Some(pointer);
        self.status = Some(COMPLETED_STATUS.to_string());
        self
    }
}
