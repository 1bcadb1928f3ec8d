use serde::Deserialize;
use thiserror::Error;

/// An s3 event notification, as published into the sqs message body
#[derive(Debug, Deserialize)]
pub struct StorageChangeNotification {
    /// The change records. Only the first one is ever consulted, and it is deserialized lazily
    /// so that a malformed trailing record cannot fail the message.
    #[serde(rename = "Records")]
    pub records: Vec<serde_json::Value>,
}

/// One object write event inside a [StorageChangeNotification]
#[derive(Debug, Deserialize)]
pub struct StorageChangeRecord {
    /// The s3 entity the event refers to
    pub s3: S3Entity,
}

/// The `s3` member of a [StorageChangeRecord]
#[derive(Debug, Deserialize)]
pub struct S3Entity {
    /// The bucket the object was written to
    pub bucket: S3Bucket,
    /// The object that was written
    pub object: S3Object,
}

/// The bucket of an [S3Entity]
#[derive(Debug, Deserialize)]
pub struct S3Bucket {
    /// The bucket name
    pub name: String,
}

/// The object of an [S3Entity]
#[derive(Debug, Deserialize)]
pub struct S3Object {
    /// The object key, as published by s3. Colons arrive url encoded as `%3A`.
    pub key: String,
}

/// Why a message body could not be turned into an [ObjectLocation]
#[derive(Debug, Error)]
pub enum EnvelopeErr {
    /// The body is not json, or the json does not have the notification shape
    #[error("message body is not a storage change notification")]
    Malformed(#[from] serde_json::Error),
    /// The notification has an empty `Records` array
    #[error("storage change notification contained no records")]
    NoRecords,
}

/// The bucket and key of a stored object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    /// The bucket name
    pub bucket: String,
    /// The object key
    pub key: String,
}

impl ObjectLocation {
    /// create a new [ObjectLocation]
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Parses an sqs message body holding a [StorageChangeNotification] and returns the location
    /// named by `Records[0].s3`. The key is returned exactly as published.
    pub fn from_notification_body(body: &str) -> Result<Self, EnvelopeErr> {
        let notification: StorageChangeNotification = serde_json::from_str(body)?;
        let first = notification
            .records
            .into_iter()
            .next()
            .ok_or(EnvelopeErr::NoRecords)?;
        let record: StorageChangeRecord = serde_json::from_value(first)?;

        Ok(Self {
            bucket: record.s3.bucket.name,
            key: record.s3.object.key,
        })
    }

    /// returns a copy of self with the key passed through [normalize_object_key]
    pub fn normalized(&self) -> Self {
        Self {
            bucket: self.bucket.clone(),
            key: normalize_object_key(&self.key),
        }
    }
}

/// Normalizes an object key taken from an s3 notification so it can be read back from s3.
///
/// One leading `/` is stripped and every literal `%3A` is replaced by `:`.
/// A trailing `/` is kept as is.
pub fn normalize_object_key(key: &str) -> String {
    let key = key.strip_prefix('/').unwrap_or(key);
    key.replace("%3A", ":")
}
