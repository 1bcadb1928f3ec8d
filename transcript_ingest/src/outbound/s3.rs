//! [TranscriptObjectStore] backed by s3

mod get;

use crate::domain::ports::TranscriptObjectStore;

/// Reads transcript objects out of s3
#[derive(Clone, Debug)]
pub struct S3ObjectStore {
    inner: aws_sdk_s3::Client,
}

impl S3ObjectStore {
    /// create a new [S3ObjectStore] wrapping the given client
    pub fn new(inner: aws_sdk_s3::Client) -> Self {
        Self { inner }
    }
}

impl TranscriptObjectStore for S3ObjectStore {
    type Err = anyhow::Error;

    #[tracing::instrument(skip(self))]
    async fn get_object(&self, bucket: &str, key: &str) -> anyhow::Result<Vec<u8>> {
        get::get_object_bytes(&self.inner, bucket, key).await
    }
}
