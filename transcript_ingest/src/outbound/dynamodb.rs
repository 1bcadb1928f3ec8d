//! [ContactTraceRecordStore] backed by a dynamodb table keyed by `ContactId`

mod get_item;
mod item;
mod put_item;

use anyhow::Result;

use crate::domain::{
    models::{ContactTraceRecord, WriteAck},
    ports::ContactTraceRecordStore,
};

/// Reads and writes contact trace records
#[derive(Debug, Clone)]
pub struct DynamodbRecordStore {
    table: String,
    client: aws_sdk_dynamodb::Client,
}

impl DynamodbRecordStore {
    /// create a new store over `table`
    pub fn new(client: aws_sdk_dynamodb::Client, table: &str) -> Self {
        DynamodbRecordStore {
            table: table.to_string(),
            client,
        }
    }
}

impl ContactTraceRecordStore for DynamodbRecordStore {
    type Err = anyhow::Error;

    #[tracing::instrument(skip(self), fields(table = %self.table))]
    async fn get_record(&self, contact_id: &str) -> Result<Option<ContactTraceRecord>> {
        get_item::get_item_by_contact_id(&self.client, &self.table, contact_id)
            .await?
            .map(item::record_from_item)
            .transpose()
    }

    #[tracing::instrument(skip(self, record), fields(table = %self.table, contact_id = %record.contact_id))]
    async fn put_record(&self, record: ContactTraceRecord) -> Result<WriteAck> {
        let item = item::record_to_item(record)?;
        put_item::put_item(&self.client, &self.table, item).await
    }
}
