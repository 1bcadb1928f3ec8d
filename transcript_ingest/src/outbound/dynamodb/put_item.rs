use std::collections::HashMap;

use anyhow::{Context, Result};
use aws_sdk_dynamodb::{error::SdkError, types::AttributeValue};

use crate::domain::models::WriteAck;

/// Replaces the item. A service error response is returned as a [WriteAck] carrying its status
/// code, anything that never got a response (dispatch, timeout, ...) is an error.
pub(super) async fn put_item(
    client: &aws_sdk_dynamodb::Client,
    table: &str,
    item: HashMap<String, AttributeValue>,
) -> Result<WriteAck> {
    match client
        .put_item()
        .table_name(table)
        .set_item(Some(item))
        .send()
        .await
    {
        Ok(_) => Ok(WriteAck::OK),
        Err(SdkError::ServiceError(e)) => {
            let status_code = e.raw().status().as_u16();
            tracing::warn!(error=?e.err(), status_code, "put item was rejected");
            Ok(WriteAck { status_code })
        }
        Err(e) => Err(e).context("could not put item, dynamodb"),
    }
}
