use anyhow::{Context, Result};
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

use crate::domain::models::CONTACT_ID_ATTRIBUTE;

/// Fetches the raw item for `contact_id`, if there is one
pub(super) async fn get_item_by_contact_id(
    client: &Client,
    table: &str,
    contact_id: &str,
) -> Result<Option<HashMap<String, AttributeValue>>> {
    let output = client
        .get_item()
        .table_name(table)
        .key(CONTACT_ID_ATTRIBUTE, AttributeValue::S(contact_id.to_owned()))
        .send()
        .await
        .context("failed to get item from contact trace record table")?;

    Ok(output.item)
}
