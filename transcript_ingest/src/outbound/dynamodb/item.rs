use std::collections::HashMap;

use anyhow::{Context, Result};
use aws_sdk_dynamodb::types::AttributeValue;
use serde_dynamo::{from_attribute_value, to_attribute_value};

use crate::domain::models::{
    CONTACT_ID_ATTRIBUTE, ContactTraceRecord, STATUS_ATTRIBUTE, TRANSCRIPT_ATTRIBUTE,
    TRANSCRIPT_S3_URI_ATTRIBUTE, TranscriptPointer, UPDATED_AT_ATTRIBUTE,
};

type RawItem = HashMap<String, AttributeValue>;

/// Splits a raw item into the attributes this crate reads and the rest.
/// Known attributes of an unexpected type stay raw so they are never lost.
pub(super) fn record_from_item(mut item: RawItem) -> Result<ContactTraceRecord> {
    let contact_id = match item.remove(CONTACT_ID_ATTRIBUTE) {
        Some(AttributeValue::S(contact_id)) => contact_id,
        Some(other) => anyhow::bail!("{CONTACT_ID_ATTRIBUTE} is not a string: {other:?}"),
        None => anyhow::bail!("item has no {CONTACT_ID_ATTRIBUTE}"),
    };

    let transcript_s3_uri = take_pointer(&mut item);

    Ok(ContactTraceRecord {
        contact_id,
        status: take_string(&mut item, STATUS_ATTRIBUTE),
        transcript: take_string(&mut item, TRANSCRIPT_ATTRIBUTE),
        updated_at: take_string(&mut item, UPDATED_AT_ATTRIBUTE),
        transcript_s3_uri,
        attributes: item,
    })
}

/// The inverse of [record_from_item]. Typed fields overwrite raw attributes of the same name.
pub(super) fn record_to_item(record: ContactTraceRecord) -> Result<RawItem> {
    let mut item = record.attributes;

    item.insert(
        CONTACT_ID_ATTRIBUTE.to_string(),
        AttributeValue::S(record.contact_id),
    );
    for (name, value) in [
        (STATUS_ATTRIBUTE, record.status),
        (TRANSCRIPT_ATTRIBUTE, record.transcript),
        (UPDATED_AT_ATTRIBUTE, record.updated_at),
    ] {
        if let Some(value) = value {
            item.insert(name.to_string(), AttributeValue::S(value));
        }
    }
    if let Some(pointer) = record.transcript_s3_uri {
        let pointer: AttributeValue =
            to_attribute_value(pointer).context("failed to convert transcript pointer")?;
        item.insert(TRANSCRIPT_S3_URI_ATTRIBUTE.to_string(), pointer);
    }

    Ok(item)
}

fn take_string(item: &mut RawItem, name: &str) -> Option<String> {
    match item.remove(name) {
        Some(AttributeValue::S(value)) => Some(value),
        Some(other) => {
            item.insert(name.to_string(), other);
            None
        }
        None => None,
    }
}

fn take_pointer(item: &mut RawItem) -> Option<TranscriptPointer> {
    let raw = item.get(TRANSCRIPT_S3_URI_ATTRIBUTE)?.clone();
    let pointer: TranscriptPointer = from_attribute_value(raw).ok()?;
    item.remove(TRANSCRIPT_S3_URI_ATTRIBUTE);
    Some(pointer)
}
