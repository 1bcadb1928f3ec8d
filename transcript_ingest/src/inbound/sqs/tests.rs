use chrono::{DateTime, Local, TimeZone};
use serde_json::json;

use super::*;
use crate::{
    domain::{
        models::ContactTraceRecord, ports::MockTimeGetter, services::TranscriptIngestImpl,
    },
    outbound::memory::{InMemoryObjectStore, InMemoryRecordStore},
};

type TestService = TranscriptIngestImpl<InMemoryObjectStore, InMemoryRecordStore, MockTimeGetter>;

fn now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
}

fn notification(bucket: &str, key: &str) -> String {
    json!({
        "Records": [{ "s3": { "bucket": { "name": bucket }, "object": { "key": key } } }]
    })
    .to_string()
}

fn transcript(contact_id: &str) -> String {
    json!({
        "Transcript": [{ "text": format!("hello {contact_id}") }],
        "CustomerMetadata": { "ContactId": contact_id }
    })
    .to_string()
}

fn sqs_event(bodies: &[&str]) -> SqsEvent {
    let records: Vec<_> = bodies
        .iter()
        .enumerate()
        .map(|(i, body)| json!({ "messageId": format!("message-{i}"), "body": body }))
        .collect();
    serde_json::from_value(json!({ "Records": records })).unwrap()
}

async fn service_with_contacts(
    contacts: &[&str],
) -> (TestService, InMemoryRecordStore) {
    let objects = InMemoryObjectStore::new();
    let records = InMemoryRecordStore::new();
    for contact_id in contacts {
        objects
            .insert("bucket", &format!("{contact_id}.json"), transcript(contact_id))
            .await;
        records
            .insert(ContactTraceRecord::new(*contact_id, "Pending"))
            .await;
    }

    let mut time = MockTimeGetter::new();
    time.expect_now().returning(now);

    (
        TranscriptIngestImpl::new(objects, records.clone(), time),
        records,
    )
}

#[tokio::test]
async fn a_malformed_message_does_not_stop_the_batch() {
    let (service, records) = service_with_contacts(&["C1", "C3"]).await;
    let first = notification("bucket", "C1.json");
    let third = notification("bucket", "C3.json");

    let stats = handle_batch(&service, sqs_event(&[&first, "{not json", &third])).await;

    assert_eq!(stats.received, 3);
    assert_eq!(stats.completed, 2);
    assert_eq!(stats.failed, 1);
    assert!(records.get("C1").await.unwrap().is_completed());
    assert!(records.get("C3").await.unwrap().is_completed());
}

#[tokio::test]
async fn missing_object_fails_only_its_message() {
    let (service, records) = service_with_contacts(&["C1"]).await;
    let missing_object = notification("bucket", "nope.json");
    let present = notification("bucket", "C1.json");

    let stats = handle_batch(&service, sqs_event(&[&missing_object, &present])).await;

    assert_eq!(stats.received, 2);
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.completed, 1);
    assert_eq!(records.len().await, 1);
}

#[tokio::test]
async fn messages_without_a_body_are_failures() {
    let (service, _) = service_with_contacts(&[]).await;
    let event: SqsEvent =
        serde_json::from_value(json!({ "Records": [{ "messageId": "no-body" }] })).unwrap();

    let stats = handle_batch(&service, event).await;

    assert_eq!(stats.received, 1);
    assert_eq!(stats.failed, 1);
}

#[tokio::test]
async fn handler_always_succeeds() {
    let (service, records) = service_with_contacts(&["C1"]).await;
    let event = LambdaEvent::new(
        sqs_event(&["garbage", &notification("bucket", "C1.json")]),
        lambda_runtime::Context::default(),
    );

    handler(Arc::new(service), event).await.unwrap();

    assert!(records.get("C1").await.unwrap().is_completed());
}
