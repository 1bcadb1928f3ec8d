#![recursion_limit = "256"]

mod config;

use std::sync::Arc;

use aws_lambda_events::event::sqs::SqsEvent;
use config::Config;
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};
use transcript_entrypoint::TranscriptEntrypoint;
use transcript_ingest::{
    domain::services::TranscriptIngestImpl,
    inbound::sqs::handler,
    outbound::{dynamodb::DynamodbRecordStore, s3::S3ObjectStore},
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let entrypoint = TranscriptEntrypoint::default()
        .local()
        .tree_tracing(config::tree_tracing_indent())
        .build()
        .init();

    tracing::trace!("initiating lambda");

    let config = Config::from_env(entrypoint.environment())?;

    tracing::info!(
        table = %config.contact_trace_table,
        region = %config.transcript_bucket_region,
        environment = %config.environment,
        "loaded config"
    );

    let s3_client = aws_sdk_s3::Client::new(
        &aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(
                config.transcript_bucket_region.clone(),
            ))
            .load()
            .await,
    );

    let dynamodb_client = aws_sdk_dynamodb::Client::new(
        &aws_config::defaults(aws_config::BehaviorVersion::latest())
            .load()
            .await,
    );

    tracing::trace!("initialized aws clients");

    let service = Arc::new(TranscriptIngestImpl::new_with_default_time(
        S3ObjectStore::new(s3_client),
        DynamodbRecordStore::new(dynamodb_client, &config.contact_trace_table),
    ));

    let func = service_fn(move |event: LambdaEvent<SqsEvent>| {
        let service = service.clone();
        async move { handler(service, event).await }
    });

    run(func).await
}
