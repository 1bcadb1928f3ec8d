#![deny(missing_docs)]
//! This crate ingests contact transcripts written to s3 into the contact trace record table.
//!
//! It follows the hexagonal architecture pattern: [domain] holds the pipeline and the ports it
//! needs, [outbound] holds the concrete s3 / dynamodb / in memory adapters, and [inbound] holds
//! the sqs lambda entrypoint that drives the pipeline.

pub mod domain;
pub mod inbound;
pub mod outbound;
