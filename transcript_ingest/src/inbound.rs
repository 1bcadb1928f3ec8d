//! This module defines the entrypoints that drive the transcript ingest domain

pub mod sqs;
