//! This module defines all members of the transcript ingest domain

pub mod models;
pub mod ports;
pub mod services;
