//! This module defines concrete implementations of the required outbound ports
//! Outbounds ports are things in the outside world that we reach out to

pub mod dynamodb;
pub mod memory;
pub mod s3;
pub mod time;
