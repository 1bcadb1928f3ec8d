//! The data types that flow through the transcript ingest pipeline

mod envelope;
mod error;
mod outcome;
mod record;
mod transcript;


pub use envelope::*;
pub use error::*;
pub use outcome::*;
pub use record::*;
pub use transcript::*;
