use super::IngestErr;

/// The acknowledgment a record store gives for a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteAck {
    /// The http status code of the write response
    pub status_code: u16,
}

impl WriteAck {
    /// An acknowledgment for a write that was accepted
    pub const OK: WriteAck = WriteAck { status_code: 200 };

    /// true for any 2xx status code
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// What happened to a message that was processed without error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// The record existed and was written back with the transcript attached
    Completed {
        /// the contact that was updated
        contact_id: String,
    },
    /// There is no record for the contact so nothing was written
    RecordNotFound {
        /// the contact named by the transcript
        contact_id: String,
    },
    /// The write was answered with a non 2xx status
    WriteNotAcknowledged {
        /// the contact that was being updated
        contact_id: String,
        /// the status code of the write response
        status_code: u16,
    },
}

/// Counters for the messages of one sqs batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// messages received
    pub received: usize,
    /// messages whose record was completed
    pub completed: usize,
    /// messages skipped because the record does not exist
    pub record_not_found: usize,
    /// messages whose write was not acknowledged
    pub write_not_acknowledged: usize,
    /// messages that failed with an [IngestErr]
    pub failed: usize,
}

impl BatchStats {
    /// count the result of one message
    pub fn record(&mut self, result: &Result<IngestOutcome, IngestErr>) {
        self.received += 1;
        match result {
            Ok(IngestOutcome::Completed { .. }) => self.completed += 1,
            Ok(IngestOutcome::RecordNotFound { .. }) => self.record_not_found += 1,
            Ok(IngestOutcome::WriteNotAcknowledged { .. }) => self.write_not_acknowledged += 1,
            Err(_) => self.failed += 1,
        }
    }
}
