use serde::{Deserialize, Serialize};

/// The transcript json document written to s3 once a contact has finished
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TranscriptDocument {
    /// The transcript entries. Their shape is not inspected.
    pub transcript: Vec<serde_json::Value>,
    /// Metadata about the contact the transcript belongs to
    pub customer_metadata: CustomerMetadata,
}

/// The `CustomerMetadata` member of a [TranscriptDocument]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerMetadata {
    /// The id of the contact, which is the key of the contact trace record
    pub contact_id: String,
}

impl TranscriptDocument {
    /// parse a [TranscriptDocument] from the text of an s3 object
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// split the document into the contact id and the transcript in its persisted shape
    pub fn into_parts(self) -> (String, TranscriptsWrapper) {
        (
            self.customer_metadata.contact_id,
            TranscriptsWrapper {
                transcripts: self.transcript,
            },
        )
    }
}

/// The shape the transcript is persisted in: `{"Transcripts": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TranscriptsWrapper {
    /// The transcript entries, in their original order
    pub transcripts: Vec<serde_json::Value>,
}

impl TranscriptsWrapper {
    /// the number of transcript entries
    pub fn len(&self) -> usize {
        self.transcripts.len()
    }

    /// true when the transcript has no entries
    pub fn is_empty(&self) -> bool {
        self.transcripts.is_empty()
    }

    /// serialize self to the compact json text stored on the record
    pub fn to_json_text(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
