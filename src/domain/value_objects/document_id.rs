use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};
use utoipa::ToSchema;

use crate::domain::errors::DomainError;
use crate::domain::input_sanitization::Validator;

/// Per-process random component, fixed for the lifetime of the process
static PROCESS_UNIQUE: Lazy<[u8; 5]> = Lazy::new(rand::random::<[u8; 5]>);

/// Monotonic counter seeded randomly; only the low 24 bits are used
static COUNTER: Lazy<AtomicU32> = Lazy::new(|| AtomicU32::new(rand::random::<u32>()));

/// Opaque 12-byte document identifier, rendered as 24 lowercase hex characters.
///
/// Layout: 4-byte big-endian seconds timestamp, 5 process-unique bytes,
/// 3-byte big-endian counter. Identifiers generated by one process therefore
/// sort roughly by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "65a1f0c2e4b0a1b2c3d4e5f6")]
pub struct DocumentId([u8; 12]);

impl DocumentId {
    pub fn new() -> Self {
        let timestamp = chrono::Utc::now().timestamp() as u32;
        let counter = COUNTER.fetch_add(1, Ordering::Relaxed) & 0x00ff_ffff;

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&timestamp.to_be_bytes());
        bytes[4..9].copy_from_slice(&*PROCESS_UNIQUE);
        bytes[9..].copy_from_slice(&counter.to_be_bytes()[1..]);
        Self(bytes)
    }

    /// Seconds since the Unix epoch embedded in the identifier
    pub fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// Parse an identifier, naming the record kind in the error
    pub fn parse_labeled(input: &str, label: &'static str) -> Result<Self, DomainError> {
        if !Validator::is_valid_document_id(input) {
            return Err(DomainError::InvalidDocumentId(label));
        }

        let mut bytes = [0u8; 12];
        hex::decode_to_slice(input, &mut bytes)
            .map_err(|_| DomainError::InvalidDocumentId(label))?;
        Ok(Self(bytes))
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl std::str::FromStr for DocumentId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_labeled(s, "document")
    }
}

impl TryFrom<String> for DocumentId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DocumentId> for String {
    fn from(id: DocumentId) -> Self {
        id.to_string()
    }
}
