use thiserror::Error;

use super::value_objects::AssetKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid {0} ID format")]
    InvalidDocumentId(&'static str),

    #[error("{}", .0.rejection_message())]
    InvalidFileType(AssetKind),

    #[error("Invalid player name: {0}")]
    InvalidPlayerName(String),

    #[error("Score must be non-negative, got {0}")]
    NegativeScore(i64),
}
