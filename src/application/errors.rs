//! Error type shared by every use case

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
