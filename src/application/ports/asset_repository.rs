use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::Asset;
use crate::domain::value_objects::{AssetKind, DocumentId};
#[cfg(test)]
use mockall::{automock, predicate::*};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Port for the `sprites` and `audio` collections
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AssetRepository: Send + Sync {
    /// Insert a new asset into the collection for its kind
    async fn insert(&self, asset: &Asset) -> Result<(), RepositoryError>;

    /// Find asset by ID
    async fn find_by_id(
        &self,
        kind: AssetKind,
        id: &DocumentId,
    ) -> Result<Option<Asset>, RepositoryError>;

    /// Overwrite filename and content. Returns false if no document matched.
    async fn replace(&self, asset: &Asset) -> Result<bool, RepositoryError>;

    /// Hard delete. Returns false if no document matched.
    async fn delete(&self, kind: AssetKind, id: &DocumentId) -> Result<bool, RepositoryError>;

    /// Cheap round trip to check the store is reachable
    async fn ping(&self) -> Result<(), RepositoryError>;
}
