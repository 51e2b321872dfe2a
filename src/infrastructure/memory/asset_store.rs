use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::application::ports::{AssetRepository, RepositoryError};
use crate::domain::entities::Asset;
use crate::domain::value_objects::{AssetKind, DocumentId};

#[derive(Default)]
pub struct InMemoryAssetRepository {
    documents: RwLock<HashMap<(AssetKind, DocumentId), Asset>>,
}

impl InMemoryAssetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in the collection for `kind`
    pub fn count(&self, kind: AssetKind) -> usize {
        self.documents
            .read()
            .keys()
            .filter(|(k, _)| *k == kind)
            .count()
    }
}

#[async_trait]
impl AssetRepository for InMemoryAssetRepository {
    async fn insert(&self, asset: &Asset) -> Result<(), RepositoryError> {
        let mut documents = self.documents.write();
        let key = (asset.kind(), *asset.id());
        if documents.contains_key(&key) {
            return Err(RepositoryError::Internal(format!(
                "duplicate id {} in {}",
                asset.id(),
                asset.kind().collection()
            )));
        }
        documents.insert(key, asset.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        kind: AssetKind,
        id: &DocumentId,
    ) -> Result<Option<Asset>, RepositoryError> {
        Ok(self.documents.read().get(&(kind, *id)).cloned())
    }

    async fn replace(&self, asset: &Asset) -> Result<bool, RepositoryError> {
        let mut documents = self.documents.write();
        match documents.get_mut(&(asset.kind(), *asset.id())) {
            Some(existing) => {
                *existing = asset.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, kind: AssetKind, id: &DocumentId) -> Result<bool, RepositoryError> {
        Ok(self.documents.write().remove(&(kind, *id)).is_some())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
