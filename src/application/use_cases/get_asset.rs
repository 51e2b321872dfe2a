use std::sync::Arc;

use crate::application::dto::AssetDto;
use crate::application::errors::UseCaseError;
use crate::application::ports::AssetRepository;
use crate::domain::value_objects::{AssetKind, DocumentId};

/// Use case: Read an asset's metadata by identifier
pub struct GetAssetUseCase {
    asset_repo: Arc<dyn AssetRepository>,
}

impl GetAssetUseCase {
    pub fn new(asset_repo: Arc<dyn AssetRepository>) -> Self {
        Self { asset_repo }
    }

    pub async fn execute(&self, kind: AssetKind, raw_id: &str) -> Result<AssetDto, UseCaseError> {
        let id = DocumentId::parse_labeled(raw_id, kind.label())?;

        match self.asset_repo.find_by_id(kind, &id).await? {
            Some(asset) => Ok(AssetDto::from(asset)),
            None => Err(UseCaseError::NotFound(kind.not_found_message().to_string())),
        }
    }
}
