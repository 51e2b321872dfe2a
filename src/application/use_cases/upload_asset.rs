use std::sync::Arc;

use crate::application::dto::{CreatedResponse, UploadAssetRequest};
use crate::application::errors::UseCaseError;
use crate::application::ports::AssetRepository;
use crate::domain::entities::Asset;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::AssetKind;

/// Use case: Upload a sprite or audio file
pub struct UploadAssetUseCase {
    asset_repo: Arc<dyn AssetRepository>,
}

impl UploadAssetUseCase {
    pub fn new(asset_repo: Arc<dyn AssetRepository>) -> Self {
        Self { asset_repo }
    }

    /// Execute upload workflow
    pub async fn execute(
        &self,
        kind: AssetKind,
        request: UploadAssetRequest,
    ) -> Result<CreatedResponse, UseCaseError> {
        // 1. File-type gate
        let filename = match request.filename {
            Some(name) if kind.accepts(Some(&name)) => name,
            _ => return Err(DomainError::InvalidFileType(kind).into()),
        };

        // 2. Build entity and persist
        let asset = Asset::new(kind, filename, request.content)?;
        self.asset_repo.insert(&asset).await?;

        tracing::info!(
            kind = %kind,
            id = %asset.id(),
            size_bytes = asset.size_bytes(),
            "asset_uploaded"
        );

        Ok(CreatedResponse {
            message: kind.uploaded_message().to_string(),
            id: asset.id().to_string(),
        })
    }
}
