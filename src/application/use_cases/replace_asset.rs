use std::sync::Arc;

use crate::application::dto::{MessageResponse, UploadAssetRequest};
use crate::application::errors::UseCaseError;
use crate::application::ports::AssetRepository;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{AssetKind, DocumentId};

/// Use case: Overwrite an existing asset's filename and content
pub struct ReplaceAssetUseCase {
    asset_repo: Arc<dyn AssetRepository>,
}

impl ReplaceAssetUseCase {
    pub fn new(asset_repo: Arc<dyn AssetRepository>) -> Self {
        Self { asset_repo }
    }

    pub async fn execute(
        &self,
        kind: AssetKind,
        raw_id: &str,
        request: UploadAssetRequest,
    ) -> Result<MessageResponse, UseCaseError> {
        // 1. Identifier and file-type gate, before touching the store
        let id = DocumentId::parse_labeled(raw_id, kind.label())?;
        let filename = match request.filename {
            Some(name) if kind.accepts(Some(&name)) => name,
            _ => return Err(DomainError::InvalidFileType(kind).into()),
        };

        // 2. Load existing document
        let mut asset = self
            .asset_repo
            .find_by_id(kind, &id)
            .await?
            .ok_or_else(|| UseCaseError::NotFound(kind.not_found_message().to_string()))?;

        // 3. Replace in place
        asset.replace(filename, request.content)?;
        if !self.asset_repo.replace(&asset).await? {
            // Deleted between the lookup and the write
            return Err(UseCaseError::NotFound(kind.not_found_message().to_string()));
        }

        tracing::info!(kind = %kind, id = %id, "asset_replaced");

        Ok(MessageResponse::new(kind.updated_message()))
    }
}
