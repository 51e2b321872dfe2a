use std::sync::Arc;

use crate::application::dto::MessageResponse;
use crate::application::errors::UseCaseError;
use crate::application::ports::AssetRepository;
use crate::domain::value_objects::{AssetKind, DocumentId};

/// Use case: Delete an asset by identifier
pub struct DeleteAssetUseCase {
    asset_repo: Arc<dyn AssetRepository>,
}

impl DeleteAssetUseCase {
    pub fn new(asset_repo: Arc<dyn AssetRepository>) -> Self {
        Self { asset_repo }
    }

    pub async fn execute(
        &self,
        kind: AssetKind,
        raw_id: &str,
    ) -> Result<MessageResponse, UseCaseError> {
        let id = DocumentId::parse_labeled(raw_id, kind.label())?;

        if !self.asset_repo.delete(kind, &id).await? {
            return Err(UseCaseError::NotFound(kind.not_found_message().to_string()));
        }

        tracing::info!(kind = %kind, id = %id, "asset_deleted");
        Ok(MessageResponse::new(kind.deleted_message()))
    }
}
