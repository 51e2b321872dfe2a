use async_trait::async_trait;
use bytes::Bytes;
use sqlx::PgPool;

use super::QueryBuilder;
use crate::application::ports::{AssetRepository, RepositoryError};
use crate::domain::entities::Asset;
use crate::domain::value_objects::{AssetKind, DocumentId};

pub struct PostgresAssetRepository {
    pool: PgPool,
}

impl PostgresAssetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssetRepository for PostgresAssetRepository {
    async fn insert(&self, asset: &Asset) -> Result<(), RepositoryError> {
        sqlx::query(&QueryBuilder::asset_insert(asset.kind()))
            .bind(asset.id().to_string())
            .bind(asset.filename())
            .bind(asset.content().as_ref())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        kind: AssetKind,
        id: &DocumentId,
    ) -> Result<Option<Asset>, RepositoryError> {
        let row = sqlx::query_as::<_, AssetRow>(&QueryBuilder::asset_select_by_id(kind))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(r) => Ok(Some(r.into_domain(kind)?)),
            None => Ok(None),
        }
    }

    async fn replace(&self, asset: &Asset) -> Result<bool, RepositoryError> {
        let result = sqlx::query(&QueryBuilder::asset_replace(asset.kind()))
            .bind(asset.id().to_string())
            .bind(asset.filename())
            .bind(asset.content().as_ref())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, kind: AssetKind, id: &DocumentId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(&QueryBuilder::asset_delete(kind))
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct AssetRow {
    id: String,
    filename: String,
    content: Vec<u8>,
}

impl AssetRow {
    fn into_domain(self, kind: AssetKind) -> Result<Asset, RepositoryError> {
        let id = self
            .id
            .trim_end()
            .parse::<DocumentId>()
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        Ok(Asset::reconstruct(
            id,
            kind,
            self.filename,
            Bytes::from(self.content),
        ))
    }
}
