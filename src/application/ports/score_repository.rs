use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::entities::PlayerScore;
#[cfg(test)]
use mockall::{automock, predicate::*};

/// Port for the `scores` collection.
///
/// Names are not unique. The `*_by_name` operations act on at most one
/// matching document, chosen by the store.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    async fn insert(&self, score: &PlayerScore) -> Result<(), RepositoryError>;

    /// Up to `limit` scores in store order
    async fn list(&self, limit: i64) -> Result<Vec<PlayerScore>, RepositoryError>;

    async fn find_first_by_name(
        &self,
        player_name: &str,
    ) -> Result<Option<PlayerScore>, RepositoryError>;

    /// Returns false if no document matched
    async fn update_score_by_name(
        &self,
        player_name: &str,
        score: i64,
    ) -> Result<bool, RepositoryError>;

    /// Returns false if no document matched
    async fn delete_by_name(&self, player_name: &str) -> Result<bool, RepositoryError>;
}
