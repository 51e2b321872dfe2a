use async_trait::async_trait;
use parking_lot::RwLock;

use crate::application::ports::{RepositoryError, ScoreRepository};
use crate::domain::entities::PlayerScore;

/// Scores in insertion order; "first match" means earliest inserted
#[derive(Default)]
pub struct InMemoryScoreRepository {
    scores: RwLock<Vec<PlayerScore>>,
}

impl InMemoryScoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.scores.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.read().is_empty()
    }
}

#[async_trait]
impl ScoreRepository for InMemoryScoreRepository {
    async fn insert(&self, score: &PlayerScore) -> Result<(), RepositoryError> {
        self.scores.write().push(score.clone());
        Ok(())
    }

    async fn list(&self, limit: i64) -> Result<Vec<PlayerScore>, RepositoryError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self.scores.read().iter().take(limit).cloned().collect())
    }

    async fn find_first_by_name(
        &self,
        player_name: &str,
    ) -> Result<Option<PlayerScore>, RepositoryError> {
        Ok(self
            .scores
            .read()
            .iter()
            .find(|s| s.player_name().as_str() == player_name)
            .cloned())
    }

    async fn update_score_by_name(
        &self,
        player_name: &str,
        score: i64,
    ) -> Result<bool, RepositoryError> {
        let mut scores = self.scores.write();
        match scores
            .iter_mut()
            .find(|s| s.player_name().as_str() == player_name)
        {
            Some(entry) => {
                entry
                    .set_score(score)
                    .map_err(|e| RepositoryError::Internal(e.to_string()))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_name(&self, player_name: &str) -> Result<bool, RepositoryError> {
        let mut scores = self.scores.write();
        match scores
            .iter()
            .position(|s| s.player_name().as_str() == player_name)
        {
            Some(index) => {
                scores.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
