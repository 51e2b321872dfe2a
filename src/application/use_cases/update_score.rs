use std::sync::Arc;

use crate::application::dto::MessageResponse;
use crate::application::errors::UseCaseError;
use crate::application::ports::ScoreRepository;
use crate::domain::errors::DomainError;
use crate::domain::input_sanitization::QuerySanitizer;

/// Use case: Set the score of one entry matching a player name.
///
/// With duplicate names only the earliest recorded entry is updated.
pub struct UpdateScoreUseCase {
    score_repo: Arc<dyn ScoreRepository>,
    sanitizer: Arc<dyn QuerySanitizer>,
}

impl UpdateScoreUseCase {
    pub fn new(score_repo: Arc<dyn ScoreRepository>, sanitizer: Arc<dyn QuerySanitizer>) -> Self {
        Self {
            score_repo,
            sanitizer,
        }
    }

    pub async fn execute(
        &self,
        raw_name: &str,
        updated_score: i64,
    ) -> Result<MessageResponse, UseCaseError> {
        if updated_score < 0 {
            return Err(DomainError::NegativeScore(updated_score).into());
        }

        let safe_name = self.sanitizer.sanitize(raw_name);

        if !self
            .score_repo
            .update_score_by_name(&safe_name, updated_score)
            .await?
        {
            return Err(UseCaseError::NotFound("Player not found".to_string()));
        }

        tracing::info!(player_name = %safe_name, score = updated_score, "score_updated");
        Ok(MessageResponse::new(format!(
            "Score updated for player {}",
            safe_name
        )))
    }
}
