use std::sync::Arc;

use crate::application::dto::MessageResponse;
use crate::application::errors::UseCaseError;
use crate::application::ports::ScoreRepository;
use crate::domain::input_sanitization::QuerySanitizer;

/// Use case: Delete one score entry matching a player name
pub struct DeleteScoreUseCase {
    score_repo: Arc<dyn ScoreRepository>,
    sanitizer: Arc<dyn QuerySanitizer>,
}

impl DeleteScoreUseCase {
    pub fn new(score_repo: Arc<dyn ScoreRepository>, sanitizer: Arc<dyn QuerySanitizer>) -> Self {
        Self {
            score_repo,
            sanitizer,
        }
    }

    pub async fn execute(&self, raw_name: &str) -> Result<MessageResponse, UseCaseError> {
        let safe_name = self.sanitizer.sanitize(raw_name);

        if !self.score_repo.delete_by_name(&safe_name).await? {
            return Err(UseCaseError::NotFound("Player score not found".to_string()));
        }

        tracing::info!(player_name = %safe_name, "score_deleted");
        Ok(MessageResponse::new(format!(
            "Score for player {} deleted",
            safe_name
        )))
    }
}
