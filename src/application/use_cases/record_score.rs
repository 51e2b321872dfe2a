use std::sync::Arc;
use validator::Validate;

use crate::application::dto::{CreatedResponse, RecordScoreRequest};
use crate::application::errors::UseCaseError;
use crate::application::ports::ScoreRepository;
use crate::domain::entities::PlayerScore;
use crate::domain::input_sanitization::QuerySanitizer;
use crate::domain::value_objects::PlayerName;

/// Use case: Record a new leaderboard score
pub struct RecordScoreUseCase {
    score_repo: Arc<dyn ScoreRepository>,
    sanitizer: Arc<dyn QuerySanitizer>,
}

impl RecordScoreUseCase {
    pub fn new(score_repo: Arc<dyn ScoreRepository>, sanitizer: Arc<dyn QuerySanitizer>) -> Self {
        Self {
            score_repo,
            sanitizer,
        }
    }

    /// The raw name is sanitized first and the result must still be a valid
    /// player name; the stored name is always the sanitized one.
    pub async fn execute(
        &self,
        request: RecordScoreRequest,
    ) -> Result<CreatedResponse, UseCaseError> {
        request
            .validate()
            .map_err(|e| UseCaseError::InvalidRequest(e.to_string()))?;

        let safe_name = self.sanitizer.sanitize(&request.player_name);
        let player_name = PlayerName::new(safe_name)?;
        let score = PlayerScore::new(player_name, request.score)?;

        self.score_repo.insert(&score).await?;

        tracing::info!(id = %score.id(), player_name = %score.player_name(), "score_recorded");

        Ok(CreatedResponse {
            message: "Score recorded".to_string(),
            id: score.id().to_string(),
        })
    }
}
