use std::sync::Arc;

use crate::application::dto::ScoreDto;
use crate::application::errors::UseCaseError;
use crate::application::ports::ScoreRepository;
use crate::domain::input_sanitization::QuerySanitizer;

/// Use case: Read the first score recorded under a player name
pub struct GetScoreUseCase {
    score_repo: Arc<dyn ScoreRepository>,
    sanitizer: Arc<dyn QuerySanitizer>,
}

impl GetScoreUseCase {
    pub fn new(score_repo: Arc<dyn ScoreRepository>, sanitizer: Arc<dyn QuerySanitizer>) -> Self {
        Self {
            score_repo,
            sanitizer,
        }
    }

    pub async fn execute(&self, raw_name: &str) -> Result<ScoreDto, UseCaseError> {
        let safe_name = self.sanitizer.sanitize(raw_name);

        self.score_repo
            .find_first_by_name(&safe_name)
            .await?
            .map(ScoreDto::from)
            .ok_or_else(|| UseCaseError::NotFound("Player score not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockScoreRepository;
    use crate::domain::entities::PlayerScore;
    use crate::domain::input_sanitization::DenylistSanitizer;
    use crate::domain::value_objects::PlayerName;

    #[tokio::test]
    async fn test_get_queries_sanitized_name() {
        let mut mock_repo = MockScoreRepository::new();
        mock_repo
            .expect_find_first_by_name()
            .withf(|name| name == "evilpng")
            .times(1)
            .returning(|_| {
                Ok(Some(
                    PlayerScore::new(PlayerName::new("evilpng").unwrap(), 5).unwrap(),
                ))
            });

        let use_case =
            GetScoreUseCase::new(Arc::new(mock_repo), Arc::new(DenylistSanitizer::default()));
        let dto = use_case.execute("evil$where.png").await.unwrap();

        assert_eq!(dto.player_name, "evilpng");
        assert_eq!(dto.score, 5);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let mut mock_repo = MockScoreRepository::new();
        mock_repo
            .expect_find_first_by_name()
            .times(1)
            .returning(|_| Ok(None));

        let use_case =
            GetScoreUseCase::new(Arc::new(mock_repo), Arc::new(DenylistSanitizer::default()));
        let result = use_case.execute("nobody").await;

        assert!(matches!(result, Err(UseCaseError::NotFound(_))));
    }
}
