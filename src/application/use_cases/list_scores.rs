use std::sync::Arc;

use crate::application::dto::{ScoreDto, DEFAULT_SCORE_LIMIT, MAX_SCORE_LIMIT};
use crate::application::errors::UseCaseError;
use crate::application::ports::ScoreRepository;

/// Use case: List leaderboard scores
pub struct ListScoresUseCase {
    score_repo: Arc<dyn ScoreRepository>,
}

impl ListScoresUseCase {
    pub fn new(score_repo: Arc<dyn ScoreRepository>) -> Self {
        Self { score_repo }
    }

    /// `limit` defaults to 10 and must be within 1..=100
    pub async fn execute(&self, limit: Option<i64>) -> Result<Vec<ScoreDto>, UseCaseError> {
        let limit = limit.unwrap_or(DEFAULT_SCORE_LIMIT);
        if !(1..=MAX_SCORE_LIMIT).contains(&limit) {
            return Err(UseCaseError::InvalidRequest(format!(
                "limit must be between 1 and {}",
                MAX_SCORE_LIMIT
            )));
        }

        let scores = self.score_repo.list(limit).await?;
        Ok(scores.into_iter().map(ScoreDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockScoreRepository;
    use crate::domain::entities::PlayerScore;
    use crate::domain::value_objects::PlayerName;

    #[tokio::test]
    async fn test_list_default_limit() {
        let mut mock_repo = MockScoreRepository::new();
        mock_repo
            .expect_list()
            .withf(|limit| *limit == 10)
            .times(1)
            .returning(|_| {
                Ok(vec![
                    PlayerScore::new(PlayerName::new("a").unwrap(), 1).unwrap(),
                    PlayerScore::new(PlayerName::new("b").unwrap(), 2).unwrap(),
                ])
            });

        let use_case = ListScoresUseCase::new(Arc::new(mock_repo));
        let scores = use_case.execute(None).await.unwrap();

        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].player_name, "a");
        assert_eq!(scores[1].score, 2);
    }

    #[tokio::test]
    async fn test_list_limit_bounds() {
        for bad in [0, -1, 101] {
            let mut mock_repo = MockScoreRepository::new();
            mock_repo.expect_list().times(0);

            let use_case = ListScoresUseCase::new(Arc::new(mock_repo));
            let result = use_case.execute(Some(bad)).await;
            assert!(matches!(result, Err(UseCaseError::InvalidRequest(_))), "limit {}", bad);
        }
    }

    #[tokio::test]
    async fn test_list_max_limit_accepted() {
        let mut mock_repo = MockScoreRepository::new();
        mock_repo
            .expect_list()
            .withf(|limit| *limit == 100)
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let use_case = ListScoresUseCase::new(Arc::new(mock_repo));
        assert!(use_case.execute(Some(100)).await.unwrap().is_empty());
    }
}
