use async_trait::async_trait;
use sqlx::PgPool;

use crate::application::ports::{RepositoryError, ScoreRepository};
use crate::domain::entities::PlayerScore;
use crate::domain::value_objects::{DocumentId, PlayerName};

pub struct PostgresScoreRepository {
    pool: PgPool,
}

impl PostgresScoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScoreRepository for PostgresScoreRepository {
    async fn insert(&self, score: &PlayerScore) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO scores (id, player_name, score) VALUES ($1, $2, $3)")
            .bind(score.id().to_string())
            .bind(score.player_name().as_str())
            .bind(score.score())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list(&self, limit: i64) -> Result<Vec<PlayerScore>, RepositoryError> {
        let rows = sqlx::query_as::<_, ScoreRow>(
            r#"
            SELECT id, player_name, score
            FROM scores
            ORDER BY id
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ScoreRow::into_domain).collect()
    }

    async fn find_first_by_name(
        &self,
        player_name: &str,
    ) -> Result<Option<PlayerScore>, RepositoryError> {
        let row = sqlx::query_as::<_, ScoreRow>(
            r#"
            SELECT id, player_name, score
            FROM scores
            WHERE player_name = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(player_name)
        .fetch_optional(&self.pool)
        .await?;

        row.map(ScoreRow::into_domain).transpose()
    }

    async fn update_score_by_name(
        &self,
        player_name: &str,
        score: i64,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE scores
            SET score = $2
            WHERE id = (SELECT id FROM scores WHERE player_name = $1 ORDER BY id LIMIT 1)
            "#,
        )
        .bind(player_name)
        .bind(score)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_name(&self, player_name: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM scores
            WHERE id = (SELECT id FROM scores WHERE player_name = $1 ORDER BY id LIMIT 1)
            "#,
        )
        .bind(player_name)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[derive(sqlx::FromRow)]
struct ScoreRow {
    id: String,
    player_name: String,
    score: i64,
}

impl ScoreRow {
    fn into_domain(self) -> Result<PlayerScore, RepositoryError> {
        let id = self
            .id
            .trim_end()
            .parse::<DocumentId>()
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        let player_name = PlayerName::new(self.player_name)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        Ok(PlayerScore::reconstruct(id, player_name, self.score))
    }
}
