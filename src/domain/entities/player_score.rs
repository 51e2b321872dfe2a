use crate::domain::errors::DomainError;
use crate::domain::value_objects::{DocumentId, PlayerName};

/// A single leaderboard entry. Several entries may share a player name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerScore {
    id: DocumentId,
    player_name: PlayerName,
    score: i64,
}

impl PlayerScore {
    pub fn new(player_name: PlayerName, score: i64) -> Result<Self, DomainError> {
        if score < 0 {
            return Err(DomainError::NegativeScore(score));
        }

        Ok(Self {
            id: DocumentId::new(),
            player_name,
            score,
        })
    }

    pub fn reconstruct(id: DocumentId, player_name: PlayerName, score: i64) -> Self {
        Self {
            id,
            player_name,
            score,
        }
    }

    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    pub fn player_name(&self) -> &PlayerName {
        &self.player_name
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn set_score(&mut self, score: i64) -> Result<(), DomainError> {
        if score < 0 {
            return Err(DomainError::NegativeScore(score));
        }
        self.score = score;
        Ok(())
    }
}
