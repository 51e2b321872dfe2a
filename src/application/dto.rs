use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::entities::{Asset, PlayerScore};

pub const DEFAULT_SCORE_LIMIT: i64 = 10;
pub const MAX_SCORE_LIMIT: i64 = 100;

/// Asset metadata returned by reads. Content is never echoed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AssetDto {
    pub filename: String,
}

impl From<Asset> for AssetDto {
    fn from(asset: Asset) -> Self {
        Self {
            filename: asset.filename().to_string(),
        }
    }
}

/// Decoded upload: the multipart filename (if any) and the raw bytes
#[derive(Debug, Clone)]
pub struct UploadAssetRequest {
    pub filename: Option<String>,
    pub content: Bytes,
}

/// Response for create operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub message: String,
    pub id: String,
}

/// Response carrying only a human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of `POST /player_score`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordScoreRequest {
    /// 1-50 characters: letters, digits, underscore, space
    #[validate(length(min = 1, max = 50))]
    #[schema(example = "alice_01")]
    pub player_name: String,

    #[validate(range(min = 0))]
    #[schema(minimum = 0, example = 10)]
    pub score: i64,
}

/// A leaderboard entry without its identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoreDto {
    pub player_name: String,
    pub score: i64,
}

impl From<PlayerScore> for ScoreDto {
    fn from(score: PlayerScore) -> Self {
        Self {
            player_name: score.player_name().to_string(),
            score: score.score(),
        }
    }
}
