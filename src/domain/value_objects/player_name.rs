use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::errors::DomainError;

pub const PLAYER_NAME_MAX_LEN: usize = 50;

/// Letters, digits, underscore and space
pub static PLAYER_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_ ]+$").expect("Invalid player name regex"));

/// Validated leaderboard player name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "alice_01")]
pub struct PlayerName(String);

impl PlayerName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();

        if name.is_empty() {
            return Err(DomainError::InvalidPlayerName(
                "player name cannot be empty".to_string(),
            ));
        }

        if name.chars().count() > PLAYER_NAME_MAX_LEN {
            return Err(DomainError::InvalidPlayerName(format!(
                "player name exceeds {} characters",
                PLAYER_NAME_MAX_LEN
            )));
        }

        if !PLAYER_NAME_REGEX.is_match(&name) {
            return Err(DomainError::InvalidPlayerName(
                "player name may only contain letters, digits, underscores and spaces"
                    .to_string(),
            ));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PlayerName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}
