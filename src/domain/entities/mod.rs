mod asset;
mod player_score;

pub use asset::Asset;
pub use player_score::PlayerScore;
