mod asset_repository;
mod score_repository;

pub use asset_repository::{AssetRepository, RepositoryError};
pub use score_repository::ScoreRepository;

#[cfg(test)]
pub use asset_repository::MockAssetRepository;
#[cfg(test)]
pub use score_repository::MockScoreRepository;
