mod postgres_asset_repository;
mod postgres_score_repository;
mod query_builder;

pub use postgres_asset_repository::PostgresAssetRepository;
pub use postgres_score_repository::PostgresScoreRepository;
pub use query_builder::QueryBuilder;
