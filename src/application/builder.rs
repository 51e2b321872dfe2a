use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::api::router::AppState;
use crate::application::{
    ports::{AssetRepository, ScoreRepository},
    use_cases::{
        DeleteAssetUseCase, DeleteScoreUseCase, GetAssetUseCase, GetScoreUseCase,
        ListScoresUseCase, RecordScoreUseCase, ReplaceAssetUseCase, UpdateScoreUseCase,
        UploadAssetUseCase,
    },
};
use crate::config::{Config, StoreBackend};
use crate::domain::input_sanitization::{DenylistSanitizer, QuerySanitizer};
use crate::infrastructure::{
    memory::{InMemoryAssetRepository, InMemoryScoreRepository},
    persistence::{PostgresAssetRepository, PostgresScoreRepository},
};

/// Application builder for dependency injection and setup.
///
/// The connection pool is created once here and shared by the repositories;
/// handlers borrow a connection per call through it.
pub struct ApplicationBuilder {
    config: Config,
    asset_repo: Option<Arc<dyn AssetRepository>>,
    score_repo: Option<Arc<dyn ScoreRepository>>,
    sanitizer: Arc<dyn QuerySanitizer>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            asset_repo: None,
            score_repo: None,
            sanitizer: Arc::new(DenylistSanitizer::with_cached_config()),
        }
    }

    /// Replace the sanitization strategy used by the score use cases
    pub fn with_sanitizer(mut self, sanitizer: Arc<dyn QuerySanitizer>) -> Self {
        self.sanitizer = sanitizer;
        self
    }

    /// Use caller-supplied repositories instead of connecting to a store
    pub fn with_repositories(
        mut self,
        asset_repo: Arc<dyn AssetRepository>,
        score_repo: Arc<dyn ScoreRepository>,
    ) -> Self {
        self.asset_repo = Some(asset_repo);
        self.score_repo = Some(score_repo);
        self
    }

    /// Connect the store selected by `DATABASE_URL`
    pub async fn with_store(self) -> Result<Self, Box<dyn std::error::Error>> {
        match self.config.backend()? {
            StoreBackend::Memory => {
                info!("Using in-memory document store");
                Ok(self.with_repositories(
                    Arc::new(InMemoryAssetRepository::new()),
                    Arc::new(InMemoryScoreRepository::new()),
                ))
            }
            StoreBackend::Postgres => self.with_database().await,
        }
    }

    /// Initialize database connection pool with retry logic
    pub async fn with_database(self) -> Result<Self, Box<dyn std::error::Error>> {
        info!(
            "Connecting to database: {}",
            self.config.redacted_database_url()
        );

        // Retry connection with exponential backoff
        let mut retries = 3;
        let mut delay = Duration::from_secs(1);
        let pool = loop {
            match PgPoolOptions::new()
                .max_connections(self.config.db_max_connections)
                .min_connections(self.config.db_min_connections)
                .acquire_timeout(Duration::from_secs(self.config.db_acquire_timeout_secs))
                .connect(&self.config.database_url)
                .await
            {
                Ok(pool) => break pool,
                Err(e) if retries > 0 => {
                    retries -= 1;
                    tracing::warn!(
                        "Database connection failed, retrying in {:?} ({} retries left): {}",
                        delay,
                        retries,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(e) => {
                    tracing::error!("Failed to connect to database after retries: {}", e);
                    return Err(Box::new(e));
                }
            }
        };

        info!(
            "Database pool configured: max={}, min={}, acquire_timeout={}s",
            self.config.db_max_connections,
            self.config.db_min_connections,
            self.config.db_acquire_timeout_secs,
        );

        info!("Creating document collections");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create collections: {}", e);
                e
            })?;

        Ok(self.with_repositories(
            Arc::new(PostgresAssetRepository::new(pool.clone())),
            Arc::new(PostgresScoreRepository::new(pool)),
        ))
    }

    /// Build application state with all use cases
    pub fn build(self) -> Result<AppState, Box<dyn std::error::Error>> {
        let asset_repo = self.asset_repo.ok_or("Asset repository not initialized")?;
        let score_repo = self.score_repo.ok_or("Score repository not initialized")?;
        let sanitizer = self.sanitizer;

        let state = AppState {
            asset_repo: Arc::clone(&asset_repo),
            upload_asset: Arc::new(UploadAssetUseCase::new(Arc::clone(&asset_repo))),
            get_asset: Arc::new(GetAssetUseCase::new(Arc::clone(&asset_repo))),
            replace_asset: Arc::new(ReplaceAssetUseCase::new(Arc::clone(&asset_repo))),
            delete_asset: Arc::new(DeleteAssetUseCase::new(Arc::clone(&asset_repo))),
            record_score: Arc::new(RecordScoreUseCase::new(
                Arc::clone(&score_repo),
                Arc::clone(&sanitizer),
            )),
            list_scores: Arc::new(ListScoresUseCase::new(Arc::clone(&score_repo))),
            get_score: Arc::new(GetScoreUseCase::new(
                Arc::clone(&score_repo),
                Arc::clone(&sanitizer),
            )),
            update_score: Arc::new(UpdateScoreUseCase::new(
                Arc::clone(&score_repo),
                Arc::clone(&sanitizer),
            )),
            delete_score: Arc::new(DeleteScoreUseCase::new(score_repo, sanitizer)),
            max_upload_bytes: self.config.max_upload_bytes,
            allowed_origins: self.config.allowed_origins.clone(),
        };

        info!("Application layer initialized");
        Ok(state)
    }

    /// Get configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
