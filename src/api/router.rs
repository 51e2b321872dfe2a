use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;

use crate::api::handlers::{
    delete_audio_handler, delete_score_handler, delete_sprite_handler, get_audio_handler,
    get_score_handler, get_sprite_handler, health_handler, list_scores_handler,
    readiness_handler, record_score_handler, root_handler, update_audio_handler,
    update_score_handler, update_sprite_handler, upload_audio_handler, upload_sprite_handler,
};
use crate::api::middleware::{cors, request_logging};
use crate::api::openapi;
use crate::application::ports::AssetRepository;
use crate::application::use_cases::{
    DeleteAssetUseCase, DeleteScoreUseCase, GetAssetUseCase, GetScoreUseCase,
    ListScoresUseCase, RecordScoreUseCase, ReplaceAssetUseCase, UpdateScoreUseCase,
    UploadAssetUseCase,
};

/// Room for multipart boundaries and part headers on top of the file itself
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Application state container
#[derive(Clone)]
pub struct AppState {
    pub asset_repo: Arc<dyn AssetRepository>,
    pub upload_asset: Arc<UploadAssetUseCase>,
    pub get_asset: Arc<GetAssetUseCase>,
    pub replace_asset: Arc<ReplaceAssetUseCase>,
    pub delete_asset: Arc<DeleteAssetUseCase>,
    pub record_score: Arc<RecordScoreUseCase>,
    pub list_scores: Arc<ListScoresUseCase>,
    pub get_score: Arc<GetScoreUseCase>,
    pub update_score: Arc<UpdateScoreUseCase>,
    pub delete_score: Arc<DeleteScoreUseCase>,
    pub max_upload_bytes: usize,
    pub allowed_origins: Option<String>,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route(
            "/health/ready",
            get(readiness_handler).with_state(Arc::clone(&state.asset_repo)),
        )
        // Sprites
        .route(
            "/upload_sprite",
            post(upload_sprite_handler).with_state(Arc::clone(&state.upload_asset)),
        )
        .route(
            "/sprite/{id}",
            get(get_sprite_handler).with_state(Arc::clone(&state.get_asset)),
        )
        .route(
            "/sprite/{id}",
            put(update_sprite_handler).with_state(Arc::clone(&state.replace_asset)),
        )
        .route(
            "/sprite/{id}",
            delete(delete_sprite_handler).with_state(Arc::clone(&state.delete_asset)),
        )
        // Audio
        .route(
            "/upload_audio",
            post(upload_audio_handler).with_state(Arc::clone(&state.upload_asset)),
        )
        .route(
            "/audio/{id}",
            get(get_audio_handler).with_state(Arc::clone(&state.get_asset)),
        )
        .route(
            "/audio/{id}",
            put(update_audio_handler).with_state(Arc::clone(&state.replace_asset)),
        )
        .route(
            "/audio/{id}",
            delete(delete_audio_handler).with_state(Arc::clone(&state.delete_asset)),
        )
        // Scores
        .route(
            "/player_scores",
            get(list_scores_handler).with_state(Arc::clone(&state.list_scores)),
        )
        .route(
            "/player_score",
            post(record_score_handler).with_state(Arc::clone(&state.record_score)),
        )
        .route(
            "/player_score/{name}",
            get(get_score_handler).with_state(Arc::clone(&state.get_score)),
        )
        .route(
            "/player_score/{name}",
            put(update_score_handler).with_state(Arc::clone(&state.update_score)),
        )
        .route(
            "/player_score/{name}",
            delete(delete_score_handler).with_state(Arc::clone(&state.delete_score)),
        )
        .merge(openapi::swagger_ui())
        // Oversized bodies are refused with 413 before any handler runs
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(cors::create_cors_layer(state.allowed_origins.as_deref()))
        .layer(axum_middleware::from_fn(
            request_logging::request_logging_middleware,
        ))
}
