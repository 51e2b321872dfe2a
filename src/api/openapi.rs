use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::assets::FileUpload;
use crate::api::handlers::health::{HealthResponse, ReadinessResponse};
use crate::api::handlers::scores::{ListScoresQuery, UpdateScoreQuery};
use crate::application::dto::{
    AssetDto, CreatedResponse, MessageResponse, RecordScoreRequest, ScoreDto,
};

/// OpenAPI document for the asset and leaderboard API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Arcade Assets API",
        version = "1.0.0",
        description = "Sprite and audio uploads plus a player leaderboard"
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        crate::api::handlers::health::root_handler,
        crate::api::handlers::health::health_handler,
        crate::api::handlers::health::readiness_handler,
        crate::api::handlers::assets::upload_sprite_handler,
        crate::api::handlers::assets::get_sprite_handler,
        crate::api::handlers::assets::update_sprite_handler,
        crate::api::handlers::assets::delete_sprite_handler,
        crate::api::handlers::assets::upload_audio_handler,
        crate::api::handlers::assets::get_audio_handler,
        crate::api::handlers::assets::update_audio_handler,
        crate::api::handlers::assets::delete_audio_handler,
        crate::api::handlers::scores::list_scores_handler,
        crate::api::handlers::scores::get_score_handler,
        crate::api::handlers::scores::record_score_handler,
        crate::api::handlers::scores::update_score_handler,
        crate::api::handlers::scores::delete_score_handler,
    ),
    components(
        schemas(
            AssetDto,
            CreatedResponse,
            MessageResponse,
            RecordScoreRequest,
            ScoreDto,
            FileUpload,
            ListScoresQuery,
            UpdateScoreQuery,
            HealthResponse,
            ReadinessResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "sprites", description = "PNG and JPEG sprite storage"),
        (name = "audio", description = "MP3 audio storage"),
        (name = "scores", description = "Player leaderboard")
    )
)]
pub struct ApiDoc;

/// Swagger UI plus the raw document at `/api-docs/openapi.json`
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
