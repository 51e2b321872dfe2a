use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::api::errors::ApiError;
use crate::application::dto::{CreatedResponse, MessageResponse, RecordScoreRequest, ScoreDto};
use crate::application::use_cases::{
    DeleteScoreUseCase, GetScoreUseCase, ListScoresUseCase, RecordScoreUseCase,
    UpdateScoreUseCase,
};

#[derive(Deserialize, ToSchema, IntoParams)]
pub struct ListScoresQuery {
    /// Maximum number of scores (1-100, default 10)
    limit: Option<i64>,
}

#[derive(Deserialize, ToSchema, IntoParams)]
pub struct UpdateScoreQuery {
    /// New score, must be non-negative
    updated_score: i64,
}

/// GET /player_scores
#[utoipa::path(
    get,
    path = "/player_scores",
    tag = "scores",
    params(ListScoresQuery),
    responses(
        (status = 200, description = "Scores retrieved", body = Vec<ScoreDto>),
        (status = 400, description = "limit outside 1..=100"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_scores_handler(
    State(use_case): State<Arc<ListScoresUseCase>>,
    Query(query): Query<ListScoresQuery>,
) -> Result<Json<Vec<ScoreDto>>, ApiError> {
    use_case
        .execute(query.limit)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_use_case(e, "retrieving player scores"))
}

/// GET /player_score/{name}
/// First score recorded under the (sanitized) name
#[utoipa::path(
    get,
    path = "/player_score/{name}",
    tag = "scores",
    params(("name" = String, Path, description = "Player name")),
    responses(
        (status = 200, description = "Score found", body = ScoreDto),
        (status = 404, description = "Player score not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_score_handler(
    State(use_case): State<Arc<GetScoreUseCase>>,
    Path(name): Path<String>,
) -> Result<Json<ScoreDto>, ApiError> {
    use_case
        .execute(&name)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_use_case(e, "retrieving the player score"))
}

/// POST /player_score
#[utoipa::path(
    post,
    path = "/player_score",
    tag = "scores",
    request_body = RecordScoreRequest,
    responses(
        (status = 201, description = "Score recorded", body = CreatedResponse),
        (status = 400, description = "Invalid player name or score"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn record_score_handler(
    State(use_case): State<Arc<RecordScoreUseCase>>,
    Json(request): Json<RecordScoreRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let response = use_case
        .execute(request)
        .await
        .map_err(|e| ApiError::from_use_case(e, "recording the score"))?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /player_score/{name}?updated_score=
#[utoipa::path(
    put,
    path = "/player_score/{name}",
    tag = "scores",
    params(("name" = String, Path, description = "Player name"), UpdateScoreQuery),
    responses(
        (status = 200, description = "Score updated", body = MessageResponse),
        (status = 400, description = "Invalid score value"),
        (status = 404, description = "Player not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_score_handler(
    State(use_case): State<Arc<UpdateScoreUseCase>>,
    Path(name): Path<String>,
    Query(query): Query<UpdateScoreQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    use_case
        .execute(&name, query.updated_score)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_use_case(e, "updating the player score"))
}

/// DELETE /player_score/{name}
#[utoipa::path(
    delete,
    path = "/player_score/{name}",
    tag = "scores",
    params(("name" = String, Path, description = "Player name")),
    responses(
        (status = 200, description = "Score deleted", body = MessageResponse),
        (status = 404, description = "Player score not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_score_handler(
    State(use_case): State<Arc<DeleteScoreUseCase>>,
    Path(name): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    use_case
        .execute(&name)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_use_case(e, "deleting the player score"))
}
