use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use utoipa::ToSchema;

use super::multipart::read_upload;
use crate::api::errors::ApiError;
use crate::application::dto::{AssetDto, CreatedResponse, MessageResponse};
use crate::application::use_cases::{
    DeleteAssetUseCase, GetAssetUseCase, ReplaceAssetUseCase, UploadAssetUseCase,
};
use crate::domain::value_objects::AssetKind;

/// Multipart form with a single `file` part
#[derive(ToSchema)]
pub struct FileUpload {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

async fn get_asset(
    use_case: &GetAssetUseCase,
    kind: AssetKind,
    id: &str,
) -> Result<Json<AssetDto>, ApiError> {
    use_case
        .execute(kind, id)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_use_case(e, &format!("retrieving the {}", kind)))
}

async fn upload_asset(
    use_case: &UploadAssetUseCase,
    kind: AssetKind,
    multipart: Multipart,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let request = read_upload(multipart).await?;

    let response = use_case
        .execute(kind, request)
        .await
        .map_err(|e| ApiError::from_use_case(e, &format!("uploading the {}", kind)))?;

    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_asset(
    use_case: &ReplaceAssetUseCase,
    kind: AssetKind,
    id: &str,
    multipart: Multipart,
) -> Result<Json<MessageResponse>, ApiError> {
    let request = read_upload(multipart).await?;

    use_case
        .execute(kind, id, request)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_use_case(e, &format!("updating the {}", kind)))
}

async fn delete_asset(
    use_case: &DeleteAssetUseCase,
    kind: AssetKind,
    id: &str,
) -> Result<Json<MessageResponse>, ApiError> {
    use_case
        .execute(kind, id)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_use_case(e, &format!("deleting the {}", kind)))
}

/// GET /sprite/{id}
#[utoipa::path(
    get,
    path = "/sprite/{id}",
    tag = "sprites",
    params(("id" = String, Path, description = "24-character hex sprite ID")),
    responses(
        (status = 200, description = "Sprite metadata", body = AssetDto),
        (status = 400, description = "Invalid sprite ID format"),
        (status = 404, description = "Sprite not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_sprite_handler(
    State(use_case): State<Arc<GetAssetUseCase>>,
    Path(id): Path<String>,
) -> Result<Json<AssetDto>, ApiError> {
    get_asset(&use_case, AssetKind::Sprite, &id).await
}

/// GET /audio/{id}
#[utoipa::path(
    get,
    path = "/audio/{id}",
    tag = "audio",
    params(("id" = String, Path, description = "24-character hex audio ID")),
    responses(
        (status = 200, description = "Audio metadata", body = AssetDto),
        (status = 400, description = "Invalid audio ID format"),
        (status = 404, description = "Audio not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_audio_handler(
    State(use_case): State<Arc<GetAssetUseCase>>,
    Path(id): Path<String>,
) -> Result<Json<AssetDto>, ApiError> {
    get_asset(&use_case, AssetKind::Audio, &id).await
}

/// POST /upload_sprite
/// Upload a PNG or JPG/JPEG sprite
#[utoipa::path(
    post,
    path = "/upload_sprite",
    tag = "sprites",
    request_body(content = FileUpload, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Sprite uploaded", body = CreatedResponse),
        (status = 400, description = "Only PNG and JPG/JPEG files are allowed"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn upload_sprite_handler(
    State(use_case): State<Arc<UploadAssetUseCase>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    upload_asset(&use_case, AssetKind::Sprite, multipart).await
}

/// POST /upload_audio
/// Upload an MP3 file
#[utoipa::path(
    post,
    path = "/upload_audio",
    tag = "audio",
    request_body(content = FileUpload, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Audio file uploaded", body = CreatedResponse),
        (status = 400, description = "Only MP3 files are allowed"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn upload_audio_handler(
    State(use_case): State<Arc<UploadAssetUseCase>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    upload_asset(&use_case, AssetKind::Audio, multipart).await
}

/// PUT /sprite/{id}
/// Replace a sprite's filename and content
#[utoipa::path(
    put,
    path = "/sprite/{id}",
    tag = "sprites",
    params(("id" = String, Path, description = "24-character hex sprite ID")),
    request_body(content = FileUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Sprite updated", body = MessageResponse),
        (status = 400, description = "Invalid ID or file type"),
        (status = 404, description = "Sprite not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_sprite_handler(
    State(use_case): State<Arc<ReplaceAssetUseCase>>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<MessageResponse>, ApiError> {
    update_asset(&use_case, AssetKind::Sprite, &id, multipart).await
}

/// PUT /audio/{id}
/// Replace an audio file's filename and content
#[utoipa::path(
    put,
    path = "/audio/{id}",
    tag = "audio",
    params(("id" = String, Path, description = "24-character hex audio ID")),
    request_body(content = FileUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Audio updated", body = MessageResponse),
        (status = 400, description = "Invalid ID or file type"),
        (status = 404, description = "Audio not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_audio_handler(
    State(use_case): State<Arc<ReplaceAssetUseCase>>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<MessageResponse>, ApiError> {
    update_asset(&use_case, AssetKind::Audio, &id, multipart).await
}

/// DELETE /sprite/{id}
#[utoipa::path(
    delete,
    path = "/sprite/{id}",
    tag = "sprites",
    params(("id" = String, Path, description = "24-character hex sprite ID")),
    responses(
        (status = 200, description = "Sprite deleted", body = MessageResponse),
        (status = 400, description = "Invalid sprite ID format"),
        (status = 404, description = "Sprite not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_sprite_handler(
    State(use_case): State<Arc<DeleteAssetUseCase>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    delete_asset(&use_case, AssetKind::Sprite, &id).await
}

/// DELETE /audio/{id}
#[utoipa::path(
    delete,
    path = "/audio/{id}",
    tag = "audio",
    params(("id" = String, Path, description = "24-character hex audio ID")),
    responses(
        (status = 200, description = "Audio deleted", body = MessageResponse),
        (status = 400, description = "Invalid audio ID format"),
        (status = 404, description = "Audio not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_audio_handler(
    State(use_case): State<Arc<DeleteAssetUseCase>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    delete_asset(&use_case, AssetKind::Audio, &id).await
}
