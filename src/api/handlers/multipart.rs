use axum::extract::Multipart;

use crate::api::errors::ApiError;
use crate::application::dto::UploadAssetRequest;

/// Form field carrying the uploaded file
pub const FILE_FIELD: &str = "file";

/// Read the `file` field of a multipart body into memory.
///
/// Other fields are skipped. Body errors keep the status axum assigns them
/// (413 when the upload limit is hit, 400 otherwise). A missing `file` field is a bad request; a
/// missing filename is passed on as `None` for the file-type gate to reject.
pub async fn read_upload(mut multipart: Multipart) -> Result<UploadAssetRequest, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::new(e.status(), format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().map(|s| s.to_string());
        let content = field
            .bytes()
            .await
            .map_err(|e| ApiError::new(e.status(), format!("Failed to read upload: {}", e)))?;

        return Ok(UploadAssetRequest { filename, content });
    }

    Err(ApiError::bad_request("Missing 'file' field"))
}
