use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::errors::UseCaseError;

/// API error response
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Map a use case error for the operation named by `operation`
    /// (e.g. "retrieving the sprite").
    ///
    /// Store faults are logged and replaced by a fixed message; their detail
    /// never reaches the caller.
    pub fn from_use_case(err: UseCaseError, operation: &str) -> Self {
        match err {
            UseCaseError::Domain(e) => ApiError::bad_request(e.to_string()),
            UseCaseError::InvalidRequest(msg) => ApiError::bad_request(msg),
            UseCaseError::NotFound(msg) => ApiError::not_found(msg),
            UseCaseError::Repository(e) => {
                tracing::error!(error = %e, "Error {}", operation);
                ApiError::internal_error(format!("An error occurred while {}", operation))
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
        }));

        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::RepositoryError;
    use crate::domain::errors::DomainError;
    use crate::domain::value_objects::AssetKind;

    #[test]
    fn test_domain_errors_are_bad_requests() {
        let err = ApiError::from_use_case(
            DomainError::InvalidDocumentId("sprite").into(),
            "retrieving the sprite",
        );
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Invalid sprite ID format");

        let err = ApiError::from_use_case(
            DomainError::InvalidFileType(AssetKind::Sprite).into(),
            "uploading the sprite",
        );
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found() {
        let err = ApiError::from_use_case(
            UseCaseError::NotFound("Audio not found".to_string()),
            "retrieving the audio",
        );
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Audio not found");
    }

    #[test]
    fn test_repository_detail_not_echoed() {
        let err = ApiError::from_use_case(
            RepositoryError::Internal("password authentication failed".to_string()).into(),
            "deleting the player score",
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.message(),
            "An error occurred while deleting the player score"
        );
        assert!(!err.message().contains("password"));
    }
}
