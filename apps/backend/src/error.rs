//! Error handling for the backend API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use quickcache_core::FlashcardError;
use serde::Serialize;
use thiserror::Error;

use crate::services::storage::StorageError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Flashcard(#[from] FlashcardError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl ApiError {
    fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Flashcard(err) => {
                let status = match err {
                    FlashcardError::FlashcardNotFound | FlashcardError::InvalidPosition { .. } => {
                        StatusCode::NOT_FOUND
                    }
                    FlashcardError::DuplicateFlashcard => StatusCode::CONFLICT,
                    _ => StatusCode::BAD_REQUEST,
                };
                (status, err.kind())
            }
            ApiError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_kind();

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_is_conflict() {
        let error = ApiError::from(FlashcardError::DuplicateFlashcard);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_invalid_position_is_not_found() {
        let error = ApiError::from(FlashcardError::InvalidPosition { position: 7, len: 2 });
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_not_found_status() {
        let error = ApiError::from(FlashcardError::FlashcardNotFound);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_engine_errors_are_bad_requests() {
        for err in [
            FlashcardError::NoFieldsEdited,
            FlashcardError::TypeMismatch,
            FlashcardError::NoAnswerProvided,
            FlashcardError::NoOptionProvided,
            FlashcardError::AnswerOutOfRange { index: 9, choices: 4 },
        ] {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_storage_error_status() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let response = ApiError::from(StorageError::from(io)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_kind_codes() {
        let error = ApiError::from(FlashcardError::TypeMismatch);
        assert_eq!(error.status_and_kind().1, "type_mismatch");
        let error = ApiError::BadRequest("missing tags".to_string());
        assert_eq!(error.status_and_kind().1, "bad_request");
    }

    #[test]
    fn test_error_display_flashcard() {
        let error = ApiError::from(FlashcardError::NoFieldsEdited);
        assert_eq!(
            error.to_string(),
            "at least one field to edit must be provided"
        );
    }

    #[test]
    fn test_error_display_bad_request() {
        let error = ApiError::BadRequest("missing field".to_string());
        assert_eq!(error.to_string(), "Bad request: missing field");
    }
}
