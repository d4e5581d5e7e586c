//! API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chargen_core::error::DialogError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Database connection or pool error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Technical error message.
    pub message: String,
    /// The apology a voice surface should speak to the user.
    pub spoken: &'static str,
}

/// HTTP-layer wrapper around `DialogError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub DialogError);

impl From<DialogError> for ApiError {
    fn from(err: DialogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            DialogError::UnknownUser => (StatusCode::BAD_REQUEST, "unknown_user"),
            DialogError::NoOngoingConversation => {
                (StatusCode::CONFLICT, "no_ongoing_conversation")
            }
            DialogError::NoPendingQuestion => (StatusCode::CONFLICT, "no_pending_question"),
            DialogError::UnrecognizedQuestionTopic => {
                (StatusCode::CONFLICT, "unrecognized_question_topic")
            }
            DialogError::MetadataUnavailable => {
                (StatusCode::UNPROCESSABLE_ENTITY, "metadata_unavailable")
            }
            DialogError::PreferenceUpdateFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "preference_update_failed")
            }
            DialogError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error")
            }
        };

        let body = ErrorBody {
            error: error_code,
            message: self.0.to_string(),
            spoken: self.0.spoken_message(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(err: DialogError) -> StatusCode {
        let response = ApiError(err).into_response();
        response.status()
    }

    #[test]
    fn test_unknown_user_maps_to_400() {
        assert_eq!(status_of(DialogError::UnknownUser), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_out_of_context_answers_map_to_409() {
        assert_eq!(
            status_of(DialogError::NoOngoingConversation),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(DialogError::NoPendingQuestion),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(DialogError::UnrecognizedQuestionTopic),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_metadata_unavailable_maps_to_422() {
        assert_eq!(
            status_of(DialogError::MetadataUnavailable),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_persistence_failures_map_to_500() {
        assert_eq!(
            status_of(DialogError::PreferenceUpdateFailed("db down".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(DialogError::Infrastructure("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
