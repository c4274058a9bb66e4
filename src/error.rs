use axum::extract::multipart::MultipartError;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum VaultError {
    #[error("{0}")]
    NotFound(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(#[from] SqlxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("multipart error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("image upload request error: {0}")]
    Upload(#[from] reqwest::Error),

    #[error("image host rejected upload with status: {0}")]
    UploadStatus(StatusCode),

    #[error("image hosting is not configured")]
    UploadNotConfigured,
}

impl VaultError {
    /// Helper for the store's miss paths; message shape matches the API's
    /// historical detail strings.
    pub fn recipe_not_found(id: i64) -> Self {
        Self::NotFound(format!("Recipe {id} Not Found"))
    }
}

impl IntoResponse for VaultError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            VaultError::NotFound(detail) => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: detail,
                },
            ),
            VaultError::Validation(detail) => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".to_string(),
                    message: detail,
                },
            ),
            VaultError::Multipart(e) => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".to_string(),
                    message: e.to_string(),
                },
            ),
            // Persistence failures surface the underlying message.
            VaultError::Database(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "DATABASE_ERROR".to_string(),
                    message: e.to_string(),
                },
            ),
            VaultError::Json(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: e.to_string(),
                },
            ),
            VaultError::Upload(_) => (
                StatusCode::BAD_GATEWAY,
                ApiErrorBody {
                    code: "BAD_GATEWAY".to_string(),
                    message: "Image hosting service is unavailable.".to_string(),
                },
            ),
            VaultError::UploadStatus(code) => (
                StatusCode::BAD_GATEWAY,
                ApiErrorBody {
                    code: "UPSTREAM_ERROR".to_string(),
                    message: format!("Image host responded with status {code}."),
                },
            ),
            VaultError::UploadNotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiErrorBody {
                    code: "UPLOAD_UNCONFIGURED".to_string(),
                    message: "Image hosting is not configured on this server.".to_string(),
                },
            ),
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
