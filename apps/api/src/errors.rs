use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// One or more of the four profile fields is missing. Expected, user-facing.
    #[error("Incomplete profile: missing {}", .missing.join(", "))]
    IncompleteProfile { missing: Vec<&'static str> },

    /// Complete profile with no catalog entry. Expected, user-facing.
    #[error("No salary data for this profile")]
    NoData,

    #[error("Forbidden")]
    Forbidden,

    #[error("Profile store is not configured")]
    ProfileStoreUnavailable,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::IncompleteProfile { missing } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INCOMPLETE_PROFILE",
                format!(
                    "Please complete your profile to see salary insights (missing: {})",
                    missing.join(", ")
                ),
            ),
            AppError::NoData => (
                StatusCode::NOT_FOUND,
                "NO_DATA",
                "We couldn't find salary data that matches your profile yet".to_string(),
            ),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                "FORBIDDEN",
                "The salary estimator is available for job seekers".to_string(),
            ),
            AppError::ProfileStoreUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "PROFILE_STORE_UNAVAILABLE",
                "Profile lookup is not configured on this server".to_string(),
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
