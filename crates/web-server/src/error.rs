use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use database::DbError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),
    #[error("Failed to build the view-model: {0}")]
    ViewModel(#[from] serde_json::Error),
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Converts our custom `AppError` into an HTTP response.
///
/// A record that cannot be found is not turned into a dedicated page: like any
/// other store failure it surfaces as a generic server error.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Database(DbError::InvalidSort { entity, property }) => (
                StatusCode::BAD_REQUEST,
                format!("Cannot sort {} by '{}'", entity, property),
            ),
            AppError::Database(db_err @ DbError::NotFound { .. }) => {
                tracing::warn!(error = %db_err, "Lookup failed.");
                internal_error()
            }
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                internal_error()
            }
            AppError::ViewModel(json_err) => {
                tracing::error!(error = ?json_err, "View-model serialization error.");
                internal_error()
            }
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

fn internal_error() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "An internal server error occurred".to_string(),
    )
}
