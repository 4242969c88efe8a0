use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::services::ApiResponse;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::HttpClient(_) => StatusCode::BAD_GATEWAY,
            AppError::Serialization(_) | AppError::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Failure side of a request exchange, carrying the text shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    /// HTTP status when the server answered at all
    pub status: Option<u16>,
    pub message: String,
}

/// Error body returned by the recommendations service
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

impl ErrorInfo {
    /// Builds the error from a non-2xx response, preferring the body's `message`
    pub fn from_response(response: &ApiResponse) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("Request failed with status {}", response.status));

        Self {
            status: Some(response.status),
            message,
        }
    }
}

impl From<AppError> for ErrorInfo {
    fn from(error: AppError) -> Self {
        Self {
            status: None,
            message: error.to_string(),
        }
    }
}
