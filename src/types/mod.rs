use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= API Request/Response Types =============

/// Request body for the pharmacist chat proxy.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatbotRequest {
    pub message: String,
}

/// Reply from the pharmacist chat proxy.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatbotReply {
    pub reply: String,
}

/// Response for `GET /api/test`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TestResponse {
    pub status: String,
    pub message: String,
    /// RFC 3339 UTC timestamp of when the response was produced.
    pub timestamp: DateTime<Utc>,
}

/// Response for `POST /api/test` - echoes the posted body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EchoResponse {
    pub status: String,
    pub received: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

/// Response for `GET /api/health`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Shape returned by the external product-image backend after an upload.
///
/// The backend itself lives outside this repository; the type is shared so
/// the UI and tests agree on the contract.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub image_url: String,
}

// ============= Error Types =============

/// What the chat proxy tells customers when the upstream call blew up.
/// The real error goes to the logs only.
pub const COMPLETION_ERROR_REPLY: &str =
    "Sorry, something went wrong while reaching our pharmacist assistant. Please try again in a moment.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Completion error: {0}")]
    Completion(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (axum::http::StatusCode::BAD_REQUEST, msg),
            AppError::Completion(msg) => {
                // Upstream detail must not reach the customer
                tracing::error!("completion API failure: {}", msg);
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    COMPLETION_ERROR_REPLY.to_string(),
                )
            }
            AppError::Config(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Internal(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn invalid_input_maps_to_400() {
        let resp = AppError::InvalidInput("message is required".to_string()).into_response();
        assert_eq!(resp.status(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn completion_error_maps_to_500() {
        let resp = AppError::Completion("connection refused".to_string()).into_response();
        assert_eq!(resp.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
