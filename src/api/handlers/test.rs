use crate::types::{AppError, EchoResponse, Result, TestResponse};
use axum::{Json, extract::rejection::JsonRejection};
use chrono::Utc;

/// Connectivity check
#[utoipa::path(
    get,
    path = "/api/test",
    responses(
        (status = 200, description = "Server is reachable", body = TestResponse)
    ),
    tag = "test"
)]
pub async fn test_get() -> Json<TestResponse> {
    Json(TestResponse {
        status: "ok".to_string(),
        message: "ApotheCare API is up".to_string(),
        timestamp: Utc::now(),
    })
}

/// Echo a JSON payload back, for manual request debugging
#[utoipa::path(
    post,
    path = "/api/test",
    responses(
        (status = 200, description = "Payload echoed", body = EchoResponse),
        (status = 400, description = "Body is not valid JSON")
    ),
    tag = "test"
)]
pub async fn test_post(
    payload: std::result::Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<EchoResponse>> {
    let Json(received) =
        payload.map_err(|e| AppError::InvalidInput(format!("Invalid JSON body: {}", e)))?;

    Ok(Json(EchoResponse {
        status: "ok".to_string(),
        received,
        timestamp: Utc::now(),
    }))
}
