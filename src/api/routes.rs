use crate::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(crate::api::handlers::health::health))
        .route(
            "/test",
            get(crate::api::handlers::test::test_get).post(crate::api::handlers::test::test_post),
        )
        .route("/chatbot", post(crate::api::handlers::chatbot::chatbot))
}
