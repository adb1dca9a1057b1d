//! HTTP API Handlers and Routes
//!
//! This module provides the REST API layer for ApotheCare, built on the Axum web framework.
//!
//! # Module Structure
//!
//! - [`api::handlers`](crate::api::handlers) - Request handlers for each endpoint
//! - [`api::routes`](crate::api::routes) - Route definitions and router configuration
//!
//! # API Endpoints
//!
//! ## Chatbot (`/api/chatbot`)
//! - `POST /api/chatbot` - Forward a customer message to the pharmacist assistant
//!
//! ## Test (`/api/test`)
//! - `GET /api/test` - Connectivity check with server timestamp
//! - `POST /api/test` - Echo a JSON payload back
//!
//! ## Health (`/api/health`)
//! - `GET /api/health` - Health check endpoint
//!
//! # OpenAPI Documentation
//!
//! When the `swagger-ui` feature is enabled, interactive API documentation
//! is available at `/swagger-ui/`.

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;

/// OpenAPI document covering the public API surface.
#[derive(utoipa::OpenApi)]
#[openapi(
    paths(
        handlers::chatbot::chatbot,
        handlers::health::health,
        handlers::test::test_get,
        handlers::test::test_post,
    ),
    components(schemas(
        crate::types::ChatbotRequest,
        crate::types::ChatbotReply,
        crate::types::TestResponse,
        crate::types::EchoResponse,
        crate::types::HealthResponse,
    )),
    tags(
        (name = "chatbot", description = "Pharmacist assistant proxy"),
        (name = "test", description = "Manual verification endpoints"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
