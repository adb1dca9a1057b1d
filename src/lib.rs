//! # ApotheCare Server
//!
//! Backend for the ApotheCare online pharmacy storefront. The functional
//! surface is intentionally small: a pharmacist chat proxy over a hosted
//! completion API, a connectivity/echo endpoint for manual verification, a
//! health check, and static hosting for the Leptos storefront UI.
//!
//! ## Overview
//!
//! The server can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `apothecare-server` binary
//! 2. **As a library** - The router and types are exported so integration
//!    tests (and embedders) can drive the API in-process
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use apothecare::{AppState, api::routes::create_router, utils::config::Config};
//! use std::sync::Arc;
//!
//! let config = Config::from_env()?;
//! let completions = config.chatbot.client();
//! let state = AppState { config: Arc::new(config), completions };
//! let app = axum::Router::new()
//!     .nest("/api", create_router())
//!     .with_state(state);
//! ```
//!
//! ## Configuration
//!
//! Everything is environment-driven (`.env` supported via dotenvy):
//!
//! | Variable | Default | Purpose |
//! |----------|---------|---------|
//! | `HOST` / `PORT` | `127.0.0.1` / `3000` | Bind address |
//! | `OPENAI_API_KEY` | unset | Completion credential; unset selects the fallback reply |
//! | `OPENAI_API_BASE` | `https://api.openai.com/v1` | OpenAI-compatible endpoint |
//! | `CHATBOT_MODEL` | `gpt-4o-mini` | Completion model |
//! | `PRODUCT_API_URL` | `http://localhost:8000` | External product/image backend (UI-side) |
//! | `UI_DIST_DIR` | `ui/dist` | Built frontend to serve, when present |
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`llm`] - Completion API client
//! - [`types`] - Common types and error handling
//! - [`utils`] - Configuration utilities

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Completion API client abstractions.
pub mod llm;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use llm::{CompletionClient, OpenAiCompletionClient};
pub use types::{AppError, Result};
pub use utils::config::Config;

use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Runtime configuration
    pub config: Arc<Config>,
    /// Completion client; `None` when no credential is configured, which
    /// switches the chat proxy to its canned fallback reply
    pub completions: Option<Arc<dyn CompletionClient>>,
}
