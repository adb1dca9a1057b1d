//! ApotheCare storefront server entry point.
//!
//! Parses CLI flags, loads environment configuration, assembles the router
//! with tracing/CORS/body-limit middleware, and serves the API plus the
//! built frontend (when `ui/dist` exists).

use anyhow::Context;
use apothecare::{AppState, api::routes::create_router, utils::config::Config};
use axum::Router;
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

/// Request bodies larger than this are rejected before the handlers run.
const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Parser)]
#[command(name = "apothecare-server", version, about = "ApotheCare storefront server")]
struct Cli {
    /// Bind host, overrides HOST
    #[arg(long)]
    host: Option<String>,

    /// Bind port, overrides PORT
    #[arg(long)]
    port: Option<u16>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "info",
        1 => "info,apothecare=debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let completions = config.chatbot.client();
    match &completions {
        Some(client) => {
            tracing::info!(model = client.model_name(), "pharmacist assistant enabled")
        }
        None => tracing::warn!(
            "OPENAI_API_KEY not set; chatbot will answer with its fallback reply"
        ),
    }

    let dist_dir = config.ui.dist_dir.clone();
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState {
        config: Arc::new(config),
        completions,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app: Router = Router::new()
        .nest("/api", create_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES));

    #[cfg(feature = "swagger-ui")]
    {
        use utoipa::OpenApi;
        app = app.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", apothecare::api::ApiDoc::openapi()),
        );
    }

    // Unknown paths fall through to the SPA's index.html for client-side
    // routing; API routes take priority. Without a built UI, API only.
    let dist = Path::new(&dist_dir);
    if dist.is_dir() {
        let index = dist.join("index.html");
        app = app.fallback_service(ServeDir::new(dist).fallback(ServeFile::new(index)));
        tracing::info!(dir = %dist.display(), "serving storefront UI");
    } else {
        tracing::info!(dir = %dist.display(), "UI dist directory not found; serving API only");
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(%addr, "ApotheCare server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
