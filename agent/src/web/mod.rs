//! Web server module for the blog generator page
//!
//! Serves the single-page UI and a small JSON API:
//! - `POST /api/generate` runs the pipeline for a topic
//! - `POST /api/download` returns markdown as a `blog.md` attachment
//! - `GET /api/health` reports endpoint, model and token status

pub mod api;
pub mod render;
pub mod state;

use anyhow::Result;
use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use rust_embed::RustEmbed;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Embedded static files for the frontend
#[derive(RustEmbed)]
#[folder = "static/"]
struct StaticAssets;

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
}

impl WebConfig {
    /// URL a browser should open
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Start the web server and run until Ctrl-C
pub async fn serve(config: WebConfig, state: AppState) -> Result<()> {
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting web server on {}", config.url());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
    }
}

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/generate", post(api::generate))
        .route("/download", post(api::download))
        .route("/health", get(api::health_check));

    Router::new()
        .nest("/api", api_routes)
        .fallback(static_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve embedded static files
async fn static_handler(uri: Uri) -> Response {
    let path = match uri.path().trim_start_matches('/') {
        "" => "index.html",
        p => p,
    };

    match StaticAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                content.data.into_owned(),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}
