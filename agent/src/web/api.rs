//! REST API handlers

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::render::render_markdown;
use super::state::AppState;
use crate::service::{GenerateError, GenerateRequest, GenerateResponse, DOWNLOAD_FILENAME};

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Stable error tag (empty_topic, auth, rate_limit, service, unknown)
    pub kind: String,
    /// Underlying cause
    pub error: String,
    /// Text the page shows verbatim
    pub message: String,
}

impl From<&GenerateError> for ErrorResponse {
    fn from(e: &GenerateError) -> Self {
        Self {
            kind: e.kind().to_string(),
            error: e.to_string(),
            message: e.display_message(),
        }
    }
}

/// HTTP status for each failure kind
fn status_for(e: &GenerateError) -> StatusCode {
    match e {
        GenerateError::EmptyTopic => StatusCode::BAD_REQUEST,
        GenerateError::Auth(_) => StatusCode::UNAUTHORIZED,
        GenerateError::RateLimit(_) => StatusCode::TOO_MANY_REQUESTS,
        GenerateError::Service(_) => StatusCode::BAD_GATEWAY,
        GenerateError::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub endpoint: String,
    pub model: String,
    pub token_configured: bool,
    pub stages: Vec<String>,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        endpoint: state.endpoint.clone(),
        model: state.model().to_string(),
        token_configured: state.token_configured,
        stages: state
            .service
            .engine()
            .pipeline()
            .stages
            .iter()
            .map(|s| s.name.clone())
            .collect(),
    })
}

/// Generate response with the markdown pre-rendered for display
#[derive(Debug, Serialize)]
pub struct GeneratePageResponse {
    #[serde(flatten)]
    pub result: GenerateResponse,
    pub html: String,
}

/// Run the pipeline for a topic and return the final markdown
pub async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GeneratePageResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.service.generate(&req).await {
        Ok(result) => {
            let html = render_markdown(&result.markdown);
            Ok(Json(GeneratePageResponse { result, html }))
        }
        Err(e) => Err((status_for(&e), Json(ErrorResponse::from(&e)))),
    }
}

/// Download request: the markdown currently on screen
#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    pub markdown: String,
}

/// Return the markdown as a `blog.md` attachment, byte for byte
pub async fn download(Json(req): Json<DownloadRequest>) -> Response {
    markdown_attachment(req.markdown)
}

/// Build an attachment response carrying `markdown` unchanged
pub fn markdown_attachment(markdown: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/markdown; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", DOWNLOAD_FILENAME),
            ),
        ],
        markdown,
    )
        .into_response()
}
