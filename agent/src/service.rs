//! Request/response boundary between the UI and the pipeline
//!
//! Validates the topic, runs the pipeline one request at a time and maps
//! every failure onto a small, user-facing error taxonomy.

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::llm::LlmError;
use crate::orchestrator::{PipelineEngine, PipelineError, RunResult};

/// Name offered for the downloaded document
pub const DOWNLOAD_FILENAME: &str = "blog.md";

/// Warning shown when the topic is blank
pub const EMPTY_TOPIC_MESSAGE: &str = "Please enter a topic";

/// A request to generate a blog post
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub topic: String,
}

impl GenerateRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
        }
    }
}

/// Timing summary for one stage
#[derive(Debug, Clone, Serialize)]
pub struct StageSummary {
    pub stage: String,
    pub role: String,
    pub duration_ms: u64,
}

/// A successful generation
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub run_id: String,
    pub topic: String,
    /// Final document, exactly as it should be displayed and downloaded
    pub markdown: String,
    pub filename: String,
    pub stages: Vec<StageSummary>,
}

impl From<RunResult> for GenerateResponse {
    fn from(result: RunResult) -> Self {
        Self {
            stages: result
                .stages
                .iter()
                .map(|s| StageSummary {
                    stage: s.stage.clone(),
                    role: s.role.clone(),
                    duration_ms: s.duration_ms,
                })
                .collect(),
            run_id: result.run_id,
            topic: result.topic,
            markdown: result.output,
            filename: DOWNLOAD_FILENAME.to_string(),
        }
    }
}

/// Every way a generate request can fail, as seen by the user
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerateError {
    #[error("{}", EMPTY_TOPIC_MESSAGE)]
    EmptyTopic,

    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    RateLimit(String),

    #[error("{0}")]
    Service(String),

    #[error("{0}")]
    Unknown(String),
}

impl GenerateError {
    /// Stable tag for API clients
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyTopic => "empty_topic",
            Self::Auth(_) => "auth",
            Self::RateLimit(_) => "rate_limit",
            Self::Service(_) => "service",
            Self::Unknown(_) => "unknown",
        }
    }

    /// Whether this is a warning about the input rather than a failed run
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::EmptyTopic)
    }

    /// Text shown to the user
    pub fn display_message(&self) -> String {
        if self.is_warning() {
            self.to_string()
        } else {
            format!("❌ Error: {}", self)
        }
    }
}

impl From<PipelineError> for GenerateError {
    fn from(e: PipelineError) -> Self {
        match e {
            PipelineError::Stage { source, .. } => match source {
                LlmError::Auth(_) => Self::Auth(source.to_string()),
                LlmError::RateLimited(_) => Self::RateLimit(source.to_string()),
                LlmError::Service(_) => Self::Service(source.to_string()),
                LlmError::InvalidResponse(_) => Self::Unknown(source.to_string()),
            },
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Trim the topic and reject it if nothing is left
pub fn validate_topic(raw: &str) -> Result<&str, GenerateError> {
    let topic = raw.trim();
    if topic.is_empty() {
        Err(GenerateError::EmptyTopic)
    } else {
        Ok(topic)
    }
}

/// Runs generate requests against a pipeline engine
pub struct BlogService {
    engine: PipelineEngine,
    /// Held for the duration of a run; at most one pipeline executes at a time
    run_lock: Mutex<()>,
}

impl BlogService {
    pub fn new(engine: PipelineEngine) -> Self {
        Self {
            engine,
            run_lock: Mutex::new(()),
        }
    }

    /// The underlying engine
    pub fn engine(&self) -> &PipelineEngine {
        &self.engine
    }

    /// Validate the request, run the pipeline and return the final document
    pub async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, GenerateError> {
        let topic = match validate_topic(&request.topic) {
            Ok(topic) => topic,
            Err(e) => {
                tracing::warn!("Rejected generate request: {}", e);
                return Err(e);
            }
        };

        let _guard = self.run_lock.lock().await;

        match self.engine.run(topic).await {
            Ok(result) => {
                tracing::info!(
                    "Run {} finished in {}ms",
                    result.run_id,
                    result.total_duration_ms()
                );
                Ok(result.into())
            }
            Err(e) => {
                tracing::error!("Run failed: {}", e);
                Err(e.into())
            }
        }
    }
}
