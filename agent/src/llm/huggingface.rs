//! Hugging Face Inference API client

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{GenerationOptions, Llm, LlmError};
use crate::config::LlmConfig;

/// Connection settings for the inference endpoint
#[derive(Clone)]
pub struct HuggingFaceConfig {
    /// Base URL, e.g. https://api-inference.huggingface.co
    pub endpoint: String,
    /// Model repository id, e.g. google/flan-t5-large
    pub model: String,
    /// Bearer token; checked on first use, not at construction
    pub token: Option<String>,
    /// Environment variable the token is read from, named in auth errors
    pub token_env: String,
    /// Per-request timeout
    pub timeout: Option<Duration>,
}

impl fmt::Debug for HuggingFaceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuggingFaceConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("token_env", &self.token_env)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HuggingFaceConfig {
    /// Build from the `[llm]` config section, reading the token from its env var
    pub fn from_llm_config(config: &LlmConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            token: config.token(),
            token_env: config.token_env.clone(),
            timeout: config.timeout_secs.map(Duration::from_secs),
        }
    }
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
    options: InferenceOptions,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    temperature: f32,
    max_new_tokens: u32,
    return_full_text: bool,
}

#[derive(Debug, Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
struct Generation {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Batch(Vec<Generation>),
    Single(Generation),
    Error { error: serde_json::Value },
}

/// Pull a readable message out of an error body like `{"error": "..."}`.
fn error_message(body: &str) -> String {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| match v.get("error")? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(items) => Some(
                items
                    .iter()
                    .map(|i| i.as_str().map(str::to_string).unwrap_or_else(|| i.to_string()))
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            other => Some(other.to_string()),
        });

    match message {
        Some(m) => m,
        None if body.trim().is_empty() => "empty response body".to_string(),
        None => body.trim().to_string(),
    }
}

/// Text-generation client for the Hugging Face Inference API
pub struct HuggingFaceClient {
    client: reqwest::Client,
    config: HuggingFaceConfig,
}

impl HuggingFaceClient {
    /// Create a new client
    pub fn new(config: HuggingFaceConfig) -> Result<Self, LlmError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    /// Whether a bearer token is configured
    pub fn has_token(&self) -> bool {
        self.config.token.is_some()
    }

    /// Base URL of the endpoint
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Full URL of the model's inference route
    fn model_url(&self) -> Result<url::Url, LlmError> {
        let mut url = url::Url::parse(&self.config.endpoint).map_err(|e| {
            LlmError::Service(format!("invalid endpoint '{}': {}", self.config.endpoint, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                LlmError::Service(format!("invalid endpoint '{}'", self.config.endpoint))
            })?
            .pop_if_empty()
            .push("models")
            .extend(self.config.model.split('/'));

        Ok(url)
    }
}

#[async_trait]
impl Llm for HuggingFaceClient {
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String, LlmError> {
        let token = self.config.token.as_deref().ok_or_else(|| {
            LlmError::Auth(format!("no API token configured (set {})", self.config.token_env))
        })?;

        let url = self.model_url()?;
        let request = InferenceRequest {
            inputs: prompt,
            parameters: InferenceParameters {
                temperature: options.temperature,
                max_new_tokens: options.max_tokens,
                return_full_text: false,
            },
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        tracing::debug!("POST {} ({} prompt chars)", url, prompt.len());

        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("Inference endpoint returned {}", status);
            return Err(LlmError::from_status(status.as_u16(), error_message(&body)));
        }

        let parsed: InferenceResponse = serde_json::from_str(&body)
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        match parsed {
            InferenceResponse::Batch(generations) => generations
                .into_iter()
                .next()
                .map(|g| g.generated_text.trim().to_string())
                .ok_or_else(|| LlmError::InvalidResponse("empty generation list".to_string())),
            InferenceResponse::Single(generation) => Ok(generation.generated_text.trim().to_string()),
            InferenceResponse::Error { error } => Err(LlmError::Service(match error {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })),
        }
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}
