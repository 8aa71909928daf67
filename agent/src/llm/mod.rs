//! LLM abstraction layer

mod error;
mod huggingface;

pub use error::LlmError;
pub use huggingface::{HuggingFaceClient, HuggingFaceConfig};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Sampling parameters for a single generation call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Sampling temperature (0.0 = deterministic)
    pub temperature: f32,
    /// Maximum number of new tokens to generate
    pub max_tokens: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.5,
            max_tokens: 512,
        }
    }
}

/// Trait for LLM backends
#[async_trait]
pub trait Llm: Send + Sync {
    /// Turn a prompt into generated text
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String, LlmError>;

    /// Get the model name
    fn model(&self) -> &str;
}
