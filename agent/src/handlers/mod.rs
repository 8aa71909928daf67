//! Command handlers module
//!
//! One handler per CLI command. CommandContext resolves configuration once
//! and builds the model client, engine and service on demand.

use std::sync::Arc;

use anyhow::Result;

use crate::config::{FileConfig, LlmConfig};
use crate::llm::{HuggingFaceClient, HuggingFaceConfig};
use crate::orchestrator::{blog_pipeline, PipelineEngine, RoleRegistry};
use crate::service::BlogService;

pub mod check;
pub mod generate;
pub mod roles;

pub use check::run_check;
pub use generate::run_generate;
pub use roles::run_roles;

#[cfg(feature = "web")]
pub mod web;

#[cfg(feature = "web")]
pub use web::run_web;

// =============================================================================
// CommandContext - resolved configuration shared across handlers
// =============================================================================

/// Shared context for command handlers
pub struct CommandContext {
    pub file_config: FileConfig,
}

impl CommandContext {
    /// Create a new CommandContext from CLI args and file config
    ///
    /// Priority: CLI/env > config file > defaults
    pub fn new(
        endpoint: Option<String>,
        model: Option<String>,
        mut file_config: FileConfig,
    ) -> Self {
        if let Some(endpoint) = endpoint {
            file_config.llm.endpoint = endpoint;
        }
        if let Some(model) = model {
            file_config.llm.model = model;
        }

        Self { file_config }
    }

    /// The resolved `[llm]` section
    pub fn llm_config(&self) -> &LlmConfig {
        &self.file_config.llm
    }

    /// Create a model client; the token is read from the environment now
    pub fn client(&self) -> Result<HuggingFaceClient> {
        Ok(HuggingFaceClient::new(HuggingFaceConfig::from_llm_config(
            self.llm_config(),
        ))?)
    }

    /// Roles with config overrides applied
    pub fn registry(&self) -> RoleRegistry {
        let mut registry = RoleRegistry::with_defaults();
        registry.apply_overrides(&self.file_config.roles);
        registry
    }

    /// Build the blog pipeline engine
    pub fn engine(&self) -> Result<PipelineEngine> {
        let client = Arc::new(self.client()?);
        Ok(PipelineEngine::new(
            client,
            self.registry(),
            blog_pipeline(),
            self.llm_config().generation_options(),
        )?)
    }

    /// Build the request/response service
    pub fn service(&self) -> Result<BlogService> {
        Ok(BlogService::new(self.engine()?))
    }
}
