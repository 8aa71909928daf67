//! Pipeline definitions and results
//!
//! A pipeline is an ordered list of stages. Each stage runs as one role and
//! sees the previous stage's output as its context.

use serde::{Deserialize, Serialize};

use super::prompts;
use super::roles::RoleRegistry;
use crate::llm::LlmError;

/// A single step in a pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    /// Stage identifier (e.g. "plan")
    pub name: String,

    /// Name of the role that runs this stage (must exist in registry)
    pub role: String,

    /// Task template (can use the {topic} placeholder)
    pub description: String,

    /// What a good answer looks like
    pub expected_output: String,
}

impl Stage {
    /// Create a stage
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        description: impl Into<String>,
        expected_output: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            description: description.into(),
            expected_output: expected_output.into(),
        }
    }
}

/// An ordered sequence of stages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipeline {
    /// Unique identifier for this pipeline
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Stages in execution order
    pub stages: Vec<Stage>,
}

impl Pipeline {
    /// Create a new, empty pipeline
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            stages: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Add a stage
    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    /// Check that the pipeline has stages and every stage's role is registered
    pub fn validate(&self, registry: &RoleRegistry) -> Result<(), PipelineError> {
        if self.stages.is_empty() {
            return Err(PipelineError::Empty(self.name.clone()));
        }

        match self.stages.iter().find(|s| !registry.contains(&s.role)) {
            Some(stage) => Err(PipelineError::UnknownRole(stage.role.clone())),
            None => Ok(()),
        }
    }
}

/// The plan → write → edit blog pipeline
pub fn blog_pipeline() -> Pipeline {
    Pipeline::new("blog")
        .with_description("Plan, write and edit a blog post on a topic")
        .with_stage(Stage::new(
            "plan",
            "planner",
            prompts::PLAN_DESCRIPTION,
            prompts::PLAN_EXPECTED_OUTPUT,
        ))
        .with_stage(Stage::new(
            "write",
            "writer",
            prompts::WRITE_DESCRIPTION,
            prompts::WRITE_EXPECTED_OUTPUT,
        ))
        .with_stage(Stage::new(
            "edit",
            "editor",
            prompts::EDIT_DESCRIPTION,
            prompts::EDIT_EXPECTED_OUTPUT,
        ))
}

/// Result of executing a pipeline stage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageResult {
    /// Position of the stage in the pipeline
    pub stage_index: usize,

    /// Stage name
    pub stage: String,

    /// Role that produced the output
    pub role: String,

    /// Generated text
    pub output: String,

    /// Duration of execution
    pub duration_ms: u64,
}

/// Result of a complete run
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    /// Identifier for log correlation
    pub run_id: String,

    /// Topic the run was started with (trimmed)
    pub topic: String,

    /// Results from each stage, in execution order
    pub stages: Vec<StageResult>,

    /// Final document (the last stage's output)
    pub output: String,
}

impl RunResult {
    /// Total time spent in stages
    pub fn total_duration_ms(&self) -> u64 {
        self.stages.iter().map(|s| s.duration_ms).sum()
    }
}

/// Errors that can occur while building or running a pipeline
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Pipeline '{0}' has no stages")]
    Empty(String),

    #[error("Role not found: {0}")]
    UnknownRole(String),

    #[error("Stage '{stage}' failed: {source}")]
    Stage {
        stage: String,
        #[source]
        source: LlmError,
    },
}
