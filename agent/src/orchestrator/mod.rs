//! Multi-agent pipeline orchestration module
//!
//! This module provides:
//! - Role definitions (planner, writer, editor)
//! - Pipeline primitives (ordered stages, results, errors)
//! - The engine that runs stages in sequence against a model client
//!
//! # Example
//!
//! ```rust,ignore
//! use blogsmith::orchestrator::PipelineEngine;
//!
//! let engine = PipelineEngine::with_defaults(llm, GenerationOptions::default());
//! let result = engine.run("LLMs for DDoS Detection").await?;
//! println!("{}", result.output);
//! ```

pub mod engine;
pub mod pipeline;
pub mod prompts;
pub mod roles;

pub use engine::PipelineEngine;
pub use pipeline::{blog_pipeline, Pipeline, PipelineError, RunResult, Stage, StageResult};
pub use roles::{Role, RoleRegistry};
