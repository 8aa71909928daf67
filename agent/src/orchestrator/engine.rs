//! Pipeline execution engine
//!
//! Executes a pipeline with:
//! - Strictly sequential stage execution
//! - Context passing from each stage to the next
//! - Abort on the first failed stage (no retry, no partial result)

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tracing::Instrument;

use super::pipeline::{blog_pipeline, Pipeline, PipelineError, RunResult, StageResult};
use super::prompts::{append_context, render_stage_prompt};
use super::roles::RoleRegistry;
use crate::llm::{GenerationOptions, Llm};

/// Pipeline execution engine
///
/// Everything the engine needs is handed in at construction and never
/// mutated afterwards, so one engine can serve any number of runs.
pub struct PipelineEngine {
    /// Model client shared by every stage
    llm: Arc<dyn Llm>,

    /// Role personas
    registry: RoleRegistry,

    /// Stages to execute
    pipeline: Pipeline,

    /// Sampling parameters for every generate call
    options: GenerationOptions,
}

impl PipelineEngine {
    /// Create a new engine, checking that every stage's role is registered
    pub fn new(
        llm: Arc<dyn Llm>,
        registry: RoleRegistry,
        pipeline: Pipeline,
        options: GenerationOptions,
    ) -> Result<Self, PipelineError> {
        pipeline.validate(&registry)?;

        Ok(Self {
            llm,
            registry,
            pipeline,
            options,
        })
    }

    /// Create an engine running the built-in blog pipeline with default roles
    pub fn with_defaults(llm: Arc<dyn Llm>, options: GenerationOptions) -> Self {
        Self {
            llm,
            registry: RoleRegistry::with_defaults(),
            pipeline: blog_pipeline(),
            options,
        }
    }

    /// The pipeline this engine runs
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// The model name
    pub fn model(&self) -> &str {
        self.llm.model()
    }

    /// Run every stage in order for `topic` and return the last stage's output
    pub async fn run(&self, topic: &str) -> Result<RunResult, PipelineError> {
        let run_id = uuid::Uuid::new_v4().to_string();
        let span = tracing::info_span!("pipeline_run", run_id = %run_id, pipeline = %self.pipeline.name);

        self.execute(run_id, topic).instrument(span).await
    }

    async fn execute(&self, run_id: String, topic: &str) -> Result<RunResult, PipelineError> {
        tracing::info!("Starting run for topic: {}", topic);

        let mut context: HashMap<String, String> = HashMap::new();
        context.insert("topic".to_string(), topic.to_string());

        let total = self.pipeline.stages.len();
        let mut stage_results: Vec<StageResult> = Vec::with_capacity(total);

        for (stage_index, stage) in self.pipeline.stages.iter().enumerate() {
            let stage_start = Instant::now();

            let role = self
                .registry
                .get(&stage.role)
                .ok_or_else(|| PipelineError::UnknownRole(stage.role.clone()))?;

            tracing::info!(
                "[Stage {}/{}] {} ({})",
                stage_index + 1,
                total,
                stage.name,
                role.display_name
            );

            // Substitute before appending context so model output is passed through untouched
            let instructions = substitute_variables(&render_stage_prompt(role, stage), &context);
            let prompt = match stage_results.last() {
                Some(previous) => append_context(instructions, &previous.output),
                None => instructions,
            };
            tracing::debug!("Prompt for stage '{}':\n{}", stage.name, prompt);

            let output = self
                .llm
                .generate(&prompt, &self.options)
                .await
                .map_err(|source| {
                    tracing::error!("Stage '{}' failed: {}", stage.name, source);
                    PipelineError::Stage {
                        stage: stage.name.clone(),
                        source,
                    }
                })?;

            let duration_ms = stage_start.elapsed().as_millis() as u64;
            tracing::info!(
                "Stage '{}' completed in {}ms ({} chars)",
                stage.name,
                duration_ms,
                output.len()
            );

            stage_results.push(StageResult {
                stage_index,
                stage: stage.name.clone(),
                role: role.name.clone(),
                output,
                duration_ms,
            });
        }

        let output = stage_results
            .last()
            .map(|r| r.output.clone())
            .ok_or_else(|| PipelineError::Empty(self.pipeline.name.clone()))?;

        Ok(RunResult {
            run_id,
            topic: topic.to_string(),
            stages: stage_results,
            output,
        })
    }
}

/// Substitute {variable} placeholders in a string
fn substitute_variables(template: &str, context: &HashMap<String, String>) -> String {
    let mut result = template.to_string();

    for (key, value) in context {
        let placeholder = format!("{{{}}}", key);
        result = result.replace(&placeholder, value);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::LlmError;
    use crate::orchestrator::roles::Role;
    use crate::orchestrator::pipeline::Stage;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Replies with "<n>:<first line of prompt>" and records every prompt.
    /// Fails with the given error on call number `fail_on` (0-based).
    struct ScriptedLlm {
        prompts: Mutex<Vec<String>>,
        fail_on: Option<(usize, LlmError)>,
    }

    impl ScriptedLlm {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                prompts: Mutex::new(Vec::new()),
                fail_on: None,
            })
        }

        fn failing_on(call: usize, err: LlmError) -> Arc<Self> {
            Arc::new(Self {
                prompts: Mutex::new(Vec::new()),
                fail_on: Some((call, err)),
            })
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Llm for ScriptedLlm {
        async fn generate(&self, prompt: &str, _options: &GenerationOptions) -> Result<String, LlmError> {
            let call = {
                let mut prompts = self.prompts.lock().unwrap();
                prompts.push(prompt.to_string());
                prompts.len() - 1
            };

            if let Some((n, err)) = &self.fail_on {
                if *n == call {
                    return Err(err.clone());
                }
            }

            Ok(format!("output-{}", call))
        }

        fn model(&self) -> &str {
            "scripted"
        }
    }

    #[test]
    fn test_variable_substitution() {
        let mut context = HashMap::new();
        context.insert("topic".to_string(), "LLMs for DDoS Detection".to_string());

        let result = substitute_variables("Plan content on {topic}. Again: {topic}. {other}", &context);

        assert_eq!(
            result,
            "Plan content on LLMs for DDoS Detection. Again: LLMs for DDoS Detection. {other}"
        );
    }

    #[tokio::test]
    async fn test_stages_run_in_order_with_context() {
        let llm = ScriptedLlm::new();
        let engine = PipelineEngine::with_defaults(llm.clone(), GenerationOptions::default());

        let result = engine.run("LLMs for DDoS Detection").await.unwrap();

        let prompts = llm.prompts();
        assert_eq!(prompts.len(), 3);
        assert!(prompts[0].starts_with("You are Content Planner."));
        assert!(prompts[1].starts_with("You are Content Writer."));
        assert!(prompts[2].starts_with("You are Editor."));

        // Topic substituted everywhere, including the planner's goal
        assert!(prompts[0].contains("Plan engaging and factually accurate content on LLMs for DDoS Detection"));
        assert!(prompts.iter().all(|p| !p.contains("{topic}")));

        // Each stage sees only its predecessor's output
        assert!(!prompts[0].contains("context you're working with"));
        assert!(prompts[1].ends_with("output-0"));
        assert!(prompts[2].ends_with("output-1"));

        let roles: Vec<_> = result.stages.iter().map(|s| s.role.as_str()).collect();
        assert_eq!(roles, vec!["planner", "writer", "editor"]);
        assert_eq!(result.output, "output-2");
        assert_eq!(result.output, result.stages[2].output);
        assert_eq!(result.topic, "LLMs for DDoS Detection");
        assert!(!result.run_id.is_empty());
    }

    #[tokio::test]
    async fn test_failure_aborts_remaining_stages() {
        let llm = ScriptedLlm::failing_on(1, LlmError::Service("connection refused".to_string()));
        let engine = PipelineEngine::with_defaults(llm.clone(), GenerationOptions::default());

        let err = engine.run("Rust").await.unwrap_err();

        match err {
            PipelineError::Stage { stage, source } => {
                assert_eq!(stage, "write");
                assert_eq!(source, LlmError::Service("connection refused".to_string()));
            }
            other => panic!("expected stage error, got {:?}", other),
        }
        // The editor never ran
        assert_eq!(llm.prompts().len(), 2);
    }

    #[tokio::test]
    async fn test_first_stage_failure_makes_no_further_calls() {
        let llm = ScriptedLlm::failing_on(0, LlmError::Auth("no token".to_string()));
        let engine = PipelineEngine::with_defaults(llm.clone(), GenerationOptions::default());

        assert!(engine.run("Rust").await.is_err());
        assert_eq!(llm.prompts().len(), 1);
    }

    #[test]
    fn test_new_rejects_unknown_role() {
        let pipeline = Pipeline::new("custom").with_stage(Stage::new("x", "ghost", "{topic}", "text"));
        let result = PipelineEngine::new(
            ScriptedLlm::new(),
            RoleRegistry::with_defaults(),
            pipeline,
            GenerationOptions::default(),
        );
        assert!(matches!(result, Err(PipelineError::UnknownRole(ref r)) if r == "ghost"));
    }

    #[tokio::test]
    async fn test_custom_single_stage_pipeline() {
        let mut registry = RoleRegistry::new();
        registry.register(Role::new("solo", "Summarize {topic}", "You are brief."));
        let pipeline = Pipeline::new("solo").with_stage(Stage::new("sum", "solo", "Summarize {topic}", "One line"));

        let engine = PipelineEngine::new(ScriptedLlm::new(), registry, pipeline, GenerationOptions::default()).unwrap();
        let result = engine.run("tokio").await.unwrap();

        assert_eq!(result.stages.len(), 1);
        assert_eq!(result.output, "output-0");
    }
}
