//! Generate command handler
//!
//! Run the pipeline once for a topic and print or save the result.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;

use super::CommandContext;
use crate::output::{default_output, OutputEvent};
use crate::service::{GenerateError, GenerateRequest};

/// Exit status for a failed generate: 2 for bad input, 1 for a failed run
pub fn exit_code_for(error: &GenerateError) -> ExitCode {
    if error.is_warning() {
        ExitCode::from(2)
    } else {
        ExitCode::FAILURE
    }
}

/// Handle the `generate` command
///
/// User-facing failures are printed here and turned into an exit code;
/// `Err` is left for I/O and setup problems.
pub async fn run_generate(ctx: &CommandContext, topic: String, output: Option<PathBuf>) -> Result<ExitCode> {
    let out = default_output();
    let service = ctx.service()?;

    out.write(OutputEvent::Status("Agents working together...".to_string()));

    let response = match service.generate(&GenerateRequest::new(topic)).await {
        Ok(response) => response,
        Err(e) => {
            let message = e.display_message();
            out.write(if e.is_warning() {
                OutputEvent::Warning(message)
            } else {
                OutputEvent::Error(message)
            });
            out.flush();
            return Ok(exit_code_for(&e));
        }
    };

    let total = response.stages.len();
    for (index, stage) in response.stages.iter().enumerate() {
        out.write(OutputEvent::StageDone {
            index,
            total,
            stage: stage.stage.clone(),
            role: stage.role.clone(),
            duration: Duration::from_millis(stage.duration_ms),
        });
    }

    match output {
        Some(path) => {
            std::fs::write(&path, &response.markdown)?;
            out.write(OutputEvent::Success(format!(
                "Blog generated successfully! Saved to {}",
                path.display()
            )));
        }
        None => {
            out.write(OutputEvent::Success("Blog generated successfully!".to_string()));
            out.write(OutputEvent::Text(response.markdown));
        }
    }

    out.flush();
    Ok(ExitCode::SUCCESS)
}
