//! Plain text output for pipes and CI environments
//!
//! No colors or special formatting - just clean text output.

use std::io::{self, Write};

use super::{OutputEvent, OutputWriter};

/// Plain text output writer (no colors)
#[derive(Default)]
pub struct PlainOutput;

impl PlainOutput {
    /// Create a new plain output writer
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for PlainOutput {
    fn write(&self, event: OutputEvent) {
        match event {
            OutputEvent::Text(text) => println!("{}", text),
            OutputEvent::StageDone {
                index,
                total,
                stage,
                role,
                duration,
            } => eprintln!(
                "  [{}/{}] {} {} ({}ms)",
                index + 1,
                total,
                stage,
                role,
                duration.as_millis()
            ),
            OutputEvent::Status(msg) => eprintln!("{}", msg),
            OutputEvent::Success(msg) => eprintln!("OK: {}", msg),
            OutputEvent::Warning(msg) => eprintln!("WARNING: {}", msg),
            OutputEvent::Error(msg) => eprintln!("{}", msg),
        }
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
    }
}
