//! Output abstraction for CLI consumers
//!
//! Commands emit `OutputEvent`s; the writer decides how they look.
//! Terminal output gets colors, pipes and CI get plain text.

use std::io::IsTerminal;
use std::time::Duration;

mod plain;
mod terminal;

pub use plain::PlainOutput;
pub use terminal::TerminalOutput;

// ============================================================================
// Output Events
// ============================================================================

/// Events that can be displayed to the user
#[derive(Debug, Clone)]
pub enum OutputEvent {
    /// Document content (goes to stdout)
    Text(String),

    /// A finished pipeline stage
    StageDone {
        index: usize,
        total: usize,
        stage: String,
        role: String,
        duration: Duration,
    },

    /// Status message (informational)
    Status(String),

    /// Operation finished successfully
    Success(String),

    /// Input problem; nothing was run
    Warning(String),

    /// Error message
    Error(String),
}

// ============================================================================
// Output Writer Trait
// ============================================================================

/// Trait for writing output events
pub trait OutputWriter: Send + Sync {
    /// Write an output event
    fn write(&self, event: OutputEvent);

    /// Flush any buffered output
    fn flush(&self);

    /// Whether this writer supports colors/formatting
    fn supports_colors(&self) -> bool {
        false
    }
}

/// Create a default output writer based on environment
///
/// Formatted lines go to stderr, so stderr decides whether colors are used.
pub fn default_output() -> Box<dyn OutputWriter> {
    output_for(std::io::stderr().is_terminal())
}

fn output_for(stderr_is_terminal: bool) -> Box<dyn OutputWriter> {
    if stderr_is_terminal {
        Box::new(TerminalOutput::new())
    } else {
        Box::new(PlainOutput::new())
    }
}
