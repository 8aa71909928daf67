//! Terminal output with colors and formatting
//!
//! Uses ANSI escape codes for colors and styling.

use std::io::{self, Write};

use super::{OutputEvent, OutputWriter};

// ANSI color codes
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Terminal output writer with colors and formatting
pub struct TerminalOutput {
    /// Whether to use colors (can be disabled)
    use_colors: bool,
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalOutput {
    /// Create a new terminal output writer
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Create without colors
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    /// Format with color if colors are enabled
    fn color(&self, code: &str, text: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", code, text, RESET)
        } else {
            text.to_string()
        }
    }

    /// Render an event as the line it would print (None for document text)
    fn format(&self, event: &OutputEvent) -> Option<String> {
        match event {
            OutputEvent::Text(_) => None,
            OutputEvent::StageDone {
                index,
                total,
                stage,
                role,
                duration,
            } => Some(format!(
                "  {} {} {}",
                self.color(CYAN, &format!("[{}/{}]", index + 1, total)),
                self.color(BOLD, stage),
                self.color(DIM, &format!("{} ({}ms)", role, duration.as_millis())),
            )),
            OutputEvent::Status(msg) => Some(self.color(DIM, msg)),
            OutputEvent::Success(msg) => Some(self.color(GREEN, &format!("✅ {}", msg))),
            OutputEvent::Warning(msg) => Some(self.color(YELLOW, &format!("⚠ {}", msg))),
            OutputEvent::Error(msg) => Some(self.color(RED, msg)),
        }
    }
}

impl OutputWriter for TerminalOutput {
    fn write(&self, event: OutputEvent) {
        match &event {
            OutputEvent::Text(text) => println!("{}", text),
            other => {
                if let Some(line) = self.format(other) {
                    eprintln!("{}", line);
                }
            }
        }
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
    }

    fn supports_colors(&self) -> bool {
        self.use_colors
    }
}
