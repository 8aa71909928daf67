//! CLI module
//!
//! Argument definitions for the `blogsmith` binary.

pub mod args;

pub use args::{Cli, Commands};
