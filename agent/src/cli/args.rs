//! CLI argument definitions
//!
//! Contains the main CLI struct and Commands enum for clap parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blogsmith")]
#[command(about = "Plan, write and edit a blog post with three cooperating agents")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Inference endpoint base URL (default: from .blogsmith.toml or the Hugging Face API)
    #[arg(long, env = "HF_INFERENCE_URL", global = true)]
    pub endpoint: Option<String>,

    /// Model repository id (default: from .blogsmith.toml or google/flan-t5-large)
    #[arg(short = 'm', long, env = "HF_MODEL", global = true)]
    pub model: Option<String>,

    /// Explicit config file (skips the .blogsmith.toml search)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace). Default is warn.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web interface
    Web {
        /// Address to bind (default: from config or 127.0.0.1)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (default: from config or 8501)
        #[arg(long, short)]
        port: Option<u16>,
        /// Open the page in a browser once the server is up
        #[arg(long)]
        open: bool,
    },
    /// Generate a blog post from the command line
    Generate {
        /// Blog topic
        #[arg(long, short)]
        topic: String,
        /// Write the markdown to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Show the roles and stages of the pipeline
    Roles,
    /// Show resolved configuration and credential status
    Check {
        /// Also send a short prompt to the model
        #[arg(long)]
        test_llm: bool,
    },
}
