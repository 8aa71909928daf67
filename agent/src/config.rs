//! Configuration loading

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::llm::GenerationOptions;

/// File name searched for when no explicit path is given
pub const CONFIG_FILE_NAME: &str = ".blogsmith.toml";

/// Find a config file by walking up the directory tree, then checking global config.
///
/// Search order:
/// 1. Current directory and parent directories (walking up to root)
/// 2. Global config at ~/.config/blogsmith/
///
/// Returns the path if found, None otherwise.
fn find_config_file(filename: &str) -> Option<PathBuf> {
    let start = std::env::current_dir().ok()?;
    find_config_file_from(&start, filename).or_else(|| {
        let global_path = dirs::config_dir()?.join("blogsmith").join(filename);
        global_path.exists().then_some(global_path)
    })
}

fn find_config_file_from(start: &Path, filename: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.exists())
}

// ============================================================================
// Top-level configuration (.blogsmith.toml)
// ============================================================================

/// Top-level configuration (from .blogsmith.toml)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub server: ServerConfig,
    /// Per-role text overrides, matched by role name
    #[serde(default)]
    pub roles: Vec<RoleOverride>,
}

/// Inference endpoint section
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Environment variable holding the bearer token
    #[serde(default = "default_token_env")]
    pub token_env: String,
    /// Request timeout; unset means wait for the endpoint indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Web server section
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Replacement text for one of the built-in roles
#[derive(Debug, Clone, Deserialize)]
pub struct RoleOverride {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub backstory: Option<String>,
}

// Default value functions
fn default_endpoint() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_model() -> String {
    "google/flan-t5-large".to_string()
}

fn default_temperature() -> f32 {
    0.5
}

fn default_max_tokens() -> u32 {
    512
}

fn default_token_env() -> String {
    "HUGGINGFACEHUB_API_TOKEN".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            token_env: default_token_env(),
            timeout_secs: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl LlmConfig {
    /// Sampling parameters sent with every generation request
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    /// Read the bearer token from the configured environment variable.
    ///
    /// Empty values count as missing.
    pub fn token(&self) -> Option<String> {
        std::env::var(&self.token_env)
            .ok()
            .filter(|t| !t.trim().is_empty())
    }
}

impl FileConfig {
    /// Load config from .blogsmith.toml
    ///
    /// Search order:
    /// 1. Walk up directory tree from cwd looking for .blogsmith.toml
    /// 2. Check ~/.config/blogsmith/.blogsmith.toml (global fallback)
    /// 3. Fall back to defaults
    pub fn load() -> Result<Self> {
        if let Some(config_path) = find_config_file(CONFIG_FILE_NAME) {
            tracing::debug!("Loading config from: {}", config_path.display());
            return Self::load_from_path(&config_path);
        }

        tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
        Ok(Self::default())
    }

    /// Load from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }
}
