//! Configuration management for comment-iter

use crate::comment::{Comment, CommentAggregate};
use crate::demo::sample_comments;
use crate::error::{IterError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Comments fed to the aggregate
    pub demo: DemoConfig,
    /// Output settings
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(IterError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| IterError::from(e).with_context(format!("Failed to read {}", path.display())))?;
        let config: Config = toml::from_str(&content)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Build an aggregate from the configured comments, in file order
    pub fn aggregate(&self) -> CommentAggregate {
        self.demo.comments.iter().cloned().collect()
    }
}

/// Comments used by the demonstration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Comments added to the aggregate, in order
    pub comments: Vec<Comment>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            comments: sample_comments(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Rendering used by the list command
    pub format: OutputFormat,
}

/// How comment listings are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `name: text` line per comment
    #[default]
    Text,
    /// JSON array
    Json,
}
