use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading or saving tool configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read or write config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration for the tool set, persisted as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Name the tool factory resolves when no explicit choice is made.
    pub default_tool: String,
    pub eraser: EraserConfig,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            default_tool: "selection".to_string(),
            eraser: EraserConfig::default(),
        }
    }
}

/// Settings for the eraser tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EraserConfig {
    pub width: f32,
}

impl Default for EraserConfig {
    fn default() -> Self {
        Self { width: 10.0 }
    }
}

impl ToolsConfig {
    /// Loads configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Loads configuration, falling back to defaults when the file is
    /// missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!("using default tool config, {} not usable: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Serializes the configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
