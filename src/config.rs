//! Configuration file support
//!
//! The CLI can read its defaults from a TOML file:
//!
//! ```toml
//! mode = "json"
//! data = "customer.json"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::formatter::Mode;
use crate::RenderConfig;

/// Errors that can occur when loading or parsing a config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Settings read from a config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MergeConfig {
    /// Serialization mode applied to every placeholder
    pub mode: Mode,
    /// JSON document used as the root when none is given on the command line
    pub data: Option<PathBuf>,
}

impl MergeConfig {
    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load config from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::new().with_mode(self.mode)
    }
}
