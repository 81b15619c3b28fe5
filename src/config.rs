//! Project configuration (avatar.yaml) parsing.
//!
//! The config file sets defaults for the generate command: output
//! directory, edge length, style and font. Command-line flags override it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AvatarError, Result};
use crate::types::Style;

/// Config file name looked up in the working directory.
pub const CONFIG_FILENAME: &str = "avatar.yaml";

/// Default avatar edge length in pixels.
pub const DEFAULT_SIZE: i32 = 500;

/// Configuration loaded from avatar.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory generated avatars are written to.
    pub output: PathBuf,

    /// Edge length in pixels.
    pub size: i32,

    /// Default style.
    pub style: Style,

    /// Font used for the text overlay. System fonts are searched if unset.
    pub font: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from("."),
            size: DEFAULT_SIZE,
            style: Style::default(),
            font: None,
        }
    }
}

impl Config {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AvatarError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| AvatarError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Load `avatar.yaml` from `dir` if present, otherwise use defaults.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            log::debug!("loading config from {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Render the config as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| AvatarError::Parse {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }
}
