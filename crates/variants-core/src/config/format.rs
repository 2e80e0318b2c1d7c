//! Format-agnostic configuration parsing
//!
//! The engines never touch the filesystem; callers hand over configuration
//! text and say which format it is in.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Supported configuration text formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from a file extension:
    /// - `toml` -> TOML
    /// - `json` -> JSON
    /// - `yaml`, `yml` -> YAML
    pub fn from_extension(extension: &str) -> Result<Self> {
        match extension.trim_start_matches('.').to_lowercase().as_str() {
            "toml" => Ok(ConfigFormat::Toml),
            "json" => Ok(ConfigFormat::Json),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    /// Parse `content` in this format.
    pub fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T> {
        let parsed: std::result::Result<T, String> = match self {
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| Error::ConfigParse {
            format: self.to_string(),
            message,
        })
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::Toml => write!(f, "TOML"),
            ConfigFormat::Json => write!(f, "JSON"),
            ConfigFormat::Yaml => write!(f, "YAML"),
        }
    }
}

/// Parse configuration text in the given format.
pub fn parse_config<T: DeserializeOwned>(format: ConfigFormat, content: &str) -> Result<T> {
    format.parse(content)
}
