//! Configuration for JSON rendering

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a render configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Configuration options for template output
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Spaces per indentation level when pretty printing
    pub indent: usize,

    /// Whether to end the document with a newline
    pub trailing_newline: bool,
}

/// TOML structure for deserializing config files
#[derive(Deserialize)]
struct TomlConfig {
    output: Option<RenderConfig>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pretty_print: true,
            indent: 2,
            trailing_newline: true,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    ///
    /// Settings live under an `[output]` table; missing keys keep defaults.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        Ok(parsed.output.unwrap_or_default())
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the indentation width
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set whether output ends with a newline
    pub fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }
}
