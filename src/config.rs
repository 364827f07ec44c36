//! TOML configuration supplying field values
//!
//! Keys use the same names templates reference:
//!
//! ```toml
//! commit_number = "1432"
//! version = "0.3.0"
//! use_mdfile_as_mainpage = true
//! input = ["include", "src"]
//! example_path = ["test"]
//! strip_from_path = ["include"]
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Field values for a [`RenderContext`](crate::RenderContext)
///
/// Every key is optional; unset keys leave the context's value untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DoxyfileConfig {
    pub commit_number: Option<String>,
    pub version: Option<String>,
    pub use_mdfile_as_mainpage: Option<bool>,
    pub input: Option<Vec<String>>,
    pub example_path: Option<Vec<String>>,
    pub strip_from_path: Option<Vec<String>>,
}

impl DoxyfileConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Layer `other` on top of this configuration; keys set in `other` win
    pub fn merge(mut self, other: DoxyfileConfig) -> Self {
        self.commit_number = other.commit_number.or(self.commit_number);
        self.version = other.version.or(self.version);
        self.use_mdfile_as_mainpage = other.use_mdfile_as_mainpage.or(self.use_mdfile_as_mainpage);
        self.input = other.input.or(self.input);
        self.example_path = other.example_path.or(self.example_path);
        self.strip_from_path = other.strip_from_path.or(self.strip_from_path);
        self
    }

    /// Set the commit number
    pub fn with_commit_number(mut self, commit_number: impl Into<String>) -> Self {
        self.commit_number = Some(commit_number.into());
        self
    }

    /// Set the version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the mainpage flag
    pub fn with_use_mdfile_as_mainpage(mut self, flag: bool) -> Self {
        self.use_mdfile_as_mainpage = Some(flag);
        self
    }

    /// Set the input paths
    pub fn with_input(mut self, paths: Vec<String>) -> Self {
        self.input = Some(paths);
        self
    }

    /// Set the example paths
    pub fn with_example_path(mut self, paths: Vec<String>) -> Self {
        self.example_path = Some(paths);
        self
    }

    /// Set the path prefixes stripped from file names
    pub fn with_strip_from_path(mut self, paths: Vec<String>) -> Self {
        self.strip_from_path = Some(paths);
        self
    }
}
