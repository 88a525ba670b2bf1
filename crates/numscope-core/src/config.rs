//! Load configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// How the element count of a binary dataset file is determined.
///
/// Elements are always little-endian `i32`, packed without padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framing {
    /// A 4-byte `i32` element count followed by exactly that many elements.
    #[default]
    Counted,
    /// The whole file is elements; the count is the file length / 4.
    Raw,
}

/// Parameters for generating a synthetic dataset.
#[derive(Debug, Clone, Builder, Serialize, Deserialize, PartialEq, Eq)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct SyntheticConfig {
    /// Number of values to generate.
    #[builder(default = "200")]
    #[serde(default = "default_count")]
    pub count: usize,

    /// Smallest value that may be generated (inclusive).
    #[builder(default = "0")]
    #[serde(default)]
    pub min: i32,

    /// Largest value that may be generated (inclusive).
    #[builder(default = "999")]
    #[serde(default = "default_max")]
    pub max: i32,
}

fn default_count() -> usize {
    200
}

fn default_max() -> i32 {
    999
}

impl SyntheticConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        let min = self.min.unwrap_or(0);
        let max = self.max.unwrap_or(999);
        if min > max {
            return Err(format!("min ({min}) must not exceed max ({max})"));
        }
        Ok(())
    }
}

impl SyntheticConfig {
    /// Create a new config builder.
    pub fn builder() -> SyntheticConfigBuilder {
        SyntheticConfigBuilder::default()
    }
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            min: 0,
            max: default_max(),
        }
    }
}

/// Configuration for loading a dataset file.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct LoadConfig {
    /// Path of the binary dataset file.
    pub path: PathBuf,

    /// File framing.
    #[builder(default)]
    #[serde(default)]
    pub framing: Framing,

    /// Generate and write a synthetic dataset when the file does not exist.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub create_if_missing: bool,

    /// Shape of the synthetic dataset used by `create_if_missing`.
    #[builder(default)]
    #[serde(default)]
    pub synthetic: SyntheticConfig,
}

fn default_true() -> bool {
    true
}

impl LoadConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.path {
            Some(ref path) if path.as_os_str().is_empty() => {
                Err("Dataset path cannot be empty".to_string())
            }
            Some(_) => Ok(()),
            None => Err("Dataset path is required".to_string()),
        }
    }
}

impl LoadConfig {
    /// Create a new load config builder.
    pub fn builder() -> LoadConfigBuilder {
        LoadConfigBuilder::default()
    }

    /// Create a simple config for loading a counted file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            framing: Framing::Counted,
            create_if_missing: true,
            synthetic: SyntheticConfig::default(),
        }
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self::new("data.bin")
    }
}
