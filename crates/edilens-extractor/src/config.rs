//! Configuration for the specification analyzer

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the SpecAnalyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Filtered lines per classification chunk
    pub chunk_size: usize,

    /// Maximum time for a single chunk classification call (seconds)
    pub classify_timeout_secs: u64,

    /// Maximum input text length (characters)
    pub max_text_length: usize,

    /// Cap on filtered lines carried into classification
    pub max_filtered_lines: usize,
}

impl AnalyzerConfig {
    /// Get the per-chunk classification timeout as a Duration
    pub fn classify_timeout(&self) -> Duration {
        Duration::from_secs(self.classify_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.chunk_size == 0 {
            return Err("chunk_size must be greater than 0".to_string());
        }
        if self.classify_timeout_secs == 0 {
            return Err("classify_timeout_secs must be greater than 0".to_string());
        }
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        if self.max_filtered_lines == 0 {
            return Err("max_filtered_lines must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Sample preset: smaller chunks for demo and smoke-test paths
    pub fn sample() -> Self {
        Self {
            chunk_size: 3,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for AnalyzerConfig {
    /// Production defaults: chunks of 5 lines, 30 second call timeout
    fn default() -> Self {
        Self {
            chunk_size: 5,
            classify_timeout_secs: 30,
            max_text_length: 200_000,
            max_filtered_lines: 2_000,
        }
    }
}
