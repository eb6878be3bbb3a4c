//! Error types for the specification analyzer

use thiserror::Error;

/// Errors that can occur during specification analysis
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// No candidate specification lines survived filtering
    ///
    /// Distinct from an empty success: it usually means the heuristic
    /// failed to match the document's formatting.
    #[error("No specification lines found in document text")]
    NoSpecLines,

    /// Text exceeds maximum length
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// Classifier task error (join failure, not a per-chunk service error)
    #[error("Classifier error: {0}")]
    Classifier(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl From<serde_json::Error> for AnalyzerError {
    fn from(e: serde_json::Error) -> Self {
        AnalyzerError::JsonParse(e.to_string())
    }
}
