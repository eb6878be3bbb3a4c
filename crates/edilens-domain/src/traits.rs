//! Trait definitions for external interactions
//!
//! These traits define the boundary between the pipeline logic and
//! infrastructure. Implementations live in other crates.

/// Trait for remote specification-classification calls
///
/// Implemented by the infrastructure layer (edilens-classify). The
/// response is returned as raw text; callers own the JSON normalization,
/// since real services variously wrap payloads in envelopes or fenced
/// markdown.
pub trait ClassifierProvider {
    /// Error type for classification operations
    type Error;

    /// Submit one chunk's prompts and return the raw response body
    fn classify(&self, system_prompt: &str, user_prompt: &str) -> Result<String, Self::Error>;
}
