//! Edilens Classifier Provider Layer
//!
//! Pluggable classification service implementations.
//!
//! # Architecture
//!
//! This crate provides implementations of the `ClassifierProvider` trait
//! from `edilens-domain`. The remote classification service is an opaque
//! collaborator reachable over HTTP; only the request/response contract
//! matters here.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `RemoteProvider`: HTTP integration with the classification endpoint
//!
//! # Examples
//!
//! ```
//! use edilens_classify::MockProvider;
//! use edilens_domain::traits::ClassifierProvider;
//!
//! let provider = MockProvider::new("{\"ST\": {\"x12_requirement\": \"mandatory\"}}");
//! let result = provider.classify("system", "user").unwrap();
//! assert!(result.contains("mandatory"));
//! ```

#![warn(missing_docs)]

pub mod remote;

use edilens_domain::traits::ClassifierProvider as ClassifierProviderTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use remote::RemoteProvider;

/// Errors that can occur during classification calls
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Non-success HTTP status from the service
    #[error("Service returned HTTP {0}")]
    Status(u16),

    /// Generic error
    #[error("Classify error: {0}")]
    Other(String),
}

/// Mock classification provider for deterministic testing
///
/// Returns pre-configured responses without any network calls. Specific
/// responses are keyed by user prompt; everything else gets the default.
///
/// # Examples
///
/// ```
/// use edilens_classify::MockProvider;
/// use edilens_domain::traits::ClassifierProvider;
///
/// let mut provider = MockProvider::new("{}");
/// provider.add_response("chunk one", "{\"ST\": {}}");
/// assert_eq!(provider.classify("sys", "chunk one").unwrap(), "{\"ST\": {}}");
/// assert_eq!(provider.classify("sys", "anything else").unwrap(), "{}");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response keyed by user prompt
    pub fn add_response(&mut self, user_prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(user_prompt.into(), response.into());
    }

    /// Configure a specific user prompt to return an error
    pub fn add_error(&mut self, user_prompt: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(user_prompt.into(), "ERROR".to_string());
    }

    /// Get the number of times classify was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("{}")
    }
}

impl ClassifierProviderTrait for MockProvider {
    type Error = ClassifyError;

    fn classify(&self, _system_prompt: &str, user_prompt: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(user_prompt) {
            if response == "ERROR" {
                return Err(ClassifyError::Other("Mock error".to_string()));
            }
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_default() {
        let provider = MockProvider::new("fixed");
        assert_eq!(provider.classify("s", "anything").unwrap(), "fixed");
    }

    #[test]
    fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");

        assert_eq!(provider.classify("s", "hello").unwrap(), "world");
        assert_eq!(provider.classify("s", "unknown").unwrap(), "{}");
    }

    #[test]
    fn test_mock_provider_call_count() {
        let provider = MockProvider::new("x");

        assert_eq!(provider.call_count(), 0);
        provider.classify("s", "a").unwrap();
        provider.classify("s", "b").unwrap();
        assert_eq!(provider.call_count(), 2);

        provider.reset_call_count();
        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad chunk");

        let result = provider.classify("s", "bad chunk");
        assert!(matches!(result, Err(ClassifyError::Other(_))));
    }

    #[test]
    fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("x");
        let provider2 = provider1.clone();

        provider1.classify("s", "p").unwrap();

        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }
}
