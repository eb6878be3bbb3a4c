//! Remote classification service integration
//!
//! Posts `{system_prompt, user_prompt}` to the configured endpoint and
//! returns the raw response body. Each call is bounded by the client
//! timeout and made exactly once: a failed chunk degrades silently at the
//! merge layer, so retrying here would only add latency for data the
//! local heuristic already covers.

use crate::ClassifyError;
use edilens_domain::traits::ClassifierProvider as ClassifierProviderTrait;
use serde::Serialize;
use std::time::Duration;

/// Default timeout for classification requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP provider for the remote classification service
pub struct RemoteProvider {
    endpoint: String,
    client: reqwest::Client,
}

/// Request body for the classification endpoint
#[derive(Serialize)]
struct ClassifyRequest<'a> {
    system_prompt: &'a str,
    user_prompt: &'a str,
}

impl RemoteProvider {
    /// Create a new provider for the given endpoint with the default timeout.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use edilens_classify::RemoteProvider;
    ///
    /// let provider = RemoteProvider::new("https://classifier.example.com/respond");
    /// ```
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new provider with an explicit request timeout.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client with static configuration");

        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit one chunk's prompts to the service.
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable, the request times
    /// out, the response status is non-2xx, or the body cannot be read.
    pub async fn classify(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ClassifyError> {
        let body = ClassifyRequest {
            system_prompt,
            user_prompt,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClassifyError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifyError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| ClassifyError::InvalidResponse(format!("Failed to read body: {}", e)))
    }
}

impl ClassifierProviderTrait for RemoteProvider {
    type Error = ClassifyError;

    fn classify(&self, system_prompt: &str, user_prompt: &str) -> Result<String, Self::Error> {
        // Blocking wrapper for the async call; the pipeline invokes this
        // through spawn_blocking
        tokio::runtime::Runtime::new()
            .map_err(|e| ClassifyError::Other(format!("Runtime error: {}", e)))?
            .block_on(async { self.classify(system_prompt, user_prompt).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_provider_creation() {
        let provider = RemoteProvider::new("http://localhost:9999/respond");
        assert_eq!(provider.endpoint(), "http://localhost:9999/respond");
    }

    #[test]
    fn test_remote_provider_custom_timeout() {
        let provider =
            RemoteProvider::with_timeout("http://localhost:9999", Duration::from_secs(5));
        assert_eq!(provider.endpoint(), "http://localhost:9999");
    }

    #[tokio::test]
    async fn test_remote_error_on_unreachable_endpoint() {
        let provider = RemoteProvider::with_timeout(
            "http://127.0.0.1:1/respond",
            Duration::from_secs(1),
        );

        let result = provider.classify("system", "user").await;
        assert!(matches!(result, Err(ClassifyError::Communication(_))));
    }
}
