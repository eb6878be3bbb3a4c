//! Core analyzer implementation - the chunked delegation pipeline

use crate::chunking::LineChunker;
use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::filter::filter_spec_lines;
use crate::heuristic::build_local_requirements;
use crate::merge::{merge_remote_results, ChunkOutcome};
use crate::prompt::ClassifyPrompt;
use crate::types::{AnalysisMetadata, AnalysisRequest, AnalysisResult};
use edilens_domain::traits::ClassifierProvider;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// The SpecAnalyzer turns document text into a merged requirement map
///
/// It runs the local heuristic extractor as the base, delegates filtered
/// lines to the remote classifier chunk by chunk, and overlays the
/// validated remote results. Chunk calls run sequentially; chunk counts
/// are small, so total latency stays linear and bounded by the per-call
/// timeout.
pub struct SpecAnalyzer<C>
where
    C: ClassifierProvider,
{
    provider: Arc<C>,
    config: AnalyzerConfig,
}

impl<C> SpecAnalyzer<C>
where
    C: ClassifierProvider + Send + Sync + 'static,
    C::Error: std::fmt::Display,
{
    /// Create a new analyzer
    pub fn new(provider: C, config: AnalyzerConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            config,
        }
    }

    /// Analyze specification text with remote classification
    ///
    /// # Errors
    ///
    /// Fails on over-length input and when filtering yields zero
    /// candidate lines. Per-chunk classification failures are not errors;
    /// those chunks simply contribute nothing to the merge.
    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, AnalyzerError> {
        let start_time = SystemTime::now();

        if request.text.len() > self.config.max_text_length {
            return Err(AnalyzerError::TextTooLong(
                request.text.len(),
                self.config.max_text_length,
            ));
        }

        info!(
            "Starting analysis for source '{}', text length {}",
            request.source_id,
            request.text.len()
        );

        let filtered = self.filtered_lines(&request.text)?;
        info!("{} candidate specification lines", filtered.len());

        let local = build_local_requirements(&filtered);
        debug!("Local heuristic produced {} records", local.len());

        let chunks = LineChunker::new(self.config.chunk_size).chunk(&filtered);
        info!("Classifying {} chunks sequentially", chunks.len());

        let mut outcomes = Vec::with_capacity(chunks.len());
        for (idx, chunk) in chunks.iter().enumerate() {
            debug!("Classifying chunk {}/{}", idx + 1, chunks.len());
            let outcome = self.classify_chunk(chunk.clone()).await?;
            if let ChunkOutcome::Failed(reason) = &outcome {
                warn!("Chunk {}/{} failed: {}", idx + 1, chunks.len(), reason);
            }
            outcomes.push(outcome);
        }

        let chunks_failed = outcomes
            .iter()
            .filter(|o| matches!(o, ChunkOutcome::Failed(_)))
            .count();

        let requirements = merge_remote_results(local, &outcomes);

        let processing_time_ms = start_time
            .elapsed()
            .unwrap_or(Duration::from_secs(0))
            .as_millis() as u64;

        info!(
            "Analysis complete: {} records, {}/{} chunks failed",
            requirements.len(),
            chunks_failed,
            outcomes.len()
        );

        Ok(AnalysisResult {
            requirements,
            filtered_line_count: filtered.len(),
            chunks_processed: outcomes.len(),
            chunks_failed,
            metadata: self.metadata(&request.source_id, processing_time_ms),
        })
    }

    /// Analyze with the local heuristic only, no remote calls
    ///
    /// The same pipeline minus chunk delegation; useful when the
    /// classifier endpoint is unreachable or deliberately skipped.
    pub fn analyze_offline(&self, request: AnalysisRequest) -> Result<AnalysisResult, AnalyzerError> {
        let start_time = SystemTime::now();

        if request.text.len() > self.config.max_text_length {
            return Err(AnalyzerError::TextTooLong(
                request.text.len(),
                self.config.max_text_length,
            ));
        }

        let filtered = self.filtered_lines(&request.text)?;

        let requirements = build_local_requirements(&filtered);

        let processing_time_ms = start_time
            .elapsed()
            .unwrap_or(Duration::from_secs(0))
            .as_millis() as u64;

        Ok(AnalysisResult {
            requirements,
            filtered_line_count: filtered.len(),
            chunks_processed: 0,
            chunks_failed: 0,
            metadata: self.metadata(&request.source_id, processing_time_ms),
        })
    }

    /// Filter the text and apply the filtered-line cap.
    fn filtered_lines(&self, text: &str) -> Result<Vec<String>, AnalyzerError> {
        let mut filtered = filter_spec_lines(text);
        if filtered.is_empty() {
            return Err(AnalyzerError::NoSpecLines);
        }
        if filtered.len() > self.config.max_filtered_lines {
            warn!(
                "Truncating {} filtered lines to cap {}",
                filtered.len(),
                self.config.max_filtered_lines
            );
            filtered.truncate(self.config.max_filtered_lines);
        }
        Ok(filtered)
    }

    /// Classify one chunk, converting every failure mode into an outcome
    async fn classify_chunk(&self, lines: Vec<String>) -> Result<ChunkOutcome, AnalyzerError> {
        let provider = Arc::clone(&self.provider);
        let prompt = ClassifyPrompt::new(lines);
        let system_prompt = prompt.system_prompt().to_string();
        let user_prompt = prompt.build();

        // The provider trait is sync; run it off the async executor
        let call = tokio::task::spawn_blocking(move || {
            provider
                .classify(&system_prompt, &user_prompt)
                .map_err(|e| e.to_string())
        });

        let outcome = match timeout(self.config.classify_timeout(), call).await {
            Err(_) => ChunkOutcome::Failed("classification timed out".to_string()),
            Ok(join_result) => {
                let call_result =
                    join_result.map_err(|e| AnalyzerError::Classifier(format!("Join error: {}", e)))?;
                match call_result {
                    Err(reason) => ChunkOutcome::Failed(reason),
                    Ok(body) => match serde_json::from_str::<Value>(&body) {
                        Ok(value) => ChunkOutcome::Classified(value),
                        Err(e) => ChunkOutcome::Failed(format!("unparseable body: {}", e)),
                    },
                }
            }
        };

        Ok(outcome)
    }

    fn metadata(&self, source_id: &str, processing_time_ms: u64) -> AnalysisMetadata {
        AnalysisMetadata {
            source_id: source_id.to_string(),
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or(Duration::from_secs(0))
                .as_secs(),
            processing_time_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edilens_classify::MockProvider;
    use edilens_domain::{SegmentTag, X12Requirement};

    fn analyzer_with(response: &str) -> SpecAnalyzer<MockProvider> {
        SpecAnalyzer::new(MockProvider::new(response), AnalyzerConfig::default())
    }

    fn request(text: &str) -> AnalysisRequest {
        AnalysisRequest {
            text: text.to_string(),
            source_id: "test".to_string(),
        }
    }

    #[tokio::test]
    async fn test_no_spec_lines_is_distinct_error() {
        let analyzer = analyzer_with("{}");
        let result = analyzer.analyze(request("plain prose\nno tables here")).await;
        assert!(matches!(result, Err(AnalyzerError::NoSpecLines)));
    }

    #[tokio::test]
    async fn test_text_too_long() {
        let analyzer = SpecAnalyzer::new(
            MockProvider::new("{}"),
            AnalyzerConfig {
                max_text_length: 10,
                ..AnalyzerConfig::default()
            },
        );
        let result = analyzer.analyze(request(&"x".repeat(100))).await;
        assert!(matches!(result, Err(AnalyzerError::TextTooLong(_, _))));
    }

    #[tokio::test]
    async fn test_remote_overrides_local_end_to_end() {
        let analyzer = analyzer_with(r#"{"ST": {"x12_requirement": "mandatory"}}"#);

        // Local sees O -> optional; the remote result must win
        let result = analyzer.analyze(request("ST O 1/1 Used")).await.unwrap();
        assert_eq!(
            result.requirements[&SegmentTag::St].x12_requirement,
            Some(X12Requirement::Mandatory)
        );
        assert_eq!(result.chunks_processed, 1);
        assert_eq!(result.chunks_failed, 0);
    }

    #[tokio::test]
    async fn test_unparseable_body_degrades_to_local() {
        let analyzer = analyzer_with("not json at all");

        let result = analyzer.analyze(request("ST O 1/1 Used")).await.unwrap();
        assert_eq!(result.chunks_failed, 1);
        assert_eq!(
            result.requirements[&SegmentTag::St].x12_requirement,
            Some(X12Requirement::Optional)
        );
    }

    #[tokio::test]
    async fn test_filtered_line_cap_truncates() {
        let analyzer = SpecAnalyzer::new(
            MockProvider::new("{}"),
            AnalyzerConfig {
                max_filtered_lines: 2,
                chunk_size: 2,
                ..AnalyzerConfig::default()
            },
        );

        let text = "ST M 1/1 Used\nBAK M 1/1 Used\nPO1 O 1/100 Used\nCTT M 1/1 Used";
        let result = analyzer.analyze(request(text)).await.unwrap();

        assert_eq!(result.filtered_line_count, 2);
        assert_eq!(result.chunks_processed, 1);
    }

    #[tokio::test]
    async fn test_offline_skips_provider() {
        let provider = MockProvider::new("{}");
        let handle = provider.clone();
        let analyzer = SpecAnalyzer::new(provider, AnalyzerConfig::default());

        let result = analyzer.analyze_offline(request("ST M 1/1 Must Use")).unwrap();
        assert_eq!(result.chunks_processed, 0);
        assert!(result.requirements.contains_key(&SegmentTag::St));
        assert_eq!(handle.call_count(), 0);
    }
}
