//! Request and response types for specification analysis

use edilens_domain::{RequirementRecord, SegmentTag};
use std::collections::BTreeMap;

/// Requirement records keyed by segment tag
pub type RequirementMap = BTreeMap<SegmentTag, RequirementRecord>;

/// Request to analyze specification text
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Plain document text (page breaks flattened to newlines)
    pub text: String,

    /// Source identifier (file name or user-provided)
    pub source_id: String,
}

/// Result of an analysis run
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Merged requirement records (local heuristic + remote overlay)
    pub requirements: RequirementMap,

    /// Number of candidate lines that survived filtering
    pub filtered_line_count: usize,

    /// Number of chunks sent to the remote classifier
    pub chunks_processed: usize,

    /// Number of chunks whose classification failed and contributed nothing
    pub chunks_failed: usize,

    /// Metadata about the run
    pub metadata: AnalysisMetadata,
}

/// Metadata about an analysis run
#[derive(Debug, Clone)]
pub struct AnalysisMetadata {
    /// Source identifier
    pub source_id: String,

    /// Timestamp when the analysis ran (seconds since Unix epoch)
    pub timestamp: u64,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}
