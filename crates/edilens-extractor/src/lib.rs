//! Edilens Extractor
//!
//! Turns noisy specification text into segment requirement records.
//!
//! # Overview
//!
//! Specification PDFs render requirement tables as loosely-spaced text, so
//! extraction is heuristic: a line filter selects candidate lines, a local
//! pattern-matching pass derives requirement records, and a remote
//! classification service is consulted chunk-by-chunk as a second,
//! semantically stronger source. The merge engine overlays validated
//! remote results on top of the local records.
//!
//! # Architecture
//!
//! ```text
//! Document text → Line Filter → filtered lines
//!                                  ├─ Local Heuristic ──┐
//!                                  └─ Chunks → Remote ──┴─→ Merge → requirement map
//! ```
//!
//! # Example Usage
//!
//! ```
//! use edilens_extractor::{AnalysisRequest, AnalyzerConfig, SpecAnalyzer, SAMPLE_SPEC_LINES};
//! use edilens_classify::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MockProvider::new("{}");
//! let analyzer = SpecAnalyzer::new(provider, AnalyzerConfig::sample());
//!
//! let request = AnalysisRequest {
//!     text: SAMPLE_SPEC_LINES.join("\n"),
//!     source_id: "sample".to_string(),
//! };
//!
//! let result = analyzer.analyze(request).await?;
//! println!("{} segments classified", result.requirements.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod chunking;
mod config;
mod error;
mod filter;
mod heuristic;
mod merge;
mod prompt;
mod types;


pub use analyzer::SpecAnalyzer;
pub use chunking::LineChunker;
pub use config::AnalyzerConfig;
pub use error::AnalyzerError;
pub use filter::{filter_report, filter_spec_lines, FilterReport};
pub use heuristic::build_local_requirements;
pub use merge::{merge_remote_results, ChunkOutcome};
pub use prompt::ClassifyPrompt;
pub use types::{AnalysisMetadata, AnalysisRequest, AnalysisResult, RequirementMap};

/// Sample specification lines for demo and smoke-test runs.
///
/// These mimic the loosely-spaced table text a real 855 specification PDF
/// produces after text extraction.
pub const SAMPLE_SPEC_LINES: [&str; 5] = [
    "ST  M  1/1 Must Use - Transaction Set Header",
    "BAK M 1/1 Used - Beginning Segment",
    "PO1 O 1/100 May Use - Baseline Item Data",
    "ACK O 0/100 Not Used - Line Item Acknowledgment",
    "CTT M 1/1 - Transaction Totals",
];
