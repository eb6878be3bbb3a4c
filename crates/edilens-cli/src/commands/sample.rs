//! Sample command implementation.
//!
//! Runs the full analysis pipeline over the built-in sample lines. Useful
//! as a smoke test of the classifier endpoint without a real document.

use crate::cli::SampleArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use edilens_classify::RemoteProvider;
use edilens_extractor::{AnalysisRequest, AnalyzerConfig, SpecAnalyzer, SAMPLE_SPEC_LINES};
use std::time::Duration;

/// Execute the sample command.
pub async fn execute_sample(
    args: SampleArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let endpoint = args
        .endpoint
        .unwrap_or_else(|| config.classifier.endpoint.clone());
    let provider = RemoteProvider::with_timeout(
        endpoint,
        Duration::from_secs(config.classifier.timeout_secs),
    );
    let analyzer = SpecAnalyzer::new(provider, AnalyzerConfig::sample());

    let request = AnalysisRequest {
        text: SAMPLE_SPEC_LINES.join("\n"),
        source_id: "sample".to_string(),
    };

    let result = if args.offline {
        analyzer.analyze_offline(request)?
    } else {
        analyzer.analyze(request).await?
    };

    println!("{}", formatter.format_analysis(&result)?);

    Ok(())
}
