//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use edilens_classify::RemoteProvider;
use edilens_extractor::{AnalysisRequest, AnalyzerConfig, SpecAnalyzer};
use edilens_report::build_cross_reference;
use edilens_store::ArtifactStore;
use std::fs;
use std::time::Duration;

/// Execute the analyze command.
pub async fn execute_analyze(
    args: AnalyzeArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let text = fs::read_to_string(&args.spec)?;
    if text.trim().is_empty() {
        return Err(CliError::InvalidInput(format!(
            "Specification file '{}' is empty",
            args.spec.display()
        )));
    }

    let analyzer_config = analyzer_config(args.chunk_size, config)?;
    let endpoint = args
        .endpoint
        .unwrap_or_else(|| config.classifier.endpoint.clone());
    let provider = RemoteProvider::with_timeout(
        endpoint,
        Duration::from_secs(config.classifier.timeout_secs),
    );
    let analyzer = SpecAnalyzer::new(provider, analyzer_config);

    let source_id = args
        .spec
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.spec.display().to_string());
    let request = AnalysisRequest { text, source_id };

    let result = if args.offline {
        analyzer.analyze_offline(request)?
    } else {
        analyzer.analyze(request).await?
    };

    println!("{}", formatter.format_analysis(&result)?);

    // Cross-reference against an uploaded transaction when one is given
    if let Some(edi_path) = args.edi {
        let edi_text = fs::read_to_string(&edi_path)?;

        let mut store = ArtifactStore::new();
        let handle = store.put(edi_text)?;
        let artifact = store.get(handle)?;

        let observed = edilens_decoder::present_tags(&artifact.payload);
        let rows = build_cross_reference(&result.requirements, &observed);

        println!("{}", formatter.format_cross_reference(&rows)?);
    }

    Ok(())
}

/// Build the analyzer configuration from the CLI override and saved config.
fn analyzer_config(chunk_size: Option<usize>, config: &Config) -> Result<AnalyzerConfig> {
    let analyzer_config = AnalyzerConfig {
        chunk_size: chunk_size.unwrap_or(config.classifier.chunk_size),
        classify_timeout_secs: config.classifier.timeout_secs,
        ..AnalyzerConfig::default()
    };
    analyzer_config.validate().map_err(CliError::Config)?;
    Ok(analyzer_config)
}
