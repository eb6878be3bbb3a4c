//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Edilens CLI - Extract and cross-check X12 855 segment requirements.
#[derive(Debug, Parser)]
#[command(name = "edilens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (minimal)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a specification document, optionally cross-checking an EDI file
    Analyze(AnalyzeArgs),

    /// Decode an EDI transaction file
    Decode(DecodeArgs),

    /// Show which specification lines the filter selects
    Filter(FilterArgs),

    /// Run the analyzer over built-in sample specification lines
    Sample(SampleArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Specification text file to analyze
    #[arg(short, long)]
    pub spec: PathBuf,

    /// EDI transaction file to cross-reference against the requirements
    #[arg(short, long)]
    pub edi: Option<PathBuf>,

    /// Skip the remote classifier and use the local heuristic only
    #[arg(long)]
    pub offline: bool,

    /// Classification endpoint URL (overrides the configured endpoint)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Filtered lines per classification chunk
    #[arg(long)]
    pub chunk_size: Option<usize>,
}

/// Arguments for the decode command.
#[derive(Debug, Parser)]
pub struct DecodeArgs {
    /// EDI transaction file to decode
    #[arg(short, long)]
    pub edi: PathBuf,
}

/// Arguments for the filter command.
#[derive(Debug, Parser)]
pub struct FilterArgs {
    /// Specification text file to filter
    #[arg(short, long)]
    pub spec: PathBuf,
}

/// Arguments for the sample command.
#[derive(Debug, Parser)]
pub struct SampleArgs {
    /// Skip the remote classifier and use the local heuristic only
    #[arg(long)]
    pub offline: bool,

    /// Classification endpoint URL (overrides the configured endpoint)
    #[arg(long)]
    pub endpoint: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
