//! Edilens CLI - Command-line interface for specification analysis and EDI decoding.

use clap::Parser;
use edilens_cli::commands;
use edilens_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> edilens_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config
    let config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        Command::Analyze(args) => {
            commands::execute_analyze(args, &config, &formatter).await?;
        }
        Command::Decode(args) => {
            commands::execute_decode(args, &formatter).await?;
        }
        Command::Filter(args) => {
            commands::execute_filter(args, &formatter).await?;
        }
        Command::Sample(args) => {
            commands::execute_sample(args, &config, &formatter).await?;
        }
    }

    Ok(())
}
