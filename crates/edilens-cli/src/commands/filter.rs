//! Filter command implementation.

use crate::cli::FilterArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use edilens_extractor::filter_report;
use std::fs;

/// Execute the filter command.
pub async fn execute_filter(args: FilterArgs, formatter: &Formatter) -> Result<()> {
    let text = fs::read_to_string(&args.spec)?;
    if text.trim().is_empty() {
        return Err(CliError::InvalidInput(format!(
            "Specification file '{}' is empty",
            args.spec.display()
        )));
    }

    let report = filter_report(&text);
    println!("{}", formatter.format_filter_report(&report)?);

    Ok(())
}
