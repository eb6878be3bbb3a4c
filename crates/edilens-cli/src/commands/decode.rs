//! Decode command implementation.

use crate::cli::DecodeArgs;
use crate::error::Result;
use crate::output::Formatter;
use edilens_decoder::{decode_elements, decode_transaction, present_tags};
use edilens_store::ArtifactStore;
use std::fs;

/// Execute the decode command.
pub async fn execute_decode(args: DecodeArgs, formatter: &Formatter) -> Result<()> {
    let edi_text = fs::read_to_string(&args.edi)?;

    // Store first so empty uploads get the same rejection as the analyze path
    let mut store = ArtifactStore::new();
    let handle = store.put(edi_text)?;
    let artifact = store.get(handle)?;

    let elements = decode_elements(&artifact.payload);
    let transaction = decode_transaction(&artifact.payload);
    let present = present_tags(&artifact.payload);

    println!(
        "{}",
        formatter.format_transaction(&elements, &transaction, &present)?
    );

    Ok(())
}
