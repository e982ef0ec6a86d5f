//! Shared plumbing for the CLI commands.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::syllabics::SyllabicTable;

/// Loads the syllabics table from an override path, or falls back to
/// the embedded copy.
pub fn load_table(path: Option<&Path>) -> Result<SyllabicTable> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read syllabics table: {}", path.display()))?;
            let table = SyllabicTable::from_tsv(&text)
                .with_context(|| format!("Failed to parse syllabics table: {}", path.display()))?;
            Ok(table)
        }
        None => SyllabicTable::embedded().context("Failed to parse the embedded syllabics table"),
    }
}

/// Writes a fully rendered artifact to the chosen destination.
///
/// With no path the artifact goes to standard output as UTF-8 bytes.
/// With a path the content lands in a temporary sibling first and is
/// renamed over the destination, so a failed run never leaves a
/// truncated file behind.
pub fn write_artifact(outfile: Option<&Path>, content: &str) -> Result<()> {
    match outfile {
        Some(path) => atomic_write(path, content),
        None => std::io::stdout()
            .lock()
            .write_all(content.as_bytes())
            .context("Failed to write to standard output"),
    }
}

/// Performs an atomic file write using the temp file + rename pattern.
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("tmp");

    std::fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}
