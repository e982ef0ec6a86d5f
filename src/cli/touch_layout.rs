//! Touch layout generation command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::common;
use crate::constants::KEY_LAYOUT;
use crate::generator::{self, LayoutOptions};
use crate::parser;

/// Generate the touch layout document
#[derive(Debug, Clone, Args)]
pub struct TouchLayoutArgs {
    /// Output file (standard output when omitted)
    #[arg(value_name = "OUTFILE")]
    pub outfile: Option<PathBuf>,

    /// Include the Latin and shifted-Latin layers
    #[arg(long)]
    pub with_latin: bool,

    /// Syllabics table to use instead of the embedded one
    #[arg(long, value_name = "FILE")]
    pub table: Option<PathBuf>,
}

impl TouchLayoutArgs {
    /// Execute the touch-layout command
    pub fn execute(&self) -> Result<()> {
        let table = common::load_table(self.table.as_deref())?;
        let grid = parser::parse_grid(KEY_LAYOUT, &table)?;
        let options = LayoutOptions {
            with_latin: self.with_latin,
        };
        let layout = generator::touch_layout(&grid, &table, options)?;

        let mut json = serde_json::to_string_pretty(&layout)
            .context("Failed to serialize the touch layout")?;
        json.push('\n');

        common::write_artifact(self.outfile.as_deref(), &json)
    }
}
