//! Keyman rule source generation command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::cli::common;
use crate::generator::{self, KmnOptions};

/// Generate the Keyman rule source
#[derive(Debug, Clone, Args)]
pub struct KmnArgs {
    /// Output file (standard output when omitted)
    #[arg(value_name = "OUTFILE")]
    pub outfile: Option<PathBuf>,

    /// Embed the keyboard stylesheet
    #[arg(long)]
    pub with_css: bool,

    /// Syllabics table to use instead of the embedded one
    #[arg(long, value_name = "FILE")]
    pub table: Option<PathBuf>,
}

impl KmnArgs {
    /// Execute the kmn command
    pub fn execute(&self) -> Result<()> {
        let table = common::load_table(self.table.as_deref())?;
        let options = KmnOptions {
            with_css: self.with_css,
        };
        let source = generator::kmn_source(&table, options)?;

        common::write_artifact(self.outfile.as_deref(), &source)
    }
}
