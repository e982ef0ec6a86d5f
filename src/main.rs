//! Syllabigen - Plains Cree syllabics keyboard generator
//!
//! This binary renders the touch layout document and the Keyman rule
//! source from the syllabics table and the key grid. Both artifacts
//! are deterministic: the same inputs produce byte-identical output.

use anyhow::Result;
use clap::{Parser, Subcommand};

use syllabigen::cli::{KmnArgs, TouchLayoutArgs};

/// Plains Cree syllabics keyboard generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the touch layout document
    TouchLayout(TouchLayoutArgs),
    /// Generate the Keyman rule source
    Kmn(KmnArgs),
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::TouchLayout(args) => args.execute(),
        Command::Kmn(args) => args.execute(),
    }
}
