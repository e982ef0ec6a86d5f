//! Error types for table loading, grid parsing, and key resolution.

use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort artifact generation.
///
/// Generation is all-or-nothing: any of these surfaces before a single
/// byte of output is written.
#[derive(Debug, Error)]
pub enum Error {
    /// Two table rows share the same transliteration.
    #[error("duplicate table entry for transliteration '{sro}'")]
    DuplicateEntry {
        /// The transliteration that appeared twice.
        sro: String,
    },

    /// The table header lacks one of the required columns.
    #[error("table is missing required column '{name}'")]
    MissingColumn {
        /// Name of the absent column.
        name: &'static str,
    },

    /// A table row has fewer fields than the header promises.
    #[error("malformed table row at line {line}")]
    MalformedRow {
        /// One-based line number in the table file.
        line: usize,
    },

    /// A code point field does not parse as decimal or hex.
    #[error("invalid code point '{value}' for table entry '{sro}'")]
    InvalidCodePoint {
        /// Transliteration of the offending row.
        sro: String,
        /// The raw field content.
        value: String,
    },

    /// A grid label is neither a named key nor a table entry.
    #[error("unknown key label '{label}' at row {row}, column {column}")]
    UnknownKeyLabel {
        /// The label as written in the grid.
        label: String,
        /// One-based grid row.
        row: usize,
        /// One-based key position within the row.
        column: usize,
    },

    /// The resolver reached a combination it does not model.
    #[error("unreachable state: {context}")]
    UnreachableState {
        /// Which key, mode, and active consonant triggered this.
        context: String,
    },

    /// A syllable's prefix references a consonant with no bare final.
    #[error("no final form in the table for consonant '{consonant}'")]
    MissingFinal {
        /// The consonant lacking a final.
        consonant: char,
    },

    /// A multi-character syllable that is not consonant + glide + vowel.
    #[error("cannot derive rules for syllable '{sro}'")]
    MalformedSyllable {
        /// Transliteration of the offending entry.
        sro: String,
    },

    /// A tokenizer pattern failed to compile.
    #[error("invalid grid pattern")]
    Pattern(#[from] regex::Error),
}
