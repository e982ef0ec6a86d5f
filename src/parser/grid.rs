//! Parser for the bracketed key grid.
//!
//! The physical keyboard is written as lines of `[ label ]` cells. Every
//! label is classified here, up front, so the later passes can never
//! meet a key they do not understand.

use crate::constants::{COMBINING_CONSONANTS, GLIDE, VOWELS};
use crate::error::{Error, Result};
use crate::generator::resolver::setting_for;
use crate::models::{KeyKind, KeySpec};
use crate::syllabics::SyllabicTable;
use regex::Regex;

/// Matches one bracketed cell and captures its label.
const CELL_PATTERN: &str = r"\[\s*(\S+)\s*\]";

/// Classification probes in priority order, most specific first.
///
/// The order is load-bearing: the glide must win over the combining
/// consonants, and named keys must win over the table fallback. Keep
/// additions below the probe they must lose to.
pub const CLASSIFIERS: [(fn(&str) -> bool, KeyKind); 5] = [
    (is_glide, KeyKind::Glide),
    (is_combining_consonant, KeyKind::CombiningConsonant),
    (is_vowel, KeyKind::Vowel),
    (is_punctuation, KeyKind::Punctuation),
    (is_functional, KeyKind::Functional),
];

/// Parses the grid into rows of classified key specs.
///
/// # Errors
///
/// Returns [`Error::UnknownKeyLabel`] for any label that no probe
/// accepts and the table does not contain.
pub fn parse_grid(grid: &str, table: &SyllabicTable) -> Result<Vec<Vec<KeySpec>>> {
    let cell = Regex::new(CELL_PATTERN)?;
    let mut rows = Vec::new();

    for (row_index, line) in grid
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
    {
        let mut row = Vec::new();
        for (column_index, captures) in cell.captures_iter(line).enumerate() {
            let label = &captures[1];
            let kind = classify(label, table).ok_or_else(|| Error::UnknownKeyLabel {
                label: label.to_string(),
                row: row_index + 1,
                column: column_index + 1,
            })?;
            row.push(KeySpec {
                label: label.to_string(),
                kind,
            });
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Assigns the behavior class for a grid label, first probe wins.
/// Labels that fail every probe fall back to a table lookup.
#[must_use]
pub fn classify(label: &str, table: &SyllabicTable) -> Option<KeyKind> {
    for (matches, kind) in CLASSIFIERS {
        if matches(label) {
            return Some(kind);
        }
    }
    table.contains(label).then_some(KeyKind::Plain)
}

fn is_glide(label: &str) -> bool {
    single_char(label) == Some(GLIDE)
}

fn is_combining_consonant(label: &str) -> bool {
    single_char(label).is_some_and(|c| COMBINING_CONSONANTS.contains(&c))
}

fn is_vowel(label: &str) -> bool {
    single_char(label).is_some_and(|c| VOWELS.contains(&c))
}

fn is_punctuation(label: &str) -> bool {
    label == "."
}

fn is_functional(label: &str) -> bool {
    setting_for(label).is_some()
}

fn single_char(label: &str) -> Option<char> {
    let mut chars = label.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
