//! Key specifications and layer-composition modes.

use crate::constants::{DEFAULT_LAYER, GLIDE};
use std::fmt;

/// How a grid label behaves when rendered into layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Looked up in the table as-is.
    Plain,
    /// Completes a syllable according to the active mode and consonant.
    Vowel,
    /// Consonant that opens its own vowel layer.
    CombiningConsonant,
    /// The glide `w`, with mode-dependent transitions.
    Glide,
    /// The syllabics full stop with its punctuation pop-up.
    Punctuation,
    /// Fixed-function key such as space, backspace, or enter.
    Functional,
}

/// A single key slot parsed from the layout grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpec {
    /// Label as written in the grid.
    pub label: String,
    /// Behavior class assigned by the classifier.
    pub kind: KeyKind,
}

impl KeySpec {
    /// The label as a single character, when it is one.
    #[must_use]
    pub fn single_char(&self) -> Option<char> {
        let mut chars = self.label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

/// Layer-composition mode: whether syllables on the layer carry the
/// glide between consonant and vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Plain consonant-vowel composition.
    Cv,
    /// Labialized consonant-glide-vowel composition.
    Cwv,
}

impl Mode {
    /// Both modes, in layer iteration order.
    pub const ALL: [Mode; 2] = [Mode::Cv, Mode::Cwv];

    /// Spells the SRO string a vowel press produces in this mode.
    #[must_use]
    pub fn compose_sro(self, consonant: Option<char>, vowel: char) -> String {
        let mut sro = String::new();
        if let Some(c) = consonant {
            sro.push(c);
        }
        if self == Mode::Cwv {
            sro.push(GLIDE);
        }
        sro.push(vowel);
        sro
    }

    /// Identifier of this mode's layer under the given active consonant.
    ///
    /// The pair of no consonant and plain mode is the base layer and
    /// keeps its distinguished name.
    #[must_use]
    pub fn layer_id(self, consonant: Option<char>) -> String {
        match (consonant, self) {
            (None, Mode::Cv) => DEFAULT_LAYER.to_string(),
            (None, Mode::Cwv) => format!("{GLIDE}V"),
            (Some(c), Mode::Cv) => format!("{c}V"),
            (Some(c), Mode::Cwv) => format!("{c}{GLIDE}V"),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Cv => write!(f, "CV"),
            Mode::Cwv => write!(f, "CwV"),
        }
    }
}
