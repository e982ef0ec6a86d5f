//! Syllabigen Library
//!
//! This library generates the static artifacts for the Plains Cree
//! syllabics touch keyboard: the KeymanWeb touch layout document and
//! the .kmn rule source that drives syllable composition and
//! backspace decomposition.

// Module declarations
pub mod cli;
pub mod constants;
pub mod error;
pub mod generator;
pub mod models;
pub mod parser;
pub mod syllabics;

pub use error::{Error, Result};
