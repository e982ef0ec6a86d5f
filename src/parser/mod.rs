//! Parsing of the bracketed key grid.

pub mod grid;

pub use grid::{classify, parse_grid};
