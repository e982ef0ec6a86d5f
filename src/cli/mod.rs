//! CLI command handlers for syllabigen.
//!
//! Each command owns its clap arguments and an `execute` entry point,
//! so the binary stays a thin dispatcher.

pub mod common;
pub mod kmn;
pub mod touch_layout;

// Re-export types used by main.rs and tests
pub use kmn::KmnArgs;
pub use touch_layout::TouchLayoutArgs;
