//! Artifact generation.
//!
//! The pipeline is a pure function from the syllabics table and the
//! key grid to two artifacts: the touch layout document and the rule
//! source that makes composition and backspace behave.

pub mod alternate;
pub mod kmn;
pub mod layers;
pub mod resolver;

pub use kmn::{kmn_source, KmnOptions};
pub use layers::{enumerate_layers, touch_layout, LayoutOptions};
