//! Data models for keys, layer modes, and the touch-layout document.

pub mod key;
pub mod touch_layout;

// Re-export all model types
pub use key::{KeyKind, KeySpec, Mode};
pub use touch_layout::{KeyShape, LayoutKey, LayoutLayer, LayoutRow, PhoneLayout, SubKey, TouchLayout};
