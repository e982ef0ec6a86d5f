//! Serde models for the Keyman touch-layout document.
//!
//! These mirror the JSON schema KeymanWeb consumes. Field names and value
//! types are part of the contract; note that `width` and `pad` must be
//! decimal strings, not numbers, or KeymanWeb renders the layout wrong.

use serde::{Deserialize, Serialize};

/// Key presentation classes understood by KeymanWeb, serialized as
/// their numeric string codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyShape {
    /// Ordinary key.
    #[serde(rename = "0")]
    Normal,
    /// Deemphasized function key such as backspace or enter.
    #[serde(rename = "1")]
    Special,
    /// Highlighted key.
    #[serde(rename = "2")]
    Active,
    /// Dead key.
    #[serde(rename = "8")]
    Dead,
    /// Blank, non-interactive placeholder.
    #[serde(rename = "9")]
    Blank,
    /// Invisible spacer the size of a key.
    #[serde(rename = "10")]
    Spacer,
}

/// A pop-up key shown on long press.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubKey {
    /// Key identifier, `U_XXXX` or a `K_*` virtual key.
    pub id: String,
    /// Glyph shown on the key cap.
    pub text: String,
    /// Modifier layer the identifier is interpreted under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
}

impl SubKey {
    /// A pop-up key with no modifier layer.
    #[must_use]
    pub fn plain(id: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            layer: None,
        }
    }

    /// A pop-up key interpreted under a modifier layer.
    #[must_use]
    pub fn layered(id: &str, text: &str, layer: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            layer: Some(layer.to_string()),
        }
    }
}

/// One key position in a layer row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutKey {
    /// Key identifier, `U_XXXX` or a `K_*` virtual key.
    pub id: String,
    /// Glyph or `*Label*` shown on the key cap.
    pub text: String,
    /// Presentation class; absent means normal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sp: Option<KeyShape>,
    /// Display width as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// Leading padding as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pad: Option<String>,
    /// Layer to switch to after this key is pressed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nextlayer: Option<String>,
    /// Long-press pop-up keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sk: Option<Vec<SubKey>>,
    /// Modifier layer the identifier is interpreted under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
}

impl LayoutKey {
    /// Placeholder for a syllable that does not exist in the syllabary.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            sp: Some(KeyShape::Blank),
            ..Self::default()
        }
    }
}

/// A horizontal row of keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutRow {
    /// One-based row number.
    pub id: usize,
    /// Keys from left to right.
    pub key: Vec<LayoutKey>,
}

/// A named layer of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutLayer {
    /// Layer identifier referenced by `nextlayer` transitions.
    pub id: String,
    /// Rows from top to bottom.
    pub row: Vec<LayoutRow>,
}

/// The phone platform section of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneLayout {
    /// Font stack for key caps.
    pub font: String,
    /// All layers, base layer first.
    pub layer: Vec<LayoutLayer>,
    /// Whether to show underlying key caps on top of the touch caps.
    #[serde(rename = "displayUnderlying")]
    pub display_underlying: bool,
}

/// Top-level touch-layout document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouchLayout {
    /// The only platform this keyboard targets.
    pub phone: PhoneLayout,
}
