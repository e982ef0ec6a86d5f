//! Behavior resolution: what one key does on one layer.
//!
//! A layer is identified by its mode and active consonant; every key
//! spec resolves against that pair into the wire form the touch layout
//! carries. The match on [`KeyKind`] is exhaustive, so an unhandled
//! kind is a compile error rather than a runtime surprise.

use crate::constants::{
    ALWAYS_RETURN_TO_DEFAULT, DEFAULT_LAYER, GLIDE, KEY_WIDTH, PADDING_BETWEEN_KEYS,
};
use crate::error::{Error, Result};
use crate::models::{KeyKind, KeyShape, KeySpec, LayoutKey, Mode, SubKey};
use crate::syllabics::SyllabicTable;

/// Fixed rendering of a functional key.
pub struct Setting {
    label: &'static str,
    id: &'static str,
    text: &'static str,
    /// Key slots occupied; 1 is an ordinary key.
    slots: u32,
    nextlayer: Option<&'static str>,
    shape: KeyShape,
}

/// The functional keys, by grid label.
///
/// The erase key carries no transition here; its transition depends on
/// the layer and is filled in during resolution.
const SETTINGS: [Setting; 7] = [
    Setting {
        label: "SP",
        id: "K_SPACE",
        text: "",
        slots: 4,
        nextlayer: Some(DEFAULT_LAYER),
        shape: KeyShape::Normal,
    },
    Setting {
        label: "BS",
        id: "K_BKSP",
        text: "*BkSp*",
        slots: 1,
        nextlayer: None,
        shape: KeyShape::Special,
    },
    Setting {
        label: "123",
        id: "K_NUMLOCK",
        text: "*123*",
        slots: 1,
        nextlayer: Some("numeric"),
        shape: KeyShape::Special,
    },
    Setting {
        label: "NNBSP",
        id: "U_202F",
        text: "",
        slots: 2,
        nextlayer: Some(DEFAULT_LAYER),
        shape: KeyShape::Special,
    },
    Setting {
        label: "ABC",
        id: "K_UPPER",
        text: "*ABC*",
        slots: 1,
        nextlayer: Some("latin"),
        shape: KeyShape::Special,
    },
    Setting {
        label: "CR",
        id: "K_ENTER",
        text: "*Enter*",
        slots: 1,
        nextlayer: Some(DEFAULT_LAYER),
        shape: KeyShape::Special,
    },
    Setting {
        label: "MENU",
        id: "K_LOPT",
        text: "*Menu*",
        slots: 1,
        nextlayer: None,
        shape: KeyShape::Special,
    },
];

/// Looks up the fixed rendering for a functional key label.
#[must_use]
pub fn setting_for(label: &str) -> Option<&'static Setting> {
    SETTINGS.iter().find(|setting| setting.label == label)
}

/// Renders one key spec under the given layer context.
pub fn resolve(
    spec: &KeySpec,
    mode: Mode,
    consonant: Option<char>,
    table: &SyllabicTable,
) -> Result<LayoutKey> {
    match spec.kind {
        KeyKind::Plain => plain_key(spec, mode, consonant, table),
        KeyKind::Vowel => vowel_key(spec, mode, consonant, table),
        KeyKind::CombiningConsonant => consonant_key(spec, mode, consonant, table),
        KeyKind::Glide => glide_key(spec, mode, consonant, table),
        KeyKind::Punctuation => Ok(punctuation_key()),
        KeyKind::Functional => functional_key(spec, mode, consonant),
    }
}

/// A key that types its table glyph. Finals in the always-return set
/// additionally end any composition in progress.
fn plain_key(
    spec: &KeySpec,
    mode: Mode,
    consonant: Option<char>,
    table: &SyllabicTable,
) -> Result<LayoutKey> {
    let syllabic = table
        .get(&spec.label)
        .ok_or_else(|| unresolved(spec, mode, consonant))?;
    let nextlayer = ALWAYS_RETURN_TO_DEFAULT
        .contains(&spec.label.as_str())
        .then(|| DEFAULT_LAYER.to_string());
    Ok(LayoutKey {
        id: syllabic.key_code(),
        text: syllabic.cans.clone(),
        nextlayer,
        ..LayoutKey::default()
    })
}

/// A vowel completes the syllable the layer has been building and
/// returns to the base layer.
fn vowel_key(
    spec: &KeySpec,
    mode: Mode,
    consonant: Option<char>,
    table: &SyllabicTable,
) -> Result<LayoutKey> {
    let vowel = spec
        .single_char()
        .ok_or_else(|| unresolved(spec, mode, consonant))?;
    let sro = mode.compose_sro(consonant, vowel);

    match table.get(&sro) {
        Some(syllabic) => {
            let highlighted = consonant.is_some() || sro.starts_with(GLIDE);
            Ok(LayoutKey {
                id: syllabic.key_code(),
                text: syllabic.cans.clone(),
                sp: highlighted.then_some(KeyShape::Active),
                nextlayer: Some(DEFAULT_LAYER.to_string()),
                ..LayoutKey::default()
            })
        }
        // Only the nasal + glide series has gaps in the syllabary.
        None if sro.starts_with("nw") => Ok(LayoutKey::blank()),
        None => Err(unresolved(spec, mode, consonant)),
    }
}

/// A combining consonant acts like its final, then switches to its own
/// vowel layer. It reads as a dead key while that composition is open.
fn consonant_key(
    spec: &KeySpec,
    mode: Mode,
    consonant: Option<char>,
    table: &SyllabicTable,
) -> Result<LayoutKey> {
    let own = spec
        .single_char()
        .ok_or_else(|| unresolved(spec, mode, consonant))?;
    let mut key = plain_key(spec, mode, consonant, table)?;
    key.nextlayer = Some(Mode::Cv.layer_id(Some(own)));
    if consonant == Some(own) {
        key.sp = Some(KeyShape::Dead);
    }
    Ok(key)
}

/// The glide starts a glide-only composition from the base layer,
/// labializes an open consonant composition, and backs out of a
/// labialized layer when pressed again.
fn glide_key(
    spec: &KeySpec,
    mode: Mode,
    consonant: Option<char>,
    table: &SyllabicTable,
) -> Result<LayoutKey> {
    let mut key = plain_key(spec, mode, consonant, table)?;
    match (mode, consonant) {
        (Mode::Cv, None) => {
            key.nextlayer = Some(Mode::Cwv.layer_id(None));
        }
        (Mode::Cv, Some(c)) => {
            key.nextlayer = Some(Mode::Cwv.layer_id(Some(c)));
        }
        (Mode::Cwv, _) => {
            key.nextlayer = Some(DEFAULT_LAYER.to_string());
            key.sp = Some(KeyShape::Dead);
        }
    }
    Ok(key)
}

/// The syllabics full stop, with Latin punctuation on long press.
fn punctuation_key() -> LayoutKey {
    LayoutKey {
        id: "U_166E".to_string(),
        text: "᙮".to_string(),
        nextlayer: Some(DEFAULT_LAYER.to_string()),
        sk: Some(vec![
            SubKey::plain("U_002C", ","),
            SubKey::plain("U_002E", "."),
            SubKey::plain("U_0022", "\""),
            SubKey::plain("U_003F", "?"),
            SubKey::plain("U_0021", "!"),
        ]),
        ..LayoutKey::default()
    }
}

fn functional_key(spec: &KeySpec, mode: Mode, consonant: Option<char>) -> Result<LayoutKey> {
    let setting = setting_for(&spec.label).ok_or_else(|| unresolved(spec, mode, consonant))?;
    let mut key = LayoutKey {
        id: setting.id.to_string(),
        text: setting.text.to_string(),
        sp: Some(setting.shape),
        nextlayer: setting.nextlayer.map(str::to_string),
        ..LayoutKey::default()
    };
    if setting.slots > 1 {
        key.width = Some(effective_width(setting.slots).to_string());
    }
    if spec.label == "BS" {
        key.nextlayer = erase_nextlayer(mode, consonant);
    }
    Ok(key)
}

/// Where the erase key lands: it unwinds one step of the composition
/// the current layer represents.
fn erase_nextlayer(mode: Mode, consonant: Option<char>) -> Option<String> {
    match (mode, consonant) {
        // Base layer: nothing to unwind.
        (Mode::Cv, None) => None,
        // Erasing the final, or the lone glide, reopens the base layer.
        (Mode::Cv, Some(_)) | (Mode::Cwv, None) => Some(DEFAULT_LAYER.to_string()),
        // Erasing the glide leaves a plain consonant composition.
        (Mode::Cwv, Some(c)) => Some(Mode::Cv.layer_id(Some(c))),
    }
}

/// Width of a key spanning `slots` slots, including the padding the
/// extra slots absorb. Excludes this key's own padding.
fn effective_width(slots: u32) -> u32 {
    slots * KEY_WIDTH + (slots - 1) * PADDING_BETWEEN_KEYS
}

fn unresolved(spec: &KeySpec, mode: Mode, consonant: Option<char>) -> Error {
    let consonant = consonant.map_or_else(|| "none".to_string(), |c| format!("'{c}'"));
    Error::UnreachableState {
        context: format!(
            "key '{}' in mode {} with active consonant {}",
            spec.label, mode, consonant
        ),
    }
}
