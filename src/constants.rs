//! Orthography and layout constants for the Plains Cree keyboard.

/// Consonants that combine with a vowel into a CV syllable, in layer
/// iteration order.
///
/// The glide is deliberately absent: its layers come from the
/// labialized mode, not from this list.
pub const COMBINING_CONSONANTS: [char; 8] = ['p', 't', 'k', 'c', 'm', 'n', 's', 'y'];

/// Vowels in SRO, short and long.
pub const VOWELS: [char; 7] = ['ê', 'i', 'î', 'o', 'ô', 'a', 'â'];

/// The glide consonant `w`.
pub const GLIDE: char = 'w';

/// Plain keys that always return to the base layer when pressed.
pub const ALWAYS_RETURN_TO_DEFAULT: [&str; 4] = ["hk", "l", "r", "h"];

/// Identifier of the base layer.
pub const DEFAULT_LAYER: &str = "default";

// Keyman allots 100 units per key; the rest of a slot is padding.
/// Horizontal units one key slot occupies.
pub const SLOT_WIDTH: u32 = 115;
/// Units of each slot taken up by padding between keys.
pub const PADDING_BETWEEN_KEYS: u32 = 15;
/// Visible width of a single-slot key.
pub const KEY_WIDTH: u32 = SLOT_WIDTH - PADDING_BETWEEN_KEYS;

/// Font stack requested for the touch layout.
pub const LAYOUT_FONT: &str = "Noto Sans, Gadugi, Euphemia, Euphemia UCAS, Tahoma, sans-serif";

/// Display name of the generated keyboard.
pub const KEYBOARD_NAME: &str = "Plains Cree (Syllabics)";
/// Version of the generated keyboard package.
pub const KEYBOARD_VERSION: &str = "1.0.0";
/// Copyright holder of the generated keyboard.
pub const KEYBOARD_COPYRIGHT: &str = "Copyright © 2019 National Research Council Canada";
/// File name the rule file expects the touch layout under.
pub const TOUCH_LAYOUT_FILE: &str = "nrc_crk_cans.keyman-touch-layout";
/// Stylesheet the rule file can embed.
pub const EMBEDDED_CSS_FILE: &str = "nrc_crk_cans.css";

/// The physical key grid, one bracketed label per key.
///
/// Vowels sit under the right thumb with the most frequent ones on the
/// third column from the right; frequent consonants mirror that on the
/// left. Nasals and glides are adjacent, as are most short/long vowel
/// pairs.
pub const KEY_LAYOUT: &str = "
[  hk ] [  m   ] [ n ] [ y ] [ w ] [ i ] [ î ] [  ô ]
[  l  ] [  p   ] [ k ] [ s ] [ â ] [ a ] [ o ] [  r ]
[ ABC ] [  c   ] [ t ] [  NNBSP  ] [ ê ] [ h ] [ BS ]
[ 123 ] [ MENU ] [         SP          ] [ . ] [ CR ]
";
