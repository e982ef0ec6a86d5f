//! The numeric and Latin layers.
//!
//! These are fixed data rather than renderings of the syllabics grid.
//! The Latin pair is a stock touch QWERTY with a key for returning to
//! syllabics; the "shift" layer id is special-cased by name inside
//! KeymanWeb.

use crate::constants::DEFAULT_LAYER;
use crate::models::{KeyShape, LayoutKey, LayoutLayer, LayoutRow, SubKey};

/// The numeric and symbol layer. Reachable from every other layer, so
/// it is part of every build.
pub fn numeric_layer() -> LayoutLayer {
    LayoutLayer {
        id: "numeric".to_string(),
        row: vec![
            LayoutRow {
                id: 1,
                key: digit_keys(),
            },
            LayoutRow {
                id: 2,
                key: vec![
                    shifted("K_2", "@"),
                    shifted("K_3", "#"),
                    shifted("K_4", "$"),
                    shifted("K_7", "&"),
                    shifted("K_HYPHEN", "_"),
                    key("K_HYPHEN", "-"),
                    LayoutKey {
                        sk: Some(vec![
                            SubKey::plain("K_LBRKT", "["),
                            SubKey::layered("K_COMMA", "<", "shift"),
                            SubKey::layered("K_LBRKT", "{", "shift"),
                        ]),
                        ..shifted("K_9", "(")
                    },
                    LayoutKey {
                        sk: Some(vec![
                            SubKey::plain("K_RBRKT", "]"),
                            SubKey::layered("K_PERIOD", ">", "shift"),
                            SubKey::layered("K_RBRKT", "}", "shift"),
                        ]),
                        ..shifted("K_0", ")")
                    },
                    on_layer("K_EQUAL", "=", "latin"),
                    shifted("K_5", "%"),
                ],
            },
            LayoutRow {
                id: 3,
                key: vec![
                    // KeymanWeb renders an empty width as the default.
                    LayoutKey {
                        width: Some(String::new()),
                        nextlayer: Some("latin".to_string()),
                        ..special("K_LOWER", "*abc*")
                    },
                    key("U_00AB", "«"),
                    shifted("K_8", "*"),
                    key("U_00BB", "»"),
                    key("K_COMMA", ","),
                    key("K_SLASH", "/"),
                    shifted("K_1", "!"),
                    shifted("K_SLASH", "?"),
                    shifted("K_EQUAL", "+"),
                    erase_key(),
                ],
            },
            bottom_row(LayoutKey {
                width: Some("150".to_string()),
                ..syllabics_key()
            }),
        ],
    }
}

/// The Latin layer and its shifted counterpart, in that order.
pub fn latin_layers() -> Vec<LayoutLayer> {
    vec![
        LayoutLayer {
            id: "latin".to_string(),
            row: vec![
                LayoutRow {
                    id: 1,
                    key: letter_keys("qwertyuiop"),
                },
                LayoutRow {
                    id: 2,
                    key: with_syllabics_key(letter_keys("asdfghjkl")),
                },
                LayoutRow {
                    id: 3,
                    key: vec![
                        LayoutKey {
                            nextlayer: Some("shift".to_string()),
                            ..special("K_SHIFT", "*Shifted*")
                        },
                        key("K_Z", "z"),
                        key("K_X", "x"),
                        key("K_C", "c"),
                        key("K_V", "v"),
                        key("K_B", "b"),
                        key("K_N", "n"),
                        key("K_M", "m"),
                        LayoutKey {
                            sk: Some(vec![
                                SubKey::plain("K_COMMA", ","),
                                SubKey::layered("K_1", "!", "shift"),
                                SubKey::layered("K_SLASH", "?", "shift"),
                                SubKey::plain("K_QUOTE", "'"),
                                SubKey::layered("K_QUOTE", "\"", "shift"),
                                SubKey::plain("K_BKSLASH", "\\"),
                                SubKey::layered("K_COLON", ":", "shift"),
                                SubKey::plain("K_COLON", ";"),
                            ]),
                            ..key("K_PERIOD", ".")
                        },
                        erase_key(),
                    ],
                },
                bottom_row(numeric_switch()),
            ],
        },
        LayoutLayer {
            id: "shift".to_string(),
            row: vec![
                LayoutRow {
                    id: 1,
                    key: letter_keys("QWERTYUIOP"),
                },
                LayoutRow {
                    id: 2,
                    key: with_syllabics_key(letter_keys("ASDFGHJKL")),
                },
                LayoutRow {
                    id: 3,
                    key: vec![
                        LayoutKey {
                            sp: Some(KeyShape::Active),
                            nextlayer: Some("latin".to_string()),
                            ..key("K_SHIFT", "*Shift*")
                        },
                        key("K_Z", "Z"),
                        key("K_X", "X"),
                        key("K_C", "C"),
                        key("K_V", "V"),
                        key("K_B", "B"),
                        key("K_N", "N"),
                        key("K_M", "M"),
                        LayoutKey {
                            sk: Some(vec![
                                SubKey::layered("K_COMMA", ",", "latin"),
                                SubKey::layered("K_1", "!", "shift"),
                                SubKey::layered("K_SLASH", "?", "shift"),
                                SubKey::layered("K_QUOTE", "'", "latin"),
                                SubKey::layered("K_QUOTE", "\"", "shift"),
                                SubKey::layered("K_BKSLASH", "\\", "latin"),
                                SubKey::layered("K_COLON", ":", "shift"),
                                SubKey::layered("K_COLON", ";", "latin"),
                            ]),
                            ..key("K_PERIOD", ".")
                        },
                        special("K_BKSP", "*BkSp*"),
                    ],
                },
                bottom_row(numeric_switch()),
            ],
        },
    ]
}

/// Returns to the syllabics base layer. Labelled "nêhiyaw" in
/// syllabics.
fn syllabics_key() -> LayoutKey {
    LayoutKey {
        nextlayer: Some(DEFAULT_LAYER.to_string()),
        ..special("K_SCROLL", "ᓀᐦᐃᔭᐤ")
    }
}

fn with_syllabics_key(mut keys: Vec<LayoutKey>) -> Vec<LayoutKey> {
    keys.insert(0, syllabics_key());
    keys
}

fn numeric_switch() -> LayoutKey {
    LayoutKey {
        width: Some("150".to_string()),
        nextlayer: Some("numeric".to_string()),
        ..special("K_NUMLOCK", "*123*")
    }
}

fn erase_key() -> LayoutKey {
    LayoutKey {
        width: Some("100".to_string()),
        ..special("K_BKSP", "*BkSp*")
    }
}

/// The shared bottom row: a layer-specific leading key, then the menu,
/// space bar, and enter keys.
fn bottom_row(leading: LayoutKey) -> LayoutRow {
    LayoutRow {
        id: 4,
        key: vec![
            leading,
            LayoutKey {
                width: Some("120".to_string()),
                ..special("K_LOPT", "*Menu*")
            },
            LayoutKey {
                sp: Some(KeyShape::Normal),
                width: Some("610".to_string()),
                ..key("K_SPACE", "")
            },
            LayoutKey {
                width: Some("150".to_string()),
                ..special("K_ENTER", "*Enter*")
            },
        ],
    }
}

fn digit_keys() -> Vec<LayoutKey> {
    "1234567890"
        .chars()
        .map(|digit| key(&format!("K_{digit}"), &digit.to_string()))
        .collect()
}

fn letter_keys(letters: &str) -> Vec<LayoutKey> {
    letters
        .chars()
        .map(|letter| {
            key(
                &format!("K_{}", letter.to_ascii_uppercase()),
                &letter.to_string(),
            )
        })
        .collect()
}

fn key(id: &str, text: &str) -> LayoutKey {
    LayoutKey {
        id: id.to_string(),
        text: text.to_string(),
        ..LayoutKey::default()
    }
}

fn special(id: &str, text: &str) -> LayoutKey {
    LayoutKey {
        sp: Some(KeyShape::Special),
        ..key(id, text)
    }
}

/// A key emitted under another layer's modifier state.
fn on_layer(id: &str, text: &str, layer: &str) -> LayoutKey {
    LayoutKey {
        layer: Some(layer.to_string()),
        ..key(id, text)
    }
}

fn shifted(id: &str, text: &str) -> LayoutKey {
    on_layer(id, text, "shift")
}
