//! Keyman rule source generation.
//!
//! The touch layout only switches layers; the actual text transforms
//! live in a .kmn rule file. Two rule families make the keyboard
//! coherent: composition rules that replace typed finals with the
//! composed syllabic, and backspace rules that break a syllabic back
//! into its finals.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::constants::{
    COMBINING_CONSONANTS, EMBEDDED_CSS_FILE, GLIDE, KEYBOARD_COPYRIGHT, KEYBOARD_NAME,
    KEYBOARD_VERSION, TOUCH_LAYOUT_FILE, VOWELS,
};
use crate::error::{Error, Result};
use crate::syllabics::{Syllabic, SyllabicTable};

/// Options controlling the emitted rule source.
#[derive(Debug, Clone, Copy, Default)]
pub struct KmnOptions {
    /// Emit the store that embeds the keyboard stylesheet.
    pub with_css: bool,
}

/// Renders the complete rule source for one syllabics table.
pub fn kmn_source(table: &SyllabicTable, options: KmnOptions) -> Result<String> {
    let stores = prefix_stores(table);
    log::info!(
        "emitting rules for {} composition prefixes",
        stores.len()
    );

    let mut lines = vec![
        "c AUTOGENERATED FILE - DO NOT MODIFY!".to_string(),
        "store(&VERSION) '10.0'".to_string(),
        "store(&TARGETS) 'mobile'".to_string(),
        format!("store(&NAME) '{KEYBOARD_NAME}'"),
        format!("store(&COPYRIGHT) '{KEYBOARD_COPYRIGHT}'"),
        format!("store(&KEYBOARDVERSION) '{KEYBOARD_VERSION}'"),
    ];
    if options.with_css {
        lines.push(format!("store(&KMW_EMBEDCSS) '{EMBEDDED_CSS_FILE}'"));
    }
    lines.push(format!("store(&LAYOUTFILE) '{TOUCH_LAYOUT_FILE}'"));

    lines.push(String::new());
    lines.push("c These are used for backspace rules:".to_string());
    for (prefix, glyphs) in &stores {
        let glyphs: String = glyphs.iter().collect();
        lines.push(format!("store({prefix}V) '{glyphs}'"));
    }

    lines.push(String::new());
    lines.push("begin Unicode > use(main)".to_string());
    lines.push("group(main) using keys".to_string());
    lines.push(String::new());

    lines.extend(composition_rules(table)?);
    lines.push("  c Backspace rules: break apart a syllable on backspace".to_string());
    lines.extend(deletion_rules(table, &stores)?);

    Ok(lines.join("\n") + "\n")
}

/// A table entry the composition rules cover: it spells a full
/// syllable that the layer machinery can also build from finals.
fn is_composable(sro: &str) -> bool {
    let Some(first) = sro.chars().next() else {
        return false;
    };
    let Some(last) = sro.chars().last() else {
        return false;
    };
    (COMBINING_CONSONANTS.contains(&first) || first == GLIDE) && VOWELS.contains(&last)
}

/// Groups composable entries by their consonant prefix, in table
/// order. The glyph sets are kept sorted by code point.
fn prefix_stores(table: &SyllabicTable) -> IndexMap<String, BTreeSet<char>> {
    let mut stores: IndexMap<String, BTreeSet<char>> = IndexMap::new();
    for syllabic in table.iter().filter(|entry| is_composable(&entry.sro)) {
        stores
            .entry(syllabic.prefix().to_string())
            .or_default()
            .extend(syllabic.cans.chars());
    }
    stores
}

/// One rule per composable entry: typing the vowel key after its
/// finals replaces the finals with the composed syllabic.
fn composition_rules(table: &SyllabicTable) -> Result<Vec<String>> {
    let mut rules = Vec::new();
    for syllabic in table.iter().filter(|entry| is_composable(&entry.sro)) {
        let chars: Vec<char> = syllabic.sro.chars().collect();
        let first = final_for(table, chars[0])?;
        let (context, read_context) = match chars.len() {
            2 => (first.character_ref(), first.cans.clone()),
            3 if chars[1] == GLIDE => {
                let glide = final_for(table, GLIDE)?;
                (
                    format!("{} {}", first.character_ref(), glide.character_ref()),
                    format!("{} {}", first.cans, glide.cans),
                )
            }
            _ => {
                return Err(Error::MalformedSyllable {
                    sro: syllabic.sro.clone(),
                })
            }
        };
        rules.push(format!(
            "  {context} + [{trigger}] > {composed} layer('default') c {read_context} + [ {glyph} ] > {glyph}",
            trigger = syllabic.key_code(),
            composed = syllabic.character_ref(),
            glyph = syllabic.cans,
        ));
    }
    Ok(rules)
}

/// One rule per prefix store: erasing any syllabic in the store leaves
/// its finals in the text and reopens the matching layer.
fn deletion_rules(
    table: &SyllabicTable,
    stores: &IndexMap<String, BTreeSet<char>>,
) -> Result<Vec<String>> {
    stores
        .keys()
        .map(|prefix| {
            let finals = prefix
                .chars()
                .map(|consonant| Ok(final_for(table, consonant)?.character_ref()))
                .collect::<Result<Vec<String>>>()?
                .join(" ");
            Ok(format!(
                "  any({prefix}V) + [K_BKSP] > {finals} layer('{prefix}V')"
            ))
        })
        .collect()
}

fn final_for(table: &SyllabicTable, consonant: char) -> Result<&Syllabic> {
    table
        .get(&consonant.to_string())
        .ok_or(Error::MissingFinal { consonant })
}
