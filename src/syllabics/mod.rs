//! The syllabics table: transliteration to glyph and code point.
//!
//! The canonical table ships embedded in the binary; an alternative file
//! can be supplied at run time. The format is tab-separated text with a
//! header row naming at least `cans` (the glyph), `latn` (the SRO
//! transliteration), and `scalar.value` (the glyph's code point, decimal
//! or `0x`-prefixed hex). Extra columns are ignored.

use crate::constants::VOWELS;
use crate::error::{Error, Result};
use indexmap::IndexMap;

/// The table bundled with the binary, derived from the nêhiyawêwin
/// syllabics inventory.
const EMBEDDED_TABLE: &str = include_str!("syllabics.tsv");

/// Broad class of a table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyllabicKind {
    /// A bare vowel such as `a`.
    Vowel,
    /// A consonant final such as `k`.
    Consonant,
    /// Anything longer, such as the syllable `kwa`.
    Syllable,
}

/// One row of the syllabics table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllabic {
    /// The syllabic glyph.
    pub cans: String,
    /// SRO transliteration.
    pub sro: String,
    /// Unicode scalar value of the glyph.
    pub scalar_value: u32,
}

impl Syllabic {
    /// Keyman touch key identifier: `U_` plus four or more upper-case
    /// hex digits.
    #[must_use]
    pub fn key_code(&self) -> String {
        format!("U_{:04X}", self.scalar_value)
    }

    /// Keyman rule character reference: `U+` plus the same digits.
    #[must_use]
    pub fn character_ref(&self) -> String {
        format!("U+{:04X}", self.scalar_value)
    }

    /// Whether the entry is a vowel, a consonant final, or a syllable.
    #[must_use]
    pub fn kind(&self) -> SyllabicKind {
        let mut chars = self.sro.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if VOWELS.contains(&c) => SyllabicKind::Vowel,
            (Some(_), None) => SyllabicKind::Consonant,
            _ => SyllabicKind::Syllable,
        }
    }

    /// The transliteration with its trailing vowels removed. Empty when
    /// nothing was stripped, so finals and bare vowels have no prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        let stripped = self.sro.trim_end_matches(|c| VOWELS.contains(&c));
        if stripped == self.sro {
            ""
        } else {
            stripped
        }
    }

    /// The vowel the entry ends with, if it ends with one.
    #[must_use]
    pub fn vowel(&self) -> Option<char> {
        self.sro.chars().last().filter(|c| VOWELS.contains(c))
    }
}

/// Read-only lookup table from transliteration to syllabic, preserving
/// file order.
#[derive(Debug, Clone)]
pub struct SyllabicTable {
    entries: IndexMap<String, Syllabic>,
}

impl SyllabicTable {
    /// Loads the table bundled with the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_tsv(EMBEDDED_TABLE)
    }

    /// Parses tab-separated table text.
    pub fn from_tsv(text: &str) -> Result<Self> {
        let mut lines = text.lines().enumerate();
        let header = lines
            .next()
            .map(|(_, line)| line.trim_end_matches('\r'))
            .unwrap_or_default();
        let columns: Vec<&str> = header.split('\t').collect();
        let cans_at = column_index(&columns, "cans")?;
        let latn_at = column_index(&columns, "latn")?;
        let scalar_at = column_index(&columns, "scalar.value")?;
        let last_required = cans_at.max(latn_at).max(scalar_at);

        let mut entries = IndexMap::new();
        for (index, line) in lines {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() <= last_required {
                return Err(Error::MalformedRow { line: index + 1 });
            }
            let sro = fields[latn_at].to_string();
            let syllabic = Syllabic {
                cans: fields[cans_at].to_string(),
                sro: sro.clone(),
                scalar_value: parse_scalar(&sro, fields[scalar_at])?,
            };
            if entries.insert(sro.clone(), syllabic).is_some() {
                return Err(Error::DuplicateEntry { sro });
            }
        }

        log::debug!("loaded syllabics table with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Looks up an entry by its transliteration.
    #[must_use]
    pub fn get(&self, sro: &str) -> Option<&Syllabic> {
        self.entries.get(sro)
    }

    /// Whether a transliteration is in the table.
    #[must_use]
    pub fn contains(&self, sro: &str) -> bool {
        self.entries.contains_key(sro)
    }

    /// All entries, in file order.
    pub fn iter(&self) -> impl Iterator<Item = &Syllabic> {
        self.entries.values()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn column_index(columns: &[&str], name: &'static str) -> Result<usize> {
    columns
        .iter()
        .position(|column| *column == name)
        .ok_or(Error::MissingColumn { name })
}

fn parse_scalar(sro: &str, value: &str) -> Result<u32> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|_| Error::InvalidCodePoint {
        sro: sro.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(cans: &str, sro: &str, scalar_value: u32) -> Syllabic {
        Syllabic {
            cans: cans.to_string(),
            sro: sro.to_string(),
            scalar_value,
        }
    }

    #[test]
    fn test_key_code_is_zero_padded_hex() {
        assert_eq!(entry("ᑲ", "ka", 0x1472).key_code(), "U_1472");
        assert_eq!(entry("?", "x", 0xAB).key_code(), "U_00AB");
    }

    #[test]
    fn test_character_ref_matches_key_code_digits() {
        let ka = entry("ᑲ", "ka", 0x1472);
        assert_eq!(ka.character_ref(), "U+1472");
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(entry("ᐊ", "a", 0x140A).kind(), SyllabicKind::Vowel);
        assert_eq!(entry("ᐠ", "k", 0x1420).kind(), SyllabicKind::Consonant);
        assert_eq!(entry("ᑲ", "ka", 0x1472).kind(), SyllabicKind::Syllable);
        // Multi-character finals count as syllables too.
        assert_eq!(entry("ᕽ", "hk", 0x157D).kind(), SyllabicKind::Syllable);
    }

    #[test]
    fn test_prefix_strips_trailing_vowels() {
        assert_eq!(entry("ᑲ", "ka", 0x1472).prefix(), "k");
        assert_eq!(entry("ᑿ", "kwa", 0x147F).prefix(), "kw");
        assert_eq!(entry("ᐘ", "wa", 0x1418).prefix(), "w");
    }

    #[test]
    fn test_prefix_is_empty_when_nothing_stripped() {
        assert_eq!(entry("ᐊ", "a", 0x140A).prefix(), "");
        assert_eq!(entry("ᐠ", "k", 0x1420).prefix(), "");
        assert_eq!(entry("ᕽ", "hk", 0x157D).prefix(), "");
    }

    #[test]
    fn test_vowel_query() {
        assert_eq!(entry("ᑲ", "ka", 0x1472).vowel(), Some('a'));
        assert_eq!(entry("ᐁ", "ê", 0x1401).vowel(), Some('ê'));
        assert_eq!(entry("ᐠ", "k", 0x1420).vowel(), None);
        assert_eq!(entry("ᕽ", "hk", 0x157D).vowel(), None);
    }

    #[test]
    fn test_from_tsv_parses_decimal_and_hex() {
        let table = SyllabicTable::from_tsv(
            "cans\tlatn\tscalar.value\nᐁ\tê\t5121\nᐊ\ta\t0x140A\n",
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("ê").unwrap().scalar_value, 0x1401);
        assert_eq!(table.get("a").unwrap().scalar_value, 0x140A);
    }

    #[test]
    fn test_from_tsv_ignores_extra_columns() {
        let table = SyllabicTable::from_tsv(
            "latn\tnotes\tcans\tscalar.value\nka\tloanword? no\tᑲ\t0x1472\n",
        )
        .unwrap();
        assert_eq!(table.get("ka").unwrap().cans, "ᑲ");
    }

    #[test]
    fn test_duplicate_transliteration_is_rejected() {
        let result = SyllabicTable::from_tsv(
            "cans\tlatn\tscalar.value\nᑲ\tka\t0x1472\nᑳ\tka\t0x1473\n",
        );
        assert!(matches!(
            result,
            Err(Error::DuplicateEntry { sro }) if sro == "ka"
        ));
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let result = SyllabicTable::from_tsv("cans\tlatn\nᑲ\tka\n");
        assert!(matches!(
            result,
            Err(Error::MissingColumn { name: "scalar.value" })
        ));
    }

    #[test]
    fn test_short_row_is_rejected() {
        let result = SyllabicTable::from_tsv("cans\tlatn\tscalar.value\nᑲ\tka\n");
        assert!(matches!(result, Err(Error::MalformedRow { line: 2 })));
    }

    #[test]
    fn test_bad_code_point_is_rejected() {
        let result = SyllabicTable::from_tsv("cans\tlatn\tscalar.value\nᑲ\tka\tbanana\n");
        assert!(matches!(
            result,
            Err(Error::InvalidCodePoint { sro, value }) if sro == "ka" && value == "banana"
        ));
    }

    #[test]
    fn test_embedded_table_loads() {
        let table = SyllabicTable::embedded().unwrap();
        assert!(table.len() > 100);

        let ka = table.get("ka").unwrap();
        assert_eq!(ka.cans, "ᑲ");
        assert_eq!(ka.key_code(), "U_1472");

        // The glide final backs both the `w` key and rule contexts.
        assert_eq!(table.get("w").unwrap().key_code(), "U_1424");

        // The nasal + glide series has known gaps.
        assert!(table.contains("nwa"));
        assert!(!table.contains("nwi"));
        assert!(!table.contains("nwo"));
    }

    #[test]
    fn test_embedded_table_glyphs_match_their_scalar_values() {
        let table = SyllabicTable::embedded().unwrap();
        for syllabic in table.iter() {
            let glyph: Vec<char> = syllabic.cans.chars().collect();
            assert_eq!(glyph.len(), 1, "entry '{}'", syllabic.sro);
            assert_eq!(
                glyph[0] as u32, syllabic.scalar_value,
                "entry '{}'",
                syllabic.sro
            );
        }
    }
}
