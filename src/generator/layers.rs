//! Layer enumeration: one rendered grid per composition state.

use std::iter::once;

use crate::constants::{COMBINING_CONSONANTS, LAYOUT_FONT};
use crate::error::Result;
use crate::models::{KeyShape, KeySpec, LayoutLayer, LayoutRow, Mode, PhoneLayout, TouchLayout};
use crate::syllabics::SyllabicTable;

use super::{alternate, resolver};

/// Options controlling which layers the touch layout carries.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutOptions {
    /// Include the Latin and shifted-Latin layers and keep the
    /// `*ABC*`/`*abc*` keys that reach them.
    pub with_latin: bool,
}

/// Builds the complete touch layout document for one grid.
pub fn touch_layout(
    grid: &[Vec<KeySpec>],
    table: &SyllabicTable,
    options: LayoutOptions,
) -> Result<TouchLayout> {
    let mut layers = enumerate_layers(grid, table)?;
    layers.push(alternate::numeric_layer());
    if options.with_latin {
        layers.extend(alternate::latin_layers());
    }
    post_process(&mut layers, options.with_latin);
    log::info!("assembled {} layers", layers.len());
    Ok(TouchLayout {
        phone: PhoneLayout {
            font: LAYOUT_FONT.to_string(),
            layer: layers,
            display_underlying: false,
        },
    })
}

/// Renders the grid once per composition state: the base layer, then a
/// plain and a labialized layer for each combining consonant.
pub fn enumerate_layers(grid: &[Vec<KeySpec>], table: &SyllabicTable) -> Result<Vec<LayoutLayer>> {
    let states = once(None).chain(COMBINING_CONSONANTS.iter().copied().map(Some));
    let mut layers = Vec::new();
    for consonant in states {
        for mode in Mode::ALL {
            layers.push(build_layer(grid, table, mode, consonant)?);
        }
    }
    Ok(layers)
}

fn build_layer(
    grid: &[Vec<KeySpec>],
    table: &SyllabicTable,
    mode: Mode,
    consonant: Option<char>,
) -> Result<LayoutLayer> {
    let mut rows = Vec::with_capacity(grid.len());
    for (index, specs) in grid.iter().enumerate() {
        let mut keys = Vec::with_capacity(specs.len());
        for spec in specs {
            keys.push(resolver::resolve(spec, mode, consonant, table)?);
        }
        rows.push(LayoutRow {
            id: index + 1,
            key: keys,
        });
    }
    Ok(LayoutLayer {
        id: mode.layer_id(consonant),
        row: rows,
    })
}

/// Without the Latin layers, the keys that would switch to them become
/// inert spacers so every row keeps its geometry.
fn post_process(layers: &mut [LayoutLayer], with_latin: bool) {
    if with_latin {
        return;
    }
    for layer in layers {
        for row in &mut layer.row {
            for key in &mut row.key {
                if key.text == "*ABC*" || key.text == "*abc*" {
                    key.text.clear();
                    key.sp = Some(KeyShape::Spacer);
                    key.nextlayer = None;
                }
            }
        }
    }
}
