// SPDX-License-Identifier: Apache-2.0
//! Per-shade theme derivation.
//!
//! Every palette yields one [`Theme`]: a main surface color picked from the
//! middle tonal steps by luminance, an input color a few steps away on the
//! contrasting side, white text, and a link color borrowed from the Blue
//! palette.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::Result;
use crate::palette::{BlueReference, Palette, PaletteTable};

/// Preferred main step (Material 500).
const PRIMARY_STEP: usize = 5;

/// At or above this luminance the primary step is too light to be the main color.
const PRIMARY_MAX_LUMINANCE: f64 = 0.4;

/// Main colors below this luminance count as dark.
const DARK_MAIN_LUMINANCE: f64 = 0.5;

/// Text color placed on every main surface.
pub const TEXT_ON_MAIN: &str = "white";

/// Theme identifiers the wiki stylesheet selects from.
pub const KNOWN_THEMES: [&str; 19] = [
    "red",
    "pink",
    "purple",
    "deep-purple",
    "indigo",
    "blue",
    "light-blue",
    "cyan",
    "teal",
    "green",
    "light-green",
    "lime",
    "yellow",
    "amber",
    "orange",
    "deep-orange",
    "brown",
    "gray",
    "blue-gray",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub name: String,
    pub main: String,
    pub input: String,
    pub text: &'static str,
    pub link: String,
}

/// Main step index for a palette's luminances.
///
/// # Panics
///
/// Panics if `luminances` has fewer than 7 entries.
#[must_use]
pub fn select_main_index(luminances: &[f64]) -> usize {
    if luminances[PRIMARY_STEP] >= PRIMARY_MAX_LUMINANCE {
        PRIMARY_STEP + 1
    } else {
        PRIMARY_STEP
    }
}

/// Input step index: two lighter on a dark main, one darker on a light main.
#[must_use]
pub fn select_input_index(main_index: usize, dark_main: bool) -> usize {
    if dark_main {
        main_index - 2
    } else {
        main_index + 1
    }
}

/// CSS-safe theme identifier for a shade, e.g. `Deep Purple` -> `deep-purple`.
#[must_use]
pub fn theme_name(shade: &str) -> String {
    shade.to_lowercase().replace(' ', "-")
}

pub fn derive_theme(palette: &Palette, blues: &BlueReference<'_>) -> Result<Theme> {
    let luminances = palette.luminances()?;
    let main_index = select_main_index(&luminances);
    let dark_main = luminances[main_index] < DARK_MAIN_LUMINANCE;
    let input_index = select_input_index(main_index, dark_main);

    let theme = Theme {
        name: theme_name(&palette.shade),
        main: palette.colors[main_index].clone(),
        input: palette.colors[input_index].clone(),
        text: TEXT_ON_MAIN,
        link: blues.link(dark_main).to_string(),
    };
    tracing::debug!(
        theme = %theme.name,
        main_index,
        input_index,
        dark_main,
        luminance = luminances[main_index],
        "derived theme"
    );
    Ok(theme)
}

/// Derive every theme in input order. Nothing is returned unless all succeed.
pub fn derive_themes(table: &PaletteTable) -> Result<Vec<Theme>> {
    let blues = table.blue_reference()?;
    table
        .palettes
        .iter()
        .map(|palette| derive_theme(palette, &blues))
        .collect()
}

/// Warn about themes the wiki does not know and known themes left out.
pub fn check_known_themes(themes: &[Theme]) {
    let derived: BTreeSet<&str> = themes.iter().map(|theme| theme.name.as_str()).collect();
    for name in &derived {
        if !KNOWN_THEMES.contains(name) {
            tracing::warn!(theme = %name, "derived theme is not one the wiki selects");
        }
    }
    for name in KNOWN_THEMES {
        if !derived.contains(name) {
            tracing::warn!(theme = %name, "no palette produced this wiki theme");
        }
    }
}
