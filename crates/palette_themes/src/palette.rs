// SPDX-License-Identifier: Apache-2.0
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::color::Rgb;
use crate::error::{GenError, Result};

/// Shade whose tonal steps supply link colors for every theme.
pub const BLUE_SHADE: &str = "Blue";

/// Fewest tonal steps a palette may carry; indices up to 7 are dereferenced.
pub const MIN_COLORS: usize = 8;

/// Blue step used for links on dark main colors.
const LINK_ON_DARK: usize = 2;

/// Blue step used for links on light main colors.
const LINK_ON_LIGHT: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaletteTable {
    pub palettes: Vec<Palette>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Palette {
    pub shade: String,
    #[serde(default)]
    pub colors: Vec<String>,
}

impl PaletteTable {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read(path).map_err(|source| GenError::InputNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let table: Self =
            serde_json::from_slice(&content).map_err(|source| GenError::MalformedInput {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(
            path = %path.display(),
            palettes = table.palettes.len(),
            "loaded palette table"
        );
        Ok(table)
    }

    /// First palette whose shade is exactly `Blue`.
    pub fn blue_reference(&self) -> Result<BlueReference<'_>> {
        let blue = self
            .palettes
            .iter()
            .find(|palette| palette.shade == BLUE_SHADE)
            .ok_or(GenError::MissingBluePalette)?;
        blue.check_len()?;
        Ok(BlueReference {
            colors: &blue.colors,
        })
    }
}

impl Palette {
    fn check_len(&self) -> Result<()> {
        if self.colors.len() < MIN_COLORS {
            return Err(GenError::PaletteShape {
                shade: self.shade.clone(),
                found: self.colors.len(),
                required: MIN_COLORS,
            });
        }
        Ok(())
    }

    /// Relative luminance of every tonal step, in order.
    ///
    /// Fails if the palette is too short or any step is not `#RRGGBB`.
    pub fn luminances(&self) -> Result<Vec<f64>> {
        self.check_len()?;
        self.colors
            .iter()
            .enumerate()
            .map(|(index, value)| {
                Rgb::parse_hex(value)
                    .map(Rgb::relative_luminance)
                    .ok_or_else(|| GenError::InvalidColor {
                        shade: self.shade.clone(),
                        index,
                        value: value.clone(),
                    })
            })
            .collect()
    }
}

/// Read-only view of the Blue palette's tonal steps.
#[derive(Debug, Clone, Copy)]
pub struct BlueReference<'a> {
    colors: &'a [String],
}

impl<'a> BlueReference<'a> {
    /// Link color for a theme, picked by whether its main color is dark.
    #[must_use]
    pub fn link(&self, dark_main: bool) -> &'a str {
        let index = if dark_main { LINK_ON_DARK } else { LINK_ON_LIGHT };
        &self.colors[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(shade: &str, colors: &[&str]) -> Palette {
        Palette {
            shade: shade.to_string(),
            colors: colors.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    const BLUE: [&str; 10] = [
        "#e3f2fd", "#bbdefb", "#90caf9", "#64b5f6", "#42a5f5", "#2196f3", "#1e88e5", "#1976d2",
        "#1565c0", "#0d47a1",
    ];

    #[test]
    fn missing_colors_field_is_a_shape_error() {
        let table: PaletteTable =
            serde_json::from_str(r#"{"palettes":[{"shade":"Red"}]}"#).expect("parses");
        let error = table.palettes[0].luminances().expect_err("no colors");
        assert!(matches!(
            error,
            GenError::PaletteShape { shade, found: 0, required: MIN_COLORS } if shade == "Red"
        ));
    }

    #[test]
    fn invalid_color_reports_its_index() {
        let mut colors = BLUE;
        colors[6] = "#1e88e";
        let error = palette("Blue", &colors).luminances().expect_err("bad hex");
        assert!(matches!(error, GenError::InvalidColor { index: 6, .. }));
    }

    #[test]
    fn luminances_are_darker_at_higher_steps() {
        let lums = palette("Blue", &BLUE).luminances().expect("valid");
        assert_eq!(lums.len(), 10);
        assert!(lums.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn blue_reference_requires_exact_shade() {
        let table = PaletteTable {
            palettes: vec![palette("Light Blue", &BLUE), palette("blue", &BLUE)],
        };
        assert!(matches!(
            table.blue_reference(),
            Err(GenError::MissingBluePalette)
        ));
    }

    #[test]
    fn blue_reference_picks_link_steps() {
        let table = PaletteTable {
            palettes: vec![palette("Red", &BLUE[..8]), palette("Blue", &BLUE)],
        };
        let blues = table.blue_reference().expect("blue present");
        assert_eq!(blues.link(true), "#90caf9");
        assert_eq!(blues.link(false), "#1976d2");
    }

    #[test]
    fn short_blue_palette_is_rejected() {
        let table = PaletteTable {
            palettes: vec![palette("Blue", &BLUE[..5])],
        };
        assert!(matches!(
            table.blue_reference(),
            Err(GenError::PaletteShape { found: 5, .. })
        ));
    }

    #[test]
    fn non_utf8_input_is_malformed_not_missing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("material-colors.json");
        fs::write(&path, b"{\"palettes\":[{\"shade\":\"Blue\xff\",\"colors\":[]}]}")
            .expect("fixture");
        let error = PaletteTable::from_path(&path).expect_err("invalid utf-8");
        assert_eq!(error.exit_code(), 3);
        assert!(matches!(error, GenError::MalformedInput { path: p, .. } if p == path));
    }

    #[test]
    fn directory_input_is_unreadable() {
        let temp = tempfile::tempdir().expect("tempdir");
        let error = PaletteTable::from_path(temp.path()).expect_err("directory");
        assert_eq!(error.exit_code(), 2);
        assert!(error.to_string().starts_with("cannot read input file"));
    }

    #[test]
    fn non_array_palettes_fail_to_parse() {
        assert!(serde_json::from_str::<PaletteTable>(r#"{"palettes":{}}"#).is_err());
        assert!(serde_json::from_str::<PaletteTable>(r#"{"themes":[]}"#).is_err());
    }
}
