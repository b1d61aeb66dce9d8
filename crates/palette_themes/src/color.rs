// SPDX-License-Identifier: Apache-2.0
//! sRGB color parsing and relative luminance.
//!
//! Colors arrive as `#RRGGBB` strings. Channels are scaled to `[0, 1]` and
//! linearized with the sRGB transfer function before the Rec. 709 luminance
//! weights are applied.

/// Linear-light threshold of the sRGB transfer function.
const SRGB_LINEAR_THRESHOLD: f64 = 0.04045;

/// An sRGB color with channels normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Parse a `#RRGGBB` string. Returns `None` for anything else.
    #[must_use]
    pub fn parse_hex(value: &str) -> Option<Self> {
        let hex = value.strip_prefix('#')?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| -> Option<f64> {
            let byte = u8::from_str_radix(&hex[range], 16).ok()?;
            Some(f64::from(byte) / 255.0)
        };
        Some(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// WCAG relative luminance of this color.
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        0.2126 * to_linear(self.r) + 0.7152 * to_linear(self.g) + 0.0722 * to_linear(self.b)
    }
}

/// sRGB transfer function, encoded channel to linear light.
#[must_use]
pub fn to_linear(channel: f64) -> f64 {
    if channel < SRGB_LINEAR_THRESHOLD {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}
