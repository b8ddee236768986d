//! Color parsing for SVG styling.

use std::fmt;

use anyhow::{bail, Result};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Rgb {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl fmt::Display for Rgb {
    /// Format as CSS hex: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Rgb {
    /// Parse `#rgb` or `#rrggbb` (the leading `#` is optional).
    pub(crate) fn from_hex(text: &str) -> Result<Self> {
        let hex = text.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            bail!("[io::svg::color] invalid hex color {text:?}");
        }
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => bail!("[io::svg::color] expected #rgb or #rrggbb, got {text:?}"),
        };

        let channel = |i: usize| -> Result<u8> {
            u8::from_str_radix(&expanded[i..i + 2], 16)
                .map_err(|_| anyhow::anyhow!("[io::svg::color] invalid hex color {text:?}"))
        };

        Ok(Self { r: channel(0)?, g: channel(2)?, b: channel(4)? })
    }
}
