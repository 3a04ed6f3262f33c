//! RGB colors used as the color channel and as reverse-map keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StyleError;

/// Opaque 8-bit RGB color.
///
/// Serializes as an uppercase `#RRGGBB` string, which is what plotting
/// style sheets expect for `color` entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase hex form, e.g. `#0173B2`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = StyleError;

    /// Parse `#RRGGBB` (the leading `#` is optional, case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || StyleError::InvalidColor(s.to_string());
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = StyleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_hex()
    }
}

/// Colorblind-safe qualitative palette (ten entries), in cycling order:
/// blue, orange, green, vermilion, pink, tan, light pink, gray, yellow, sky blue.
pub const COLORBLIND: [Rgb; 10] = [
    Rgb::new(1, 115, 178),   // #0173B2
    Rgb::new(222, 143, 5),   // #DE8F05
    Rgb::new(2, 158, 115),   // #029E73
    Rgb::new(213, 94, 0),    // #D55E00
    Rgb::new(204, 120, 188), // #CC78BC
    Rgb::new(202, 145, 97),  // #CA9161
    Rgb::new(251, 175, 228), // #FBAFE4
    Rgb::new(148, 148, 148), // #949494
    Rgb::new(236, 225, 51),  // #ECE133
    Rgb::new(86, 180, 233),  // #56B4E9
];
