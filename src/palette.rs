//! Palettes for the per-series visual channels and the cyclic assigner.
//!
//! A [`Palette`] is a non-empty, ordered list of values for one channel
//! (color, line style, marker, hatch). [`assign`] tiles a palette over `n`
//! series: element `i` is `palette[i % len]`, so index `i` lines up across
//! channels even when their palettes have different lengths.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, StyleError};

/// Line dash pattern, named after the plotting library's line style tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dotted,
    Dashed,
    DashDot,
}

impl LineStyle {
    pub const fn token(self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dotted => "dotted",
            LineStyle::Dashed => "dashed",
            LineStyle::DashDot => "dashdot",
        }
    }
}

/// Marker glyph for data points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    #[serde(rename = "o")]
    Circle,
    #[serde(rename = "^")]
    TriangleUp,
    #[serde(rename = "s")]
    Square,
    #[serde(rename = "*")]
    Star,
    #[serde(rename = "X")]
    FilledX,
    #[serde(rename = "d")]
    ThinDiamond,
}

impl Marker {
    pub const fn token(self) -> &'static str {
        match self {
            Marker::Circle => "o",
            Marker::TriangleUp => "^",
            Marker::Square => "s",
            Marker::Star => "*",
            Marker::FilledX => "X",
            Marker::ThinDiamond => "d",
        }
    }
}

/// Fill hatch pattern for bars and areas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hatch {
    #[serde(rename = "")]
    Plain,
    #[serde(rename = "//")]
    ForwardDiagonal,
    #[serde(rename = "\\\\")]
    BackDiagonal,
    #[serde(rename = "||")]
    Vertical,
    #[serde(rename = "--")]
    Horizontal,
    #[serde(rename = "++")]
    Grid,
    #[serde(rename = "xx")]
    Crossed,
}

impl Hatch {
    pub const fn token(self) -> &'static str {
        match self {
            Hatch::Plain => "",
            Hatch::ForwardDiagonal => "//",
            Hatch::BackDiagonal => "\\\\",
            Hatch::Vertical => "||",
            Hatch::Horizontal => "--",
            Hatch::Grid => "++",
            Hatch::Crossed => "xx",
        }
    }
}

macro_rules! display_token {
    ($($ty:ty),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        }
    )*};
}

display_token!(LineStyle, Marker, Hatch);

/// Built-in line style cycle.
pub const LINE_STYLES: [LineStyle; 4] = [
    LineStyle::Solid,
    LineStyle::Dotted,
    LineStyle::Dashed,
    LineStyle::DashDot,
];

/// Built-in marker cycle.
pub const MARKERS: [Marker; 6] = [
    Marker::Circle,
    Marker::TriangleUp,
    Marker::Square,
    Marker::Star,
    Marker::FilledX,
    Marker::ThinDiamond,
];

/// Built-in hatch cycle; the first series is left unhatched.
pub const HATCHES: [Hatch; 7] = [
    Hatch::Plain,
    Hatch::ForwardDiagonal,
    Hatch::BackDiagonal,
    Hatch::Vertical,
    Hatch::Horizontal,
    Hatch::Grid,
    Hatch::Crossed,
];

/// Tile `palette` over `n` series.
///
/// The result has exactly `n` elements and `result[i] == palette[i % palette.len()]`.
/// `n == 0` yields an empty vector; an empty palette is rejected.
///
/// The result is allocated up front, so `n` must fit in memory; the builder
/// caps it at [`MAX_NUM_ENTRIES`](crate::builder::MAX_NUM_ENTRIES).
pub fn assign<T: Clone>(palette: &[T], n: usize) -> Result<Vec<T>> {
    if palette.is_empty() {
        return Err(StyleError::InvalidPalette);
    }
    Ok(palette.iter().cycle().take(n).cloned().collect())
}

/// Ordered, non-empty set of values for one channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<T>", into = "Vec<T>")]
#[serde(bound(
    serialize = "T: Clone + Serialize",
    deserialize = "T: Deserialize<'de>"
))]
pub struct Palette<T> {
    entries: Vec<T>,
}

impl<T> Palette<T> {
    /// Wrap `entries`, rejecting an empty list.
    pub fn new(entries: Vec<T>) -> Result<Self> {
        if entries.is_empty() {
            return Err(StyleError::InvalidPalette);
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// Entry assigned to series `index`, wrapping around.
    pub fn get(&self, index: usize) -> &T {
        &self.entries[index % self.entries.len()]
    }
}

impl<T: Clone> Palette<T> {
    /// Palette from a fixed list such as [`LINE_STYLES`].
    pub fn from_slice(entries: &[T]) -> Result<Self> {
        Self::new(entries.to_vec())
    }

    /// Infallible form of [`assign`]; the palette is non-empty by construction.
    pub fn cycle(&self, n: usize) -> Vec<T> {
        assign(&self.entries, n).unwrap_or_default()
    }
}

impl<T> TryFrom<Vec<T>> for Palette<T> {
    type Error = StyleError;

    fn try_from(entries: Vec<T>) -> Result<Self> {
        Self::new(entries)
    }
}

impl<T> From<Palette<T>> for Vec<T> {
    fn from(p: Palette<T>) -> Self {
        p.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_styles_wrap_over_ten_series() {
        let got = assign(&["solid", "dotted", "dashed", "dashdot"], 10).unwrap();
        assert_eq!(
            got,
            vec![
                "solid", "dotted", "dashed", "dashdot", "solid", "dotted", "dashed", "dashdot",
                "solid", "dotted"
            ]
        );
    }

    #[test]
    fn markers_wrap_over_five_series() {
        let got = assign(&['o', '^', 's'], 5).unwrap();
        assert_eq!(got, vec!['o', '^', 's', 'o', '^']);
    }

    #[test]
    fn shorter_and_equal_lengths_truncate() {
        assert_eq!(assign(&[1, 2, 3, 4], 2).unwrap(), vec![1, 2]);
        assert_eq!(assign(&[1, 2, 3], 3).unwrap(), vec![1, 2, 3]);
        assert!(assign(&[1, 2, 3], 0).unwrap().is_empty());
    }

    #[test]
    fn every_position_matches_modulo_rule() {
        for len in 1..=7usize {
            let palette: Vec<usize> = (0..len).map(|i| i * 10).collect();
            for n in 0..=25usize {
                let got = assign(&palette, n).unwrap();
                assert_eq!(got.len(), n);
                for (i, v) in got.iter().enumerate() {
                    assert_eq!(*v, palette[i % len]);
                }
            }
        }
    }

    #[test]
    fn empty_palette_is_rejected() {
        let empty: [u8; 0] = [];
        assert_eq!(assign(&empty, 3), Err(StyleError::InvalidPalette));
        assert_eq!(assign(&empty, 0), Err(StyleError::InvalidPalette));
        assert_eq!(Palette::<u8>::new(vec![]), Err(StyleError::InvalidPalette));
    }

    #[test]
    fn palette_cycle_matches_assign() {
        let p = Palette::from_slice(&MARKERS).unwrap();
        assert_eq!(p.cycle(13), assign(&MARKERS, 13).unwrap());
        assert_eq!(*p.get(7), Marker::TriangleUp);
    }

    #[test]
    fn tokens_match_serialized_names() {
        for ls in LINE_STYLES {
            assert_eq!(serde_json::to_value(ls).unwrap(), ls.token());
        }
        for m in MARKERS {
            assert_eq!(serde_json::to_value(m).unwrap(), m.token());
        }
        for h in HATCHES {
            assert_eq!(serde_json::to_value(h).unwrap(), h.token());
        }
        assert_eq!(Hatch::BackDiagonal.token().len(), 2);
    }

    #[test]
    fn palette_deserializes_and_rejects_empty() {
        let p: Palette<LineStyle> = serde_json::from_str(r#"["dashed","solid"]"#).unwrap();
        assert_eq!(p.as_slice(), &[LineStyle::Dashed, LineStyle::Solid]);
        assert!(serde_json::from_str::<Palette<LineStyle>>("[]").is_err());
    }
}
