use figstyle::palette::{HATCHES, LINE_STYLES, MARKERS};
use figstyle::{Hatch, LineStyle, Marker, StyleError, assign};

#[test]
fn line_style_tokens_cycle_over_ten_series() {
    let got: Vec<&str> = assign(&LINE_STYLES, 10)
        .unwrap()
        .into_iter()
        .map(LineStyle::token)
        .collect();
    assert_eq!(
        got,
        [
            "solid", "dotted", "dashed", "dashdot", "solid", "dotted", "dashed", "dashdot",
            "solid", "dotted"
        ]
    );
}

#[test]
fn built_in_palettes_align_by_index() {
    let n = 12;
    let ls = assign(&LINE_STYLES, n).unwrap();
    let mk = assign(&MARKERS, n).unwrap();
    let ht = assign(&HATCHES, n).unwrap();
    assert_eq!(ls.len(), n);
    assert_eq!(mk.len(), n);
    assert_eq!(ht.len(), n);
    // 4-, 6- and 7-entry palettes wrap at different points.
    assert_eq!(ls[4], LineStyle::Solid);
    assert_eq!(mk[6], Marker::Circle);
    assert_eq!(ht[7], Hatch::Plain);
    assert_eq!(ht[11], Hatch::Horizontal);
}

#[test]
fn assignment_is_repeatable() {
    assert_eq!(assign(&MARKERS, 17), assign(&MARKERS, 17));
}

#[test]
fn empty_palette_fails() {
    let none: Vec<Marker> = Vec::new();
    assert_eq!(assign(&none, 4), Err(StyleError::InvalidPalette));
}
