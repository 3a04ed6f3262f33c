//! Figure style builder: per-series channel assignment and mode-dependent styling.
//!
//! Given an [`OutputMode`], a number of series and a color palette, a
//! [`FigureStyle`] holds
//! - one color, line style, marker and hatch per series, aligned by index,
//! - reverse maps from a color to the line style, marker and hatch assigned
//!   alongside it (for callers that pick colors by hand),
//! - the merged [`StyleConfig`] for the rendering layer,
//! - the [`PostBuildAdjustments`] the document applies to itself.
//!
//! # Example
//!
//! ```rust
//! use figstyle::{BasicDocument, OutputMode, StyleOptions};
//!
//! let style = StyleOptions::default()
//!     .with_mode(OutputMode::Paper)
//!     .with_num_entries(6)
//!     .build()?;
//! assert_eq!(style.linestyles().len(), 6);
//!
//! let doc: BasicDocument = style.into_document()?;
//! assert_eq!(doc.style().get_f64("lines.linewidth"), Some(0.8));
//! # Ok::<(), figstyle::StyleError>(())
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

use crate::color::{COLORBLIND, Rgb};
use crate::config::{CycleEntry, PropCycle, StyleConfig, tiered_font_sizes};
use crate::document::{Document, DocumentClass, PostBuildAdjustments};
use crate::error::{Result, StyleError};
use crate::mode::OutputMode;
use crate::palette::{HATCHES, Hatch, LINE_STYLES, LineStyle, MARKERS, Marker, Palette};

/// Default number of series to style.
pub const DEFAULT_NUM_ENTRIES: usize = 10;

/// Upper bound on the number of series a build accepts.
pub const MAX_NUM_ENTRIES: usize = 4096;

/// Slide font size (pt) for body text, titles and axis labels.
pub const PRESENTATION_BIG_FONT: f64 = 28.0;
/// Slide font size (pt) for legend entries and tick labels.
pub const PRESENTATION_SMALL_FONT: f64 = 24.0;

const LATEX_PREAMBLE: &str = "\\usepackage[cm]{sfmath}\n\\usepackage{amsmath}";

/// Inputs of one style build.
///
/// Every field has a default, so a partial JSON object deserializes:
///
/// ```rust
/// let opts: figstyle::StyleOptions =
///     serde_json::from_str(r#"{"mode": "presentation", "num_entries": 4}"#).unwrap();
/// assert!(opts.paper_use_small_font);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    pub mode: OutputMode,
    pub document_class: DocumentClass,
    /// Series colors in cycling order.
    pub colors: Vec<Rgb>,
    /// Add a marker to every property-cycle entry.
    pub use_markers: bool,
    /// Shrink paper fonts relative to the document's footnote size.
    /// Ignored for presentations.
    pub paper_use_small_font: bool,
    /// Number of series; at most [`MAX_NUM_ENTRIES`].
    pub num_entries: usize,
    /// Extra entries merged after the property cycle.
    pub custom_style: StyleConfig,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            mode: OutputMode::default(),
            document_class: DocumentClass::default(),
            colors: COLORBLIND.to_vec(),
            use_markers: false,
            paper_use_small_font: true,
            num_entries: DEFAULT_NUM_ENTRIES,
            custom_style: StyleConfig::new(),
        }
    }
}

impl StyleOptions {
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_document_class(mut self, class: DocumentClass) -> Self {
        self.document_class = class;
        self
    }

    pub fn with_colors(mut self, colors: Vec<Rgb>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_markers(mut self, on: bool) -> Self {
        self.use_markers = on;
        self
    }

    pub fn with_paper_small_font(mut self, on: bool) -> Self {
        self.paper_use_small_font = on;
        self
    }

    pub fn with_num_entries(mut self, n: usize) -> Self {
        self.num_entries = n;
        self
    }

    pub fn with_custom_style(mut self, style: StyleConfig) -> Self {
        self.custom_style = style;
        self
    }

    pub fn build(&self) -> Result<FigureStyle> {
        FigureStyle::new(self)
    }
}

/// Full style of one series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesStyle {
    pub index: usize,
    pub color: Rgb,
    pub linestyle: LineStyle,
    pub marker: Marker,
    pub hatch: Hatch,
}

/// Map `keys[i] -> values[i]`. A key seen twice keeps its last value.
pub fn by_color<K, V>(keys: &[K], values: &[V]) -> HashMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    keys.iter().cloned().zip(values.iter().cloned()).collect()
}

/// Line, marker, hatch and grid sizing for `mode`.
pub fn line_sizes(mode: OutputMode) -> StyleConfig {
    let mut ret: StyleConfig = [("grid.linestyle", "--")].into_iter().collect();
    match mode {
        OutputMode::Paper => ret.merge(
            [
                ("axes.linewidth", 0.5),
                ("xtick.major.width", 0.5),
                ("ytick.major.width", 0.5),
                ("xtick.minor.width", 0.4),
                ("ytick.minor.width", 0.4),
                ("lines.linewidth", 0.8),
                ("lines.markersize", 1.5),
                ("legend.handlelength", 2.5),
                ("hatch.linewidth", 0.5),
                ("grid.linewidth", 0.25),
            ]
            .into_iter()
            .collect(),
        ),
        // No slide-specific sizing yet; the plotting defaults apply.
        OutputMode::Presentation => ret.merge(StyleConfig::new()),
    }
    ret
}

/// Font family and preamble for every mode; explicit sizes only for slides.
///
/// Paper sizes come from the document class (see [`FontPatch`](crate::document::FontPatch)).
pub fn font_sizes(mode: OutputMode) -> StyleConfig {
    let mut ret: StyleConfig = [
        ("font.family", "sans-serif"),
        ("text.latex.preamble", LATEX_PREAMBLE),
    ]
    .into_iter()
    .collect();
    if mode == OutputMode::Presentation {
        ret.merge(tiered_font_sizes(
            PRESENTATION_BIG_FONT,
            PRESENTATION_SMALL_FONT,
        ));
    }
    ret
}

/// A built figure style. Immutable; build a new one for another mode.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureStyle {
    mode: OutputMode,
    document_class: DocumentClass,
    use_markers: bool,
    colors: Vec<Rgb>,
    linestyles: Vec<LineStyle>,
    markers: Vec<Marker>,
    hatches: Vec<Hatch>,
    ls_map: HashMap<Rgb, LineStyle>,
    marker_map: HashMap<Rgb, Marker>,
    hatch_map: HashMap<Rgb, Hatch>,
    config: StyleConfig,
    adjustments: PostBuildAdjustments,
}

impl FigureStyle {
    pub fn new(options: &StyleOptions) -> Result<Self> {
        let n = options.num_entries;
        if n > MAX_NUM_ENTRIES {
            return Err(StyleError::TooManyEntries {
                requested: n,
                max: MAX_NUM_ENTRIES,
            });
        }
        let mode = options.mode;
        debug!("building {mode} style for {n} series");

        let colors = Palette::new(options.colors.clone())?.cycle(n);
        let linestyles = Palette::from_slice(&LINE_STYLES)?.cycle(n);
        let markers = Palette::from_slice(&MARKERS)?.cycle(n);
        let hatches = Palette::from_slice(&HATCHES)?.cycle(n);

        let ls_map = by_color(&colors, &linestyles);
        let marker_map = by_color(&colors, &markers);
        let hatch_map = by_color(&colors, &hatches);
        if ls_map.len() < colors.len() {
            warn!(
                "{} of {} series share a color; reverse maps keep the last series per color",
                colors.len() - ls_map.len(),
                colors.len()
            );
        }

        let mut style = Self {
            mode,
            document_class: options.document_class,
            use_markers: options.use_markers,
            colors,
            linestyles,
            markers,
            hatches,
            ls_map,
            marker_map,
            hatch_map,
            config: StyleConfig::new(),
            adjustments: PostBuildAdjustments::for_mode(mode, options.paper_use_small_font),
        };

        let mut config = StyleConfig::new();
        config.insert("pdf.fonttype", 42_i64);
        config.insert("axes.prop_cycle", style.cycler());
        config.merge(options.custom_style.clone());
        config.merge(line_sizes(mode));
        config.merge(font_sizes(mode));
        debug!("style configuration has {} entries", config.len());
        style.config = config;

        Ok(style)
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn document_class(&self) -> DocumentClass {
        self.document_class
    }

    pub fn num_entries(&self) -> usize {
        self.colors.len()
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn linestyles(&self) -> &[LineStyle] {
        &self.linestyles
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn hatches(&self) -> &[Hatch] {
        &self.hatches
    }

    pub fn ls_map(&self) -> &HashMap<Rgb, LineStyle> {
        &self.ls_map
    }

    pub fn marker_map(&self) -> &HashMap<Rgb, Marker> {
        &self.marker_map
    }

    pub fn hatch_map(&self) -> &HashMap<Rgb, Hatch> {
        &self.hatch_map
    }

    /// Line style paired with a hand-picked `color`, if that color is in use.
    pub fn linestyle_for(&self, color: Rgb) -> Option<LineStyle> {
        self.ls_map.get(&color).copied()
    }

    pub fn marker_for(&self, color: Rgb) -> Option<Marker> {
        self.marker_map.get(&color).copied()
    }

    pub fn hatch_for(&self, color: Rgb) -> Option<Hatch> {
        self.hatch_map.get(&color).copied()
    }

    pub fn series(&self, index: usize) -> Option<SeriesStyle> {
        Some(SeriesStyle {
            index,
            color: *self.colors.get(index)?,
            linestyle: *self.linestyles.get(index)?,
            marker: *self.markers.get(index)?,
            hatch: *self.hatches.get(index)?,
        })
    }

    pub fn iter_series(&self) -> impl Iterator<Item = SeriesStyle> + '_ {
        (0..self.num_entries()).filter_map(|i| self.series(i))
    }

    /// Per-series `(color, linestyle[, marker])` cycle.
    pub fn cycler(&self) -> PropCycle {
        let entries = self
            .colors
            .iter()
            .zip(&self.linestyles)
            .zip(&self.markers)
            .map(|((&color, &linestyle), &marker)| CycleEntry {
                color,
                linestyle,
                marker: self.use_markers.then_some(marker),
            })
            .collect();
        PropCycle { entries }
    }

    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    pub fn adjustments(&self) -> &PostBuildAdjustments {
        &self.adjustments
    }

    /// Construct the document from the configuration and apply the adjustments.
    pub fn into_document<D: Document>(&self) -> Result<D> {
        let mut doc = D::new(self.document_class, self.config.clone());
        self.adjustments.apply(&mut doc)?;
        Ok(doc)
    }
}
