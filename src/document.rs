//! Hand-off to the document layer.
//!
//! The crate never renders anything. It hands a [`StyleConfig`] to a
//! [`Document`] implementation together with a [`PostBuildAdjustments`]
//! descriptor, and the document applies the adjustments to itself: widescreen
//! layout constants for slides, or a font-size patch relative to the
//! document's own `footnotesize` for paper.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{StyleConfig, tiered_font_sizes};
use crate::error::{Result, StyleError};
use crate::mode::OutputMode;

/// Points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Convert inches to typographic points.
pub fn in2pt(inches: f64) -> f64 {
    inches * POINTS_PER_INCH
}

/// Slide width and height in inches (16:9 widescreen).
pub const SLIDE_WIDTH_IN: f64 = 13.33;
pub const SLIDE_HEIGHT_IN: f64 = 7.5;

/// LaTeX document class the figures are sized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentClass {
    /// USENIX two-column conference template.
    #[default]
    Usenix,
    /// IEEEtran conference mode.
    Ieee,
    /// acmart `sigconf`.
    Acm,
}

/// Layout metrics of a document class, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassMetrics {
    pub columnwidth: f64,
    pub textwidth: f64,
    pub footnotesize: f64,
}

impl DocumentClass {
    pub const fn metrics(self) -> ClassMetrics {
        match self {
            DocumentClass::Usenix => ClassMetrics {
                columnwidth: 241.07,
                textwidth: 505.89,
                footnotesize: 8.0,
            },
            DocumentClass::Ieee => ClassMetrics {
                columnwidth: 252.0,
                textwidth: 516.0,
                footnotesize: 8.0,
            },
            DocumentClass::Acm => ClassMetrics {
                columnwidth: 241.14749,
                textwidth: 506.295,
                footnotesize: 7.0,
            },
        }
    }
}

/// Rendering-side collaborator that consumes a style configuration.
pub trait Document: Sized {
    fn new(class: DocumentClass, style: StyleConfig) -> Self;

    /// Base size the small-font patch is derived from.
    fn footnotesize(&self) -> f64;

    /// Merge additional entries into the document's style.
    fn update_style(&mut self, partial: StyleConfig);

    /// Replace the figure sizing constants.
    fn set_layout(&mut self, layout: &LayoutConstants);
}

/// Figure sizing constants in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConstants {
    pub columnwidth: f64,
    pub textwidth: f64,
}

impl LayoutConstants {
    /// Constants used for slides.
    pub fn slides() -> Self {
        Self {
            columnwidth: in2pt(SLIDE_WIDTH_IN),
            textwidth: in2pt(SLIDE_HEIGHT_IN),
        }
    }
}

/// Font sizes relative to the document's `footnotesize`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontPatch {
    pub big_offset: f64,
    pub small_offset: f64,
}

impl Default for FontPatch {
    fn default() -> Self {
        Self {
            big_offset: 1.0,
            small_offset: 2.0,
        }
    }
}

impl FontPatch {
    /// Concrete font entries for a document whose footnote size is `footnotesize`.
    pub fn resolve(&self, footnotesize: f64) -> StyleConfig {
        tiered_font_sizes(footnotesize - self.big_offset, footnotesize - self.small_offset)
    }

    /// Patch `doc` in place. Only paper output may shrink its fonts.
    pub fn apply<D: Document>(&self, doc: &mut D, mode: OutputMode) -> Result<()> {
        if mode != OutputMode::Paper {
            return Err(StyleError::ContractViolation(format!(
                "small-font patch requires paper mode, got {mode}"
            )));
        }
        let base = doc.footnotesize();
        debug!("applying small-font patch against footnotesize {base}");
        doc.update_style(self.resolve(base));
        Ok(())
    }
}

/// Adjustments the document applies to itself after construction.
///
/// Slides only ever get layout constants and paper only ever gets a font
/// patch; no other combination can be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostBuildAdjustments {
    #[default]
    None,
    Slides(LayoutConstants),
    PaperFontPatch(FontPatch),
}

impl PostBuildAdjustments {
    /// Adjustments for `mode`. `paper_small_font` is ignored for slides.
    pub fn for_mode(mode: OutputMode, paper_small_font: bool) -> Self {
        match mode {
            OutputMode::Presentation => Self::Slides(LayoutConstants::slides()),
            OutputMode::Paper if paper_small_font => Self::PaperFontPatch(FontPatch::default()),
            OutputMode::Paper => Self::None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn layout(&self) -> Option<&LayoutConstants> {
        match self {
            Self::Slides(layout) => Some(layout),
            _ => None,
        }
    }

    pub fn font_patch(&self) -> Option<&FontPatch> {
        match self {
            Self::PaperFontPatch(patch) => Some(patch),
            _ => None,
        }
    }

    pub fn apply<D: Document>(&self, doc: &mut D) -> Result<()> {
        match self {
            Self::None => Ok(()),
            Self::Slides(layout) => {
                debug!(
                    "setting layout columnwidth={} textwidth={}",
                    layout.columnwidth, layout.textwidth
                );
                doc.set_layout(layout);
                Ok(())
            }
            Self::PaperFontPatch(patch) => patch.apply(doc, OutputMode::Paper),
        }
    }
}

/// Plain in-memory [`Document`] backed by [`DocumentClass`] metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicDocument {
    class: DocumentClass,
    style: StyleConfig,
    columnwidth: f64,
    textwidth: f64,
}

impl BasicDocument {
    pub fn class(&self) -> DocumentClass {
        self.class
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn columnwidth(&self) -> f64 {
        self.columnwidth
    }

    pub fn textwidth(&self) -> f64 {
        self.textwidth
    }
}

impl Document for BasicDocument {
    fn new(class: DocumentClass, style: StyleConfig) -> Self {
        let m = class.metrics();
        Self {
            class,
            style,
            columnwidth: m.columnwidth,
            textwidth: m.textwidth,
        }
    }

    fn footnotesize(&self) -> f64 {
        self.class.metrics().footnotesize
    }

    fn update_style(&mut self, partial: StyleConfig) {
        self.style.merge(partial);
    }

    fn set_layout(&mut self, layout: &LayoutConstants) {
        self.columnwidth = layout.columnwidth;
        self.textwidth = layout.textwidth;
    }
}
