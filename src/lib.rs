//! figstyle
//!
//! Consistent chart styling for academic papers and slide decks. Pairs with
//! the `figstyle` CLI.
//!
//! ### Features
//! - Cyclic assignment of colors, line styles, markers and hatches to series
//! - Reverse lookup from a hand-picked color to its companion line style,
//!   marker and hatch
//! - Paper (thin lines, footnote-sized fonts) and presentation (large fonts,
//!   widescreen layout) presets merged into one style configuration
//!
//! ### Example
//! ```no_run
//! use figstyle::{BasicDocument, OutputMode, StyleOptions};
//!
//! let style = StyleOptions::default()
//!     .with_mode(OutputMode::Presentation)
//!     .with_markers(true)
//!     .build()?;
//! let dashed = style.linestyle_for(style.colors()[2]);
//! let doc: BasicDocument = style.into_document()?;
//! println!("{dashed:?} {}", serde_json::to_string_pretty(doc.style())?);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod builder;
pub mod color;
pub mod config;
pub mod document;
pub mod error;
pub mod mode;
pub mod palette;

pub use builder::{FigureStyle, SeriesStyle, StyleOptions};
pub use color::Rgb;
pub use config::{PropCycle, StyleConfig, StyleValue};
pub use document::{BasicDocument, Document, DocumentClass, PostBuildAdjustments, in2pt};
pub use error::{Result, StyleError};
pub use mode::OutputMode;
pub use palette::{Hatch, LineStyle, Marker, Palette, assign};
