//! Error type shared by the palette assigner, the builder and the document hand-off.

use thiserror::Error;

/// Faults raised while deriving a figure style.
///
/// None of these are transient: each one points at a programming or
/// configuration mistake, so callers are expected to stop the build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// A palette with no entries was handed to the assigner.
    #[error("palette must contain at least one entry")]
    InvalidPalette,

    /// An output mode other than `paper` or `presentation` was requested.
    #[error("unsupported output mode: {0:?} (expected \"paper\" or \"presentation\")")]
    UnsupportedMode(String),

    /// A post-build adjustment was applied in a mode that does not allow it.
    #[error("contract violation: {0}")]
    ContractViolation(String),

    /// More series were requested than a build accepts.
    #[error("too many series: {requested} requested, at most {max} supported")]
    TooManyEntries { requested: usize, max: usize },

    /// A color string could not be parsed as `#RRGGBB`.
    #[error("invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, StyleError>;
