//! Target medium of a figure.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StyleError;

/// Output mode, fixed for the lifetime of one style build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Printed paper: thin lines, small markers, footnote-sized fonts.
    #[default]
    Paper,
    /// Slides: large fonts and a widescreen layout.
    Presentation,
}

impl OutputMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            OutputMode::Paper => "paper",
            OutputMode::Presentation => "presentation",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = StyleError;

    /// Case-insensitive; anything other than the two modes is `UnsupportedMode`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paper" => Ok(OutputMode::Paper),
            "presentation" => Ok(OutputMode::Presentation),
            _ => Err(StyleError::UnsupportedMode(s.to_string())),
        }
    }
}
