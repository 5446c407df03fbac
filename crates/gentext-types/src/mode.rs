use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Granularity used when comparing a candidate against its reference.
///
/// `None` disables alignment entirely: callers short-circuit before any
/// tokenization happens and renderers show the raw text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiffMode {
    /// No diff is computed.
    #[default]
    None,
    /// Compare whole words (split on single spaces).
    Word,
    /// Compare single characters.
    #[serde(alias = "Char")]
    Character,
}

impl DiffMode {
    /// All modes, in the order a selector presents them.
    pub const ALL: [DiffMode; 3] = [DiffMode::None, DiffMode::Word, DiffMode::Character];

    /// Returns `true` if this mode computes a diff.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// The separator placed between tokens when segments are joined back
    /// into text. `None` for [`DiffMode::None`], which never tokenizes.
    pub fn separator(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Word => Some(" "),
            Self::Character => Some(""),
        }
    }

    /// Display label, as shown by a mode selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Word => "Word",
            Self::Character => "Character",
        }
    }
}

impl fmt::Display for DiffMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DiffMode {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "word" | "words" => Ok(Self::Word),
            "character" | "characters" | "char" => Ok(Self::Character),
            _ => Err(TypeError::UnknownDiffMode(s.to_string())),
        }
    }
}
