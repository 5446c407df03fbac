use std::str::FromStr;

use gentext_types::DiffMode;
use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult};

/// Configuration for diff computation and display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Mode used when none is given explicitly. Defaults to
    /// [`DiffMode::Word`], not [`DiffMode::default()`].
    pub default_mode: DiffMode,
    /// Background color name for highlighted (differing) spans.
    pub highlight_color: String,
    /// Whether to report the similarity ratio next to a diff.
    pub show_ratio: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            default_mode: DiffMode::Word,
            highlight_color: "yellow".into(),
            show_ratio: true,
        }
    }
}

impl DiffConfig {
    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> DiffResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Render the configuration as TOML.
    pub fn to_toml_string(&self) -> DiffResult<String> {
        toml::to_string(self).map_err(|e| DiffError::Serialization(e.to_string()))
    }
}

impl FromStr for DiffConfig {
    type Err = DiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_toml_str(s)
    }
}
