//! Error types for the diff crate.
//!
//! The alignment itself is total; these errors come from the surfaces around
//! it (candidate selection, prediction payloads, configuration). Mode names
//! are parsed in `gentext-types` and fail with its `TypeError`.

/// Errors that can occur around diff computation.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// A candidate index outside the candidate list was selected.
    #[error("candidate index {index} out of range ({len} candidates)")]
    CandidateOutOfRange { index: usize, len: usize },

    /// A prediction field did not have the shape its schema declares.
    #[error("malformed prediction field {field:?}: {reason}")]
    MalformedPrediction { field: String, reason: String },

    /// The configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for DiffError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<serde_json::Error> for DiffError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
