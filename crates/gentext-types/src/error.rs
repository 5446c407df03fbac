use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown diff mode: {0:?} (expected None, Word or Character)")]
    UnknownDiffMode(String),
}
