use serde::{Deserialize, Serialize};

/// A single generated-text output plus an optional model score.
///
/// Serialized as a two-element array `[text, score]`, with `null` for a
/// missing score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, Option<f64>)", into = "(String, Option<f64>)")]
pub struct GeneratedTextCandidate {
    text: String,
    score: Option<f64>,
}

impl GeneratedTextCandidate {
    /// Create a scored candidate.
    pub fn new(text: impl Into<String>, score: Option<f64>) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }

    /// Create a candidate without a score, as produced for plain
    /// single-output generation.
    pub fn unscored(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }

    /// The generated text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The model score, if one was reported.
    pub fn score(&self) -> Option<f64> {
        self.score
    }
}

impl From<(String, Option<f64>)> for GeneratedTextCandidate {
    fn from((text, score): (String, Option<f64>)) -> Self {
        Self { text, score }
    }
}

impl From<GeneratedTextCandidate> for (String, Option<f64>) {
    fn from(candidate: GeneratedTextCandidate) -> Self {
        (candidate.text, candidate.score)
    }
}
