//! View model of one generated-text output field.
//!
//! A field holds the candidates a model produced for one output, the
//! reference text they are compared against (if the dataset has one), the
//! selected candidate and the diff mode. The diff for the selected candidate
//! is recomputed on demand and memoized on its inputs.

use gentext_types::{DiffMode, GeneratedTextCandidate, TextDiff};
use serde::Serialize;
use tracing::debug;

use crate::align::ratio;
use crate::cache::DiffCache;
use crate::display::{display_spans, DisplaySpan};
use crate::error::{DiffError, DiffResult};
use crate::tokenize::tokenize;

/// One generated-text output field and its diff state.
#[derive(Clone, Debug)]
pub struct GeneratedTextField {
    field_name: String,
    candidates: Vec<GeneratedTextCandidate>,
    reference_field_name: Option<String>,
    reference_text: Option<String>,
    diff_mode: DiffMode,
    selected_idx: usize,
    cache: DiffCache,
}

/// Rendered snapshot of a field: what a table renderer draws.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldView {
    pub field_name: String,
    pub diff_mode: DiffMode,
    pub reference: Option<ReferenceRow>,
    pub candidates: Vec<CandidateRow>,
}

/// The reference row of a [`FieldView`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReferenceRow {
    pub field_name: String,
    pub spans: Vec<DisplaySpan>,
}

/// One candidate row of a [`FieldView`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CandidateRow {
    pub spans: Vec<DisplaySpan>,
    pub score: Option<f64>,
    pub selected: bool,
}

impl GeneratedTextField {
    /// Create a field with no reference and diffs disabled.
    pub fn new(field_name: impl Into<String>, candidates: Vec<GeneratedTextCandidate>) -> Self {
        Self {
            field_name: field_name.into(),
            candidates,
            reference_field_name: None,
            reference_text: None,
            diff_mode: DiffMode::None,
            selected_idx: 0,
            cache: DiffCache::new(),
        }
    }

    /// Attach the reference field name and its text for the current example.
    pub fn with_reference(mut self, field_name: impl Into<String>, text: Option<String>) -> Self {
        self.reference_field_name = Some(field_name.into());
        self.reference_text = text;
        self
    }

    /// Set the initial diff mode.
    pub fn with_mode(mut self, mode: DiffMode) -> Self {
        self.diff_mode = mode;
        self
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn candidates(&self) -> &[GeneratedTextCandidate] {
        &self.candidates
    }

    pub fn reference_field_name(&self) -> Option<&str> {
        self.reference_field_name.as_deref()
    }

    pub fn reference_text(&self) -> Option<&str> {
        self.reference_text.as_deref()
    }

    pub fn diff_mode(&self) -> DiffMode {
        self.diff_mode
    }

    pub fn selected_idx(&self) -> usize {
        self.selected_idx
    }

    /// The currently selected candidate, if the list is non-empty.
    pub fn selected(&self) -> Option<&GeneratedTextCandidate> {
        self.candidates.get(self.selected_idx)
    }

    /// Select the candidate to diff against the reference.
    pub fn select(&mut self, index: usize) -> DiffResult<()> {
        if index >= self.candidates.len() {
            return Err(DiffError::CandidateOutOfRange {
                index,
                len: self.candidates.len(),
            });
        }
        debug!(field = %self.field_name, index, "candidate selected");
        self.selected_idx = index;
        Ok(())
    }

    pub fn set_diff_mode(&mut self, mode: DiffMode) {
        self.diff_mode = mode;
    }

    pub fn set_reference_text(&mut self, text: Option<String>) {
        self.reference_text = text;
    }

    /// Replace the candidate list. The selection falls back to the first
    /// candidate when the old index no longer exists.
    pub fn set_candidates(&mut self, candidates: Vec<GeneratedTextCandidate>) {
        self.candidates = candidates;
        if self.selected_idx >= self.candidates.len() {
            self.selected_idx = 0;
        }
    }

    /// Diff of the selected candidate against the reference text.
    ///
    /// `None` when there is no reference text, no selected candidate, or the
    /// mode is [`DiffMode::None`].
    pub fn text_diff(&mut self) -> Option<&TextDiff> {
        let candidate = self.candidates.get(self.selected_idx).map(|c| c.text());
        self.cache
            .get_or_compute(self.reference_text.as_deref(), candidate, self.diff_mode)
    }

    /// Similarity of the selected candidate to the reference in the current
    /// mode, when a diff is available.
    pub fn similarity(&self) -> Option<f64> {
        if !self.diff_mode.is_enabled() {
            return None;
        }
        let reference = self.reference_text.as_deref()?;
        let candidate = self.selected()?.text();
        Some(ratio(
            &tokenize(reference, self.diff_mode),
            &tokenize(candidate, self.diff_mode),
        ))
    }

    /// Spans for the reference row: the diff's reference side when a diff is
    /// available, otherwise the raw reference text.
    pub fn reference_spans(&mut self) -> Vec<DisplaySpan> {
        let mode = self.diff_mode;
        let spans = self
            .text_diff()
            .map(|diff| display_spans(diff.segments().map(|s| (s.input, s.equal)), mode));
        spans.unwrap_or_else(|| match &self.reference_text {
            Some(text) => vec![DisplaySpan::plain(text.as_str())],
            None => Vec::new(),
        })
    }

    /// Spans for candidate `index`, or `None` if it does not exist.
    ///
    /// Only the selected candidate is diffed; the others render as raw text.
    pub fn candidate_spans(&mut self, index: usize) -> Option<Vec<DisplaySpan>> {
        let raw = self.candidates.get(index)?.text().to_owned();
        if index != self.selected_idx {
            return Some(vec![DisplaySpan::plain(raw)]);
        }
        let mode = self.diff_mode;
        let spans = self
            .text_diff()
            .map(|diff| display_spans(diff.segments().map(|s| (s.output, s.equal)), mode));
        Some(spans.unwrap_or_else(|| vec![DisplaySpan::plain(raw)]))
    }

    /// Snapshot of everything a renderer needs for this field.
    ///
    /// The reference row is present only when the field has a reference
    /// field name.
    pub fn view(&mut self) -> FieldView {
        let reference = match self.reference_field_name.clone() {
            Some(field_name) => Some(ReferenceRow {
                field_name,
                spans: self.reference_spans(),
            }),
            None => None,
        };
        let candidates = (0..self.candidates.len())
            .map(|i| CandidateRow {
                spans: self.candidate_spans(i).unwrap_or_default(),
                score: self.candidates[i].score(),
                selected: i == self.selected_idx,
            })
            .collect();
        FieldView {
            field_name: self.field_name.clone(),
            diff_mode: self.diff_mode,
            reference,
            candidates,
        }
    }

    /// Diff cache statistics as `(hits, misses)`.
    pub fn cache_stats(&self) -> (u64, u64) {
        (self.cache.hits(), self.cache.misses())
    }
}
