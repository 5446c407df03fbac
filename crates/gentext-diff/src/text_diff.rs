//! End-to-end diff entry points: tokenize, align, assemble.

use gentext_types::{DiffMode, GeneratedTextCandidate, TextDiff};
use tracing::debug;

use crate::align::align;
use crate::assemble::assemble;
use crate::tokenize::tokenize;

/// Diff `candidate` against `reference` at the granularity of `mode`.
///
/// Returns `None` for [`DiffMode::None`]: no diff is available and the raw
/// texts should be shown instead.
pub fn get_text_diff(reference: &str, candidate: &str, mode: DiffMode) -> Option<TextDiff> {
    if !mode.is_enabled() {
        return None;
    }
    let a = tokenize(reference, mode);
    let b = tokenize(candidate, mode);
    let opcodes = align(&a, &b);
    let diff = assemble(&a, &b, &opcodes, mode);
    debug!(
        %mode,
        segments = diff.len(),
        changed = diff.changed(),
        "computed text diff"
    );
    Some(diff)
}

/// Diff the candidate at `selected` against an optional reference.
///
/// Returns `None` ("no diff available") when the reference is absent, the
/// mode is [`DiffMode::None`], or `selected` is past the end of
/// `candidates`.
pub fn diff_candidate(
    reference: Option<&str>,
    candidates: &[GeneratedTextCandidate],
    selected: usize,
    mode: DiffMode,
) -> Option<TextDiff> {
    let reference = reference?;
    let candidate = candidates.get(selected)?;
    get_text_diff(reference, candidate.text(), mode)
}
