//! Alignment engine for generated text.
//!
//! Compares a model's generated text against a reference string and marks
//! which spans match and which differ, at word or character granularity.
//! Alignment is Ratcliff/Obershelp style: the longest common contiguous run
//! is matched first and the regions on either side are aligned the same way.
//!
//! # Key Types
//!
//! - [`tokenize()`] -- Split text into word or character units
//! - [`align()`] / [`matching_blocks()`] / [`ratio()`] -- Sequence alignment
//! - [`assemble()`] -- Turn opcodes back into a [`TextDiff`]
//! - [`get_text_diff()`] / [`diff_candidate()`] -- End-to-end entry points
//! - [`DiffCache`] -- Memo keyed by (reference, candidate, mode)
//! - [`GeneratedTextField`] -- View model of one generated-text output field
//! - [`DisplaySpan`] -- Renderable text pieces with highlight flags

pub mod align;
pub mod assemble;
pub mod cache;
pub mod config;
pub mod display;
pub mod error;
pub mod field;
pub mod schema;
pub mod text_diff;
pub mod tokenize;

pub use align::{align, matching_blocks, opcodes_from_blocks, ratio, MatchingBlock};
pub use assemble::assemble;
pub use cache::{DiffCache, DiffKey};
pub use config::DiffConfig;
pub use display::{display_spans, DisplaySpan};
pub use error::{DiffError, DiffResult};
pub use field::{CandidateRow, FieldView, GeneratedTextField, ReferenceRow};
pub use schema::{
    normalize_prediction, reference_fields, should_display, FieldSpec, Schema, SUPPORTED_TYPES,
};
pub use text_diff::{diff_candidate, get_text_diff};
pub use tokenize::tokenize;

pub use gentext_types::{DiffMode, GeneratedTextCandidate, OpTag, Opcode, TextDiff};
