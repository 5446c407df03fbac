//! Foundation types for gentext.
//!
//! This crate provides the plain data types shared by the alignment engine
//! and its consumers. Every other gentext crate depends on `gentext-types`.
//!
//! # Key Types
//!
//! - [`DiffMode`] — Tokenization granularity (none, word, character)
//! - [`OpTag`] / [`Opcode`] — One alignment operation over two unit sequences
//! - [`TextDiff`] — Parallel segment lists with per-segment equality flags
//! - [`GeneratedTextCandidate`] — A model output with an optional score

pub mod candidate;
pub mod error;
pub mod mode;
pub mod opcode;
pub mod text_diff;

pub use candidate::GeneratedTextCandidate;
pub use error::TypeError;
pub use mode::DiffMode;
pub use opcode::{OpTag, Opcode};
pub use text_diff::{Segment, TextDiff};
