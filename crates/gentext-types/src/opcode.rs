use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// The kind of an alignment operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpTag {
    /// `a[a_start..a_end] == b[b_start..b_end]`.
    Equal,
    /// `a[a_start..a_end]` is replaced by `b[b_start..b_end]`.
    Replace,
    /// `a[a_start..a_end]` is removed; the B range is empty.
    Delete,
    /// `b[b_start..b_end]` is inserted; the A range is empty.
    Insert,
}

impl OpTag {
    /// Returns `true` for [`OpTag::Equal`].
    pub fn is_equal(&self) -> bool {
        matches!(self, Self::Equal)
    }

    /// The tag for a mismatched region, chosen by which sides are non-empty.
    ///
    /// Returns `None` when both sides are empty (no opcode is emitted).
    pub fn for_mismatch(a_len: usize, b_len: usize) -> Option<Self> {
        match (a_len > 0, b_len > 0) {
            (true, true) => Some(Self::Replace),
            (true, false) => Some(Self::Delete),
            (false, true) => Some(Self::Insert),
            (false, false) => None,
        }
    }

    /// Lowercase name of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Replace => "replace",
            Self::Delete => "delete",
            Self::Insert => "insert",
        }
    }
}

impl fmt::Display for OpTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One alignment operation: a tag plus half-open index ranges into the
/// first (`a`) and second (`b`) unit sequences.
///
/// A complete alignment is a list of opcodes that is contiguous on both
/// axes: each opcode starts where the previous one ended, the first starts
/// at 0, and the last ends at the sequence lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Opcode {
    pub tag: OpTag,
    pub a_start: usize,
    pub a_end: usize,
    pub b_start: usize,
    pub b_end: usize,
}

impl Opcode {
    /// Create a new opcode.
    pub fn new(tag: OpTag, a: Range<usize>, b: Range<usize>) -> Self {
        Self {
            tag,
            a_start: a.start,
            a_end: a.end,
            b_start: b.start,
            b_end: b.end,
        }
    }

    /// The range into the first sequence.
    pub fn a_range(&self) -> Range<usize> {
        self.a_start..self.a_end
    }

    /// The range into the second sequence.
    pub fn b_range(&self) -> Range<usize> {
        self.b_start..self.b_end
    }

    /// Number of units covered in the first sequence.
    pub fn a_len(&self) -> usize {
        self.a_end - self.a_start
    }

    /// Number of units covered in the second sequence.
    pub fn b_len(&self) -> usize {
        self.b_end - self.b_start
    }

    /// Returns `true` if this opcode marks an identical span.
    pub fn is_equal(&self) -> bool {
        self.tag.is_equal()
    }

    /// Returns `true` if `next` starts exactly where this opcode ends on
    /// both axes.
    pub fn is_followed_by(&self, next: &Opcode) -> bool {
        self.a_end == next.a_start && self.b_end == next.b_start
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>7} a[{}:{}] b[{}:{}]",
            self.tag, self.a_start, self.a_end, self.b_start, self.b_end
        )
    }
}
