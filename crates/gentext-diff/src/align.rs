//! Aligner: Ratcliff/Obershelp alignment of two unit sequences.
//!
//! The longest common contiguous run of the current range pair is matched,
//! then the ranges before and after it are aligned the same way. Pending
//! ranges live on an explicit work-list, so stack depth does not grow with
//! the input. Every unit is eligible to match (there is no junk filter).

use std::collections::HashMap;
use std::hash::Hash;

use gentext_types::{OpTag, Opcode};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A maximal run where `a[a_start..a_start + len] == b[b_start..b_start + len]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub len: usize,
}

impl MatchingBlock {
    fn a_end(&self) -> usize {
        self.a_start + self.len
    }

    fn b_end(&self) -> usize {
        self.b_start + self.len
    }
}

/// Index of `b` by unit value, built once per alignment.
struct Matcher<'a, T> {
    a: &'a [T],
    b2j: HashMap<&'a T, Vec<usize>>,
}

impl<'a, T: Eq + Hash> Matcher<'a, T> {
    fn new(a: &'a [T], b: &'a [T]) -> Self {
        let mut b2j: HashMap<&T, Vec<usize>> = HashMap::new();
        for (j, unit) in b.iter().enumerate() {
            b2j.entry(unit).or_default().push(j);
        }
        Self { a, b2j }
    }

    /// Longest common run inside `a[alo..ahi] x b[blo..bhi]`.
    ///
    /// Among runs of maximal length, the one starting earliest in `a` wins,
    /// then the one starting earliest in `b`. A zero-length block means the
    /// ranges share no unit.
    fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchingBlock {
        let mut best = MatchingBlock {
            a_start: alo,
            b_start: blo,
            len: 0,
        };
        // j2len[j] = length of the run ending at a[i - 1], b[j].
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next.insert(j, k);
                    // Strictly greater keeps the earliest (i, j) on ties.
                    if k > best.len {
                        best = MatchingBlock {
                            a_start: i + 1 - k,
                            b_start: j + 1 - k,
                            len: k,
                        };
                    }
                }
            }
            j2len = next;
        }
        best
    }
}

/// All maximal matching runs between `a` and `b`, ordered by position.
///
/// Runs that touch on both axes are coalesced into one.
pub fn matching_blocks<T: Eq + Hash>(a: &[T], b: &[T]) -> Vec<MatchingBlock> {
    let matcher = Matcher::new(a, b);
    let mut pending = vec![(0, a.len(), 0, b.len())];
    let mut found = Vec::new();

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let block = matcher.find_longest_match(alo, ahi, blo, bhi);
        if block.len == 0 {
            continue;
        }
        if alo < block.a_start && blo < block.b_start {
            pending.push((alo, block.a_start, blo, block.b_start));
        }
        if block.a_end() < ahi && block.b_end() < bhi {
            pending.push((block.a_end(), ahi, block.b_end(), bhi));
        }
        found.push(block);
    }

    // Blocks never cross, so ordering by `a` also orders by `b`.
    found.sort_unstable_by_key(|block| (block.a_start, block.b_start));

    let mut blocks: Vec<MatchingBlock> = Vec::with_capacity(found.len());
    for block in found {
        if let Some(last) = blocks.last_mut() {
            if last.a_end() == block.a_start && last.b_end() == block.b_start {
                last.len += block.len;
                continue;
            }
        }
        blocks.push(block);
    }
    blocks
}

/// Convert ordered matching blocks into a contiguous opcode list covering
/// `a_len` units of `a` and `b_len` units of `b`.
///
/// Each gap between blocks becomes one `Replace`, `Delete` or `Insert`
/// opcode; each block becomes one `Equal` opcode.
pub fn opcodes_from_blocks(blocks: &[MatchingBlock], a_len: usize, b_len: usize) -> Vec<Opcode> {
    let mut ops = Vec::with_capacity(blocks.len() * 2 + 1);
    let (mut i, mut j) = (0, 0);

    for block in blocks {
        push_gap(&mut ops, i..block.a_start, j..block.b_start);
        if block.len > 0 {
            push_merged(
                &mut ops,
                Opcode::new(OpTag::Equal, block.a_start..block.a_end(), block.b_start..block.b_end()),
            );
        }
        i = block.a_end();
        j = block.b_end();
    }
    push_gap(&mut ops, i..a_len, j..b_len);
    ops
}

fn push_gap(ops: &mut Vec<Opcode>, a: std::ops::Range<usize>, b: std::ops::Range<usize>) {
    if let Some(tag) = OpTag::for_mismatch(a.len(), b.len()) {
        push_merged(ops, Opcode::new(tag, a, b));
    }
}

/// Append `op`, folding it into the previous opcode when both have the same
/// tag and meet at a shared boundary.
fn push_merged(ops: &mut Vec<Opcode>, op: Opcode) {
    if let Some(last) = ops.last_mut() {
        if last.tag == op.tag && last.is_followed_by(&op) {
            last.a_end = op.a_end;
            last.b_end = op.b_end;
            return;
        }
    }
    ops.push(op);
}

/// Align two unit sequences.
///
/// The result is ordered and gap-free on both axes: empty against empty
/// yields no opcodes, empty against non-empty yields a single `Insert` or
/// `Delete`, and sequences with nothing in common yield a single `Replace`.
pub fn align<T: Eq + Hash>(a: &[T], b: &[T]) -> Vec<Opcode> {
    let blocks = matching_blocks(a, b);
    let ops = opcodes_from_blocks(&blocks, a.len(), b.len());
    debug!(
        a_len = a.len(),
        b_len = b.len(),
        blocks = blocks.len(),
        opcodes = ops.len(),
        "aligned sequences"
    );
    ops
}

/// Similarity of two sequences in `[0, 1]`: twice the number of matched
/// units over the total number of units. Two empty sequences score 1.0.
pub fn ratio<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched: usize = matching_blocks(a, b).iter().map(|block| block.len).sum();
    2.0 * matched as f64 / total as f64
}
