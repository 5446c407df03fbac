//! DiffAssembler: turn opcodes back into readable segment pairs.

use gentext_types::{DiffMode, Opcode, TextDiff};

/// Build a [`TextDiff`] from the opcodes of `a` against `b`.
///
/// Each opcode contributes one segment per side: the covered units joined by
/// a single space in `Word` mode, or concatenated in `Character` mode. An
/// empty range yields an empty segment.
pub fn assemble(a: &[&str], b: &[&str], opcodes: &[Opcode], mode: DiffMode) -> TextDiff {
    let sep = mode.separator().unwrap_or("");
    let mut diff = TextDiff::with_capacity(opcodes.len());
    for op in opcodes {
        diff.push(
            a[op.a_range()].join(sep),
            b[op.b_range()].join(sep),
            op.is_equal(),
        );
    }
    diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use gentext_types::OpTag;

    #[test]
    fn word_segments_are_space_joined() {
        let a = ["the", "big", "cat", "sat"];
        let b = ["the", "dog", "sat"];
        let ops = [
            Opcode::new(OpTag::Equal, 0..1, 0..1),
            Opcode::new(OpTag::Replace, 1..3, 1..2),
            Opcode::new(OpTag::Equal, 3..4, 2..3),
        ];
        let diff = assemble(&a, &b, &ops, DiffMode::Word);
        assert_eq!(diff.input_segments, vec!["the", "big cat", "sat"]);
        assert_eq!(diff.output_segments, vec!["the", "dog", "sat"]);
        assert_eq!(diff.equal_flags, vec![true, false, true]);
    }

    #[test]
    fn character_segments_are_concatenated() {
        let a = ["a", "b", "c"];
        let b = ["a", "x"];
        let ops = [
            Opcode::new(OpTag::Equal, 0..1, 0..1),
            Opcode::new(OpTag::Replace, 1..3, 1..2),
        ];
        let diff = assemble(&a, &b, &ops, DiffMode::Character);
        assert_eq!(diff.input_segments, vec!["a", "bc"]);
        assert_eq!(diff.output_segments, vec!["a", "x"]);
    }

    #[test]
    fn empty_ranges_give_empty_segments() {
        let b = ["a", "b"];
        let ops = [Opcode::new(OpTag::Insert, 0..0, 0..2)];
        let diff = assemble(&[], &b, &ops, DiffMode::Word);
        assert_eq!(diff.input_segments, vec![""]);
        assert_eq!(diff.output_segments, vec!["a b"]);
        assert_eq!(diff.equal_flags, vec![false]);
    }

    #[test]
    fn no_opcodes_no_segments() {
        assert!(assemble(&[], &[], &[], DiffMode::Character).is_empty());
    }
}
