use serde::{Deserialize, Serialize};

/// The result of aligning a candidate against its reference text.
///
/// Holds three parallel lists with one entry per opcode: the reference-side
/// segment, the candidate-side segment, and whether the two are identical.
/// The wire names (`inputStrings`, `outputStrings`, `equal`) match the
/// payload shape renderers already consume.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDiff {
    /// Segments of the reference text.
    #[serde(rename = "inputStrings")]
    pub input_segments: Vec<String>,
    /// Segments of the candidate text.
    #[serde(rename = "outputStrings")]
    pub output_segments: Vec<String>,
    /// `true` where the reference and candidate segments are identical.
    #[serde(rename = "equal")]
    pub equal_flags: Vec<bool>,
}

/// A borrowed view of one aligned segment pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    pub input: &'a str,
    pub output: &'a str,
    pub equal: bool,
}

impl TextDiff {
    /// Create an empty text diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty text diff with room for `capacity` segments.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            input_segments: Vec::with_capacity(capacity),
            output_segments: Vec::with_capacity(capacity),
            equal_flags: Vec::with_capacity(capacity),
        }
    }

    /// Append one segment pair. Keeps the three lists the same length.
    pub fn push(&mut self, input: String, output: String, equal: bool) {
        self.input_segments.push(input);
        self.output_segments.push(output);
        self.equal_flags.push(equal);
    }

    /// Number of segment pairs.
    pub fn len(&self) -> usize {
        self.equal_flags.len()
    }

    /// Returns `true` if there are no segments (both texts were empty).
    pub fn is_empty(&self) -> bool {
        self.equal_flags.is_empty()
    }

    /// Returns `true` if every segment is equal.
    pub fn is_identical(&self) -> bool {
        self.equal_flags.iter().all(|&eq| eq)
    }

    /// Number of segments that differ.
    pub fn changed(&self) -> usize {
        self.equal_flags.iter().filter(|&&eq| !eq).count()
    }

    /// Iterate over the aligned segment pairs in order.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Segment<'_>> {
        self.input_segments
            .iter()
            .zip(&self.output_segments)
            .zip(&self.equal_flags)
            .map(|((input, output), &equal)| Segment {
                input,
                output,
                equal,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TextDiff {
        let mut diff = TextDiff::new();
        diff.push("the".into(), "the".into(), true);
        diff.push("cat".into(), "dog".into(), false);
        diff.push("sat".into(), "sat".into(), true);
        diff
    }

    #[test]
    fn push_keeps_lists_aligned() {
        let diff = sample();
        assert_eq!(diff.len(), 3);
        assert_eq!(diff.input_segments.len(), diff.output_segments.len());
        assert_eq!(diff.input_segments.len(), diff.equal_flags.len());
    }

    #[test]
    fn changed_and_identical() {
        let diff = sample();
        assert_eq!(diff.changed(), 1);
        assert!(!diff.is_identical());
        assert!(TextDiff::new().is_identical());
        assert!(TextDiff::new().is_empty());
    }

    #[test]
    fn segments_iterate_in_order() {
        let diff = sample();
        let seg: Vec<_> = diff.segments().collect();
        assert_eq!(
            seg[1],
            Segment {
                input: "cat",
                output: "dog",
                equal: false
            }
        );
    }

    #[test]
    fn wire_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["inputStrings"][1], "cat");
        assert_eq!(json["outputStrings"][1], "dog");
        assert_eq!(json["equal"][1], false);
        let back: TextDiff = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }
}
