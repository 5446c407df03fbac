//! Display spans: the renderable form of one side of a [`TextDiff`].
//!
//! [`TextDiff`]: gentext_types::TextDiff

use gentext_types::DiffMode;
use serde::{Deserialize, Serialize};

/// A piece of text to render, highlighted when it differs from the other side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySpan {
    pub text: String,
    pub highlighted: bool,
}

impl DisplaySpan {
    /// An unhighlighted span of raw text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: false,
        }
    }
}

/// Turn one side's `(segment, equal)` pairs into display spans.
///
/// In `Word` mode every segment but the last is followed by a space, since
/// segment boundaries fall on the spaces the tokenizer removed.
pub fn display_spans<'a, I>(pieces: I, mode: DiffMode) -> Vec<DisplaySpan>
where
    I: IntoIterator<Item = (&'a str, bool)>,
    I::IntoIter: ExactSizeIterator,
{
    let pieces = pieces.into_iter();
    let last = pieces.len().saturating_sub(1);
    pieces
        .enumerate()
        .map(|(i, (segment, equal))| {
            let text = if mode == DiffMode::Word && i != last {
                format!("{segment} ")
            } else {
                segment.to_owned()
            };
            DisplaySpan {
                text,
                highlighted: !equal,
            }
        })
        .collect()
}
