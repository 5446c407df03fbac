//! Tokenizer: split text into the unit sequence used for alignment.

use gentext_types::DiffMode;

/// Split `text` into comparison units for `mode`.
///
/// - `Word` splits on the single space character. Runs of spaces produce
///   empty tokens, which align like any other token.
/// - `Character` yields one token per `char`.
/// - `None` yields nothing; callers are expected to short-circuit first.
///
/// Empty input always yields an empty sequence.
pub fn tokenize(text: &str, mode: DiffMode) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    match mode {
        DiffMode::None => Vec::new(),
        DiffMode::Word => text.split(' ').collect(),
        DiffMode::Character => text
            .char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect(),
    }
}
