//! Text normalization for the suggestion pipeline.
//!
//! All functions are char-based, not byte-based — the editor sends arbitrary
//! UTF-8 and a byte slice could split a multi-byte character.

/// Window of preceding text kept for prompts and cache keys.
pub const TAIL_WINDOW_CHARS: usize = 500;

/// Returns the last `max_chars` characters of `text` — the tail, never the
/// head: recency matters more than the beginning. Unchanged if it fits.
/// Idempotent.
pub fn truncate_to_tail(text: &str, max_chars: usize) -> &str {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        return text;
    }
    let skip = char_count - max_chars;
    let (cut, _) = text
        .char_indices()
        .nth(skip)
        .expect("skip < char_count by construction");
    &text[cut..]
}

/// Trims whitespace, then removes a trailing run of `. , ! ?`.
/// Internal punctuation is untouched. The model is instructed not to emit
/// trailing punctuation, but this is the local enforcement for when it does.
pub fn strip_trailing_punctuation(text: &str) -> &str {
    text.trim()
        .trim_end_matches(['.', ',', '!', '?'])
}

/// Returns the partial word the cursor sits in: trims trailing whitespace,
/// then takes everything after the last space (the whole trimmed string when
/// there is no space). Used by word-completion mode.
pub fn extract_last_partial_word(text: &str) -> &str {
    let trimmed = text.trim_end();
    match trimmed.rfind(' ') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}
