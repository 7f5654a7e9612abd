//! Stage / position / mode classification — pure functions of word counts.
//!
//! Stage looks at the text preceding the cursor; position at the whole
//! document. Both split on whitespace runs and drop empty tokens, so
//! whitespace-only input counts as zero words. Same input, same answer —
//! there is no hidden state here.

use serde::{Deserialize, Serialize};

/// How much text precedes the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Blank page — nothing written yet.
    Start,
    /// A short opening exists (1–19 words).
    Establish,
    /// The writer is in flow (≥20 words).
    Continue,
}

/// Where the cursor sits within the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// First ~50 words of the document.
    Opening,
    /// 50–299 words.
    Middle,
    /// ≥300 words — steer toward resolution.
    Closing,
}

/// Suggestion mode requested by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Mid-word completion.
    Word,
    /// The writer is stuck between thoughts (cursor after whitespace).
    Bridge,
}

impl Mode {
    /// Parses the wire value. Manual so an invalid mode surfaces as a 400,
    /// not a body-rejection status.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "word" => Some(Mode::Word),
            "bridge" => Some(Mode::Bridge),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Word => "word",
            Mode::Bridge => "bridge",
        }
    }
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Classifies the writing stage from the text preceding the cursor.
pub fn classify_stage(preceding_text: &str) -> Stage {
    match word_count(preceding_text) {
        0 => Stage::Start,
        1..=19 => Stage::Establish,
        _ => Stage::Continue,
    }
}

/// Classifies document position from the full document text.
pub fn classify_position(full_text: &str) -> Position {
    let words = word_count(full_text);
    if words < 50 {
        Position::Opening
    } else if words < 300 {
        Position::Middle
    } else {
        Position::Closing
    }
}

/// Classifies the suggestion mode from the text immediately before the
/// cursor: mid-word if the last non-space character is alphanumeric,
/// otherwise (space, newline, empty) the writer is between thoughts.
///
/// The editor computes this client-side and sends it with the request; the
/// server implements the same rule so the contract is pinned by tests.
#[allow(dead_code)]
pub fn classify_mode(before_cursor: &str) -> Mode {
    match before_cursor.trim_end_matches(' ').chars().last() {
        Some(c) if c.is_alphanumeric() => Mode::Word,
        _ => Mode::Bridge,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_stage_zero_words_is_start() {
        assert_eq!(classify_stage(""), Stage::Start);
    }

    #[test]
    fn test_stage_whitespace_only_is_start() {
        assert_eq!(classify_stage("   \n\t  "), Stage::Start);
    }

    #[test]
    fn test_stage_boundaries() {
        assert_eq!(classify_stage(&words(1)), Stage::Establish);
        assert_eq!(classify_stage(&words(19)), Stage::Establish);
        assert_eq!(classify_stage(&words(20)), Stage::Continue);
    }

    #[test]
    fn test_position_boundaries() {
        assert_eq!(classify_position(&words(49)), Position::Opening);
        assert_eq!(classify_position(&words(50)), Position::Middle);
        assert_eq!(classify_position(&words(299)), Position::Middle);
        assert_eq!(classify_position(&words(300)), Position::Closing);
    }

    #[test]
    fn test_position_empty_is_opening() {
        assert_eq!(classify_position(""), Position::Opening);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let text = words(150);
        assert_eq!(classify_position(&text), classify_position(&text));
        assert_eq!(classify_stage(&text), classify_stage(&text));
    }

    #[test]
    fn test_mode_after_letter_is_word() {
        assert_eq!(classify_mode("the quick bro"), Mode::Word);
    }

    #[test]
    fn test_mode_after_digit_is_word() {
        assert_eq!(classify_mode("rule 4"), Mode::Word);
    }

    #[test]
    fn test_mode_after_trailing_spaces_strips_to_last_char() {
        // Trailing spaces are trimmed before inspecting the last character.
        assert_eq!(classify_mode("bro   "), Mode::Word);
    }

    #[test]
    fn test_mode_after_newline_is_bridge() {
        assert_eq!(classify_mode("a finished thought.\n"), Mode::Bridge);
    }

    #[test]
    fn test_mode_after_punctuation_is_bridge() {
        assert_eq!(classify_mode("a finished thought."), Mode::Bridge);
    }

    #[test]
    fn test_mode_empty_is_bridge() {
        assert_eq!(classify_mode(""), Mode::Bridge);
    }

    #[test]
    fn test_stage_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Stage::Start).unwrap(), r#""start""#);
        let s: Stage = serde_json::from_str(r#""continue""#).unwrap();
        assert_eq!(s, Stage::Continue);
    }

    #[test]
    fn test_position_serde_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&Position::Closing).unwrap(),
            r#""closing""#
        );
        let p: Position = serde_json::from_str(r#""opening""#).unwrap();
        assert_eq!(p, Position::Opening);
    }
}
