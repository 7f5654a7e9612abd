//! Prompt variants for suggestion generation.
//!
//! The five bridge variants live in a (stage, position) table rendered by a
//! single function, so each variant is unit-testable without the HTTP layer.
//! `start` and `establish` ignore position; `continue` branches three ways.
//!
//! Every rendered prompt carries outline, style, and tone, plus one
//! "core argument" line directly after the outline line — present only when
//! the session has a thesis, never inserted as an empty value.

use crate::suggest::classify::{Position, Stage};
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, SUGGESTION_OUTPUT_RULES};
use crate::session::SessionContext;

/// One bridge-mode template: a system prompt and a user template with
/// `{outline}` / `{thesis_line}` / `{style}` / `{tone}` / `{preceding}`
/// placeholders.
pub struct PromptVariant {
    pub name: &'static str,
    pub system: &'static str,
    user_template: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// The five bridge variants
// ────────────────────────────────────────────────────────────────────────────

const CONTEXT_HEADER: &str = "Outline: {outline}\n{thesis_line}Style: {style}\nTone: {tone}";

pub static START_BLANK_PAGE: PromptVariant = PromptVariant {
    name: "start",
    system: "You are a ghostwriter helping a writer begin a new piece. \
        Write the opening words of a hook that pulls the reader straight in.",
    user_template: "{context}\n\n\
        The page is blank. Give the first words of an opening hook for this piece.",
};

pub static ESTABLISH_OPENING: PromptVariant = PromptVariant {
    name: "establish",
    system: "You are a ghostwriter continuing a piece that has just begun. \
        Extend the writer's opening while preserving their voice exactly.",
    user_template: "{context}\n\n\
        The writer has only just started. Continue their opening sentence \
        or start the next one, matching their voice.\n\n\
        Text so far:\n{preceding}",
};

pub static CONTINUE_OPENING: PromptVariant = PromptVariant {
    name: "continue-opening",
    system: "You are a ghostwriter in the opening of a piece. \
        Build momentum: deepen the hook and move the reader toward the core idea.",
    user_template: "{context}\n\n\
        The piece is still in its opening. Suggest the next words, building \
        momentum toward the main argument.\n\n\
        Text so far (most recent window):\n{preceding}",
};

pub static CONTINUE_MIDDLE: PromptVariant = PromptVariant {
    name: "continue-middle",
    system: "You are a ghostwriter mid-piece. \
        Maintain the narrative and argumentative flow without repeating ground already covered.",
    user_template: "{context}\n\n\
        The piece is mid-flow. Suggest the next words, keeping the argument moving.\n\n\
        Text so far (most recent window):\n{preceding}",
};

pub static CONTINUE_CLOSING: PromptVariant = PromptVariant {
    name: "continue-closing",
    system: "You are a ghostwriter closing out a piece. \
        Steer toward resolution. Do NOT introduce new ideas.",
    user_template: "{context}\n\n\
        The piece is nearing its end. Suggest the next words, steering toward \
        resolution without opening new threads.\n\n\
        Text so far (most recent window):\n{preceding}",
};

/// Selects the bridge variant for a (stage, position) pair.
///
/// The enums make an unrecognized combination unrepresentable; the
/// continue/middle variant is the designated fallback should the table ever
/// grow a gap.
pub fn variant_for(stage: Stage, position: Position) -> &'static PromptVariant {
    match (stage, position) {
        (Stage::Start, _) => &START_BLANK_PAGE,
        (Stage::Establish, _) => &ESTABLISH_OPENING,
        (Stage::Continue, Position::Opening) => &CONTINUE_OPENING,
        (Stage::Continue, Position::Middle) => &CONTINUE_MIDDLE,
        (Stage::Continue, Position::Closing) => &CONTINUE_CLOSING,
    }
}

impl PromptVariant {
    /// Full system prompt: variant role + the shared output contract.
    pub fn system_prompt(&self) -> String {
        format!("{} {}", self.system, SUGGESTION_OUTPUT_RULES)
    }

    /// Renders the user prompt for this variant.
    pub fn render(&self, session: &SessionContext, preceding: &str) -> String {
        let context = CONTEXT_HEADER
            .replace("{outline}", &session.outline)
            .replace("{thesis_line}", &thesis_line(&session.thesis))
            .replace("{style}", &session.style)
            .replace("{tone}", &session.tone);
        self.user_template
            .replace("{context}", &context)
            .replace("{preceding}", preceding)
    }
}

/// The thesis line inserted directly after the outline line — or nothing at
/// all when no thesis was derived. Never an empty-valued line.
fn thesis_line(thesis: &str) -> String {
    if thesis.is_empty() {
        String::new()
    } else {
        format!("The piece's core argument: {thesis}\n")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Word-completion template
// ────────────────────────────────────────────────────────────────────────────

pub const WORD_SYSTEM: &str = "You are completing the word a writer is in the \
    middle of typing. \
    Return ONLY the remaining characters of that single word. \
    No spaces, no punctuation, no explanation. \
    If the word already looks complete, return an empty string.";

const WORD_TEMPLATE: &str = "Recent text:\n{preceding}\n\n\
    The writer is mid-word. The partial word is: \"{partial}\"\n\
    Complete it.";

pub fn render_word_prompt(preceding: &str, partial: &str) -> String {
    WORD_TEMPLATE
        .replace("{preceding}", preceding)
        .replace("{partial}", partial)
}

// ────────────────────────────────────────────────────────────────────────────
// Next-section template
// ────────────────────────────────────────────────────────────────────────────

pub fn next_section_system() -> String {
    format!(
        "{} You help writers decide what to write next, one section at a time.",
        JSON_ONLY_SYSTEM
    )
}

const NEXT_SECTION_TEMPLATE: &str = "{context}\n\n\
    The writer just finished this paragraph:\n{last_paragraph}\n\n\
    {section_line}\
    Return a JSON object with exactly two fields:\n\
    {\"phrase\": \"a short opening phrase for the next section\", \
    \"angle\": \"one sentence describing what the next section should argue or cover\"}";

pub fn render_next_section(
    session: &SessionContext,
    last_paragraph: &str,
    current_section: Option<&str>,
) -> String {
    let context = CONTEXT_HEADER
        .replace("{outline}", &session.outline)
        .replace("{thesis_line}", &thesis_line(&session.thesis))
        .replace("{style}", &session.style)
        .replace("{tone}", &session.tone);
    let section_line = match current_section {
        Some(s) if !s.is_empty() => format!("Current outline section: {s}\n\n"),
        _ => String::new(),
    };
    NEXT_SECTION_TEMPLATE
        .replace("{context}", &context)
        .replace("{last_paragraph}", last_paragraph)
        .replace("{section_line}", &section_line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(thesis: &str) -> SessionContext {
        SessionContext {
            outline: "How X reduces Y".to_string(),
            style: "technical blog".to_string(),
            tone: "direct".to_string(),
            thesis: thesis.to_string(),
        }
    }

    #[test]
    fn test_start_variant_selected_for_blank_page_regardless_of_position() {
        for position in [Position::Opening, Position::Middle, Position::Closing] {
            let v = variant_for(Stage::Start, position);
            assert_eq!(v.name, "start");
        }
    }

    #[test]
    fn test_establish_variant_ignores_position() {
        for position in [Position::Opening, Position::Middle, Position::Closing] {
            assert_eq!(variant_for(Stage::Establish, position).name, "establish");
        }
    }

    #[test]
    fn test_continue_stage_branches_by_position() {
        assert_eq!(
            variant_for(Stage::Continue, Position::Opening).name,
            "continue-opening"
        );
        assert_eq!(
            variant_for(Stage::Continue, Position::Middle).name,
            "continue-middle"
        );
        assert_eq!(
            variant_for(Stage::Continue, Position::Closing).name,
            "continue-closing"
        );
    }

    #[test]
    fn test_exactly_five_effective_variants() {
        let mut names = std::collections::HashSet::new();
        for stage in [Stage::Start, Stage::Establish, Stage::Continue] {
            for position in [Position::Opening, Position::Middle, Position::Closing] {
                names.insert(variant_for(stage, position).name);
            }
        }
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn test_empty_thesis_omits_core_argument_line() {
        let prompt = CONTINUE_MIDDLE.render(&session(""), "some preceding text");
        assert!(
            !prompt.contains("core argument"),
            "empty thesis must omit the line entirely, not render it blank"
        );
    }

    #[test]
    fn test_nonempty_thesis_renders_one_line_after_outline() {
        let prompt = CONTINUE_MIDDLE.render(
            &session("X cuts Y by 40% in real deployments"),
            "some preceding text",
        );
        assert_eq!(prompt.matches("core argument").count(), 1);

        let lines: Vec<&str> = prompt.lines().collect();
        let outline_idx = lines
            .iter()
            .position(|l| l.starts_with("Outline:"))
            .expect("prompt must contain the outline line");
        assert!(
            lines[outline_idx + 1].contains("core argument"),
            "thesis line must sit immediately after the outline line"
        );
        assert!(lines[outline_idx + 1].contains("X cuts Y by 40%"));
    }

    #[test]
    fn test_start_prompt_has_no_preceding_text_section() {
        let prompt = START_BLANK_PAGE.render(&session(""), "");
        assert!(!prompt.contains("Text so far"));
        assert!(prompt.contains("Outline: How X reduces Y"));
    }

    #[test]
    fn test_rendered_prompt_carries_outline_style_tone_and_text() {
        let prompt = CONTINUE_CLOSING.render(&session(""), "the window of recent text");
        assert!(prompt.contains("Outline: How X reduces Y"));
        assert!(prompt.contains("Style: technical blog"));
        assert!(prompt.contains("Tone: direct"));
        assert!(prompt.contains("the window of recent text"));
    }

    #[test]
    fn test_system_prompt_carries_output_contract() {
        for v in [
            &START_BLANK_PAGE,
            &ESTABLISH_OPENING,
            &CONTINUE_OPENING,
            &CONTINUE_MIDDLE,
            &CONTINUE_CLOSING,
        ] {
            let system = v.system_prompt();
            assert!(system.contains("5 to 7 words"));
            assert!(system.contains("empty string"));
        }
    }

    #[test]
    fn test_word_prompt_carries_partial_word() {
        let prompt = render_word_prompt("the quick bro", "bro");
        assert!(prompt.contains("\"bro\""));
        assert!(prompt.contains("the quick bro"));
    }

    #[test]
    fn test_next_section_includes_section_hint_when_present() {
        let prompt = render_next_section(&session(""), "Last paragraph.", Some("Benchmarks"));
        assert!(prompt.contains("Current outline section: Benchmarks"));
    }

    #[test]
    fn test_next_section_omits_section_hint_when_absent() {
        let prompt = render_next_section(&session(""), "Last paragraph.", None);
        assert!(!prompt.contains("Current outline section"));
        let empty = render_next_section(&session(""), "Last paragraph.", Some(""));
        assert!(!empty.contains("Current outline section"));
    }

    #[test]
    fn test_next_section_thesis_line_present_with_thesis() {
        let prompt = render_next_section(&session("a thesis"), "Para.", None);
        assert_eq!(prompt.matches("core argument").count(), 1);
    }
}
