//! Suggestion generation — the only code that crosses the model boundary for
//! prediction traffic.
//!
//! Flow per call: select variant → render prompt → model call → collapse
//! failure → post-process. Failure collapse happens exactly here: a model
//! error becomes the empty sentinel with a warn! log, so by the time a result
//! reaches a handler it is always a plain value. The writing surface never
//! sees a suggestion-related error.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::llm_client::Generator;
use crate::session::SessionContext;
use crate::suggest::classify::{Position, Stage};
use crate::suggest::prompts::{
    next_section_system, render_next_section, render_word_prompt, variant_for, WORD_SYSTEM,
};
use crate::suggest::text::{extract_last_partial_word, strip_trailing_punctuation};

const BRIDGE_MAX_TOKENS: u32 = 50;
const BRIDGE_TEMPERATURE: f32 = 0.8;
const WORD_MAX_TOKENS: u32 = 16;
const WORD_TEMPERATURE: f32 = 0.2;
const SECTION_MAX_TOKENS: u32 = 200;
const SECTION_TEMPERATURE: f32 = 0.7;

/// A next-section idea: a short opening phrase plus a one-sentence angle.
/// Both fields empty is the degraded (failed-call or unparseable) form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionIdea {
    #[serde(default)]
    pub phrase: String,
    #[serde(default)]
    pub angle: String,
}

/// Generates a bridge-mode suggestion for a writer stuck between thoughts.
pub async fn bridge_suggestion(
    llm: &dyn Generator,
    session: &SessionContext,
    preceding: &str,
    stage: Stage,
    position: Position,
) -> String {
    let variant = variant_for(stage, position);
    let prompt = variant.render(session, preceding);
    let raw = complete_or_empty(
        llm,
        &variant.system_prompt(),
        &prompt,
        BRIDGE_MAX_TOKENS,
        BRIDGE_TEMPERATURE,
        variant.name,
    )
    .await;
    strip_trailing_punctuation(&raw).to_string()
}

/// Completes the word the writer is mid-way through typing.
/// Needs no session context.
pub async fn word_completion(llm: &dyn Generator, preceding: &str) -> String {
    let partial = extract_last_partial_word(preceding);
    let prompt = render_word_prompt(preceding, partial);
    let raw = complete_or_empty(
        llm,
        WORD_SYSTEM,
        &prompt,
        WORD_MAX_TOKENS,
        WORD_TEMPERATURE,
        "word",
    )
    .await;
    strip_trailing_punctuation(&raw).to_string()
}

/// Proposes what to write next after a completed paragraph.
/// Parse failure of the structured payload degrades to empty fields, same as
/// a failed call.
pub async fn next_section_idea(
    llm: &dyn Generator,
    session: &SessionContext,
    last_paragraph: &str,
    current_section: Option<&str>,
) -> SectionIdea {
    let prompt = render_next_section(session, last_paragraph, current_section);
    match llm
        .complete(
            &next_section_system(),
            &prompt,
            SECTION_MAX_TOKENS,
            SECTION_TEMPERATURE,
        )
        .await
    {
        Ok(raw) => parse_section_payload(&raw),
        Err(e) => {
            warn!("next-section call failed, degrading to empty idea: {e}");
            SectionIdea::default()
        }
    }
}

/// The single failure-collapse point for plain-text suggestions: an `Err`
/// from the model becomes the empty sentinel, logged and otherwise absorbed.
async fn complete_or_empty(
    llm: &dyn Generator,
    system: &str,
    prompt: &str,
    max_tokens: u32,
    temperature: f32,
    variant: &str,
) -> String {
    match llm.complete(system, prompt, max_tokens, temperature).await {
        Ok(text) => text,
        Err(e) => {
            warn!("suggestion call failed (variant={variant}), degrading to empty: {e}");
            String::new()
        }
    }
}

/// Extracts the structured payload from raw model output: the substring from
/// the first `{` to the last `}`, parsed as JSON. Anything unparseable —
/// missing braces, malformed JSON — degrades to the empty idea.
fn parse_section_payload(raw: &str) -> SectionIdea {
    let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) else {
        return SectionIdea::default();
    };
    if end < start {
        return SectionIdea::default();
    }
    serde_json::from_str(&raw[start..=end]).unwrap_or_default()
}
