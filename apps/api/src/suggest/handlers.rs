//! Axum route handlers for prediction and next-section requests.
//!
//! Flow per request: validate → load session (bridge only; 404 if gone) →
//! fingerprint → cache hit? return it → classify → render → model call →
//! post-process → cache → respond. `/next` deliberately does NOT 404 on a
//! missing session — it degrades to empty context instead. Both behaviors
//! are pinned by tests.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::session::SessionContext;
use crate::state::AppState;
use crate::suggest::classify::{classify_position, classify_stage, Mode, Position, Stage};
use crate::suggest::engine::{bridge_suggestion, next_section_idea, word_completion};
use crate::suggest::fingerprint::fingerprint;
use crate::suggest::text::{truncate_to_tail, TAIL_WINDOW_CHARS};
use crate::suggest::{PREDICTION_TTL, SUGGESTION_CONFIDENCE};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

// Required fields are Option + manual validation so a missing field surfaces
// as a 400 with a named reason, not a generic body-rejection status.

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PredictRequest {
    pub session_id: Option<String>,
    pub mode: Option<String>,
    pub preceding_text: Option<String>,
    /// Client-computed from the full document; the server only sees the
    /// rolling window, so a supplied value wins over local classification.
    pub position: Option<Position>,
    pub stage: Option<Stage>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    pub mode: &'static str,
    pub suggestion: String,
    pub confidence: f32,
    pub cached: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NextSectionRequest {
    pub session_id: Option<String>,
    pub last_paragraph: Option<String>,
    pub current_section: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NextSectionResponse {
    pub phrase: String,
    pub angle: String,
    pub cached: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /predict
///
/// Word mode completes the word under the cursor and needs no session.
/// Bridge mode needs live session context and 404s when it is gone.
/// Empty precedingText short-circuits to an empty suggestion before the
/// cache, the session store, or the model are consulted.
pub async fn handle_predict(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, AppError> {
    let mode_raw = req
        .mode
        .ok_or_else(|| AppError::Validation("mode is required".to_string()))?;
    let mode = Mode::parse(&mode_raw).ok_or_else(|| {
        AppError::Validation(format!("invalid mode '{mode_raw}' (expected word or bridge)"))
    })?;
    let preceding = req
        .preceding_text
        .ok_or_else(|| AppError::Validation("precedingText is required".to_string()))?;

    if preceding.is_empty() {
        return Ok(Json(respond(mode, String::new(), false)));
    }

    let tail = truncate_to_tail(&preceding, TAIL_WINDOW_CHARS);
    let session_id = req.session_id.unwrap_or_default();
    let key = fingerprint(&[mode.as_str(), &session_id, tail]);

    let suggestion = match mode {
        Mode::Word => {
            if let Some(hit) = state.predictions.get(&key) {
                debug!("prediction cache hit (word) key={key}");
                return Ok(Json(respond(mode, hit, true)));
            }
            word_completion(state.llm.as_ref(), tail).await
        }
        Mode::Bridge => {
            if session_id.is_empty() {
                return Err(AppError::Validation(
                    "sessionId is required for bridge mode".to_string(),
                ));
            }
            let session = state
                .sessions
                .get(&session_id)
                .ok_or(AppError::SessionNotFound)?;
            if let Some(hit) = state.predictions.get(&key) {
                debug!("prediction cache hit (bridge) key={key}");
                return Ok(Json(respond(mode, hit, true)));
            }
            let stage = req.stage.unwrap_or_else(|| classify_stage(&preceding));
            let position = req.position.unwrap_or_else(|| classify_position(&preceding));
            bridge_suggestion(state.llm.as_ref(), &session, tail, stage, position).await
        }
    };

    // Empty results are cached too: a failed call replays as empty for the
    // TTL window — an accepted tradeoff, pinned by test.
    state.predictions.set(&key, suggestion.clone(), PREDICTION_TTL);

    Ok(Json(respond(mode, suggestion, false)))
}

fn respond(mode: Mode, suggestion: String, cached: bool) -> PredictResponse {
    PredictResponse {
        mode: mode.as_str(),
        suggestion,
        confidence: SUGGESTION_CONFIDENCE,
        cached,
    }
}

/// POST /next
///
/// Proposes a phrase + angle for the next section. A missing or expired
/// session does NOT 404 here — the request degrades to empty
/// outline/style/tone context. This asymmetry with /predict is intentional.
pub async fn handle_next_section(
    State(state): State<AppState>,
    Json(req): Json<NextSectionRequest>,
) -> Result<Json<NextSectionResponse>, AppError> {
    let session_id = req
        .session_id
        .ok_or_else(|| AppError::Validation("sessionId is required".to_string()))?;
    let last_paragraph = req
        .last_paragraph
        .ok_or_else(|| AppError::Validation("lastParagraph is required".to_string()))?;
    let current_section = req.current_section.unwrap_or_default();

    let session = state
        .sessions
        .get(&session_id)
        .unwrap_or_else(SessionContext::default);

    let tail = truncate_to_tail(&last_paragraph, TAIL_WINDOW_CHARS);
    let key = fingerprint(&[&session_id, tail, &current_section]);

    if let Some(hit) = state.sections.get(&key) {
        debug!("section cache hit key={key}");
        return Ok(Json(NextSectionResponse {
            phrase: hit.phrase,
            angle: hit.angle,
            cached: true,
        }));
    }

    let section_hint = (!current_section.is_empty()).then_some(current_section.as_str());
    let idea = next_section_idea(state.llm.as_ref(), &session, tail, section_hint).await;

    state.sections.set(&key, idea.clone(), PREDICTION_TTL);

    Ok(Json(NextSectionResponse {
        phrase: idea.phrase,
        angle: idea.angle,
        cached: false,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
