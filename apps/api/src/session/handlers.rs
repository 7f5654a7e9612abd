//! Axum route handlers for session creation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::thesis::derive_thesis;
use crate::session::{SessionContext, SESSION_TTL};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub outline: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub session_id: String,
}

/// POST /session
///
/// Opens a writing session: derives the thesis once (best-effort — a failed
/// derivation leaves it empty and never fails the request), then stores the
/// context under a fresh opaque id with the 24 h retention window.
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Json<CreateSessionResponse>, AppError> {
    let outline = req
        .outline
        .as_deref()
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .ok_or_else(|| AppError::Validation("outline is required".to_string()))?
        .to_string();
    let style = req.style.unwrap_or_default();
    let tone = req.tone.unwrap_or_default();

    let thesis = derive_thesis(state.llm.as_ref(), &outline, &style, &tone).await;

    let session_id = Uuid::new_v4().to_string();
    state.sessions.set(
        &session_id,
        SessionContext {
            outline,
            style,
            tone,
            thesis,
        },
        SESSION_TTL,
    );

    info!("Session {session_id} created");

    Ok(Json(CreateSessionResponse { session_id }))
}
