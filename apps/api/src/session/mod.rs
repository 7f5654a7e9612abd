//! Writing sessions — the outline/style/tone (+ derived thesis) a writer
//! opens before prediction requests start flowing.
//!
//! A session is created once, never updated, and expires passively after
//! `SESSION_TTL` — expiry is only observed at the next lookup.

use std::time::Duration;

pub mod handlers;
pub mod prompts;
pub mod thesis;

/// Retention window for session context.
pub const SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Context stored per writing session. Immutable after creation.
/// The `Default` (all-empty) form is the degraded context `/next` falls back
/// to when a session is missing or expired.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub outline: String,
    pub style: String,
    pub tone: String,
    /// Derived once at creation. Empty string means "not available" —
    /// never an error, never null.
    pub thesis: String,
}
