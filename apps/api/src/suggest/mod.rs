//! Suggestion core: classification, prompt variants, fingerprinting, and the
//! prediction/next-section request orchestration.

use std::time::Duration;

pub mod classify;
pub mod engine;
pub mod fingerprint;
pub mod handlers;
pub mod prompts;
pub mod text;

/// Retention window for memoized predictions. Purely a performance/cost
/// optimization — absence of an entry only re-triggers a model call.
pub const PREDICTION_TTL: Duration = Duration::from_secs(300);

/// Placeholder confidence reported with every suggestion. The model gives us
/// no calibrated score; the editor only needs a stable field.
pub const SUGGESTION_CONFIDENCE: f32 = 0.8;
