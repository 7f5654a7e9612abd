use std::sync::Arc;

use sqlx::PgPool;

use crate::cache::ExpiringStore;
use crate::config::Config;
use crate::llm_client::Generator;
use crate::session::SessionContext;
use crate::suggest::engine::SectionIdea;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The stores are explicit, constructed-in-main instances — no process-wide
/// cache singleton — so tests can inject a manual clock and isolate state.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable text-generation backend. Production: `LlmClient`.
    /// Tests swap in fakes without touching handler code.
    pub llm: Arc<dyn Generator>,
    /// Session context, 24 h TTL.
    pub sessions: ExpiringStore<SessionContext>,
    /// Memoized bridge/word suggestions, 5 min TTL.
    pub predictions: ExpiringStore<String>,
    /// Memoized next-section ideas, 5 min TTL.
    pub sections: ExpiringStore<SectionIdea>,
    pub config: Config,
}
