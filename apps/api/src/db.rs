//! PostgreSQL pool for the posts store.
//!
//! Only document CRUD touches the database — session and prediction state is
//! in-process — so the pool stays small.

use std::time::Duration;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Posts CRUD is the only database traffic; a handful of connections covers it.
const MAX_CONNECTIONS: u32 = 5;
/// A writer saving a draft should fail fast rather than queue behind a stuck pool.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

fn pool_options() -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
}

/// Creates and returns the PostgreSQL connection pool for the posts store.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL (posts store)...");

    let pool = pool_options().connect(database_url).await?;

    info!("PostgreSQL pool ready (max {MAX_CONNECTIONS} connections)");
    Ok(pool)
}
