use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A saved document. The suggestion core never reads this table — sessions
/// carry their own outline/style/tone — but the editor loads and saves
/// drafts here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PostRow {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub outline: String,
    pub style: String,
    pub tone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
