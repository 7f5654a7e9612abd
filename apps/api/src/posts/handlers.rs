//! Axum route handlers for saved documents.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::post::PostRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpsertPostRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub outline: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub tone: String,
}

/// POST /posts
pub async fn handle_create_post(
    State(state): State<AppState>,
    Json(req): Json<UpsertPostRequest>,
) -> Result<Json<PostRow>, AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let post = sqlx::query_as::<_, PostRow>(
        r#"
        INSERT INTO posts (id, title, content, outline, style, tone, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, now(), now())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&req.title)
    .bind(&req.content)
    .bind(&req.outline)
    .bind(&req.style)
    .bind(&req.tone)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(post))
}

/// GET /posts
pub async fn handle_list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostRow>>, AppError> {
    let posts = sqlx::query_as::<_, PostRow>("SELECT * FROM posts ORDER BY updated_at DESC")
        .fetch_all(&state.db)
        .await?;
    Ok(Json(posts))
}

/// GET /posts/:id
pub async fn handle_get_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PostRow>, AppError> {
    let post = sqlx::query_as::<_, PostRow>("SELECT * FROM posts WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {id} not found")))?;
    Ok(Json(post))
}

/// PUT /posts/:id
pub async fn handle_update_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpsertPostRequest>,
) -> Result<Json<PostRow>, AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let post = sqlx::query_as::<_, PostRow>(
        r#"
        UPDATE posts
        SET title = $2, content = $3, outline = $4, style = $5, tone = $6, updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&req.title)
    .bind(&req.content)
    .bind(&req.outline)
    .bind(&req.style)
    .bind(&req.tone)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Post {id} not found")))?;

    Ok(Json(post))
}

/// DELETE /posts/:id
pub async fn handle_delete_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Post {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_request_defaults_optional_fields() {
        let req: UpsertPostRequest =
            serde_json::from_str(r#"{"title": "Draft one"}"#).unwrap();
        assert_eq!(req.title, "Draft one");
        assert_eq!(req.content, "");
        assert_eq!(req.outline, "");
        assert_eq!(req.style, "");
        assert_eq!(req.tone, "");
    }

    #[test]
    fn test_upsert_request_requires_title() {
        let result: Result<UpsertPostRequest, _> = serde_json::from_str(r#"{"content": "x"}"#);
        assert!(result.is_err());
    }
}
