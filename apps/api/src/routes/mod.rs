pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::posts::handlers as posts;
use crate::session::handlers as session;
use crate::state::AppState;
use crate::suggest::handlers as suggest;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Suggestion API — paths are a public contract with the editor
        .route("/session", post(session::handle_create_session))
        .route("/predict", post(suggest::handle_predict))
        .route("/next", post(suggest::handle_next_section))
        // Document CRUD
        .route(
            "/posts",
            post(posts::handle_create_post).get(posts::handle_list_posts),
        )
        .route(
            "/posts/:id",
            get(posts::handle_get_post)
                .put(posts::handle_update_post)
                .delete(posts::handle_delete_post),
        )
        .with_state(state)
}
