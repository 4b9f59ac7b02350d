pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::generation::handlers as generation;
use crate::sessions::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/themes", get(generation::handle_list_themes))
        // Builder sessions
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/basics",
            put(handlers::handle_set_basics),
        )
        .route(
            "/api/v1/sessions/:id/experience",
            post(handlers::handle_add_experience).delete(handlers::handle_clear_experience),
        )
        .route(
            "/api/v1/sessions/:id/education",
            post(handlers::handle_add_education).delete(handlers::handle_clear_education),
        )
        .route(
            "/api/v1/sessions/:id/projects",
            post(handlers::handle_add_project).delete(handlers::handle_clear_projects),
        )
        // Generation + publishing
        .route(
            "/api/v1/sessions/:id/prompt",
            post(handlers::handle_preview_prompt),
        )
        .route(
            "/api/v1/sessions/:id/publish",
            post(handlers::handle_publish),
        )
        .with_state(state)
}
