use axum::{routing::get, Router};

use crate::modules::episodes::handlers;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/episodes/{id}", get(handlers::get_episodes))
        .route("/api/health", get(handlers::health))
        .with_state(state)
}
