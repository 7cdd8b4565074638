use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::modules::cache::CacheStats;
use crate::shared::errors::AppResult;
use crate::state::AppState;

/// `GET /api/episodes/{id}`
///
/// The body is written as stored so cached responses stay byte-identical.
pub async fn get_episodes(
    State(state): State<AppState>,
    Path(anime_id): Path<String>,
) -> AppResult<Response> {
    let json = state.episodes.get_episodes_json(&anime_id).await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        json,
    )
        .into_response())
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub cache: CacheStats,
    pub hit_rate: f64,
}

/// `GET /api/health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let cache = state.episodes.cache_stats().await;

    Json(HealthResponse {
        status: "ok",
        hit_rate: cache.hit_rate(),
        cache,
    })
}
