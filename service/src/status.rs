use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub source: String,
    pub countries: usize,
    pub borders: usize,
    pub islands: usize,
    pub largest_island: usize,
    pub cached_routes: usize,
    pub memory_bytes: usize,
    pub load_time_ms: f64,
    pub uptime_secs: u64,
}

/// `GET /status`
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let gs = state.graph_state();
    let graph = gs.router.graph();
    let islands = gs.router.islands();

    Json(StatusResponse {
        source: gs.source.clone(),
        countries: graph.node_count(),
        borders: graph.edge_count(),
        islands: islands.island_count(),
        largest_island: islands.largest(),
        cached_routes: gs.router.cached_routes(),
        memory_bytes: graph.memory_usage(),
        load_time_ms: gs.load_time_ms,
        uptime_secs: gs.loaded_at.elapsed().as_secs(),
    })
}
