use std::time::Instant;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct RoutingResponse {
    pub route: Vec<String>,
}

/// `GET /routing/{origin}/{destination}`
pub async fn routing(
    State(state): State<AppState>,
    Path((origin, destination)): Path<(String, String)>,
) -> Result<Json<RoutingResponse>, ApiError> {
    let start = Instant::now();
    let result = state.router().route(&origin, &destination);
    let elapsed_ns = start.elapsed().as_nanos();
    info!("Routing from {} to {} took {} ns", origin, destination, elapsed_ns);

    match result? {
        Some(route) => Ok(Json(RoutingResponse {
            route: route.countries().iter().map(|c| c.to_string()).collect(),
        })),
        None => Err(ApiError::NoRoute),
    }
}
