use std::sync::Arc;
use std::time::Instant;

use country_routing_core::Router;

/// The loaded router plus metadata about how it was loaded.
#[derive(Debug)]
pub struct GraphState {
    pub router: Router,
    pub source: String,
    pub load_time_ms: f64,
    pub loaded_at: Instant,
}

/// Shared handler state. Cheap to clone; the router is never reloaded.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<GraphState>,
}

impl AppState {
    pub fn new(state: GraphState) -> Self {
        Self {
            inner: Arc::new(state),
        }
    }

    pub fn router(&self) -> &Router {
        &self.inner.router
    }

    pub fn graph_state(&self) -> &GraphState {
        &self.inner
    }
}
