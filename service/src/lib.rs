//! country-routing-service: HTTP front end for country-routing-core.
//!
//! Loads the countries border document once at startup (file or URL),
//! builds the router, and serves `GET /routing/{origin}/{destination}`
//! plus a `GET /status` summary. The graph is never reloaded.

use anyhow::Context;
use axum::routing::get;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod error;
pub mod load;
pub mod routes;
pub mod state;
pub mod status;

pub use config::{Config, Source};
pub use error::{ApiError, LoadError};
pub use state::{AppState, GraphState};

/// Build the HTTP router over a loaded state.
pub fn app(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/routing/{origin}/{destination}", get(routes::routing))
        .route("/status", get(status::status))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Install the global tracing subscriber. `RUST_LOG` wins over `default_filter`.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Load the border data and serve until the process is stopped.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let source = config.source();
    let state = load::load(&source)
        .await
        .with_context(|| format!("loading border data from {}", source))?;

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    info!("country routing listening on http://{}", config.bind);

    axum::serve(listener, app(AppState::new(state))).await?;
    Ok(())
}
