use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use country_routing_core::{GraphError, RoutingError};
use serde_json::json;
use thiserror::Error;

/// Failures while fetching or parsing border data at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read border data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to fetch border data: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed border data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid border graph: {0}")]
    Graph(#[from] GraphError),
}

/// Errors returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Unknown country, or no land route between the two.
    #[error("No routing found")]
    NoRoute,

    #[error(transparent)]
    Routing(#[from] RoutingError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoRoute => StatusCode::NOT_FOUND,
            ApiError::Routing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
