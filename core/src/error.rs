use thiserror::Error;

use crate::graph::CountryCode;

/// Errors raised while building a [`BorderGraph`](crate::BorderGraph).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The same country code appeared as a key in two border records.
    #[error("country '{0}' is listed more than once")]
    DuplicateCountry(String),

    /// More distinct codes than a [`NodeId`](crate::NodeId) can number.
    #[error("too many countries: {0} already interned")]
    TooManyCountries(usize),
}

/// Errors raised while answering a route query.
///
/// "No route" is not an error: unknown codes and countries on different
/// islands produce `Ok(None)` from [`Router::route`](crate::Router::route).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// The island index put both countries on the same island but the search
    /// exhausted its frontier. Indicates inconsistent (asymmetric) border data
    /// or a traversal bug.
    #[error("no route from '{origin}' to '{destination}' although both are on the same island")]
    IslandInvariant {
        origin: CountryCode,
        destination: CountryCode,
    },
}

/// Result type for routing operations.
pub type RoutingResult<T> = Result<T, RoutingError>;
