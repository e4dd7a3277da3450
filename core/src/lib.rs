//! country-routing-core: In-memory land-border routing engine.
//!
//! A pure Rust library that holds an immutable country border graph,
//! partitions it into islands (groups of countries reachable by land), and
//! answers shortest-route queries with BFS behind a concurrent route cache.
//! No I/O: callers supply the border records and wrap the [`Router`].

mod cache;
mod error;
mod graph;
mod islands;
mod router;
mod trail;
mod traversal;

pub use cache::{RouteCache, RouteKey};
pub use error::{GraphError, RoutingError, RoutingResult};
pub use graph::{BorderGraph, CountryCode, NodeId};
pub use islands::{IslandId, Islands};
pub use router::{Route, Router};
pub use trail::{Trail, TrailIter};
pub use traversal::shortest_path;
