use std::sync::Arc;

use tracing::error;

use crate::cache::{RouteCache, RouteKey};
use crate::error::{RoutingError, RoutingResult};
use crate::graph::{BorderGraph, CountryCode, NodeId};
use crate::islands::Islands;
use crate::traversal::shortest_path;

/// A land route: country codes from origin to destination, inclusive.
///
/// Always non-empty. Consecutive countries share a border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    countries: Vec<CountryCode>,
}

impl Route {
    pub(crate) fn new(countries: Vec<CountryCode>) -> Self {
        debug_assert!(!countries.is_empty());
        Self { countries }
    }

    pub fn countries(&self) -> &[CountryCode] {
        &self.countries
    }

    /// Number of border crossings.
    pub fn hops(&self) -> usize {
        self.countries.len() - 1
    }

    pub fn origin(&self) -> &CountryCode {
        &self.countries[0]
    }

    pub fn destination(&self) -> &CountryCode {
        &self.countries[self.countries.len() - 1]
    }
}

/// Answers route queries over a loaded border graph.
///
/// The graph and its island index are fixed at construction; the only
/// mutable state is the route cache, so a `Router` can be shared across
/// threads behind an `Arc` without further locking.
#[derive(Debug)]
pub struct Router {
    graph: Arc<BorderGraph>,
    islands: Islands,
    cache: RouteCache,
}

impl Router {
    /// Build the island index for `graph` and start with an empty cache.
    pub fn new(graph: impl Into<Arc<BorderGraph>>) -> Self {
        let graph = graph.into();
        let islands = Islands::build(&graph);
        Self {
            graph,
            islands,
            cache: RouteCache::new(),
        }
    }

    /// Shortest land route from `origin` to `destination`.
    ///
    /// Returns `Ok(None)` when either code is unknown or the two countries
    /// are on different islands; neither case touches the cache. Same-island
    /// routes are computed once and then served from the cache.
    ///
    /// `Err` means the island index and the search disagree, which only
    /// asymmetric border data can cause.
    pub fn route(&self, origin: &str, destination: &str) -> RoutingResult<Option<Arc<Route>>> {
        let (Some(from), Some(to)) = (self.graph.id_of(origin), self.graph.id_of(destination))
        else {
            return Ok(None);
        };

        if !self.islands.same_island(from, to) {
            return Ok(None);
        }

        let key = RouteKey {
            origin: from,
            destination: to,
        };
        self.cache
            .get_or_try_insert_with(key, || self.compute(from, to))
            .map(Some)
    }

    fn compute(&self, from: NodeId, to: NodeId) -> RoutingResult<Route> {
        match shortest_path(&self.graph, from, to) {
            Some(path) => Ok(Route::new(
                path.into_iter()
                    .map(|id| Arc::clone(self.graph.code(id)))
                    .collect(),
            )),
            None => {
                let origin = Arc::clone(self.graph.code(from));
                let destination = Arc::clone(self.graph.code(to));
                error!(
                    origin = %origin,
                    destination = %destination,
                    "search found no route between countries on the same island"
                );
                Err(RoutingError::IslandInvariant {
                    origin,
                    destination,
                })
            }
        }
    }

    pub fn graph(&self) -> &BorderGraph {
        &self.graph
    }

    pub fn islands(&self) -> &Islands {
        &self.islands
    }

    /// Number of routes currently cached.
    pub fn cached_routes(&self) -> usize {
        self.cache.len()
    }
}
