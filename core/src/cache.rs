use std::sync::Arc;

use dashmap::DashMap;
use tracing::trace;

use crate::graph::NodeId;
use crate::router::Route;

/// Cache key: an ordered (origin, destination) pair. `A -> B` and `B -> A`
/// are separate entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteKey {
    pub origin: NodeId,
    pub destination: NodeId,
}

/// Concurrent route cache. Entries are written once and never evicted.
///
/// Misses are computed outside the map lock. When several threads miss on
/// the same key at once, the first insert wins and every caller gets that
/// winner back, so all callers observe one shared `Arc<Route>` per key.
#[derive(Debug, Default)]
pub struct RouteCache {
    routes: DashMap<RouteKey, Arc<Route>>,
}

impl RouteCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &RouteKey) -> Option<Arc<Route>> {
        self.routes.get(key).map(|entry| Arc::clone(entry.value()))
    }

    /// Return the cached route for `key`, or compute and store it.
    ///
    /// A failed computation stores nothing.
    pub fn get_or_try_insert_with<E, F>(&self, key: RouteKey, compute: F) -> Result<Arc<Route>, E>
    where
        F: FnOnce() -> Result<Route, E>,
    {
        if let Some(hit) = self.get(&key) {
            trace!(origin = key.origin, destination = key.destination, "route cache hit");
            return Ok(hit);
        }

        trace!(origin = key.origin, destination = key.destination, "route cache miss");
        let computed = Arc::new(compute()?);
        let winner = self.routes.entry(key).or_insert(computed);
        Ok(Arc::clone(winner.value()))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;

    fn route(codes: &[&str]) -> Route {
        Route::new(codes.iter().map(|&c| Arc::from(c)).collect())
    }

    const KEY: RouteKey = RouteKey {
        origin: 0,
        destination: 2,
    };

    #[test]
    fn test_miss_then_hit() {
        let cache = RouteCache::new();
        let calls = AtomicUsize::new(0);
        let compute = || {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, ()>(route(&["A", "B", "C"]))
        };

        let first = cache.get_or_try_insert_with(KEY, compute).unwrap();
        let second = cache.get_or_try_insert_with(KEY, compute).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_key_is_ordered() {
        let cache = RouteCache::new();
        let reverse = RouteKey {
            origin: KEY.destination,
            destination: KEY.origin,
        };
        cache
            .get_or_try_insert_with(KEY, || Ok::<_, ()>(route(&["A", "B", "C"])))
            .unwrap();
        assert!(cache.get(&reverse).is_none());
        cache
            .get_or_try_insert_with(reverse, || Ok::<_, ()>(route(&["C", "B", "A"])))
            .unwrap();
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_failed_compute_not_stored() {
        let cache = RouteCache::new();
        let result = cache.get_or_try_insert_with(KEY, || Err::<Route, _>("boom"));
        assert_eq!(result.unwrap_err(), "boom");
        assert!(cache.is_empty());
        assert!(cache.get(&KEY).is_none());
    }

    #[test]
    fn test_existing_entry_never_replaced() {
        let cache = RouteCache::new();
        let first = cache
            .get_or_try_insert_with(KEY, || Ok::<_, ()>(route(&["A", "B", "C"])))
            .unwrap();
        let second = cache
            .get_or_try_insert_with(KEY, || Ok::<_, ()>(route(&["A", "X", "C"])))
            .unwrap();
        assert_eq!(second.countries(), first.countries());
    }

    #[test]
    fn test_concurrent_misses_agree() {
        const THREADS: usize = 8;
        let cache = RouteCache::new();
        let computed = AtomicUsize::new(0);
        // Nobody inserts until every thread has missed.
        let barrier = Barrier::new(THREADS);

        let results: Vec<Arc<Route>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|i| {
                    let (cache, computed, barrier) = (&cache, &computed, &barrier);
                    s.spawn(move || {
                        // Each thread would produce a distinct value if it won.
                        let tag = format!("T{}", i);
                        cache
                            .get_or_try_insert_with(KEY, || {
                                computed.fetch_add(1, Ordering::SeqCst);
                                barrier.wait();
                                Ok::<_, ()>(route(&["A", tag.as_str(), "C"]))
                            })
                            .unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(computed.load(Ordering::SeqCst), THREADS);
        assert_eq!(cache.len(), 1);
        let stored = cache.get(&KEY).unwrap();
        assert!(results.iter().all(|r| Arc::ptr_eq(r, &stored)));
    }
}
