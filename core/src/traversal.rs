use std::collections::{HashSet, VecDeque};

use crate::graph::{BorderGraph, NodeId};
use crate::trail::Trail;

/// Shortest land route from `start` to `target` using BFS (unweighted).
///
/// Returns the path including both endpoints, origin first. `start == target`
/// yields the single-node path. Returns None when the frontier runs dry
/// without reaching `target`; only outgoing borders are followed.
///
/// Countries are marked explored when enqueued, not when dequeued, so each
/// one enters the frontier at most once.
pub fn shortest_path(graph: &BorderGraph, start: NodeId, target: NodeId) -> Option<Vec<NodeId>> {
    let mut explored: HashSet<NodeId> = HashSet::new();
    let mut frontier: VecDeque<Trail> = VecDeque::new();

    explored.insert(start);
    frontier.push_back(Trail::start(start));

    while let Some(trail) = frontier.pop_front() {
        let current = trail.head();
        if current == target {
            return Some(trail.to_vec());
        }

        for &next in graph.borders(current) {
            if explored.insert(next) {
                frontier.push_back(trail.extend(next));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(records: Vec<(&str, Vec<&str>)>) -> BorderGraph {
        BorderGraph::from_borders(records).unwrap()
    }

    fn path_codes(g: &BorderGraph, from: &str, to: &str) -> Option<Vec<String>> {
        shortest_path(g, g.id_of(from).unwrap(), g.id_of(to).unwrap())
            .map(|p| p.iter().map(|&id| g.code(id).to_string()).collect())
    }

    fn make_chain(n: usize) -> BorderGraph {
        let records: Vec<(String, Vec<String>)> = (0..n)
            .map(|i| {
                let mut borders = Vec::new();
                if i > 0 {
                    borders.push(format!("c{}", i - 1));
                }
                if i + 1 < n {
                    borders.push(format!("c{}", i + 1));
                }
                (format!("c{}", i), borders)
            })
            .collect();
        BorderGraph::from_borders(records).unwrap()
    }

    fn make_cycle(n: usize) -> BorderGraph {
        let records: Vec<(String, Vec<String>)> = (0..n)
            .map(|i| {
                (
                    format!("c{}", i),
                    vec![format!("c{}", (i + n - 1) % n), format!("c{}", (i + 1) % n)],
                )
            })
            .collect();
        BorderGraph::from_borders(records).unwrap()
    }

    /// Minimum hop count by enumerating every simple path. Small graphs only.
    fn exhaustive_min_hops(g: &BorderGraph, start: NodeId, target: NodeId) -> Option<usize> {
        fn walk(
            g: &BorderGraph,
            current: NodeId,
            target: NodeId,
            on_path: &mut Vec<NodeId>,
            best: &mut Option<usize>,
        ) {
            if current == target {
                let hops = on_path.len() - 1;
                *best = Some(best.map_or(hops, |b| b.min(hops)));
                return;
            }
            for &next in g.borders(current) {
                if !on_path.contains(&next) {
                    on_path.push(next);
                    walk(g, next, target, on_path, best);
                    on_path.pop();
                }
            }
        }

        let mut best = None;
        walk(g, start, target, &mut vec![start], &mut best);
        best
    }

    fn assert_valid_path(g: &BorderGraph, path: &[NodeId], start: NodeId, target: NodeId) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&target));
        for pair in path.windows(2) {
            assert!(
                g.borders(pair[0]).contains(&pair[1]),
                "{} -> {} is not a border",
                g.code(pair[0]),
                g.code(pair[1])
            );
        }
    }

    #[test]
    fn test_path_through_middle() {
        let g = graph(vec![("A", vec!["B"]), ("B", vec!["A", "C"]), ("C", vec!["B"])]);
        assert_eq!(
            path_codes(&g, "A", "C"),
            Some(vec!["A".to_string(), "B".to_string(), "C".to_string()])
        );
    }

    #[test]
    fn test_diamond_takes_two_hops() {
        let g = graph(vec![
            ("A", vec!["B", "C"]),
            ("B", vec!["A", "D"]),
            ("C", vec!["A", "D"]),
            ("D", vec!["B", "C"]),
        ]);
        let path = path_codes(&g, "A", "D").unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], "A");
        assert!(path[1] == "B" || path[1] == "C");
        assert_eq!(path[2], "D");
    }

    #[test]
    fn test_self_path() {
        let g = make_chain(3);
        let c1 = g.id_of("c1").unwrap();
        assert_eq!(shortest_path(&g, c1, c1), Some(vec![c1]));
    }

    #[test]
    fn test_isolated_self_path() {
        let g = graph(vec![("ISL", vec![])]);
        let isl = g.id_of("ISL").unwrap();
        assert_eq!(shortest_path(&g, isl, isl), Some(vec![isl]));
    }

    #[test]
    fn test_chain_end_to_end() {
        let g = make_chain(50);
        let start = g.id_of("c0").unwrap();
        let target = g.id_of("c49").unwrap();
        let path = shortest_path(&g, start, target).unwrap();
        assert_eq!(path.len(), 50);
        assert_valid_path(&g, &path, start, target);
    }

    #[test]
    fn test_cycle_goes_the_short_way() {
        let g = make_cycle(10);
        let path = path_codes(&g, "c0", "c8").unwrap();
        assert_eq!(path, vec!["c0", "c9", "c8"]);
    }

    #[test]
    fn test_no_path_between_islands() {
        let g = graph(vec![
            ("A", vec!["B"]),
            ("B", vec!["A"]),
            ("X", vec!["Y"]),
            ("Y", vec!["X"]),
        ]);
        assert_eq!(path_codes(&g, "A", "X"), None);
    }

    #[test]
    fn test_directed_border_not_followed_backwards() {
        let g = graph(vec![("A", vec!["B"]), ("B", vec![])]);
        assert!(path_codes(&g, "A", "B").is_some());
        assert_eq!(path_codes(&g, "B", "A"), None);
    }

    #[test]
    fn test_self_loop_and_parallel_borders() {
        let g = graph(vec![("A", vec!["A", "B", "B"]), ("B", vec!["A"])]);
        assert_eq!(path_codes(&g, "A", "B"), Some(vec!["A".to_string(), "B".to_string()]));
    }

    #[test]
    fn test_first_listed_border_wins_ties() {
        let g = graph(vec![
            ("A", vec!["C", "B"]),
            ("B", vec!["D"]),
            ("C", vec!["D"]),
            ("D", vec![]),
        ]);
        assert_eq!(path_codes(&g, "A", "D").unwrap(), vec!["A", "C", "D"]);
    }

    #[test]
    fn test_minimal_against_exhaustive_search() {
        let mut state: u64 = 12345;
        let mut next = |max: u64| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            (state >> 33) % max
        };

        for _ in 0..30 {
            let n = 2 + next(8);
            let records: Vec<(String, Vec<String>)> = (0..n)
                .map(|i| {
                    let degree = next(4);
                    let borders = (0..degree).map(|_| format!("c{}", next(n))).collect();
                    (format!("c{}", i), borders)
                })
                .collect();
            let g = BorderGraph::from_borders(records).unwrap();

            for start in g.node_ids() {
                for target in g.node_ids() {
                    let found = shortest_path(&g, start, target);
                    let expected = exhaustive_min_hops(&g, start, target);
                    match (&found, expected) {
                        (Some(path), Some(hops)) => {
                            assert_eq!(path.len() - 1, hops);
                            assert_valid_path(&g, path, start, target);
                        }
                        (None, None) => {}
                        _ => panic!(
                            "bfs {:?} vs exhaustive {:?} for {} -> {}",
                            found, expected, start, target
                        ),
                    }
                }
            }
        }
    }
}
