use std::collections::VecDeque;

use tracing::debug;

use crate::graph::{BorderGraph, NodeId};

/// Index of an island within [`Islands`].
pub type IslandId = u32;

const UNASSIGNED: IslandId = IslandId::MAX;

/// Partition of every country into islands: groups reachable from one
/// another by land.
///
/// Every node of the graph belongs to exactly one island. Two countries are
/// on the same island iff their [`IslandId`]s are equal, which makes the
/// check O(1).
#[derive(Debug)]
pub struct Islands {
    island_of: Vec<IslandId>,
    members: Vec<Vec<NodeId>>,
}

impl Islands {
    /// Flood-fill the graph, one island per not-yet-assigned country.
    ///
    /// Only outgoing borders are followed. With asymmetric data the result
    /// depends on which country is seen first.
    pub fn build(graph: &BorderGraph) -> Self {
        let mut island_of = vec![UNASSIGNED; graph.node_count()];
        let mut members: Vec<Vec<NodeId>> = Vec::new();
        let mut queue: VecDeque<NodeId> = VecDeque::new();

        // A referenced-only code is always interned after its first referrer,
        // so walking ids in order reaches it from that referrer first.
        for origin in graph.node_ids() {
            if island_of[origin as usize] != UNASSIGNED {
                continue;
            }

            let island = members.len() as IslandId;
            let mut island_members = vec![origin];
            island_of[origin as usize] = island;
            queue.push_back(origin);

            while let Some(country) = queue.pop_front() {
                for &next in graph.borders(country) {
                    if island_of[next as usize] == UNASSIGNED {
                        island_of[next as usize] = island;
                        island_members.push(next);
                        queue.push_back(next);
                    }
                }
            }

            members.push(island_members);
        }

        debug!(
            countries = graph.node_count(),
            islands = members.len(),
            "built island index"
        );

        Self { island_of, members }
    }

    /// Island containing `id`, or None for an id outside the graph.
    pub fn island_of(&self, id: NodeId) -> Option<IslandId> {
        self.island_of.get(id as usize).copied()
    }

    pub fn same_island(&self, a: NodeId, b: NodeId) -> bool {
        match (self.island_of(a), self.island_of(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Countries on an island, in discovery order.
    pub fn members(&self, island: IslandId) -> &[NodeId] {
        self.members
            .get(island as usize)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn island_count(&self) -> usize {
        self.members.len()
    }

    /// Size of the biggest island (0 for an empty graph).
    pub fn largest(&self) -> usize {
        self.members.iter().map(|m| m.len()).max().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (IslandId, &[NodeId])> {
        self.members
            .iter()
            .enumerate()
            .map(|(i, m)| (i as IslandId, m.as_slice()))
    }
}
