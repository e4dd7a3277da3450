use std::rc::Rc;

use crate::graph::NodeId;

/// Persistent path of countries, newest first.
///
/// Extending a trail is O(1): the new trail points at the old one, so every
/// frontier entry of a search shares its prefix with the entry it grew from.
/// The origin-first `Vec` is only assembled once a trail is returned.
#[derive(Debug, Clone)]
pub struct Trail {
    head: Rc<Step>,
}

#[derive(Debug)]
struct Step {
    node: NodeId,
    hops: u32,
    prev: Option<Rc<Step>>,
}

impl Trail {
    /// A zero-hop trail standing on `origin`.
    pub fn start(origin: NodeId) -> Self {
        Self {
            head: Rc::new(Step {
                node: origin,
                hops: 0,
                prev: None,
            }),
        }
    }

    /// A new trail one hop longer; `self` is left untouched and shared.
    pub fn extend(&self, next: NodeId) -> Self {
        Self {
            head: Rc::new(Step {
                node: next,
                hops: self.head.hops + 1,
                prev: Some(Rc::clone(&self.head)),
            }),
        }
    }

    /// The country the trail currently ends at.
    pub fn head(&self) -> NodeId {
        self.head.node
    }

    pub fn hops(&self) -> u32 {
        self.head.hops
    }

    /// Walk from the newest country back to the origin.
    pub fn iter(&self) -> TrailIter<'_> {
        TrailIter {
            next: Some(&self.head),
        }
    }

    /// Origin-first copy of the trail.
    pub fn to_vec(&self) -> Vec<NodeId> {
        let mut path = vec![0; self.hops() as usize + 1];
        for (slot, node) in path.iter_mut().rev().zip(self.iter()) {
            *slot = node;
        }
        path
    }
}

impl Drop for Step {
    // Unlink iteratively so dropping a very long trail cannot overflow the stack.
    fn drop(&mut self) {
        let mut prev = self.prev.take();
        while let Some(step) = prev {
            match Rc::try_unwrap(step) {
                Ok(mut step) => prev = step.prev.take(),
                Err(_) => break,
            }
        }
    }
}

pub struct TrailIter<'a> {
    next: Option<&'a Rc<Step>>,
}

impl Iterator for TrailIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let step = self.next?;
        self.next = step.prev.as_ref();
        Some(step.node)
    }
}
