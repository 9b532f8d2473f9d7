//! Unvisited nodes keyed by tentative distance.

use std::cmp::Reverse;
use std::collections::HashMap;

use priority_queue::PriorityQueue;

use crate::graph::NodeId;
use crate::journey::{Distance, Journey};

/// Min-queue over `(distance, node)`, so equal distances pop the lowest identifier.
pub(crate) struct Frontier<N: NodeId> {
    queue: PriorityQueue<N, Reverse<(Distance, N)>>,
    journeys: HashMap<N, Journey<N>>,
}

impl<N: NodeId> Frontier<N> {
    pub(crate) fn new() -> Self {
        Frontier {
            queue: PriorityQueue::new(),
            journeys: HashMap::new(),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.queue.clear();
        self.journeys.clear();
    }

    pub(crate) fn insert(&mut self, node: N, journey: Journey<N>) {
        self.queue
            .push(node.clone(), Reverse((journey.distance, node.clone())));
        self.journeys.insert(node, journey);
    }

    pub(crate) fn get(&self, node: &N) -> Option<&Journey<N>> {
        self.journeys.get(node)
    }

    /// Replace the label of `node` if `journey` is strictly shorter.
    pub(crate) fn relax(&mut self, node: &N, journey: Journey<N>) -> bool {
        let Some(current) = self.journeys.get_mut(node) else {
            return false;
        };
        if journey.distance >= current.distance {
            return false;
        }
        self.queue
            .change_priority(node, Reverse((journey.distance, node.clone())));
        *current = journey;
        true
    }

    /// Remove and return the node with the smallest tentative distance.
    pub(crate) fn pop_nearest(&mut self) -> Option<(N, Journey<N>)> {
        let (node, _) = self.queue.pop()?;
        let journey = self.journeys.remove(&node)?;
        Some((node, journey))
    }

    /// Smallest tentative distance left, without removing it.
    pub(crate) fn nearest_distance(&self) -> Option<Distance> {
        self.queue.peek().map(|(_, Reverse((distance, _)))| *distance)
    }

    pub(crate) fn len(&self) -> usize {
        self.journeys.len()
    }
}
