//! Ordered node sequence from the start of a run to one finalized node.

use std::fmt;

use serde::Serialize;

use crate::graph::{Graph, NodeId, Weight};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route<N> {
    nodes: Vec<N>,
    distance: Weight,
}

impl<N> Route<N> {
    /// `nodes` is never empty: it holds at least the target itself.
    pub(crate) fn new(nodes: Vec<N>, distance: Weight) -> Self {
        debug_assert!(!nodes.is_empty());
        Route { nodes, distance }
    }

    /// Identifiers in start-to-target order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }

    pub fn distance(&self) -> Weight {
        self.distance
    }

    /// Number of edges travelled.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&N> {
        self.nodes.first()
    }

    pub fn finish(&self) -> Option<&N> {
        self.nodes.last()
    }
}

impl<N: NodeId> Route<N> {
    /// Sum of the graph's edge weights along the route, `None` if an edge is missing.
    pub fn weight_in(&self, graph: &Graph<N>) -> Option<Weight> {
        self.nodes.windows(2).try_fold(0, |total: Weight, pair| {
            let weight = graph.distance(&pair[0], &pair[1])?;
            total.checked_add(weight)
        })
    }
}

impl<N: fmt::Display> fmt::Display for Route<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}
