//! Shortest-path engine owning its graph.

use std::borrow::Borrow;
use std::fmt;

use wayfind_common::Result;

use crate::config::SearchConfig;
use crate::graph::{Graph, NodeId, Weight};
use crate::labels::Labels;
use crate::route::Route;

/// Dijkstra over an owned, immutable graph.
///
/// Labels from the last [`shortest_path`](Self::shortest_path) call are kept
/// for [`route_to`](Self::route_to) and are discarded by the next call. Use
/// [`Graph::search`] for several independent queries over one shared graph.
pub struct ShortestPathEngine<N: NodeId> {
    graph: Graph<N>,
    config: SearchConfig,
    labels: Labels<N>,
}

impl<N: NodeId> ShortestPathEngine<N> {
    pub fn new(graph: Graph<N>) -> Self {
        Self::with_config(graph, SearchConfig::default())
    }

    pub fn with_config(graph: Graph<N>, config: SearchConfig) -> Self {
        ShortestPathEngine {
            graph,
            config,
            labels: Labels::new(),
        }
    }

    pub fn graph(&self) -> &Graph<N> {
        &self.graph
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Total weight of the cheapest directed path from `start` to `finish`.
    ///
    /// Fails with `NodeNotFound` when `start` is not in the graph and with
    /// `NodeUnreachable` when `finish` is never finalized.
    pub fn shortest_path<Q>(&mut self, start: &Q, finish: &Q) -> Result<Weight>
    where
        N: Borrow<Q>,
        Q: Ord + fmt::Display + ?Sized,
    {
        self.labels
            .shortest_path(&self.graph, &self.config, start, finish)
    }

    /// Route from the last run's start to `node`, which must be finalized.
    pub fn route_to<Q>(&self, node: &Q) -> Result<Route<N>>
    where
        N: Borrow<Q>,
        Q: Ord + fmt::Display + ?Sized,
    {
        self.labels.route_to(node)
    }

    pub fn finalized_distance<Q>(&self, node: &Q) -> Option<Weight>
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.labels.finalized_distance(node)
    }

    /// Finalized nodes of the last run with their distances, in identifier order.
    pub fn finalized(&self) -> impl Iterator<Item = (&N, Weight)> + '_ {
        self.labels.finalized()
    }
}
