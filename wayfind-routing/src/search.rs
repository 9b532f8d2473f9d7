//! Independent queries over a borrowed graph.

use std::borrow::Borrow;
use std::fmt;

use wayfind_common::Result;

use crate::config::SearchConfig;
use crate::graph::{Graph, NodeId, Weight};
use crate::labels::Labels;
use crate::route::Route;

/// One query's labels over a shared read-only graph.
///
/// Searches borrowing the same graph can run on different threads at once.
pub struct Search<'g, N: NodeId> {
    graph: &'g Graph<N>,
    config: SearchConfig,
    labels: Labels<N>,
}

impl<'g, N: NodeId> Search<'g, N> {
    pub fn new(graph: &'g Graph<N>, config: SearchConfig) -> Self {
        Search {
            graph,
            config,
            labels: Labels::new(),
        }
    }

    pub fn graph(&self) -> &'g Graph<N> {
        self.graph
    }

    pub fn shortest_path<Q>(&mut self, start: &Q, finish: &Q) -> Result<Weight>
    where
        N: Borrow<Q>,
        Q: Ord + fmt::Display + ?Sized,
    {
        self.labels
            .shortest_path(self.graph, &self.config, start, finish)
    }

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

    pub fn finalized(&self) -> impl Iterator<Item = (&N, Weight)> + '_ {
        self.labels.finalized()
    }
}
