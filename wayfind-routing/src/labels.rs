//! Label-setting Dijkstra run over a [`Graph`].
//!
//! Every node starts in the frontier. The nearest one is finalized on each
//! step after relaxing its outgoing edges; a node never leaves the finalized
//! set once it is there. Nodes still at infinite distance when they become the
//! nearest are unreachable and are left in the frontier.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use wayfind_common::{Error, Result};

use crate::config::SearchConfig;
use crate::frontier::Frontier;
use crate::graph::{Graph, NodeId, Weight};
use crate::journey::Journey;
use crate::route::Route;

pub(crate) struct Labels<N: NodeId> {
    frontier: Frontier<N>,
    finalized: BTreeMap<N, Journey<N>>,
}

impl<N: NodeId> Labels<N> {
    pub(crate) fn new() -> Self {
        Labels {
            frontier: Frontier::new(),
            finalized: BTreeMap::new(),
        }
    }

    fn reset(&mut self) {
        self.frontier.clear();
        self.finalized.clear();
    }

    pub(crate) fn shortest_path<Q>(
        &mut self,
        graph: &Graph<N>,
        config: &SearchConfig,
        start: &Q,
        finish: &Q,
    ) -> Result<Weight>
    where
        N: Borrow<Q>,
        Q: Ord + fmt::Display + ?Sized,
    {
        self.reset();

        let start_node = graph
            .node(start)
            .ok_or_else(|| Error::node_not_found(start, graph.nodes()))?;

        for node in graph.nodes() {
            let journey = if node == start_node {
                Journey::origin()
            } else {
                Journey::unreached()
            };
            self.frontier.insert(node.clone(), journey);
        }

        let mut relaxations = 0usize;
        // First edge whose total did not fit in a `Weight`.
        let mut overflow: Option<(N, N)> = None;

        while let Some(nearest) = self.frontier.nearest_distance() {
            if !nearest.is_finite() {
                break;
            }
            let Some((current, journey)) = self.frontier.pop_nearest() else {
                break;
            };

            for (neighbor, weight) in graph.neighbors::<N>(&current) {
                if self.frontier.get(neighbor).is_none() {
                    continue;
                }
                // longer than any finite label, never an improvement
                let Some(distance) = journey.distance.checked_add(weight) else {
                    tracing::trace!(from = %current, to = %neighbor, weight, "skipped overflowing edge");
                    overflow.get_or_insert_with(|| (current.clone(), neighbor.clone()));
                    continue;
                };
                let improved = self.frontier.relax(
                    neighbor,
                    Journey {
                        distance,
                        previous: Some(current.clone()),
                    },
                );
                if improved {
                    relaxations += 1;
                    tracing::trace!(from = %current, to = %neighbor, %distance, "relaxed edge");
                }
            }

            let reached_finish = <N as Borrow<Q>>::borrow(&current) == finish;
            self.finalized.insert(current, journey);
            if reached_finish && config.stop_at_finish {
                break;
            }
        }

        tracing::debug!(
            %start,
            %finish,
            finalized = self.finalized.len(),
            unvisited = self.frontier.len(),
            relaxations,
            overflowed = overflow.is_some(),
            "shortest path run finished"
        );

        if let Some(distance) = self.finalized_distance(finish) {
            return Ok(distance);
        }
        Err(match overflow {
            Some((from, to)) => Error::distance_overflow(&from, &to),
            None => Error::node_unreachable(start, finish),
        })
    }

    pub(crate) fn route_to<Q>(&self, node: &Q) -> Result<Route<N>>
    where
        N: Borrow<Q>,
        Q: Ord + fmt::Display + ?Sized,
    {
        let (target, journey) = self
            .finalized
            .get_key_value(node)
            .ok_or_else(|| Error::node_not_finalized(node))?;
        let distance = journey
            .distance
            .finite()
            .ok_or_else(|| Error::node_not_finalized(node))?;

        let mut nodes = vec![target.clone()];
        let mut previous = journey.previous.as_ref();
        while let Some(p) = previous {
            nodes.push(p.clone());
            previous = self.finalized.get::<N>(p).and_then(|j| j.previous.as_ref());
        }
        nodes.reverse();

        Ok(Route::new(nodes, distance))
    }

    pub(crate) fn finalized_distance<Q>(&self, node: &Q) -> Option<Weight>
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.finalized.get(node).and_then(|j| j.distance.finite())
    }

    pub(crate) fn finalized(&self) -> impl Iterator<Item = (&N, Weight)> + '_ {
        self.finalized
            .iter()
            .filter_map(|(node, j)| j.distance.finite().map(|d| (node, d)))
    }
}
