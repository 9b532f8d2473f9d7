//! Directed weighted graph stored as a nested adjacency map.
//!
//! Every identifier mentioned by the adjacency structure is a node: a neighbor
//! that never appears as a source is registered as a sink with no outgoing
//! edges. Weights are unsigned, so every edge is non-negative by construction.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;

use crate::config::SearchConfig;
use crate::search::Search;

/// Cost of traversing one directed edge.
pub type Weight = u64;

/// Opaque node identifier.
///
/// `Ord` fixes the iteration order of the graph and breaks ties between
/// frontier nodes at equal distance (lowest identifier first).
pub trait NodeId: Clone + Ord + Hash + fmt::Debug + fmt::Display {}

impl<T> NodeId for T where T: Clone + Ord + Hash + fmt::Debug + fmt::Display {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<N: NodeId> {
    adjacency: BTreeMap<N, BTreeMap<N, Weight>>,
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> Graph<N> {
    pub fn new() -> Self {
        Graph {
            adjacency: BTreeMap::new(),
        }
    }

    /// Build a graph from a mapping of node to (neighbor to weight).
    pub fn from_adjacency<A, E>(adjacency: A) -> Self
    where
        A: IntoIterator<Item = (N, E)>,
        E: IntoIterator<Item = (N, Weight)>,
    {
        let mut graph = Graph::new();
        for (from, edges) in adjacency {
            graph.add_node(from.clone());
            for (to, weight) in edges {
                graph.add_edge(from.clone(), to, weight);
            }
        }
        graph
    }

    /// Register a node without edges. Existing nodes keep their edges.
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Add the directed edge `from -> to`, replacing the weight of an existing one.
    pub fn add_edge(&mut self, from: N, to: N, weight: Weight) {
        self.add_node(to.clone());
        self.adjacency.entry(from).or_default().insert(to, weight);
    }

    pub fn contains<Q>(&self, node: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.adjacency.contains_key(node)
    }

    /// The stored identifier equal to `node`.
    pub fn node<Q>(&self, node: &Q) -> Option<&N>
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.adjacency.get_key_value(node).map(|(key, _)| key)
    }

    /// All nodes in identifier order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.adjacency.keys()
    }

    /// Outgoing edges of `node` as `(neighbor, weight)`; empty for unknown nodes.
    pub fn neighbors<Q>(&self, node: &Q) -> impl Iterator<Item = (&N, Weight)> + '_
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(to, &weight)| (to, weight)))
    }

    /// Weight of the direct edge `origin -> destination`, if there is one.
    pub fn distance<Q>(&self, origin: &Q, destination: &Q) -> Option<Weight>
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.adjacency.get(origin)?.get(destination).copied()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Independent search over this graph with the default configuration.
    pub fn search(&self) -> Search<'_, N> {
        Search::new(self, SearchConfig::default())
    }

    pub fn search_with(&self, config: SearchConfig) -> Search<'_, N> {
        Search::new(self, config)
    }
}

impl<N: NodeId> FromIterator<(N, N, Weight)> for Graph<N> {
    fn from_iter<T: IntoIterator<Item = (N, N, Weight)>>(iter: T) -> Self {
        let mut graph = Graph::new();
        for (from, to, weight) in iter {
            graph.add_edge(from, to, weight);
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph<&'static str> {
        [("x", "y", 2), ("y", "z", 3), ("x", "z", 9)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_edges_are_directed() {
        let g = triangle();
        assert_eq!(g.distance("x", "y"), Some(2));
        assert_eq!(g.distance("y", "x"), None);
        assert_eq!(g.distance("x", "x"), None);
        assert_eq!(g.distance("nowhere", "x"), None);
    }

    #[test]
    fn test_neighbors_register_as_sinks() {
        let g = triangle();
        assert!(g.contains("z"));
        assert_eq!(g.neighbors("z").count(), 0);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_nodes_in_identifier_order() {
        let g: Graph<u32> = [(3, 1, 1), (2, 3, 1)].into_iter().collect();
        assert_eq!(g.nodes().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_add_edge_replaces_weight() {
        let mut g = triangle();
        g.add_edge("x", "y", 7);
        assert_eq!(g.distance("x", "y"), Some(7));
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_add_node_keeps_edges() {
        let mut g = triangle();
        g.add_node("x");
        g.add_node("lonely");
        assert_eq!(g.neighbors("x").count(), 2);
        assert!(g.contains("lonely"));
        assert_eq!(g.node_count(), 4);
    }

    #[test]
    fn test_from_adjacency() {
        let g = Graph::from_adjacency([
            ("p".to_string(), vec![("q".to_string(), 1)]),
            ("r".to_string(), vec![]),
        ]);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.distance("p", "q"), Some(1));
        assert_eq!(g.node("r").map(String::as_str), Some("r"));
        assert!(!g.is_empty());
    }
}
