//! The five-node graph used by the CLI and the tests.

use crate::graph::Graph;

/// Directed sample graph:
///
/// ```text
/// a -> b:4, d:1
/// b -> a:3, c:2
/// c -> b:4, e:5
/// d -> a:1, e:1
/// e -> c:3, d:1
/// ```
///
/// Shortest a -> c: cost 5 via a -> d -> e -> c
pub fn sample_graph() -> Graph<&'static str> {
    Graph::from_adjacency([
        ("a", vec![("b", 4), ("d", 1)]),
        ("b", vec![("a", 3), ("c", 2)]),
        ("c", vec![("b", 4), ("e", 5)]),
        ("d", vec![("a", 1), ("e", 1)]),
        ("e", vec![("c", 3), ("d", 1)]),
    ])
}
