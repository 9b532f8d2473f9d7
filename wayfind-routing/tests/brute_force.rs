//! Compare Dijkstra against exhaustive path enumeration on random small graphs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wayfind_routing::{Error, Graph, ShortestPathEngine, Weight};

const GRAPHS: u64 = 200;
const MAX_NODES: u32 = 7;

fn random_graph(rng: &mut StdRng) -> Graph<u32> {
    let n = rng.gen_range(1..=MAX_NODES);
    let mut graph = Graph::new();
    for node in 0..n {
        graph.add_node(node);
    }
    for from in 0..n {
        for to in 0..n {
            if from != to && rng.gen_bool(0.35) {
                // zero weights included on purpose
                graph.add_edge(from, to, rng.gen_range(0..10));
            }
        }
    }
    graph
}

/// Cheapest simple path by depth-first enumeration.
fn brute_force(graph: &Graph<u32>, start: u32, finish: u32) -> Option<Weight> {
    fn walk(
        graph: &Graph<u32>,
        node: u32,
        finish: u32,
        cost: Weight,
        seen: &mut Vec<u32>,
        best: &mut Option<Weight>,
    ) {
        if node == finish {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        for (&next, weight) in graph.neighbors(&node) {
            if seen.contains(&next) {
                continue;
            }
            seen.push(next);
            walk(graph, next, finish, cost + weight, seen, best);
            seen.pop();
        }
    }

    let mut best = None;
    walk(graph, start, finish, 0, &mut vec![start], &mut best);
    best
}

#[test]
fn test_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..GRAPHS {
        let graph = random_graph(&mut rng);
        let nodes: Vec<u32> = graph.nodes().copied().collect();
        let mut engine = ShortestPathEngine::new(graph.clone());

        for &start in &nodes {
            for &finish in &nodes {
                let expected = brute_force(&graph, start, finish);
                match (engine.shortest_path(&start, &finish), expected) {
                    (Ok(distance), Some(best)) => {
                        assert_eq!(distance, best, "{start} -> {finish} in {graph:?}");

                        let route = engine.route_to(&finish).expect("finish is finalized");
                        assert_eq!(route.start(), Some(&start));
                        assert_eq!(route.finish(), Some(&finish));
                        assert_eq!(route.weight_in(&graph), Some(distance));
                        assert_eq!(route.distance(), distance);
                    }
                    (Err(Error::NodeUnreachable { .. }), None) => {
                        assert!(engine.route_to(&finish).is_err());
                    }
                    (got, expected) => {
                        panic!("{start} -> {finish}: got {got:?}, expected {expected:?}")
                    }
                }
            }
        }
    }
}

#[test]
fn test_start_to_itself_is_zero() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let graph = random_graph(&mut rng);
        let nodes: Vec<u32> = graph.nodes().copied().collect();
        let mut engine = ShortestPathEngine::new(graph);
        for node in nodes {
            assert_eq!(engine.shortest_path(&node, &node), Ok(0));
            assert_eq!(engine.route_to(&node).map(|r| r.into_nodes()), Ok(vec![node]));
        }
    }
}

#[test]
fn test_equal_cost_routes_prefer_lowest_identifier() {
    // 0 -> 1 -> 3 and 0 -> 2 -> 3 both cost 2
    let graph: Graph<u32> = [(0, 2, 1), (0, 1, 1), (2, 3, 1), (1, 3, 1)]
        .into_iter()
        .collect();
    let mut engine = ShortestPathEngine::new(graph);

    for _ in 0..3 {
        assert_eq!(engine.shortest_path(&0, &3), Ok(2));
        assert_eq!(engine.route_to(&3).map(|r| r.into_nodes()), Ok(vec![0, 1, 3]));
    }
}
