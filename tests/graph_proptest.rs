//! Model-based property tests for the undirected graph: random mutation
//! sequences checked against a normalized edge-set model, plus direct
//! verification of the symmetry invariant.

use proptest::prelude::*;
use std::collections::HashSet;
use strand::{AdjacencyGraph, Error};

#[derive(Debug, Clone)]
enum Operation {
    AddVertex(u8),
    AddEdge(u8, u8),
    RemoveEdge(u8, u8),
    RemoveVertex(u8),
}

fn operation() -> impl Strategy<Value = Operation> {
    // A handful of vertex labels keeps the graphs dense enough to collide.
    let vertex = 0u8..6;
    prop_oneof![
        vertex.clone().prop_map(Operation::AddVertex),
        (vertex.clone(), vertex.clone()).prop_map(|(a, b)| Operation::AddEdge(a, b)),
        (vertex.clone(), vertex.clone()).prop_map(|(a, b)| Operation::RemoveEdge(a, b)),
        vertex.prop_map(Operation::RemoveVertex),
    ]
}

fn normalize(a: u8, b: u8) -> (u8, u8) {
    (a.min(b), a.max(b))
}

/// Checks that every recorded adjacency is mirrored and names a live vertex.
fn assert_symmetric_and_clean(graph: &AdjacencyGraph<u8>) -> Result<(), TestCaseError> {
    for v in graph.vertices() {
        let neighbors = graph.neighbors(v).expect("iterated vertex exists");
        for n in neighbors {
            prop_assert!(
                graph.contains_vertex(n),
                "vertex {v} lists absent neighbour {n}"
            );
            prop_assert!(
                graph.neighbors(n).expect("checked present").contains(v),
                "edge {v}-{n} recorded in one direction only"
            );
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn test_graph_matches_edge_set_model(ops in proptest::collection::vec(operation(), 1..150)) {
        let mut graph: AdjacencyGraph<u8> = AdjacencyGraph::new();
        let mut vertices: HashSet<u8> = HashSet::new();
        let mut edges: HashSet<(u8, u8)> = HashSet::new();

        for op in ops {
            match op {
                Operation::AddVertex(v) => {
                    graph.add_vertex(v);
                    vertices.insert(v);
                }
                Operation::AddEdge(a, b) => {
                    graph.add_edge(a, b);
                    vertices.insert(a);
                    vertices.insert(b);
                    edges.insert(normalize(a, b));
                }
                Operation::RemoveEdge(a, b) => {
                    let result = graph.remove_edge(&a, &b);
                    if vertices.contains(&a) && vertices.contains(&b) {
                        prop_assert_eq!(result, Ok(()));
                        edges.remove(&normalize(a, b));
                    } else {
                        prop_assert_eq!(result, Err(Error::VertexNotFound));
                    }
                }
                Operation::RemoveVertex(v) => {
                    prop_assert_eq!(graph.remove_vertex(&v), vertices.remove(&v));
                    edges.retain(|&(a, b)| a != v && b != v);
                }
            }

            assert_symmetric_and_clean(&graph)?;
        }

        // Vertex sets agree.
        let graph_vertices: HashSet<u8> = graph.vertices().copied().collect();
        prop_assert_eq!(&graph_vertices, &vertices);

        // Edge membership agrees for every pair of live vertices, in both
        // query directions.
        for &a in &vertices {
            for &b in &vertices {
                let expected = edges.contains(&normalize(a, b));
                prop_assert_eq!(graph.has_edge(&a, &b), Ok(expected));
                prop_assert_eq!(graph.has_edge(&b, &a), Ok(expected));
            }
        }
    }

    #[test]
    fn test_removed_vertex_never_lingers(
        ops in proptest::collection::vec(operation(), 1..100),
        victim in 0u8..6,
    ) {
        let mut graph: AdjacencyGraph<u8> = AdjacencyGraph::new();
        for op in ops {
            match op {
                Operation::AddVertex(v) => graph.add_vertex(v),
                Operation::AddEdge(a, b) => graph.add_edge(a, b),
                Operation::RemoveEdge(a, b) => {
                    let _ = graph.remove_edge(&a, &b);
                }
                Operation::RemoveVertex(v) => {
                    graph.remove_vertex(&v);
                }
            }
        }

        graph.remove_vertex(&victim);
        for v in graph.vertices() {
            let neighbors = graph.neighbors(v).expect("iterated vertex exists");
            prop_assert!(!neighbors.contains(&victim));
        }
    }
}
