//! Adjacency fixtures shared by unit tests.

use crate::graph::PolytopeGraph;

/// Cube adjacency as stored in the polytope dataset (vertex 3 is the usual chop target).
pub(crate) fn dataset_cube() -> Vec<Vec<u8>> {
    vec![
        vec![0, 1, 0, 1, 1, 0, 0, 0],
        vec![1, 0, 1, 0, 0, 1, 0, 0],
        vec![0, 1, 0, 1, 0, 0, 0, 1],
        vec![1, 0, 1, 0, 0, 0, 1, 0],
        vec![1, 0, 0, 0, 0, 1, 1, 0],
        vec![0, 1, 0, 0, 1, 0, 0, 1],
        vec![0, 0, 0, 1, 1, 0, 0, 1],
        vec![0, 0, 1, 0, 0, 1, 1, 0],
    ]
}

pub(crate) fn dataset_octahedron() -> Vec<Vec<u8>> {
    vec![
        vec![0, 1, 1, 1, 1, 0],
        vec![1, 0, 1, 0, 1, 1],
        vec![1, 1, 0, 1, 0, 1],
        vec![1, 0, 1, 0, 1, 1],
        vec![1, 1, 0, 1, 0, 1],
        vec![0, 1, 1, 1, 1, 0],
    ]
}

pub(crate) fn complete(n: usize) -> PolytopeGraph {
    let mut edges = Vec::new();
    for u in 0..n {
        for v in u + 1..n {
            edges.push((u, v));
        }
    }
    PolytopeGraph::from_edges(n, &edges).unwrap()
}

pub(crate) fn k33() -> PolytopeGraph {
    let mut edges = Vec::new();
    for a in 0..3 {
        for b in 3..6 {
            edges.push((a, b));
        }
    }
    PolytopeGraph::from_edges(6, &edges).unwrap()
}

pub(crate) fn cycle(n: usize) -> PolytopeGraph {
    let edges: Vec<(usize, usize)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    PolytopeGraph::from_edges(n, &edges).unwrap()
}
