use proptest::prelude::*;

use super::*;
use crate::embedding::TutteOracle;
use crate::faces::{collect_faces, p_vector};
use crate::fixtures::{complete, dataset_cube};
use crate::solids;

fn sorted_sizes(graph: &PolytopeGraph, embedding: &RotationSystem) -> Vec<usize> {
    let faces = collect_faces(graph, embedding).unwrap();
    let mut sizes: Vec<usize> = faces.faces().iter().map(|f| f.len()).collect();
    sizes.sort_unstable();
    sizes
}

#[test]
fn truncated_cube() {
    let emb = solids::cube().unwrap();
    let g = emb.graph();
    let t = truncate(&g, &emb, 0).unwrap();
    assert_eq!(t.graph.num_vertices(), 10);
    assert_eq!(t.graph.num_edges(), 15);
    assert!(t.graph.is_simple());
    assert_eq!(p_vector(&t.graph, &t.embedding).unwrap().as_slice(), &[1, 3, 3]);
    assert_eq!(t.new_face, vec![7, 8, 9]);
    assert_eq!(t.removed(), Some(0));
    assert_eq!(t.map_vertex(0), None);
    assert_eq!(t.map_vertex(5), Some(4));
    assert_eq!(t.map_vertex(8), None);
}

#[test]
fn dataset_cube_through_oracle() {
    let g = PolytopeGraph::from_adjacency_matrix(&dataset_cube()).unwrap();
    let t = truncate_with(&g, &TutteOracle::default(), 3).unwrap();
    assert_eq!(
        t.relabel,
        vec![Some(0), Some(1), Some(2), None, Some(3), Some(4), Some(5), Some(6)]
    );
    assert_eq!(p_vector(&t.graph, &t.embedding).unwrap().as_slice(), &[1, 3, 3]);
    // Former neighbors 0, 2, 6 each gain exactly one ring vertex.
    for old in [0, 2, 6] {
        let nb = t.map_vertex(old).unwrap();
        let ring: Vec<_> = t
            .graph
            .neighbors(nb)
            .iter()
            .filter(|&&w| t.new_face.contains(&w))
            .collect();
        assert_eq!(ring.len(), 1);
    }
}

#[test]
fn rotation_slots_are_rewired_in_place() {
    let emb = solids::prism(5).unwrap();
    let g = emb.graph();
    let v = 7;
    let t = truncate(&g, &emb, v).unwrap();
    let ring = emb.rotation_order(v);
    let d = ring.len();
    for (i, &nb) in ring.iter().enumerate() {
        let w = t.new_face[i];
        let new_nb = t.map_vertex(nb).unwrap();
        // Same slot, new target.
        let expected: Vec<usize> = emb
            .rotation_order(nb)
            .iter()
            .map(|&x| if x == v { w } else { t.map_vertex(x).unwrap() })
            .collect();
        assert_eq!(t.embedding.rotation_order(new_nb), expected.as_slice());
        assert_eq!(
            t.embedding.rotation_order(w),
            &[new_nb, t.new_face[(i + 1) % d], t.new_face[(i + d - 1) % d]]
        );
    }
    let n = g.num_vertices();
    assert_eq!(t.new_face, (n - 1..n - 1 + d).collect::<Vec<_>>());
}

#[test]
fn incident_faces_grow_by_one() {
    let emb = solids::pyramid(6).unwrap();
    let g = emb.graph();
    let before = collect_faces(&g, &emb).unwrap();
    for v in [0, 6] {
        let t = truncate(&g, &emb, v).unwrap();
        let mut expected: Vec<usize> = before
            .faces()
            .iter()
            .map(|f| f.len() + usize::from(f.contains(v)))
            .collect();
        expected.push(g.degree(v));
        expected.sort_unstable();
        assert_eq!(sorted_sizes(&t.graph, &t.embedding), expected);
        // The ring itself is one of the faces.
        let ring = crate::faces::trace_face(&t.embedding, t.new_face[1], t.new_face[0]).unwrap();
        assert_eq!(ring.key(), t.new_face);
    }
}

#[test]
fn pyramid_apex_becomes_pentagon() {
    let emb = solids::pyramid(5).unwrap();
    let g = emb.graph();
    assert_eq!(p_vector(&g, &emb).unwrap().as_slice(), &[5, 0, 1]);
    let t = truncate(&g, &emb, 5).unwrap();
    assert_eq!(p_vector(&t.graph, &t.embedding).unwrap().as_slice(), &[0, 5, 2]);
    assert!(t.graph.is_simple());
}

#[test]
fn input_is_not_mutated() {
    let emb = solids::octahedron().unwrap();
    let g = emb.graph();
    let (g0, emb0) = (g.clone(), emb.clone());
    let t = truncate(&g, &emb, 2).unwrap();
    assert_eq!(g, g0);
    assert_eq!(emb, emb0);
    // Octahedron vertices have degree 4: one new square.
    assert_eq!(p_vector(&t.graph, &t.embedding).unwrap().as_slice(), &[4, 5]);
}

#[test]
fn preconditions_are_checked() {
    let emb = solids::cube().unwrap();
    let g = emb.graph();
    assert_eq!(
        truncate(&g, &emb, 8),
        Err(TruncateError::UnknownVertex { vertex: 8, n: 8 })
    );
    let octa = solids::octahedron().unwrap().graph();
    assert_eq!(
        truncate(&octa, &emb, 0),
        Err(TruncateError::EmbeddingMismatch)
    );

    let triangle = RotationSystem::new(vec![vec![1, 2], vec![2, 0], vec![0, 1]]).unwrap();
    assert_eq!(
        truncate(&triangle.graph(), &triangle, 0),
        Err(TruncateError::DegreeTooSmall { vertex: 0, degree: 2 })
    );
}

#[test]
fn oracle_failure_is_wrapped() {
    let err = truncate_with(&complete(5), &TutteOracle::default(), 0).unwrap_err();
    assert!(matches!(err, TruncateError::NoEmbedding(_)));
    assert!(std::error::Error::source(&err).is_some());
}

fn base_solid(family: usize, n: usize) -> RotationSystem {
    match family {
        0 => solids::prism(n),
        1 => solids::pyramid(n),
        _ => solids::bipyramid(n),
    }
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn truncation_sequences_stay_polytopal(
        family in 0usize..3,
        base in 3usize..8,
        peak_first in any::<bool>(),
        picks in proptest::collection::vec(any::<usize>(), 0..6),
    ) {
        let mut emb = base_solid(family, base);
        let mut g = emb.graph();
        let peak = (0..g.num_vertices()).max_by_key(|&v| g.degree(v)).unwrap();
        let steps: Vec<usize> = peak_first.then_some(peak).into_iter().chain(picks).collect();
        for pick in steps {
            let v = pick % g.num_vertices();
            let (nv, ne, d) = (g.num_vertices(), g.num_edges(), g.degree(v));
            let before = collect_faces(&g, &emb).unwrap();
            let t = truncate(&g, &emb, v).unwrap();
            prop_assert_eq!(t.graph.num_vertices(), nv + d - 1);
            prop_assert_eq!(t.graph.num_edges(), ne + d);
            if family == 0 {
                prop_assert!(t.graph.is_simple());
            }
            let faces = collect_faces(&t.graph, &t.embedding).unwrap();
            prop_assert_eq!(faces.euler_characteristic(), 2);
            prop_assert_eq!(faces.len(), before.len() + 1);
            // Faces through v gain one edge, the rest keep their size, plus one d-gon.
            let mut expected: Vec<usize> = before
                .faces()
                .iter()
                .map(|f| f.len() + usize::from(f.contains(v)))
                .collect();
            expected.push(d);
            expected.sort_unstable();
            prop_assert_eq!(sorted_sizes(&t.graph, &t.embedding), expected);
            g = t.graph;
            emb = t.embedding;
        }
    }
}
