use super::*;
use crate::faces::p_vector_with;
use crate::fixtures::{complete, cycle, dataset_cube, dataset_octahedron, k33};
use crate::graph::PolytopeGraph;
use crate::solids;

fn assert_invalid<T: std::fmt::Debug>(res: Result<T, EmbeddingError>) {
    assert!(
        matches!(res, Err(EmbeddingError::InvalidRotation { .. })),
        "expected InvalidRotation, got {res:?}"
    );
}

#[test]
fn rotation_tables_are_validated() {
    assert_invalid(RotationSystem::new(vec![vec![1], vec![5]]));
    assert_invalid(RotationSystem::new(vec![vec![0, 1], vec![0]]));
    assert_invalid(RotationSystem::new(vec![vec![1, 1], vec![0]]));
    assert_invalid(RotationSystem::new(vec![vec![1, 2], vec![0], vec![]]));
    let empty = RotationSystem::new(Vec::new()).unwrap();
    assert_eq!(empty.num_vertices(), 0);
    assert_eq!(empty.num_half_edges(), 0);
}

#[test]
fn half_edge_bookkeeping() {
    let emb = solids::prism(5).unwrap();
    assert_eq!(emb.num_half_edges(), 30);
    assert_eq!(emb.num_edges(), 15);
    for u in 0..emb.num_vertices() {
        for &v in emb.rotation_order(u) {
            let h = emb.half_edge(u, v).unwrap();
            assert_eq!(emb.endpoints(h), (u, v));
            let t = emb.twin(h);
            assert_eq!(emb.endpoints(t), (v, u));
            assert_eq!(emb.twin(t), h);
        }
    }
    assert!(emb.half_edge(0, 7).is_none());
    assert!(emb.half_edge(0, 99).is_none());
}

#[test]
fn successor_turns_to_next_neighbor_at_head() {
    let emb = solids::cube().unwrap();
    for u in 0..emb.num_vertices() {
        for &v in emb.rotation_order(u) {
            let h = emb.half_edge(u, v).unwrap();
            let (tail, w) = emb.endpoints(emb.successor(h));
            assert_eq!(tail, v);
            let rot = emb.rotation_order(v);
            let at = rot.iter().position(|&x| x == u).unwrap();
            assert_eq!(w, rot[(at + 1) % rot.len()]);
        }
    }
}

#[test]
fn oriented_faces_round_trip_through_graph() {
    let emb = solids::tetrahedron().unwrap();
    let g = emb.graph();
    assert_eq!(g, complete(4));
    assert!(emb.describes(&g));
    assert!(!emb.describes(&complete(5)));
}

#[test]
fn oriented_faces_are_validated() {
    // Same directed edge (0, 1) in two faces.
    assert_invalid(RotationSystem::from_oriented_faces(
        4,
        &[vec![0, 1, 2], vec![0, 1, 3]],
    ));
    // A lone triangle leaves every corner open.
    assert_invalid(RotationSystem::from_oriented_faces(3, &[vec![0, 1, 2]]));
    assert_invalid(RotationSystem::from_oriented_faces(2, &[vec![0, 1]]));
    assert_invalid(RotationSystem::from_oriented_faces(3, &[vec![0, 1, 7]]));
}

#[test]
fn fixed_rotation_is_an_oracle_for_its_own_graph() {
    let emb = solids::octahedron().unwrap();
    let g = emb.graph();
    assert_eq!(emb.embed(&g).unwrap(), emb);
    assert_invalid(emb.embed(&complete(6)));
}

#[test]
fn tutte_recovers_dataset_solids() {
    let oracle = TutteOracle::default();
    let cube = PolytopeGraph::from_adjacency_matrix(&dataset_cube()).unwrap();
    let emb = oracle.embed(&cube).unwrap();
    assert!(emb.describes(&cube));
    assert_eq!(p_vector_with(&cube, &oracle).unwrap().as_slice(), &[0, 6]);

    let octa = PolytopeGraph::from_adjacency_matrix(&dataset_octahedron()).unwrap();
    assert_eq!(p_vector_with(&octa, &oracle).unwrap().as_slice(), &[8]);
}

#[test]
fn tutte_handles_each_family() {
    let oracle = TutteOracle::new(EmbedCfg {
        outer_radius: 10.0,
        ..EmbedCfg::default()
    });
    for n in 3..8 {
        let g = solids::prism(n).unwrap().graph();
        let p = p_vector_with(&g, &oracle).unwrap();
        assert_eq!(p.count(4), n + if n == 4 { 2 } else { 0 });
        assert_eq!(p.total(), n + 2);

        let g = solids::pyramid(n).unwrap().graph();
        assert_eq!(p_vector_with(&g, &oracle).unwrap().total(), n + 1);
    }
}

#[test]
fn tutte_positions_pin_outer_face_to_circle() {
    let g = solids::prism(6).unwrap().graph();
    let pos = TutteOracle::default().positions(&g).unwrap();
    assert_eq!(pos.len(), 12);
    let on_circle = pos
        .iter()
        .filter(|p| (p.norm() - 1.0).abs() < 1e-9)
        .count();
    assert!(on_circle >= 3);
    assert!(pos.iter().all(|p| p.norm() <= 1.0 + 1e-9));
}

#[test]
fn tutte_rejects_non_polytopal_inputs() {
    let oracle = TutteOracle::default();
    assert!(matches!(
        oracle.embed(&complete(3)),
        Err(EmbeddingError::NotPolytopal { .. })
    ));
    assert!(matches!(
        oracle.embed(&cycle(6)),
        Err(EmbeddingError::NotPolytopal { .. })
    ));
    let two_tetrahedra = PolytopeGraph::from_edges(
        8,
        &[
            (0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3),
            (4, 5), (4, 6), (4, 7), (5, 6), (5, 7), (6, 7),
        ],
    )
    .unwrap();
    assert!(matches!(
        oracle.embed(&two_tetrahedra),
        Err(EmbeddingError::NotPolytopal { .. })
    ));
}

#[test]
fn tutte_rejects_non_planar_graphs() {
    let oracle = TutteOracle::default();
    assert!(oracle.embed(&complete(5)).is_err());
    assert!(oracle.embed(&k33()).is_err());
}
