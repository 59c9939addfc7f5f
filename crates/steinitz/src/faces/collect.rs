//! Face collection and p-vector extraction.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::trace::walk;
use super::types::{Face, FaceError, FaceId, FaceSet, PVector};
use crate::cfg::{MIN_FACE_SIZE, SPHERE_EULER};
use crate::embedding::{EmbeddingOracle, RotationSystem};
use crate::graph::PolytopeGraph;

/// Collect the deduplicated faces of `graph` under `embedding`.
///
/// Post-conditions (checked): every face has at least three edges and
/// V − E + F = 2.
pub fn collect_faces(
    graph: &PolytopeGraph,
    embedding: &RotationSystem,
) -> Result<FaceSet, FaceError> {
    if !embedding.describes(graph) {
        return Err(FaceError::EmbeddingMismatch);
    }
    let mut consumed = vec![false; embedding.num_half_edges()];
    let mut registry: HashMap<Vec<usize>, FaceId> = HashMap::new();
    let mut faces: Vec<Face> = Vec::new();
    let mut incidence: HashMap<(usize, usize), FaceId> =
        HashMap::with_capacity(embedding.num_half_edges());

    for (u, v) in graph.edges() {
        for (a, b) in [(u, v), (v, u)] {
            let start = embedding
                .half_edge(a, b)
                .ok_or(FaceError::InvalidHalfEdge { u: a, v: b })?;
            if consumed[start.0] {
                continue;
            }
            let (vertices, half_edges) = walk(embedding, start)?;
            for h in &half_edges {
                consumed[h.0] = true;
            }
            let face = Face::new(vertices);
            if face.len() < MIN_FACE_SIZE {
                return Err(FaceError::DegenerateFace { size: face.len() });
            }
            let id = match registry.get(&face.key()) {
                Some(&existing) => {
                    trace!(face = ?face.vertices(), "duplicate_face_vertex_set");
                    existing
                }
                None => {
                    let id = FaceId(faces.len());
                    registry.insert(face.key(), id);
                    faces.push(face);
                    id
                }
            };
            for h in half_edges {
                incidence.insert(embedding.endpoints(h), id);
            }
        }
    }

    let set = FaceSet {
        faces,
        incidence,
        vertices: graph.num_vertices(),
        edges: graph.num_edges(),
    };
    if set.euler_characteristic() != SPHERE_EULER {
        let (vertices, edges, faces) = set.f_vector();
        return Err(FaceError::EulerViolation {
            vertices,
            edges,
            faces,
        });
    }
    debug!(
        vertices = set.vertices,
        edges = set.edges,
        faces = set.len(),
        "collect_faces"
    );
    Ok(set)
}

/// p-vector of `graph` under `embedding`.
pub fn p_vector(graph: &PolytopeGraph, embedding: &RotationSystem) -> Result<PVector, FaceError> {
    Ok(collect_faces(graph, embedding)?.p_vector())
}

/// p-vector of `graph` using an embedding requested from `oracle`.
pub fn p_vector_with<O: EmbeddingOracle + ?Sized>(
    graph: &PolytopeGraph,
    oracle: &O,
) -> Result<PVector, FaceError> {
    let embedding = oracle.embed(graph)?;
    p_vector(graph, &embedding)
}
