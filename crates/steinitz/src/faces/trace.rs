//! Half-edge face walks.

use super::types::{Face, FaceError};
use crate::embedding::{HalfEdgeId, RotationSystem};

/// Trace the face bounded by the half-edge `(u, v)`.
///
/// The returned walk starts at `u`, continues with `v`, and lists each
/// boundary vertex once per visit until the walk is about to re-enter `(u, v)`.
pub fn trace_face(embedding: &RotationSystem, u: usize, v: usize) -> Result<Face, FaceError> {
    let start = embedding
        .half_edge(u, v)
        .ok_or(FaceError::InvalidHalfEdge { u, v })?;
    let (vertices, _) = walk(embedding, start)?;
    Ok(Face::new(vertices))
}

/// Orbit of `start` under `successor`: tails in walk order plus the half-edges.
pub(crate) fn walk(
    embedding: &RotationSystem,
    start: HalfEdgeId,
) -> Result<(Vec<usize>, Vec<HalfEdgeId>), FaceError> {
    let limit = embedding.num_half_edges();
    let mut vertices = Vec::new();
    let mut half_edges = Vec::new();
    let mut h = start;
    loop {
        if half_edges.len() == limit {
            let (u, v) = embedding.endpoints(start);
            return Err(FaceError::UnclosedTrace { u, v });
        }
        vertices.push(embedding.endpoints(h).0);
        half_edges.push(h);
        h = embedding.successor(h);
        if h == start {
            break;
        }
    }
    Ok((vertices, half_edges))
}
