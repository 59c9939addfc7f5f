//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI, the
//!   benches, and project-internal experiments. Breaking changes are allowed.
//! - Prefer these re-exports for clarity and consistency across callers.

// Graphs and input parsing
pub use crate::graph::{parse_edge_list, GraphError, PolytopeGraph};
// Embeddings
pub use crate::embedding::{
    EmbedCfg, EmbeddingError, EmbeddingOracle, HalfEdgeId, RotationSystem, TutteOracle,
};
// Faces
pub use crate::faces::{
    collect_faces, p_vector, p_vector_with, trace_face, Face, FaceError, FaceId, FaceSet, PVector,
};
// Truncation
pub use crate::truncate::{truncate, truncate_with, TruncateError, Truncation};
// Solids and generators
pub use crate::generate::{
    EmbeddedPolytope, GeneratorError, PolytopeGenerator, PolytopeSample, SeedReplay,
    SolidFamilyEnumerator, SolidFamilyParams, TruncationGenerator, TruncationParams,
};
pub use crate::solids::{Solid, SolidFamily};

/// Pre: `graph` is a 3-connected planar graph.
/// Post: p-vector after truncating `v`, using `oracle` for the input embedding only.
pub fn truncated_p_vector<O: EmbeddingOracle + ?Sized>(
    graph: &PolytopeGraph,
    oracle: &O,
    v: usize,
) -> Result<PVector, TruncateError> {
    let t = truncate_with(graph, oracle, v)?;
    p_vector(&t.graph, &t.embedding).map_err(|err| TruncateError::Invariant {
        reason: err.to_string(),
    })
}
