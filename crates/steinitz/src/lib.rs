//! Faces and vertex truncation of 3-polytope graphs.
//!
//! Pipeline: adjacency → embedding (oracle) → face tracer → face collector →
//! p-vector; adjacency + embedding → truncation → new adjacency + embedding,
//! which can go straight back into the face collector.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Clarity and better design win over compatibility; breaking changes are
//!   fine when they improve quality.
//! - `api` is the curated import surface for callers.

pub mod api;
pub mod embedding;
pub mod faces;
pub mod generate;
pub mod graph;
pub mod solids;
pub mod truncate;

mod cfg;
#[cfg(test)]
mod fixtures;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use embedding::{EmbeddingOracle, RotationSystem, TutteOracle};
pub use faces::PVector;
pub use graph::PolytopeGraph;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::embedding::{EmbedCfg, EmbeddingOracle, RotationSystem, TutteOracle};
    pub use crate::faces::{collect_faces, p_vector, p_vector_with, FaceSet, PVector};
    pub use crate::graph::{parse_edge_list, PolytopeGraph};
    pub use crate::solids::{Solid, SolidFamily};
    pub use crate::truncate::{truncate, truncate_with, Truncation};
}
