//! Oracle trait, its error type, and embedding tolerances.

use std::fmt;

use super::rotation::RotationSystem;
use crate::graph::PolytopeGraph;

/// Errors surfaced while obtaining or validating an embedding.
#[derive(Clone, Debug, PartialEq)]
pub enum EmbeddingError {
    /// Input cannot be a polytope graph (too small, low degree, disconnected).
    NotPolytopal { reason: String },
    /// No induced non-separating cycle was found to serve as the outer face.
    NoPeripheralCycle,
    /// The barycentric system had no unique solution.
    Singular,
    /// Two edges at `vertex` leave in the same direction.
    Degenerate { vertex: usize },
    /// The candidate rotation system does not describe a sphere.
    NotPlanar { reason: String },
    /// Rotation tables are malformed or do not match the graph.
    InvalidRotation { reason: String },
}

impl EmbeddingError {
    pub(crate) fn not_polytopal(reason: impl Into<String>) -> Self {
        Self::NotPolytopal {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidRotation {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for EmbeddingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPolytopal { reason } => write!(f, "not a polytope graph: {reason}"),
            Self::NoPeripheralCycle => {
                write!(f, "no peripheral cycle found to anchor the outer face")
            }
            Self::Singular => write!(f, "barycentric system is singular"),
            Self::Degenerate { vertex } => {
                write!(f, "degenerate drawing: overlapping edges at vertex {vertex}")
            }
            Self::NotPlanar { reason } => write!(f, "graph is not planar: {reason}"),
            Self::InvalidRotation { reason } => write!(f, "invalid rotation system: {reason}"),
        }
    }
}

impl std::error::Error for EmbeddingError {}

/// Source of planar embeddings.
///
/// Implementations return a rotation system describing `graph` or explain why
/// none exists. Results must be deterministic for a given graph.
pub trait EmbeddingOracle {
    fn embed(&self, graph: &PolytopeGraph) -> Result<RotationSystem, EmbeddingError>;
}

/// A fixed rotation system acts as an oracle for the one graph it describes.
impl EmbeddingOracle for RotationSystem {
    fn embed(&self, graph: &PolytopeGraph) -> Result<RotationSystem, EmbeddingError> {
        if self.describes(graph) {
            Ok(self.clone())
        } else {
            Err(EmbeddingError::invalid(
                "fixed rotation system does not describe the requested graph",
            ))
        }
    }
}

/// Embedding configuration (drawing scale and angular tolerance).
#[derive(Clone, Copy, Debug)]
pub struct EmbedCfg {
    /// Radius of the regular polygon the outer face is pinned to.
    pub outer_radius: f64,
    /// Minimum angular gap (radians) between consecutive edges at a vertex.
    pub eps_angle: f64,
    /// Edges shorter than this are treated as collapsed.
    pub eps_length: f64,
}

impl Default for EmbedCfg {
    fn default() -> Self {
        Self {
            outer_radius: 1.0,
            eps_angle: 1e-10,
            eps_length: 1e-12,
        }
    }
}
