//! Combinatorial constants (internal).
//!
//! Policy
//! - These are properties of 3-polytopes, not tuning knobs. Numeric
//!   tolerances for drawing live in `embedding::EmbedCfg`.

/// Smallest vertex degree in a polytope graph; truncation rejects anything lower.
pub(crate) const MIN_POLYTOPE_DEGREE: usize = 3;
/// Smallest face size (triangles); the p-vector starts here.
pub(crate) const MIN_FACE_SIZE: usize = 3;
/// Euler characteristic of the sphere: V − E + F.
pub(crate) const SPHERE_EULER: i64 = 2;
/// Smallest polytope graph (tetrahedron).
pub(crate) const MIN_POLYTOPE_VERTICES: usize = 4;
