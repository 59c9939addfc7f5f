//! Combinatorial planar embeddings (rotation systems) and the oracle seam.
//!
//! Purpose
//! - Represent an embedding as a per-vertex cyclic neighbor order and expose
//!   the half-edge bookkeeping the face tracer needs (dense ids, twins,
//!   successor under the face-walk rule).
//! - Keep embedding *discovery* behind `EmbeddingOracle`, so callers can inject
//!   any conforming source: a fixed rotation system, the bundled
//!   `TutteOracle`, or their own planarity library.
//!
//! Face-walk rule (fixed crate-wide)
//! - Arriving at `v` along `(u, v)`, leave along `(v, w)` where `w` follows `u`
//!   in `rotation(v)`. With counterclockwise rotations this keeps the face on
//!   the right of the walk.
//!
//! Related code: `crate::faces` (tracing, collection), `crate::truncate`.

mod oracle;
mod rotation;
mod tutte;

pub use oracle::{EmbedCfg, EmbeddingError, EmbeddingOracle};
pub use rotation::{HalfEdgeId, RotationSystem};
pub use tutte::TutteOracle;

#[cfg(test)]
mod tests;
