//! Face tracing and collection on embedded polytope graphs.
//!
//! Purpose
//! - `trace_face`: walk the face bounded by one directed half-edge.
//! - `collect_faces`: visit every half-edge once, register each face by its
//!   vertex set, check Euler's formula, and summarize sizes as a `PVector`.
//!
//! Why this design
//! - Half-edges are marked as consumed when their face is traced, so each of
//!   the `2E` half-edges is walked exactly once.
//! - Face identity is the sorted vertex set, kept in a hash registry; a second
//!   orbit with an already-registered vertex set is folded into the first face
//!   (the Euler check then reports the inconsistency).
//! - Post-conditions are reported as errors and never corrected.
//!
//! Related code: `crate::embedding::{RotationSystem, EmbeddingOracle}`.

mod collect;
mod trace;
mod types;

pub use collect::{collect_faces, p_vector, p_vector_with};
pub use trace::trace_face;
pub use types::{Face, FaceError, FaceId, FaceSet, PVector};
