//! Polytope graphs: validated simple undirected graphs on `0..n`.
//!
//! Purpose
//! - Hold the adjacency relation that every other module consumes (embedding,
//!   face collection, truncation).
//! - Reject malformed input at construction time (self-loops, repeated edges,
//!   asymmetric matrices) so downstream code can rely on simplicity.
//!
//! Conventions
//! - Vertices are dense indices `0..n`; neighbor lists are kept sorted.
//! - Inputs labeled `1..n` (or with gaps) go through `from_labeled_edges`,
//!   which compacts labels in increasing order and returns the label table.
//! - `is_simple` uses the polytope meaning (every vertex has degree 3), not the
//!   graph-theory meaning (already guaranteed by construction).

mod parse;
mod types;

pub use parse::parse_edge_list;
pub use types::{GraphError, PolytopeGraph};
