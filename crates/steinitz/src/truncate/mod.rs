//! Vertex truncation ("chop"): replace a vertex by a new face.
//!
//! Purpose
//! - Rewrite an embedded polytope graph so that vertex `v` of degree `d` is
//!   replaced by a d-gon `w₀ … w_{d−1}`, each `wᵢ` joined to the former
//!   neighbor `nᵢ`. The result is again an embedded polytope graph and can be
//!   fed back to `faces` or truncated again without re-running an oracle.
//!
//! Why this design
//! - The rewrite runs on an arena with stable handles: `v` is tombstoned, the
//!   ring vertices are appended, and a single compaction renumbers everything
//!   at the end. Survivors keep their relative order (indices above `v` shift
//!   down by one); ring vertices take `n−1 … n+d−2` in ring order.
//! - Each edge `(nᵢ, wᵢ)` takes over the rotation slot `(nᵢ, v)` had, and `wᵢ`
//!   gets rotation `[nᵢ, wᵢ₊₁, wᵢ₋₁]`. Under the crate-wide face-walk rule
//!   every face through `v` gains one edge and the ring bounds a new d-gon.
//! - Count and degree post-conditions are checked on every call and reported
//!   as `TruncateError::Invariant`.
//!
//! Related code: `crate::embedding::RotationSystem`, `crate::faces`.

mod arena;

use std::fmt;

use tracing::debug;

use crate::cfg::MIN_POLYTOPE_DEGREE;
use crate::embedding::{EmbeddingError, EmbeddingOracle, RotationSystem};
use crate::graph::PolytopeGraph;
use arena::{Arena, Handle};

/// Errors surfaced by vertex truncation.
#[derive(Clone, Debug, PartialEq)]
pub enum TruncateError {
    UnknownVertex { vertex: usize, n: usize },
    DegreeTooSmall { vertex: usize, degree: usize },
    /// Rotation system and graph disagree on vertices or neighbors.
    EmbeddingMismatch,
    NoEmbedding(EmbeddingError),
    /// A post-condition of the rewrite failed.
    Invariant { reason: String },
}

impl TruncateError {
    fn invariant(reason: impl Into<String>) -> Self {
        Self::Invariant {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for TruncateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVertex { vertex, n } => {
                write!(f, "vertex {vertex} is not in the graph (n = {n})")
            }
            Self::DegreeTooSmall { vertex, degree } => write!(
                f,
                "vertex {vertex} has degree {degree}; truncation needs ≥{MIN_POLYTOPE_DEGREE}"
            ),
            Self::EmbeddingMismatch => write!(f, "embedding does not describe the graph"),
            Self::NoEmbedding(err) => write!(f, "no embedding available: {err}"),
            Self::Invariant { reason } => write!(f, "truncation invariant violated: {reason}"),
        }
    }
}

impl std::error::Error for TruncateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoEmbedding(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EmbeddingError> for TruncateError {
    fn from(err: EmbeddingError) -> Self {
        Self::NoEmbedding(err)
    }
}

/// Result of truncating one vertex. The input graph is left untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct Truncation {
    pub graph: PolytopeGraph,
    pub embedding: RotationSystem,
    /// New vertices `w₀ … w_{d−1}`; `wᵢ` is adjacent to the image of the
    /// removed vertex's `i`-th rotation neighbor.
    pub new_face: Vec<usize>,
    /// Old index → new index; `None` for the truncated vertex.
    pub relabel: Vec<Option<usize>>,
}

impl Truncation {
    pub fn map_vertex(&self, old: usize) -> Option<usize> {
        self.relabel.get(old).copied().flatten()
    }

    /// The removed vertex's index in the input graph.
    pub fn removed(&self) -> Option<usize> {
        self.relabel.iter().position(Option::is_none)
    }
}

fn check_vertex(graph: &PolytopeGraph, v: usize) -> Result<usize, TruncateError> {
    let n = graph.num_vertices();
    if v >= n {
        return Err(TruncateError::UnknownVertex { vertex: v, n });
    }
    let degree = graph.degree(v);
    if degree < MIN_POLYTOPE_DEGREE {
        return Err(TruncateError::DegreeTooSmall { vertex: v, degree });
    }
    Ok(degree)
}

/// Truncate vertex `v` of `graph` under `embedding`.
pub fn truncate(
    graph: &PolytopeGraph,
    embedding: &RotationSystem,
    v: usize,
) -> Result<Truncation, TruncateError> {
    let d = check_vertex(graph, v)?;
    if !embedding.describes(graph) {
        return Err(TruncateError::EmbeddingMismatch);
    }
    let n = graph.num_vertices();

    let mut arena = Arena::from_rotations(embedding.rotations());
    let center = Handle(v);
    let ring = arena
        .tombstone(center)
        .ok_or_else(|| TruncateError::invariant(format!("vertex {v} missing from arena")))?;
    let corners: Vec<Handle> = (0..d).map(|_| arena.insert(Vec::new())).collect();
    for (i, (&nb, &w)) in ring.iter().zip(&corners).enumerate() {
        if !arena.redirect(nb, center, w) {
            return Err(TruncateError::invariant(format!(
                "neighbor {} does not list {v}",
                nb.0
            )));
        }
        let next = corners[(i + 1) % d];
        let prev = corners[(i + d - 1) % d];
        arena.set_rotation(w, vec![nb, next, prev]);
    }
    if arena.live_count() != n - 1 + d {
        return Err(TruncateError::invariant(format!(
            "arena holds {} live vertices, expected {}",
            arena.live_count(),
            n - 1 + d
        )));
    }

    let compacted = arena.compact().map_err(|h| {
        TruncateError::invariant(format!("rotation still references removed vertex {}", h.0))
    })?;
    let new_face = corners
        .iter()
        .map(|h| compacted.relabel[h.0])
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| TruncateError::invariant("ring vertex lost during compaction"))?;
    let mut relabel = compacted.relabel;
    relabel.truncate(n);
    let embedding = RotationSystem::new(compacted.rotations)
        .map_err(|err| TruncateError::invariant(err.to_string()))?;
    let out = Truncation {
        graph: embedding.graph(),
        embedding,
        new_face,
        relabel,
    };
    check_post(graph, v, &out)?;
    debug!(
        vertex = v,
        degree = d,
        vertices = out.graph.num_vertices(),
        edges = out.graph.num_edges(),
        "truncate"
    );
    Ok(out)
}

/// Ask `oracle` for an embedding of `graph`, then truncate `v`.
pub fn truncate_with<O: EmbeddingOracle + ?Sized>(
    graph: &PolytopeGraph,
    oracle: &O,
    v: usize,
) -> Result<Truncation, TruncateError> {
    check_vertex(graph, v)?;
    let embedding = oracle.embed(graph)?;
    truncate(graph, &embedding, v)
}

fn check_post(before: &PolytopeGraph, v: usize, out: &Truncation) -> Result<(), TruncateError> {
    let d = before.degree(v);
    let after = &out.graph;
    let expected_v = before.num_vertices() - 1 + d;
    let expected_e = before.num_edges() + d;
    if after.num_vertices() != expected_v || after.num_edges() != expected_e {
        return Err(TruncateError::invariant(format!(
            "got {} vertices / {} edges, expected {expected_v} / {expected_e}",
            after.num_vertices(),
            after.num_edges()
        )));
    }
    for &nb in before.neighbors(v) {
        let mapped = out
            .map_vertex(nb)
            .ok_or_else(|| TruncateError::invariant(format!("neighbor {nb} was removed")))?;
        if after.degree(mapped) != before.degree(nb) {
            return Err(TruncateError::invariant(format!(
                "neighbor {nb} changed degree {} → {}",
                before.degree(nb),
                after.degree(mapped)
            )));
        }
    }
    if let Some(&w) = out.new_face.iter().find(|&&w| after.degree(w) != 3) {
        return Err(TruncateError::invariant(format!(
            "new vertex {w} has degree {}",
            after.degree(w)
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
