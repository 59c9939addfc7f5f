//! Rotation systems with dense half-edge ids.

use std::collections::HashMap;

use super::oracle::EmbeddingError;
use crate::cfg::MIN_FACE_SIZE;
use crate::graph::PolytopeGraph;

/// Dense id of a directed half-edge `(u, v)`; ids of `u`'s half-edges are
/// contiguous and follow `rotation_order(u)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HalfEdgeId(pub usize);

/// Per-vertex cyclic neighbor order.
///
/// Invariants:
/// - `rotation_order(v)` lists distinct vertices in `0..n`, none equal to `v`;
/// - `u ∈ rotation_order(v) ⇔ v ∈ rotation_order(u)`;
/// - `offsets`, `tails`, `twins`, `index` are derived and consistent with the
///   rotations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RotationSystem {
    rotations: Vec<Vec<usize>>,
    offsets: Vec<usize>,
    tails: Vec<usize>,
    twins: Vec<usize>,
    index: HashMap<(usize, usize), usize>,
}

impl RotationSystem {
    /// Validate rotation tables and build half-edge indices.
    pub fn new(rotations: Vec<Vec<usize>>) -> Result<Self, EmbeddingError> {
        let n = rotations.len();
        let mut offsets = Vec::with_capacity(n + 1);
        let mut tails = Vec::new();
        let mut index = HashMap::new();
        offsets.push(0);
        for (u, rot) in rotations.iter().enumerate() {
            for &v in rot {
                if v >= n {
                    return Err(EmbeddingError::invalid(format!(
                        "vertex {u} lists {v}, outside 0..{n}"
                    )));
                }
                if v == u {
                    return Err(EmbeddingError::invalid(format!("vertex {u} lists itself")));
                }
                if index.insert((u, v), tails.len()).is_some() {
                    return Err(EmbeddingError::invalid(format!(
                        "vertex {u} lists {v} more than once"
                    )));
                }
                tails.push(u);
            }
            offsets.push(tails.len());
        }
        let mut twins = Vec::with_capacity(tails.len());
        for (id, &u) in tails.iter().enumerate() {
            let v = rotations[u][id - offsets[u]];
            let twin = index.get(&(v, u)).copied().ok_or_else(|| {
                EmbeddingError::invalid(format!("vertex {u} lists {v} but {v} does not list {u}"))
            })?;
            twins.push(twin);
        }
        Ok(Self {
            rotations,
            offsets,
            tails,
            twins,
            index,
        })
    }

    /// Rotation system whose face walks are exactly the given oriented faces.
    ///
    /// Each face is a closed vertex cycle; every directed edge must occur in
    /// exactly one face and the faces around each vertex must close into a
    /// single disk.
    pub fn from_oriented_faces(n: usize, faces: &[Vec<usize>]) -> Result<Self, EmbeddingError> {
        // succ[v][u] = w  ⇔  a face walks u → v → w.
        let mut succ: Vec<HashMap<usize, usize>> = vec![HashMap::new(); n];
        for face in faces {
            let k = face.len();
            if k < MIN_FACE_SIZE {
                return Err(EmbeddingError::invalid(format!(
                    "face {face:?} has fewer than {MIN_FACE_SIZE} vertices"
                )));
            }
            if let Some(&bad) = face.iter().find(|&&x| x >= n) {
                return Err(EmbeddingError::invalid(format!(
                    "face {face:?} uses vertex {bad}, outside 0..{n}"
                )));
            }
            for i in 0..k {
                let (u, v, w) = (face[i], face[(i + 1) % k], face[(i + 2) % k]);
                if succ[v].insert(u, w).is_some() {
                    return Err(EmbeddingError::invalid(format!(
                        "directed edge ({u}, {v}) appears in more than one face"
                    )));
                }
            }
        }
        let mut rotations = Vec::with_capacity(n);
        for (v, table) in succ.iter().enumerate() {
            let Some(&start) = table.keys().min() else {
                rotations.push(Vec::new());
                continue;
            };
            let mut rot = vec![start];
            let mut cur = start;
            loop {
                let next = *table.get(&cur).ok_or_else(|| {
                    EmbeddingError::invalid(format!("faces around vertex {v} do not close"))
                })?;
                if next == start {
                    break;
                }
                if rot.len() == table.len() {
                    return Err(EmbeddingError::invalid(format!(
                        "faces around vertex {v} revisit a neighbor"
                    )));
                }
                rot.push(next);
                cur = next;
            }
            if rot.len() != table.len() {
                return Err(EmbeddingError::invalid(format!(
                    "faces around vertex {v} form more than one cycle"
                )));
            }
            rotations.push(rot);
        }
        Self::new(rotations)
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.rotations.len()
    }

    #[inline]
    pub fn num_half_edges(&self) -> usize {
        self.tails.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.tails.len() / 2
    }

    /// Cyclic neighbor order of `v`; panics if `v` is not a vertex.
    #[inline]
    pub fn rotation_order(&self, v: usize) -> &[usize] {
        &self.rotations[v]
    }

    pub fn rotations(&self) -> &[Vec<usize>] {
        &self.rotations
    }

    pub fn half_edge(&self, u: usize, v: usize) -> Option<HalfEdgeId> {
        self.index.get(&(u, v)).copied().map(HalfEdgeId)
    }

    /// `(tail, head)` of a half-edge.
    #[inline]
    pub fn endpoints(&self, h: HalfEdgeId) -> (usize, usize) {
        let u = self.tails[h.0];
        (u, self.rotations[u][h.0 - self.offsets[u]])
    }

    /// The opposite half-edge `(v, u)`.
    #[inline]
    pub fn twin(&self, h: HalfEdgeId) -> HalfEdgeId {
        HalfEdgeId(self.twins[h.0])
    }

    /// Next half-edge along the face to the right of `h` (see module docs).
    #[inline]
    pub fn successor(&self, h: HalfEdgeId) -> HalfEdgeId {
        let back = self.twins[h.0];
        let v = self.tails[back];
        let deg = self.offsets[v + 1] - self.offsets[v];
        let slot = back - self.offsets[v];
        HalfEdgeId(self.offsets[v] + (slot + 1) % deg)
    }

    /// Same vertex count and the same neighbor set at every vertex.
    pub fn describes(&self, graph: &PolytopeGraph) -> bool {
        self.num_vertices() == graph.num_vertices()
            && self.rotations.iter().enumerate().all(|(v, rot)| {
                rot.len() == graph.degree(v) && rot.iter().all(|&w| graph.has_edge(v, w))
            })
    }

    /// The underlying graph (rotation order forgotten).
    pub fn graph(&self) -> PolytopeGraph {
        let adj = self
            .rotations
            .iter()
            .map(|rot| {
                let mut sorted = rot.clone();
                sorted.sort_unstable();
                sorted
            })
            .collect();
        PolytopeGraph::from_sorted_adjacency(adj)
    }
}
