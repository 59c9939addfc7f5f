//! `PolytopeGraph` and its construction errors.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;

/// Errors surfaced while building or parsing a graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// Edge `(v, v)`.
    SelfLoop { vertex: usize },
    /// The same undirected edge listed twice.
    DuplicateEdge { u: usize, v: usize },
    /// Endpoint outside `0..n`.
    VertexOutOfRange { vertex: usize, n: usize },
    /// Adjacency matrix row with the wrong length.
    NotSquare { rows: usize, row: usize, len: usize },
    /// `a[u][v] != a[v][u]`.
    Asymmetric { u: usize, v: usize },
    /// Matrix entry other than 0 or 1.
    InvalidEntry { u: usize, v: usize, value: u8 },
    /// Edge-list text could not be read.
    Parse { reason: String },
}

impl GraphError {
    pub(crate) fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfLoop { vertex } => write!(f, "self-loop at vertex {vertex}"),
            Self::DuplicateEdge { u, v } => write!(f, "edge ({u}, {v}) listed more than once"),
            Self::VertexOutOfRange { vertex, n } => {
                write!(f, "vertex {vertex} out of range for a graph on {n} vertices")
            }
            Self::NotSquare { rows, row, len } => write!(
                f,
                "adjacency matrix is not square: {rows} rows but row {row} has {len} entries"
            ),
            Self::Asymmetric { u, v } => {
                write!(f, "adjacency matrix is not symmetric at ({u}, {v})")
            }
            Self::InvalidEntry { u, v, value } => {
                write!(f, "adjacency entry ({u}, {v}) = {value}, expected 0 or 1")
            }
            Self::Parse { reason } => write!(f, "could not parse edge list: {reason}"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Simple undirected graph on vertices `0..n`.
///
/// Invariants:
/// - no self-loops, no multi-edges;
/// - `adj[v]` is sorted ascending and `u ∈ adj[v] ⇔ v ∈ adj[u]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolytopeGraph {
    adj: Vec<Vec<usize>>,
    edge_count: usize,
}

impl PolytopeGraph {
    /// Build from an undirected edge list over `0..n`.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut sets: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n];
        for &(u, v) in edges {
            for w in [u, v] {
                if w >= n {
                    return Err(GraphError::VertexOutOfRange { vertex: w, n });
                }
            }
            if u == v {
                return Err(GraphError::SelfLoop { vertex: u });
            }
            if !sets[u].insert(v) {
                return Err(GraphError::DuplicateEdge { u, v });
            }
            sets[v].insert(u);
        }
        let adj = sets.into_iter().map(|s| s.into_iter().collect()).collect();
        Ok(Self::from_sorted_adjacency(adj))
    }

    /// Build from edges with arbitrary integer labels (e.g. `1..=n`).
    ///
    /// Labels are compacted onto `0..n` in increasing order; the returned table
    /// maps each index back to its label.
    pub fn from_labeled_edges(edges: &[(i64, i64)]) -> Result<(Self, Vec<i64>), GraphError> {
        let labels: Vec<i64> = edges
            .iter()
            .flat_map(|&(a, b)| [a, b])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let index = |label: i64| labels.binary_search(&label).unwrap_or_default();
        let dense: Vec<(usize, usize)> = edges.iter().map(|&(a, b)| (index(a), index(b))).collect();
        let graph = Self::from_edges(labels.len(), &dense)?;
        Ok((graph, labels))
    }

    /// Build from a square symmetric 0/1 adjacency matrix with zero diagonal.
    pub fn from_adjacency_matrix<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GraphError> {
        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            let len = row.as_ref().len();
            if len != n {
                return Err(GraphError::NotSquare { rows: n, row: i, len });
            }
        }
        let mut edges = Vec::new();
        for u in 0..n {
            for v in u..n {
                let a = rows[u].as_ref()[v];
                if a != rows[v].as_ref()[u] {
                    return Err(GraphError::Asymmetric { u, v });
                }
                match a {
                    0 => {}
                    1 if u == v => return Err(GraphError::SelfLoop { vertex: u }),
                    1 => edges.push((u, v)),
                    value => return Err(GraphError::InvalidEntry { u, v, value }),
                }
            }
        }
        Self::from_edges(n, &edges)
    }

    /// Caller guarantees the struct invariants.
    pub(crate) fn from_sorted_adjacency(adj: Vec<Vec<usize>>) -> Self {
        let degree_sum: usize = adj.iter().map(Vec::len).sum();
        Self {
            adj,
            edge_count: degree_sum / 2,
        }
    }

    /// Dense 0/1 adjacency matrix.
    pub fn adjacency_matrix(&self) -> Vec<Vec<u8>> {
        let n = self.num_vertices();
        let mut out = vec![vec![0u8; n]; n];
        for (u, v) in self.edges() {
            out[u][v] = 1;
            out[v][u] = 1;
        }
        out
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        v < self.adj.len()
    }

    /// Sorted neighbors of `v`.
    ///
    /// Panics if `v` is not a vertex.
    #[inline]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    /// Degree of `v`; panics if `v` is not a vertex.
    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adj
            .get(u)
            .map_or(false, |nbrs| nbrs.binary_search(&v).is_ok())
    }

    /// Undirected edges as `(u, v)` with `u < v`, lexicographic.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adj.iter().enumerate().flat_map(|(u, nbrs)| {
            nbrs.iter()
                .copied()
                .filter(move |&v| u < v)
                .map(move |v| (u, v))
        })
    }

    pub fn min_degree(&self) -> Option<usize> {
        self.adj.iter().map(Vec::len).min()
    }

    pub fn max_degree(&self) -> Option<usize> {
        self.adj.iter().map(Vec::len).max()
    }

    /// Every vertex has degree exactly `k`.
    pub fn is_regular(&self, k: usize) -> bool {
        self.adj.iter().all(|nbrs| nbrs.len() == k)
    }

    /// Simple in the polytope sense: 3-regular.
    pub fn is_simple(&self) -> bool {
        !self.adj.is_empty() && self.is_regular(3)
    }

    pub fn is_connected(&self) -> bool {
        self.is_connected_without(&vec![false; self.num_vertices()])
    }

    /// Connectivity of the subgraph induced on vertices with `removed[v] == false`.
    ///
    /// An empty remainder counts as connected.
    pub(crate) fn is_connected_without(&self, removed: &[bool]) -> bool {
        let Some(start) = (0..self.num_vertices()).find(|&v| !removed[v]) else {
            return true;
        };
        let mut seen = removed.to_vec();
        seen[start] = true;
        let mut queue = VecDeque::from([start]);
        while let Some(u) = queue.pop_front() {
            for &w in &self.adj[u] {
                if !seen[w] {
                    seen[w] = true;
                    queue.push_back(w);
                }
            }
        }
        seen.iter().all(|&s| s)
    }
}
