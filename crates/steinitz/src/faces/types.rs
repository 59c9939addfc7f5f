//! Face, face set, p-vector, and the face error type.

use std::collections::HashMap;
use std::fmt;

use crate::cfg::MIN_FACE_SIZE;
use crate::embedding::EmbeddingError;

/// Errors surfaced by face tracing and collection.
#[derive(Clone, Debug, PartialEq)]
pub enum FaceError {
    /// `(u, v)` is not a half-edge of the embedding.
    InvalidHalfEdge { u: usize, v: usize },
    /// Rotation system and graph disagree on vertices or neighbors.
    EmbeddingMismatch,
    /// The oracle could not provide an embedding.
    NoEmbedding(EmbeddingError),
    /// A face walk did not return to its start within `2E` steps.
    UnclosedTrace { u: usize, v: usize },
    /// A face with fewer than three boundary edges.
    DegenerateFace { size: usize },
    /// V − E + F ≠ 2 after collection.
    EulerViolation {
        vertices: usize,
        edges: usize,
        faces: usize,
    },
}

impl fmt::Display for FaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHalfEdge { u, v } => {
                write!(f, "({u}, {v}) is not a half-edge of the embedding")
            }
            Self::EmbeddingMismatch => write!(f, "embedding does not describe the graph"),
            Self::NoEmbedding(err) => write!(f, "no embedding available: {err}"),
            Self::UnclosedTrace { u, v } => {
                write!(f, "face walk from ({u}, {v}) did not close")
            }
            Self::DegenerateFace { size } => write!(
                f,
                "face of size {size} (polytope faces need ≥{MIN_FACE_SIZE} edges)"
            ),
            Self::EulerViolation {
                vertices,
                edges,
                faces,
            } => write!(
                f,
                "Euler check failed: V − E + F = {vertices} − {edges} + {faces} ≠ 2"
            ),
        }
    }
}

impl std::error::Error for FaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoEmbedding(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EmbeddingError> for FaceError {
    fn from(err: EmbeddingError) -> Self {
        Self::NoEmbedding(err)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub usize);

/// Boundary walk of one face, starting at the traced half-edge's tail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Face {
    vertices: Vec<usize>,
}

impl Face {
    pub(crate) fn new(vertices: Vec<usize>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Number of boundary edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, v: usize) -> bool {
        self.vertices.contains(&v)
    }

    /// Order-independent identity: the sorted set of boundary vertices.
    ///
    /// A walk that revisits a vertex shares its key with any face on the same
    /// vertex set.
    pub fn key(&self) -> Vec<usize> {
        let mut key = self.vertices.clone();
        key.sort_unstable();
        key.dedup();
        key
    }
}

/// Face-size histogram; entry `i` counts faces with `i + 3` edges.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PVector(Vec<usize>);

impl PVector {
    pub fn new(counts: Vec<usize>) -> Self {
        Self(counts)
    }

    /// Dense histogram of the given face sizes (sizes below 3 are ignored).
    pub fn from_face_sizes<I: IntoIterator<Item = usize>>(sizes: I) -> Self {
        let mut counts: Vec<usize> = Vec::new();
        for size in sizes {
            if size < MIN_FACE_SIZE {
                continue;
            }
            let i = size - MIN_FACE_SIZE;
            if counts.len() <= i {
                counts.resize(i + 1, 0);
            }
            counts[i] += 1;
        }
        Self(counts)
    }

    /// Number of faces with exactly `k` edges; zero beyond the stored range.
    pub fn count(&self, k: usize) -> usize {
        k.checked_sub(MIN_FACE_SIZE)
            .and_then(|i| self.0.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Total number of faces.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Largest face size present, if any.
    pub fn max_face_size(&self) -> Option<usize> {
        (!self.0.is_empty()).then(|| self.0.len() + MIN_FACE_SIZE - 1)
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

impl From<PVector> for Vec<usize> {
    fn from(p: PVector) -> Self {
        p.0
    }
}

impl fmt::Display for PVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}

/// Deduplicated faces of an embedded graph plus half-edge incidence.
#[derive(Clone, Debug)]
pub struct FaceSet {
    pub(crate) faces: Vec<Face>,
    pub(crate) incidence: HashMap<(usize, usize), FaceId>,
    pub(crate) vertices: usize,
    pub(crate) edges: usize,
}

impl FaceSet {
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn face(&self, id: FaceId) -> Option<&Face> {
        self.faces.get(id.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Face bounded by half-edge `(u, v)`.
    pub fn face_of(&self, u: usize, v: usize) -> Option<FaceId> {
        self.incidence.get(&(u, v)).copied()
    }

    /// Faces whose boundary passes through `v`, in id order.
    pub fn faces_at(&self, v: usize) -> Vec<FaceId> {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, f)| f.contains(v))
            .map(|(i, _)| FaceId(i))
            .collect()
    }

    /// `(V, E, F)`.
    pub fn f_vector(&self) -> (usize, usize, usize) {
        (self.vertices, self.edges, self.faces.len())
    }

    pub fn euler_characteristic(&self) -> i64 {
        self.vertices as i64 - self.edges as i64 + self.faces.len() as i64
    }

    pub fn p_vector(&self) -> PVector {
        PVector::from_face_sizes(self.faces.iter().map(Face::len))
    }
}
