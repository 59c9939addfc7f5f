//! Canonical polytope graphs with their embeddings, used in tests, benchmarks,
//! and as generator seeds.
//!
//! Purpose
//! - Provide small, explicit constructors for the classical families
//!   (pyramids, prisms, bipyramids) so callers never need an oracle for them.
//! - Each solid is given by consistently oriented faces and converted with
//!   `RotationSystem::from_oriented_faces`; the graph is `embedding.graph()`.
//!
//! Face counts (n ≥ 3):
//! - pyramid(n): n triangles + one n-gon; tetrahedron = pyramid(3).
//! - prism(n): n quadrilaterals + two n-gons; cube = prism(4).
//! - bipyramid(n): 2n triangles; octahedron = bipyramid(4).

use std::fmt;
use std::str::FromStr;

use crate::embedding::{EmbeddingError, RotationSystem};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolidFamily {
    Pyramid,
    Prism,
    Bipyramid,
}

impl SolidFamily {
    pub const ALL: [SolidFamily; 3] = [Self::Pyramid, Self::Prism, Self::Bipyramid];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pyramid => "pyramid",
            Self::Prism => "prism",
            Self::Bipyramid => "bipyramid",
        }
    }
}

/// A member of one of the canonical families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Solid {
    pub family: SolidFamily,
    pub n: usize,
}

impl Solid {
    pub const TETRAHEDRON: Solid = Solid::new(SolidFamily::Pyramid, 3);
    pub const CUBE: Solid = Solid::new(SolidFamily::Prism, 4);
    pub const OCTAHEDRON: Solid = Solid::new(SolidFamily::Bipyramid, 4);

    pub const fn new(family: SolidFamily, n: usize) -> Self {
        Self { family, n }
    }

    pub fn embedding(&self) -> Result<RotationSystem, EmbeddingError> {
        match self.family {
            SolidFamily::Pyramid => pyramid(self.n),
            SolidFamily::Prism => prism(self.n),
            SolidFamily::Bipyramid => bipyramid(self.n),
        }
    }

    pub fn num_vertices(&self) -> usize {
        match self.family {
            SolidFamily::Pyramid => self.n + 1,
            SolidFamily::Prism => 2 * self.n,
            SolidFamily::Bipyramid => self.n + 2,
        }
    }
}

impl fmt::Display for Solid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.family.name(), self.n)
    }
}

/// Accepts `tetrahedron`, `cube`, `octahedron`, or `<family>-<n>` (e.g. `prism-5`).
impl FromStr for Solid {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "tetrahedron" => return Ok(Self::TETRAHEDRON),
            "cube" => return Ok(Self::CUBE),
            "octahedron" => return Ok(Self::OCTAHEDRON),
            _ => {}
        }
        let (family, n) = s
            .split_once('-')
            .ok_or_else(|| format!("unknown solid {s:?}; expected e.g. prism-5"))?;
        let family = SolidFamily::ALL
            .into_iter()
            .find(|f| f.name() == family)
            .ok_or_else(|| format!("unknown family {family:?}"))?;
        let n: usize = n
            .parse()
            .map_err(|_| format!("invalid polygon size {n:?}"))?;
        if n < 3 {
            return Err(format!("polygon size must be ≥ 3, got {n}"));
        }
        Ok(Self::new(family, n))
    }
}

fn check_polygon(n: usize, what: &str) -> Result<(), EmbeddingError> {
    if n < 3 {
        return Err(EmbeddingError::invalid(format!(
            "a {what} needs a base polygon with ≥ 3 sides, got {n}"
        )));
    }
    Ok(())
}

/// Reversed base cycle `0, n-1, …, 1` (outward orientation for a bottom face).
fn reversed_cycle(n: usize) -> Vec<usize> {
    std::iter::once(0).chain((1..n).rev()).collect()
}

/// Base polygon `0..n` plus apex `n`.
pub fn pyramid(n: usize) -> Result<RotationSystem, EmbeddingError> {
    check_polygon(n, "pyramid")?;
    let apex = n;
    let mut faces = vec![reversed_cycle(n)];
    for i in 0..n {
        faces.push(vec![i, (i + 1) % n, apex]);
    }
    RotationSystem::from_oriented_faces(n + 1, &faces)
}

/// Bottom polygon `0..n`, top polygon `n..2n` with `n + i` above `i`.
pub fn prism(n: usize) -> Result<RotationSystem, EmbeddingError> {
    check_polygon(n, "prism")?;
    let mut faces = vec![reversed_cycle(n), (n..2 * n).collect()];
    for i in 0..n {
        let j = (i + 1) % n;
        faces.push(vec![i, j, n + j, n + i]);
    }
    RotationSystem::from_oriented_faces(2 * n, &faces)
}

/// Equator `0..n`, north pole `n`, south pole `n + 1`.
pub fn bipyramid(n: usize) -> Result<RotationSystem, EmbeddingError> {
    check_polygon(n, "bipyramid")?;
    let (north, south) = (n, n + 1);
    let mut faces = Vec::with_capacity(2 * n);
    for i in 0..n {
        let j = (i + 1) % n;
        faces.push(vec![i, j, north]);
        faces.push(vec![j, i, south]);
    }
    RotationSystem::from_oriented_faces(n + 2, &faces)
}

pub fn tetrahedron() -> Result<RotationSystem, EmbeddingError> {
    pyramid(3)
}

pub fn cube() -> Result<RotationSystem, EmbeddingError> {
    prism(4)
}

pub fn octahedron() -> Result<RotationSystem, EmbeddingError> {
    bipyramid(4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faces::collect_faces;

    #[test]
    fn families_have_expected_counts() {
        for n in 3..9 {
            for family in SolidFamily::ALL {
                let solid = Solid::new(family, n);
                let emb = solid.embedding().unwrap();
                let g = emb.graph();
                assert_eq!(g.num_vertices(), solid.num_vertices());
                let faces = collect_faces(&g, &emb).unwrap();
                assert_eq!(faces.euler_characteristic(), 2);
                let p = faces.p_vector();
                match family {
                    SolidFamily::Pyramid => {
                        assert_eq!(p.count(3), n + usize::from(n == 3));
                        assert_eq!(p.count(n), if n == 3 { 4 } else { 1 });
                    }
                    SolidFamily::Prism => {
                        assert_eq!(p.count(4), n + if n == 4 { 2 } else { 0 });
                        assert_eq!(p.count(n), if n == 4 { 6 } else { 2 });
                    }
                    SolidFamily::Bipyramid => {
                        assert_eq!(p.as_slice(), &[2 * n]);
                    }
                }
            }
        }
    }

    #[test]
    fn prisms_are_simple() {
        for n in 3..7 {
            assert!(prism(n).unwrap().graph().is_simple());
        }
        assert!(!pyramid(4).unwrap().graph().is_simple());
    }

    #[test]
    fn small_polygons_are_rejected() {
        assert!(matches!(
            prism(2),
            Err(EmbeddingError::InvalidRotation { .. })
        ));
        assert!(pyramid(0).is_err());
        assert!(bipyramid(1).is_err());
    }

    #[test]
    fn parse_names() {
        assert_eq!("cube".parse::<Solid>().unwrap(), Solid::CUBE);
        assert_eq!(" Tetrahedron ".parse::<Solid>().unwrap(), Solid::TETRAHEDRON);
        assert_eq!(
            "bipyramid-6".parse::<Solid>().unwrap(),
            Solid::new(SolidFamily::Bipyramid, 6)
        );
        assert_eq!(Solid::new(SolidFamily::Prism, 5).to_string(), "prism-5");
        assert!("prism-2".parse::<Solid>().is_err());
        assert!("wedge-4".parse::<Solid>().is_err());
        assert!("dodecahedron".parse::<Solid>().is_err());
    }
}
