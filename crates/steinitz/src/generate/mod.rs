//! Random and enumerative polytope-graph generators.
//!
//! Purpose
//! - Provide reproducible streams of embedded polytope graphs for experiments,
//!   benchmarks, and the CLI `generate` command.
//!
//! Why this design
//! - Every sample carries the params snapshot plus a replay token (seed or solid).
//! - `PolytopeGenerator` exposes both streaming (`generate_next`) and replay
//!   (`regenerate`) entry points so callers can take either path without
//!   duplicating logic.
//! - Random samples are grown by repeated truncation from a canonical solid, so
//!   each one comes with its embedding and never needs an oracle.
//!
//! Related code: `crate::solids`, `crate::truncate`.

use std::fmt;
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::trace;

use crate::embedding::RotationSystem;
use crate::graph::PolytopeGraph;
use crate::solids::{Solid, SolidFamily};
use crate::truncate::truncate;

/// Error type shared by all generators.
#[derive(Debug)]
pub enum GeneratorError {
    InvalidParams { reason: String },
    DegenerateSample { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateSample {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
            Self::DegenerateSample { reason } => write!(f, "degenerate sample: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Generated graph, its embedding, and the vertices truncated along the way
/// (indices at the time of each truncation).
#[derive(Clone, Debug, PartialEq)]
pub struct EmbeddedPolytope {
    pub graph: PolytopeGraph,
    pub embedding: RotationSystem,
    pub history: Vec<usize>,
}

impl EmbeddedPolytope {
    fn from_solid(solid: Solid) -> Result<Self, GeneratorError> {
        let embedding = solid
            .embedding()
            .map_err(|err| GeneratorError::degenerate(format!("{solid}: {err}")))?;
        Ok(Self {
            graph: embedding.graph(),
            embedding,
            history: Vec::new(),
        })
    }
}

/// A single polytope plus replay metadata.
#[derive(Clone, Debug)]
pub struct PolytopeSample<P, R> {
    pub polytope: EmbeddedPolytope,
    pub params: P,
    pub replay: R,
}

/// Common trait for reproducible polytope sources.
pub trait PolytopeGenerator {
    type Params: Clone;
    type Replay: Clone;

    fn params(&self) -> &Self::Params;

    fn generate_next(
        &mut self,
    ) -> Result<Option<PolytopeSample<Self::Params, Self::Replay>>, GeneratorError>;

    fn regenerate(&self, replay: &Self::Replay) -> Result<EmbeddedPolytope, GeneratorError>;
}

/// Parameters for random truncation sequences.
#[derive(Clone, Debug)]
pub struct TruncationParams {
    pub base: Solid,
    pub truncations_min: usize,
    pub truncations_max: usize,
}

impl TruncationParams {
    fn validate(&self) -> Result<(), GeneratorError> {
        if self.base.n < 3 {
            return Err(GeneratorError::invalid(format!(
                "base polygon size must be ≥ 3, got {}",
                self.base.n
            )));
        }
        if self.truncations_min > self.truncations_max {
            return Err(GeneratorError::invalid(
                "truncations_min <= truncations_max required",
            ));
        }
        Ok(())
    }

    fn truncations(&self) -> RangeInclusive<usize> {
        self.truncations_min..=self.truncations_max
    }
}

/// Replay token storing the seed that regenerates the same truncation sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedReplay {
    pub seed: u64,
}

/// Truncate uniformly random vertices of a base solid, `k ∈ [min, max]` times.
pub struct TruncationGenerator {
    params: TruncationParams,
    master_rng: StdRng,
}

impl TruncationGenerator {
    pub fn new(params: TruncationParams, seed: u64) -> Result<Self, GeneratorError> {
        params.validate()?;
        Ok(Self {
            params,
            master_rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn generate_single(
        params: &TruncationParams,
        seed: u64,
    ) -> Result<EmbeddedPolytope, GeneratorError> {
        params.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let k = rng.gen_range(params.truncations());
        let mut poly = EmbeddedPolytope::from_solid(params.base)?;
        for _ in 0..k {
            let v = rng.gen_range(0..poly.graph.num_vertices());
            let t = truncate(&poly.graph, &poly.embedding, v)
                .map_err(|err| GeneratorError::degenerate(format!("truncating {v}: {err}")))?;
            poly.graph = t.graph;
            poly.embedding = t.embedding;
            poly.history.push(v);
        }
        trace!(seed, truncations = k, vertices = poly.graph.num_vertices(), "generate_single");
        Ok(poly)
    }
}

impl PolytopeGenerator for TruncationGenerator {
    type Params = TruncationParams;
    type Replay = SeedReplay;

    fn params(&self) -> &Self::Params {
        &self.params
    }

    fn generate_next(
        &mut self,
    ) -> Result<Option<PolytopeSample<Self::Params, Self::Replay>>, GeneratorError> {
        let sample_seed = self.master_rng.next_u64();
        let polytope = Self::generate_single(&self.params, sample_seed)?;
        Ok(Some(PolytopeSample {
            polytope,
            params: self.params.clone(),
            replay: SeedReplay { seed: sample_seed },
        }))
    }

    fn regenerate(&self, replay: &Self::Replay) -> Result<EmbeddedPolytope, GeneratorError> {
        Self::generate_single(&self.params, replay.seed)
    }
}

/// Parameters for the canonical-family enumerator.
#[derive(Clone, Debug)]
pub struct SolidFamilyParams {
    pub families: Vec<SolidFamily>,
    pub n_min: usize,
    pub n_max: usize,
}

impl SolidFamilyParams {
    fn validate(&self) -> Result<(), GeneratorError> {
        if self.families.is_empty() {
            return Err(GeneratorError::invalid("need at least one family"));
        }
        if self.n_min < 3 {
            return Err(GeneratorError::invalid("n_min must be ≥ 3"));
        }
        if self.n_min > self.n_max {
            return Err(GeneratorError::invalid("n_min <= n_max required"));
        }
        Ok(())
    }

    fn total(&self) -> usize {
        self.families.len() * (self.n_max - self.n_min + 1)
    }
}

/// Enumerate pyramids, prisms, and bipyramids family by family.
pub struct SolidFamilyEnumerator {
    params: SolidFamilyParams,
    next_linear_index: usize,
}

impl SolidFamilyEnumerator {
    pub fn new(params: SolidFamilyParams) -> Result<Self, GeneratorError> {
        params.validate()?;
        Ok(Self {
            params,
            next_linear_index: 0,
        })
    }
}

impl PolytopeGenerator for SolidFamilyEnumerator {
    type Params = SolidFamilyParams;
    type Replay = Solid;

    fn params(&self) -> &Self::Params {
        &self.params
    }

    fn generate_next(
        &mut self,
    ) -> Result<Option<PolytopeSample<Self::Params, Self::Replay>>, GeneratorError> {
        if self.next_linear_index >= self.params.total() {
            return Ok(None);
        }
        let span = self.params.n_max - self.params.n_min + 1;
        let family = self.params.families[self.next_linear_index / span];
        let n = self.params.n_min + self.next_linear_index % span;
        let replay = Solid::new(family, n);
        let polytope = self.regenerate(&replay)?;
        self.next_linear_index += 1;
        Ok(Some(PolytopeSample {
            polytope,
            params: self.params.clone(),
            replay,
        }))
    }

    fn regenerate(&self, replay: &Self::Replay) -> Result<EmbeddedPolytope, GeneratorError> {
        EmbeddedPolytope::from_solid(*replay)
    }
}
