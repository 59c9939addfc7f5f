//! Tutte (barycentric) embedding oracle for 3-connected planar graphs.
//!
//! Algorithm
//! - Pick a peripheral cycle (induced, non-separating) among the shortest
//!   cycles through each edge. In a 3-connected planar graph these are exactly
//!   the face boundaries, so the cycle can serve as the outer face.
//! - Pin it to a regular polygon and place every other vertex at the average
//!   of its neighbors (one LU solve per coordinate).
//! - Read the rotation at each vertex from the counterclockwise angle order of
//!   its edges, then confirm the result with a full face collection.
//!
//! This is not a planarity test: inputs that are planar but not 3-connected
//! can fail with `Degenerate` or `NoPeripheralCycle` instead of `NotPlanar`.

use std::cmp::Ordering;
use std::collections::{HashSet, VecDeque};
use std::f64::consts::TAU;

use nalgebra::{DMatrix, DVector, Vector2};
use tracing::debug;

use super::oracle::{EmbedCfg, EmbeddingError, EmbeddingOracle};
use super::rotation::RotationSystem;
use crate::cfg::{MIN_POLYTOPE_DEGREE, MIN_POLYTOPE_VERTICES};
use crate::faces::collect_faces;
use crate::graph::PolytopeGraph;

/// Barycentric embedding oracle.
#[derive(Clone, Copy, Debug, Default)]
pub struct TutteOracle {
    pub cfg: EmbedCfg,
}

impl TutteOracle {
    pub fn new(cfg: EmbedCfg) -> Self {
        Self { cfg }
    }

    /// Vertex positions of the barycentric drawing (outer face on a regular polygon).
    pub fn positions(&self, graph: &PolytopeGraph) -> Result<Vec<Vector2<f64>>, EmbeddingError> {
        check_polytopal(graph)?;
        let outer = peripheral_cycle(graph).ok_or(EmbeddingError::NoPeripheralCycle)?;
        debug!(outer_len = outer.len(), "tutte_outer_face");
        barycentric_positions(graph, &outer, self.cfg.outer_radius)
    }
}

impl EmbeddingOracle for TutteOracle {
    fn embed(&self, graph: &PolytopeGraph) -> Result<RotationSystem, EmbeddingError> {
        let positions = self.positions(graph)?;
        let rotations = angular_rotations(graph, &positions, &self.cfg)?;
        let rotation = RotationSystem::new(rotations)?;
        let faces = collect_faces(graph, &rotation).map_err(|err| EmbeddingError::NotPlanar {
            reason: err.to_string(),
        })?;
        debug!(
            vertices = graph.num_vertices(),
            edges = graph.num_edges(),
            faces = faces.len(),
            "tutte_embedding"
        );
        Ok(rotation)
    }
}

fn check_polytopal(graph: &PolytopeGraph) -> Result<(), EmbeddingError> {
    let n = graph.num_vertices();
    if n < MIN_POLYTOPE_VERTICES {
        return Err(EmbeddingError::not_polytopal(format!(
            "{n} vertices, need at least {MIN_POLYTOPE_VERTICES}"
        )));
    }
    if let Some(v) = (0..n).find(|&v| graph.degree(v) < MIN_POLYTOPE_DEGREE) {
        return Err(EmbeddingError::not_polytopal(format!(
            "vertex {v} has degree {}, need at least {MIN_POLYTOPE_DEGREE}",
            graph.degree(v)
        )));
    }
    if !graph.is_connected() {
        return Err(EmbeddingError::not_polytopal("graph is disconnected"));
    }
    Ok(())
}

/// First peripheral cycle among shortest cycles through each edge (edge order).
pub(crate) fn peripheral_cycle(graph: &PolytopeGraph) -> Option<Vec<usize>> {
    let mut tried: HashSet<Vec<usize>> = HashSet::new();
    for (u, v) in graph.edges() {
        let Some(cycle) = shortest_cycle_through(graph, u, v) else {
            continue;
        };
        let mut key = cycle.clone();
        key.sort_unstable();
        if !tried.insert(key) {
            continue;
        }
        if is_peripheral(graph, &cycle) {
            return Some(cycle);
        }
    }
    None
}

/// Cycle `u → … → v → u` of minimum length that uses edge `{u, v}` once.
fn shortest_cycle_through(graph: &PolytopeGraph, u: usize, v: usize) -> Option<Vec<usize>> {
    let n = graph.num_vertices();
    let mut parent = vec![usize::MAX; n];
    parent[u] = u;
    let mut queue = VecDeque::from([u]);
    while let Some(x) = queue.pop_front() {
        for &y in graph.neighbors(x) {
            if x == u && y == v {
                continue;
            }
            if parent[y] != usize::MAX {
                continue;
            }
            parent[y] = x;
            if y == v {
                let mut path = vec![v];
                let mut cur = v;
                while cur != u {
                    cur = parent[cur];
                    path.push(cur);
                }
                path.reverse();
                return Some(path);
            }
            queue.push_back(y);
        }
    }
    None
}

/// Induced (chordless) and non-separating.
fn is_peripheral(graph: &PolytopeGraph, cycle: &[usize]) -> bool {
    let mut on_cycle = vec![false; graph.num_vertices()];
    for &x in cycle {
        on_cycle[x] = true;
    }
    let chordless = cycle.iter().all(|&x| {
        graph
            .neighbors(x)
            .iter()
            .filter(|&&y| on_cycle[y])
            .count()
            == 2
    });
    chordless && graph.is_connected_without(&on_cycle)
}

fn barycentric_positions(
    graph: &PolytopeGraph,
    outer: &[usize],
    radius: f64,
) -> Result<Vec<Vector2<f64>>, EmbeddingError> {
    let n = graph.num_vertices();
    let k = outer.len() as f64;
    let mut pos = vec![Vector2::zeros(); n];
    let mut pinned = vec![false; n];
    for (i, &v) in outer.iter().enumerate() {
        let theta = TAU * i as f64 / k;
        pos[v] = Vector2::new(radius * theta.cos(), radius * theta.sin());
        pinned[v] = true;
    }
    let free: Vec<usize> = (0..n).filter(|&v| !pinned[v]).collect();
    if free.is_empty() {
        return Ok(pos);
    }
    let mut slot = vec![usize::MAX; n];
    for (r, &v) in free.iter().enumerate() {
        slot[v] = r;
    }
    let m = free.len();
    let mut lap = DMatrix::<f64>::zeros(m, m);
    let mut bx = DVector::<f64>::zeros(m);
    let mut by = DVector::<f64>::zeros(m);
    for (r, &v) in free.iter().enumerate() {
        lap[(r, r)] = graph.degree(v) as f64;
        for &w in graph.neighbors(v) {
            if pinned[w] {
                bx[r] += pos[w].x;
                by[r] += pos[w].y;
            } else {
                lap[(r, slot[w])] -= 1.0;
            }
        }
    }
    let lu = lap.lu();
    let xs = lu.solve(&bx).ok_or(EmbeddingError::Singular)?;
    let ys = lu.solve(&by).ok_or(EmbeddingError::Singular)?;
    for (r, &v) in free.iter().enumerate() {
        pos[v] = Vector2::new(xs[r], ys[r]);
    }
    Ok(pos)
}

/// Counterclockwise neighbor order at each vertex of a straight-line drawing.
fn angular_rotations(
    graph: &PolytopeGraph,
    pos: &[Vector2<f64>],
    cfg: &EmbedCfg,
) -> Result<Vec<Vec<usize>>, EmbeddingError> {
    let mut out = Vec::with_capacity(graph.num_vertices());
    for v in 0..graph.num_vertices() {
        let mut items = Vec::with_capacity(graph.degree(v));
        for &w in graph.neighbors(v) {
            let d = pos[w] - pos[v];
            let len = d.norm();
            if len.is_nan() || len <= cfg.eps_length {
                return Err(EmbeddingError::Degenerate { vertex: v });
            }
            items.push((d.y.atan2(d.x), w));
        }
        items.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        let gaps_ok = items.windows(2).all(|p| p[1].0 - p[0].0 > cfg.eps_angle)
            && match (items.first(), items.last()) {
                (Some(first), Some(last)) if items.len() > 1 => {
                    first.0 + TAU - last.0 > cfg.eps_angle
                }
                _ => true,
            };
        if !gaps_ok {
            return Err(EmbeddingError::Degenerate { vertex: v });
        }
        out.push(items.into_iter().map(|(_, w)| w).collect());
    }
    Ok(out)
}
