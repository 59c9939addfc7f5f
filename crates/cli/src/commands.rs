//! Command implementations; `main` only parses flags and prints results.
//!
//! Edge files hold one undirected edge per line (`u v` or `u, v`) or a
//! bracketed list such as `[[1,2],[2,3]]`. Labels may be arbitrary integers;
//! outputs keep 1-based labels when the input used exactly `1..=n`, and dense
//! 0-based indices otherwise.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use serde::Serialize;
use serde_json::json;
use steinitz::api::{
    collect_faces, p_vector_with, parse_edge_list, truncate_with, PolytopeGenerator,
    PolytopeGraph, Solid, TruncationGenerator, TruncationParams, TutteOracle,
};
use tracing::info;

use crate::provenance::{write_sidecar, Payload};

/// Graph read from an edge file plus its label table (index → label).
pub struct LabeledGraph {
    pub graph: PolytopeGraph,
    pub labels: Vec<i64>,
}

impl LabeledGraph {
    pub fn index_of(&self, label: i64) -> Option<usize> {
        self.labels.binary_search(&label).ok()
    }

    pub fn is_one_based(&self) -> bool {
        self.labels.iter().copied().eq(1..=self.labels.len() as i64)
    }
}

pub fn read_edge_file(path: &Path) -> Result<LabeledGraph> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let edges = parse_edge_list(&text).with_context(|| format!("parsing {}", path.display()))?;
    let (graph, labels) = PolytopeGraph::from_labeled_edges(&edges)
        .with_context(|| format!("building graph from {}", path.display()))?;
    Ok(LabeledGraph { graph, labels })
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Write `u v` per line, shifting every index by `offset`.
pub fn write_edge_file(path: &Path, graph: &PolytopeGraph, offset: i64, header: &str) -> Result<()> {
    create_parent(path)?;
    let mut out = String::new();
    for line in header.lines() {
        out.push_str("# ");
        out.push_str(line);
        out.push('\n');
    }
    for (u, v) in graph.edges() {
        out.push_str(&format!("{} {}\n", u as i64 + offset, v as i64 + offset));
    }
    fs::write(path, out).with_context(|| format!("writing {}", path.display()))
}

fn edge_list_string(graph: &PolytopeGraph) -> String {
    let pairs: Vec<String> = graph.edges().map(|(u, v)| format!("[{u},{v}]")).collect();
    format!("[{}]", pairs.join(","))
}

#[derive(Debug, Serialize)]
pub struct FacesReport {
    pub vertices: usize,
    pub edges: usize,
    pub faces: usize,
    pub p_vector: Vec<usize>,
    pub simple: bool,
}

pub fn faces(input: &Path, vk: Option<&str>) -> Result<FacesReport> {
    let lg = read_edge_file(input)?;
    let p = p_vector_with(&lg.graph, &TutteOracle::default())
        .with_context(|| format!("computing faces of {}", input.display()))?;
    let report = FacesReport {
        vertices: lg.graph.num_vertices(),
        edges: lg.graph.num_edges(),
        faces: p.total(),
        p_vector: p.into_inner(),
        simple: lg.graph.is_simple(),
    };
    info!(
        input = %input.display(),
        vk = ?vk,
        vertices = report.vertices,
        faces = report.faces,
        "faces"
    );
    Ok(report)
}

#[derive(Debug, Serialize)]
pub struct TruncateReport {
    pub removed: i64,
    pub vertices: usize,
    pub edges: usize,
    pub faces: usize,
    pub p_vector: Vec<usize>,
    pub new_face: Vec<i64>,
    pub out: PathBuf,
    pub provenance: PathBuf,
}

pub fn truncate(input: &Path, vertex: i64, out: &Path, vk: Option<&str>) -> Result<TruncateReport> {
    let lg = read_edge_file(input)?;
    let v = lg
        .index_of(vertex)
        .with_context(|| format!("vertex {vertex} does not occur in {}", input.display()))?;
    let t = truncate_with(&lg.graph, &TutteOracle::default(), v)
        .with_context(|| format!("truncating vertex {vertex} of {}", input.display()))?;
    let faces = collect_faces(&t.graph, &t.embedding)
        .context("collecting faces of the truncated graph")?;
    let p = faces.p_vector();

    let offset = i64::from(lg.is_one_based());
    write_edge_file(
        out,
        &t.graph,
        offset,
        &format!("{} truncated at vertex {vertex}", input.display()),
    )?;
    let new_face: Vec<i64> = t.new_face.iter().map(|&w| w as i64 + offset).collect();
    let payload = Payload::new(
        json!({
            "command": "truncate",
            "vertex": vertex,
            "one_based": offset == 1,
            "vertices": t.graph.num_vertices(),
            "edges": t.graph.num_edges(),
            "p_vector": p.as_slice(),
            "new_face": new_face,
        }),
        vk,
    )
    .with_input(input);
    let provenance = write_sidecar(out, payload)?;
    info!(
        input = %input.display(),
        out = %out.display(),
        vertex,
        vk = ?vk,
        p_vector = %p,
        "truncate"
    );
    Ok(TruncateReport {
        removed: vertex,
        vertices: t.graph.num_vertices(),
        edges: t.graph.num_edges(),
        faces: faces.len(),
        p_vector: p.into_inner(),
        new_face,
        out: out.to_path_buf(),
        provenance,
    })
}

/// Flags of the `generate` command.
#[derive(Clone, Debug)]
pub struct GenerateArgs {
    pub count: usize,
    pub min: usize,
    pub max: usize,
    pub base: Solid,
    pub seed: u64,
}

#[derive(Debug, Serialize)]
pub struct GenerateReport {
    pub rows: usize,
    pub out: PathBuf,
    pub provenance: PathBuf,
}

pub fn generate(args: &GenerateArgs, out: &Path, vk: Option<&str>) -> Result<GenerateReport> {
    let params = TruncationParams {
        base: args.base,
        truncations_min: args.min,
        truncations_max: args.max,
    };
    let mut gen = TruncationGenerator::new(params, args.seed)?;

    let mut names = Vec::with_capacity(args.count);
    let mut seeds = Vec::with_capacity(args.count);
    let mut vertices = Vec::with_capacity(args.count);
    let mut edges = Vec::with_capacity(args.count);
    let mut faces = Vec::with_capacity(args.count);
    let mut p_vectors = Vec::with_capacity(args.count);
    let mut edge_lists = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        let sample = gen
            .generate_next()?
            .context("truncation generator stopped early")?;
        let poly = &sample.polytope;
        let set = collect_faces(&poly.graph, &poly.embedding)
            .with_context(|| format!("faces of sample seed {}", sample.replay.seed))?;
        names.push(format!("{}+t{}", args.base, poly.history.len()));
        seeds.push(sample.replay.seed);
        vertices.push(poly.graph.num_vertices() as u64);
        edges.push(poly.graph.num_edges() as u64);
        faces.push(set.len() as u64);
        p_vectors.push(set.p_vector().to_string());
        edge_lists.push(edge_list_string(&poly.graph));
    }
    let mut df = df!(
        "name" => names,
        "seed" => seeds,
        "vertices" => vertices,
        "edges" => edges,
        "faces" => faces,
        "p_vector" => p_vectors,
        "edge_list" => edge_lists
    )?;
    write_table(out, &mut df)?;

    let payload = Payload::new(
        json!({
            "command": "generate",
            "count": args.count,
            "min": args.min,
            "max": args.max,
            "base": args.base.to_string(),
            "seed": args.seed,
        }),
        vk,
    );
    let provenance = write_sidecar(out, payload)?;
    info!(out = %out.display(), rows = df.height(), vk = ?vk, "generate");
    Ok(GenerateReport {
        rows: df.height(),
        out: out.to_path_buf(),
        provenance,
    })
}

/// CSV or Parquet, chosen by extension.
fn write_table(out: &Path, df: &mut DataFrame) -> Result<()> {
    let ext = out
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    if !matches!(ext.as_deref(), Some("csv") | Some("parquet")) {
        bail!("unsupported output {}; use .csv or .parquet", out.display());
    }
    create_parent(out)?;
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    if ext.as_deref() == Some("csv") {
        CsvWriter::new(&mut file).include_header(true).finish(df)?;
    } else {
        ParquetWriter::new(&mut file).finish(df)?;
    }
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const CUBE_ONE_BASED: &str = "\
# cube, labels 1..=8
1 2
2 3
3 4
4 1
5 6
6 7
7 8
8 5
1 5
2 6
3 7
4 8
";

    fn cube_file(dir: &Path) -> PathBuf {
        let path = dir.join("cube.txt");
        fs::write(&path, CUBE_ONE_BASED).unwrap();
        path
    }

    #[test]
    fn faces_of_cube_file() {
        let dir = tempdir().unwrap();
        let report = faces(&cube_file(dir.path()), None).unwrap();
        assert_eq!(report.vertices, 8);
        assert_eq!(report.edges, 12);
        assert_eq!(report.faces, 6);
        assert_eq!(report.p_vector, vec![0, 6]);
        assert!(report.simple);
    }

    #[test]
    fn truncate_keeps_one_based_labels() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out").join("chopped.txt");
        let report = truncate(&cube_file(dir.path()), 1, &out, Some("vk-1")).unwrap();
        assert_eq!(report.vertices, 10);
        assert_eq!(report.edges, 15);
        assert_eq!(report.p_vector, vec![1, 3, 3]);
        assert_eq!(report.new_face, vec![8, 9, 10]);

        let back = read_edge_file(&out).unwrap();
        assert!(back.is_one_based());
        assert_eq!(back.graph.num_edges(), 15);
        assert!(back.graph.is_simple());

        let prov: serde_json::Value =
            serde_json::from_slice(&fs::read(&report.provenance).unwrap()).unwrap();
        assert_eq!(prov["vk"], "vk-1");
        assert_eq!(prov["params"]["vertex"], 1);
        assert!(report.provenance.ends_with("chopped.provenance.json"));
    }

    #[test]
    fn truncate_rejects_unknown_label() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("x.txt");
        let err = truncate(&cube_file(dir.path()), 0, &out, None).unwrap_err();
        assert!(err.to_string().contains("does not occur"));
        assert!(!out.exists());
    }

    #[test]
    fn non_planar_input_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("k5.txt");
        fs::write(&path, "[[0,1],[0,2],[0,3],[0,4],[1,2],[1,3],[1,4],[2,3],[2,4],[3,4]]")
            .unwrap();
        assert!(faces(&path, None).is_err());
        fs::write(&path, "").unwrap();
        assert!(faces(&path, None).is_err());
    }

    fn args(count: usize) -> GenerateArgs {
        GenerateArgs {
            count,
            min: 0,
            max: 3,
            base: Solid::CUBE,
            seed: 7,
        }
    }

    #[test]
    fn generate_writes_csv_with_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("samples.csv");
        let report = generate(&args(4), &out, None).unwrap();
        assert_eq!(report.rows, 4);
        let text = fs::read_to_string(&out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "name,seed,vertices,edges,faces,p_vector,edge_list"
        );
        assert_eq!(lines.count(), 4);
        assert!(dir.path().join("samples.provenance.json").exists());
    }

    #[test]
    fn generate_writes_parquet() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("samples.parquet");
        generate(&args(3), &out, None).unwrap();
        let df = ParquetReader::new(File::open(&out).unwrap()).finish().unwrap();
        assert_eq!(df.height(), 3);
        assert_eq!(df.width(), 7);
    }

    #[test]
    fn generate_rejects_unknown_extension() {
        let dir = tempdir().unwrap();
        assert!(generate(&args(1), &dir.path().join("samples.json"), None).is_err());
    }
}
