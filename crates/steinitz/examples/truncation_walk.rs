//! Print the p-vector along a random truncation sequence.
//!
//! Usage:
//!   cargo run -p steinitz --example truncation_walk -- [base] [steps] [seed]
//!
//! Defaults: cube, 6 steps, seed 2025. `base` accepts the same names as the
//! CLI (`tetrahedron`, `prism-5`, ...).

use rand::{rngs::StdRng, Rng, SeedableRng};
use steinitz::api::{p_vector, truncate, Solid};

fn main() {
    let mut args = std::env::args().skip(1);
    let base: Solid = match args.next().map(|s| s.parse()) {
        Some(Ok(solid)) => solid,
        Some(Err(err)) => {
            eprintln!("usage: truncation_walk [base] [steps] [seed]: {err}");
            return;
        }
        None => Solid::CUBE,
    };
    let steps: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(6);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);

    let mut emb = base.embedding().expect("canonical solid");
    let mut g = emb.graph();
    let mut rng = StdRng::seed_from_u64(seed);
    println!("{base}: V={} E={} p={}", g.num_vertices(), g.num_edges(), p_vector(&g, &emb).unwrap());
    for step in 1..=steps {
        let v = rng.gen_range(0..g.num_vertices());
        let t = truncate(&g, &emb, v).expect("truncation of a polytope graph");
        g = t.graph;
        emb = t.embedding;
        println!(
            "step {step}: chop {v} (deg {}) → V={} E={} p={}",
            t.new_face.len(),
            g.num_vertices(),
            g.num_edges(),
            p_vector(&g, &emb).unwrap()
        );
    }
}
