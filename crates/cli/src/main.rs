mod commands;
mod provenance;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use steinitz::api::Solid;
use tracing_subscriber::fmt::SubscriberBuilder;

use commands::GenerateArgs;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Faces, p-vectors, and vertex truncation of polytope graphs")]
struct Cmd {
    /// Optional VK ticket UUID; propagated to outputs and logs
    #[arg(long, global = true)]
    vk: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print V, E, F and the p-vector of an edge-list file as JSON
    Faces {
        #[arg(long)]
        input: PathBuf,
    },
    /// Truncate one vertex (given by its input label) and write the new edge list
    Truncate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        vertex: i64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write random truncation samples as a table (.csv or .parquet)
    Generate {
        #[arg(long, default_value_t = 10)]
        count: usize,
        #[arg(long, default_value_t = 1)]
        min: usize,
        #[arg(long, default_value_t = 8)]
        max: usize,
        /// Base solid: tetrahedron, cube, octahedron, or <pyramid|prism|bipyramid>-<n>
        #[arg(long, default_value = "cube")]
        base: Solid,
        #[arg(long, default_value_t = 2025)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let vk = cmd.vk.as_deref();
    match cmd.action {
        Action::Faces { input } => print_json(&commands::faces(&input, vk)?),
        Action::Truncate { input, vertex, out } => {
            print_json(&commands::truncate(&input, vertex, &out, vk)?)
        }
        Action::Generate {
            count,
            min,
            max,
            base,
            seed,
            out,
        } => {
            let args = GenerateArgs {
                count,
                min,
                max,
                base,
                seed,
            };
            print_json(&commands::generate(&args, &out, vk)?)
        }
        Action::Report => print_json(&provenance::report_block(vk)),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
