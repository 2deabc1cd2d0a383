//! Benchmark graph renderer.
//!
//! Reads a CSV of protocol benchmark measurements and renders one
//! dual-axis chart per protocol step (time in seconds against sample
//! size, proof size in octets on a secondary axis where measured).

mod data;
mod plot;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Render benchmark measurements as per-step dual-axis graphs
#[derive(Parser, Debug)]
#[command(name = "benchplot")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Benchmark CSV to read
    #[arg(short, long, default_value = "./results/benchmarks.csv")]
    input: PathBuf,

    /// Output directory for the rendered graphs
    #[arg(short, long, default_value = "./results/graphs")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    eprintln!("Loading samples from: {}", args.input.display());
    let samples = data::load_samples(&args.input)?;

    eprintln!("Rendering graphs in: {}", args.output_dir.display());
    let generated = plot::generate_graphs(&samples, &args.output_dir)?;

    eprintln!("\nGenerated {} graphs:", generated.len());
    for path in generated {
        eprintln!("  • {}", path);
    }

    Ok(())
}
