//! Benchmark table loading.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// One row of the benchmark table. Field names match the CSV header.
#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkSample {
    pub s: f64,
    pub init_time: f64,
    pub init_size: f64,
    pub signing_time: f64,
    pub signing_size: f64,
    pub challenging_time: f64,
    pub challenging_size: f64,
    pub proving_time: f64,
    pub proving_size: f64,
    pub verif_time: f64,
}

/// Load samples from a benchmark CSV file
pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<Vec<BenchmarkSample>> {
    let file = File::open(path.as_ref())
        .with_context(|| format!("Failed to open benchmark file: {}", path.as_ref().display()))?;

    let mut reader = csv::Reader::from_reader(file);
    let mut samples = Vec::new();

    for (row, record) in reader.deserialize::<BenchmarkSample>().enumerate() {
        let sample = record.with_context(|| format!("Failed to parse row {}", row + 1))?;
        samples.push(sample);
    }

    if samples.is_empty() {
        return Err(anyhow::anyhow!("No samples found in benchmark file"));
    }

    Ok(samples)
}
