//! Graph generation from benchmark tables.

use crate::data::BenchmarkSample;
use anyhow::{Context, Result};
use plotters::prelude::*;
use std::path::Path;

/// Figure geometry: 6.8in x 4.2in report figures at 100 dpi.
const FIGURE_SIZE: (u32, u32) = (680, 420);
const MARKER_SIZE: i32 = 3;

type Column = fn(&BenchmarkSample) -> f64;

/// Generate all step graphs from samples
pub fn generate_graphs<P: AsRef<Path>>(
    samples: &[BenchmarkSample],
    output_dir: P,
) -> Result<Vec<String>> {
    let output_dir = output_dir.as_ref();
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create graph directory: {}", output_dir.display()))?;

    // One entry per protocol step: output file, time column, optional size
    // column (verification reports timing only).
    let graphs: [(&str, Column, Option<Column>); 5] = [
        ("initialisation_step.jpg", |r| r.init_time, Some(|r: &BenchmarkSample| r.init_size)),
        ("signing_step.jpg", |r| r.signing_time, Some(|r: &BenchmarkSample| r.signing_size)),
        ("challenging_step.jpg", |r| r.challenging_time, Some(|r: &BenchmarkSample| r.challenging_size)),
        ("proving_step.jpg", |r| r.proving_time, Some(|r: &BenchmarkSample| r.proving_size)),
        ("verification_step.jpg", |r| r.verif_time, None),
    ];

    let mut generated = Vec::new();

    for (file_name, time, size) in graphs {
        let path = output_dir.join(file_name);
        plot_step(samples, time, size, &path)?;
        generated.push(path.display().to_string());
    }

    Ok(generated)
}

/// Render one step: time in seconds on the left y-axis, and when a size
/// column is present, octets on a right y-axis sharing the same x-axis.
fn plot_step(
    samples: &[BenchmarkSample],
    time: Column,
    size: Option<Column>,
    path: &Path,
) -> Result<()> {
    let s_values: Vec<f64> = samples.iter().map(|r| r.s).collect();
    let times: Vec<f64> = samples.iter().map(time).collect();

    let (s_min, s_max) = x_span(&s_values);
    let max_time = padded_max(&times);

    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    match size {
        Some(size) => {
            let sizes: Vec<f64> = samples.iter().map(size).collect();
            let max_size = padded_max(&sizes);

            let mut chart = ChartBuilder::on(&root)
                .margin(10)
                .x_label_area_size(40)
                .y_label_area_size(60)
                .right_y_label_area_size(60)
                .build_cartesian_2d(s_min..s_max, 0f64..max_time)?
                .set_secondary_coord(s_min..s_max, 0f64..max_size);

            chart.configure_mesh().x_desc("s").y_desc("seconds").draw()?;
            chart.configure_secondary_axes().y_desc("octets").draw()?;

            chart.draw_series(LineSeries::new(
                s_values.iter().zip(times.iter()).map(|(x, y)| (*x, *y)),
                &RED,
            ))?;
            chart.draw_series(
                s_values
                    .iter()
                    .zip(times.iter())
                    .map(|(x, y)| Circle::new((*x, *y), MARKER_SIZE, RED.filled())),
            )?;

            chart.draw_secondary_series(LineSeries::new(
                s_values.iter().zip(sizes.iter()).map(|(x, y)| (*x, *y)),
                &BLUE,
            ))?;
            chart.draw_secondary_series(
                s_values
                    .iter()
                    .zip(sizes.iter())
                    .map(|(x, y)| Circle::new((*x, *y), MARKER_SIZE, BLUE.filled())),
            )?;
        }
        None => {
            let mut chart = ChartBuilder::on(&root)
                .margin(10)
                .x_label_area_size(40)
                .y_label_area_size(60)
                .build_cartesian_2d(s_min..s_max, 0f64..max_time)?;

            chart.configure_mesh().x_desc("s").y_desc("seconds").draw()?;

            chart.draw_series(LineSeries::new(
                s_values.iter().zip(times.iter()).map(|(x, y)| (*x, *y)),
                &RED,
            ))?;
            chart.draw_series(
                s_values
                    .iter()
                    .zip(times.iter())
                    .map(|(x, y)| Circle::new((*x, *y), MARKER_SIZE, RED.filled())),
            )?;
        }
    }

    root.present()
        .with_context(|| format!("Failed to write graph: {}", path.display()))?;

    Ok(())
}

/// Observed x span, widened to a unit range when degenerate
fn x_span(values: &[f64]) -> (f64, f64) {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if max > min {
        (min, max)
    } else {
        (min, min + 1.0)
    }
}

/// Max of a series with headroom, unit range when the series is flat zero
fn padded_max(values: &[f64]) -> f64 {
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    if max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP_FILES: [&str; 5] = [
        "initialisation_step.jpg",
        "signing_step.jpg",
        "challenging_step.jpg",
        "proving_step.jpg",
        "verification_step.jpg",
    ];

    fn sample(s: f64) -> BenchmarkSample {
        BenchmarkSample {
            s,
            init_time: 0.5 * s,
            init_size: 128.0 * s,
            signing_time: 1.2 * s,
            signing_size: 256.0 * s,
            challenging_time: 0.1 * s,
            challenging_size: 64.0,
            proving_time: 3.4 * s,
            proving_size: 512.0 * s,
            verif_time: 0.2 * s,
        }
    }

    #[test]
    fn renders_all_five_graphs() {
        let dir = tempfile::tempdir().unwrap();
        let samples: Vec<_> = [2.0, 4.0, 8.0].iter().map(|&s| sample(s)).collect();

        let generated = generate_graphs(&samples, dir.path()).unwrap();
        assert_eq!(generated.len(), 5);

        for name in STEP_FILES {
            let path = dir.path().join(name);
            assert!(path.exists(), "missing graph: {}", name);
            assert!(std::fs::metadata(&path).unwrap().len() > 0);
        }
    }

    #[test]
    fn rerun_overwrites_instead_of_accumulating() {
        let dir = tempfile::tempdir().unwrap();
        let samples = vec![sample(2.0), sample(4.0)];

        generate_graphs(&samples, dir.path()).unwrap();
        generate_graphs(&samples, dir.path()).unwrap();

        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 5);
    }

    #[test]
    fn single_sample_renders() {
        let dir = tempfile::tempdir().unwrap();
        let generated = generate_graphs(&[sample(2.0)], dir.path()).unwrap();
        assert_eq!(generated.len(), 5);
    }

    #[test]
    fn unsorted_samples_render() {
        let dir = tempfile::tempdir().unwrap();
        let samples: Vec<_> = [8.0, 2.0, 4.0].iter().map(|&s| sample(s)).collect();
        assert!(generate_graphs(&samples, dir.path()).is_ok());
    }

    #[test]
    fn x_span_widens_degenerate_ranges() {
        assert_eq!(x_span(&[]), (0.0, 1.0));
        assert_eq!(x_span(&[3.0]), (3.0, 4.0));
        assert_eq!(x_span(&[2.0, 8.0, 4.0]), (2.0, 8.0));
    }

    #[test]
    fn padded_max_leaves_headroom() {
        assert_eq!(padded_max(&[0.0, 0.0]), 1.0);
        assert!((padded_max(&[2.0, 10.0]) - 11.0).abs() < 1e-9);
    }
}
