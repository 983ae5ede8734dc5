// src/report.rs
//! Rendering of rank vectors and degree histograms.
//!
//! Nodes are keyed by their external 1-based labels on the way out.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::error::{DimrankError, Result};
use crate::histogram::{bucket_range, BucketMode};
use crate::rank::Solution;

/// Output rendering for rank and histogram reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct RankRecord {
    node: usize,
    rank: f64,
}

#[derive(Serialize)]
struct HistogramRecord {
    key: usize,
    count: u64,
}

/// Renders one rank per node.
///
/// # Errors
/// Propagates write and serialization failures.
pub fn render_ranks<W: Write>(mut out: W, solution: &Solution, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (node, rank) in solution.ranks.iter().enumerate() {
                writeln!(out, "node {}\t{rank:.6}", node + 1)?;
            }
        }
        OutputFormat::Json => {
            let records: Vec<RankRecord> = solution
                .ranks
                .iter()
                .enumerate()
                .map(|(node, &rank)| RankRecord {
                    node: node + 1,
                    rank,
                })
                .collect();
            write_json(&mut out, &records)?;
        }
    }
    Ok(())
}

/// Renders a degree-frequency table.
///
/// In `Log2` mode each line carries the inclusive degree range the bucket
/// covers.
///
/// # Errors
/// Propagates write and serialization failures.
pub fn render_histogram<W: Write>(
    mut out: W,
    table: &BTreeMap<usize, u64>,
    mode: BucketMode,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (&key, &count) in table {
                match mode {
                    BucketMode::Degree => writeln!(out, "degree {key}\t{count}")?,
                    BucketMode::Log2 => {
                        let (lo, hi) = bucket_range(key);
                        writeln!(out, "bucket {key} (degrees {lo}-{hi})\t{count}")?;
                    }
                }
            }
        }
        OutputFormat::Json => {
            let records: Vec<HistogramRecord> = table
                .iter()
                .map(|(&key, &count)| HistogramRecord { key, count })
                .collect();
            write_json(&mut out, &records)?;
        }
    }
    Ok(())
}

/// Writes a rank report to a file on disk.
///
/// # Errors
/// `Io` with the offending path on any failure.
pub fn write_ranks_file(path: &Path, solution: &Solution, format: OutputFormat) -> Result<()> {
    let file = File::create(path).map_err(|e| DimrankError::io(e, path))?;
    let mut out = BufWriter::new(file);
    render_ranks(&mut out, solution, format).map_err(|e| with_path(e, path))?;
    out.flush().map_err(|e| DimrankError::io(e, path))
}

/// Writes a histogram report to a file on disk.
///
/// # Errors
/// `Io` with the offending path on any failure.
pub fn write_histogram_file(
    path: &Path,
    table: &BTreeMap<usize, u64>,
    mode: BucketMode,
    format: OutputFormat,
) -> Result<()> {
    let file = File::create(path).map_err(|e| DimrankError::io(e, path))?;
    let mut out = BufWriter::new(file);
    render_histogram(&mut out, table, mode, format).map_err(|e| with_path(e, path))?;
    out.flush().map_err(|e| DimrankError::io(e, path))
}

/// Prints the end-of-run summary line.
pub fn print_summary(solution: &Solution, nodes: usize, edges: usize) {
    if solution.converged {
        println!(
            "{} Ranked {nodes} nodes ({edges} edges) in {} rounds.",
            "OK".green().bold(),
            solution.rounds
        );
    } else {
        println!(
            "{} Rank iteration stopped at the {}-round bound without converging.",
            "~".yellow().bold(),
            solution.rounds
        );
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

fn with_path(err: DimrankError, path: &Path) -> DimrankError {
    match err {
        DimrankError::Io { source, .. } => DimrankError::io(source, path),
        other => other,
    }
}
