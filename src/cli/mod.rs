// src/cli/mod.rs
//! Command handlers: each decodes the input, runs one stage (or all of
//! them), and routes the result to a file or stdout.

pub mod args;

pub use args::{Cli, Commands, ConvertArgs, HistogramArgs, RankArgs};

use std::fs;
use std::io::Write;
use std::path::Path;

use colored::Colorize;

use crate::config::Config;
use crate::error::{DimrankError, Result};
use crate::graph::{dimacs, CsrGraph};
use crate::histogram::{self, BucketMode};
use crate::rank::RankSolver;
use crate::report::{self, OutputFormat};

/// Runs the whole pipeline on one input: re-encode + labels + rank +
/// histogram, all written into the output directory.
///
/// # Errors
/// Fails fast on the first I/O, decode, or parameter error.
pub fn run_pipeline(input: &Path, config: &Config) -> Result<()> {
    println!("Loading graph from: {}", input.display());
    let graph = dimacs::read_file(input)?.into_csr()?;
    if config.verbose {
        println!("  {} nodes, {} edges", graph.num_nodes(), graph.num_edges());
    }

    let out_dir = &config.output.dir;
    fs::create_dir_all(out_dir).map_err(|e| DimrankError::io(e, out_dir))?;

    dimacs::write_file(&graph, &out_dir.join("graph.dimacs"))?;
    dimacs::write_labels_file(&graph, &out_dir.join("node_labels.txt"))?;

    let solver = solver_for(config, None, None, None);
    let solution = solver.solve(&graph)?;
    let ext = extension(config.output.format);
    report::write_ranks_file(
        &out_dir.join(format!("pagerank.{ext}")),
        &solution,
        config.output.format,
    )?;

    let mode = bucket_mode(config.histogram.log_buckets);
    let table = histogram::out_degree_histogram(&graph, mode);
    report::write_histogram_file(
        &out_dir.join(format!("out_degree_histogram.{ext}")),
        &table,
        mode,
        config.output.format,
    )?;

    report::print_summary(&solution, graph.num_nodes(), graph.num_edges());
    Ok(())
}

/// Computes and reports the rank distribution for one input.
///
/// # Errors
/// Fails fast on the first I/O, decode, or parameter error.
pub fn handle_rank(args: &RankArgs, config: &Config) -> Result<()> {
    let graph = load(&args.file)?;
    let solver = solver_for(config, args.damping, args.epsilon, args.max_rounds);
    let solution = solver.solve(&graph)?;
    let format = args.format.unwrap_or(config.output.format);

    match &args.output {
        Some(path) => {
            report::write_ranks_file(path, &solution, format)?;
            report::print_summary(&solution, graph.num_nodes(), graph.num_edges());
        }
        None => {
            report::render_ranks(std::io::stdout().lock(), &solution, format)?;
            if !solution.converged {
                eprintln!(
                    "{} stopped at the {}-round bound without converging",
                    "~".yellow().bold(),
                    solution.rounds
                );
            }
        }
    }
    Ok(())
}

/// Tallies and reports the out-degree distribution for one input.
///
/// # Errors
/// Fails fast on the first I/O or decode error.
pub fn handle_histogram(args: &HistogramArgs, config: &Config) -> Result<()> {
    let graph = load(&args.file)?;
    let mode = bucket_mode(args.log_buckets || config.histogram.log_buckets);
    let table = histogram::out_degree_histogram(&graph, mode);
    let format = args.format.unwrap_or(config.output.format);

    match &args.output {
        Some(path) => {
            report::write_histogram_file(path, &table, mode, format)?;
            println!("{} Wrote {}", "OK".green().bold(), path.display());
        }
        None => report::render_histogram(std::io::stdout().lock(), &table, mode, format)?,
    }
    Ok(())
}

/// Decodes one input and re-encodes it in DIMACS form (plus the optional
/// label table).
///
/// # Errors
/// Fails fast on the first I/O or decode error.
pub fn handle_convert(args: &ConvertArgs, config: &Config) -> Result<()> {
    let graph = load(&args.file)?;

    match &args.output {
        Some(path) => {
            dimacs::write_file(&graph, path)?;
            if config.verbose {
                println!("{} Wrote {}", "OK".green().bold(), path.display());
            }
        }
        None => {
            let mut out = std::io::stdout().lock();
            dimacs::encode(&graph, &mut out)?;
            out.flush()?;
        }
    }

    if let Some(labels) = &args.labels {
        dimacs::write_labels_file(&graph, labels)?;
    }
    Ok(())
}

fn load(path: &Path) -> Result<CsrGraph> {
    dimacs::read_file(path)?.into_csr()
}

fn solver_for(
    config: &Config,
    damping: Option<f64>,
    epsilon: Option<f64>,
    max_rounds: Option<usize>,
) -> RankSolver {
    RankSolver {
        damping: damping.unwrap_or(config.rank.damping),
        epsilon: epsilon.unwrap_or(config.rank.epsilon),
        max_rounds: max_rounds.unwrap_or(config.rank.max_rounds),
    }
}

fn bucket_mode(log_buckets: bool) -> BucketMode {
    if log_buckets {
        BucketMode::Log2
    } else {
        BucketMode::Degree
    }
}

fn extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
    }
}
