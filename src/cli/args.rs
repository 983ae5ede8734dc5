// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::report::OutputFormat;

#[derive(Parser)]
#[command(name = "dimrank", version, about = "DIMACS graph analytics: PageRank and degree histograms")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// DIMACS input for the default full pipeline
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
    /// Directory the full pipeline writes its output files into
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
    /// Enable verbose progress output
    #[arg(long, short)]
    pub verbose: bool,
}

/// Arguments for the `rank` subcommand (used by handlers).
#[derive(Debug, Clone, Default)]
pub struct RankArgs {
    pub file: PathBuf,
    pub damping: Option<f64>,
    pub epsilon: Option<f64>,
    pub max_rounds: Option<usize>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

/// Arguments for the `histogram` subcommand (used by handlers).
#[derive(Debug, Clone, Default)]
pub struct HistogramArgs {
    pub file: PathBuf,
    pub log_buckets: bool,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

/// Arguments for the `convert` subcommand (used by handlers).
#[derive(Debug, Clone, Default)]
pub struct ConvertArgs {
    pub file: PathBuf,
    pub output: Option<PathBuf>,
    pub labels: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the stationary PageRank distribution
    Rank {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Damping factor, in (0, 1)
        #[arg(long)]
        damping: Option<f64>,
        /// Convergence threshold on the max per-node change
        #[arg(long)]
        epsilon: Option<f64>,
        /// Safety bound on the round count
        #[arg(long)]
        max_rounds: Option<usize>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Write to this file instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Tally the out-degree distribution
    Histogram {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Group degrees into power-of-two buckets
        #[arg(long)]
        log_buckets: bool,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Write to this file instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Decode the graph and re-encode it in DIMACS form
    Convert {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Write to this file instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Also write the node-number/label table to this file
        #[arg(long, value_name = "FILE")]
        labels: Option<PathBuf>,
    },
}
