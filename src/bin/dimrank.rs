// src/bin/dimrank.rs
use clap::Parser;
use colored::Colorize;

use dimrank_core::cli::{self, Cli, Commands, ConvertArgs, HistogramArgs, RankArgs};
use dimrank_core::config::Config;
use dimrank_core::error::{DimrankError, Result};
use dimrank_core::exit::DimrankExit;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        DimrankExit::from_error(&e).exit();
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load();
    config.verbose = cli.verbose;
    if let Some(dir) = &cli.out_dir {
        config.output.dir.clone_from(dir);
    }
    dispatch(&cli, &config)
}

fn dispatch(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        Some(cmd) => dispatch_command(cmd, config),
        None => {
            let Some(input) = &cli.input else {
                return Err(DimrankError::InvalidParameter(
                    "no input file given (see --help)".into(),
                ));
            };
            cli::run_pipeline(input, config)
        }
    }
}

fn dispatch_command(cmd: &Commands, config: &Config) -> Result<()> {
    match cmd {
        Commands::Rank {
            file,
            damping,
            epsilon,
            max_rounds,
            format,
            output,
        } => cli::handle_rank(
            &RankArgs {
                file: file.clone(),
                damping: *damping,
                epsilon: *epsilon,
                max_rounds: *max_rounds,
                format: *format,
                output: output.clone(),
            },
            config,
        ),
        Commands::Histogram {
            file,
            log_buckets,
            format,
            output,
        } => cli::handle_histogram(
            &HistogramArgs {
                file: file.clone(),
                log_buckets: *log_buckets,
                format: *format,
                output: output.clone(),
            },
            config,
        ),
        Commands::Convert {
            file,
            output,
            labels,
        } => cli::handle_convert(
            &ConvertArgs {
                file: file.clone(),
                output: output.clone(),
                labels: labels.clone(),
            },
            config,
        ),
    }
}
