// src/config/types.rs
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::report::OutputFormat;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankConfig {
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    #[serde(default = "default_max_rounds")]
    pub max_rounds: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            epsilon: default_epsilon(),
            max_rounds: default_max_rounds(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HistogramConfig {
    /// Group degrees into power-of-two buckets instead of exact counts.
    #[serde(default)]
    pub log_buckets: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_out_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            dir: default_out_dir(),
        }
    }
}

/// On-disk layout of `dimrank.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DimrankToml {
    #[serde(default)]
    pub rank: RankConfig,
    #[serde(default)]
    pub histogram: HistogramConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub rank: RankConfig,
    pub histogram: HistogramConfig,
    pub output: OutputConfig,
    pub verbose: bool,
}

const fn default_damping() -> f64 { 0.85 }
const fn default_epsilon() -> f64 { 1e-4 }
const fn default_max_rounds() -> usize { 1000 }
fn default_out_dir() -> PathBuf { PathBuf::from(".") }
