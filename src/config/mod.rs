// src/config/mod.rs
pub mod types;

pub use self::types::{Config, DimrankToml, HistogramConfig, OutputConfig, RankConfig};

use colored::Colorize;
use std::fs;

pub const CONFIG_FILE: &str = "dimrank.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config and overlays `dimrank.toml` from the working
    /// directory when present.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::new();
        config.load_local_config();
        config
    }

    pub fn load_local_config(&mut self) {
        let Ok(content) = fs::read_to_string(CONFIG_FILE) else {
            return;
        };
        self.parse_toml(&content);
    }

    /// Overlays settings from TOML text. An unparsable file is reported and
    /// ignored rather than aborting the run.
    pub fn parse_toml(&mut self, content: &str) {
        match toml::from_str::<DimrankToml>(content) {
            Ok(parsed) => {
                self.rank = parsed.rank;
                self.histogram = parsed.histogram;
                self.output = parsed.output;
            }
            Err(e) => {
                eprintln!("{}", format!("ignoring {CONFIG_FILE}: {e}").dimmed());
            }
        }
    }
}
