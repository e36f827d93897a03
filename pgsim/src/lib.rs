//! Simulates trade-promotion pricing between a brand and a private label.
//!
//! The binary wraps the `pgs-solver` crate with category presets, layered
//! configuration and a handful of subcommands for reporting and export.

use clap::Parser;
use std::path::PathBuf;

mod io;
pub use io::*;

mod catalog;
pub use catalog::Catalog;

mod config;
pub use config::{AppConfig, ModelConfig};

mod preset;
pub use preset::{CategoryPreset, DiscountRange, Overrides, PresetError, SliderRange};

mod report;
pub use report::{Report, Summary};

mod commands;
pub use commands::*;

// The top-level arguments: an optional config file and the subcommand to execute
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    /// Path to a TOML configuration file
    #[arg(long, env = "PGS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub async fn evaluate(self) -> anyhow::Result<()> {
        let config = AppConfig::load(self.config.as_deref())?;
        self.command.run(&config).await
    }
}
