use crate::{AppConfig, OutputArgs, Overrides, ScenarioArgs};
use clap::{Args, Subcommand, ValueEnum};
use std::io::Write as _;

mod export;
mod presets;
mod simulate;
mod solve;

pub use export::export;
pub use presets::list_presets;
pub use simulate::{simulate, write_reports};
pub use solve::solve;

#[derive(Subcommand)]
pub enum Commands {
    /// List the configured categories with their defaults and ranges
    Presets {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Run the pricing game for one category, or for all of them
    Simulate {
        #[command(flatten)]
        selection: Selection,

        #[command(flatten)]
        overrides: Overrides,

        #[command(flatten)]
        output: OutputArgs,

        /// How to write the report
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Write every cell of a category's payoff table as CSV
    Export {
        /// The category to export (defaults to the first configured)
        #[arg(short, long)]
        category: Option<String>,

        #[command(flatten)]
        overrides: Overrides,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Simulate a JSON scenario and report the result as JSON
    Solve {
        #[command(flatten)]
        io: ScenarioArgs,
    },
}

impl Commands {
    pub async fn run(self, config: &AppConfig) -> anyhow::Result<()> {
        match self {
            Commands::Presets { output } => {
                let mut output = output.write()?;
                list_presets(config, &mut output)?;
                output.flush()?;
            }
            Commands::Simulate {
                selection,
                overrides,
                output,
                format,
            } => {
                let keys = selection.keys(config)?;
                let reports = simulate(config, keys, &overrides).await?;
                let mut output = output.write()?;
                write_reports(&reports, format, &mut output)?;
                output.flush()?;
            }
            Commands::Export {
                category,
                overrides,
                output,
            } => {
                let key = match category {
                    Some(key) => key,
                    None => first_category(config)?,
                };
                let mut output = output.write()?;
                export(config, &key, &overrides, &mut output)?;
                output.flush()?;
            }
            Commands::Solve { io } => {
                let input = io.read()?;
                let report = solve(input)?;
                let mut output = io.write()?;
                serde_json::to_writer_pretty(&mut output, &report)?;
                writeln!(output)?;
                output.flush()?;
            }
        }

        Ok(())
    }
}

/// Which categories to simulate
#[derive(Args, Debug, Default)]
#[group(multiple = false)]
pub struct Selection {
    /// The category to simulate (defaults to the first configured)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Simulate every configured category
    #[arg(long)]
    pub all: bool,
}

impl Selection {
    /// The preset keys to simulate, in configuration order
    pub fn keys(&self, config: &AppConfig) -> anyhow::Result<Vec<String>> {
        if self.all {
            Ok(config.presets.keys().cloned().collect())
        } else if let Some(key) = &self.category {
            Ok(vec![key.clone()])
        } else {
            Ok(vec![first_category(config)?])
        }
    }
}

fn first_category(config: &AppConfig) -> anyhow::Result<String> {
    config
        .presets
        .first_key()
        .map(str::to_owned)
        .ok_or(CliError::NoCategories.into())
}

/// The report formats `simulate` can write
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// The headline figures and equilibria as plain text
    Text,
    /// The full report as JSON
    Json,
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("No categories are configured")]
    NoCategories,
}
