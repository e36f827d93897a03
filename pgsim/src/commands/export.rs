use crate::{AppConfig, Overrides};
use pgs_solver::{build_grid, export::export_csv};
use std::io::Write;
use tracing::{Level, event};

/// Builds the payoff table for one category and writes every cell as CSV
pub fn export(
    config: &AppConfig,
    key: &str,
    overrides: &Overrides,
    buffer: &mut impl Write,
) -> anyhow::Result<()> {
    let preset = config.preset(key)?;
    let scenario = preset.scenario(&config.model, overrides)?.prepare()?;
    let grid = build_grid(&scenario.parameters, scenario.barilla_grid, scenario.pl_grid)?;
    event!(Level::DEBUG, category = key, cells = grid.len(), "exporting");
    export_csv(&preset.label, &grid, buffer)?;
    Ok(())
}
