#![warn(missing_docs)]
//! The algorithms behind the promotional pricing game.
//!
//! A [`SimulationParameters`] and two [`DiscountGrid`]s go in; the full
//! payoff table, both best-response maps and the pure-strategy Nash
//! equilibria come out. Everything here is synchronous and free of side
//! effects other than `tracing` events.

use pgs_core::models::{DiscountGrid, Player, SimulationParameters, SimulationResult};
use tracing::{Level, event, span};

/// The constant-elasticity demand curve and its gap penalty
pub mod demand;

mod error;
pub use error::{Quantity, SimulationError};

mod payoff;
pub use payoff::build_grid;

mod nash;
pub use nash::{best_response, find_nash, intersect};

/// Delimited-text export of a payoff table
pub mod export;

/// JSON scenario files, for driving the simulator from disk
#[cfg(feature = "io")]
pub mod io;

/// Runs one simulation: builds the payoff table, derives both players' best
/// responses and intersects them.
///
/// An empty Nash set is a legitimate outcome and is returned as such.
pub fn simulate(
    params: &SimulationParameters,
    barilla_grid: DiscountGrid,
    pl_grid: DiscountGrid,
) -> Result<SimulationResult, SimulationError> {
    let span = span!(
        Level::DEBUG,
        "simulate",
        barilla = barilla_grid.len(),
        pl = pl_grid.len()
    );
    let _guard = span.enter();

    let grid = build_grid(params, barilla_grid, pl_grid)?;
    event!(Level::DEBUG, cells = grid.len(), "payoff grid built");

    let barilla_best_response = best_response(&grid, Player::Barilla);
    let pl_best_response = best_response(&grid, Player::PrivateLabel);
    let nash_points = intersect(&grid, &barilla_best_response, &pl_best_response);

    event!(Level::DEBUG, equilibria = nash_points.len());
    if nash_points.is_empty() {
        event!(Level::INFO, "no pure-strategy Nash equilibrium on this grid");
    }

    Ok(SimulationResult {
        grid,
        barilla_best_response,
        pl_best_response,
        nash_points,
    })
}
