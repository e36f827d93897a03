#![warn(missing_docs)]
//! Core models for the promotional pricing game.
//!
//! A branded manufacturer ("Barilla") and a private label each choose a trade
//! discount from a discrete grid. This crate holds the validated inputs of that
//! game and the artifacts derived from it: the dense payoff grid, each player's
//! best-response map, and the set of pure-strategy Nash equilibria. The
//! computations themselves live in `pgs-solver`.

/// Core domain models for the pricing game.
///
/// Every type here is either validated on construction (parameters, discount
/// grids, payoff grids) or derived from validated data (best responses, Nash
/// points). Once built, none of them can be mutated, so a single simulation
/// run is a pure function of its inputs.
pub mod models;
