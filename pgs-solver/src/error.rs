use pgs_core::models::PayoffGridError;
use std::fmt;

/// A per-cell quantity that can degenerate during the grid build
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quantity {
    /// The brand's demand
    BarillaDemand,
    /// The private label's demand
    PrivateLabelDemand,
    /// The brand's profit
    BarillaProfit,
    /// The private label's profit
    PrivateLabelProfit,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BarillaDemand => "Barilla demand",
            Self::PrivateLabelDemand => "Private Label demand",
            Self::BarillaProfit => "Barilla profit",
            Self::PrivateLabelProfit => "Private Label profit",
        })
    }
}

/// The ways in which a simulation run can fail.
///
/// Invalid parameters and grids are rejected when the inputs are validated,
/// so by the time a simulation runs the only failure left is a computation
/// that overflows or otherwise leaves the finite reals.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// A cell produced a NaN or infinite value
    #[error(
        "{quantity} is not finite (value {value}) at Barilla discount {barilla_discount}, private label discount {pl_discount}"
    )]
    Degenerate {
        /// The column's discount
        barilla_discount: f64,
        /// The row's discount
        pl_discount: f64,
        /// Which quantity degenerated
        quantity: Quantity,
        /// The offending value
        value: f64,
    },
    /// The assembled table was rejected
    #[error(transparent)]
    Grid(#[from] PayoffGridError),
}
