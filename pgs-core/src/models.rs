mod equilibrium;
mod grid;
mod outcome;
mod parameters;
mod payoff;

pub use equilibrium::{BestResponse, BestResponseMap, NashPoint, NashSet};
pub use grid::{DiscountGrid, GridError};
pub use outcome::SimulationResult;
pub use parameters::{
    DEFAULT_GAP_THRESHOLD, DEFAULT_MIN_PRICE, DEFAULT_PENALTY_FACTOR,
    DEFAULT_PRIVATE_LABEL_BASE_FACTOR, ParameterError, RawParameters, SimulationParameters,
};
pub use payoff::{PayoffCell, PayoffGrid, PayoffGridError, Plane, Player};

#[cfg(feature = "serde")]
pub use payoff::PayoffGridDto;
