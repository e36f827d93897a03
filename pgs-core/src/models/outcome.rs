use super::{BestResponseMap, NashSet, PayoffGrid};

/// Everything derived from one simulation run
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    /// The full payoff table
    pub grid: PayoffGrid,
    /// The brand's best response to each private label discount
    pub barilla_best_response: BestResponseMap,
    /// The private label's best response to each brand discount
    pub pl_best_response: BestResponseMap,
    /// The mutually optimal discount pairs
    pub nash_points: NashSet,
}
