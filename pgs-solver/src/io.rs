use crate::{SimulationError, simulate};
use pgs_core::models::{
    DiscountGrid, GridError, ParameterError, RawParameters, SimulationParameters, SimulationResult,
};
use serde::{Deserialize, Serialize};

/// A self-contained simulation request, intended for use with serde.
///
/// Nothing in a scenario is validated until it is prepared.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scenario {
    /// An optional display name, such as a category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// The market and cost assumptions
    pub parameters: RawParameters,
    /// The brand's allowed discounts
    pub barilla_grid: Vec<f64>,
    /// The private label's allowed discounts
    pub pl_grid: Vec<f64>,
}

/// A scenario whose inputs have passed validation
#[derive(Clone, Debug)]
pub struct PreparedScenario {
    /// The scenario's display name, if any
    pub label: Option<String>,
    /// The validated assumptions
    pub parameters: SimulationParameters,
    /// The brand's validated grid
    pub barilla_grid: DiscountGrid,
    /// The private label's validated grid
    pub pl_grid: DiscountGrid,
}

impl Scenario {
    /// Validate the scenario's parameters and both grids
    pub fn prepare(self) -> Result<PreparedScenario, ScenarioError> {
        let Self {
            label,
            parameters,
            barilla_grid,
            pl_grid,
        } = self;

        Ok(PreparedScenario {
            label,
            parameters: parameters.validate()?,
            barilla_grid: DiscountGrid::new(barilla_grid).map_err(ScenarioError::BarillaGrid)?,
            pl_grid: DiscountGrid::new(pl_grid).map_err(ScenarioError::PlGrid)?,
        })
    }

    /// Validate and simulate the scenario
    pub fn solve(self) -> Result<SimulationResult, ScenarioError> {
        Ok(self.prepare()?.solve()?)
    }
}

impl PreparedScenario {
    /// Simulate the scenario
    pub fn solve(self) -> Result<SimulationResult, SimulationError> {
        simulate(&self.parameters, self.barilla_grid, self.pl_grid)
    }
}

/// The ways in which a scenario can fail to produce a result
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    /// The parameters were rejected
    #[error("invalid parameters: {0}")]
    Parameters(#[from] ParameterError),
    /// The brand's grid was rejected
    #[error("invalid Barilla discount grid: {0}")]
    BarillaGrid(GridError),
    /// The private label's grid was rejected
    #[error("invalid private label discount grid: {0}")]
    PlGrid(GridError),
    /// The simulation itself failed
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(json: &str) -> Scenario {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn defaults_fill_in_model_constants() {
        let prepared = scenario(
            r#"{
                "parameters": {
                    "base_demand": 6000,
                    "wholesale_price": 2.10,
                    "cogs": 1.10,
                    "own_elasticity": -1.3,
                    "cross_elasticity": 0.6
                },
                "barilla_grid": [0.0, 0.05, 0.1],
                "pl_grid": [0.0, 0.05]
            }"#,
        )
        .prepare()
        .unwrap();

        assert_eq!(prepared.label, None);
        assert_eq!(prepared.parameters.gap_threshold(), 1.05);
        assert_eq!(prepared.parameters.penalty_factor(), 0.70);
        assert_eq!(prepared.barilla_grid.len(), 3);
        assert_eq!(prepared.pl_grid.len(), 2);
    }

    #[test]
    fn grid_errors_name_the_player() {
        let err = scenario(
            r#"{
                "label": "Sauces",
                "parameters": {
                    "base_demand": 10000,
                    "wholesale_price": 1.80,
                    "cogs": 0.80,
                    "own_elasticity": -1.8,
                    "cross_elasticity": 0.8
                },
                "barilla_grid": [0.0, 0.1],
                "pl_grid": [0.1, 0.1]
            }"#,
        )
        .prepare()
        .unwrap_err();

        assert!(matches!(
            err,
            ScenarioError::PlGrid(GridError::NonIncreasing { index: 1 })
        ));
    }

    #[test]
    fn parameter_errors_come_first() {
        let err = scenario(
            r#"{
                "parameters": {
                    "base_demand": 0,
                    "wholesale_price": 1.80,
                    "cogs": 0.80,
                    "own_elasticity": -1.8,
                    "cross_elasticity": 0.8
                },
                "barilla_grid": [],
                "pl_grid": []
            }"#,
        )
        .solve()
        .unwrap_err();

        assert!(matches!(err, ScenarioError::Parameters(_)));
    }
}
