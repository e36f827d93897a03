use crate::Report;
use pgs_solver::io::Scenario;
use std::io::Read;

/// Reads a JSON scenario and simulates it
pub fn solve(input: impl Read) -> anyhow::Result<Report> {
    let scenario = serde_json::from_reader::<_, Scenario>(input)?;
    Ok(Report::from_scenario(scenario)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labelled_scenario() {
        let input = r#"{
            "label": "Sauces",
            "parameters": {
                "base_demand": 10000,
                "wholesale_price": 1.80,
                "cogs": 0.80,
                "own_elasticity": -1.8,
                "cross_elasticity": 0.8
            },
            "barilla_grid": [0.0, 0.05, 0.1],
            "pl_grid": [0.0, 0.05, 0.1]
        }"#;
        let report = solve(input.as_bytes()).unwrap();
        assert_eq!(report.label.as_deref(), Some("Sauces"));
        assert_eq!(report.parameters.gap_threshold, 1.05);
        assert_eq!(report.barilla_best_response.len(), 3);
        assert_eq!(report.nash_points.len(), 1);
    }

    #[test]
    fn invalid_grid() {
        let input = r#"{
            "parameters": {
                "base_demand": 10000,
                "wholesale_price": 1.80,
                "cogs": 0.80,
                "own_elasticity": -1.8,
                "cross_elasticity": 0.8
            },
            "barilla_grid": [0.0, -0.05],
            "pl_grid": [0.0]
        }"#;
        let err = solve(input.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Barilla"));
    }
}
