use approx::assert_abs_diff_eq;
use pgs_core::models::{BestResponseMap, NashPoint, SimulationResult};
use pgs_solver::io::Scenario;
use rstest::*;
use serde::Deserialize;
use std::{fs::File, io::BufReader, path::PathBuf};

/// The parts of a simulation we keep known-good copies of
#[derive(Deserialize)]
struct Reference {
    nash_points: Vec<NashPoint>,
    barilla_best_response: Vec<f64>,
    pl_best_response: Vec<f64>,
}

// For every (input.json, output.json) pair in `./samples/**`,
//   1. Read in the scenario,
//   2. Read in the known-good equilibria and best responses,
//   3. Simulate the scenario,
//   4. Compare the two.
// Discounts are grid values and must match exactly; profits are compared
// with an absolute tolerance.

#[rstest]
fn run_scenario(#[files("tests/samples/**/input.json")] input: PathBuf) {
    let mut output = input.clone();
    output.set_file_name("output.json");

    let scenario: Scenario =
        serde_json::from_reader(BufReader::new(File::open(input).unwrap())).unwrap();

    let reference: Reference =
        serde_json::from_reader(BufReader::new(File::open(output).unwrap())).unwrap();

    let result = scenario.solve().unwrap();

    cmp(&result, &reference, 1e-6);
}

fn responses(map: &BestResponseMap) -> Vec<f64> {
    map.iter().map(|entry| entry.response).collect()
}

fn cmp(a: &SimulationResult, b: &Reference, eps: f64) {
    assert_eq!(responses(&a.barilla_best_response), b.barilla_best_response);
    assert_eq!(responses(&a.pl_best_response), b.pl_best_response);

    assert_eq!(a.nash_points.len(), b.nash_points.len());
    for (p1, p2) in a.nash_points.iter().zip(b.nash_points.iter()) {
        assert_eq!(p1.pl_discount, p2.pl_discount);
        assert_eq!(p1.barilla_discount, p2.barilla_discount);
        assert_abs_diff_eq!(p1.barilla_profit, p2.barilla_profit, epsilon = eps);
        assert_abs_diff_eq!(p1.pl_profit, p2.pl_profit, epsilon = eps);
    }
}
