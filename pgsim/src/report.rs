use pgs_core::models::{
    BestResponseMap, NashSet, PayoffCell, PayoffGrid, Player, RawParameters, SimulationResult,
};
use pgs_solver::io::{Scenario, ScenarioError};
use serde::Serialize;
use std::io::Write;
use tracing::{Level, event};

/// Headline figures for one simulation, mirroring the KPIs a category manager
/// looks at first
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Summary {
    /// The cell where the brand earns the most
    pub max_barilla_profit: PayoffCell,
    /// The brand discount with the highest mean profit across private label discounts
    pub recommended_barilla_discount: f64,
    /// That mean profit
    pub recommended_mean_profit: f64,
}

impl Summary {
    /// Reduces a payoff grid to its headline figures.
    ///
    /// Ties go to the first cell in export order, and to the lowest discount
    /// for the recommendation.
    pub fn of(grid: &PayoffGrid) -> Option<Self> {
        let max_barilla_profit = grid.cells().reduce(|best, cell| {
            if cell.barilla_profit > best.barilla_profit {
                cell
            } else {
                best
            }
        })?;

        let means = grid.plane(Player::Barilla).column_means();
        let (index, recommended_mean_profit) =
            means
                .into_iter()
                .enumerate()
                .reduce(|best, next| if next.1 > best.1 { next } else { best })?;

        Some(Self {
            max_barilla_profit,
            recommended_barilla_discount: grid.barilla_discounts()[index],
            recommended_mean_profit,
        })
    }
}

/// Everything reported about one category's simulation
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    /// The category, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// The inputs the simulation ran with
    pub parameters: RawParameters,
    /// Headline figures
    pub summary: Option<Summary>,
    /// The brand's reply to each private label discount
    pub barilla_best_response: BestResponseMap,
    /// The private label's reply to each brand discount
    pub pl_best_response: BestResponseMap,
    /// Mutually optimal discount pairs
    pub nash_points: NashSet,
}

impl Report {
    /// Summarises a finished simulation
    pub fn new(label: Option<String>, parameters: RawParameters, result: SimulationResult) -> Self {
        Self {
            label,
            parameters,
            summary: Summary::of(&result.grid),
            barilla_best_response: result.barilla_best_response,
            pl_best_response: result.pl_best_response,
            nash_points: result.nash_points,
        }
    }

    /// Validates and simulates a scenario, then summarises it
    pub fn from_scenario(scenario: Scenario) -> Result<Self, ScenarioError> {
        let prepared = scenario.prepare()?;
        let label = prepared.label.clone();
        let parameters = RawParameters::from(prepared.parameters.clone());
        let result = prepared.solve()?;
        event!(
            Level::INFO,
            category = label.as_deref().unwrap_or("unlabelled"),
            equilibria = result.nash_points.len(),
            "simulation finished"
        );
        Ok(Self::new(label, parameters, result))
    }

    /// Writes the report as human-readable text
    pub fn render(&self, buffer: &mut impl Write) -> Result<(), std::io::Error> {
        if let Some(label) = &self.label {
            writeln!(buffer, "{label}")?;
        }

        if let Some(summary) = &self.summary {
            writeln!(
                buffer,
                "Max Barilla Profit (€): {:.0}",
                summary.max_barilla_profit.barilla_profit
            )?;
            writeln!(
                buffer,
                "Recommended Barilla Discount (avg): €{:.2}",
                summary.recommended_barilla_discount
            )?;
        }

        writeln!(buffer)?;
        writeln!(buffer, "Nash Equilibrium (Profit-Based)")?;
        if self.nash_points.is_empty() {
            writeln!(
                buffer,
                "No pure-strategy Nash equilibrium found under current assumptions."
            )?;
        }
        for point in self.nash_points.iter() {
            writeln!(
                buffer,
                "Private Label Discount: €{:.2} | Barilla Discount: €{:.2} → Barilla Profit: €{:.0}",
                point.pl_discount, point.barilla_discount, point.barilla_profit
            )?;
        }

        Ok(())
    }
}
