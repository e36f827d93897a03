use crate::config::ModelConfig;
use clap::Args;
use pgs_core::models::{DiscountGrid, GridError, RawParameters};
use pgs_solver::io::Scenario;
use serde::{Deserialize, Serialize};

/// Discounts are quoted in cents, so generated grids are rounded to two places
const DISCOUNT_DECIMALS: u32 = 2;

/// The bounds, default and granularity of one tunable input
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    /// The smallest accepted value
    pub min: f64,
    /// The largest accepted value
    pub max: f64,
    /// The value used when none is given
    pub default: f64,
    /// The suggested increment
    pub step: f64,
}

impl SliderRange {
    const fn new(min: f64, max: f64, default: f64, step: f64) -> Self {
        Self {
            min,
            max,
            default,
            step,
        }
    }

    /// The override if present and in range, otherwise the default
    pub fn resolve(&self, name: &'static str, value: Option<f64>) -> Result<f64, PresetError> {
        match value {
            None => Ok(self.default),
            Some(value) if value >= self.min && value <= self.max => Ok(value),
            Some(value) => Err(PresetError::OutOfRange {
                name,
                value,
                min: self.min,
                max: self.max,
            }),
        }
    }
}

/// A half-open range of discounts, `start` inclusive and `stop` exclusive
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscountRange {
    /// The first discount
    pub start: f64,
    /// The bound no discount reaches
    pub stop: f64,
    /// The distance between neighbouring discounts
    pub step: f64,
}

impl DiscountRange {
    /// Expands the range into a grid rounded to whole cents
    pub fn grid(&self) -> Result<DiscountGrid, GridError> {
        DiscountGrid::stepped(self.start, self.stop, self.step)?.rounded(DISCOUNT_DECIMALS)
    }
}

/// The market assumptions and discount range for one product category
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryPreset {
    /// The name shown in reports and exports
    pub label: String,
    /// Units sold at list prices
    pub base_demand: SliderRange,
    /// The brand's wholesale price (€ per pack)
    pub wholesale_price: SliderRange,
    /// Unit cost of goods sold (€ per pack)
    pub cogs: SliderRange,
    /// Own-price elasticity
    pub own_elasticity: SliderRange,
    /// Cross-price elasticity
    pub cross_elasticity: SliderRange,
    /// The discounts both players may choose from
    pub discounts: DiscountRange,
}

impl CategoryPreset {
    /// High volume, more elastic, deeper promo room
    pub fn pasta_core() -> Self {
        Self {
            label: "Pasta (Core)".to_owned(),
            base_demand: SliderRange::new(5000.0, 40000.0, 18000.0, 1000.0),
            wholesale_price: SliderRange::new(0.80, 2.20, 1.20, 0.05),
            cogs: SliderRange::new(0.35, 1.10, 0.55, 0.05),
            own_elasticity: SliderRange::new(-3.0, -0.9, -2.2, 0.1),
            cross_elasticity: SliderRange::new(0.2, 2.0, 0.9, 0.1),
            discounts: DiscountRange {
                start: 0.0,
                stop: 0.80,
                step: 0.05,
            },
        }
    }

    /// Lower volume, less elastic, shallower promos
    pub fn pasta_premium() -> Self {
        Self {
            label: "Pasta (Premium)".to_owned(),
            base_demand: SliderRange::new(1500.0, 15000.0, 6000.0, 500.0),
            wholesale_price: SliderRange::new(1.20, 3.20, 2.10, 0.05),
            cogs: SliderRange::new(0.60, 2.20, 1.10, 0.05),
            own_elasticity: SliderRange::new(-2.0, -0.6, -1.3, 0.1),
            cross_elasticity: SliderRange::new(0.1, 1.5, 0.6, 0.1),
            discounts: DiscountRange {
                start: 0.0,
                stop: 0.60,
                step: 0.05,
            },
        }
    }

    /// Mid elasticity, sometimes deeper promos than premium pasta
    pub fn sauces() -> Self {
        Self {
            label: "Sauces".to_owned(),
            base_demand: SliderRange::new(3000.0, 25000.0, 10000.0, 500.0),
            wholesale_price: SliderRange::new(1.00, 3.50, 1.80, 0.05),
            cogs: SliderRange::new(0.50, 1.80, 0.80, 0.05),
            own_elasticity: SliderRange::new(-2.6, -0.8, -1.8, 0.1),
            cross_elasticity: SliderRange::new(0.2, 2.0, 0.8, 0.1),
            discounts: DiscountRange {
                start: 0.0,
                stop: 0.90,
                step: 0.05,
            },
        }
    }

    /// Combines the preset's defaults, any overrides and the shared model constants
    pub fn parameters(
        &self,
        model: &ModelConfig,
        overrides: &Overrides,
    ) -> Result<RawParameters, PresetError> {
        Ok(RawParameters {
            base_demand: self
                .base_demand
                .resolve("base_demand", overrides.base_demand)?,
            wholesale_price: self
                .wholesale_price
                .resolve("wholesale_price", overrides.wholesale_price)?,
            cogs: self.cogs.resolve("cogs", overrides.cogs)?,
            own_elasticity: self
                .own_elasticity
                .resolve("own_elasticity", overrides.own_elasticity)?,
            cross_elasticity: self
                .cross_elasticity
                .resolve("cross_elasticity", overrides.cross_elasticity)?,
            private_label_base_factor: model.private_label_base_factor,
            gap_threshold: model.gap_threshold,
            penalty_factor: model.penalty_factor,
            min_price: model.min_price,
        })
    }

    /// The scenario this preset describes, with both players on the same grid
    pub fn scenario(
        &self,
        model: &ModelConfig,
        overrides: &Overrides,
    ) -> Result<Scenario, PresetError> {
        let grid = self.discounts.grid()?.into_inner();
        Ok(Scenario {
            label: Some(self.label.clone()),
            parameters: self.parameters(model, overrides)?,
            barilla_grid: grid.clone(),
            pl_grid: grid,
        })
    }
}

/// Values that replace a preset's defaults for a single run
#[derive(Args, Clone, Debug, Default)]
pub struct Overrides {
    /// Base demand in units
    #[arg(long)]
    pub base_demand: Option<f64>,

    /// Barilla wholesale price (€)
    #[arg(long)]
    pub wholesale_price: Option<f64>,

    /// Barilla COGS (€)
    #[arg(long)]
    pub cogs: Option<f64>,

    /// Own price elasticity
    #[arg(long, allow_negative_numbers = true)]
    pub own_elasticity: Option<f64>,

    /// Cross price elasticity
    #[arg(long)]
    pub cross_elasticity: Option<f64>,
}

/// The ways in which a preset can fail to produce a scenario
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum PresetError {
    /// No preset is configured under the requested key
    #[error("unknown category {0:?}")]
    UnknownCategory(String),
    /// An override lies outside the preset's range
    #[error("{name} = {value} is outside the range [{min}, {max}]")]
    OutOfRange {
        /// The input being overridden
        name: &'static str,
        /// The rejected value
        value: f64,
        /// The preset's lower bound
        min: f64,
        /// The preset's upper bound
        max: f64,
    },
    /// The discount range does not describe a valid grid
    #[error("invalid discount range: {0}")]
    Grid(#[from] GridError),
}
