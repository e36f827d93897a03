use crate::{
    SimulationError,
    demand::{DemandModel, GapPenalty, Price},
    error::Quantity,
};
use pgs_core::models::{DiscountGrid, PayoffGrid, SimulationParameters};

/// Evaluates both players' profits for every pair of discounts.
///
/// The brand's list price is the wholesale price and the private label's is
/// the wholesale price scaled by the base factor. Only the brand's demand is
/// subject to the gap penalty, and both players share the same unit cost.
///
/// The build is all-or-nothing: the first cell whose demand or profit is not
/// finite aborts it with [`SimulationError::Degenerate`].
pub fn build_grid(
    params: &SimulationParameters,
    barilla_grid: DiscountGrid,
    pl_grid: DiscountGrid,
) -> Result<PayoffGrid, SimulationError> {
    let rows = pl_grid.len();
    let cols = barilla_grid.len();

    let model = DemandModel::from(params);
    let penalty = GapPenalty::from(params);
    let min_price = params.min_price();
    let cogs = params.cogs();
    let barilla_base = params.barilla_base_price();
    let pl_base = params.private_label_base_price();

    let mut barilla_profit = vec![0.0; rows * cols];
    let mut pl_profit = vec![0.0; rows * cols];

    for (col, &barilla_discount) in barilla_grid.iter().enumerate() {
        for (row, &pl_discount) in pl_grid.iter().enumerate() {
            let check = |quantity: Quantity, value: f64| {
                if value.is_finite() {
                    Ok(value)
                } else {
                    Err(SimulationError::Degenerate {
                        barilla_discount,
                        pl_discount,
                        quantity,
                        value,
                    })
                }
            };

            let barilla = Price::discounted(barilla_base, barilla_discount, min_price);
            let pl = Price::discounted(pl_base, pl_discount, min_price);

            let barilla_demand = check(
                Quantity::BarillaDemand,
                model.demand(barilla, pl, Some(penalty)),
            )?;
            let pl_demand = check(Quantity::PrivateLabelDemand, model.demand(pl, barilla, None))?;

            let offset = row * cols + col;
            barilla_profit[offset] = check(
                Quantity::BarillaProfit,
                (barilla.price - cogs) * barilla_demand,
            )?;
            pl_profit[offset] = check(Quantity::PrivateLabelProfit, (pl.price - cogs) * pl_demand)?;
        }
    }

    Ok(PayoffGrid::new(
        barilla_grid,
        pl_grid,
        barilla_profit,
        pl_profit,
    )?)
}
