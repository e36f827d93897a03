use pgs_core::models::{
    BestResponse, BestResponseMap, DiscountGrid, NashPoint, NashSet, PayoffGrid, Player,
};

/// Tolerance used for single-discount grids, which have no step to halve
const SINGLE_POINT_TOLERANCE: f64 = 1e-9;

/// Derives `player`'s best response to every discount of its opponent.
///
/// For the brand this scans each private label row for the most profitable
/// column; for the private label, each brand column for the most profitable
/// row. Ties go to the lowest discount.
pub fn best_response(grid: &PayoffGrid, player: Player) -> BestResponseMap {
    let plane = grid.plane(player);
    let own = grid.discounts(player);
    let responses = grid
        .discounts(player.opponent())
        .iter()
        .enumerate()
        .map(|(position, &given)| {
            let index = match player {
                Player::Barilla => plane.row_argmax(position),
                Player::PrivateLabel => plane.column_argmax(position),
            };
            BestResponse {
                given,
                response: own[index],
                response_index: index,
            }
        })
        .collect();
    BestResponseMap::new(player, responses)
}

/// Intersects the two best-response maps of `grid`.
///
/// Walking the private label's discounts `d` in ascending order, the pair
/// `(d, b)` is an equilibrium when `b` is the brand's response to `d` and `d`
/// is, in turn, the private label's response to `b`. Discounts are compared
/// within half of the relevant grid's smallest step.
pub fn intersect(
    grid: &PayoffGrid,
    barilla: &BestResponseMap,
    pl: &BestResponseMap,
) -> NashSet {
    let pl_tolerance = tolerance(grid.pl_discounts());
    let barilla_tolerance = tolerance(grid.barilla_discounts());

    barilla
        .iter()
        .filter_map(|candidate| {
            let reply = pl.lookup(candidate.response, barilla_tolerance)?;
            if (candidate.given - reply.response).abs() > pl_tolerance {
                return None;
            }
            let row = grid.pl_discounts().position(candidate.given, pl_tolerance)?;
            let cell = grid.cell(row, candidate.response_index)?;
            Some(NashPoint {
                pl_discount: cell.pl_discount,
                barilla_discount: cell.barilla_discount,
                barilla_profit: cell.barilla_profit,
                pl_profit: cell.pl_profit,
            })
        })
        .collect()
}

/// Finds every pure-strategy Nash equilibrium of `grid`
pub fn find_nash(grid: &PayoffGrid) -> NashSet {
    let barilla = best_response(grid, Player::Barilla);
    let pl = best_response(grid, Player::PrivateLabel);
    intersect(grid, &barilla, &pl)
}

fn tolerance(grid: &DiscountGrid) -> f64 {
    grid.min_step()
        .map_or(SINGLE_POINT_TOLERANCE, |step| step / 2.0)
}
