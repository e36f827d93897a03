mod plane;
pub use plane::Plane;

use super::DiscountGrid;
use std::fmt;

/// One of the two competitors in the game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Player {
    /// The branded manufacturer
    Barilla,
    /// The private-label competitor
    PrivateLabel,
}

impl Player {
    /// The other player
    pub fn opponent(self) -> Self {
        match self {
            Self::Barilla => Self::PrivateLabel,
            Self::PrivateLabel => Self::Barilla,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Barilla => "Barilla",
            Self::PrivateLabel => "Private Label",
        })
    }
}

/// The payoffs for a single pair of discounts
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayoffCell {
    /// The brand's discount
    pub barilla_discount: f64,
    /// The private label's discount
    pub pl_discount: f64,
    /// The brand's profit
    pub barilla_profit: f64,
    /// The private label's profit
    pub pl_profit: f64,
}

/// The full payoff table of one simulation run.
///
/// The table is dense: rows are indexed by the private label's discount,
/// columns by the brand's discount, and each player has its own profit plane
/// stored row-major. Every profit is finite.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PayoffGridDto", into = "PayoffGridDto")
)]
pub struct PayoffGrid {
    barilla_discounts: DiscountGrid,
    pl_discounts: DiscountGrid,
    barilla_profit: Vec<f64>,
    pl_profit: Vec<f64>,
}

impl PayoffGrid {
    /// Assembles a grid from two row-major profit planes.
    ///
    /// Each plane must hold exactly `pl_discounts.len() * barilla_discounts.len()`
    /// finite values, where entry `row * barilla_discounts.len() + col` is the
    /// profit at `(pl_discounts[row], barilla_discounts[col])`.
    pub fn new(
        barilla_discounts: DiscountGrid,
        pl_discounts: DiscountGrid,
        barilla_profit: Vec<f64>,
        pl_profit: Vec<f64>,
    ) -> Result<Self, PayoffGridError> {
        let cols = barilla_discounts.len();
        let expected = pl_discounts.len() * cols;

        for (player, plane) in [
            (Player::Barilla, &barilla_profit),
            (Player::PrivateLabel, &pl_profit),
        ] {
            if plane.len() != expected {
                return Err(PayoffGridError::Shape {
                    player,
                    expected,
                    actual: plane.len(),
                });
            }

            if let Some(offset) = plane.iter().position(|value| !value.is_finite()) {
                return Err(PayoffGridError::NonFinite {
                    player,
                    barilla_discount: barilla_discounts[offset % cols],
                    pl_discount: pl_discounts[offset / cols],
                });
            }
        }

        Ok(Self {
            barilla_discounts,
            pl_discounts,
            barilla_profit,
            pl_profit,
        })
    }

    /// The brand's discounts, one per column
    pub fn barilla_discounts(&self) -> &DiscountGrid {
        &self.barilla_discounts
    }

    /// The private label's discounts, one per row
    pub fn pl_discounts(&self) -> &DiscountGrid {
        &self.pl_discounts
    }

    /// The discounts `player` chooses from
    pub fn discounts(&self, player: Player) -> &DiscountGrid {
        match player {
            Player::Barilla => &self.barilla_discounts,
            Player::PrivateLabel => &self.pl_discounts,
        }
    }

    /// Number of rows (private label discounts)
    pub fn rows(&self) -> usize {
        self.pl_discounts.len()
    }

    /// Number of columns (brand discounts)
    pub fn cols(&self) -> usize {
        self.barilla_discounts.len()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.barilla_profit.len()
    }

    /// A valid grid always has at least one cell
    pub fn is_empty(&self) -> bool {
        self.barilla_profit.is_empty()
    }

    /// The cell at the given row (private label discount index) and column
    /// (brand discount index)
    pub fn cell(&self, row: usize, col: usize) -> Option<PayoffCell> {
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        let offset = row * self.cols() + col;
        Some(PayoffCell {
            barilla_discount: self.barilla_discounts[col],
            pl_discount: self.pl_discounts[row],
            barilla_profit: self.barilla_profit[offset],
            pl_profit: self.pl_profit[offset],
        })
    }

    /// Every cell, brand discount in the outer loop and private label
    /// discount in the inner loop
    pub fn cells(&self) -> impl Iterator<Item = PayoffCell> + '_ {
        (0..self.cols()).flat_map(move |col| {
            (0..self.rows()).filter_map(move |row| self.cell(row, col))
        })
    }

    /// A read-only view of one player's profits, supporting reductions
    pub fn plane(&self, player: Player) -> Plane<'_> {
        let values = match player {
            Player::Barilla => &self.barilla_profit,
            Player::PrivateLabel => &self.pl_profit,
        };
        Plane::new(values, self.rows(), self.cols())
    }
}

/// The serialized form of a [`PayoffGrid`], with each plane as a list of rows
#[cfg(feature = "serde")]
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct PayoffGridDto {
    /// The brand's discounts (columns)
    pub barilla_discounts: DiscountGrid,
    /// The private label's discounts (rows)
    pub pl_discounts: DiscountGrid,
    /// The brand's profits, one inner vector per row
    pub barilla_profit: Vec<Vec<f64>>,
    /// The private label's profits, one inner vector per row
    pub pl_profit: Vec<Vec<f64>>,
}

#[cfg(feature = "serde")]
impl TryFrom<PayoffGridDto> for PayoffGrid {
    type Error = PayoffGridError;

    fn try_from(value: PayoffGridDto) -> Result<Self, Self::Error> {
        let cols = value.barilla_discounts.len();
        let flatten = |player: Player, rows: Vec<Vec<f64>>| {
            if let Some(row) = rows.iter().find(|row| row.len() != cols) {
                return Err(PayoffGridError::Shape {
                    player,
                    expected: cols,
                    actual: row.len(),
                });
            }
            Ok(rows.into_iter().flatten().collect::<Vec<_>>())
        };
        let barilla_profit = flatten(Player::Barilla, value.barilla_profit)?;
        let pl_profit = flatten(Player::PrivateLabel, value.pl_profit)?;
        Self::new(
            value.barilla_discounts,
            value.pl_discounts,
            barilla_profit,
            pl_profit,
        )
    }
}

#[cfg(feature = "serde")]
impl From<PayoffGrid> for PayoffGridDto {
    fn from(value: PayoffGrid) -> Self {
        let cols = value.cols();
        let unflatten = |plane: Vec<f64>| {
            plane
                .chunks(cols)
                .map(<[f64]>::to_vec)
                .collect::<Vec<_>>()
        };
        Self {
            barilla_profit: unflatten(value.barilla_profit),
            pl_profit: unflatten(value.pl_profit),
            barilla_discounts: value.barilla_discounts,
            pl_discounts: value.pl_discounts,
        }
    }
}

/// The ways in which a payoff table can be malformed
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum PayoffGridError {
    /// A plane (or one of its rows) has the wrong number of values
    #[error("{player} profit plane has {actual} values where {expected} were expected")]
    Shape {
        /// The plane's owner
        player: Player,
        /// The required length
        expected: usize,
        /// The provided length
        actual: usize,
    },
    /// A profit was NaN or infinite
    #[error(
        "{player} profit is not finite at Barilla discount {barilla_discount}, private label discount {pl_discount}"
    )]
    NonFinite {
        /// The plane's owner
        player: Player,
        /// The column's discount
        barilla_discount: f64,
        /// The row's discount
        pl_discount: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> PayoffGrid {
        // 2 rows (pl) x 3 cols (barilla)
        PayoffGrid::new(
            DiscountGrid::new(vec![0.0, 0.1, 0.2]).unwrap(),
            DiscountGrid::new(vec![0.0, 0.5]).unwrap(),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            vec![-1.0, -2.0, -3.0, -4.0, -5.0, -6.0],
        )
        .unwrap()
    }

    #[test]
    fn cells_are_addressed_by_discounts() {
        let grid = grid();
        assert_eq!(grid.len(), 6);
        assert_eq!(
            grid.cell(1, 2),
            Some(PayoffCell {
                barilla_discount: 0.2,
                pl_discount: 0.5,
                barilla_profit: 6.0,
                pl_profit: -6.0,
            })
        );
        assert_eq!(grid.cell(2, 0), None);
        assert_eq!(grid.cell(0, 3), None);
    }

    #[test]
    fn cells_iterate_barilla_major() {
        let order = grid()
            .cells()
            .map(|cell| (cell.barilla_discount, cell.pl_discount))
            .collect::<Vec<_>>();
        assert_eq!(
            order,
            vec![
                (0.0, 0.0),
                (0.0, 0.5),
                (0.1, 0.0),
                (0.1, 0.5),
                (0.2, 0.0),
                (0.2, 0.5)
            ]
        );
    }

    #[test]
    fn rejects_bad_shape() {
        let err = PayoffGrid::new(
            DiscountGrid::new(vec![0.0, 0.1]).unwrap(),
            DiscountGrid::new(vec![0.0]).unwrap(),
            vec![1.0, 2.0],
            vec![1.0],
        )
        .unwrap_err();
        assert_eq!(
            err,
            PayoffGridError::Shape {
                player: Player::PrivateLabel,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn rejects_non_finite_with_location() {
        let err = PayoffGrid::new(
            DiscountGrid::new(vec![0.0, 0.1]).unwrap(),
            DiscountGrid::new(vec![0.0, 0.3]).unwrap(),
            vec![1.0, 2.0, 3.0, f64::INFINITY],
            vec![1.0; 4],
        )
        .unwrap_err();
        assert_eq!(
            err,
            PayoffGridError::NonFinite {
                player: Player::Barilla,
                barilla_discount: 0.1,
                pl_discount: 0.3,
            }
        );
    }

    #[test]
    fn serde_uses_rows() {
        let json = serde_json::to_value(grid()).unwrap();
        assert_eq!(
            json["barilla_profit"],
            serde_json::json!([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])
        );
        let back: PayoffGrid = serde_json::from_value(json).unwrap();
        assert_eq!(back, grid());
    }

    #[test]
    fn serde_rejects_ragged_rows() {
        let json = serde_json::json!({
            "barilla_discounts": [0.0, 0.1],
            "pl_discounts": [0.0, 0.1],
            "barilla_profit": [[1.0, 2.0], [3.0]],
            "pl_profit": [[1.0, 2.0], [3.0, 4.0]],
        });
        assert!(serde_json::from_value::<PayoffGrid>(json).is_err());
    }

    #[test]
    fn player_display() {
        assert_eq!(Player::Barilla.to_string(), "Barilla");
        assert_eq!(Player::PrivateLabel.to_string(), "Private Label");
    }

    #[test]
    fn discounts_by_player() {
        let grid = grid();
        assert_eq!(grid.discounts(Player::Barilla), grid.barilla_discounts());
        assert_eq!(grid.discounts(Player::PrivateLabel), grid.pl_discounts());
        assert_eq!(
            grid.discounts(Player::Barilla.opponent()).len(),
            grid.rows()
        );
        assert_eq!(
            grid.discounts(Player::PrivateLabel.opponent()).len(),
            grid.cols()
        );
    }
}
