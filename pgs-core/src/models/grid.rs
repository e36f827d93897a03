use std::ops::Deref;

/// The largest grid `DiscountGrid::stepped` will generate
const MAX_STEPS: f64 = 1_000_000.0;

/// The ordered set of trade discounts available to one player.
///
/// A DiscountGrid is:
/// - non-empty
/// - made of finite, non-negative values
/// - strictly increasing
///
/// Grids deref to a slice, so indexing and iteration work as they would for
/// `&[f64]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct DiscountGrid(Vec<f64>);

impl DiscountGrid {
    /// Creates a new grid, validating all constraints
    pub fn new(values: Vec<f64>) -> Result<Self, GridError> {
        if values.is_empty() {
            return Err(GridError::Empty);
        }

        let mut prev = f64::NEG_INFINITY;
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(GridError::NonFinite { index });
            }
            if value < 0.0 {
                return Err(GridError::Negative { index, value });
            }
            if !(value > prev) {
                return Err(GridError::NonIncreasing { index });
            }
            prev = value;
        }

        Ok(Self(values))
    }

    /// Generates `start, start + step, ...` for every value strictly below `stop`.
    ///
    /// The number of points is `ceil((stop - start) / step)`, and the i-th
    /// point is computed as `start + i * step` rather than by accumulation.
    /// The values are not rounded; see [`DiscountGrid::rounded`].
    pub fn stepped(start: f64, stop: f64, step: f64) -> Result<Self, GridError> {
        let count = ((stop - start) / step).ceil();
        if !(step > 0.0) || !count.is_finite() || count < 1.0 || count > MAX_STEPS {
            return Err(GridError::Range { start, stop, step });
        }

        Self::new(
            (0..count as usize)
                .map(|i| start + i as f64 * step)
                .collect(),
        )
    }

    /// Rounds every discount to the given number of decimal places (ties to even).
    ///
    /// Rounding may collapse neighbouring values, in which case the result is
    /// rejected as non-increasing.
    pub fn rounded(&self, decimals: u32) -> Result<Self, GridError> {
        let scale = 10f64.powi(decimals as i32);
        Self::new(
            self.0
                .iter()
                .map(|value| (value * scale).round_ties_even() / scale)
                .collect(),
        )
    }

    /// The smallest distance between two neighbouring discounts, if there are at least two
    pub fn min_step(&self) -> Option<f64> {
        self.0
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .min_by(f64::total_cmp)
    }

    /// The index of the discount within `tolerance` of `value`, if any.
    ///
    /// When several discounts qualify, the closest wins.
    pub fn position(&self, value: f64, tolerance: f64) -> Option<usize> {
        self.0
            .iter()
            .enumerate()
            .map(|(index, discount)| (index, (discount - value).abs()))
            .filter(|(_, distance)| *distance <= tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index)
    }

    /// Consumes the grid, returning its discounts
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for DiscountGrid {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for DiscountGrid {
    type Error = GridError;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DiscountGrid> for Vec<f64> {
    fn from(value: DiscountGrid) -> Self {
        value.0
    }
}

/// Errors that can occur when creating a DiscountGrid
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum GridError {
    /// No discounts were provided
    #[error("No discounts provided")]
    Empty,
    /// A discount was NaN or infinite
    #[error("Discount at position {index} is not finite")]
    NonFinite {
        /// Position of the offending discount
        index: usize,
    },
    /// A discount was below zero
    #[error("Discount at position {index} is negative ({value})")]
    Negative {
        /// Position of the offending discount
        index: usize,
        /// The offending discount
        value: f64,
    },
    /// A discount did not exceed its predecessor
    #[error("Discounts are not strictly increasing at position {index}")]
    NonIncreasing {
        /// Position of the offending discount
        index: usize,
    },
    /// A stepped range could not produce a grid
    #[error("Invalid discount range: start={start}, stop={stop}, step={step}")]
    Range {
        /// First discount of the range
        start: f64,
        /// Exclusive upper end of the range
        stop: f64,
        /// Distance between neighbouring discounts
        step: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case::empty(vec![], GridError::Empty)]
    #[case::nan(vec![0.0, f64::NAN], GridError::NonFinite { index: 1 })]
    #[case::infinite(vec![f64::INFINITY], GridError::NonFinite { index: 0 })]
    #[case::negative(vec![-0.05, 0.0], GridError::Negative { index: 0, value: -0.05 })]
    #[case::repeated(vec![0.0, 0.05, 0.05], GridError::NonIncreasing { index: 2 })]
    #[case::decreasing(vec![0.1, 0.05], GridError::NonIncreasing { index: 1 })]
    fn rejects_invalid(#[case] values: Vec<f64>, #[case] expected: GridError) {
        assert_eq!(DiscountGrid::new(values).unwrap_err(), expected);
    }

    #[rstest]
    #[case::pasta_core(0.80, 16)]
    #[case::pasta_premium(0.60, 12)]
    #[case::sauces(0.90, 18)]
    fn stepped_matches_half_open_range(#[case] stop: f64, #[case] len: usize) {
        let grid = DiscountGrid::stepped(0.0, stop, 0.05)
            .unwrap()
            .rounded(2)
            .unwrap();
        assert_eq!(grid.len(), len);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[3], 0.15);
        assert!(*grid.last().unwrap() < stop);
    }

    #[rstest]
    #[case::zero_step(0.0, 1.0, 0.0)]
    #[case::negative_step(0.0, 1.0, -0.1)]
    #[case::empty_range(0.5, 0.5, 0.05)]
    #[case::inverted(1.0, 0.0, 0.05)]
    #[case::nan_step(0.0, 1.0, f64::NAN)]
    fn stepped_rejects_bad_ranges(#[case] start: f64, #[case] stop: f64, #[case] step: f64) {
        assert!(matches!(
            DiscountGrid::stepped(start, stop, step),
            Err(GridError::Range { .. })
        ));
    }

    #[test]
    fn rounding_can_collapse() {
        let grid = DiscountGrid::new(vec![0.0, 0.001, 0.002]).unwrap();
        assert_eq!(
            grid.rounded(2).unwrap_err(),
            GridError::NonIncreasing { index: 1 }
        );
    }

    #[test]
    fn min_step_and_position() {
        let grid = DiscountGrid::new(vec![0.0, 0.05, 0.15, 0.2]).unwrap();
        let step = grid.min_step().unwrap();
        assert!((step - 0.05).abs() < 1e-12);
        assert_eq!(grid.position(0.1500000001, step / 2.0), Some(2));
        assert_eq!(grid.position(0.1, step / 2.0), None);

        let single = DiscountGrid::new(vec![0.3]).unwrap();
        assert_eq!(single.min_step(), None);
        assert_eq!(single.position(0.3, 1e-9), Some(0));
    }

    #[test]
    fn serde_validates() {
        let grid: DiscountGrid = serde_json::from_str("[0.0, 0.05, 0.1]").unwrap();
        assert_eq!(grid.len(), 3);
        assert!(serde_json::from_str::<DiscountGrid>("[0.1, 0.0]").is_err());
        assert!(serde_json::from_str::<DiscountGrid>("[]").is_err());
    }
}
