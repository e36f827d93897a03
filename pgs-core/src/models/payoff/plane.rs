/// A borrowed, row-major view over one player's profits.
///
/// Rows correspond to the private label's discounts and columns to the
/// brand's. Every argmax reduction is a first-maximum scan: among equal
/// values, the lowest index wins.
#[derive(Clone, Copy, Debug)]
pub struct Plane<'a> {
    values: &'a [f64],
    rows: usize,
    cols: usize,
}

impl<'a> Plane<'a> {
    pub(crate) fn new(values: &'a [f64], rows: usize, cols: usize) -> Self {
        debug_assert_eq!(values.len(), rows * cols);
        Self { values, rows, cols }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The profit at (row, col), if in bounds
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        (row < self.rows && col < self.cols).then(|| self.values[row * self.cols + col])
    }

    /// The profits of one row, in column order
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &'a [f64] {
        assert!(row < self.rows, "row {row} out of bounds");
        &self.values[row * self.cols..(row + 1) * self.cols]
    }

    /// The profits of one column, in row order
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + 'a {
        assert!(col < self.cols, "column {col} out of bounds");
        self.values[col..].iter().step_by(self.cols).copied()
    }

    /// The column holding the largest profit in `row`
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row_argmax(&self, row: usize) -> usize {
        first_max(self.row(row).iter().copied()).map_or(0, |(index, _)| index)
    }

    /// The row holding the largest profit in `col`
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn column_argmax(&self, col: usize) -> usize {
        first_max(self.column(col)).map_or(0, |(index, _)| index)
    }

    /// The (row, col) of the largest profit in the whole plane, scanning row-major
    pub fn argmax(&self) -> (usize, usize) {
        let offset = first_max(self.values.iter().copied()).map_or(0, |(index, _)| index);
        (offset / self.cols, offset % self.cols)
    }

    /// The largest profit in the plane
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// The mean profit over the whole plane
    pub fn mean(&self) -> f64 {
        mean(self.values.iter().copied(), self.values.len())
    }

    /// The mean profit of every row
    pub fn row_means(&self) -> Vec<f64> {
        (0..self.rows)
            .map(|row| mean(self.row(row).iter().copied(), self.cols))
            .collect()
    }

    /// The mean profit of every column
    pub fn column_means(&self) -> Vec<f64> {
        (0..self.cols)
            .map(|col| mean(self.column(col), self.rows))
            .collect()
    }
}

/// Returns the index and value of the first maximum, or None for an empty iterator
fn first_max(values: impl Iterator<Item = f64>) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (index, value) in values.enumerate() {
        match best {
            Some((_, current)) if !(value > current) => {}
            _ => best = Some((index, value)),
        }
    }
    best
}

fn mean(values: impl Iterator<Item = f64>, len: usize) -> f64 {
    values.sum::<f64>() / len as f64
}
