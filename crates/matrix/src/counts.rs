//! Transition counting.

use ndarray::Array2;

use crate::error::MatrixError;
use crate::matrix::TransitionMatrix;

/// Mutable tally of observed transitions, consumed by [`TransitionCounts::normalize`].
///
/// Rows are source states (or contexts), columns are destination states.
#[derive(Debug, Clone)]
pub struct TransitionCounts {
    counts: Array2<f64>,
    total: u64,
}

impl TransitionCounts {
    /// Creates an all-zero tally of the given shape.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            counts: Array2::zeros((rows, cols)),
            total: 0,
        }
    }

    /// Tallies every `(row, col)` observation.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] on the first observation
    /// outside the matrix.
    pub fn from_observations<I>(
        rows: usize,
        cols: usize,
        observations: I,
    ) -> Result<Self, MatrixError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut counts = Self::new(rows, cols);
        for (row, col) in observations {
            counts.increment(row, col)?;
        }
        Ok(counts)
    }

    /// Records one observed transition from `row` to `col`.
    pub fn increment(&mut self, row: usize, col: usize) -> Result<(), MatrixError> {
        let (rows, cols) = self.counts.dim();
        let cell = self
            .counts
            .get_mut((row, col))
            .ok_or(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            })?;
        *cell += 1.0;
        self.total += 1;
        Ok(())
    }

    /// Raw count for `(row, col)`, or 0 outside the matrix.
    pub fn count(&self, row: usize, col: usize) -> f64 {
        self.counts.get((row, col)).copied().unwrap_or(0.0)
    }

    /// Total number of recorded transitions.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.counts.dim()
    }

    /// Row-normalizes the tally into a transition matrix.
    ///
    /// Each row is divided by the sum of its own raw counts. Rows with no
    /// observations stay all-zero.
    pub fn normalize(self) -> TransitionMatrix {
        let mut probs = self.counts;
        let mut empty_rows = 0usize;
        for mut row in probs.rows_mut() {
            let sum = row.sum();
            if sum != 0.0 {
                row.mapv_inplace(|c| c / sum);
            } else {
                empty_rows += 1;
            }
        }
        tracing::debug!(
            rows = probs.nrows(),
            cols = probs.ncols(),
            observations = self.total,
            empty_rows,
            "normalized transition counts"
        );
        TransitionMatrix::from_array(probs)
    }
}
