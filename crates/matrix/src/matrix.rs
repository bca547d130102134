//! Row-stochastic transition matrix.

use ndarray::{Array2, ArrayView1};

use crate::error::MatrixError;

/// A dense transition matrix.
///
/// Row `i` holds the probabilities of moving from source `i` to each column.
/// Rows sum to 1.0, or are entirely zero when the source was never observed
/// to transition anywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    probs: Array2<f64>,
}

impl TransitionMatrix {
    /// Wraps an existing array. No validation is performed; see [`Self::validate`].
    pub fn from_array(probs: Array2<f64>) -> Self {
        Self { probs }
    }

    /// An all-zero matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            probs: Array2::zeros((rows, cols)),
        }
    }

    /// The `n`x`n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self {
            probs: Array2::eye(n),
        }
    }

    /// Returns the probability at `(row, col)`, or `None` outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.probs.get((row, col)).copied()
    }

    /// Returns the probability at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the matrix.
    pub fn prob(&self, row: usize, col: usize) -> f64 {
        self.probs[[row, col]]
    }

    /// Returns row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_rows()`.
    pub fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        self.probs.row(i)
    }

    /// Sum of row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_rows()`.
    pub fn row_sum(&self, i: usize) -> f64 {
        self.probs.row(i).sum()
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.probs.dim()
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.probs.nrows()
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.probs.ncols()
    }

    /// Returns `true` if the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.probs.nrows() == self.probs.ncols()
    }

    /// The underlying array.
    pub fn as_array(&self) -> &Array2<f64> {
        &self.probs
    }

    /// Matrix product `self · other`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if the inner dimensions differ.
    pub fn matmul(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.n_cols() != other.n_rows() {
            return Err(MatrixError::ShapeMismatch {
                left_cols: self.n_cols(),
                right_rows: other.n_rows(),
            });
        }
        Ok(Self {
            probs: self.probs.dot(&other.probs),
        })
    }

    /// Raises the matrix to the `n`-th power by repeated squaring.
    ///
    /// `power(0)` is the identity and `power(1)` is an exact copy.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for rectangular matrices.
    pub fn power(&self, n: u32) -> Result<Self, MatrixError> {
        let (rows, cols) = self.shape();
        if rows != cols {
            return Err(MatrixError::NotSquare { rows, cols });
        }
        if n == 0 {
            return Ok(Self::identity(rows));
        }

        let mut result: Option<Array2<f64>> = None;
        let mut base = self.probs.clone();
        let mut exp = n;
        loop {
            if exp & 1 == 1 {
                result = Some(match result {
                    Some(acc) => acc.dot(&base),
                    None => base.clone(),
                });
            }
            exp >>= 1;
            if exp == 0 {
                break;
            }
            base = base.dot(&base);
        }

        // n >= 1 guarantees at least one set bit.
        Ok(Self {
            probs: result.unwrap_or(base),
        })
    }

    /// Validates that the matrix is row-stochastic.
    ///
    /// Every entry must be finite and in `[0, 1]`. Every row must sum to 1.0
    /// within `tolerance`, or be exactly zero.
    pub fn validate(&self, tolerance: f64) -> Result<(), MatrixError> {
        for (i, row) in self.probs.rows().into_iter().enumerate() {
            let mut sum = 0.0;
            for (j, &p) in row.iter().enumerate() {
                if !p.is_finite() {
                    return Err(MatrixError::NonFiniteEntry {
                        row: i,
                        col: j,
                        value: p,
                    });
                }
                if !(0.0..=1.0).contains(&p) {
                    return Err(MatrixError::EntryOutOfRange {
                        row: i,
                        col: j,
                        value: p,
                    });
                }
                sum += p;
            }
            if sum != 0.0 && (sum - 1.0).abs() > tolerance {
                return Err(MatrixError::RowSum { row: i, sum });
            }
        }
        Ok(())
    }
}
