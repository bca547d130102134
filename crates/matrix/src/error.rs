//! Error types for the mchain-matrix crate.

/// Error type for all fallible matrix operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    /// Returned when a power is requested of a non-square matrix.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Returned when two matrices cannot be multiplied.
    #[error("shape mismatch: left has {left_cols} columns, right has {right_rows} rows")]
    ShapeMismatch {
        /// Column count of the left operand.
        left_cols: usize,
        /// Row count of the right operand.
        right_rows: usize,
    },

    /// Returned when a count is recorded outside the matrix.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Returned when an entry is NaN or infinite.
    #[error("entry ({row}, {col}) is not finite: {value}")]
    NonFiniteEntry {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when an entry lies outside `[0, 1]`.
    #[error("entry ({row}, {col}) = {value} is outside [0, 1]")]
    EntryOutOfRange {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when a row sums to neither 1 nor 0.
    #[error("row {row} sums to {sum}, expected ~1.0 or 0.0")]
    RowSum {
        /// Index of the row.
        row: usize,
        /// The computed sum.
        sum: f64,
    },
}
