//! Empirical transition matrices.
//!
//! Observed `(source, destination)` index pairs are tallied into a
//! [`TransitionCounts`] buffer, then row-normalized into an immutable
//! [`TransitionMatrix`].
//!
//! # Pipeline
//!
//! ```text
//!  ┌────────────────┐     ┌──────────────────┐     ┌───────────────────┐
//!  │ (row, col)     │────▶│ TransitionCounts │────▶│ TransitionMatrix  │
//!  │ observations   │     │  (tally)         │     │ (get, power, ...) │
//!  └────────────────┘     └──────────────────┘     └───────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```
//! use mchain_matrix::TransitionCounts;
//!
//! let counts = TransitionCounts::from_observations(2, 2, [(0, 1), (1, 0), (1, 1)]).unwrap();
//! let matrix = counts.normalize();
//!
//! assert_eq!(matrix.prob(0, 1), 1.0);
//! assert_eq!(matrix.prob(1, 0), 0.5);
//! assert!(matrix.validate(1e-9).is_ok());
//!
//! let two_step = matrix.power(2).unwrap();
//! assert_eq!(two_step.prob(0, 0), 0.5);
//! ```

pub mod counts;
pub mod error;
pub mod matrix;

pub use counts::TransitionCounts;
pub use error::MatrixError;
pub use matrix::TransitionMatrix;
