//! Error types for the mchain-markov crate.

use mchain_matrix::MatrixError;

/// Error type for all fallible operations in the mchain-markov crate.
///
/// Querying a state or context that was never observed is not an error;
/// those queries return an empty result or a probability of 0.0.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChainError {
    /// Returned when the chain order is zero or not shorter than the sequence.
    #[error("invalid order {order} for a sequence of length {len} (need 1 <= order < len)")]
    InvalidOrder {
        /// Requested order.
        order: usize,
        /// Length of the input sequence.
        len: usize,
    },

    /// Returned when a negative number of steps is requested.
    #[error("step count must be non-negative, got {n}")]
    NegativeSteps {
        /// The requested step count.
        n: i32,
    },

    /// Returned when a configuration value is out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Propagated from the transition matrix.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_order() {
        let e = ChainError::InvalidOrder { order: 5, len: 3 };
        assert_eq!(
            e.to_string(),
            "invalid order 5 for a sequence of length 3 (need 1 <= order < len)"
        );
    }

    #[test]
    fn error_negative_steps() {
        let e = ChainError::NegativeSteps { n: -2 };
        assert_eq!(e.to_string(), "step count must be non-negative, got -2");
    }

    #[test]
    fn error_invalid_config() {
        let e = ChainError::InvalidConfig {
            reason: "tolerance must be positive".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid configuration: tolerance must be positive"
        );
    }

    #[test]
    fn error_from_matrix_is_transparent() {
        let e: ChainError = MatrixError::NotSquare { rows: 2, cols: 3 }.into();
        assert_eq!(e.to_string(), "matrix is not square: 2x3");
        assert!(matches!(e, ChainError::Matrix(_)));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ChainError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ChainError>();
    }
}
