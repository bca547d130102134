//! Configuration for chain construction and queries.

use crate::error::ChainError;

/// Configuration for building a chain.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use mchain_markov::ChainConfig;
///
/// let config = ChainConfig::new()
///     .with_power_cache(true)
///     .with_tolerance(1e-12);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct ChainConfig {
    power_cache: bool,
    tolerance: f64,
}

impl ChainConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `power_cache = false`, `tolerance = 1e-9`.
    pub fn new() -> Self {
        Self {
            power_cache: false,
            tolerance: 1e-9,
        }
    }

    /// Memoizes matrix powers by exponent for repeated multi-step queries.
    ///
    /// Applies to [`MarkovChain`](crate::MarkovChain) only. The cache keeps
    /// one `states × states` matrix for every distinct `n` ever queried and
    /// never evicts, so leave it off when `n` is unbounded or caller-chosen.
    pub fn with_power_cache(mut self, enabled: bool) -> Self {
        self.power_cache = enabled;
        self
    }

    /// Sets the row-sum tolerance used when checking a freshly built matrix.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    // --- Accessors ---

    /// Returns `true` if matrix powers are memoized.
    pub fn power_cache(&self) -> bool {
        self.power_cache
    }

    /// Returns the row-sum tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Validates this configuration.
    ///
    /// The tolerance must be finite and positive.
    pub fn validate(&self) -> Result<(), ChainError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ChainError::InvalidConfig {
                reason: format!(
                    "tolerance must be finite and positive, got {}",
                    self.tolerance
                ),
            });
        }
        Ok(())
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ChainConfig::new();
        assert!(!cfg.power_cache());
        assert!((cfg.tolerance() - 1e-9).abs() < f64::EPSILON);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_chaining() {
        let cfg = ChainConfig::new()
            .with_power_cache(true)
            .with_tolerance(1e-6);
        assert!(cfg.power_cache());
        assert!((cfg.tolerance() - 1e-6).abs() < f64::EPSILON);
    }

    #[test]
    fn default_matches_new() {
        let a = ChainConfig::default();
        let b = ChainConfig::new();
        assert_eq!(a.power_cache(), b.power_cache());
        assert_eq!(a.tolerance(), b.tolerance());
    }

    #[test]
    fn validate_zero_tolerance() {
        let cfg = ChainConfig::new().with_tolerance(0.0);
        assert!(matches!(
            cfg.validate(),
            Err(ChainError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn validate_negative_tolerance() {
        let cfg = ChainConfig::new().with_tolerance(-1e-3);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_nan_tolerance() {
        let cfg = ChainConfig::new().with_tolerance(f64::NAN);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_infinite_tolerance() {
        let cfg = ChainConfig::new().with_tolerance(f64::INFINITY);
        assert!(cfg.validate().is_err());
    }
}
