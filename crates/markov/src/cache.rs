//! Memoized matrix powers.

use std::collections::HashMap;

use mchain_matrix::{MatrixError, TransitionMatrix};
use parking_lot::RwLock;
use tracing::trace;

/// Lazily filled map from exponent to matrix power.
///
/// When disabled every lookup recomputes the power. Readers share the lock;
/// a miss takes the write lock only to insert.
#[derive(Debug)]
pub(crate) struct PowerCache {
    enabled: bool,
    powers: RwLock<HashMap<u32, TransitionMatrix>>,
}

impl PowerCache {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            powers: RwLock::new(HashMap::new()),
        }
    }

    /// Applies `f` to `base^n`.
    ///
    /// `base` must be the same matrix on every call for a given cache.
    pub(crate) fn with_power<R>(
        &self,
        base: &TransitionMatrix,
        n: u32,
        f: impl FnOnce(&TransitionMatrix) -> R,
    ) -> Result<R, MatrixError> {
        if !self.enabled {
            return Ok(f(&base.power(n)?));
        }

        if let Some(hit) = self.powers.read().get(&n) {
            trace!(n, "power cache hit");
            return Ok(f(hit));
        }

        trace!(n, "power cache miss");
        let computed = base.power(n)?;
        let out = f(&computed);
        self.powers.write().entry(n).or_insert(computed);
        Ok(out)
    }

    /// Number of memoized powers.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.powers.read().len()
    }
}

impl Clone for PowerCache {
    fn clone(&self) -> Self {
        Self {
            enabled: self.enabled,
            powers: RwLock::new(self.powers.read().clone()),
        }
    }
}
