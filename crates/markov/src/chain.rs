//! First-order Markov chain over observed symbols.

use std::hash::Hash;

use mchain_index::StateIndex;
use mchain_matrix::{TransitionCounts, TransitionMatrix};
use tracing::debug;

use crate::cache::PowerCache;
use crate::config::ChainConfig;
use crate::error::ChainError;
use crate::transition::{Transition, ranked};

/// An empirical first-order Markov chain.
///
/// States are the distinct symbols of the training sequence in order of first
/// occurrence. Row `i` of the matrix is the observed distribution of the
/// symbol following state `i`; a state that only ever appeared last has an
/// all-zero row.
///
/// Immutable once built and safe to query from several threads.
#[derive(Debug, Clone)]
pub struct MarkovChain<S> {
    index: StateIndex<S>,
    matrix: TransitionMatrix,
    powers: PowerCache,
}

impl<S: Eq + Hash + Clone> MarkovChain<S> {
    /// Builds a chain from a sequence of symbols with the default configuration.
    ///
    /// Sequences too short to contain a transition produce a chain whose
    /// queries return nothing.
    pub fn create(sequence: &[S]) -> Result<Self, ChainError> {
        Self::create_with_config(sequence, &ChainConfig::default())
    }

    /// Builds a chain from a sequence of symbols.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidConfig`] if `config` does not validate.
    #[tracing::instrument(skip_all, fields(len = sequence.len()))]
    pub fn create_with_config(sequence: &[S], config: &ChainConfig) -> Result<Self, ChainError> {
        config.validate()?;

        let (index, positions) = StateIndex::encode(sequence.iter().cloned());
        let n_states = index.len();

        let counts = TransitionCounts::from_observations(
            n_states,
            n_states,
            positions.windows(2).map(|pair| (pair[0], pair[1])),
        )?;
        if counts.total() == 0 {
            debug!("sequence too short to observe a transition");
        }

        let matrix = counts.normalize();
        matrix.validate(config.tolerance())?;

        debug!(n_states, "built first-order chain");
        Ok(Self {
            index,
            matrix,
            powers: PowerCache::new(config.power_cache()),
        })
    }

    /// Returns the states reachable from `current` in one step.
    ///
    /// Sorted by descending probability, ties broken by order of first
    /// occurrence. Empty if `current` was never observed or never had a
    /// successor.
    pub fn next(&self, current: &S) -> Vec<Transition<S>> {
        match self.index.position(current) {
            Some(row) => ranked(self.index.states(), self.matrix.row(row)),
            None => Vec::new(),
        }
    }

    /// Probability of being in `future` exactly `n` steps after `current`.
    ///
    /// Returns `Ok(0.0)` if either state was never observed. `n = 0` gives
    /// 1.0 when `current == future` and 0.0 otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::NegativeSteps`] if `n < 0`.
    pub fn probability(&self, current: &S, future: &S, n: i32) -> Result<f64, ChainError> {
        let steps = u32::try_from(n).map_err(|_| ChainError::NegativeSteps { n })?;
        let (Some(from), Some(to)) = (self.index.position(current), self.index.position(future))
        else {
            return Ok(0.0);
        };
        Ok(self
            .powers
            .with_power(&self.matrix, steps, |pn| pn.prob(from, to))?)
    }

    /// Returns `true` if `state` was observed.
    pub fn contains(&self, state: &S) -> bool {
        self.index.contains(state)
    }
}

impl<S> MarkovChain<S> {
    /// Distinct states in order of first occurrence.
    pub fn states(&self) -> &[S] {
        self.index.states()
    }

    /// The one-step transition matrix, indexed like [`Self::states`].
    pub fn matrix(&self) -> &TransitionMatrix {
        &self.matrix
    }

    /// Number of distinct states.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the chain was built from an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
