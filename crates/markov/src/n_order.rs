//! Order-k Markov chain over sliding windows of symbols.
//!
//! A context is a window of `k` consecutive symbols. `P` (contexts × states)
//! holds the observed distribution of the symbol following each context.
//! Appending that symbol and dropping the oldest one gives the successor
//! context, which is always another observed window. Successors are kept as
//! a sparse list per context, one entry per nonzero cell of `P`.
//!
//! An n-step query from context `c` to symbol `s` walks a distribution over
//! contexts `n - 1` steps along the successor lists, then emits one symbol
//! through `P`. This equals `(C^(n-1) · P)[c, s]` for the contexts × contexts
//! matrix `C` without ever materializing `C`.

use std::hash::Hash;

use mchain_index::StateIndex;
use mchain_matrix::{TransitionCounts, TransitionMatrix};
use tracing::debug;

use crate::config::ChainConfig;
use crate::error::ChainError;
use crate::transition::{Transition, ranked};

/// An empirical Markov chain of order `k >= 1`.
#[derive(Debug, Clone)]
pub struct NOrderMarkovChain<S> {
    order: usize,
    contexts: StateIndex<Vec<S>>,
    states: StateIndex<S>,
    matrix: TransitionMatrix,
    /// `successors[c]` holds `(state, next_context)` sorted by state.
    successors: Vec<Vec<(usize, usize)>>,
}

impl<S: Eq + Hash + Clone> NOrderMarkovChain<S> {
    /// Builds an order-`order` chain with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidOrder`] unless `1 <= order < sequence.len()`.
    pub fn create(sequence: &[S], order: usize) -> Result<Self, ChainError> {
        Self::create_with_config(sequence, order, &ChainConfig::default())
    }

    /// Builds an order-`order` chain.
    ///
    /// Every window of `order` symbols becomes a context. Each window except
    /// the last is followed by exactly one observation, so repeated contexts
    /// are counted once per occurrence.
    ///
    /// The power cache setting has no effect here; multi-step queries walk
    /// the successor lists directly.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidOrder`] unless `1 <= order < sequence.len()`,
    /// or [`ChainError::InvalidConfig`] if `config` does not validate.
    #[tracing::instrument(skip_all, fields(len = sequence.len(), order))]
    pub fn create_with_config(
        sequence: &[S],
        order: usize,
        config: &ChainConfig,
    ) -> Result<Self, ChainError> {
        config.validate()?;
        if order == 0 || order >= sequence.len() {
            return Err(ChainError::InvalidOrder {
                order,
                len: sequence.len(),
            });
        }

        let (contexts, context_pos) =
            StateIndex::encode(sequence.windows(order).map(<[S]>::to_vec));
        let (states, state_pos) = StateIndex::encode(sequence.iter().cloned());

        // Window i is followed by the symbol at i + order.
        let n_observed = sequence.len() - order;
        let counts = TransitionCounts::from_observations(
            contexts.len(),
            states.len(),
            (0..n_observed).map(|i| (context_pos[i], state_pos[i + order])),
        )?;
        let matrix = counts.normalize();
        matrix.validate(config.tolerance())?;

        // Appending that symbol to window i yields window i + 1.
        let mut successors = vec![Vec::new(); contexts.len()];
        for i in 0..n_observed {
            successors[context_pos[i]].push((state_pos[i + order], context_pos[i + 1]));
        }
        for row in &mut successors {
            row.sort_unstable();
            row.dedup();
        }

        debug!(
            n_contexts = contexts.len(),
            n_states = states.len(),
            n_observed,
            n_successors = successors.iter().map(Vec::len).sum::<usize>(),
            "built order-k chain"
        );
        Ok(Self {
            order,
            contexts,
            states,
            matrix,
            successors,
        })
    }

    /// Returns the symbols that can follow the context `current`.
    ///
    /// Sorted by descending probability, ties broken by order of first
    /// occurrence. Empty if `current` was never observed as a window
    /// (including any slice whose length differs from the order).
    pub fn next(&self, current: &[S]) -> Vec<Transition<S>> {
        match self.contexts.position(current) {
            Some(row) => ranked(self.states.states(), self.matrix.row(row)),
            None => Vec::new(),
        }
    }

    /// Probability that the symbol emitted `n` steps after context `current`
    /// is `future`.
    ///
    /// With `n = 0` the chain is taken to occupy the last symbol of
    /// `current`. Returns `Ok(0.0)` if the context or symbol was never
    /// observed. Costs `O(n · (contexts + successors))`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::NegativeSteps`] if `n < 0`.
    pub fn probability(&self, current: &[S], future: &S, n: i32) -> Result<f64, ChainError> {
        let steps = u32::try_from(n).map_err(|_| ChainError::NegativeSteps { n })?;
        let (Some(from), Some(to)) = (self.contexts.position(current), self.states.position(future))
        else {
            return Ok(0.0);
        };

        if steps == 0 {
            return Ok(if current.last() == Some(future) { 1.0 } else { 0.0 });
        }

        let mut dist = vec![0.0; self.contexts.len()];
        let mut stepped = vec![0.0; self.contexts.len()];
        dist[from] = 1.0;
        for _ in 1..steps {
            stepped.fill(0.0);
            for (c, &mass) in dist.iter().enumerate() {
                if mass == 0.0 {
                    continue;
                }
                for &(s, next) in &self.successors[c] {
                    stepped[next] += mass * self.matrix.prob(c, s);
                }
            }
            std::mem::swap(&mut dist, &mut stepped);
        }

        Ok(dist
            .iter()
            .enumerate()
            .filter(|&(_, &mass)| mass != 0.0)
            .map(|(c, &mass)| mass * self.matrix.prob(c, to))
            .sum())
    }

    /// Returns `true` if `context` was observed as a window.
    pub fn contains_context(&self, context: &[S]) -> bool {
        self.contexts.contains(context)
    }
}

impl<S> NOrderMarkovChain<S> {
    /// The order `k`: number of symbols in a context.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Distinct contexts in order of first occurrence.
    pub fn contexts(&self) -> &[Vec<S>] {
        self.contexts.states()
    }

    /// Distinct symbols in order of first occurrence.
    pub fn states(&self) -> &[S] {
        self.states.states()
    }

    /// The contexts × states one-step matrix.
    pub fn matrix(&self) -> &TransitionMatrix {
        &self.matrix
    }

    /// Index of the context reached from context `context` by emitting
    /// symbol `state`, or `None` if that transition was never observed.
    pub fn successor(&self, context: usize, state: usize) -> Option<usize> {
        let row = self.successors.get(context)?;
        row.binary_search_by_key(&state, |&(s, _)| s)
            .ok()
            .map(|i| row[i].1)
    }

    /// Number of stored `(context, symbol) -> context` transitions.
    ///
    /// Equals the number of nonzero entries of [`Self::matrix`].
    pub fn n_successors(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }
}
