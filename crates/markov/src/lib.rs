//! Empirical discrete-time Markov chains.
//!
//! Two chain variants are built from an observed sequence of symbols:
//!
//! - [`MarkovChain`]: first order, transitions between single symbols.
//! - [`NOrderMarkovChain`]: order `k`, transitions from a window of `k`
//!   symbols to the next symbol.
//!
//! Both answer the same two queries: the ranked distribution of next states
//! (`next`) and the probability of a given state after exactly `n`
//! transitions (`probability`).
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │  index       │────▶│  count +       │────▶│  query           │
//!  │  (states)    │     │  normalize (P) │     │  (next, P^n)     │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! Unknown states never fail: `next` returns an empty list and
//! `probability` returns 0.0.
//!
//! # Quick start
//!
//! ```rust
//! use mchain_markov::{MarkovChain, NOrderMarkovChain};
//!
//! let seq: Vec<u32> = (1..=9).cycle().take(27).collect();
//!
//! let chain = MarkovChain::create(&seq).unwrap();
//! assert_eq!(*chain.next(&1)[0].state(), 2);
//! assert_eq!(chain.probability(&1, &3, 2).unwrap(), 1.0);
//!
//! let chain = NOrderMarkovChain::create(&seq, 2).unwrap();
//! assert_eq!(*chain.next(&[8, 9])[0].state(), 1);
//! ```

pub mod chain;
pub mod config;
pub mod error;
pub mod n_order;
pub mod transition;

pub(crate) mod cache;

pub use chain::MarkovChain;
pub use config::ChainConfig;
pub use error::ChainError;
pub use mchain_matrix::{MatrixError, TransitionMatrix};
pub use n_order::NOrderMarkovChain;
pub use transition::Transition;
