//! Dense integer indexing for observed symbols.
//!
//! A [`StateIndex`] assigns every distinct item of a sequence a position in
//! `0..len`, in order of first occurrence. Items are compared structurally
//! (`Eq + Hash`), so plain symbols and `Vec<S>` contexts index the same way.
//!
//! # Quick start
//!
//! ```
//! use mchain_index::StateIndex;
//!
//! let (index, positions) = StateIndex::encode(['a', 'b', 'a', 'c']);
//! assert_eq!(index.states(), &['a', 'b', 'c']);
//! assert_eq!(positions, vec![0, 1, 0, 2]);
//! assert_eq!(index.position(&'c'), Some(2));
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Ordered set of distinct items with a hashed item-to-position lookup.
///
/// # Invariants
///
/// - `states[lookup[x]] == x` for every stored item `x`
/// - No item appears twice in `states`
#[derive(Debug, Clone)]
pub struct StateIndex<T> {
    states: Vec<T>,
    lookup: HashMap<T, usize>,
}

impl<T: Eq + Hash + Clone> StateIndex<T> {
    /// Builds an index of the distinct items in `items`.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::encode(items).0
    }

    /// Builds an index and returns the position of every input item.
    ///
    /// Both are produced in a single pass; `positions[i]` is the index of the
    /// i-th input item.
    pub fn encode<I>(items: I) -> (Self, Vec<usize>)
    where
        I: IntoIterator<Item = T>,
    {
        let iter = items.into_iter();
        let mut index = Self {
            states: Vec::new(),
            lookup: HashMap::new(),
        };
        let mut positions = Vec::with_capacity(iter.size_hint().0);

        for item in iter {
            let next = index.states.len();
            let pos = *index.lookup.entry(item).or_insert_with_key(|key| {
                index.states.push(key.clone());
                next
            });
            positions.push(pos);
        }

        tracing::trace!(
            n_items = positions.len(),
            n_distinct = index.states.len(),
            "indexed sequence"
        );
        (index, positions)
    }

    /// Returns the position of `item`, or `None` if it was never observed.
    pub fn position<Q>(&self, item: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.lookup.get(item).copied()
    }

    /// Returns `true` if `item` was observed.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.lookup.contains_key(item)
    }
}

impl<T> StateIndex<T> {
    /// Returns the item stored at `position`.
    pub fn state(&self, position: usize) -> Option<&T> {
        self.states.get(position)
    }

    /// Returns all distinct items in order of first occurrence.
    pub fn states(&self) -> &[T] {
        &self.states
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if nothing was indexed.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterates over `(position, item)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.states.iter().enumerate()
    }
}
