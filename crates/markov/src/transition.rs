//! The `(state, probability)` record returned by `next` queries.

use ndarray::ArrayView1;

/// A possible next state together with its one-step probability.
///
/// Only constructed for strictly positive probabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S> {
    state: S,
    probability: f64,
}

impl<S> Transition<S> {
    /// Returns `None` unless `probability > 0`.
    pub(crate) fn new(state: S, probability: f64) -> Option<Self> {
        (probability > 0.0).then_some(Self { state, probability })
    }

    /// The destination state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Probability of moving to [`Self::state`] in one step, in `(0, 1]`.
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Splits the record into its parts.
    pub fn into_parts(self) -> (S, f64) {
        (self.state, self.probability)
    }
}

/// Ranks one matrix row into transitions.
///
/// Zero entries are dropped. Order is descending probability; equal
/// probabilities keep ascending column order.
pub(crate) fn ranked<S: Clone>(states: &[S], row: ArrayView1<'_, f64>) -> Vec<Transition<S>> {
    let mut out: Vec<Transition<S>> = states
        .iter()
        .zip(row.iter())
        .filter_map(|(state, &p)| Transition::new(state.clone(), p))
        .collect();
    // Stable sort preserves column order among ties.
    out.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn new_rejects_non_positive() {
        assert!(Transition::new('a', 0.0).is_none());
        assert!(Transition::new('a', -0.1).is_none());
        assert!(Transition::new('a', f64::NAN).is_none());
        assert!(Transition::new('a', 0.25).is_some());
    }

    #[test]
    fn accessors() {
        let t = Transition::new("sun", 0.75).unwrap();
        assert_eq!(*t.state(), "sun");
        assert_eq!(t.probability(), 0.75);
        assert_eq!(t.into_parts(), ("sun", 0.75));
    }

    #[test]
    fn ranked_orders_by_probability() {
        let row = array![0.2, 0.0, 0.5, 0.3];
        let out = ranked(&['a', 'b', 'c', 'd'], row.view());
        let states: Vec<char> = out.iter().map(|t| *t.state()).collect();
        assert_eq!(states, vec!['c', 'd', 'a']);
    }

    #[test]
    fn ranked_ties_keep_column_order() {
        let row = array![0.25, 0.25, 0.0, 0.25, 0.25];
        let out = ranked(&[10, 20, 30, 40, 50], row.view());
        let states: Vec<i32> = out.iter().map(|t| *t.state()).collect();
        assert_eq!(states, vec![10, 20, 40, 50]);
    }

    #[test]
    fn ranked_zero_row_is_empty() {
        let row = array![0.0, 0.0];
        assert!(ranked(&[1, 2], row.view()).is_empty());
    }
}
