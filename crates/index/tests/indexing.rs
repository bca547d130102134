//! Randomized indexing invariants.

use std::collections::HashSet;

use mchain_index::StateIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_sequence(len: usize, alphabet: u32, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(0..alphabet)).collect()
}

#[test]
fn positions_round_trip_to_items() {
    for seed in 0..20 {
        let seq = random_sequence(500, 17, seed);
        let (index, positions) = StateIndex::encode(seq.iter().copied());
        assert_eq!(positions.len(), seq.len());
        for (item, &pos) in seq.iter().zip(&positions) {
            assert_eq!(index.state(pos), Some(item), "seed {seed}");
        }
    }
}

#[test]
fn states_are_distinct_and_complete() {
    let seq = random_sequence(1000, 40, 7);
    let index = StateIndex::from_items(seq.iter().copied());

    let unique: HashSet<u32> = seq.iter().copied().collect();
    assert_eq!(index.len(), unique.len());

    let stored: HashSet<u32> = index.states().iter().copied().collect();
    assert_eq!(stored, unique);
}

#[test]
fn order_follows_first_occurrence() {
    let seq = random_sequence(300, 12, 99);
    let index = StateIndex::from_items(seq.iter().copied());

    let mut seen = HashSet::new();
    let expected: Vec<u32> = seq.iter().copied().filter(|s| seen.insert(*s)).collect();
    assert_eq!(index.states(), expected.as_slice());
}

#[test]
fn large_input_with_many_states() {
    // Every item distinct: a quadratic lookup would be noticeably slow here.
    let n = 200_000;
    let (index, positions) = StateIndex::encode(0..n);
    assert_eq!(index.len(), n);
    assert_eq!(positions[n - 1], n - 1);
}
