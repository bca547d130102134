//! Integration tests for ChainError variants.

use mchain_markov::{ChainConfig, ChainError, MarkovChain, NOrderMarkovChain};

#[test]
fn error_order_zero() {
    let result = NOrderMarkovChain::create(&[1, 2, 3], 0);
    assert!(matches!(
        result,
        Err(ChainError::InvalidOrder { order: 0, len: 3 })
    ));
}

#[test]
fn error_order_not_shorter_than_sequence() {
    let result = NOrderMarkovChain::create(&[1, 2, 3], 4);
    assert!(matches!(
        result,
        Err(ChainError::InvalidOrder { order: 4, len: 3 })
    ));
}

#[test]
fn error_negative_steps_first_order() {
    let chain = MarkovChain::create(&[1, 2, 1]).unwrap();
    assert!(matches!(
        chain.probability(&1, &2, -5),
        Err(ChainError::NegativeSteps { n: -5 })
    ));
}

#[test]
fn error_negative_steps_order_k() {
    let chain = NOrderMarkovChain::create(&[1, 2, 1, 2], 2).unwrap();
    assert!(matches!(
        chain.probability(&[1, 2], &1, i32::MIN),
        Err(ChainError::NegativeSteps { n: i32::MIN })
    ));
}

#[test]
fn error_invalid_config_first_order() {
    let config = ChainConfig::new().with_tolerance(f64::NAN);
    let result = MarkovChain::create_with_config(&[1, 2], &config);
    assert!(matches!(result, Err(ChainError::InvalidConfig { .. })));
}

#[test]
fn error_invalid_config_checked_before_order() {
    let config = ChainConfig::new().with_tolerance(0.0);
    let result = NOrderMarkovChain::create_with_config(&[1], 5, &config);
    assert!(matches!(result, Err(ChainError::InvalidConfig { .. })));
}

#[test]
fn unknown_states_are_not_errors() {
    let chain = MarkovChain::create(&['a', 'b']).unwrap();
    assert!(chain.next(&'z').is_empty());
    for n in 0..4 {
        assert_eq!(chain.probability(&'z', &'a', n).unwrap(), 0.0);
        assert_eq!(chain.probability(&'a', &'z', n).unwrap(), 0.0);
    }
}
