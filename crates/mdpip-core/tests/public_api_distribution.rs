use std::collections::HashMap;

use mdpip_core::{DistributionError, ProbabilityDistribution, State};

#[test]
fn public_distribution_from_hash_map() {
    let mut masses = HashMap::new();
    masses.insert(State::from("left"), 0.25);
    masses.insert(State::from("right"), 0.75);

    let dist = ProbabilityDistribution::new(masses).expect("masses sum to 1");

    assert!(!dist.is_empty());
    assert_eq!(dist.len(), 2);
    assert_eq!(dist.probability_for(&State::from("right")), 0.75);
    assert_eq!(dist.probability_for(&State::from("up")), 0.0);
    assert!((dist.total() - 1.0).abs() < 1e-12);

    let reordered =
        ProbabilityDistribution::new(vec![("right", 0.75), ("left", 0.25)]).expect("valid");
    assert_eq!(dist, reordered);
}

#[test]
fn public_distribution_rejects_unnormalized_masses() {
    let err = ProbabilityDistribution::new(vec![("A", 0.5), ("B", 0.3)])
        .expect_err("sum 0.8 must be rejected");
    assert!(matches!(err, DistributionError::InvalidSum { .. }));
}

#[test]
fn public_empty_distribution_marks_terminal_state() {
    let dist = ProbabilityDistribution::new(Vec::<(State, f64)>::new()).expect("empty is valid");
    assert!(dist.is_empty());
    assert_eq!(dist.iter().count(), 0);
}
