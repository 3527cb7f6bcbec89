mod config_tests;
mod property_narrowing_tests;

use std::collections::HashMap;

use crate::probability::{distribution::ProbabilityDistribution, ids::TransitionKey};

/// `s0 --go--> {s1: 0.6, s2: 0.35, s3: 0.05}`, `s1 --stay--> {s1: 1.0}`, `s3 --stop--> {}`.
pub(super) fn nominal_model() -> HashMap<TransitionKey, ProbabilityDistribution> {
    let mut model = HashMap::new();
    model.insert(
        TransitionKey::new("s0", "go"),
        ProbabilityDistribution::new(vec![("s1", 0.6), ("s2", 0.35), ("s3", 0.05)])
            .expect("valid distribution"),
    );
    model.insert(
        TransitionKey::new("s1", "stay"),
        ProbabilityDistribution::new(vec![("s1", 1.0)]).expect("valid distribution"),
    );
    model.insert(TransitionKey::new("s3", "stop"), ProbabilityDistribution::empty());
    model
}

pub(super) fn assert_range_close(
    range: crate::probability::range::ProbabilityRange,
    low: f64,
    high: f64,
) {
    assert!(
        (range.low() - low).abs() < 1e-9 && (range.high() - high).abs() < 1e-9,
        "expected [{low}, {high}], got {range}"
    );
}
