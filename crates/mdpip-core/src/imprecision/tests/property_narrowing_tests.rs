use std::collections::HashMap;

use proptest::prelude::*;

use crate::{
    imprecision::{
        error::ImprecisionError, generator::ImprecisionGenerator,
        narrowing::{ENDPOINT_TOLERANCE, NarrowingRangeGenerator}, relaxed::RelaxedRangeGenerator,
    },
    probability::{
        distribution::ProbabilityDistribution,
        ids::{Action, State, TransitionKey},
    },
};

fn two_outcome_model(p: f64) -> HashMap<TransitionKey, ProbabilityDistribution> {
    let mut model = HashMap::new();
    model.insert(
        TransitionKey::new("s", "a"),
        ProbabilityDistribution::new(vec![("hit", p), ("miss", 1.0 - p)])
            .expect("complementary masses are valid"),
    );
    model
}

proptest! {
    #[test]
    fn narrowed_range_is_enclosed_by_original(
        p in 0.0f64..=1.0,
        delta in 0.0f64..=1.0,
        step in 0.0f64..=1.0,
        position in 0.0f64..=1.0,
    ) {
        let base = RelaxedRangeGenerator::new(&two_outcome_model(p), delta).expect("valid delta");
        let narrowing = NarrowingRangeGenerator::new(&base, step).expect("valid step");
        let (s, a, hit) = (State::from("s"), Action::from("a"), State::from("hit"));

        let original = base.original_range(&s, &a, &hit).expect("cached");
        prop_assert!(original.is_within_unit());

        let actual = (original.low() + position * original.width()).min(original.high());
        let narrowed = narrowing
            .generate_range(&s, &a, &hit, actual)
            .expect("admissible choice");

        prop_assert!(original.encloses(&narrowed));
        // An endpoint hit may sit up to ENDPOINT_TOLERANCE inside the range.
        prop_assert!(narrowed.width() <= 2.0 * step + 2.0 * ENDPOINT_TOLERANCE);
        prop_assert!(narrowed.low() <= actual + 1e-9 && actual <= narrowed.high() + 1e-9);
    }

    #[test]
    fn choices_beyond_the_original_range_are_rejected(
        p in 0.0f64..=1.0,
        delta in 0.0f64..=0.5,
        offset in 1e-5f64..0.5,
    ) {
        let base = RelaxedRangeGenerator::new(&two_outcome_model(p), delta).expect("valid delta");
        let narrowing = NarrowingRangeGenerator::new(&base, 0.05).expect("valid step");
        let (s, a, hit) = (State::from("s"), Action::from("a"), State::from("hit"));
        let original = base.original_range(&s, &a, &hit).expect("cached");

        for actual in [original.low() - offset, original.high() + offset] {
            let err = narrowing.generate_range(&s, &a, &hit, actual);
            let rejected = matches!(err, Err(ImprecisionError::ProbabilityOutsideRange { .. }));
            prop_assert!(rejected);
        }
    }
}
