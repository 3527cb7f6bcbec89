use std::collections::{BTreeMap, HashMap};

use crate::{
    imprecision::error::ImprecisionError,
    probability::{
        distribution::ProbabilityDistribution,
        ids::{Action, State, TransitionKey},
        range::ProbabilityRange,
    },
};

/// Source of admissible probability ranges, queried by solvers once per
/// transition per relaxation round.
pub trait ImprecisionGenerator {
    /// Admissible range for `(source, action, target)` given the probability
    /// the caller currently holds for that transition.
    fn generate_range(
        &self,
        source: &State,
        action: &Action,
        target: &State,
        actual_prob: f64,
    ) -> Result<ProbabilityRange, ImprecisionError>;
}

/// Nominal transition structure of an MDP, as seen by the generators.
pub trait TransitionModel {
    /// Every `(source, action)` pair with its nominal successor distribution.
    fn transitions(&self) -> impl Iterator<Item = (&TransitionKey, &ProbabilityDistribution)>;
}

impl TransitionModel for HashMap<TransitionKey, ProbabilityDistribution> {
    fn transitions(&self) -> impl Iterator<Item = (&TransitionKey, &ProbabilityDistribution)> {
        self.iter()
    }
}

impl TransitionModel for BTreeMap<TransitionKey, ProbabilityDistribution> {
    fn transitions(&self) -> impl Iterator<Item = (&TransitionKey, &ProbabilityDistribution)> {
        self.iter()
    }
}
