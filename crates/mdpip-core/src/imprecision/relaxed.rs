use std::collections::HashMap;

use tracing::debug;

use crate::{
    imprecision::{
        config::ImprecisionConfig,
        error::ImprecisionError,
        generator::{ImprecisionGenerator, TransitionModel},
        snapshot::{RangeSnapshot, RangeTableSnapshot},
    },
    probability::{
        ids::{Action, State, TransitionKey},
        range::ProbabilityRange,
    },
};

#[derive(Debug, Clone)]
/// Turns every nominal transition probability `p` into `[max(0, p - δ), min(1, p + δ)]`.
///
/// All ranges are computed once, at construction; queries are plain lookups.
/// The probability passed to [`ImprecisionGenerator::generate_range`] is ignored.
pub struct RelaxedRangeGenerator {
    max_relaxation: f64,
    cache: HashMap<TransitionKey, HashMap<State, ProbabilityRange>>,
}

impl RelaxedRangeGenerator {
    /// Relax every transition of `model` by `max_relaxation`.
    pub fn new(
        model: &impl TransitionModel,
        max_relaxation: f64,
    ) -> Result<Self, ImprecisionError> {
        if !max_relaxation.is_finite() || !(0.0..=1.0).contains(&max_relaxation) {
            return Err(ImprecisionError::InvalidRelaxation {
                value: max_relaxation,
            });
        }

        let mut cache = HashMap::new();
        let mut range_count = 0usize;
        for (key, distribution) in model.transitions() {
            let mut targets = HashMap::with_capacity(distribution.len());
            for (target, prob) in distribution {
                targets.insert(target.clone(), ProbabilityRange::around(prob, max_relaxation)?);
            }
            range_count += targets.len();
            cache.insert(key.clone(), targets);
        }

        debug!(
            max_relaxation,
            transitions = cache.len(),
            ranges = range_count,
            "built relaxed range cache"
        );

        Ok(RelaxedRangeGenerator {
            max_relaxation,
            cache,
        })
    }

    /// Relax every transition of `model` by `config.max_relaxation`.
    pub fn from_config(
        model: &impl TransitionModel,
        config: &ImprecisionConfig,
    ) -> Result<Self, ImprecisionError> {
        Self::new(model, config.max_relaxation)
    }

    /// Range computed at construction for `(source, action, target)`.
    pub fn original_range(
        &self,
        source: &State,
        action: &Action,
        target: &State,
    ) -> Result<ProbabilityRange, ImprecisionError> {
        let key = TransitionKey::new(source.clone(), action.clone());
        let targets = self
            .cache
            .get(&key)
            .ok_or_else(|| ImprecisionError::UnknownTransition {
                state: source.clone(),
                action: action.clone(),
            })?;

        targets
            .get(target)
            .copied()
            .ok_or_else(|| ImprecisionError::UnknownTarget {
                state: source.clone(),
                action: action.clone(),
                target: target.clone(),
            })
    }

    /// All original ranges of one `(source, action)` pair, keyed by target.
    pub fn ranges_for(&self, key: &TransitionKey) -> Option<&HashMap<State, ProbabilityRange>> {
        self.cache.get(key)
    }

    /// Number of cached `(source, action)` pairs.
    pub fn transition_count(&self) -> usize {
        self.cache.len()
    }

    pub fn max_relaxation(&self) -> f64 {
        self.max_relaxation
    }

    /// Serializable copy of the cache, ordered by source, action and target.
    pub fn snapshot(&self) -> RangeTableSnapshot {
        let mut ranges: Vec<RangeSnapshot> = self
            .cache
            .iter()
            .flat_map(|(key, targets)| {
                targets.iter().map(move |(target, range)| RangeSnapshot {
                    source: key.source().as_str().to_string(),
                    action: key.action().as_str().to_string(),
                    target: target.as_str().to_string(),
                    low: range.low(),
                    high: range.high(),
                })
            })
            .collect();
        ranges.sort_by(|a, b| {
            (&a.source, &a.action, &a.target).cmp(&(&b.source, &b.action, &b.target))
        });

        RangeTableSnapshot {
            schema_version: 1,
            max_relaxation: self.max_relaxation,
            range_count: ranges.len(),
            ranges,
        }
    }
}

impl ImprecisionGenerator for RelaxedRangeGenerator {
    fn generate_range(
        &self,
        source: &State,
        action: &Action,
        target: &State,
        _actual_prob: f64,
    ) -> Result<ProbabilityRange, ImprecisionError> {
        self.original_range(source, action, target)
    }
}
