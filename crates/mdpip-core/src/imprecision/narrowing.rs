use tracing::{debug, trace};

use crate::{
    imprecision::{
        config::ImprecisionConfig,
        error::ImprecisionError,
        generator::ImprecisionGenerator,
        relaxed::RelaxedRangeGenerator,
    },
    probability::{
        ids::{Action, State},
        range::{ProbabilityRange, fuzzy_equals},
    },
};

/// Distance under which a chosen probability counts as sitting on an endpoint.
pub const ENDPOINT_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy)]
/// Tightens an original range around a probability a solver has committed to.
///
/// The window reaches at most `step_variation` to each side of the chosen
/// value and is always enclosed by the original range of the wrapped
/// generator. When the choice sits on an endpoint, that endpoint stays pinned
/// and only the inward side moves.
pub struct NarrowingRangeGenerator<'a> {
    base: &'a RelaxedRangeGenerator,
    step_variation: f64,
}

impl<'a> NarrowingRangeGenerator<'a> {
    pub fn new(
        base: &'a RelaxedRangeGenerator,
        step_variation: f64,
    ) -> Result<Self, ImprecisionError> {
        if !step_variation.is_finite() || step_variation < 0.0 {
            return Err(ImprecisionError::InvalidStepVariation {
                value: step_variation,
            });
        }
        Ok(NarrowingRangeGenerator {
            base,
            step_variation,
        })
    }

    pub fn from_config(
        base: &'a RelaxedRangeGenerator,
        config: &ImprecisionConfig,
    ) -> Result<Self, ImprecisionError> {
        Self::new(base, config.step_variation)
    }

    /// The generator holding the original ranges.
    pub fn base(&self) -> &'a RelaxedRangeGenerator {
        self.base
    }

    pub fn step_variation(&self) -> f64 {
        self.step_variation
    }
}

impl ImprecisionGenerator for NarrowingRangeGenerator<'_> {
    fn generate_range(
        &self,
        source: &State,
        action: &Action,
        target: &State,
        actual_prob: f64,
    ) -> Result<ProbabilityRange, ImprecisionError> {
        let original = self.base.original_range(source, action, target)?;
        if !original.is_within_unit() {
            return Err(ImprecisionError::RangeOutsideUnit {
                state: source.clone(),
                action: action.clone(),
                target: target.clone(),
                range: original,
            });
        }

        let (lo, hi) = (original.low(), original.high());
        let at_low = fuzzy_equals(actual_prob, lo, ENDPOINT_TOLERANCE);
        let at_high = fuzzy_equals(actual_prob, hi, ENDPOINT_TOLERANCE);
        if !(at_low || at_high || original.contains(actual_prob)) {
            debug!(
                %source, %action, %target, actual_prob, %original,
                "rejected probability outside original range"
            );
            return Err(ImprecisionError::ProbabilityOutsideRange {
                value: actual_prob,
                range: original,
            });
        }

        let step = self.step_variation;
        let (case, window) = if at_low {
            // Pinned at lo; a choice a hair below lo still yields [lo, lo] at worst.
            let upper = (actual_prob + step).min(hi).max(lo);
            ("lower", ProbabilityRange::closed(lo, upper)?)
        } else if at_high {
            let lower = (actual_prob - step).max(lo).min(hi);
            ("upper", ProbabilityRange::closed(lower, hi)?)
        } else {
            (
                "interior",
                ProbabilityRange::closed(actual_prob - step, actual_prob + step)?,
            )
        };

        let result = window.intersection(&original)?;
        if !original.encloses(&result) {
            return Err(ImprecisionError::RangeEscapesOriginal { result, original });
        }

        trace!(%source, %action, %target, case, actual_prob, %original, %result, "narrowed range");
        Ok(result)
    }
}
