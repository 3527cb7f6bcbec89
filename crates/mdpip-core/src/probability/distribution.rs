use std::{
    collections::HashMap,
    hash::{Hash, Hasher},
};

use crate::probability::{error::DistributionError, ids::State};

/// Maximum distance between the sum of a non-empty distribution and 1.0.
pub const DISTRIBUTION_TOLERANCE: f64 = 0.001;

#[derive(Debug, Clone)]
/// Immutable, validated mapping from successor state to probability mass.
///
/// A non-empty distribution always sums to 1 within [`DISTRIBUTION_TOLERANCE`].
/// The empty distribution is valid and marks a state without successors.
/// Iteration follows the order the entries were given in, and stays the same
/// for the lifetime of the instance.
pub struct ProbabilityDistribution {
    entries: Vec<(State, f64)>,
    index: HashMap<State, usize>,
    cdf: Vec<f64>,
}

impl ProbabilityDistribution {
    /// Validate `entries` and build a read-only distribution from them.
    ///
    /// Accepts any source of `(state, mass)` pairs, maps and vectors alike.
    pub fn new<I, S>(entries: I) -> Result<Self, DistributionError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<State>,
    {
        let entries = entries.into_iter();
        let mut stored = Vec::with_capacity(entries.size_hint().0);
        let mut index = HashMap::with_capacity(entries.size_hint().0);
        let mut cdf = Vec::with_capacity(entries.size_hint().0);
        let mut total = 0.0_f64;

        for (state, mass) in entries {
            let state = state.into();
            if !mass.is_finite() || !(0.0..=1.0).contains(&mass) {
                return Err(DistributionError::InvalidMass { state, value: mass });
            }
            if index.contains_key(&state) {
                return Err(DistributionError::DuplicateState { state });
            }

            // Fold -0.0 into 0.0 so equal distributions hash equally.
            let mass = if mass == 0.0 { 0.0 } else { mass };
            total += mass;
            cdf.push(total);
            index.insert(state.clone(), stored.len());
            stored.push((state, mass));
        }

        if !stored.is_empty() && (1.0 - total).abs() >= DISTRIBUTION_TOLERANCE {
            return Err(DistributionError::InvalidSum {
                sum: total,
                tolerance: DISTRIBUTION_TOLERANCE,
            });
        }

        Ok(ProbabilityDistribution {
            entries: stored,
            index,
            cdf,
        })
    }

    /// Distribution of a terminal state: no successors at all.
    pub fn empty() -> Self {
        ProbabilityDistribution {
            entries: Vec::new(),
            index: HashMap::new(),
            cdf: Vec::new(),
        }
    }

    /// True iff there are no successors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of listed successors, including zero-mass ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Mass of `state`, or `0.0` when the state is not listed.
    pub fn probability_for(&self, state: &State) -> f64 {
        self.index
            .get(state)
            .map(|idx| self.entries[*idx].1)
            .unwrap_or(0.0)
    }

    /// Iterate `(state, mass)` pairs in a stable order.
    pub fn iter(&self) -> DistributionIter<'_> {
        DistributionIter {
            inner: self.entries.iter(),
        }
    }

    /// States that can actually be reached (mass > 0).
    pub fn support(&self) -> impl Iterator<Item = &State> + '_ {
        self.entries
            .iter()
            .filter(|(_, mass)| *mass > 0.0)
            .map(|(state, _)| state)
    }

    /// Sum of all masses: `0.0` when empty, otherwise within tolerance of 1.
    pub fn total(&self) -> f64 {
        self.cdf.last().copied().unwrap_or(0.0)
    }

    /// Pick a successor from a uniform sample in `[0, 1)` by inverting the CDF.
    /// Returns `None` for the empty distribution.
    pub fn sample(&self, sample: f64) -> Option<&State> {
        let last_reachable = self.entries.iter().rposition(|(_, mass)| *mass > 0.0)?;

        let chosen_idx = self
            .cdf
            .partition_point(|p| *p <= sample)
            .min(last_reachable);
        self.entries.get(chosen_idx).map(|(state, _)| state)
    }

    fn sorted_entries(&self) -> Vec<&(State, f64)> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));
        sorted
    }
}

impl PartialEq for ProbabilityDistribution {
    /// Set equality over `(state, mass)` pairs; insertion order is irrelevant.
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().all(|(state, mass)| {
                other
                    .index
                    .get(state)
                    .is_some_and(|idx| other.entries[*idx].1 == *mass)
            })
    }
}

// Masses are validated finite, so equality is reflexive.
impl Eq for ProbabilityDistribution {}

impl Hash for ProbabilityDistribution {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let sorted = self.sorted_entries();
        sorted.len().hash(state);
        for (key, mass) in sorted {
            key.hash(state);
            mass.to_bits().hash(state);
        }
    }
}

/// Iterator over the `(state, mass)` pairs of a [`ProbabilityDistribution`].
#[derive(Debug, Clone)]
pub struct DistributionIter<'a> {
    inner: std::slice::Iter<'a, (State, f64)>,
}

impl<'a> Iterator for DistributionIter<'a> {
    type Item = (&'a State, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(state, mass)| (state, *mass))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for DistributionIter<'_> {}

impl<'a> IntoIterator for &'a ProbabilityDistribution {
    type Item = (&'a State, f64);
    type IntoIter = DistributionIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
