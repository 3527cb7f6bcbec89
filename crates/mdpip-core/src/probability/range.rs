use std::fmt;

use serde::Serialize;

use crate::probability::error::RangeError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
/// Closed interval `[low, high]` of plausible probabilities.
///
/// Bounds are finite and ordered. Ranges handed out by the imprecision
/// generators are additionally sub-intervals of `[0, 1]`.
pub struct ProbabilityRange {
    low: f64,
    high: f64,
}

impl ProbabilityRange {
    /// Build `[low, high]`, failing when a bound is not finite or `low > high`.
    pub fn closed(low: f64, high: f64) -> Result<Self, RangeError> {
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(RangeError::InvalidBounds { low, high });
        }
        Ok(ProbabilityRange { low, high })
    }

    /// The whole probability scale `[0, 1]`.
    pub fn unit() -> Self {
        ProbabilityRange {
            low: 0.0,
            high: 1.0,
        }
    }

    /// `[max(0, center - radius), min(1, center + radius)]`.
    pub fn around(center: f64, radius: f64) -> Result<Self, RangeError> {
        Self::closed((center - radius).max(0.0), (center + radius).min(1.0))
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }

    /// True iff `other` lies entirely inside `self`.
    pub fn encloses(&self, other: &ProbabilityRange) -> bool {
        self.low <= other.low && other.high <= self.high
    }

    pub fn is_within_unit(&self) -> bool {
        Self::unit().encloses(self)
    }

    /// Largest range enclosed by both; fails if they share no point.
    pub fn intersection(&self, other: &ProbabilityRange) -> Result<Self, RangeError> {
        let low = self.low.max(other.low);
        let high = self.high.min(other.high);
        if low > high {
            return Err(RangeError::Disconnected {
                a_low: self.low,
                a_high: self.high,
                b_low: other.low,
                b_high: other.high,
            });
        }
        Ok(ProbabilityRange { low, high })
    }
}

impl fmt::Display for ProbabilityRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

/// `|a - b| <= tolerance`, also true when both are the same infinity.
pub fn fuzzy_equals(a: f64, b: f64, tolerance: f64) -> bool {
    a == b || (a - b).abs() <= tolerance
}
