use thiserror::Error;

use crate::probability::ids::State;

#[derive(Debug, Clone, PartialEq, Error)]
/// Error type for building a probability distribution.
pub enum DistributionError {
    #[error("invalid distribution: masses must sum to 1 within {tolerance} but sum to {sum}")]
    InvalidSum { sum: f64, tolerance: f64 },

    #[error("invalid mass {value} for state '{state}': must be finite and within [0, 1]")]
    InvalidMass { state: State, value: f64 },

    #[error("state '{state}' appears more than once in the distribution")]
    DuplicateState { state: State },
}

#[derive(Debug, Clone, PartialEq, Error)]
/// Error type for probability range arithmetic.
pub enum RangeError {
    #[error("invalid range bounds [{low}, {high}]: bounds must be finite and low <= high")]
    InvalidBounds { low: f64, high: f64 },

    #[error("ranges [{a_low}, {a_high}] and [{b_low}, {b_high}] do not intersect")]
    Disconnected {
        a_low: f64,
        a_high: f64,
        b_low: f64,
        b_high: f64,
    },
}
