use thiserror::Error;

use crate::probability::{
    error::RangeError,
    ids::{Action, State},
    range::ProbabilityRange,
};

#[derive(Debug, Clone, PartialEq, Error)]
/// Error type for building imprecision generators and querying admissible ranges.
pub enum ImprecisionError {
    #[error("max relaxation must be finite and within [0, 1], got {value}")]
    InvalidRelaxation { value: f64 },

    #[error("step variation must be finite and >= 0, got {value}")]
    InvalidStepVariation { value: f64 },

    #[error("no transition from state '{state}' by action '{action}'")]
    UnknownTransition { state: State, action: Action },

    #[error("transition ({state}, {action}) has no successor '{target}'")]
    UnknownTarget {
        state: State,
        action: Action,
        target: State,
    },

    #[error("original range {range} of ({state}, {action}, {target}) is not within [0, 1]")]
    RangeOutsideUnit {
        state: State,
        action: Action,
        target: State,
        range: ProbabilityRange,
    },

    #[error("{value} is not in {range}")]
    ProbabilityOutsideRange { value: f64, range: ProbabilityRange },

    #[error("narrowed range {result} escapes original range {original}")]
    RangeEscapesOriginal {
        result: ProbabilityRange,
        original: ProbabilityRange,
    },

    #[error(transparent)]
    Range(#[from] RangeError),
}
