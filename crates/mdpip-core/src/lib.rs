mod imprecision;
mod probability;

pub use imprecision::config::{ConfigError, ImprecisionConfig};
pub use imprecision::error::ImprecisionError;
pub use imprecision::generator::{ImprecisionGenerator, TransitionModel};
pub use imprecision::narrowing::{ENDPOINT_TOLERANCE, NarrowingRangeGenerator};
pub use imprecision::relaxed::RelaxedRangeGenerator;
pub use imprecision::snapshot::{RangeSnapshot, RangeTableSnapshot};
pub use probability::distribution::{
    DISTRIBUTION_TOLERANCE, DistributionIter, ProbabilityDistribution,
};
pub use probability::error::{DistributionError, RangeError};
pub use probability::ids::{Action, State, TransitionKey};
pub use probability::range::{ProbabilityRange, fuzzy_equals};
