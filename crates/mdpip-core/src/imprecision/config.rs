use std::{fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

const DEFAULT_IMPRECISION_CONFIG_YAML: &str =
    include_str!("../../config/imprecision.default.yaml");

/// Parameters of the imprecision generators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImprecisionConfig {
    /// Relaxation δ applied around every nominal probability.
    pub max_relaxation: f64,
    /// Half-width of a narrowed range around a chosen probability.
    pub step_variation: f64,
}

impl Default for ImprecisionConfig {
    fn default() -> Self {
        ImprecisionConfig {
            max_relaxation: 0.15,
            step_variation: 0.05,
        }
    }
}

impl ImprecisionConfig {
    /// Parse a config from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: ImprecisionConfig = serde_yaml::from_str(yaml).map_err(ConfigError::Yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from a YAML file path.
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let yaml = fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_yaml_str(&yaml)
    }

    /// Return the default YAML config included with this crate.
    pub fn default_yaml() -> &'static str {
        DEFAULT_IMPRECISION_CONFIG_YAML
    }

    /// Parse the default YAML config included with this crate.
    pub fn from_default_yaml() -> Result<Self, ConfigError> {
        Self::from_yaml_str(Self::default_yaml())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_relaxation.is_finite() || !(0.0..=1.0).contains(&self.max_relaxation) {
            return Err(ConfigError::Invalid(
                "max_relaxation must be finite and within [0, 1]".to_string(),
            ));
        }
        if !self.step_variation.is_finite() || self.step_variation < 0.0 {
            return Err(ConfigError::Invalid(
                "step_variation must be finite and >= 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Error type for loading and validating `ImprecisionConfig`.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "failed to read config file: {err}"),
            ConfigError::Yaml(err) => write!(f, "failed to parse config YAML: {err}"),
            ConfigError::Invalid(err) => write!(f, "invalid imprecision config: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}
