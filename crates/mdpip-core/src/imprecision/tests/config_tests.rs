use crate::imprecision::config::{ConfigError, ImprecisionConfig};

#[test]
fn default_yaml_matches_default_values() {
    let config = ImprecisionConfig::from_default_yaml().expect("default yaml should parse");
    assert_eq!(config, ImprecisionConfig::default());
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config = ImprecisionConfig::from_yaml_str("max_relaxation: 0.3\n").expect("valid yaml");
    assert_eq!(config.max_relaxation, 0.3);
    assert_eq!(config.step_variation, 0.05);
}

#[test]
fn invalid_values_are_rejected() {
    let err = ImprecisionConfig::from_yaml_str("max_relaxation: 1.5\n").expect_err("δ > 1");
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = ImprecisionConfig::from_yaml_str("step_variation: -0.1\n").expect_err("step < 0");
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = ImprecisionConfig::from_yaml_str("max_relaxation: [1, 2]\n")
        .expect_err("not a number");
    assert!(matches!(err, ConfigError::Yaml(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = ImprecisionConfig::from_yaml_path("/nonexistent/imprecision.yaml")
        .expect_err("file does not exist");
    assert!(matches!(err, ConfigError::Io(_)));
    assert!(err.to_string().starts_with("failed to read config file"));
}
