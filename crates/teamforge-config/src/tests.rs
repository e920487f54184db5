//! Tests for search configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        enable_pruning = false
        capacity_bound = "derived"
        log_node_scores = true
    "#;

    let config = SearchConfig::from_toml_str(toml).unwrap();
    assert!(!config.enable_pruning);
    assert_eq!(config.capacity_bound, CapacityBound::Derived);
    assert!(config.log_node_scores);
}

#[test]
fn test_toml_fixed_bound() {
    let config = SearchConfig::from_toml_str("capacity_bound = { fixed = 12 }").unwrap();
    assert_eq!(config.capacity_bound, CapacityBound::Fixed(12));
    assert!(config.enable_pruning);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        enable_pruning: true
        capacity_bound:
          fixed: 8
    "#;

    let config = SearchConfig::from_yaml_str(yaml).unwrap();
    assert!(config.enable_pruning);
    assert_eq!(config.capacity_bound, CapacityBound::LEGACY);
}

#[test]
fn test_empty_uses_defaults() {
    let config = SearchConfig::from_toml_str("").unwrap();
    assert_eq!(config, SearchConfig::default());
}

#[test]
fn test_zero_fixed_bound_rejected() {
    let err = SearchConfig::from_toml_str("capacity_bound = { fixed = 0 }").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_unknown_bound_rejected() {
    let err = SearchConfig::from_toml_str("capacity_bound = \"sometimes\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file() {
    let err = SearchConfig::load("/nonexistent/teamforge.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_total_slots() {
    assert_eq!(CapacityBound::Derived.total_slots(2), 8);
    assert_eq!(CapacityBound::Derived.total_slots(3), 12);
    assert_eq!(CapacityBound::LEGACY.total_slots(3), 8);
}

#[test]
fn test_builder() {
    let config = SearchConfig::new()
        .with_pruning(false)
        .with_capacity_bound(CapacityBound::LEGACY)
        .with_node_score_logging(true);

    assert!(!config.enable_pruning);
    assert_eq!(config.capacity_bound, CapacityBound::Fixed(8));
    assert!(config.log_node_scores);
}
