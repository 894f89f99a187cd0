use super::*;

#[test]
fn test_spec_defaults() {
    let spec = EvalSpec::new("treatment_group_high");
    assert_eq!(spec.privileged_value, 1);
    assert_eq!(spec.favorable_label, 1);
    assert_eq!(spec.thresholds.disparate_impact, 0.8);
    assert_eq!(spec.thresholds.mean_difference, 0.2);
    assert_eq!(spec.significance, 0.05);
    assert!(validate_spec(&spec).is_ok());
}

#[test]
fn test_parse_minimal_yaml() {
    let spec: EvalSpec = serde_yaml::from_str("attribute: gender\n").unwrap();
    assert_eq!(spec.attribute, "gender");
    assert_eq!(spec.privileged_value, 1);
    assert_eq!(spec.thresholds, Thresholds::default());
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
attribute: treatment_group_high
privileged_value: 1
favorable_label: 1
thresholds:
  disparate_impact: 0.9
  mean_difference: 0.1
significance: 0.01
"#;
    let spec: EvalSpec = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(spec.thresholds.disparate_impact, 0.9);
    assert_eq!(spec.thresholds.mean_difference, 0.1);
    assert_eq!(spec.significance, 0.01);
    assert!(validate_spec(&spec).is_ok());
}

#[test]
fn test_yaml_round_trip() {
    let spec = EvalSpec::new("race");
    let yaml = serde_yaml::to_string(&spec).unwrap();
    let parsed: EvalSpec = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed.attribute, spec.attribute);
    assert_eq!(parsed.thresholds, spec.thresholds);
}

#[test]
fn test_validate_empty_attribute() {
    let spec = EvalSpec::new("  ");
    assert!(matches!(
        validate_spec(&spec),
        Err(ValidationError::EmptyAttribute)
    ));
}

#[test]
fn test_validate_non_binary_privileged_value() {
    let mut spec = EvalSpec::new("gender");
    spec.privileged_value = 2;
    assert!(matches!(
        validate_spec(&spec),
        Err(ValidationError::InvalidPrivilegedValue(2))
    ));
}

#[test]
fn test_validate_non_binary_favorable_label() {
    let mut spec = EvalSpec::new("gender");
    spec.favorable_label = 7;
    assert!(matches!(
        validate_spec(&spec),
        Err(ValidationError::InvalidFavorableLabel(7))
    ));
}

#[test]
fn test_validate_threshold_out_of_range() {
    let mut spec = EvalSpec::new("gender");
    spec.thresholds.disparate_impact = 0.0;
    assert!(matches!(
        validate_spec(&spec),
        Err(ValidationError::InvalidDisparateImpactThreshold(_))
    ));

    let mut spec = EvalSpec::new("gender");
    spec.thresholds.mean_difference = 1.5;
    assert!(matches!(
        validate_spec(&spec),
        Err(ValidationError::InvalidMeanDifferenceThreshold(_))
    ));
}

#[test]
fn test_validate_unsupported_significance() {
    let mut spec = EvalSpec::new("gender");
    spec.significance = 0.2;
    assert!(matches!(
        validate_spec(&spec),
        Err(ValidationError::UnsupportedSignificance(_))
    ));
}
