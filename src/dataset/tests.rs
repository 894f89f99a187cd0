use super::*;

#[test]
fn test_from_records_valid() {
    let ds = Dataset::from_records(vec![Record::new(1, 0), Record::new(0, 1)]).unwrap();
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.records()[0], Record::new(1, 0));
}

#[test]
fn test_from_records_rejects_non_binary_label() {
    let err = Dataset::from_records(vec![Record::new(2, 0)]).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidValue {
            column: "label",
            row: 0,
            ..
        }
    ));
}

#[test]
fn test_from_columns_valid() {
    let ds = Dataset::from_columns(&[1.0, 0.0, 1.0], &[1.0, 1.0, 0.0]).unwrap();
    assert_eq!(ds.len(), 3);
    assert_eq!(ds.records()[2], Record::new(1, 0));
}

#[test]
fn test_from_columns_rejects_nan() {
    let err = Dataset::from_columns(&[1.0, f64::NAN], &[1.0, 0.0]).unwrap_err();
    assert!(matches!(
        err,
        Error::MissingValue {
            column: "label",
            row: 1
        }
    ));
}

#[test]
fn test_from_columns_rejects_non_binary() {
    let err = Dataset::from_columns(&[1.0, 0.5], &[1.0, 0.0]).unwrap_err();
    assert!(matches!(err, Error::InvalidValue { column: "label", .. }));
}

#[test]
fn test_from_columns_length_mismatch() {
    let err = Dataset::from_columns(&[1.0, 0.0], &[1.0]).unwrap_err();
    assert!(matches!(
        err,
        Error::LengthMismatch {
            labels: 2,
            protected: 1
        }
    ));
}

#[test]
fn test_dropping_missing_filters_nan_rows() {
    let ds =
        Dataset::from_columns_dropping_missing(&[1.0, f64::NAN, 0.0], &[0.0, 1.0, f64::NAN])
            .unwrap();
    // Only the first row survives: row 1 has a NaN label, row 2 a NaN protected value
    assert_eq!(ds.len(), 1);
    assert_eq!(ds.records()[0], Record::new(1, 0));
}

#[test]
fn test_dropping_missing_still_rejects_non_binary() {
    let err = Dataset::from_columns_dropping_missing(&[1.0, 3.0], &[0.0, 1.0]).unwrap_err();
    assert!(matches!(err, Error::InvalidValue { column: "label", .. }));
}

#[test]
fn test_deserialization_enforces_binary_invariant() {
    let err = serde_json::from_str::<Dataset>(r#"{"records":[{"label":7,"protected":9}]}"#)
        .unwrap_err();
    assert!(err.to_string().contains("Invalid label value"));
}

#[test]
fn test_deserialization_round_trip() {
    let ds = Dataset::from_records(vec![Record::new(1, 0), Record::new(0, 1)]).unwrap();
    let json = serde_json::to_string(&ds).unwrap();
    let parsed: Dataset = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, ds);
}

#[test]
fn test_weighted_deserialization_checks_lengths() {
    let json = r#"{"records":[{"label":1,"protected":0}],"weights":[1.0,2.0]}"#;
    let err = serde_json::from_str::<WeightedDataset>(json).unwrap_err();
    assert!(err.to_string().contains("Weights length mismatch"));
}

#[test]
fn test_weighted_deserialization_checks_binary_invariant() {
    let json = r#"{"records":[{"label":2,"protected":0}],"weights":[1.0]}"#;
    let err = serde_json::from_str::<WeightedDataset>(json).unwrap_err();
    assert!(err.to_string().contains("Invalid label value"));
}

#[test]
fn test_partition_split() {
    let ds = Dataset::from_columns(&[1.0, 0.0, 1.0, 0.0], &[1.0, 1.0, 0.0, 0.0]).unwrap();
    let partition = Partition::split(&ds, 1);

    assert_eq!(partition.privileged(), &[0, 1]);
    assert_eq!(partition.unprivileged(), &[2, 3]);
    assert_eq!(partition.len(), ds.len());
}

#[test]
fn test_partition_disjoint_and_exhaustive() {
    let ds = Dataset::from_columns(&[1.0, 1.0, 0.0], &[0.0, 1.0, 0.0]).unwrap();
    let partition = Partition::split(&ds, 1);

    let mut all: Vec<usize> = partition
        .privileged()
        .iter()
        .chain(partition.unprivileged())
        .copied()
        .collect();
    all.sort_unstable();
    assert_eq!(all, vec![0, 1, 2]);
}

#[test]
fn test_partition_empty_dataset() {
    let ds = Dataset::default();
    let partition = Partition::split(&ds, 1);
    assert!(partition.is_empty());
    assert_eq!(partition.len(), 0);
}
