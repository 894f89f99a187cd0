//! End-to-end bias evaluation
//!
//! The driver runs the whole pipeline in one synchronous pass:
//!
//! 1. Validate the spec and the dataset
//! 2. Partition records into privileged/unprivileged groups
//! 3. Measure fairness before mitigation
//! 4. Reweigh for independence
//! 5. Measure fairness after mitigation
//! 6. Assemble the report
//!
//! There are no retries and no partial results: the first error aborts
//! the evaluation and propagates unchanged. Invocations share no state,
//! so evaluating independent datasets concurrently is safe.

use crate::config::{validate_spec, EvalSpec};
use crate::dataset::{Dataset, Partition};
use crate::error::{Error, Result};
use crate::metrics::{chi_square_test, contingency_table, fairness};
use crate::report::EvaluationReport;
use crate::reweigh::reweigh;
use tracing::{debug, info};

/// Evaluate a dataset's fairness before and after reweighing.
///
/// # Example
///
/// ```
/// use equidad::{evaluate, Dataset, EvalSpec};
///
/// // Privileged group: 6 records, 3 favorable. Unprivileged: 4 records, 1 favorable.
/// let labels = [1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0];
/// let protected = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0];
/// let dataset = Dataset::from_columns(&labels, &protected)?;
///
/// let report = evaluate(&dataset, &EvalSpec::new("treatment_group_high"))?;
/// assert!(report.before_flags.significant_disparity);
/// assert!(!report.after_flags.significant_disparity);
/// # Ok::<(), equidad::Error>(())
/// ```
pub fn evaluate(dataset: &Dataset, spec: &EvalSpec) -> Result<EvaluationReport> {
    validate_spec(spec).map_err(|e| Error::ConfigError(e.to_string()))?;
    if dataset.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let partition = Partition::split(dataset, spec.privileged_value);
    debug!(
        attribute = %spec.attribute,
        privileged = partition.privileged().len(),
        unprivileged = partition.unprivileged().len(),
        "partitioned dataset"
    );

    let before = fairness::evaluate(dataset, &partition, spec.favorable_label)?;

    let weighted = reweigh(dataset)?;
    let after = fairness::evaluate_weighted(&weighted, &partition, spec.favorable_label)?;

    let independence = chi_square_test(&contingency_table(dataset), spec.significance)?;

    info!(
        attribute = %spec.attribute,
        di_before = before.disparate_impact,
        di_after = after.disparate_impact,
        "fairness evaluation complete"
    );

    Ok(EvaluationReport::new(
        spec,
        before,
        after,
        independence,
        &weighted,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_record_dataset() -> Dataset {
        let labels = [1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0];
        let protected = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0];
        Dataset::from_columns(&labels, &protected).unwrap()
    }

    #[test]
    fn test_before_and_after_results() {
        let report = evaluate(&ten_record_dataset(), &EvalSpec::new("group")).unwrap();

        assert!((report.before.disparate_impact - 0.5).abs() < 1e-12);
        assert!((report.before.mean_difference - (-0.25)).abs() < 1e-12);
        assert!(report.before_flags.significant_disparity);

        // Reweighing equalizes the rates
        assert!((report.after.disparate_impact - 1.0).abs() < 1e-9);
        assert!(report.after.mean_difference.abs() < 1e-9);
        assert!(!report.after_flags.significant_disparity);
        assert!(!report.after_flags.high_gap);
    }

    #[test]
    fn test_invalid_spec_aborts() {
        let mut spec = EvalSpec::new("group");
        spec.privileged_value = 3;
        let err = evaluate(&ten_record_dataset(), &spec).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_empty_dataset_aborts() {
        let err = evaluate(&Dataset::default(), &EvalSpec::new("group")).unwrap_err();
        assert!(matches!(err, Error::EmptyDataset));
    }

    #[test]
    fn test_empty_cell_propagates_unchanged() {
        // Unprivileged group has no favorable outcomes
        let labels = [1.0, 0.0, 0.0, 0.0];
        let protected = [1.0, 1.0, 0.0, 0.0];
        let ds = Dataset::from_columns(&labels, &protected).unwrap();

        let err = evaluate(&ds, &EvalSpec::new("group")).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientData {
                protected: 0,
                label: 1
            }
        ));
    }

    #[test]
    fn test_privileged_value_zero_swaps_groups() {
        let mut spec = EvalSpec::new("group");
        spec.privileged_value = 0;
        let report = evaluate(&ten_record_dataset(), &spec).unwrap();

        // With the roles swapped, DI = 0.5 / 0.25 = 2.0 and the gap inverts
        assert!((report.before.disparate_impact - 2.0).abs() < 1e-12);
        assert!((report.before.mean_difference - 0.25).abs() < 1e-12);
        assert!(!report.before_flags.significant_disparity);
    }
}
