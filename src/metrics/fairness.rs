//! Disparate impact and demographic parity
//!
//! Both metrics are ratios/differences of *favorable rates*: the
//! weight-weighted share of records in a group whose label is the
//! favorable one. Unweighted datasets use an implicit unit weight.

use crate::config::Thresholds;
use crate::dataset::{Dataset, Partition, Record, WeightedDataset};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Computed fairness metrics for one dataset/partition pair.
///
/// `disparate_impact` is the ratio of the *unprivileged* group's favorable
/// rate to the *privileged* group's. That orientation is load-bearing:
/// values below the threshold (conventionally 0.8) mean the unprivileged
/// group receives the favorable outcome less often, and swapping the
/// numerator and denominator would silently invert every below-threshold
/// interpretation. `mean_difference` is unprivileged rate minus privileged
/// rate, in [-1, 1], with 0 meaning no gap.
///
/// Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FairnessResult {
    pub disparate_impact: f64,
    pub mean_difference: f64,
}

impl FairnessResult {
    /// Derive interpretation flags from the given thresholds.
    pub fn flags(&self, thresholds: &Thresholds) -> FairnessFlags {
        FairnessFlags {
            significant_disparity: self.disparate_impact < thresholds.disparate_impact,
            high_gap: self.mean_difference.abs() > thresholds.mean_difference,
        }
    }
}

/// Boolean interpretation of a [`FairnessResult`] against thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FairnessFlags {
    /// Disparate impact fell below the configured threshold
    pub significant_disparity: bool,

    /// |mean difference| exceeded the configured threshold
    pub high_gap: bool,
}

/// Weighted favorable rate of one group of a dataset.
///
/// `indices` selects the group's records; `weights`, when present, must be
/// parallel to the full record slice, checked up front and reported as
/// [`Error::WeightsLengthMismatch`]. Errors with [`Error::EmptyGroup`]
/// when the group's total weight is zero.
pub fn favorable_rate(
    records: &[Record],
    weights: Option<&[f64]>,
    indices: &[usize],
    favorable_label: u8,
) -> Result<f64> {
    if let Some(weights) = weights {
        if weights.len() != records.len() {
            return Err(Error::WeightsLengthMismatch {
                records: records.len(),
                weights: weights.len(),
            });
        }
    }

    let mut favorable_weight = 0.0;
    let mut total_weight = 0.0;

    for &i in indices {
        let w = weights.map_or(1.0, |weights| weights[i]);
        total_weight += w;
        if records[i].label == favorable_label {
            favorable_weight += w;
        }
    }

    if total_weight == 0.0 {
        return Err(Error::EmptyGroup);
    }
    Ok(favorable_weight / total_weight)
}

/// Evaluate fairness metrics on an unweighted dataset (unit weights).
pub fn evaluate(
    dataset: &Dataset,
    partition: &Partition,
    favorable_label: u8,
) -> Result<FairnessResult> {
    compute(dataset.records(), None, partition, favorable_label)
}

/// Evaluate fairness metrics on a reweighed dataset.
pub fn evaluate_weighted(
    weighted: &WeightedDataset,
    partition: &Partition,
    favorable_label: u8,
) -> Result<FairnessResult> {
    compute(
        weighted.records(),
        Some(weighted.weights()),
        partition,
        favorable_label,
    )
}

/// Shared implementation over optional weights.
///
/// A privileged favorable rate of zero makes the disparate impact ratio
/// undefined; this surfaces as [`Error::UndefinedDisparateImpact`] rather
/// than a NaN sentinel, so results never carry non-finite values.
fn compute(
    records: &[Record],
    weights: Option<&[f64]>,
    partition: &Partition,
    favorable_label: u8,
) -> Result<FairnessResult> {
    let privileged_rate =
        favorable_rate(records, weights, partition.privileged(), favorable_label)?;
    let unprivileged_rate =
        favorable_rate(records, weights, partition.unprivileged(), favorable_label)?;

    if privileged_rate == 0.0 {
        return Err(Error::UndefinedDisparateImpact);
    }

    Ok(FairnessResult {
        disparate_impact: unprivileged_rate / privileged_rate,
        mean_difference: unprivileged_rate - privileged_rate,
    })
}
