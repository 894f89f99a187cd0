//! Reweighing for statistical independence
//!
//! The classical preprocessing mitigation: assign each record a weight so
//! that, under the new weights, the protected attribute and the outcome
//! label are independent. For each of the four (protected x label) cells,
//!
//! ```text
//! expected(g, l) = count(protected = g) * count(label = l) / total
//! weight(record in cell g, l) = expected(g, l) / observed(g, l)
//! ```
//!
//! which matches the marginals while leaving the total weight of each
//! protected group and each label value unchanged. The output is a pure
//! function of the input's label/protected distribution; there is no
//! randomness anywhere.

use crate::dataset::{Dataset, WeightedDataset};
use crate::error::{Error, Result};
use crate::metrics::contingency_table;
use ndarray::{Array2, Axis};

/// Reweigh a dataset so the protected attribute and label become
/// statistically independent under the instance weights.
///
/// Record order is preserved, so the returned weights line up with the
/// input rows. Every (protected x label) cell must be populated: an empty
/// cell has no records to carry its expected mass and the transform is
/// undefined, reported as [`Error::InsufficientData`] naming the cell.
pub fn reweigh(dataset: &Dataset) -> Result<WeightedDataset> {
    if dataset.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let cell_weights = cell_weights(&contingency_table(dataset))?;

    let weights = dataset
        .records()
        .iter()
        .map(|r| cell_weights[[r.protected as usize, r.label as usize]])
        .collect();

    Ok(WeightedDataset::new(dataset.records().to_vec(), weights))
}

/// Per-cell weights from an observed-counts table.
fn cell_weights(observed: &Array2<f64>) -> Result<Array2<f64>> {
    let group_totals = observed.sum_axis(Axis(1));
    let label_totals = observed.sum_axis(Axis(0));
    let total = observed.sum();

    let mut weights = Array2::zeros((2, 2));
    for g in 0..2 {
        for l in 0..2 {
            let count = observed[[g, l]];
            if count == 0.0 {
                return Err(Error::InsufficientData {
                    protected: g as u8,
                    label: l as u8,
                });
            }
            weights[[g, l]] = group_totals[g] * label_totals[l] / (total * count);
        }
    }
    Ok(weights)
}
