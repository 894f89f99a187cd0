//! Chi-square test of independence
//!
//! Tests whether the protected attribute and the outcome label are
//! independent, from an observed-counts contingency table. The statistic
//! uses the Yates continuity correction for 2x2 tables, matching the
//! common default of statistical packages.
//!
//! Significance is decided against tabulated critical values rather than
//! a computed p-value, which keeps the crate free of a distribution
//! dependency; the supported levels are the ones callers actually test
//! at (0.01, 0.05, 0.10).

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};

/// Significance levels with a tabulated critical value
pub const SUPPORTED_SIGNIFICANCE_LEVELS: [f64; 3] = [0.01, 0.05, 0.10];

/// Upper-tail critical values, rows indexed by dof - 1, columns matching
/// [`SUPPORTED_SIGNIFICANCE_LEVELS`]
const CRITICAL_VALUES: [[f64; 3]; 5] = [
    [6.635, 3.841, 2.706],
    [9.210, 5.991, 4.605],
    [11.345, 7.815, 6.251],
    [13.277, 9.488, 7.779],
    [15.086, 11.070, 9.236],
];

/// Result of a chi-square test of independence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChiSquareTest {
    /// The chi-square statistic (Yates-corrected for 2x2 tables)
    pub statistic: f64,

    /// Degrees of freedom: (rows - 1) * (cols - 1)
    pub dof: usize,

    /// Significance level the statistic was tested at
    pub significance: f64,

    /// Critical value for (dof, significance)
    pub critical_value: f64,

    /// Whether the statistic exceeds the critical value, i.e. the
    /// attribute and the label are dependent at this level
    pub significant: bool,
}

/// Observed-counts contingency table of a dataset.
///
/// Rows are protected-attribute values (0, 1), columns are label values
/// (0, 1).
pub fn contingency_table(dataset: &Dataset) -> Array2<f64> {
    let mut table = Array2::zeros((2, 2));
    for record in dataset.records() {
        table[[record.protected as usize, record.label as usize]] += 1.0;
    }
    table
}

/// Run a chi-square test of independence on an observed-counts table.
///
/// Errors with [`Error::DegenerateTable`] when any row or column total is
/// zero (the expected counts would be zero) and with a configuration
/// error when the significance level has no tabulated critical value.
pub fn chi_square_test(table: &Array2<f64>, significance: f64) -> Result<ChiSquareTest> {
    let (rows, cols) = table.dim();
    if rows < 2 || cols < 2 {
        return Err(Error::DegenerateTable);
    }
    let dof = (rows - 1) * (cols - 1);

    let critical_value = critical_value(dof, significance)?;

    let row_totals = table.sum_axis(Axis(1));
    let col_totals = table.sum_axis(Axis(0));
    let total = table.sum();

    if row_totals.iter().any(|&t| t == 0.0) || col_totals.iter().any(|&t| t == 0.0) {
        return Err(Error::DegenerateTable);
    }

    // Yates continuity correction applies to 2x2 tables only
    let correction = if dof == 1 { 0.5 } else { 0.0 };

    let mut statistic = 0.0;
    for r in 0..rows {
        for c in 0..cols {
            let expected = row_totals[r] * col_totals[c] / total;
            let deviation = ((table[[r, c]] - expected).abs() - correction).max(0.0);
            statistic += deviation * deviation / expected;
        }
    }

    Ok(ChiSquareTest {
        statistic,
        dof,
        significance,
        critical_value,
        significant: statistic > critical_value,
    })
}

fn critical_value(dof: usize, significance: f64) -> Result<f64> {
    let column = SUPPORTED_SIGNIFICANCE_LEVELS
        .iter()
        .position(|&level| level == significance)
        .ok_or_else(|| {
            Error::ConfigError(format!(
                "Unsupported significance level: {} (must be one of: 0.01, 0.05, 0.1)",
                significance
            ))
        })?;

    if dof == 0 || dof > CRITICAL_VALUES.len() {
        return Err(Error::ConfigError(format!(
            "No tabulated critical value for {} degrees of freedom",
            dof
        )));
    }

    Ok(CRITICAL_VALUES[dof - 1][column])
}
