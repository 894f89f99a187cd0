//! Evaluation report: findings, rendering, export
//!
//! The report is a plain read-only value object: downstream reporting or
//! visualization collaborators consume the before/after results, the
//! instance weights, and the independence test, and render them however
//! they like. A text rendering and JSON export are provided here.

use crate::config::EvalSpec;
use crate::dataset::WeightedDataset;
use crate::error::{Error, Result};
use crate::metrics::{ChiSquareTest, FairnessFlags, FairnessResult};
use serde::{Deserialize, Serialize};
use std::fmt::Write as FmtWrite;

/// Severity level for report findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FindingSeverity {
    Info,
    Warning,
    Critical,
}

impl std::fmt::Display for FindingSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindingSeverity::Info => write!(f, "INFO"),
            FindingSeverity::Warning => write!(f, "WARNING"),
            FindingSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// One interpreted observation about the evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: FindingSeverity,
    pub metric: String,
    pub description: String,
}

/// Complete before/after fairness comparison for one dataset.
///
/// Carries both [`FairnessResult`]s, both flag sets, the independence
/// test, and the instance weights the reweigher assigned (parallel to the
/// input rows, for downstream per-record reporting).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Name of the protected attribute this evaluation partitioned on
    pub attribute: String,

    pub before: FairnessResult,
    pub before_flags: FairnessFlags,

    pub after: FairnessResult,
    pub after_flags: FairnessFlags,

    /// Chi-square test of independence on the unweighted dataset
    pub independence: ChiSquareTest,

    /// Instance weights assigned by the reweigher, in input row order
    pub weights: Vec<f64>,
}

impl EvaluationReport {
    pub(crate) fn new(
        spec: &EvalSpec,
        before: FairnessResult,
        after: FairnessResult,
        independence: ChiSquareTest,
        weighted: &WeightedDataset,
    ) -> Self {
        Self {
            attribute: spec.attribute.clone(),
            before,
            before_flags: before.flags(&spec.thresholds),
            after,
            after_flags: after.flags(&spec.thresholds),
            independence,
            weights: weighted.weights().to_vec(),
        }
    }

    /// Interpreted findings, most severe first.
    pub fn findings(&self) -> Vec<Finding> {
        let mut findings = Vec::new();

        if self.before_flags.significant_disparity {
            findings.push(Finding {
                severity: FindingSeverity::Critical,
                metric: "disparate_impact".to_string(),
                description: format!(
                    "Disparate impact {:.3} is below the threshold, indicating significant \
                     disparity in outcomes between the groups",
                    self.before.disparate_impact
                ),
            });
        } else {
            findings.push(Finding {
                severity: FindingSeverity::Info,
                metric: "disparate_impact".to_string(),
                description: format!(
                    "Disparate impact {:.3} is above the threshold, indicating less \
                     disparity in outcomes between the groups",
                    self.before.disparate_impact
                ),
            });
        }

        if self.before_flags.high_gap {
            findings.push(Finding {
                severity: FindingSeverity::Warning,
                metric: "mean_difference".to_string(),
                description: format!(
                    "Demographic parity difference {:.3} indicates a significant gap \
                     between the groups",
                    self.before.mean_difference
                ),
            });
        } else {
            findings.push(Finding {
                severity: FindingSeverity::Info,
                metric: "mean_difference".to_string(),
                description: format!(
                    "Demographic parity difference {:.3} indicates a smaller gap \
                     between the groups",
                    self.before.mean_difference
                ),
            });
        }

        findings.push(Finding {
            severity: if self.independence.significant {
                FindingSeverity::Warning
            } else {
                FindingSeverity::Info
            },
            metric: "chi_square".to_string(),
            description: if self.independence.significant {
                format!(
                    "Chi-square statistic {:.3} exceeds the critical value {:.3}: outcomes \
                     differ significantly by group",
                    self.independence.statistic, self.independence.critical_value
                )
            } else {
                format!(
                    "Chi-square statistic {:.3} does not exceed the critical value {:.3}: \
                     no significant outcome difference by group",
                    self.independence.statistic, self.independence.critical_value
                )
            },
        });

        if self.before_flags.significant_disparity && !self.after_flags.significant_disparity {
            findings.push(Finding {
                severity: FindingSeverity::Info,
                metric: "reweighing".to_string(),
                description: format!(
                    "Reweighing raised disparate impact from {:.3} to {:.3}",
                    self.before.disparate_impact, self.after.disparate_impact
                ),
            });
        }

        findings.sort_by(|a, b| b.severity.cmp(&a.severity));
        findings
    }

    /// Render a human-readable text report.
    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "=== Fairness Evaluation: {} ===", self.attribute);
        let _ = writeln!(out);
        let _ = writeln!(out, "Before reweighing:");
        let _ = writeln!(
            out,
            "  Disparate impact:              {:.4}",
            self.before.disparate_impact
        );
        let _ = writeln!(
            out,
            "  Demographic parity difference: {:.4}",
            self.before.mean_difference
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "After reweighing:");
        let _ = writeln!(
            out,
            "  Disparate impact:              {:.4}",
            self.after.disparate_impact
        );
        let _ = writeln!(
            out,
            "  Demographic parity difference: {:.4}",
            self.after.mean_difference
        );
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Independence test: chi2 = {:.4}, dof = {}, critical = {:.3} (alpha = {})",
            self.independence.statistic,
            self.independence.dof,
            self.independence.critical_value,
            self.independence.significance
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "Findings:");
        for finding in self.findings() {
            let _ = writeln!(out, "  [{}] {}", finding.severity, finding.description);
        }

        out
    }

    /// Export the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}
