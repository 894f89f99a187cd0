//! Schema definitions for declarative evaluation configuration

use serde::{Deserialize, Serialize};

/// Complete evaluation specification
///
/// Replaces the loosely-typed privileged/unprivileged group dictionaries
/// of ad-hoc fairness scripts with an explicit, validated structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalSpec {
    /// Name of the protected attribute (metadata only; carried into the
    /// report so findings name the attribute they describe)
    pub attribute: String,

    /// Protected-attribute value that marks the privileged group
    #[serde(default = "default_binary_one")]
    pub privileged_value: u8,

    /// Label value treated as the favorable outcome
    #[serde(default = "default_binary_one")]
    pub favorable_label: u8,

    /// Interpretation thresholds for the fairness metrics
    #[serde(default)]
    pub thresholds: Thresholds,

    /// Significance level for the independence test
    #[serde(default = "default_significance")]
    pub significance: f64,
}

impl EvalSpec {
    /// Spec for the given attribute with all defaults: privileged value 1,
    /// favorable label 1, thresholds 0.8/0.2, significance 0.05.
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            privileged_value: 1,
            favorable_label: 1,
            thresholds: Thresholds::default(),
            significance: default_significance(),
        }
    }
}

/// Interpretation thresholds for fairness metrics
///
/// These are policy constants, not derived quantities. The defaults are
/// the conventional ones (four-fifths rule for disparate impact, 0.2 for
/// the parity gap), but both are plain parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Flag "significant disparity" when disparate impact falls below this
    #[serde(default = "default_disparate_impact")]
    pub disparate_impact: f64,

    /// Flag "high gap" when |mean difference| exceeds this
    #[serde(default = "default_mean_difference")]
    pub mean_difference: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            disparate_impact: default_disparate_impact(),
            mean_difference: default_mean_difference(),
        }
    }
}

fn default_binary_one() -> u8 {
    1
}

fn default_disparate_impact() -> f64 {
    0.8
}

fn default_mean_difference() -> f64 {
    0.2
}

fn default_significance() -> f64 {
    0.05
}
