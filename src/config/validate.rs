//! Configuration validation

use super::schema::EvalSpec;
use crate::metrics::SUPPORTED_SIGNIFICANCE_LEVELS;

/// Validation error type
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Protected attribute name must not be empty")]
    EmptyAttribute,

    #[error("Invalid privileged value: {0} (must be 0 or 1)")]
    InvalidPrivilegedValue(u8),

    #[error("Invalid favorable label: {0} (must be 0 or 1)")]
    InvalidFavorableLabel(u8),

    #[error("Invalid disparate impact threshold: {0} (must be in (0, 1])")]
    InvalidDisparateImpactThreshold(f64),

    #[error("Invalid mean difference threshold: {0} (must be in (0, 1])")]
    InvalidMeanDifferenceThreshold(f64),

    #[error("Unsupported significance level: {0} (must be one of: 0.01, 0.05, 0.1)")]
    UnsupportedSignificance(f64),
}

/// Validate an evaluation specification
///
/// Checks:
/// - Attribute name is non-empty
/// - Privileged value and favorable label are binary
/// - Thresholds are in (0, 1]
/// - Significance level has a tabulated critical value
pub fn validate_spec(spec: &EvalSpec) -> Result<(), ValidationError> {
    if spec.attribute.trim().is_empty() {
        return Err(ValidationError::EmptyAttribute);
    }

    if spec.privileged_value > 1 {
        return Err(ValidationError::InvalidPrivilegedValue(
            spec.privileged_value,
        ));
    }

    if spec.favorable_label > 1 {
        return Err(ValidationError::InvalidFavorableLabel(spec.favorable_label));
    }

    let di = spec.thresholds.disparate_impact;
    if !(di > 0.0 && di <= 1.0) {
        return Err(ValidationError::InvalidDisparateImpactThreshold(di));
    }

    let md = spec.thresholds.mean_difference;
    if !(md > 0.0 && md <= 1.0) {
        return Err(ValidationError::InvalidMeanDifferenceThreshold(md));
    }

    if !SUPPORTED_SIGNIFICANCE_LEVELS
        .iter()
        .any(|&level| level == spec.significance)
    {
        return Err(ValidationError::UnsupportedSignificance(spec.significance));
    }

    Ok(())
}
