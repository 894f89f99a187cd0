//! Declarative evaluation configuration
//!
//! An evaluation is described by an [`EvalSpec`]: which attribute is
//! protected, which of its values counts as privileged, which label value
//! is favorable, and the interpretation thresholds. Specs can be built in
//! code or loaded from YAML:
//!
//! ```yaml
//! attribute: treatment_group_high
//! privileged_value: 1
//! favorable_label: 1
//!
//! thresholds:
//!   disparate_impact: 0.8
//!   mean_difference: 0.2
//!
//! significance: 0.05
//! ```

mod load;
mod schema;
mod validate;

#[cfg(test)]
mod tests;

pub use load::load_spec;
pub use schema::{EvalSpec, Thresholds};
pub use validate::{validate_spec, ValidationError};
