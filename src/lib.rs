//! # Equidad: Fairness Evaluation Core
//!
//! Equidad turns a labeled dataset with one binary protected attribute
//! into a before/after fairness comparison: partition, measure disparate
//! impact and demographic parity, reweigh for independence, measure
//! again, report.
//!
//! ## Architecture
//!
//! - **dataset**: validated records, datasets, weights, and group partitions
//! - **metrics**: disparate impact, demographic parity, chi-square independence
//! - **reweigh**: the classical reweighing-for-independence transform
//! - **evaluate**: the single-pass evaluation driver
//! - **report**: findings, text rendering, JSON export
//! - **config**: declarative YAML evaluation specs
//!
//! ## Example
//!
//! ```
//! use equidad::{evaluate, Dataset, EvalSpec};
//!
//! let labels = [1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0];
//! let protected = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0];
//! let dataset = Dataset::from_columns(&labels, &protected)?;
//!
//! let report = evaluate(&dataset, &EvalSpec::new("treatment_group_high"))?;
//! println!("{}", report.render());
//! # Ok::<(), equidad::Error>(())
//! ```
//!
//! Everything is synchronous and side-effect-free: each call gets its own
//! inputs and returns fresh value objects, so evaluations of independent
//! datasets can run concurrently without coordination.

pub mod config;
pub mod dataset;
pub mod error;
pub mod evaluate;
pub mod metrics;
pub mod report;
pub mod reweigh;

// Re-export commonly used types
pub use config::{load_spec, EvalSpec, Thresholds};
pub use dataset::{Dataset, Partition, Record, WeightedDataset};
pub use error::{Error, Result};
pub use evaluate::evaluate;
pub use metrics::{ChiSquareTest, FairnessFlags, FairnessResult};
pub use report::{EvaluationReport, Finding, FindingSeverity};
pub use reweigh::reweigh;
