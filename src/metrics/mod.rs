//! Fairness metrics and the independence test
//!
//! - [`fairness`]: weighted favorable rates, disparate impact,
//!   demographic parity difference, and interpretation flags
//! - [`chi_square`]: chi-square test of independence between the
//!   protected attribute and the outcome label

pub mod chi_square;
pub mod fairness;

pub use chi_square::{
    chi_square_test, contingency_table, ChiSquareTest, SUPPORTED_SIGNIFICANCE_LEVELS,
};
pub use fairness::{favorable_rate, FairnessFlags, FairnessResult};
