//! Error types for Equidad

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid {column} value at row {row}: {value} (must be 0 or 1)")]
    InvalidValue {
        column: &'static str,
        row: usize,
        value: f64,
    },

    #[error("Missing {column} value at row {row}")]
    MissingValue { column: &'static str, row: usize },

    #[error("Column length mismatch: {labels} labels vs {protected} protected values")]
    LengthMismatch { labels: usize, protected: usize },

    #[error("Weights length mismatch: {records} records vs {weights} weights")]
    WeightsLengthMismatch { records: usize, weights: usize },

    #[error("Dataset is empty")]
    EmptyDataset,

    #[error("Cannot compute a favorable rate for an empty group")]
    EmptyGroup,

    #[error("Insufficient data: no records with protected={protected}, label={label}")]
    InsufficientData { protected: u8, label: u8 },

    #[error("Disparate impact undefined: privileged favorable rate is zero")]
    UndefinedDisparateImpact,

    #[error("Chi-square undefined: contingency table has an empty row or column")]
    DegenerateTable,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
