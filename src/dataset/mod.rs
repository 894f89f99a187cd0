//! Labeled datasets with a binary protected attribute
//!
//! This module provides the value objects the evaluation pipeline runs on:
//! - [`Record`]: one observation (binary outcome label, binary group indicator)
//! - [`Dataset`]: an immutable, validated collection of records
//! - [`WeightedDataset`]: a dataset with per-record instance weights,
//!   produced by [`crate::reweigh::reweigh`]
//! - [`Partition`]: privileged/unprivileged index sets derived on demand
//!
//! Construction validates the binary invariant up front, so everything
//! downstream can assume `label` and `protected` are 0 or 1.

mod partition;

#[cfg(test)]
mod tests;

pub use partition::Partition;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// One observation: a binary outcome label and a binary protected-group
/// indicator. Any further columns of the source data are out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Outcome label, 0 or 1 (e.g. received-callback = 1)
    pub label: u8,

    /// Protected attribute value, 0 or 1
    pub protected: u8,
}

impl Record {
    pub fn new(label: u8, protected: u8) -> Self {
        Self { label, protected }
    }
}

/// An ordered, validated collection of [`Record`]s.
///
/// Insertion order is irrelevant to every computation in this crate, but
/// it is preserved so instance weights line up with the source rows.
///
/// Deserialization routes through [`Dataset::from_records`], so a dataset
/// coming out of JSON/YAML satisfies the binary invariant just like one
/// built in code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDataset")]
pub struct Dataset {
    records: Vec<Record>,
}

#[derive(Deserialize)]
struct RawDataset {
    records: Vec<Record>,
}

impl TryFrom<RawDataset> for Dataset {
    type Error = Error;

    fn try_from(raw: RawDataset) -> Result<Self> {
        Dataset::from_records(raw.records)
    }
}

impl Dataset {
    /// Build a dataset from records, validating the binary invariant.
    pub fn from_records(records: Vec<Record>) -> Result<Self> {
        for (row, r) in records.iter().enumerate() {
            if r.label > 1 {
                return Err(Error::InvalidValue {
                    column: "label",
                    row,
                    value: f64::from(r.label),
                });
            }
            if r.protected > 1 {
                return Err(Error::InvalidValue {
                    column: "protected",
                    row,
                    value: f64::from(r.protected),
                });
            }
        }
        Ok(Self { records })
    }

    /// Build a dataset from raw numeric columns, as they come out of a
    /// spreadsheet or CSV loader.
    ///
    /// Strict: a NaN is reported as a missing value and any value other
    /// than 0.0 or 1.0 as an invalid one. Use
    /// [`Dataset::from_columns_dropping_missing`] when missing rows should
    /// be filtered instead of rejected.
    pub fn from_columns(labels: &[f64], protected: &[f64]) -> Result<Self> {
        if labels.len() != protected.len() {
            return Err(Error::LengthMismatch {
                labels: labels.len(),
                protected: protected.len(),
            });
        }

        let mut records = Vec::with_capacity(labels.len());
        for (row, (&label, &prot)) in labels.iter().zip(protected.iter()).enumerate() {
            records.push(Record::new(
                parse_binary("label", row, label)?,
                parse_binary("protected", row, prot)?,
            ));
        }
        Ok(Self { records })
    }

    /// Build a dataset from raw numeric columns, silently dropping rows
    /// where either value is missing (NaN).
    ///
    /// This is the pure replacement for in-place `dropna`-style cleaning:
    /// the inputs are untouched and a fresh dataset is returned. Non-NaN
    /// values still have to be binary.
    pub fn from_columns_dropping_missing(labels: &[f64], protected: &[f64]) -> Result<Self> {
        if labels.len() != protected.len() {
            return Err(Error::LengthMismatch {
                labels: labels.len(),
                protected: protected.len(),
            });
        }

        let mut records = Vec::new();
        for (row, (&label, &prot)) in labels.iter().zip(protected.iter()).enumerate() {
            if label.is_nan() || prot.is_nan() {
                continue;
            }
            records.push(Record::new(
                parse_binary("label", row, label)?,
                parse_binary("protected", row, prot)?,
            ));
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn parse_binary(column: &'static str, row: usize, value: f64) -> Result<u8> {
    if value.is_nan() {
        return Err(Error::MissingValue { column, row });
    }
    if value == 0.0 {
        Ok(0)
    } else if value == 1.0 {
        Ok(1)
    } else {
        Err(Error::InvalidValue { column, row, value })
    }
}

/// A dataset with per-record instance weights.
///
/// Produced exclusively by [`crate::reweigh::reweigh`]; the weights vector
/// is parallel to the records and always the same length. An unweighted
/// dataset behaves as if every weight were 1.0.
///
/// Deserialization validates the records and the records/weights length
/// equality, so the parallel-vector invariant cannot be bypassed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWeightedDataset")]
pub struct WeightedDataset {
    records: Vec<Record>,
    weights: Vec<f64>,
}

#[derive(Deserialize)]
struct RawWeightedDataset {
    records: Vec<Record>,
    weights: Vec<f64>,
}

impl TryFrom<RawWeightedDataset> for WeightedDataset {
    type Error = Error;

    fn try_from(raw: RawWeightedDataset) -> Result<Self> {
        if raw.records.len() != raw.weights.len() {
            return Err(Error::WeightsLengthMismatch {
                records: raw.records.len(),
                weights: raw.weights.len(),
            });
        }
        let dataset = Dataset::from_records(raw.records)?;
        Ok(Self {
            records: dataset.records,
            weights: raw.weights,
        })
    }
}

impl WeightedDataset {
    pub(crate) fn new(records: Vec<Record>, weights: Vec<f64>) -> Self {
        debug_assert_eq!(records.len(), weights.len());
        Self { records, weights }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
