//! Privileged/unprivileged group partition

use super::Dataset;

/// Index sets for the privileged and unprivileged groups of a dataset.
///
/// The two sets are disjoint and jointly exhaustive: every record index
/// lands in exactly one of them. A partition is derived on demand from a
/// dataset and never mutated independently of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    privileged: Vec<usize>,
    unprivileged: Vec<usize>,
}

impl Partition {
    /// Split a dataset by its protected attribute.
    ///
    /// Records whose `protected` value equals `privileged_value` form the
    /// privileged group; all others form the unprivileged group.
    pub fn split(dataset: &Dataset, privileged_value: u8) -> Self {
        let mut privileged = Vec::new();
        let mut unprivileged = Vec::new();

        for (i, record) in dataset.records().iter().enumerate() {
            if record.protected == privileged_value {
                privileged.push(i);
            } else {
                unprivileged.push(i);
            }
        }

        Self {
            privileged,
            unprivileged,
        }
    }

    /// Record indices of the privileged group
    pub fn privileged(&self) -> &[usize] {
        &self.privileged
    }

    /// Record indices of the unprivileged group
    pub fn unprivileged(&self) -> &[usize] {
        &self.unprivileged
    }

    /// Total number of partitioned records
    pub fn len(&self) -> usize {
        self.privileged.len() + self.unprivileged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.privileged.is_empty() && self.unprivileged.is_empty()
    }
}
