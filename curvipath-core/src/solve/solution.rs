use std::collections::BTreeMap;

use serde::Serialize;

use crate::quantity::Symbol;

/// Outcome category of a solve request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// A formula was evaluated and the unknown has a value.
    Solved,
    /// No formula's inputs are all provided.
    InsufficientData,
    /// The exercise category is not one the solver knows.
    UnrecognizedCategory,
    /// A formula's inputs were provided but its arithmetic failed.
    ComputationFailed,
}

/// Result of a solve request.
///
/// `text` always carries a human readable derivation or explanation.
/// `values` is empty unless the status is [`Status::Solved`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    pub status: Status,
    pub text: String,
    pub values: BTreeMap<Symbol, f64>,
}

impl Solution {
    pub(super) fn solved(text: String, unknown: Symbol, value: f64) -> Self {
        Self {
            status: Status::Solved,
            text,
            values: BTreeMap::from([(unknown, value)]),
        }
    }

    pub(super) fn unsolved(status: Status, text: String) -> Self {
        Self {
            status,
            text,
            values: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.status == Status::Solved
    }

    #[must_use]
    pub fn value(&self, symbol: Symbol) -> Option<f64> {
        self.values.get(&symbol).copied()
    }
}
