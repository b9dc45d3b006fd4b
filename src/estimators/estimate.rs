// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Outcome of an information measure that is defined only for sufficiently rich data.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate {
    /// Estimated value in bits.
    Value(f64),
    /// The data does not allow an estimate.
    NotComputable(NotComputableReason),
}

/// Why an [`Estimate`] could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotComputableReason {
    /// Fewer jointly defined positions than `min_def` requires.
    InsufficientOverlap { defined: usize, total: usize },
    /// A (filtered) sample is empty or constant-valued.
    DegenerateSample,
}

impl Estimate {
    /// The estimated value, if any.
    pub fn value(&self) -> Option<f64> {
        match *self {
            Estimate::Value(v) => Some(v),
            Estimate::NotComputable(_) => None,
        }
    }

    pub fn is_computable(&self) -> bool {
        matches!(self, Estimate::Value(_))
    }
}

impl From<Estimate> for Option<f64> {
    fn from(estimate: Estimate) -> Self {
        estimate.value()
    }
}
