// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for B-spline binning and mutual information estimation.
//!
//! Degenerate samples are not errors from the point of view of the estimators:
//! they surface as [`crate::Estimate::NotComputable`]. Only the standalone
//! binner reports them as [`Error::InvalidInput`].

use thiserror::Error;

/// Top-level error type of the crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid parameter combination, reported before any data is inspected.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Sample for which the domain transform is undefined.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// Paired samples of different length.
    #[error("Input shape mismatch: x has {x_len} values, y has {y_len}")]
    InputShape { x_len: usize, y_len: usize },
}

/// Invalid estimator or basis parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("number of bins must be at least 1")]
    ZeroBins,

    #[error("spline order must be at least 1")]
    ZeroOrder,

    /// The spline domain `[degree, bins]` collapses to a point.
    #[error("spline order {order} exceeds the number of bins {bins}")]
    OrderExceedsBins { order: usize, bins: usize },

    #[error(
        "the correction for the finite size effect is only available for spline_order = 1, got {spline_order}"
    )]
    CorrectionRequiresHardBinning { spline_order: usize },

    #[error("min_def must be a fraction in [0, 1], got {0}")]
    MinDefOutOfRange(f64),
}

/// Sample-level failures of the binner.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("sample is empty")]
    EmptySample,

    #[error("all sample values are identical ({value}), the domain transform is undefined")]
    DegenerateRange { value: f64 },

    #[error("sample contains a non-finite value at index {index}")]
    NonFinite { index: usize },
}

impl Error {
    /// True for the sample failures that an estimator maps to a not-computable result.
    pub fn is_degenerate_sample(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput(InputError::DegenerateRange { .. } | InputError::EmptySample)
        )
    }
}

/// Result type alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
