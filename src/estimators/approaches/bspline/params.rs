// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{ConfigError, Result};

/// Parameters of the B-spline mutual information estimator.
///
/// * `bins` - number of bins each variable is split into
/// * `spline_order` - `degree + 1`; `1` is plain histogram binning, higher orders
///   spread each value over up to `spline_order` adjacent bins
/// * `correct` - subtract the finite-size bias `(bins - 1) / (2N)`, only valid for `spline_order == 1`
/// * `min_def` - minimal fraction of positions at which both samples must be defined
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BsplineParams {
    pub bins: usize,
    pub spline_order: usize,
    pub correct: bool,
    pub min_def: f64,
}

impl Default for BsplineParams {
    fn default() -> Self {
        Self {
            bins: 10,
            spline_order: 1,
            correct: false,
            min_def: 0.0,
        }
    }
}

impl BsplineParams {
    pub fn new(bins: usize, spline_order: usize) -> Self {
        Self {
            bins,
            spline_order,
            ..Self::default()
        }
    }

    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    pub fn with_spline_order(mut self, spline_order: usize) -> Self {
        self.spline_order = spline_order;
        self
    }

    pub fn with_correction(mut self, correct: bool) -> Self {
        self.correct = correct;
        self
    }

    pub fn with_min_def(mut self, min_def: f64) -> Self {
        self.min_def = min_def;
        self
    }

    /// Check the parameter combination without looking at any data.
    pub fn validate(&self) -> Result<()> {
        if self.spline_order > 1 && self.correct {
            return Err(ConfigError::CorrectionRequiresHardBinning {
                spline_order: self.spline_order,
            }
            .into());
        }
        if self.bins == 0 {
            return Err(ConfigError::ZeroBins.into());
        }
        if self.spline_order == 0 {
            return Err(ConfigError::ZeroOrder.into());
        }
        if self.spline_order > self.bins {
            return Err(ConfigError::OrderExceedsBins {
                order: self.spline_order,
                bins: self.bins,
            }
            .into());
        }
        if !(0.0..=1.0).contains(&self.min_def) {
            // also rejects NaN
            return Err(ConfigError::MinDefOutOfRange(self.min_def).into());
        }
        Ok(())
    }
}
