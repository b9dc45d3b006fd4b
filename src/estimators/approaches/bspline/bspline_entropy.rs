// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::error::Result;
use crate::estimators::approaches::bspline::binning::bspline_bin_or_degenerate;
use crate::estimators::approaches::bspline::bspline_utils::{marginal_probabilities, shannon_entropy_bits};
use crate::estimators::estimate::{Estimate, NotComputableReason};
use crate::estimators::traits::GlobalValue;

/// Shannon entropy (bits) of a continuous sample under B-spline soft binning.
///
/// This is the marginal term `H(X)` of [`super::BsplineMutualInformation`]:
/// `H = -Σ_j p_j log2 p_j` with `p_j` the mean membership weight of bin `j`.
/// NaN values are dropped; an empty or constant remainder is not computable.
pub struct BsplineEntropy {
    data: Array1<f64>,
    bins: usize,
    order: usize,
}

impl BsplineEntropy {
    pub fn new(data: Array1<f64>, bins: usize, order: usize) -> Self {
        Self { data, bins, order }
    }
}

impl GlobalValue for BsplineEntropy {
    fn global_value(&self) -> Result<Estimate> {
        let defined: Array1<f64> = self.data.iter().copied().filter(|v| !v.is_nan()).collect();
        Ok(match bspline_bin_or_degenerate(defined.view(), self.bins, self.order)? {
            Some(design) => Estimate::Value(shannon_entropy_bits(&marginal_probabilities(&design))),
            None => Estimate::NotComputable(NotComputableReason::DegenerateSample),
        })
    }
}
