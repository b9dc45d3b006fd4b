// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// B-spline estimators module: groups the binning, entropy and mutual information
// submodules and exposes them to the parent approaches module.

pub mod binning;
pub mod bspline_entropy;
pub mod bspline_utils;
pub mod pairwise;
pub mod params;

pub use bspline_entropy::BsplineEntropy;
pub use pairwise::BsplinePairwiseMi;
pub use params::BsplineParams;

use log::{debug, trace};
use ndarray::{Array1, ArrayView1};

use crate::error::{Error, Result};
use crate::estimators::approaches::bspline::binning::bspline_bin_or_degenerate;
use crate::estimators::approaches::bspline::bspline_utils::{
    defined_pairs, joint_probabilities, marginal_probabilities, shannon_entropy_bits,
};
use crate::estimators::estimate::{Estimate, NotComputableReason};
use crate::estimators::traits::GlobalValue;

/// B-spline Mutual Information estimator (Daub et al., 2004), in bits.
///
/// Both samples are soft-binned with a B-spline basis and the entropy-summation
/// formula `I(X; Y) = H(X) + H(Y) - H(X, Y)` is applied to the bin occupancies.
/// Positions where either sample is NaN are dropped beforehand.
pub struct BsplineMutualInformation {
    x: Array1<f64>,
    y: Array1<f64>,
    params: BsplineParams,
}

impl BsplineMutualInformation {
    pub fn new(x: Array1<f64>, y: Array1<f64>, params: BsplineParams) -> Self {
        Self { x, y, params }
    }

    pub fn params(&self) -> &BsplineParams {
        &self.params
    }
}

impl GlobalValue for BsplineMutualInformation {
    fn global_value(&self) -> Result<Estimate> {
        estimate_pair(self.x.view(), self.y.view(), &self.params)
    }
}

/// Mutual information between two paired samples.
///
/// The steps are:
/// 1. reject invalid parameters (e.g. `correct` with `spline_order > 1`)
/// 2. drop positions where `x[i]` or `y[i]` is NaN
/// 3. gate on the fraction of kept positions against `min_def`
/// 4. bin both filtered samples; a constant sample is not computable
/// 5. `H(p_x) + H(p_y) - H(p_xy)`, optionally minus `(bins - 1) / (2 N_def)`
///
/// Marginals are normalised by the number of defined positions, the joint
/// probabilities by the original sample length.
pub(crate) fn estimate_pair(
    x: ArrayView1<'_, f64>,
    y: ArrayView1<'_, f64>,
    params: &BsplineParams,
) -> Result<Estimate> {
    params.validate()?;
    if x.len() != y.len() {
        return Err(Error::InputShape {
            x_len: x.len(),
            y_len: y.len(),
        });
    }

    let total = x.len();
    let (x_def, y_def) = defined_pairs(x, y);
    let defined = x_def.len();
    let overlap = if total == 0 {
        0.0
    } else {
        defined as f64 / total as f64
    };
    if overlap < params.min_def {
        debug!(
            "not computable: {defined} of {total} positions defined, min_def = {}",
            params.min_def
        );
        return Ok(Estimate::NotComputable(
            NotComputableReason::InsufficientOverlap { defined, total },
        ));
    }

    let bins = params.bins;
    let order = params.spline_order;
    let (x_design, y_design) = match (
        bspline_bin_or_degenerate(x_def.view(), bins, order)?,
        bspline_bin_or_degenerate(y_def.view(), bins, order)?,
    ) {
        (Some(x_design), Some(y_design)) => (x_design, y_design),
        _ => {
            debug!("not computable: degenerate sample after filtering ({defined} values)");
            return Ok(Estimate::NotComputable(NotComputableReason::DegenerateSample));
        }
    };

    let h_x = shannon_entropy_bits(&marginal_probabilities(&x_design));
    let h_y = shannon_entropy_bits(&marginal_probabilities(&y_design));
    let h_xy = shannon_entropy_bits(&joint_probabilities(&x_design, &y_design, total));
    trace!("H(X) = {h_x}, H(Y) = {h_y}, H(X,Y) = {h_xy}");

    let mut mi = h_x + h_y - h_xy;
    if params.correct {
        // finite-size bias, only reachable with spline_order == 1
        let correction = (bins as f64 - 1.0) / (2.0 * defined as f64);
        trace!("finite size correction {correction}");
        mi -= correction;
    }
    Ok(Estimate::Value(mi))
}
