// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use log::debug;
use ndarray::Array2;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Result;
use crate::estimators::approaches::bspline::{BsplineParams, estimate_pair};
use crate::estimators::estimate::{Estimate, NotComputableReason};

/// Mutual information between every pair of columns of a 2D array.
///
/// Rows are observations, columns are variables (e.g. genes over samples).
/// Every pair is estimated independently with the same parameters; with the
/// `parallel` feature the pairs are distributed over the rayon thread pool.
pub struct BsplinePairwiseMi {
    data: Array2<f64>,
    params: BsplineParams,
}

impl BsplinePairwiseMi {
    pub fn new(data: Array2<f64>, params: BsplineParams) -> Self {
        Self { data, params }
    }

    /// Symmetric `[m, m]` matrix of estimates for `m` columns.
    ///
    /// Only the upper triangle (diagonal included) is estimated and mirrored.
    pub fn global_values(&self) -> Result<Array2<Estimate>> {
        self.params.validate()?;
        let m = self.data.ncols();
        let pairs: Vec<(usize, usize)> = (0..m).flat_map(|i| (i..m).map(move |j| (i, j))).collect();
        debug!("estimating {} column pairs over {} rows", pairs.len(), self.data.nrows());

        let estimate = |&(i, j): &(usize, usize)| {
            estimate_pair(self.data.column(i), self.data.column(j), &self.params)
        };
        #[cfg(feature = "parallel")]
        let values: Vec<Result<Estimate>> = pairs.par_iter().map(estimate).collect();
        #[cfg(not(feature = "parallel"))]
        let values: Vec<Result<Estimate>> = pairs.iter().map(estimate).collect();

        let mut out = Array2::from_elem(
            (m, m),
            Estimate::NotComputable(NotComputableReason::DegenerateSample),
        );
        for (&(i, j), value) in pairs.iter().zip(values) {
            let value = value?;
            out[[i, j]] = value;
            out[[j, i]] = value;
        }
        Ok(out)
    }
}
