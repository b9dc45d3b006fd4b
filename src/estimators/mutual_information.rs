use ndarray::{Array1, Array2, ArrayView1};

use crate::error::Result;
use crate::estimators::approaches::bspline::{self, BsplineParams};
use crate::estimators::estimate::Estimate;

/// Mutual information estimation methods for continuous data
pub struct MutualInformation;

impl MutualInformation {
    /// Creates a new B-spline mutual information estimator for two paired samples
    ///
    /// # Arguments
    ///
    /// * `x`, `y` - Samples of equal length, paired by index; NaN marks a missing value
    /// * `params` - Bins, spline order, bias correction and minimal overlap
    pub fn new_bspline(
        x: Array1<f64>,
        y: Array1<f64>,
        params: BsplineParams,
    ) -> bspline::BsplineMutualInformation {
        bspline::BsplineMutualInformation::new(x, y, params)
    }

    /// Creates an estimator for the mutual information between all column pairs of `data`
    pub fn new_bspline_pairwise(data: Array2<f64>, params: BsplineParams) -> bspline::BsplinePairwiseMi {
        bspline::BsplinePairwiseMi::new(data, params)
    }
}

/// B-spline mutual information (bits) between two borrowed samples.
///
/// Equivalent to `MutualInformation::new_bspline(x, y, params).global_value()`
/// without copying the data.
pub fn mutual_information(
    x: ArrayView1<'_, f64>,
    y: ArrayView1<'_, f64>,
    params: &BsplineParams,
) -> Result<Estimate> {
    bspline::estimate_pair(x, y, params)
}
