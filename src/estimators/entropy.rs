use ndarray::Array1;
use crate::estimators::approaches::bspline;
pub use crate::estimators::traits::GlobalValue;

/// Entropy estimation methods for continuous data
///
/// This struct provides static methods for creating entropy estimators.
pub struct Entropy;

impl Entropy {
    /// Creates a new B-spline entropy estimator for 1D continuous data
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional sample, NaN marks a missing value
    /// * `bins` - Number of bins
    /// * `order` - Spline order, `1` for plain histogram binning
    ///
    /// # Returns
    ///
    /// A B-spline entropy estimator whose global value is in bits
    pub fn new_bspline(data: Array1<f64>, bins: usize, order: usize) -> bspline::BsplineEntropy {
        bspline::BsplineEntropy::new(data, bins, order)
    }
}
