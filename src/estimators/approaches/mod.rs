pub mod bspline;

// Re-exports so tests and users can import
// bspline_mi::estimators::approaches::* ergonomically.
pub use bspline::binning::{BsplineBasis, bspline_bin};
pub use bspline::{
    BsplineEntropy, BsplineMutualInformation, BsplinePairwiseMi, BsplineParams,
};
