// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # bspline-mi
//!
//! Mutual information between continuous variables using B-spline soft binning
//! (Daub et al., 2004). Instead of assigning each value to exactly one histogram bin,
//! a value is spread over up to `spline_order` adjacent bins with weights given by a
//! uniform B-spline basis, which removes the discontinuities of hard binning.
//!
//! ## Quick Start
//!
//! ```rust
//! use bspline_mi::estimators::mutual_information::MutualInformation;
//! use bspline_mi::estimators::traits::GlobalValue;
//! use bspline_mi::{BsplineParams, Estimate};
//! use ndarray::array;
//!
//! let x = array![1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = array![1.0, 2.0, 1.0, 2.0, 3.0];
//! let params = BsplineParams::new(5, 3);
//! let mi = MutualInformation::new_bspline(x, y, params).global_value().unwrap();
//! match mi {
//!     Estimate::Value(bits) => assert!((bits - 0.4740122135541802).abs() < 1e-9),
//!     Estimate::NotComputable(reason) => panic!("not computable: {reason:?}"),
//! }
//! ```
//!
//! ## Components
//!
//! | Component | Entry point |
//! |-----------|-------------|
//! | Binning | [`bspline_bin`] |
//! | Mutual Information | [`MutualInformation::new_bspline`], [`mutual_information`] |
//! | Entropy | [`Entropy::new_bspline`] |
//! | Pairwise matrix | [`MutualInformation::new_bspline_pairwise`] |
//!
//! ## Outcomes
//!
//! Estimators return `Result<Estimate>`. Errors are reserved for invalid parameters
//! (e.g. the finite-size correction combined with `spline_order > 1`) and malformed
//! input (unequal lengths, infinite values). Data that simply cannot support an
//! estimate, such as too few jointly defined positions or a constant sample,
//! yields [`Estimate::NotComputable`].
//!
//! ## Feature Flags
//!
//! - `parallel`: estimate pairwise matrices on the rayon thread pool
//!
//! ## Logging
//!
//! Gating decisions are logged at `debug`, intermediate entropies at `trace`,
//! through the `log` facade. No logger is installed by the library.

pub mod error;
pub mod estimators;

pub use error::{ConfigError, Error, InputError, Result};
pub use estimators::approaches::bspline::binning::bspline_bin;
pub use estimators::approaches::bspline::BsplineParams;
pub use estimators::entropy::Entropy;
pub use estimators::estimate::{Estimate, NotComputableReason};
pub use estimators::mutual_information::{MutualInformation, mutual_information};
pub use estimators::traits::GlobalValue;
