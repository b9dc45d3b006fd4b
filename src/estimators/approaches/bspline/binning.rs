// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! B-spline soft binning of continuous samples.
//!
//! A sample is rescaled onto the domain `[degree, bins]` of a uniform B-spline basis
//! with knots `0, 1, ..., bins + order - 1` and every value is then assigned to the
//! bins whose basis functions are nonzero at that point, weighted by the basis value
//! (Daub et al., 2004). With `order = 1` this is ordinary histogram binning.

use ndarray::{Array1, Array2, ArrayView1};

use crate::error::{ConfigError, InputError, Result};

/// Uniform B-spline basis with `bins` basis functions of order `order`.
///
/// The knot vector is never stored; knot `k` sits at `k as f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BsplineBasis {
    bins: usize,
    order: usize,
}

/// Scratch buffers for Cox-de Boor evaluation, reused across rows.
struct BasisScratch {
    left: Vec<f64>,
    right: Vec<f64>,
    n: Vec<f64>,
}

impl BasisScratch {
    fn new(degree: usize) -> Self {
        let len = degree + 1;
        Self {
            left: vec![0.0; len],
            right: vec![0.0; len],
            n: vec![0.0; len],
        }
    }
}

impl BsplineBasis {
    pub fn new(bins: usize, order: usize) -> Result<Self> {
        if bins == 0 {
            return Err(ConfigError::ZeroBins.into());
        }
        if order == 0 {
            return Err(ConfigError::ZeroOrder.into());
        }
        if order > bins {
            return Err(ConfigError::OrderExceedsBins { order, bins }.into());
        }
        Ok(Self { bins, order })
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn degree(&self) -> usize {
        self.order - 1
    }

    /// Knot vector `0, 1, ..., bins + order - 1`.
    pub fn knots(&self) -> Array1<f64> {
        Array1::from_iter((0..self.bins + self.order).map(|k| k as f64))
    }

    /// Valid evaluation interval `(knots[degree], knots[bins])`.
    pub fn domain(&self) -> (f64, f64) {
        (self.degree() as f64, self.bins as f64)
    }

    /// Knot span index `mu` with `knots[mu] <= t < knots[mu + 1]`.
    /// The right domain bound belongs to the last span.
    fn span(&self, t: f64) -> usize {
        let degree = self.degree();
        let last = self.bins - 1;
        if t >= self.bins as f64 {
            last
        } else if t < degree as f64 {
            degree
        } else {
            (t.floor() as usize).clamp(degree, last)
        }
    }

    /// Evaluate the `order` basis functions that can be nonzero at `t`.
    ///
    /// Writes them into `scratch.n` and returns the index of the first one.
    /// Algorithm A2.2 of Piegl & Tiller, "The NURBS Book".
    fn nonzero_into(&self, t: f64, scratch: &mut BasisScratch) -> usize {
        let degree = self.degree();
        let mu = self.span(t);
        let left = &mut scratch.left;
        let right = &mut scratch.right;
        let n = &mut scratch.n;

        n[0] = 1.0;
        for d in 1..=degree {
            left[d] = t - (mu + 1 - d) as f64;
            right[d] = (mu + d) as f64 - t;
            let mut saved = 0.0;
            for r in 0..d {
                // knots are one apart, so den == d
                let den = right[r + 1] + left[d - r];
                let temp = n[r] / den;
                n[r] = saved + right[r + 1] * temp;
                saved = left[d - r] * temp;
            }
            n[d] = saved;
        }
        mu - degree
    }

    /// All `bins` basis values at a single point of the spline domain.
    pub fn evaluate(&self, t: f64) -> Array1<f64> {
        let mut scratch = BasisScratch::new(self.degree());
        let start = self.nonzero_into(t, &mut scratch);
        let mut row = Array1::zeros(self.bins);
        for (offset, &w) in scratch.n.iter().enumerate() {
            row[start + offset] = w;
        }
        row
    }

    /// Design matrix `[points.len(), bins]` of basis values at points of the spline domain.
    pub fn design_matrix(&self, points: ArrayView1<'_, f64>) -> Array2<f64> {
        let mut design = Array2::zeros((points.len(), self.bins));
        let mut scratch = BasisScratch::new(self.degree());
        for (&t, mut row) in points.iter().zip(design.rows_mut()) {
            let start = self.nonzero_into(t, &mut scratch);
            for (offset, &w) in scratch.n.iter().enumerate() {
                row[start + offset] = w;
            }
        }
        design
    }
}

/// Affinely map the observed range `[min(data), max(data)]` onto `[lo, hi]`.
///
/// Fails for empty samples, non-finite values and constant samples.
pub fn transform_to_domain(data: ArrayView1<'_, f64>, lo: f64, hi: f64) -> Result<Array1<f64>> {
    if data.is_empty() {
        return Err(InputError::EmptySample.into());
    }
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;
    for (index, &v) in data.iter().enumerate() {
        if !v.is_finite() {
            return Err(InputError::NonFinite { index }.into());
        }
        min_v = min_v.min(v);
        max_v = max_v.max(v);
    }
    if max_v == min_v {
        return Err(InputError::DegenerateRange { value: min_v }.into());
    }
    let range = max_v - min_v;
    // rounding can push the maximum one ulp past `hi`
    Ok(data.mapv(|v| ((v - min_v) * (hi - lo) / range + lo).clamp(lo, hi)))
}

/// Bin a 1-D sample into a `[n, bins]` design matrix of B-spline membership weights.
///
/// Every row sums to one. With `order = 1` each row is one-hot, otherwise up to
/// `order` adjacent bins carry weight.
///
/// # Errors
///
/// * [`crate::Error::Configuration`] for `bins == 0`, `order == 0` or `order > bins`
/// * [`crate::Error::InvalidInput`] for empty, non-finite or constant samples
///
/// # Example
///
/// ```
/// use bspline_mi::estimators::approaches::bspline::binning::bspline_bin;
/// use ndarray::array;
///
/// let x = array![1.0, 2.0, 3.0, 4.0, 5.0];
/// let design = bspline_bin(x.view(), 3, 2).unwrap();
/// assert_eq!(design.row(1).to_vec(), vec![0.5, 0.5, 0.0]);
/// ```
pub fn bspline_bin(data: ArrayView1<'_, f64>, bins: usize, order: usize) -> Result<Array2<f64>> {
    let basis = BsplineBasis::new(bins, order)?;
    let (lo, hi) = basis.domain();
    let transformed = transform_to_domain(data, lo, hi)?;
    Ok(basis.design_matrix(transformed.view()))
}

/// Like [`bspline_bin`], but empty and constant samples give `Ok(None)`.
pub(crate) fn bspline_bin_or_degenerate(
    data: ArrayView1<'_, f64>,
    bins: usize,
    order: usize,
) -> Result<Option<Array2<f64>>> {
    match bspline_bin(data, bins, order) {
        Ok(design) => Ok(Some(design)),
        Err(e) if e.is_degenerate_sample() => Ok(None),
        Err(e) => Err(e),
    }
}
