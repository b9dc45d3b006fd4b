// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2, ArrayView1, Axis};

/// Bin occupancy probabilities: the column mean of a design matrix.
pub fn marginal_probabilities(design: &Array2<f64>) -> Array1<f64> {
    let n = design.nrows() as f64;
    design.sum_axis(Axis(0)) / n
}

/// Joint occupancy probabilities `Xᵀ·Y / n_total`, flattened in column-major order.
///
/// `n_total` is the length of the unfiltered samples, so the result only sums to one
/// when no position was dropped for missing values.
pub fn joint_probabilities(
    x_design: &Array2<f64>,
    y_design: &Array2<f64>,
    n_total: usize,
) -> Array1<f64> {
    let joint = x_design.t().dot(y_design) / (n_total as f64);
    Array1::from_iter(joint.t().iter().copied())
}

/// Shannon entropy in bits; bins with zero probability contribute nothing.
pub fn shannon_entropy_bits(probs: &Array1<f64>) -> f64 {
    let mut h = 0.0_f64;
    for &p in probs.iter() {
        h -= if p > 0.0 { p * p.log2() } else { 0.0 };
    }
    h
}

/// Keep the positions where neither `x[i]` nor `y[i]` is NaN, in original order.
///
/// Both views must have the same length.
pub fn defined_pairs(x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>) -> (Array1<f64>, Array1<f64>) {
    debug_assert_eq!(x.len(), y.len());
    let (x_def, y_def): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(y.iter())
        .filter(|(a, b)| !a.is_nan() && !b.is_nan())
        .map(|(&a, &b)| (a, b))
        .unzip();
    (Array1::from(x_def), Array1::from(y_def))
}
