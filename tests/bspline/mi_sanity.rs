// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use bspline_mi::estimators::approaches::bspline::binning::bspline_bin;
use bspline_mi::estimators::approaches::bspline::bspline_utils::{
    marginal_probabilities, shannon_entropy_bits,
};
use bspline_mi::estimators::mutual_information::{MutualInformation, mutual_information};
use bspline_mi::estimators::traits::GlobalValue;
use bspline_mi::{BsplineParams, Estimate, NotComputableReason};
use ndarray::array;
use rstest::rstest;

use crate::test_helpers::{
    expect_value, generate_gaussian_data, generate_noisy_copy, generate_uniform_data, init_logging,
};

#[rstest]
#[case(4)]
#[case(10)]
#[case(16)]
fn mi_with_itself_is_marginal_entropy(#[case] bins: usize) {
    init_logging();
    let x = generate_gaussian_data(500, 0.0, 1.0, 21);
    let params = BsplineParams::new(bins, 1);
    let mi = expect_value(mutual_information(x.view(), x.view(), &params).unwrap());

    let design = bspline_bin(x.view(), bins, 1).unwrap();
    let h_x = shannon_entropy_bits(&marginal_probabilities(&design));
    assert_abs_diff_eq!(mi, h_x, epsilon = 1e-6);
}

#[rstest]
#[case(10, 1)]
#[case(10, 2)]
#[case(8, 3)]
#[case(6, 4)]
fn mi_is_symmetric(#[case] bins: usize, #[case] order: usize) {
    let x = generate_uniform_data(300, 31);
    let y = generate_noisy_copy(&x, 4.0, 32);
    let params = BsplineParams::new(bins, order);
    let xy = expect_value(mutual_information(x.view(), y.view(), &params).unwrap());
    let yx = expect_value(mutual_information(y.view(), x.view(), &params).unwrap());
    assert_abs_diff_eq!(xy, yx, epsilon = 1e-9);
}

#[test]
fn facade_matches_free_function() {
    let x = generate_uniform_data(100, 41);
    let y = generate_uniform_data(100, 42);
    let params = BsplineParams::default().with_spline_order(3);
    let via_struct = MutualInformation::new_bspline(x.clone(), y.clone(), params)
        .global_value()
        .unwrap();
    let via_fn = mutual_information(x.view(), y.view(), &params).unwrap();
    assert_eq!(via_struct, via_fn);
}

#[test]
fn dependent_variables_share_information() {
    let x = generate_uniform_data(5000, 51);
    let y = generate_noisy_copy(&x, 0.2, 52);
    let params = BsplineParams::new(10, 3);
    let mi = expect_value(mutual_information(x.view(), y.view(), &params).unwrap());
    assert!(mi > 1.2, "expected strong dependence, got {mi}");
}

#[test]
fn independent_variables_share_little_information() {
    let x = generate_uniform_data(5000, 61);
    let y = generate_uniform_data(5000, 62);
    let params = BsplineParams::new(10, 3);
    let mi = expect_value(mutual_information(x.view(), y.view(), &params).unwrap());
    assert!(mi.abs() < 0.05, "expected near-zero MI, got {mi}");
}

#[test]
fn higher_order_smooths_hard_binning_estimate() {
    // soft binning spreads mass over neighbouring bins, which lowers the
    // small-sample overestimate of independent variables
    let x = generate_uniform_data(200, 71);
    let y = generate_uniform_data(200, 72);
    let hard = expect_value(mutual_information(x.view(), y.view(), &BsplineParams::new(10, 1)).unwrap());
    let soft = expect_value(mutual_information(x.view(), y.view(), &BsplineParams::new(10, 3)).unwrap());
    assert!(soft < hard, "order 3 ({soft}) should be below order 1 ({hard})");
}

#[test]
fn finite_size_correction_is_subtracted() {
    let x = array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let params = BsplineParams::new(3, 1);
    let raw = expect_value(mutual_information(x.view(), x.view(), &params).unwrap());
    let corrected = expect_value(
        mutual_information(x.view(), x.view(), &params.with_correction(true)).unwrap(),
    );
    assert_abs_diff_eq!(raw, 3f64.log2(), epsilon = 1e-12);
    assert_abs_diff_eq!(corrected, raw - 2.0 / 12.0, epsilon = 1e-12);
    assert_abs_diff_eq!(corrected, 1.4182958340544893, epsilon = 1e-9);
}

#[test]
fn constant_sample_is_not_computable() {
    let x = array![1.0, 2.0, 3.0, 4.0];
    let y = array![7.0, 7.0, 7.0, 7.0];
    let params = BsplineParams::new(5, 3);
    for (a, b) in [(&x, &y), (&y, &x), (&y, &y)] {
        let estimate = mutual_information(a.view(), b.view(), &params).unwrap();
        assert_eq!(estimate, Estimate::NotComputable(NotComputableReason::DegenerateSample));
        assert_eq!(estimate.value(), None);
    }
}

#[test]
fn constant_after_filtering_is_not_computable() {
    let x = array![f64::NAN, 1.0, 2.0, 3.0];
    let y = array![5.0, 2.0, 2.0, 2.0];
    let estimate = mutual_information(x.view(), y.view(), &BsplineParams::new(4, 1)).unwrap();
    assert_eq!(estimate, Estimate::NotComputable(NotComputableReason::DegenerateSample));
}

#[test]
fn estimate_is_deterministic() {
    let x = generate_gaussian_data(400, 0.0, 2.0, 81);
    let y = generate_noisy_copy(&x, 1.0, 82);
    let params = BsplineParams::new(12, 2);
    let first = mutual_information(x.view(), y.view(), &params).unwrap();
    let second = mutual_information(x.view(), y.view(), &params).unwrap();
    assert_eq!(first, second);
    assert!(first.is_computable());
}
