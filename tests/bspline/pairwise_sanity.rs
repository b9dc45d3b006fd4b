// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use bspline_mi::estimators::mutual_information::{MutualInformation, mutual_information};
use bspline_mi::{BsplineParams, ConfigError, Error, Estimate, NotComputableReason};
use ndarray::Array2;

use crate::test_helpers::{expect_value, generate_random_columns, init_logging};

#[test]
fn pairwise_matrix_matches_single_estimates() {
    init_logging();
    let data = generate_random_columns(200, 4, 101);
    let params = BsplineParams::new(8, 3);
    let matrix = MutualInformation::new_bspline_pairwise(data.clone(), params)
        .global_values()
        .unwrap();
    assert_eq!(matrix.dim(), (4, 4));
    for i in 0..4 {
        for j in i..4 {
            let single =
                expect_value(mutual_information(data.column(i), data.column(j), &params).unwrap());
            assert_abs_diff_eq!(expect_value(matrix[[i, j]]), single, epsilon = 1e-12);
            assert_eq!(matrix[[i, j]], matrix[[j, i]]);
        }
    }
}

#[test]
fn diagonal_dominates_rows() {
    let data = generate_random_columns(300, 3, 102);
    let matrix = MutualInformation::new_bspline_pairwise(data, BsplineParams::new(6, 1))
        .global_values()
        .unwrap();
    for i in 0..3 {
        let diag = expect_value(matrix[[i, i]]);
        for j in 0..3 {
            if i != j {
                assert!(expect_value(matrix[[i, j]]) < diag);
            }
        }
    }
}

#[test]
fn constant_column_is_not_computable() {
    let mut data = generate_random_columns(50, 3, 103);
    data.column_mut(1).fill(2.0);
    let matrix = MutualInformation::new_bspline_pairwise(data, BsplineParams::new(5, 2))
        .global_values()
        .unwrap();
    let degenerate = Estimate::NotComputable(NotComputableReason::DegenerateSample);
    for k in 0..3 {
        assert_eq!(matrix[[1, k]], degenerate);
        assert_eq!(matrix[[k, 1]], degenerate);
    }
    assert!(matrix[[0, 2]].is_computable());
}

#[test]
fn invalid_params_fail_before_estimation() {
    let data = Array2::<f64>::zeros((10, 0));
    let params = BsplineParams::new(5, 2).with_correction(true);
    assert_eq!(
        MutualInformation::new_bspline_pairwise(data, params).global_values(),
        Err(Error::Configuration(ConfigError::CorrectionRequiresHardBinning { spline_order: 2 }))
    );
}
