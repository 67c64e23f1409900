//! Standardization statistics tests.
//!
//! Checks that training statistics round-trip, carry over to held-out
//! data unchanged, and that degenerate (zero-spread) features propagate
//! non-finite values instead of erroring.

use super::make_problem;
use approx::assert_relative_eq;
use linfit::data::FeaturesView;
use linfit::preprocess::Standardizer;
use linfit::ridge::{Ridge, RidgeParams};
use linfit::training::{GradientDescent, GradientDescentParams};
use ndarray::{Array1, Array2, Axis};

/// The recorded mean and inverse standard deviation invert the
/// transformation exactly: `x = z / inv_std + mean` row by row.
#[test]
fn stats_round_trip_recovers_features() {
    let p = make_problem(3, 40, 0, 0.5, 33);
    let features = FeaturesView::from_array(p.x_tr.view());

    let stats = Standardizer::default().fit(features);
    let z = stats.transform(features).unwrap();

    for f in 0..3 {
        let mean = stats.mean()[f];
        let inv_std = stats.inv_std()[f];
        for j in 0..40 {
            let recovered = z[[f + 1, j]] / inv_std + mean;
            assert_relative_eq!(recovered, p.x_tr[[f, j]], epsilon = 1e-12);
        }
    }
}

#[test]
fn transformed_rows_are_centered_and_unit_scale() {
    let p = make_problem(4, 60, 0, 0.5, 39);
    let features = FeaturesView::from_array(p.x_tr.view());

    let z = Standardizer::default().fit(features).transform(features).unwrap();

    assert!(z.row(0).iter().all(|&v| v == 1.0));
    for f in 1..5 {
        let row = z.row(f);
        let mean = row.mean().unwrap();
        let var = row.mapv(|v| (v - mean).powi(2)).mean().unwrap();
        assert_relative_eq!(mean, 0.0, epsilon = 1e-12);
        assert_relative_eq!(var, 1.0, epsilon = 1e-10);
    }
}

/// Held-out data is transformed with the statistics of the training
/// block, never its own.
#[test]
fn holdout_transform_reuses_training_stats() {
    let p = make_problem(2, 30, 10, 0.5, 45);
    let train = FeaturesView::from_array(p.x_tr.view());
    let test = FeaturesView::from_array(p.x_te.view());

    let stats = Standardizer::default().fit(train);
    let z_te = stats.transform(test).unwrap();

    for f in 0..2 {
        for j in 0..10 {
            let expected = (p.x_te[[f, j]] - stats.mean()[f]) * stats.inv_std()[f];
            assert_relative_eq!(z_te[[f + 1, j]], expected, epsilon = 1e-12);
        }
    }
}

/// A zero-spread feature divides by zero during scaling. That is not an
/// error: the non-finite values flow through the estimators and
/// surface in the fitted weights.
#[test]
fn constant_feature_propagates_non_finite_weights() {
    let mut x = make_problem(2, 20, 0, 0.2, 51).x_tr;
    x.index_axis_mut(Axis(0), 1).fill(5.0);
    let y = Array1::linspace(0.0, 1.0, 20);
    let features = FeaturesView::from_array(x.view());

    let ridge = Ridge::new(RidgeParams::default())
        .fit(y.view(), features, None)
        .unwrap();
    assert!(ridge.weights.iter().any(|w| w.is_nan()));

    let descent = GradientDescent::ols(GradientDescentParams {
        n_steps: 5,
        ..Default::default()
    })
    .fit(y.view(), features, None, None)
    .unwrap();
    assert!(descent.weights.iter().any(|w| !w.is_finite()));
}

/// Disabling both switches leaves the features untouched apart from the
/// intercept row.
#[test]
fn neutral_standardizer_only_prepends_intercept() {
    let x = Array2::from_shape_vec((2, 3), vec![1.0, 2.0, 3.0, -1.0, 0.5, 2.5]).unwrap();
    let features = FeaturesView::from_array(x.view());

    let z = Standardizer::new(false, false)
        .fit(features)
        .transform(features)
        .unwrap();

    assert_eq!(z.dim(), (3, 3));
    assert!(z.row(0).iter().all(|&v| v == 1.0));
    for f in 0..2 {
        for j in 0..3 {
            assert_eq!(z[[f + 1, j]], x[[f, j]]);
        }
    }
}
