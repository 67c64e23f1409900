//! Closed-form ridge tests.
//!
//! Covers the unpenalized fit as an exact least-squares solver, penalty
//! monotonicity, held-out evaluation, and the effective degrees of
//! freedom of the penalized hat matrix.

use super::{identity_line, make_problem};
use approx::assert_relative_eq;
use linfit::data::{EvalData, FeaturesView};
use linfit::ridge::{effective_df, Ridge, RidgeParams};
use linfit::EstimatorError;
use ndarray::{concatenate, Array2, Axis};
use rstest::rstest;

/// Noiseless targets are an exact linear function of the features, so the
/// unpenalized fit must interpolate them on both the training block and
/// the held-out tail.
#[test]
fn unpenalized_fit_interpolates_noiseless_data() {
    let p = make_problem(3, 40, 10, 0.0, 11);
    let params = RidgeParams {
        lambda: 0.0,
        ..Default::default()
    };

    let fit = Ridge::new(params)
        .fit(
            p.y_tr.view(),
            FeaturesView::from_array(p.x_tr.view()),
            Some(EvalData::with_targets(
                FeaturesView::from_array(p.x_te.view()),
                p.y_te.view(),
            )),
        )
        .unwrap();

    let train_preds = fit.predict(FeaturesView::from_array(p.x_tr.view())).unwrap();
    for (pred, target) in train_preds.iter().zip(p.y_tr.iter()) {
        assert_relative_eq!(*pred, *target, epsilon = 1e-8);
    }
    assert!(fit.test_mse.unwrap() < 1e-16);
}

#[test]
fn identity_line_has_zero_intercept_unit_slope() {
    let (y, x) = identity_line();
    let params = RidgeParams {
        lambda: 0.0,
        demean: false,
        sdscale: false,
    };

    let fit = Ridge::new(params)
        .fit(y.view(), FeaturesView::from_array(x.view()), None)
        .unwrap();

    assert!(fit.weights[0].abs() < 1e-9);
    assert_relative_eq!(fit.weights[1], 1.0, epsilon = 1e-9);
}

/// Shrinking the coefficients can only hurt the training fit, so training
/// error grows with the penalty.
#[test]
fn training_error_grows_with_penalty() {
    let p = make_problem(3, 40, 0, 0.3, 17);
    let features = FeaturesView::from_array(p.x_tr.view());

    let mut last_mse = f64::NEG_INFINITY;
    for lambda in [0.0, 0.1, 1.0, 10.0, 100.0] {
        let fit = Ridge::new(RidgeParams {
            lambda,
            ..Default::default()
        })
        .fit(p.y_tr.view(), features, None)
        .unwrap();

        let preds = fit.predict(features).unwrap();
        let residual = &p.y_tr - &preds;
        let mse = residual.dot(&residual) / residual.len() as f64;

        assert!(mse >= last_mse - 1e-12, "training mse must not drop as lambda grows");
        last_mse = mse;
    }
}

#[test]
fn predictions_are_reported_without_test_targets() {
    let p = make_problem(2, 30, 5, 0.1, 23);

    let fit = Ridge::new(RidgeParams::default())
        .fit(
            p.y_tr.view(),
            FeaturesView::from_array(p.x_tr.view()),
            Some(EvalData::new(FeaturesView::from_array(p.x_te.view()))),
        )
        .unwrap();

    assert_eq!(fit.test_predictions.unwrap().len(), 5);
    assert!(fit.test_mse.is_none());
}

#[test]
fn rejects_test_target_length_mismatch() {
    let p = make_problem(2, 30, 5, 0.1, 29);
    let y_te_short = p.y_te.slice(ndarray::s![..3]);

    let err = Ridge::new(RidgeParams::default())
        .fit(
            p.y_tr.view(),
            FeaturesView::from_array(p.x_tr.view()),
            Some(EvalData::with_targets(
                FeaturesView::from_array(p.x_te.view()),
                y_te_short,
            )),
        )
        .unwrap_err();

    assert!(matches!(
        err,
        EstimatorError::DimensionMismatch {
            what: "test targets",
            ..
        }
    ));
}

// =============================================================================
// Effective degrees of freedom
// =============================================================================

/// Augment random features with an intercept row, the shape the estimator
/// actually solves on.
fn augmented(n_features: usize, n_samples: usize, seed: u64) -> Array2<f64> {
    let x = linfit::testing::random_features(n_features, n_samples, seed);
    let ones = Array2::ones((1, n_samples));
    concatenate(Axis(0), &[ones.view(), x.view()]).unwrap()
}

#[rstest]
#[case(2, 20)]
#[case(4, 50)]
#[case(6, 80)]
fn effective_df_unpenalized_counts_rows(#[case] n_features: usize, #[case] n_samples: usize) {
    let z = augmented(n_features, n_samples, 31);
    let df = effective_df(FeaturesView::from_array(z.view()), 0.0).unwrap();
    assert_relative_eq!(df, (n_features + 1) as f64, epsilon = 1e-7);
}

#[test]
fn effective_df_never_grows_with_penalty() {
    let z = augmented(4, 50, 37);
    let view = FeaturesView::from_array(z.view());

    let mut last = effective_df(view, 0.0).unwrap();
    for lambda in [0.01, 0.1, 1.0, 10.0, 100.0, 1e4, 1e6] {
        let df = effective_df(view, lambda).unwrap();
        assert!(df <= last + 1e-9, "df grew from {} to {} at lambda {}", last, df, lambda);
        last = df;
    }

    // The unpenalized intercept row never gives up its degree of freedom.
    assert!(last > 1.0 - 1e-6);
    assert!(last < 1.5);
}

#[test]
fn effective_df_rejects_singular_unpenalized_system() {
    // Duplicate a row: the Gram matrix drops rank and only a positive
    // penalty restores solvability.
    let z = augmented(2, 20, 41);
    let dup = concatenate(Axis(0), &[z.view(), z.slice(ndarray::s![1..2, ..])]).unwrap();

    let singular = effective_df(FeaturesView::from_array(dup.view()), 0.0);
    assert!(matches!(
        singular,
        Err(EstimatorError::SingularSystem { .. })
    ));

    let penalized = effective_df(FeaturesView::from_array(dup.view()), 1.0).unwrap();
    assert!(penalized.is_finite());
}
