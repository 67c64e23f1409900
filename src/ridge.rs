//! Closed-form ridge regression and its effective degrees of freedom.
//!
//! The estimator solves the penalized normal equations
//! `(Z Z^T + lambda * I') w = Z y` where `Z` is the preprocessed
//! `[d + 1, n]` feature matrix and `I'` is the identity with its first
//! diagonal entry zeroed, so the intercept is never penalized. The
//! system is symmetric positive definite whenever the features carry
//! independent information, which lets a single Cholesky factorization
//! do all the work.

use ndarray::{Array1, Array2, ArrayView1};

use crate::data::{EvalData, FeaturesView};
use crate::error::EstimatorError;
use crate::linalg::{cholesky_factor, cholesky_solve, solve_spd};
use crate::preprocess::{Standardizer, TrainStats};

// =============================================================================
// Parameters
// =============================================================================

/// Parameters for [`Ridge`].
#[derive(Debug, Clone)]
pub struct RidgeParams {
    /// L2 penalty strength. Zero recovers ordinary least squares.
    pub lambda: f64,
    /// Center each feature by its training mean.
    pub demean: bool,
    /// Scale each feature by its training standard deviation.
    pub sdscale: bool,
}

impl Default for RidgeParams {
    fn default() -> Self {
        Self {
            lambda: 10.0,
            demean: true,
            sdscale: true,
        }
    }
}

impl RidgeParams {
    /// Validate parameter values.
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if !self.lambda.is_finite() || self.lambda < 0.0 {
            return Err(EstimatorError::InvalidLambda(self.lambda));
        }
        Ok(())
    }
}

// =============================================================================
// Fit result
// =============================================================================

/// Output of a [`Ridge`] fit.
#[derive(Debug, Clone)]
pub struct RidgeFit {
    /// Fitted weights, length `d + 1` with the intercept at index 0.
    pub weights: Array1<f64>,
    /// Training-set statistics used to transform features.
    pub stats: TrainStats,
    /// Predictions on the held-out features, when provided.
    pub test_predictions: Option<Array1<f64>>,
    /// Mean squared error on the held-out set, when its targets were
    /// provided.
    pub test_mse: Option<f64>,
}

impl RidgeFit {
    /// Predict responses for new samples using the training-set statistics.
    pub fn predict(&self, features: FeaturesView<'_>) -> Result<Array1<f64>, EstimatorError> {
        let z = self.stats.transform(features)?;
        Ok(z.t().dot(&self.weights))
    }
}

// =============================================================================
// Estimator
// =============================================================================

/// Closed-form ridge estimator.
///
/// # Example
///
/// ```
/// use linfit::data::FeaturesView;
/// use linfit::ridge::{Ridge, RidgeParams};
/// use ndarray::array;
///
/// let x = array![[1.0, 2.0, 3.0, 4.0]];
/// let y = array![1.0, 2.0, 3.0, 4.0];
///
/// let params = RidgeParams { lambda: 0.0, demean: false, sdscale: false };
/// let fit = Ridge::new(params)
///     .fit(y.view(), FeaturesView::from_array(x.view()), None)
///     .unwrap();
///
/// // y = x exactly: zero intercept, unit slope.
/// assert!(fit.weights[0].abs() < 1e-9);
/// assert!((fit.weights[1] - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Ridge {
    params: RidgeParams,
}

impl Ridge {
    pub fn new(params: RidgeParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &RidgeParams {
        &self.params
    }

    /// Fit weights by solving the penalized normal equations.
    ///
    /// When `eval` carries held-out data, the fit reports predictions for
    /// it, plus the mean squared error when its targets are present.
    /// Held-out features are transformed with the *training* statistics.
    pub fn fit(
        &self,
        targets: ArrayView1<'_, f64>,
        features: FeaturesView<'_>,
        eval: Option<EvalData<'_>>,
    ) -> Result<RidgeFit, EstimatorError> {
        self.params.validate()?;

        let n = features.n_samples();
        let d = features.n_features();
        if targets.len() != n {
            return Err(EstimatorError::DimensionMismatch {
                what: "training targets",
                expected: n,
                got: targets.len(),
            });
        }

        let stats = Standardizer::new(self.params.demean, self.params.sdscale).fit(features);
        let z = stats.transform(features)?;

        // Gram matrix with the penalty on every diagonal entry except the
        // intercept's.
        let mut a = z.dot(&z.t());
        for i in 1..d + 1 {
            a[[i, i]] += self.params.lambda;
        }
        let b = z.dot(&targets);
        let weights = solve_spd(a.view(), b.view())?;

        let (test_predictions, test_mse) = match eval {
            Some(eval) => {
                let z_te = stats.transform(eval.features)?;
                let predictions = z_te.t().dot(&weights);
                let mse = match eval.targets {
                    Some(y_te) => {
                        if y_te.len() != eval.features.n_samples() {
                            return Err(EstimatorError::DimensionMismatch {
                                what: "test targets",
                                expected: eval.features.n_samples(),
                                got: y_te.len(),
                            });
                        }
                        let residual = y_te.to_owned() - &predictions;
                        Some(residual.dot(&residual) / y_te.len() as f64)
                    }
                    None => None,
                };
                (Some(predictions), mse)
            }
            None => (None, None),
        };

        Ok(RidgeFit {
            weights,
            stats,
            test_predictions,
            test_mse,
        })
    }
}

// =============================================================================
// Effective degrees of freedom
// =============================================================================

/// Effective degrees of freedom of a ridge fit on the already-augmented
/// matrix `x` of shape `[d, n]`: `trace(x^T (x x^T + lambda I')^{-1} x)`,
/// with the first diagonal of the penalty zeroed to match the estimator's
/// free intercept.
///
/// At `lambda = 0` this is the trace of a projection, i.e. exactly `d`
/// for full-rank features, and it shrinks monotonically as the penalty
/// grows. No preprocessing happens here; pass the matrix the model was
/// actually fit on.
pub fn effective_df(x: FeaturesView<'_>, lambda: f64) -> Result<f64, EstimatorError> {
    if !lambda.is_finite() || lambda < 0.0 {
        return Err(EstimatorError::InvalidLambda(lambda));
    }

    let d = x.n_features();
    let x = x.view();
    let gram: Array2<f64> = x.dot(&x.t());

    let mut a = gram.clone();
    for i in 1..d {
        a[[i, i]] += lambda;
    }
    let factor = cholesky_factor(a.view())?;

    // trace(x^T a^{-1} x) = trace(a^{-1} g): solve one column of g at a
    // time and take the diagonal entry.
    let mut trace = 0.0;
    for i in 0..d {
        let solved = cholesky_solve(&factor, gram.column(i));
        trace += solved[i];
    }
    Ok(trace)
}
