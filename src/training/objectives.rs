//! Pluggable gradient and objective functions for the descent estimators.
//!
//! The estimators are generic over two capabilities: a [`GradientFn`] that
//! differentiates a loss with respect to the weight vector, and an
//! [`ObjectiveFn`] that scores a weight vector. They are separate traits
//! because a run may record one objective while stepping on a different
//! gradient (or on single-instance slices of it).
//!
//! Both operate on the *preprocessed* feature matrix: shape `[d + 1, n]`
//! with the intercept row already prepended, weights of length `d + 1`.
//!
//! [`SquaredError`] implements both capabilities with the ordinary least
//! squares pair and is the default plumbing throughout.

use ndarray::{Array1, ArrayView1, ArrayView2};

/// A gradient function `g(y, Z, w)` over the preprocessed feature matrix.
pub trait GradientFn: Send + Sync {
    /// Gradient of the loss with respect to `weights`, length `d + 1`.
    ///
    /// `features` has shape `[d + 1, n]`; `targets` has length `n`. The
    /// stochastic estimator calls this with single-instance slices
    /// (`n == 1`), so implementations must not bake in a batch size.
    fn gradient(
        &self,
        targets: ArrayView1<'_, f64>,
        features: ArrayView2<'_, f64>,
        weights: ArrayView1<'_, f64>,
    ) -> Array1<f64>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// An objective function `f(y, Z, w)` recorded in traces and used for
/// held-out evaluation.
pub trait ObjectiveFn: Send + Sync {
    /// Scalar objective value at `weights`.
    fn objective(
        &self,
        targets: ArrayView1<'_, f64>,
        features: ArrayView2<'_, f64>,
        weights: ArrayView1<'_, f64>,
    ) -> f64;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

// =============================================================================
// SquaredError
// =============================================================================

/// Ordinary least squares, the default gradient/objective pair.
///
/// - Objective: `|y - Z^T w|^2 / n` (mean squared error)
/// - Gradient: `-2 Z (y - Z^T w)`
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredError;

impl GradientFn for SquaredError {
    fn gradient(
        &self,
        targets: ArrayView1<'_, f64>,
        features: ArrayView2<'_, f64>,
        weights: ArrayView1<'_, f64>,
    ) -> Array1<f64> {
        debug_assert_eq!(features.ncols(), targets.len(), "samples must match");
        debug_assert_eq!(features.nrows(), weights.len(), "weights must match");

        let residual = targets.to_owned() - features.t().dot(&weights);
        features.dot(&residual) * -2.0
    }

    fn name(&self) -> &'static str {
        "squared_error"
    }
}

impl ObjectiveFn for SquaredError {
    fn objective(
        &self,
        targets: ArrayView1<'_, f64>,
        features: ArrayView2<'_, f64>,
        weights: ArrayView1<'_, f64>,
    ) -> f64 {
        debug_assert_eq!(features.ncols(), targets.len(), "samples must match");

        let residual = targets.to_owned() - features.t().dot(&weights);
        residual.dot(&residual) / targets.len() as f64
    }

    fn name(&self) -> &'static str {
        "mse"
    }
}
