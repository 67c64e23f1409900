//! Cyclic coordinate descent for penalized linear models.
//!
//! Coordinates are visited in a fixed cycle: update `k` touches
//! coordinate `k mod (d + 1)`, so intercept and features take turns and
//! a budget of `m * (d + 1)` updates gives every coordinate exactly `m`
//! refreshes. Each update solves its one-dimensional subproblem in
//! closed form while all other coordinates stay fixed.
//!
//! The full weight vector is snapshotted after every update, which keeps
//! the per-coordinate trajectory inspectable at the cost of a
//! `[d + 1, K + 1]` history matrix.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::data::FeaturesView;
use crate::error::EstimatorError;
use crate::preprocess::{Standardizer, TrainStats};

use super::init_weights;
use super::logger::{TrainingLogger, Verbosity};
use super::objectives::{ObjectiveFn, SquaredError};

// =============================================================================
// Update rule
// =============================================================================

/// One-dimensional solver for a single coordinate.
///
/// `features` is the preprocessed matrix of shape `[d + 1, n]`; `coord`
/// indexes its rows, with 0 being the intercept. Implementations mutate
/// `weights[coord]` in place and leave every other entry untouched.
pub trait CoordinateUpdate: Send + Sync {
    fn update(
        &self,
        coord: usize,
        targets: ArrayView1<'_, f64>,
        features: ArrayView2<'_, f64>,
        weights: &mut Array1<f64>,
        lambda: f64,
    );

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Exact coordinate minimizer of the ridge objective
/// `|y - Z^T w|^2 + lambda * |w'|^2`.
///
/// With the coordinate zeroed out, the minimizer is `c_i / (a_i + 2 lambda)`
/// where `a_i = 2 z_i . z_i` and `c_i = 2 z_i . (y - Z^T w)`. The intercept
/// is left out of the penalty when `free_intercept` is set, which keeps a
/// heavily penalized fit anchored at the target mean.
#[derive(Debug, Clone, Copy)]
pub struct RidgeUpdate {
    /// Exclude coordinate 0 from the penalty.
    pub free_intercept: bool,
}

impl Default for RidgeUpdate {
    fn default() -> Self {
        Self {
            free_intercept: true,
        }
    }
}

impl CoordinateUpdate for RidgeUpdate {
    fn update(
        &self,
        coord: usize,
        targets: ArrayView1<'_, f64>,
        features: ArrayView2<'_, f64>,
        weights: &mut Array1<f64>,
        lambda: f64,
    ) {
        let zi = features.row(coord);
        let ai = 2.0 * zi.dot(&zi);

        weights[coord] = 0.0;
        let residual = targets.to_owned() - features.t().dot(&weights.view());
        let ci = 2.0 * zi.dot(&residual);

        weights[coord] = if self.free_intercept && coord == 0 {
            ci / ai
        } else {
            ci / (ai + 2.0 * lambda)
        };
    }

    fn name(&self) -> &'static str {
        "ridge"
    }
}

// =============================================================================
// Parameters
// =============================================================================

/// Parameters for [`CoordinateDescent`].
#[derive(Debug, Clone)]
pub struct CoordinateDescentParams {
    /// L2 penalty strength passed to the update rule.
    pub lambda: f64,
    /// Number of single-coordinate updates (not passes).
    pub n_updates: usize,
    /// Center each feature by its training mean.
    pub demean: bool,
    /// Scale each feature by its training standard deviation.
    pub sdscale: bool,
    /// Logging verbosity.
    pub verbosity: Verbosity,
}

impl Default for CoordinateDescentParams {
    fn default() -> Self {
        Self {
            lambda: 100.0,
            n_updates: 300,
            demean: true,
            sdscale: true,
            verbosity: Verbosity::Silent,
        }
    }
}

impl CoordinateDescentParams {
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

/// Output of a [`CoordinateDescent`] run.
#[derive(Debug, Clone)]
pub struct CoordinateFit {
    /// Fitted weights, length `d + 1` with the intercept at index 0.
    pub weights: Array1<f64>,
    /// Weight snapshots: column `k` holds the vector after `k` updates,
    /// shape `[d + 1, n_updates + 1]`.
    pub weight_history: Array2<f64>,
    /// Objective value before the first update and after each update,
    /// length `n_updates + 1`.
    pub trace: Array1<f64>,
    /// Training-set statistics used to transform features.
    pub stats: TrainStats,
}

impl CoordinateFit {
    /// Predict responses for new samples using the training-set statistics.
    pub fn predict(&self, features: FeaturesView<'_>) -> Result<Array1<f64>, EstimatorError> {
        let z = self.stats.transform(features)?;
        Ok(z.t().dot(&self.weights))
    }

    /// Weight snapshots thinned to whole passes: the initial vector plus
    /// the state after each complete cycle over all coordinates.
    pub fn per_pass_history(&self) -> Array2<f64> {
        let n_coefficients = self.weight_history.nrows();
        let columns: Vec<usize> = (0..self.weight_history.ncols())
            .step_by(n_coefficients)
            .collect();
        self.weight_history.select(Axis(1), &columns)
    }
}

// =============================================================================
// Estimator
// =============================================================================

/// Cyclic coordinate-descent estimator, generic over the per-coordinate
/// update rule and the objective recorded in the trace.
#[derive(Debug, Clone)]
pub struct CoordinateDescent<U, O> {
    update: U,
    objective: O,
    params: CoordinateDescentParams,
}

impl CoordinateDescent<RidgeUpdate, SquaredError> {
    /// Ridge updates with a free intercept, mean-squared-error trace.
    pub fn ridge(params: CoordinateDescentParams) -> Self {
        Self::new(RidgeUpdate::default(), SquaredError, params)
    }
}

impl<U: CoordinateUpdate, O: ObjectiveFn> CoordinateDescent<U, O> {
    pub fn new(update: U, objective: O, params: CoordinateDescentParams) -> Self {
        Self {
            update,
            objective,
            params,
        }
    }

    pub fn params(&self) -> &CoordinateDescentParams {
        &self.params
    }

    /// Fit weights to `targets` by cyclic single-coordinate updates.
    pub fn fit(
        &self,
        targets: ArrayView1<'_, f64>,
        features: FeaturesView<'_>,
        initial_weights: Option<ArrayView1<'_, f64>>,
    ) -> Result<CoordinateFit, EstimatorError> {
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
        let n_coefficients = d + 1;
        let mut weights = init_weights(initial_weights, n_coefficients)?;

        let mut logger = TrainingLogger::new("coordinate_descent", self.params.verbosity);
        logger.start_training(self.params.n_updates);

        let mut weight_history = Array2::zeros((n_coefficients, self.params.n_updates + 1));
        weight_history.column_mut(0).assign(&weights);
        let mut trace = Array1::zeros(self.params.n_updates + 1);
        trace[0] = self.objective.objective(targets, z.view(), weights.view());

        for k in 0..self.params.n_updates {
            let coord = k % n_coefficients;
            self.update
                .update(coord, targets, z.view(), &mut weights, self.params.lambda);
            weight_history.column_mut(k + 1).assign(&weights);
            trace[k + 1] = self.objective.objective(targets, z.view(), weights.view());

            // One log line per completed pass, not per coordinate.
            if (k + 1) % n_coefficients == 0 {
                logger.log_step((k + 1) / n_coefficients, self.objective.name(), trace[k + 1]);
            }
        }

        logger.finish_training();

        Ok(CoordinateFit {
            weights,
            weight_history,
            trace,
            stats,
        })
    }
}
