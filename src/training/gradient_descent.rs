//! Batch gradient descent for linear models.
//!
//! Every step uses the full training set: the configured [`GradientFn`]
//! is evaluated once per step and the weights move against it. The
//! objective is recorded before the first step and after every step, so
//! a run of `n_steps` produces a trace of `n_steps + 1` values.

use ndarray::{Array1, ArrayView1};

use crate::data::{EvalData, FeaturesView};
use crate::error::EstimatorError;
use crate::preprocess::{Standardizer, TrainStats};

use super::logger::{TrainingLogger, Verbosity};
use super::objectives::{GradientFn, ObjectiveFn, SquaredError};
use super::{evaluate_holdout, init_weights};

// =============================================================================
// Parameters
// =============================================================================

/// Parameters for [`GradientDescent`].
#[derive(Debug, Clone)]
pub struct GradientDescentParams {
    /// Step size applied to each gradient.
    pub learning_rate: f64,
    /// Number of descent steps to take.
    pub n_steps: usize,
    /// Divide the gradient by the sample count before stepping. With the
    /// squared-error gradient this makes `learning_rate` a step on the
    /// *mean* squared error, independent of the training-set size.
    pub average_gradient: bool,
    /// Center each feature by its training mean.
    pub demean: bool,
    /// Scale each feature by its training standard deviation.
    pub sdscale: bool,
    /// Logging verbosity.
    pub verbosity: Verbosity,
}

impl Default for GradientDescentParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.05,
            n_steps: 500,
            average_gradient: true,
            demean: true,
            sdscale: true,
            verbosity: Verbosity::Silent,
        }
    }
}

impl GradientDescentParams {
    /// Validate parameter values.
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(EstimatorError::InvalidLearningRate(self.learning_rate));
        }
        Ok(())
    }
}

// =============================================================================
// Fit result
// =============================================================================

/// Output of a [`GradientDescent`] run.
#[derive(Debug, Clone)]
pub struct DescentFit {
    /// Fitted weights, length `d + 1` with the intercept at index 0.
    pub weights: Array1<f64>,
    /// Objective value before the first step and after each step,
    /// length `n_steps + 1`.
    pub trace: Array1<f64>,
    /// Training-set statistics used to transform features.
    pub stats: TrainStats,
    /// Predictions on the held-out features, when provided.
    pub test_predictions: Option<Array1<f64>>,
    /// Objective on the held-out set, when its targets were provided.
    pub test_objective: Option<f64>,
}

impl DescentFit {
    /// Predict responses for new samples using the training-set statistics.
    pub fn predict(&self, features: FeaturesView<'_>) -> Result<Array1<f64>, EstimatorError> {
        let z = self.stats.transform(features)?;
        Ok(z.t().dot(&self.weights))
    }
}

// =============================================================================
// Estimator
// =============================================================================

/// Batch gradient-descent estimator, generic over the gradient used for
/// stepping and the objective recorded in the trace.
///
/// # Example
///
/// ```
/// use linfit::data::FeaturesView;
/// use linfit::training::{GradientDescent, GradientDescentParams};
/// use ndarray::array;
///
/// let x = array![[1.0, 2.0, 3.0, 4.0]];
/// let y = array![1.0, 2.0, 3.0, 4.0];
///
/// let params = GradientDescentParams { n_steps: 400, ..Default::default() };
/// let fit = GradientDescent::ols(params)
///     .fit(y.view(), FeaturesView::from_array(x.view()), None, None)
///     .unwrap();
///
/// assert_eq!(fit.trace.len(), 401);
/// assert!(fit.trace[400] < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct GradientDescent<G, O> {
    gradient: G,
    objective: O,
    params: GradientDescentParams,
}

impl GradientDescent<SquaredError, SquaredError> {
    /// Ordinary least squares: squared-error gradient and objective.
    pub fn ols(params: GradientDescentParams) -> Self {
        Self::new(SquaredError, SquaredError, params)
    }
}

impl<G: GradientFn, O: ObjectiveFn> GradientDescent<G, O> {
    pub fn new(gradient: G, objective: O, params: GradientDescentParams) -> Self {
        Self {
            gradient,
            objective,
            params,
        }
    }

    pub fn params(&self) -> &GradientDescentParams {
        &self.params
    }

    /// Fit weights to `targets` by full-batch descent.
    ///
    /// `initial_weights` defaults to all zeros when `None`. When `eval`
    /// carries held-out data, the fit reports predictions for it, plus the
    /// objective when its targets are present. Held-out features are
    /// transformed with the *training* statistics.
    pub fn fit(
        &self,
        targets: ArrayView1<'_, f64>,
        features: FeaturesView<'_>,
        initial_weights: Option<ArrayView1<'_, f64>>,
        eval: Option<EvalData<'_>>,
    ) -> Result<DescentFit, EstimatorError> {
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
        let mut weights = init_weights(initial_weights, d + 1)?;

        let mut logger = TrainingLogger::new("gradient_descent", self.params.verbosity);
        logger.start_training(self.params.n_steps);

        let mut trace = Array1::zeros(self.params.n_steps + 1);
        trace[0] = self.objective.objective(targets, z.view(), weights.view());
        logger.log_step(0, self.objective.name(), trace[0]);

        let step = if self.params.average_gradient {
            self.params.learning_rate / n as f64
        } else {
            self.params.learning_rate
        };

        for k in 0..self.params.n_steps {
            let grad = self.gradient.gradient(targets, z.view(), weights.view());
            weights.scaled_add(-step, &grad);
            trace[k + 1] = self.objective.objective(targets, z.view(), weights.view());
            logger.log_step(k + 1, self.objective.name(), trace[k + 1]);
        }

        let (test_predictions, test_objective) =
            evaluate_holdout(eval.as_ref(), &stats, &weights, &self.objective)?;
        if let Some(value) = test_objective {
            logger.log_evaluation("test", self.objective.name(), value);
        }
        logger.finish_training();

        Ok(DescentFit {
            weights,
            trace,
            stats,
            test_predictions,
            test_objective,
        })
    }
}
