//! Stochastic gradient descent for linear models.
//!
//! Each epoch visits every training sample exactly once in a freshly
//! shuffled order and applies one single-instance gradient step per
//! visit. The full-training objective is recorded before the first
//! update and after every update, so a run of `n_epochs` over `n`
//! samples produces a trace of `1 + n_epochs * n` values.

use ndarray::{s, Array1, ArrayView1};
use rand::prelude::*;

use crate::data::{EvalData, FeaturesView};
use crate::error::EstimatorError;
use crate::preprocess::Standardizer;

use super::gradient_descent::DescentFit;
use super::logger::{TrainingLogger, Verbosity};
use super::objectives::{GradientFn, ObjectiveFn, SquaredError};
use super::{evaluate_holdout, init_weights};

// =============================================================================
// Parameters
// =============================================================================

/// Parameters for [`StochasticGradientDescent`].
#[derive(Debug, Clone)]
pub struct StochasticParams {
    /// Step size applied to each single-instance gradient.
    pub learning_rate: f64,
    /// Number of passes over the training set.
    pub n_epochs: usize,
    /// Center each feature by its training mean.
    pub demean: bool,
    /// Scale each feature by its training standard deviation.
    pub sdscale: bool,
    /// Seed for the per-epoch shuffle. `None` seeds from the OS, making
    /// runs non-reproducible.
    pub seed: Option<u64>,
    /// Logging verbosity.
    pub verbosity: Verbosity,
}

impl Default for StochasticParams {
    fn default() -> Self {
        Self {
            learning_rate: 5e-4,
            n_epochs: 500,
            demean: true,
            sdscale: true,
            seed: None,
            verbosity: Verbosity::Silent,
        }
    }
}

impl StochasticParams {
    /// Validate parameter values.
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(EstimatorError::InvalidLearningRate(self.learning_rate));
        }
        Ok(())
    }
}

// =============================================================================
// Estimator
// =============================================================================

/// Stochastic gradient-descent estimator.
///
/// Produces the same [`DescentFit`] as the batch estimator; only the
/// update schedule and the trace length differ. Single-instance steps
/// are never averaged, so the learning rate is typically much smaller
/// than a batch rate.
#[derive(Debug, Clone)]
pub struct StochasticGradientDescent<G, O> {
    gradient: G,
    objective: O,
    params: StochasticParams,
}

impl StochasticGradientDescent<SquaredError, SquaredError> {
    /// Ordinary least squares: squared-error gradient and objective.
    pub fn ols(params: StochasticParams) -> Self {
        Self::new(SquaredError, SquaredError, params)
    }
}

impl<G: GradientFn, O: ObjectiveFn> StochasticGradientDescent<G, O> {
    pub fn new(gradient: G, objective: O, params: StochasticParams) -> Self {
        Self {
            gradient,
            objective,
            params,
        }
    }

    pub fn params(&self) -> &StochasticParams {
        &self.params
    }

    /// Fit weights to `targets` by shuffled single-instance descent.
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

        let mut rng = match self.params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut order: Vec<usize> = (0..n).collect();

        let mut logger = TrainingLogger::new("stochastic_gd", self.params.verbosity);
        logger.start_training(self.params.n_epochs);

        let mut trace = Array1::zeros(1 + self.params.n_epochs * n);
        trace[0] = self.objective.objective(targets, z.view(), weights.view());

        let mut t = 0;
        for epoch in 0..self.params.n_epochs {
            order.shuffle(&mut rng);
            for &j in &order {
                let zj = z.slice(s![.., j..j + 1]);
                let yj = targets.slice(s![j..j + 1]);
                let grad = self.gradient.gradient(yj, zj, weights.view());
                weights.scaled_add(-self.params.learning_rate, &grad);
                t += 1;
                trace[t] = self.objective.objective(targets, z.view(), weights.view());
            }
            logger.log_step(epoch + 1, self.objective.name(), trace[t]);
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
