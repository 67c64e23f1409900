//! Iterative estimators and their shared plumbing.
//!
//! Three estimators live here, all operating on the same preprocessed
//! feature matrix and recording an objective trace as they go:
//!
//! - [`GradientDescent`]: full-batch steps on a pluggable gradient
//! - [`StochasticGradientDescent`]: shuffled single-instance steps
//! - [`CoordinateDescent`]: cyclic closed-form coordinate updates
//!
//! ## Shared Infrastructure
//!
//! - [`GradientFn`], [`ObjectiveFn`]: pluggable loss pieces, with
//!   [`SquaredError`] implementing both
//! - [`CoordinateUpdate`]: per-coordinate solver, with [`RidgeUpdate`]
//!   as the stock rule
//! - [`TrainingLogger`], [`Verbosity`]: progress logging

mod coordinate;
mod gradient_descent;
mod logger;
mod objectives;
mod stochastic;

pub use coordinate::{
    CoordinateDescent, CoordinateDescentParams, CoordinateFit, CoordinateUpdate, RidgeUpdate,
};
pub use gradient_descent::{DescentFit, GradientDescent, GradientDescentParams};
pub use logger::{TrainingLogger, Verbosity};
pub use objectives::{GradientFn, ObjectiveFn, SquaredError};
pub use stochastic::{StochasticGradientDescent, StochasticParams};

use ndarray::{Array1, ArrayView1};

use crate::data::EvalData;
use crate::error::EstimatorError;
use crate::preprocess::TrainStats;

/// Starting weights for an iterative run: the caller's vector when given
/// (checked against `n_coefficients`), zeros otherwise.
pub(crate) fn init_weights(
    initial: Option<ArrayView1<'_, f64>>,
    n_coefficients: usize,
) -> Result<Array1<f64>, EstimatorError> {
    match initial {
        Some(w0) => {
            if w0.len() != n_coefficients {
                return Err(EstimatorError::DimensionMismatch {
                    what: "initial weights",
                    expected: n_coefficients,
                    got: w0.len(),
                });
            }
            Ok(w0.to_owned())
        }
        None => Ok(Array1::zeros(n_coefficients)),
    }
}

/// Score fitted weights on held-out data.
///
/// Held-out features go through the *training* statistics before
/// prediction. Returns predictions whenever features are present, and
/// the objective only when targets came with them.
pub(crate) fn evaluate_holdout<O: ObjectiveFn>(
    eval: Option<&EvalData<'_>>,
    stats: &TrainStats,
    weights: &Array1<f64>,
    objective: &O,
) -> Result<(Option<Array1<f64>>, Option<f64>), EstimatorError> {
    let Some(eval) = eval else {
        return Ok((None, None));
    };

    let z = stats.transform(eval.features)?;
    let value = match eval.targets {
        Some(targets) => {
            if targets.len() != eval.features.n_samples() {
                return Err(EstimatorError::DimensionMismatch {
                    what: "test targets",
                    expected: eval.features.n_samples(),
                    got: targets.len(),
                });
            }
            Some(objective.objective(targets, z.view(), weights.view()))
        }
        None => None,
    };
    let predictions = z.t().dot(weights);

    Ok((Some(predictions), value))
}
