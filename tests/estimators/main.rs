//! Integration tests for the linear estimators.
//!
//! Exercises the public API end to end on synthetic feature-major data:
//! - Closed-form solutions as the reference the iterative fits must reach
//! - Trace and history bookkeeping across iteration budgets
//! - Preprocessing statistics flowing from training to held-out data
//!
//! Tests are split into modules by estimator:
//! - `ridge`: Closed-form fits and effective degrees of freedom
//! - `gradient_descent`: Full-batch descent
//! - `stochastic`: Shuffled single-instance descent
//! - `coordinate`: Cyclic coordinate updates
//! - `preprocess`: Standardization statistics and degenerate scales

// Allow needless range loops in test code where index clarity is preferred.
#![allow(clippy::needless_range_loop)]

mod preprocess;
mod ridge;

use linfit::testing::{linear_targets, random_features};
use ndarray::{s, Array1, Array2};

/// Install the test logger so `Verbosity::Info` runs have a sink.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// =============================================================================
// Shared Fixtures
// =============================================================================

/// A feature-major regression problem with a held-out tail drawn from the
/// same plane as the training block.
pub struct Problem {
    pub x_tr: Array2<f64>,
    pub y_tr: Array1<f64>,
    pub x_te: Array2<f64>,
    pub y_te: Array1<f64>,
}

pub fn make_problem(
    n_features: usize,
    n_train: usize,
    n_test: usize,
    noise: f64,
    seed: u64,
) -> Problem {
    let x = random_features(n_features, n_train + n_test, seed);
    let (y, _, _) = linear_targets(&x, noise, seed.wrapping_add(1));

    Problem {
        x_tr: x.slice(s![.., ..n_train]).to_owned(),
        y_tr: y.slice(s![..n_train]).to_owned(),
        x_te: x.slice(s![.., n_train..]).to_owned(),
        y_te: y.slice(s![n_train..]).to_owned(),
    }
}

/// The canonical hand-checkable case: responses equal the single feature,
/// so an unpenalized, unstandardized fit must land on intercept 0 and
/// slope 1.
pub fn identity_line() -> (Array1<f64>, Array2<f64>) {
    let y = Array1::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
    let x = Array2::from_shape_vec((1, 4), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    (y, x)
}
