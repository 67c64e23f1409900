//! Seeded data generators shared by unit and integration tests.

use ndarray::{Array1, Array2};
use rand::prelude::*;

/// Random feature matrix of shape `[n_features, n_samples]`.
///
/// Values are uniform in `[-1, 1]`.
pub fn random_features(n_features: usize, n_samples: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array2::from_shape_fn((n_features, n_samples), |_| rng.random::<f64>() * 2.0 - 1.0)
}

/// Regression targets as a linear model of the features plus uniform noise.
///
/// Returns `(targets, weights, bias)`.
pub fn linear_targets(
    features: &Array2<f64>,
    noise_amplitude: f64,
    seed: u64,
) -> (Array1<f64>, Array1<f64>, f64) {
    let mut rng = StdRng::seed_from_u64(seed);

    let weights = Array1::from_shape_fn(features.nrows(), |_| rng.random::<f64>() * 2.0 - 1.0);
    let bias = rng.random::<f64>() * 0.5 - 0.25;

    let mut targets = features.t().dot(&weights) + bias;
    if noise_amplitude > 0.0 {
        for t in targets.iter_mut() {
            *t += (rng.random::<f64>() * 2.0 - 1.0) * noise_amplitude;
        }
    }

    (targets, weights, bias)
}
