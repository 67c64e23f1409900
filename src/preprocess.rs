//! Shared preprocessing: training-derived standardization plus intercept row.
//!
//! Every estimator runs the same pipeline: optionally subtract per-feature
//! training means, optionally scale by inverse per-feature training standard
//! deviations, then prepend a row of ones for the intercept. The statistics
//! are computed once on training data and reapplied, unchanged, to any
//! paired held-out matrix; using held-out statistics instead would silently
//! bias the evaluation.

use ndarray::{Array1, Array2, ArrayView1, Axis};

use crate::data::FeaturesView;
use crate::error::EstimatorError;

/// Configuration for the shared preprocessing step.
#[derive(Debug, Clone, Copy)]
pub struct Standardizer {
    /// Subtract the per-feature training mean.
    pub demean: bool,
    /// Multiply by the inverse per-feature training standard deviation.
    pub sdscale: bool,
}

impl Default for Standardizer {
    fn default() -> Self {
        Self {
            demean: true,
            sdscale: true,
        }
    }
}

impl Standardizer {
    pub fn new(demean: bool, sdscale: bool) -> Self {
        Self { demean, sdscale }
    }

    /// Compute training statistics for `x`.
    ///
    /// Means and standard deviations are population statistics (ddof 0) over
    /// the sample axis. A disabled option produces the neutral statistic
    /// (zero mean, unit scale), so the returned [`TrainStats`] always
    /// carries complete vectors.
    ///
    /// A constant feature has zero standard deviation; its inverse scale is
    /// infinite and the non-finite values propagate through any transform
    /// instead of being trapped here.
    pub fn fit(&self, x: FeaturesView<'_>) -> TrainStats {
        let d = x.n_features();
        let n = x.n_samples();

        // Statistics over zero samples are NaN, like the sums-over-n they
        // stand for; they propagate rather than panic.
        let mean = if self.demean {
            x.view()
                .mean_axis(Axis(1))
                .unwrap_or_else(|| Array1::from_elem(d, f64::NAN))
        } else {
            Array1::zeros(d)
        };

        // Standard deviation is translation-invariant, so this matches the
        // demean-then-scale pipeline without materializing the demeaned matrix.
        let inv_std = if self.sdscale {
            if n == 0 {
                Array1::from_elem(d, f64::NAN)
            } else {
                x.view().std_axis(Axis(1), 0.0).mapv_into(|s| 1.0 / s)
            }
        } else {
            Array1::ones(d)
        };

        TrainStats { mean, inv_std }
    }
}

/// Per-feature statistics fitted on training data.
///
/// The only state shared between a training fit and a held-out transform;
/// it is passed explicitly, never stored globally.
#[derive(Debug, Clone)]
pub struct TrainStats {
    mean: Array1<f64>,
    inv_std: Array1<f64>,
}

impl TrainStats {
    /// Number of features the statistics were fitted on.
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Per-feature training means (zeros when demeaning is off).
    pub fn mean(&self) -> ArrayView1<'_, f64> {
        self.mean.view()
    }

    /// Per-feature inverse training standard deviations (ones when scaling
    /// is off).
    pub fn inv_std(&self) -> ArrayView1<'_, f64> {
        self.inv_std.view()
    }

    /// Standardize `x` with these statistics and prepend the intercept row.
    ///
    /// Output shape is `[d + 1, n]`: row 0 is all ones, row `i + 1` is
    /// feature `i` transformed as `(value - mean[i]) * inv_std[i]`. The
    /// input is copied, never mutated.
    ///
    /// # Errors
    ///
    /// [`EstimatorError::DimensionMismatch`] if `x` has a different feature
    /// count than the statistics were fitted on.
    pub fn transform(&self, x: FeaturesView<'_>) -> Result<Array2<f64>, EstimatorError> {
        let d = self.n_features();
        if x.n_features() != d {
            return Err(EstimatorError::DimensionMismatch {
                what: "features",
                expected: d,
                got: x.n_features(),
            });
        }

        let n = x.n_samples();
        let mut out = Array2::ones((d + 1, n));
        for i in 0..d {
            let mu = self.mean[i];
            let scale = self.inv_std[i];
            let src = x.feature(i);
            let mut dst = out.row_mut(i + 1);
            for (dst, &v) in dst.iter_mut().zip(src.iter()) {
                *dst = (v - mu) * scale;
            }
        }
        Ok(out)
    }
}
