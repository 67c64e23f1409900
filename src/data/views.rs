//! View types for estimator access.
//!
//! These provide read-only access to input data with the semantics the
//! estimators expect.

use ndarray::{ArrayView1, ArrayView2};

/// Read-only view into feature data.
///
/// Internal storage is feature-major: `[n_features, n_samples]`.
/// This means:
/// - `feature(f)` returns all samples for feature f (contiguous)
/// - `sample_view(s)` returns all features for sample s (strided)
///
/// The API uses conceptual terms (sample, feature) not array terms (row, col).
/// Row 0 is reserved for the intercept once preprocessing prepends it; the
/// view itself carries no intercept.
#[derive(Clone, Copy)]
pub struct FeaturesView<'a> {
    /// Shape: [n_features, n_samples] - feature-major
    data: ArrayView2<'a, f64>,
}

impl<'a> FeaturesView<'a> {
    /// Create a features view.
    ///
    /// # Arguments
    ///
    /// * `data` - Array with shape `[n_features, n_samples]`
    pub fn from_array(data: ArrayView2<'a, f64>) -> Self {
        Self { data }
    }

    /// Create from a contiguous slice in feature-major order.
    ///
    /// This is zero-copy.
    ///
    /// Data layout: `[f0_s0, f0_s1, ..., f1_s0, f1_s1, ...]`
    ///
    /// # Arguments
    ///
    /// * `data` - Slice of length `n_features * n_samples`
    /// * `n_features` - Number of features
    /// * `n_samples` - Number of samples
    ///
    /// # Returns
    ///
    /// `None` if the slice length doesn't match `n_features * n_samples`.
    pub fn from_slice(data: &'a [f64], n_features: usize, n_samples: usize) -> Option<Self> {
        ArrayView2::from_shape((n_features, n_samples), data)
            .ok()
            .map(|view| Self { data: view })
    }

    /// Number of samples (second dimension).
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.data.ncols()
    }

    /// Number of features (first dimension).
    #[inline]
    pub fn n_features(&self) -> usize {
        self.data.nrows()
    }

    /// Get feature value at (sample, feature).
    ///
    /// Internally accesses `[feature, sample]` due to storage layout.
    #[inline]
    pub fn get(&self, sample: usize, feature: usize) -> f64 {
        self.data[[feature, sample]]
    }

    /// Get a contiguous view of all sample values for a feature.
    ///
    /// This is the fast path - returns a contiguous slice.
    #[inline]
    pub fn feature(&self, feature: usize) -> ArrayView1<'_, f64> {
        self.data.row(feature)
    }

    /// Get all features for a sample.
    ///
    /// **Warning**: This returns a strided view, not contiguous.
    #[inline]
    pub fn sample_view(&self, sample: usize) -> ArrayView1<'_, f64> {
        self.data.column(sample)
    }

    /// Get the underlying array view.
    ///
    /// Shape is `[n_features, n_samples]`.
    pub fn view(&self) -> ArrayView2<'a, f64> {
        self.data
    }
}

impl<'a> std::fmt::Debug for FeaturesView<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeaturesView")
            .field("n_features", &self.n_features())
            .field("n_samples", &self.n_samples())
            .finish()
    }
}

// =============================================================================
// EvalData
// =============================================================================

/// Optional held-out data supplied to an estimator fit.
///
/// Held-out features are transformed with the training statistics before
/// prediction. When targets are also present the estimator reports its
/// evaluation value on them (mean squared error for ridge, the configured
/// objective for the descent estimators).
#[derive(Clone, Copy, Debug)]
pub struct EvalData<'a> {
    /// Held-out features, `[n_features, n_test]`.
    pub features: FeaturesView<'a>,
    /// Held-out targets, length `n_test`, when available.
    pub targets: Option<ArrayView1<'a, f64>>,
}

impl<'a> EvalData<'a> {
    /// Held-out features only: predictions, no evaluation value.
    pub fn new(features: FeaturesView<'a>) -> Self {
        Self {
            features,
            targets: None,
        }
    }

    /// Held-out features and targets: predictions plus evaluation value.
    pub fn with_targets(features: FeaturesView<'a>, targets: ArrayView1<'a, f64>) -> Self {
        Self {
            features,
            targets: Some(targets),
        }
    }
}
