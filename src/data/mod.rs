//! Data input abstractions for the estimators.
//!
//! # Overview
//!
//! The core convention is feature-major: a feature matrix has shape
//! `[n_features, n_samples]`, so each feature's values are contiguous. The
//! wrapper types provide semantic clarity about which axis represents what.
//!
//! # Storage Types
//!
//! - [`FeaturesView`]: Feature-major view `[n_features, n_samples]` - features on rows
//! - [`EvalData`]: optional held-out features/targets passed to a fit
//!
//! Responses are plain `ArrayView1<f64>` of length `n_samples`; weight
//! vectors are `Array1<f64>` of length `n_features + 1` with the intercept
//! at index 0.

mod views;

pub use views::{EvalData, FeaturesView};
