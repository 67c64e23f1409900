//! linfit: linear-model estimators over feature-major data.
//!
//! Features live in a `[d, n]` matrix (one row per feature, one column
//! per sample) wrapped by [`FeaturesView`]. Every estimator optionally
//! demeans and standard-deviation-scales the features with statistics
//! taken from the training set, prepends an intercept row of ones, and
//! fits a weight vector of length `d + 1` with the intercept at index 0.
//!
//! # Key Types
//!
//! - [`Ridge`] - Closed-form ridge regression via the penalized normal
//!   equations, plus [`effective_df`] for its degrees of freedom
//! - [`GradientDescent`] / [`StochasticGradientDescent`] - Iterative
//!   estimators over pluggable gradients and objectives
//! - [`CoordinateDescent`] - Cyclic closed-form coordinate updates
//! - [`FeaturesView`] / [`EvalData`] - Borrowed feature-major data
//!
//! # Example
//!
//! ```
//! use linfit::data::FeaturesView;
//! use linfit::ridge::{Ridge, RidgeParams};
//! use ndarray::array;
//!
//! // One feature, four samples: y = x.
//! let x = array![[1.0, 2.0, 3.0, 4.0]];
//! let y = array![1.0, 2.0, 3.0, 4.0];
//!
//! let params = RidgeParams { lambda: 0.0, demean: false, sdscale: false };
//! let fit = Ridge::new(params)
//!     .fit(y.view(), FeaturesView::from_array(x.view()), None)
//!     .unwrap();
//!
//! assert!(fit.weights[0].abs() < 1e-9);
//! assert!((fit.weights[1] - 1.0).abs() < 1e-9);
//! ```

// Re-export approx traits for users who want to compare fits
pub use approx;

pub mod data;
pub mod error;
pub mod linalg;
pub mod preprocess;
pub mod ridge;
pub mod testing;
pub mod training;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// Estimators and their fits
pub use ridge::{effective_df, Ridge, RidgeFit, RidgeParams};
pub use training::{
    CoordinateDescent, CoordinateDescentParams, CoordinateFit, CoordinateUpdate, DescentFit,
    GradientDescent, GradientDescentParams, GradientFn, ObjectiveFn, RidgeUpdate, SquaredError,
    StochasticGradientDescent, StochasticParams, Verbosity,
};

// Data types (for preparing training data)
pub use data::{EvalData, FeaturesView};

// Preprocessing and error surface
pub use error::EstimatorError;
pub use preprocess::{Standardizer, TrainStats};
