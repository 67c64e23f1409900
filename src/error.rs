//! Error types shared across the estimators.

/// Errors surfaced while validating inputs or solving.
///
/// Dimension mismatches are reported on entry, before any work is done.
/// A singular normal-equations matrix is only reachable with a zero penalty
/// and a rank-deficient feature matrix; it surfaces from the solve itself.
/// Non-finite values arising from a zero training standard deviation are
/// deliberately *not* an error and propagate through results instead (see
/// [`crate::preprocess::Standardizer`]).
#[derive(Debug, Clone, thiserror::Error)]
pub enum EstimatorError {
    /// Feature, target, or weight dimensions disagree.
    #[error("dimension mismatch for {what}: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Which input was inconsistent.
        what: &'static str,
        /// The length implied by the other inputs.
        expected: usize,
        /// The length actually supplied.
        got: usize,
    },

    /// The normal-equations matrix has no positive-definite factorization.
    #[error("normal-equations matrix ({size}x{size}) is singular")]
    SingularSystem {
        /// Size of the square system.
        size: usize,
    },

    /// lambda must be finite and >= 0.
    #[error("lambda must be >= 0, got {0}")]
    InvalidLambda(f64),

    /// learning_rate must be finite and > 0.
    #[error("learning_rate must be > 0, got {0}")]
    InvalidLearningRate(f64),
}
