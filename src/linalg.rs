//! Dense symmetric positive-definite solves for the closed-form estimators.
//!
//! The normal-equations matrices built by ridge regression are symmetric and
//! positive definite whenever the penalty is positive or the features have
//! full rank, so a Cholesky factorization is enough: one factorization plus
//! cheap triangular substitutions, never an explicit inverse.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::error::EstimatorError;

/// Cholesky factorization `A = L L^T` of a symmetric positive-definite matrix.
///
/// Returns the lower-triangular factor. Fails with
/// [`EstimatorError::SingularSystem`] when a pivot is not positive, which for
/// a normal-equations matrix means a zero penalty with rank-deficient
/// features. NaN inputs are not trapped; the factor (and anything solved
/// with it) stays non-finite instead.
pub fn cholesky_factor(a: ArrayView2<'_, f64>) -> Result<Array2<f64>, EstimatorError> {
    let n = a.nrows();
    debug_assert_eq!(n, a.ncols(), "matrix must be square");

    // Exact rank deficiency cancels pivots to roundoff rather than exactly
    // zero, so the positivity test carries a relative tolerance.
    let max_diag = a.diag().fold(0.0f64, |m, &v| m.max(v.abs()));
    let tol = f64::EPSILON * max_diag * n as f64;

    let mut l = Array2::zeros((n, n));
    for i in 0..n {
        for j in 0..=i {
            let mut sum = 0.0;
            for k in 0..j {
                sum += l[[i, k]] * l[[j, k]];
            }
            if i == j {
                let pivot = a[[i, i]] - sum;
                if pivot <= tol {
                    return Err(EstimatorError::SingularSystem { size: n });
                }
                l[[i, j]] = pivot.sqrt();
            } else {
                l[[i, j]] = (a[[i, j]] - sum) / l[[j, j]];
            }
        }
    }
    Ok(l)
}

/// Solve `L L^T x = b` given the lower Cholesky factor.
pub fn cholesky_solve(l: &Array2<f64>, b: ArrayView1<'_, f64>) -> Array1<f64> {
    let n = l.nrows();
    debug_assert_eq!(b.len(), n, "right-hand side length must match");

    // Forward substitution: L y = b
    let mut y = Array1::zeros(n);
    for i in 0..n {
        let mut sum = 0.0;
        for j in 0..i {
            sum += l[[i, j]] * y[j];
        }
        y[i] = (b[i] - sum) / l[[i, i]];
    }

    // Back substitution: L^T x = y
    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let mut sum = 0.0;
        for j in (i + 1)..n {
            sum += l[[j, i]] * x[j];
        }
        x[i] = (y[i] - sum) / l[[i, i]];
    }
    x
}

/// Factor-and-solve convenience for a single right-hand side.
pub fn solve_spd(
    a: ArrayView2<'_, f64>,
    b: ArrayView1<'_, f64>,
) -> Result<Array1<f64>, EstimatorError> {
    let l = cholesky_factor(a)?;
    Ok(cholesky_solve(&l, b))
}
