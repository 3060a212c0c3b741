//! `ndarray` front end for the dense solvers of `nalgebra`.
//!
//! The rest of the workspace speaks `ndarray`; the factorisations come from
//! `nalgebra`. This crate converts between the two and maps solver failures
//! onto [`LinalgError`].

use nalgebra::{Cholesky, DMatrix, DVector, Dyn};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinalgError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("matrix is not positive definite")]
    NotPositiveDefinite,
    #[error("right-hand side has {actual} rows, matrix has {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

pub fn to_dmatrix(a: ArrayView2<'_, f64>) -> DMatrix<f64> {
    DMatrix::from_fn(a.nrows(), a.ncols(), |i, j| a[[i, j]])
}

pub fn to_dvector(b: ArrayView1<'_, f64>) -> DVector<f64> {
    DVector::from_iterator(b.len(), b.iter().copied())
}

pub fn from_dmatrix(m: &DMatrix<f64>) -> Array2<f64> {
    Array2::from_shape_fn(m.shape(), |(i, j)| m[(i, j)])
}

pub fn from_dvector(v: &DVector<f64>) -> Array1<f64> {
    v.iter().copied().collect()
}

fn factorize(a: ArrayView2<'_, f64>) -> Result<Cholesky<f64, Dyn>> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(LinalgError::NotSquare {
            rows: n,
            cols: a.ncols(),
        });
    }

    let chol = to_dmatrix(a)
        .cholesky()
        .ok_or(LinalgError::NotPositiveDefinite)?;

    // nalgebra only rejects exact zeros; a pivot lost in rounding noise is still singular
    let scale = a.diag().iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    let tol = n as f64 * f64::EPSILON * scale;
    let l = chol.l_dirty();
    if (0..n).any(|j| !l[(j, j)].is_finite() || l[(j, j)] * l[(j, j)] <= tol) {
        return Err(LinalgError::NotPositiveDefinite);
    }
    Ok(chol)
}

/// Lower-triangular `L` with `a = L Lᵀ`.
///
/// Only the lower triangle of `a` is read. A pivot at or below
/// `n * eps * max(diag(a))` is treated as zero.
pub fn cholesky(a: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
    Ok(from_dmatrix(&factorize(a)?.l()))
}

/// Solve `a x = b` for a symmetric positive definite `a`.
pub fn solve_spd(a: ArrayView2<'_, f64>, b: ArrayView1<'_, f64>) -> Result<Array1<f64>> {
    let chol = factorize(a)?;
    if b.len() != a.nrows() {
        return Err(LinalgError::DimensionMismatch {
            expected: a.nrows(),
            actual: b.len(),
        });
    }
    if b.is_empty() {
        return Ok(Array1::zeros(0));
    }
    Ok(from_dvector(&chol.solve(&to_dvector(b))))
}
