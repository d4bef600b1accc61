//! Dense linear-algebra helpers over [`nalgebra`] matrices.
//!
//! Thin wrappers that turn nalgebra's shape panics into [`GraphError`]s and
//! add the handful of vector operations power iteration needs.

use nalgebra::{DMatrix, DVector};

use crate::error::GraphError;

/// Matrix product `a · b`.
///
/// # Errors
///
/// Returns [`GraphError::DimensionMismatch`] when `a`'s column count differs
/// from `b`'s row count.
pub fn multiply(a: &DMatrix<f64>, b: &DMatrix<f64>) -> Result<DMatrix<f64>, GraphError> {
    if a.ncols() != b.nrows() {
        return Err(GraphError::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(a * b)
}

/// Transposed copy of `m`.
#[must_use]
pub fn transpose(m: &DMatrix<f64>) -> DMatrix<f64> {
    m.transpose()
}

/// `m` with every entry multiplied by `factor`.
#[must_use]
pub fn scale(m: &DMatrix<f64>, factor: f64) -> DMatrix<f64> {
    m * factor
}

/// Whether every component is exactly zero. An empty vector counts as zero.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_zero(v: &DVector<f64>) -> bool {
    v.iter().all(|&x| x == 0.0)
}

/// `v` scaled to unit Euclidean length.
///
/// # Errors
///
/// Returns [`GraphError::ZeroVector`] when the norm is zero.
pub fn normalize(v: &DVector<f64>) -> Result<DVector<f64>, GraphError> {
    let norm = v.norm();
    if norm == 0.0 {
        return Err(GraphError::ZeroVector);
    }
    Ok(v / norm)
}

/// Concatenation of `head` followed by `tail`.
#[must_use]
pub fn compose_vectors(head: &DVector<f64>, tail: &DVector<f64>) -> DVector<f64> {
    DVector::from_iterator(head.len() + tail.len(), head.iter().chain(tail.iter()).copied())
}

/// Largest absolute per-component difference between two equal-length vectors.
///
/// Returns `+inf` when the lengths differ so callers never treat mismatched
/// iterates as converged.
#[must_use]
pub fn max_abs_delta(a: &DVector<f64>, b: &DVector<f64>) -> f64 {
    if a.len() != b.len() {
        return f64::INFINITY;
    }
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}
