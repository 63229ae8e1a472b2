//! Arithmetic over [`Matrix`] values.
//!
//! Every function reads its operands and returns a freshly allocated matrix.
//! Elementwise functions require identical shapes; [`matmul`] requires the
//! inner dimensions to agree.

use rayon::prelude::*;

use crate::error::{MatrixError, Result};
use crate::matrix::{index, Matrix};

fn zip_with<F>(op: &'static str, a: &Matrix, b: &Matrix, f: F) -> Result<Matrix>
where
    F: Fn(f64, f64) -> f64,
{
    if a.shape() != b.shape() {
        return Err(MatrixError::ShapeMismatch {
            op,
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| f(x, y))
        .collect();
    Ok(Matrix::from_parts(a.nrows(), a.ncols(), data))
}

pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    zip_with("add", a, b, |x, y| x + y)
}

pub fn sub(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    zip_with("sub", a, b, |x, y| x - y)
}

pub fn mul_elem(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    zip_with("mul_elem", a, b, |x, y| x * y)
}

/// Elementwise quotient. Zero divisors yield `±inf` or `NaN`, never an error.
pub fn div_elem(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    zip_with("div_elem", a, b, |x, y| x / y)
}

pub fn scale(k: f64, a: &Matrix) -> Matrix {
    map(a, |x| k * x)
}

fn check_inner(a: &Matrix, b: &Matrix) -> Result<()> {
    if a.ncols() != b.nrows() {
        return Err(MatrixError::InnerDimensionMismatch {
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    Ok(())
}

// A(M,L) x B(L,N) => C(M,N), C[i,j] = sum over k = 0..L of A[i,k] * B[k,j].
// The k order is fixed so both the serial and parallel paths round identically.
#[inline]
fn dot_row_col(a: &Matrix, b: &Matrix, i: usize, j: usize) -> f64 {
    let (l, n) = (a.ncols(), b.ncols());
    let (lhs, rhs) = (a.as_slice(), b.as_slice());
    let mut acc = 0.0;
    for k in 0..l {
        acc += lhs[index(i, k, l)] * rhs[index(k, j, n)];
    }
    acc
}

/// Matrix product `a × b`.
pub fn matmul(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_inner(a, b)?;
    log::trace!("matmul {:?} x {:?}", a.shape(), b.shape());

    let (m, n) = (a.nrows(), b.ncols());
    let mut data = vec![0.0; m * n];
    for i in 0..m {
        for j in 0..n {
            data[index(i, j, n)] = dot_row_col(a, b, i, j);
        }
    }
    Ok(Matrix::from_parts(m, n, data))
}

/// Same result as [`matmul`], bit for bit, with output rows filled in parallel.
pub fn matmul_par(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_inner(a, b)?;
    log::trace!("matmul_par {:?} x {:?}", a.shape(), b.shape());

    let (m, n) = (a.nrows(), b.ncols());
    let mut data = vec![0.0; m * n];
    data.par_chunks_mut(n).enumerate().for_each(|(i, row)| {
        for (j, out) in row.iter_mut().enumerate() {
            *out = dot_row_col(a, b, i, j);
        }
    });
    Ok(Matrix::from_parts(m, n, data))
}

pub fn transpose(a: &Matrix) -> Matrix {
    let (rows, cols) = a.shape();
    let src = a.as_slice();
    let mut data = vec![0.0; rows * cols];
    for i in 0..rows {
        for j in 0..cols {
            data[index(j, i, rows)] = src[index(i, j, cols)];
        }
    }
    Matrix::from_parts(cols, rows, data)
}

/// Apply `f` to every element in row-major order.
pub fn map<F>(a: &Matrix, mut f: F) -> Matrix
where
    F: FnMut(f64) -> f64,
{
    let data = a.as_slice().iter().map(|&v| f(v)).collect();
    Matrix::from_parts(a.nrows(), a.ncols(), data)
}

/// Like [`map`], but stops at the first error returned by `f`.
pub fn try_map<F, E>(a: &Matrix, mut f: F) -> std::result::Result<Matrix, E>
where
    F: FnMut(f64) -> std::result::Result<f64, E>,
{
    let data = a
        .as_slice()
        .iter()
        .map(|&v| f(v))
        .collect::<std::result::Result<Vec<_>, E>>()?;
    Ok(Matrix::from_parts(a.nrows(), a.ncols(), data))
}
