//! Conversions to and from `ndarray`.

use ndarray::{Array2, ArrayView2};

use crate::error::{MatrixError, Result};
use crate::matrix::{validate_dims, Dims, Matrix};

impl From<&Matrix> for Array2<f64> {
    fn from(m: &Matrix) -> Self {
        Array2::from_shape_vec(m.shape(), m.as_slice().to_vec())
            .expect("matrix buffer always matches its shape")
    }
}

impl<'a> TryFrom<ArrayView2<'a, f64>> for Matrix {
    type Error = MatrixError;

    /// Copies in logical row-major order whatever the view's strides are.
    fn try_from(view: ArrayView2<'a, f64>) -> Result<Self> {
        let (rows, cols) = view.dim();
        let Dims { rows, cols, .. } = validate_dims(rows as i64, cols as i64)?;
        Ok(Matrix::from_parts(rows, cols, view.iter().copied().collect()))
    }
}
