use std::fmt;
use std::ops::{Index, Range};

use crate::error::{DimensionError, MatrixError, Result};
use crate::random::UniformSource;

/// Flat offset of element `(row, col)` in a row-major buffer with `cols` columns.
#[inline]
pub(crate) fn index(row: usize, col: usize, cols: usize) -> usize {
    row * cols + col
}

/// A validated shape together with its element count.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Dims {
    pub rows: usize,
    pub cols: usize,
    pub len: usize,
}

/// Validate a requested shape. Zero is reported before negativity.
pub(crate) fn validate_dims(rows: i64, cols: i64) -> Result<Dims> {
    if rows <= 0 || cols <= 0 {
        if rows == 0 || cols == 0 {
            return Err(DimensionError::ZeroDimension { rows, cols }.into());
        }
        return Err(DimensionError::NegativeDimension { rows, cols }.into());
    }
    let len = usize::try_from(rows)
        .ok()
        .zip(usize::try_from(cols).ok())
        .and_then(|(r, c)| r.checked_mul(c))
        .ok_or(DimensionError::Overflow { rows, cols })?;
    Ok(Dims {
        rows: rows as usize,
        cols: cols as usize,
        len,
    })
}

/// A dense `f64` matrix stored in row-major order.
///
/// Both dimensions are at least one and `data.len() == rows * cols` for every
/// value that can be observed. Operations never mutate their inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Build a matrix from an optional row-major buffer; `None` gives zeros.
    pub fn new(rows: i64, cols: i64, data: Option<Vec<f64>>) -> Result<Self> {
        let Dims { rows, cols, len } = validate_dims(rows, cols)?;
        let data = match data {
            Some(data) => {
                if data.len() != len {
                    return Err(MatrixError::DimensionMismatch {
                        context: "new",
                        expected: len,
                        actual: data.len() as i64,
                    });
                }
                data
            }
            None => vec![0.0; len],
        };
        Ok(Self { data, rows, cols })
    }

    pub fn zeros(rows: i64, cols: i64) -> Result<Self> {
        Self::new(rows, cols, None)
    }

    /// `n × n` identity.
    pub fn identity(n: i64) -> Result<Self> {
        let mut eye = Self::zeros(n, n)?;
        let n = eye.rows;
        for i in 0..n {
            eye.data[index(i, i, n)] = 1.0;
        }
        Ok(eye)
    }

    /// Fill a matrix with draws from `source`, one per element in row-major order.
    ///
    /// `min <= max` is not enforced.
    pub fn random<S>(rows: i64, cols: i64, min: f64, max: f64, source: &mut S) -> Result<Self>
    where
        S: UniformSource + ?Sized,
    {
        let Dims { rows, cols, len } = validate_dims(rows, cols)?;
        if min > max {
            log::warn!("random matrix requested with inverted range [{}, {})", min, max);
        }
        let data = (0..len).map(|_| source.uniform(min, max)).collect();
        Ok(Self { data, rows, cols })
    }

    /// Build from a list of equally long rows.
    pub fn from_rows(rows: &[&[f64]]) -> Result<Self> {
        let ncols = rows.first().map_or(0, |r| r.len());
        let Dims {
            rows: nrows,
            cols: ncols,
            len,
        } = validate_dims(rows.len() as i64, ncols as i64)?;
        let mut data = Vec::with_capacity(len);
        for row in rows {
            if row.len() != ncols {
                return Err(MatrixError::DimensionMismatch {
                    context: "from_rows",
                    expected: ncols,
                    actual: row.len() as i64,
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: nrows,
            cols: ncols,
        })
    }

    /// Internal constructor for buffers whose length is already known to match.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert!(rows >= 1 && cols >= 1);
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[index(row, col, self.cols)])
        } else {
            None
        }
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = index(row, 0, self.cols);
        &self.data[start..start + self.cols]
    }

    /// Copy one row out as a `1 × cols` matrix.
    pub fn get_row(&self, row: i64) -> Result<Matrix> {
        if row < 0 || row as u64 >= self.rows as u64 {
            return Err(MatrixError::DimensionMismatch {
                context: "get_row",
                expected: self.rows,
                actual: row,
            });
        }
        let data = self.row_slice(row as usize).to_vec();
        Ok(Matrix::from_parts(1, self.cols, data))
    }

    /// Copy the closed-open rectangle `rows × cols` into a new matrix.
    ///
    /// Negative bounds are checked first, then the upper bounds against the
    /// shape, then that both ranges are non-empty.
    pub fn slice(&self, rows: Range<i64>, cols: Range<i64>) -> Result<Matrix> {
        if rows.start < 0 || rows.end < 0 || cols.start < 0 || cols.end < 0 {
            return Err(MatrixError::NegativeDimensions { rows, cols });
        }
        if rows.end as u64 > self.rows as u64 || cols.end as u64 > self.cols as u64 {
            return Err(MatrixError::OutOfBounds {
                rows,
                cols,
                shape: self.shape(),
            });
        }
        if rows.start >= rows.end || cols.start >= cols.end {
            return Err(MatrixError::EmptySlice { rows, cols });
        }

        let (r0, r1) = (rows.start as usize, rows.end as usize);
        let (c0, c1) = (cols.start as usize, cols.end as usize);
        let mut data = Vec::with_capacity((r1 - r0) * (c1 - c0));
        for row in r0..r1 {
            data.extend_from_slice(&self.row_slice(row)[c0..c1]);
        }
        Ok(Matrix::from_parts(r1 - r0, c1 - c0, data))
    }

    pub fn transpose(&self) -> Matrix {
        crate::ops::transpose(self)
    }

    pub fn map<F>(&self, f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        crate::ops::map(self, f)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for shape ({}, {})",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[index(row, col, self.cols)]
    }
}

/// One line per row with four decimals, framed by `⎡ ⎤` on the first row,
/// `⎣ ⎦` on the last and `⎢ ⎥` in between. A single row uses the top glyphs.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let (left, right) = if row == 0 {
                ("⎡", "⎤")
            } else if row + 1 == self.rows {
                ("⎣", "⎦")
            } else {
                ("⎢", "⎥")
            };
            write!(f, "{}", left)?;
            for value in self.row_slice(row) {
                write!(f, " {:.4}", value)?;
            }
            writeln!(f, " {}", right)?;
        }
        Ok(())
    }
}
