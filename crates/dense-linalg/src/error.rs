use std::error::Error;
use std::fmt;
use std::ops::Range;

/// Why a requested `(rows, cols)` pair cannot back a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    /// At least one dimension is exactly zero.
    ZeroDimension { rows: i64, cols: i64 },
    /// At least one dimension is negative (and none is zero).
    NegativeDimension { rows: i64, cols: i64 },
    /// Both dimensions are positive but `rows * cols` does not fit in `usize`.
    Overflow { rows: i64, cols: i64 },
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionError::ZeroDimension { rows, cols } => {
                write!(f, "zero length dimension in ({}, {})", rows, cols)
            }
            DimensionError::NegativeDimension { rows, cols } => {
                write!(f, "negative dimension in ({}, {})", rows, cols)
            }
            DimensionError::Overflow { rows, cols } => {
                write!(f, "element count of ({}, {}) overflows", rows, cols)
            }
        }
    }
}

/// Every failure a matrix operation can report.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    InvalidDimensions(DimensionError),
    /// A length or index disagrees with the matrix it is applied to.
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: i64,
    },
    /// Elementwise operation on differently shaped operands.
    ShapeMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// `a.cols != b.rows` in a matrix product.
    InnerDimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    NegativeDimensions {
        rows: Range<i64>,
        cols: Range<i64>,
    },
    OutOfBounds {
        rows: Range<i64>,
        cols: Range<i64>,
        shape: (usize, usize),
    },
    /// Slice range with `start >= end` on either axis.
    EmptySlice {
        rows: Range<i64>,
        cols: Range<i64>,
    },
    TruncatedInput {
        needed: usize,
        available: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::InvalidDimensions(kind) => write!(f, "invalid dimensions: {}", kind),
            MatrixError::DimensionMismatch {
                context,
                expected,
                actual,
            } => write!(
                f,
                "mismatch dimensions in {}: expected {}, got {}",
                context, expected, actual
            ),
            MatrixError::ShapeMismatch { op, lhs, rhs } => write!(
                f,
                "{}: shapes ({}, {}) and ({}, {}) differ",
                op, lhs.0, lhs.1, rhs.0, rhs.1
            ),
            MatrixError::InnerDimensionMismatch { lhs, rhs } => write!(
                f,
                "AxB error: number of cols in A ({}, {}) != rows in B ({}, {})",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            MatrixError::NegativeDimensions { rows, cols } => write!(
                f,
                "negative slice bounds rows {:?}, cols {:?}",
                rows, cols
            ),
            MatrixError::OutOfBounds { rows, cols, shape } => write!(
                f,
                "slice rows {:?}, cols {:?} out of bounds for shape ({}, {})",
                rows, cols, shape.0, shape.1
            ),
            MatrixError::EmptySlice { rows, cols } => {
                write!(f, "empty slice rows {:?}, cols {:?}", rows, cols)
            }
            MatrixError::TruncatedInput { needed, available } => write!(
                f,
                "truncated input: need {} bytes, got {}",
                needed, available
            ),
        }
    }
}

impl Error for MatrixError {}

impl From<DimensionError> for MatrixError {
    fn from(value: DimensionError) -> Self {
        MatrixError::InvalidDimensions(value)
    }
}

pub type Result<T> = std::result::Result<T, MatrixError>;
