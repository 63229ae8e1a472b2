//! Integration tests for Matrix construction, access and slicing.

use dense_linalg::{DimensionError, Matrix, MatrixError};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn three_by_three() -> Matrix {
    Matrix::new(3, 3, Some(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])).unwrap()
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn new_without_data_is_zero_filled() {
    for (r, c) in [(1, 1), (2, 3), (5, 1), (4, 7)] {
        let m = Matrix::new(r, c, None).unwrap();
        assert_eq!(m.shape(), (r as usize, c as usize));
        assert!(m.as_slice().iter().all(|&v| v == 0.0));
    }
}

#[test]
fn new_keeps_row_major_layout() {
    let m = Matrix::new(2, 3, Some(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])).unwrap();
    assert_eq!(m[(0, 2)], 3.0);
    assert_eq!(m[(1, 0)], 4.0);
    assert_eq!(m.row_slice(1), &[4.0, 5.0, 6.0]);
}

#[test]
fn zero_dimension_is_rejected() {
    let err = Matrix::new(0, 3, None).unwrap_err();
    assert_eq!(
        err,
        MatrixError::InvalidDimensions(DimensionError::ZeroDimension { rows: 0, cols: 3 })
    );
    assert!(matches!(
        Matrix::zeros(2, 0),
        Err(MatrixError::InvalidDimensions(DimensionError::ZeroDimension { .. }))
    ));
}

#[test]
fn negative_dimension_is_rejected() {
    let err = Matrix::new(-1, 3, None).unwrap_err();
    assert_eq!(
        err,
        MatrixError::InvalidDimensions(DimensionError::NegativeDimension { rows: -1, cols: 3 })
    );
}

#[test]
fn zero_wins_over_negative() {
    assert!(matches!(
        Matrix::new(0, -1, None),
        Err(MatrixError::InvalidDimensions(DimensionError::ZeroDimension { .. }))
    ));
}

#[test]
fn data_length_mismatch_is_rejected() {
    let err = Matrix::new(2, 3, Some(vec![0.0; 5])).unwrap_err();
    assert!(matches!(
        err,
        MatrixError::DimensionMismatch {
            expected: 6,
            actual: 5,
            ..
        }
    ));
}

#[test]
fn unrepresentable_element_count_is_rejected() {
    let err = Matrix::new(1 << 62, 4, None).unwrap_err();
    assert_eq!(
        err,
        MatrixError::InvalidDimensions(DimensionError::Overflow {
            rows: 1 << 62,
            cols: 4
        })
    );
    assert!(matches!(
        Matrix::zeros(i64::MAX, i64::MAX),
        Err(MatrixError::InvalidDimensions(DimensionError::Overflow { .. }))
    ));
}

#[test]
fn random_rejects_unrepresentable_element_count() {
    let mut rng = StdRng::seed_from_u64(1);
    let err = Matrix::random(1 << 62, 4, 0.0, 1.0, &mut rng).unwrap_err();
    assert!(matches!(
        err,
        MatrixError::InvalidDimensions(DimensionError::Overflow { .. })
    ));
}

#[test]
fn identity_has_unit_diagonal() {
    let eye = Matrix::identity(4).unwrap();
    assert_eq!(eye.shape(), (4, 4));
    for i in 0..4 {
        for j in 0..4 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_eq!(eye[(i, j)], expected);
        }
    }
    assert!(Matrix::identity(0).is_err());
    assert!(Matrix::identity(-2).is_err());
}

#[test]
fn random_is_reproducible_with_seeded_source() {
    let a = Matrix::random(3, 4, -1.0, 1.0, &mut StdRng::seed_from_u64(7)).unwrap();
    let b = Matrix::random(3, 4, -1.0, 1.0, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
    assert!(a.as_slice().iter().all(|&v| (-1.0..1.0).contains(&v)));
}

#[test]
fn random_validates_dimensions() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(matches!(
        Matrix::random(-3, 2, 0.0, 1.0, &mut rng),
        Err(MatrixError::InvalidDimensions(DimensionError::NegativeDimension { .. }))
    ));
}

#[test]
fn random_with_inverted_range_does_not_panic() {
    let m = Matrix::random(2, 2, 5.0, 1.0, &mut StdRng::seed_from_u64(3)).unwrap();
    assert!(m.as_slice().iter().all(|&v| v > 1.0 && v <= 5.0));
}

#[test]
fn from_rows_builds_and_rejects_ragged_input() {
    let m = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);

    let ragged = Matrix::from_rows(&[&[1.0, 2.0], &[3.0]]);
    assert!(matches!(ragged, Err(MatrixError::DimensionMismatch { .. })));
    assert!(Matrix::from_rows(&[]).is_err());
}

// ---------------------------------------------------------------------------
// Element access
// ---------------------------------------------------------------------------

#[test]
fn get_returns_none_out_of_range() {
    let m = three_by_three();
    assert_eq!(m.get(2, 1), Some(8.0));
    assert_eq!(m.get(3, 0), None);
    assert_eq!(m.get(0, 3), None);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn index_out_of_range_panics() {
    let m = three_by_three();
    let _ = m[(0, 3)];
}

#[test]
fn get_row_copies_one_row() {
    let m = three_by_three();
    let row = m.get_row(1).unwrap();
    assert_eq!(row.shape(), (1, 3));
    assert_eq!(row.as_slice(), &[4.0, 5.0, 6.0]);
}

#[test]
fn get_row_rejects_bad_rows() {
    let m = three_by_three();
    assert!(matches!(
        m.get_row(3),
        Err(MatrixError::DimensionMismatch { actual: 3, .. })
    ));
    assert!(matches!(
        m.get_row(-1),
        Err(MatrixError::DimensionMismatch { actual: -1, .. })
    ));
}

// ---------------------------------------------------------------------------
// Slicing
// ---------------------------------------------------------------------------

#[test]
fn slice_extracts_closed_open_rectangle() {
    let sub = three_by_three().slice(0..2, 1..3).unwrap();
    assert_eq!(sub.shape(), (2, 2));
    assert_eq!(sub.as_slice(), &[2.0, 3.0, 5.0, 6.0]);
}

#[test]
fn slice_whole_matrix_is_a_copy() {
    let m = three_by_three();
    assert_eq!(m.slice(0..3, 0..3).unwrap(), m);
}

#[test]
fn slice_negative_bounds() {
    let err = three_by_three().slice(-1..2, 0..1).unwrap_err();
    assert!(matches!(err, MatrixError::NegativeDimensions { .. }));
}

#[test]
fn slice_out_of_bounds() {
    let m = three_by_three();
    assert!(matches!(
        m.slice(0..4, 0..1),
        Err(MatrixError::OutOfBounds { shape: (3, 3), .. })
    ));
    assert!(matches!(
        m.slice(0..1, 2..4),
        Err(MatrixError::OutOfBounds { .. })
    ));
}

#[test]
fn slice_empty_or_inverted_ranges() {
    let m = three_by_three();
    assert!(matches!(m.slice(1..1, 0..2), Err(MatrixError::EmptySlice { .. })));
    assert!(matches!(m.slice(2..1, 0..2), Err(MatrixError::EmptySlice { .. })));
    assert!(matches!(m.slice(0..2, 1..1), Err(MatrixError::EmptySlice { .. })));
    assert!(matches!(m.slice(0..2, 2..1), Err(MatrixError::EmptySlice { .. })));
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[test]
fn display_uses_bracket_glyphs_and_four_decimals() {
    let rendered = three_by_three().to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "⎡ 1.0000 2.0000 3.0000 ⎤");
    assert_eq!(lines[1], "⎢ 4.0000 5.0000 6.0000 ⎥");
    assert_eq!(lines[2], "⎣ 7.0000 8.0000 9.0000 ⎦");
}

#[test]
fn display_single_row_uses_top_glyphs() {
    let m = Matrix::new(1, 2, Some(vec![0.5, -1.25])).unwrap();
    assert_eq!(m.to_string(), "⎡ 0.5000 -1.2500 ⎤\n");
}
