//! Sudoku grid geometry.
//!
//! Cells are addressed either by `(row, col)` or by the flat row-major index
//! `row * 9 + col`. Both are 0-indexed internally; axis labels are 1-indexed.

use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView1};

/// Rows (and columns) in a Sudoku grid.
pub const GRID_SIZE: usize = 9;

/// Cells in a Sudoku grid.
pub const NUM_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Candidate digits per cell.
pub const NUM_DIGITS: usize = 9;

/// Convert a flat cell index into `(row, col)`.
pub fn cell_position(index: usize) -> (usize, usize) {
    (index / GRID_SIZE, index % GRID_SIZE)
}

/// Axis tick labels `"1"..="9"`.
pub fn tick_labels() -> Vec<String> {
    (1..=GRID_SIZE).map(|i| i.to_string()).collect()
}

/// Fail unless `len` equals [`NUM_CELLS`].
pub fn check_cell_count(what: &'static str, len: usize) -> Result<()> {
    if len != NUM_CELLS {
        return Err(Error::ShapeMismatch {
            what,
            expected: vec![NUM_CELLS],
            actual: vec![len],
        });
    }
    Ok(())
}

/// Reshape an 81-length sequence into a 9×9 grid in row-major order.
pub fn to_grid<T: Clone>(what: &'static str, values: ArrayView1<'_, T>) -> Result<Array2<T>> {
    check_cell_count(what, values.len())?;
    Array2::from_shape_vec((GRID_SIZE, GRID_SIZE), values.to_vec()).map_err(|_| {
        Error::ShapeMismatch {
            what,
            expected: vec![GRID_SIZE, GRID_SIZE],
            actual: vec![values.len()],
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    #[test]
    fn test_cell_position_is_row_major() {
        assert_eq!(cell_position(0), (0, 0));
        assert_eq!(cell_position(8), (0, 8));
        assert_eq!(cell_position(9), (1, 0));
        assert_eq!(cell_position(80), (8, 8));
        assert_eq!(cell_position(41), (4, 5));
    }

    #[test]
    fn test_tick_labels_are_one_indexed() {
        let labels = tick_labels();
        assert_eq!(labels.len(), 9);
        assert_eq!(labels.first().map(String::as_str), Some("1"));
        assert_eq!(labels.last().map(String::as_str), Some("9"));
    }

    #[test]
    fn test_to_grid_is_row_major() {
        let values = Array1::from_iter(0..81usize);
        let grid = to_grid("cells", values.view()).unwrap();
        assert_eq!(grid.dim(), (9, 9));
        assert_eq!(grid[[0, 0]], 0);
        assert_eq!(grid[[0, 8]], 8);
        assert_eq!(grid[[1, 0]], 9);
        assert_eq!(grid[[8, 8]], 80);
    }

    #[test]
    fn test_to_grid_rejects_wrong_length() {
        let values = Array1::<f32>::zeros(64);
        let err = to_grid("cells", values.view()).unwrap_err();
        match err {
            Error::ShapeMismatch {
                expected, actual, ..
            } => {
                assert_eq!(expected, vec![81]);
                assert_eq!(actual, vec![64]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_check_cell_count_accepts_81() {
        assert!(check_cell_count("cells", 81).is_ok());
        assert!(check_cell_count("cells", 0).is_err());
    }
}
