use std::ops::{Index, IndexMut};

use crate::error::AlignError;
use crate::r#const::MAX_MATRIX_CELLS;

/// Dense row-major grid backing the score and trace matrices. Both aligners
/// index it as `(row, col)` with the usual +1 boundary row/column.
#[derive(Debug, Clone)]
pub(crate) struct Grid<T> {
    cols: usize,
    cells: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    /// Allocates a zeroed `rows x cols` grid, refusing pathological shapes
    /// before touching the allocator.
    pub(crate) fn new(rows: usize, cols: usize) -> Result<Self, AlignError> {
        let len = rows
            .checked_mul(cols)
            .filter(|&len| len <= MAX_MATRIX_CELLS)
            .ok_or(AlignError::ResourceExceeded {
                rows,
                cols,
                limit: MAX_MATRIX_CELLS,
            })?;

        Ok(Self {
            cols,
            cells: vec![T::default(); len],
        })
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.cells[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.cells[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexing_is_row_major() {
        let mut grid: Grid<i32> = Grid::new(3, 4).unwrap();
        grid[(0, 0)] = 1;
        grid[(1, 2)] = 7;
        grid[(2, 3)] = -3;

        assert_eq!(grid[(0, 0)], 1);
        assert_eq!(grid[(1, 2)], 7);
        assert_eq!(grid[(2, 3)], -3);
        assert_eq!(grid[(0, 1)], 0);
    }

    #[test]
    fn test_rejects_oversized_shapes() {
        let result: Result<Grid<i32>, _> = Grid::new(1 << 20, 1 << 20);
        assert_eq!(
            result.unwrap_err(),
            AlignError::ResourceExceeded {
                rows: 1 << 20,
                cols: 1 << 20,
                limit: MAX_MATRIX_CELLS,
            }
        );
    }

    #[test]
    fn test_rejects_overflowing_shapes() {
        let result: Result<Grid<i32>, _> = Grid::new(usize::MAX, 2);
        assert!(matches!(result, Err(AlignError::ResourceExceeded { .. })));
    }
}
