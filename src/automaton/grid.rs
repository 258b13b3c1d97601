//! Toroidal grid representation and neighbor counting

use super::random::BinarySource;
use crate::error::{LifeError, Result};
use itertools::iproduct;
use std::fmt;

/// A toroidal cell buffer: every coordinate wraps modulo the grid size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Allocate a zero-filled grid. Both dimensions must be positive.
    pub fn new(cols: usize, rows: usize) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(LifeError::InvalidDimensions { cols, rows });
        }
        Ok(Self {
            cols,
            rows,
            cells: vec![false; cols * rows],
        })
    }

    /// Allocate a fresh zero-filled buffer with this grid's dimensions
    pub fn allocate_next(&self) -> Self {
        Self {
            cols: self.cols,
            rows: self.rows,
            cells: vec![false; self.cols * self.rows],
        }
    }

    /// Create a grid from rows of cells, `rows[y][x]`
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut grid = Self::new(width, height)?;

        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(LifeError::RaggedRows {
                    row: y,
                    len: row.len(),
                    expected: width,
                });
            }
            for (x, alive) in row.into_iter().enumerate() {
                grid.set(x, y, alive);
            }
        }

        Ok(grid)
    }

    /// Create a grid with the listed `(x, y)` cells alive
    pub fn with_living(cols: usize, rows: usize, living: &[(usize, usize)]) -> Result<Self> {
        let mut grid = Self::new(cols, rows)?;
        for &(x, y) in living {
            grid.set(x, y, true);
        }
        Ok(grid)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        (y % self.rows) * self.cols + (x % self.cols)
    }

    #[inline]
    fn wrap(value: isize, size: usize) -> usize {
        value.rem_euclid(size as isize) as usize
    }

    /// Cell state at `(x, y)`, wrapped onto the torus
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Set the cell at `(x, y)`, wrapped onto the torus
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = alive;
    }

    /// Count living cells in the Moore neighborhood of `(x, y)`.
    ///
    /// Sums the wrapped 3x3 block centered on the cell and subtracts the
    /// center, so the result is always in `0..=8`. On grids narrower than
    /// three cells a neighbor may be visited more than once.
    pub fn neighbor_count(&self, x: usize, y: usize) -> u8 {
        let block: u8 = iproduct!(-1isize..=1, -1isize..=1)
            .map(|(dx, dy)| {
                let col = Self::wrap(x as isize + dx, self.cols);
                let row = Self::wrap(y as isize + dy, self.rows);
                u8::from(self.cells[row * self.cols + col])
            })
            .sum();

        block - u8::from(self.get(x, y))
    }

    /// Fill every cell from the given source
    pub fn randomize<S: BinarySource + ?Sized>(&mut self, source: &mut S) {
        for y in 0..self.rows {
            for x in 0..self.cols {
                let alive = source.next_binary();
                self.set(x, y, alive);
            }
        }
    }

    /// Whether column `x` equals column `cols - 1 - x` for every `x`
    pub fn is_mirror_symmetric(&self) -> bool {
        (0..self.rows).all(|y| {
            (0..self.cols / 2).all(|x| self.get(x, y) == self.get(self.cols - 1 - x, y))
        })
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Number of cells whose state differs from `other`
    pub fn diff_count(&self, other: &Grid) -> usize {
        self.cells
            .iter()
            .zip(&other.cells)
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Row-major view of the cells
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows {
            for x in 0..self.cols {
                write!(f, "{}", if self.get(x, y) { '1' } else { '0' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::random::PatternSource;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cells().len(), 12);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(LifeError::InvalidDimensions { cols: 0, rows: 5 })
        );
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::from_rows(Vec::new()).is_err());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rows = vec![vec![true, false], vec![true]];
        assert_eq!(
            Grid::from_rows(rows),
            Err(LifeError::RaggedRows { row: 1, len: 1, expected: 2 })
        );
    }

    #[test]
    fn test_allocate_next_is_independent() {
        let grid = Grid::with_living(4, 3, &[(1, 1), (2, 2)]).unwrap();
        let mut next = grid.allocate_next();
        assert_eq!((next.cols(), next.rows()), (4, 3));
        assert!(next.is_empty());

        next.set(0, 0, true);
        assert!(!grid.get(0, 0));
    }

    #[test]
    fn test_access_wraps() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(4, 5, true);
        assert!(grid.get(1, 2));
        assert!(grid.get(7, 8));
    }

    #[test]
    fn test_neighbor_wrap_from_corner() {
        let grid = Grid::with_living(3, 3, &[(0, 0)]).unwrap();

        // Diagonal wrap: (2, 2) reaches (0, 0) through both edges
        assert_eq!(grid.neighbor_count(2, 2), 1);

        // Every other cell on a 3x3 torus is adjacent to (0, 0) exactly once
        for y in 0..3 {
            for x in 0..3 {
                let expected = if (x, y) == (0, 0) { 0 } else { 1 };
                assert_eq!(grid.neighbor_count(x, y), expected, "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_neighbor_count_excludes_center() {
        let rows = vec![
            vec![true, true, true, false],
            vec![true, true, true, false],
            vec![true, true, true, false],
            vec![false, false, false, false],
        ];
        let grid = Grid::from_rows(rows).unwrap();
        assert_eq!(grid.neighbor_count(1, 1), 8);
        // (3, 3) touches (0, 0), (2, 2), (0, 2), (2, 0) through the wrap
        assert_eq!(grid.neighbor_count(3, 3), 4);
    }

    #[test]
    fn test_randomize_uses_source() {
        let mut grid = Grid::new(4, 2).unwrap();
        grid.randomize(&mut PatternSource::constant(true));
        assert_eq!(grid.living_count(), 8);

        grid.randomize(&mut PatternSource::new(vec![true, false]));
        assert_eq!(grid.to_string(), "1010\n1010\n");
    }

    #[test]
    fn test_mirror_symmetry_check() {
        let symmetric = Grid::with_living(5, 2, &[(0, 0), (4, 0), (2, 1)]).unwrap();
        assert!(symmetric.is_mirror_symmetric());

        let lopsided = Grid::with_living(5, 2, &[(0, 0)]).unwrap();
        assert!(!lopsided.is_mirror_symmetric());
    }

    #[test]
    fn test_diff_count() {
        let a = Grid::with_living(3, 3, &[(0, 0), (1, 1)]).unwrap();
        let b = Grid::with_living(3, 3, &[(1, 1), (2, 2)]).unwrap();
        assert_eq!(a.diff_count(&b), 2);
        assert_eq!(a.diff_count(&a), 0);
    }
}
