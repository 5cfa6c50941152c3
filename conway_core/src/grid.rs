// grid.rs - Grid types for Conway's Game of Life

use std::fmt;

use crate::error::{LifeError, Result};

// Compile-time grid size configuration
pub const ROWS: usize = 30;                           // Rows in the playing area
pub const COLS: usize = 50;                           // Columns in the playing area

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn from_bit(bit: u8) -> Result<Self> {
        match bit {
            0 => Ok(Cell::Dead),
            1 => Ok(Cell::Alive),
            other => Err(LifeError::InvalidCell(other)),
        }
    }

    #[inline]
    pub const fn bit(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

/// A fixed `ROWS` x `COLS` generation.
///
/// Grids are plain values: every row owns its storage and every operation in
/// this crate hands back a fresh grid instead of editing the one it was given.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid<const R: usize = { ROWS }, const C: usize = { COLS }> {
    cells: [[Cell; C]; R],
}

impl<const R: usize, const C: usize> Grid<R, C> {
    const NON_EMPTY: () = assert!(R > 0 && C > 0, "grid dimensions must be positive");

    /// Every cell dead.
    pub fn empty() -> Self {
        let () = Self::NON_EMPTY;
        Self { cells: [[Cell::Dead; C]; R] }
    }

    pub fn from_fn(mut f: impl FnMut(usize, usize) -> Cell) -> Self {
        let mut grid = Self::empty();
        for (row, cells) in grid.cells.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = f(row, col);
            }
        }
        grid
    }

    /// Builds a grid from a literal matrix of 0/1 values.
    pub fn from_bits(bits: [[u8; C]; R]) -> Result<Self> {
        let mut grid = Self::empty();
        for (row, values) in bits.iter().enumerate() {
            for (col, &bit) in values.iter().enumerate() {
                grid.cells[row][col] = Cell::from_bit(bit)?;
            }
        }
        Ok(grid)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|cells| cells.get(col)).copied()
    }

    pub fn rows(&self) -> &[[Cell; C]; R] {
        &self.cells
    }

    pub fn to_bits(&self) -> [[u8; C]; R] {
        let mut bits = [[0; C]; R];
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                bits[row][col] = cell.bit();
            }
        }
        bits
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().map(move |(col, &cell)| (row, col, cell))
        })
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_alive()).count()
    }

    pub fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row < R && col < C {
            Ok(())
        } else {
            Err(LifeError::OutOfBounds { row, col, rows: R, cols: C })
        }
    }

    // Crate-internal: callers outside the crate only ever get new grids back.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }
}

impl<const R: usize, const C: usize> Default for Grid<R, C> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Returns a new grid with every cell dead.
pub fn create_empty_grid<const R: usize, const C: usize>() -> Grid<R, C> {
    Grid::empty()
}

impl<const R: usize, const C: usize> fmt::Display for Grid<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cells) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

impl<const R: usize, const C: usize> fmt::Debug for Grid<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{R}x{C}> [")?;
        writeln!(f, "{self}")?;
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_has_full_shape_and_no_live_cells() {
        let grid: Grid = create_empty_grid();
        assert_eq!(grid.rows().len(), ROWS);
        assert!(grid.rows().iter().all(|row| row.len() == COLS));
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn empty_grids_do_not_share_rows() {
        let first = Grid::<3, 3>::empty();
        let mut second = first;
        second.set(0, 0, Cell::Alive);
        assert_eq!(first.get(0, 0), Some(Cell::Dead));
        assert_eq!(second.get(0, 0), Some(Cell::Alive));
        assert_eq!(second.get(1, 0), Some(Cell::Dead));
    }

    #[test]
    fn from_bits_rejects_non_binary_values() {
        let err = Grid::<2, 2>::from_bits([[0, 1], [2, 0]]).unwrap_err();
        assert!(matches!(err, LifeError::InvalidCell(2)));
    }

    #[test]
    fn bits_survive_a_round_trip() {
        let bits = [[0, 1, 0], [1, 1, 0], [0, 0, 1]];
        let grid = Grid::<3, 3>::from_bits(bits).unwrap();
        assert_eq!(grid.to_bits(), bits);
        assert_eq!(grid.live_count(), 4);
    }

    #[test]
    fn get_is_none_outside_the_grid() {
        let grid = Grid::<3, 4>::empty();
        assert_eq!(grid.get(2, 3), Some(Cell::Dead));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 4), None);
    }

    #[test]
    fn check_bounds_reports_dimensions() {
        let grid = Grid::<3, 4>::empty();
        assert!(grid.check_bounds(2, 3).is_ok());
        match grid.check_bounds(3, 1) {
            Err(LifeError::OutOfBounds { row, col, rows, cols }) => {
                assert_eq!((row, col, rows, cols), (3, 1, 3, 4));
            }
            other => panic!("expected OutOfBounds, got {other:?}"),
        }
    }

    #[test]
    fn display_draws_live_cells_as_hashes() {
        let grid = Grid::<2, 3>::from_bits([[1, 0, 0], [0, 1, 1]]).unwrap();
        assert_eq!(grid.to_string(), "#..\n.##");
    }
}
