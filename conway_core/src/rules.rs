// rules.rs - Generation transition for Conway's Game of Life

use crate::grid::{Cell, Grid};
use crate::topology;

/// Number of live cells among the in-bounds neighbours of `(row, col)`.
pub fn live_neighbors<const R: usize, const C: usize>(
    grid: &Grid<R, C>,
    row: usize,
    col: usize,
) -> u8 {
    let cells = grid.rows();
    topology::neighbors(row, col, R, C)
        .map(|(nr, nc)| cells[nr][nc].bit())
        .sum()
}

/// Applies the B3/S23 rules to one cell.
///
/// The death check runs before the birth check: fewer than two or more than
/// three neighbours always leaves a dead cell, whatever the current state.
#[inline]
#[rustfmt::skip]
pub fn next_state(cell: Cell, live_neighbors: u8) -> Cell {
    match (cell, live_neighbors) {
        (_, n) if n < 2 || n > 3 => Cell::Dead,   // Under- or overpopulation
        (Cell::Dead, 3)          => Cell::Alive,  // Reproduction
        (cell, _)                => cell,         // Survival, or stays dead
    }
}

/// Computes the next generation. `current` is only read.
pub fn step<const R: usize, const C: usize>(current: &Grid<R, C>) -> Grid<R, C> {
    let cells = current.rows();
    Grid::from_fn(|row, col| next_state(cells[row][col], live_neighbors(current, row, col)))
}
