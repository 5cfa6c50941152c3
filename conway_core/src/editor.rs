// editor.rs - Direct grid edits: toggle, randomize, clear
//
// None of these touch the grid they are handed; each returns a replacement
// value, so they compose with a tick that is still reading the old one.

use rand::Rng;

use crate::error::Result;
use crate::grid::{Cell, Grid};

/// Default `randomize` threshold: roughly a quarter of the cells come up live.
pub const DEFAULT_RANDOM_THRESHOLD: f64 = 0.75;

/// Returns a copy of `grid` with the cell at `(row, col)` flipped.
pub fn toggle_cell<const R: usize, const C: usize>(
    grid: &Grid<R, C>,
    row: usize,
    col: usize,
) -> Result<Grid<R, C>> {
    grid.check_bounds(row, col)?;
    let mut next = *grid;
    next.set(row, col, grid.rows()[row][col].flipped());
    Ok(next)
}

/// A fresh grid where each cell is live with probability `1 - threshold`.
pub fn randomize<const R: usize, const C: usize>(threshold: f64) -> Grid<R, C> {
    randomize_with(&mut rand::rng(), threshold)
}

/// Like [`randomize`], drawing from the supplied generator.
///
/// A threshold outside `[0, 1]` is clamped; NaN yields an empty grid.
pub fn randomize_with<const R: usize, const C: usize>(
    rng: &mut impl Rng,
    threshold: f64,
) -> Grid<R, C> {
    let threshold = threshold.clamp(0.0, 1.0);
    Grid::from_fn(|_, _| {
        if rng.random::<f64>() > threshold { Cell::Alive } else { Cell::Dead }
    })
}

/// Same as [`crate::grid::create_empty_grid`].
pub fn clear<const R: usize, const C: usize>() -> Grid<R, C> {
    Grid::empty()
}
