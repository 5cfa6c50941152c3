// topology.rs - Moore neighbourhood offsets

/// Relative `(row, col)` offsets of the eight cells surrounding a cell,
/// walked row by row from the top-left neighbour.
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// In-bounds neighbours of `(row, col)` on a `rows` x `cols` grid.
///
/// Offsets that land past an edge are skipped rather than wrapped.
pub fn neighbors(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> impl Iterator<Item = (usize, usize)> {
    NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
        let nr = row.checked_add_signed(dr)?;
        let nc = col.checked_add_signed(dc)?;
        (nr < rows && nc < cols).then_some((nr, nc))
    })
}
