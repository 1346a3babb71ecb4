use crate::{pos, BoolMatrix, Pos};

/// The eight cells surrounding a position.
fn neighbors(center: Pos) -> impl Iterator<Item = Pos> {
    (-1..=1)
        .flat_map(|row| (-1..=1).map(move |col| pos!(row, col)))
        .filter(|delta| *delta != pos!(0, 0))
        .map(move |delta| center + delta)
}

/// Counts the live neighbors of every logical cell of a bordered grid.
/// The dead border keeps every lookup in bounds, so edge cells need no
/// special casing.
pub(crate) fn census(grid: &BoolMatrix) -> Vec<Vec<u8>> {
    let size = grid.rows() - 2;
    (1..=size)
        .map(|row| {
            (1..=size)
                .map(|col| {
                    neighbors(pos!(row as i32, col as i32))
                        .filter(|p| grid.get(p.row as usize, p.col as usize).is_active())
                        .count() as u8
                })
                .collect()
        })
        .collect()
}
