// generation.rs - B3/S23 step with per-cell aging

use crate::board::{Board, DEAD, MAX_AGE, NEWBORN};
use crate::neighbors::count_live_neighbors;

/// Next state of a single cell given its current value and live neighbour count.
pub fn next_cell(current: u8, live_neighbors: u8, max_age: u8) -> u8 {
    match (current > DEAD, live_neighbors) {
        (true, 2) | (true, 3) => current.saturating_add(1).min(max_age), // Survival
        (false, 3)            => NEWBORN,                                // Birth
        _                     => DEAD,                                   // Death or stays dead
    }
}

/// Computes one row of the next generation, reading only from `board`.
pub fn next_row(board: &Board, row: usize, max_age: u8) -> Vec<u8> {
    (0..board.cols())
        .map(|col| {
            let current = board.get(row, col).unwrap_or(DEAD);
            next_cell(current, count_live_neighbors(board, row, col), max_age)
        })
        .collect()
}

/// Advances `board` one generation with the default age cap.
pub fn advance(board: &Board) -> Board {
    advance_with_cap(board, MAX_AGE)
}

/// Advances `board` one generation, capping ages at `max_age`.
///
/// The input is never touched: every neighbour count comes from the original
/// board, so cells updated early in the scan cannot leak into the counts of
/// cells scanned later.
pub fn advance_with_cap(board: &Board, max_age: u8) -> Board {
    let (rows, cols) = board.dimensions();
    let mut cells = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        cells.extend(next_row(board, row, max_age));
    }
    Board::from_cells(rows, cols, cells)
}
