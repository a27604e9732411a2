// neighbors.rs - Live neighbour counting on a bounded (non-wrapping) board

use crate::board::Board;

/// Offsets of the eight cells at Chebyshev distance 1.
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Whether (row, col) falls inside a rows x cols board.
pub fn in_bounds(rows: usize, cols: usize, row: isize, col: isize) -> bool {
    row >= 0 && col >= 0 && (row as usize) < rows && (col as usize) < cols
}

/// Number of live cells around (row, col). Cells past the edge count as dead.
pub fn count_live_neighbors(board: &Board, row: usize, col: usize) -> u8 {
    let (rows, cols) = board.dimensions();
    let mut count = 0;
    for &(dr, dc) in &NEIGHBOR_OFFSETS {
        let (nr, nc) = (row as isize + dr, col as isize + dc);
        if in_bounds(rows, cols, nr, nc) && board.is_alive(nr as usize, nc as usize) {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_checks() {
        assert!(in_bounds(3, 4, 0, 0));
        assert!(in_bounds(3, 4, 2, 3));
        assert!(!in_bounds(3, 4, -1, 0));
        assert!(!in_bounds(3, 4, 0, -1));
        assert!(!in_bounds(3, 4, 3, 0));
        assert!(!in_bounds(3, 4, 0, 4));
    }

    #[test]
    fn fully_surrounded_cell_has_eight() {
        let board = Board::from_rows(&[vec![1, 2, 3], vec![4, 0, 5], vec![6, 7, 8]]).unwrap();
        assert_eq!(count_live_neighbors(&board, 1, 1), 8);
    }

    #[test]
    fn center_cell_is_not_its_own_neighbor() {
        let board = Board::new(3, 3).unwrap().set_cell(1, 1, 1).unwrap();
        assert_eq!(count_live_neighbors(&board, 1, 1), 0);
        assert_eq!(count_live_neighbors(&board, 0, 0), 1);
    }

    #[test]
    fn edges_do_not_wrap() {
        // Live cells in the opposite corners would be neighbours on a torus.
        let board = Board::from_rows(&[vec![1, 0, 0], vec![0, 0, 0], vec![0, 0, 1]]).unwrap();
        assert_eq!(count_live_neighbors(&board, 0, 0), 0);
        assert_eq!(count_live_neighbors(&board, 2, 2), 0);
        assert_eq!(count_live_neighbors(&board, 0, 2), 0);
    }

    #[test]
    fn corner_of_full_board_has_three() {
        let board = Board::from_rows(&vec![vec![1; 4]; 4]).unwrap();
        assert_eq!(count_live_neighbors(&board, 0, 0), 3);
        assert_eq!(count_live_neighbors(&board, 0, 1), 5);
        assert_eq!(count_live_neighbors(&board, 3, 3), 3);
    }
}
