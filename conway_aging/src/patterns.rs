use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::board::Board;
use crate::error::Result;

/// A named seed pattern, as (row, col) offsets from its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (2, 12), (2, 13), (3, 11), (3, 15), (4, 10), (4, 16),
            (5, 10), (5, 14), (5, 16), (5, 17), (6, 10), (6, 16),
            (7, 11), (7, 15), (8, 12), (8, 13),
            (0, 24), (1, 22), (1, 24), (2, 20), (2, 21), (3, 20),
            (3, 21), (4, 20), (4, 21), (5, 22), (5, 24), (6, 24),
            (2, 34), (2, 35), (3, 34), (3, 35),
        ],
    },
];

/// Looks a pattern up by name, ignoring ASCII case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

impl Pattern {
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0)
    }

    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0)
    }

    /// Overlays the pattern onto `board` with its top-left corner at
    /// (row, col). Cells that fall off the board are clipped.
    pub fn stamp(&self, board: &Board, row: usize, col: usize) -> Board {
        board.with_live_cells(self.cells.iter().map(|&(r, c)| (row + r, col + c)))
    }

    /// Overlays the pattern centred on `board`. A pattern larger than the
    /// board is anchored at the top-left corner and clipped.
    pub fn stamp_centered(&self, board: &Board) -> Board {
        let row = board.rows().saturating_sub(self.height()) / 2;
        let col = board.cols().saturating_sub(self.width()) / 2;
        self.stamp(board, row, col)
    }
}

/// A rows x cols board with roughly a third of its cells alive.
/// The same seed always produces the same board.
pub fn random_board(rows: usize, cols: usize, seed: u64) -> Result<Board> {
    let empty = Board::new(rows, cols)?;

    // Simple pseudo-random generator
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    let mut state = hasher.finish();

    let mut live = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            if (state >> 33) % 3 == 0 {
                live.push((row, col));
            }
        }
    }
    Ok(empty.with_live_cells(live))
}
