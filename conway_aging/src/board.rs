// board.rs - Board type for the aging Game of Life

use crate::error::{LifeError, Result};

/// Default cap on a cell's age. Purely a display limit, not part of the rule.
pub const MAX_AGE: u8 = 8;

pub const DEAD: u8 = 0;
pub const NEWBORN: u8 = 1;

/// A rectangular grid of cell ages, stored row-major.
///
/// `0` is a dead cell; any positive value is a live cell that has been alive
/// for that many consecutive generations. Edits never mutate in place, they
/// hand back a fresh board, so a previous generation can always be compared
/// against the next one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl Board {
    /// An all-dead board. Both dimensions must be non-zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![DEAD; rows * cols],
        })
    }

    /// Builds a board from nested rows. Every row must have the same length.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.is_empty() || cols == 0 || rows.iter().any(|r| r.len() != cols) {
            return Err(LifeError::InvalidDimension { rows: rows.len(), cols });
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells: rows.concat(),
        })
    }

    /// An all-dead board with the same dimensions as this one.
    pub fn cleared(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            cells: vec![DEAD; self.cells.len()],
        }
    }

    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols, "cell buffer does not match {rows}x{cols}");
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Cell value at (row, col), or `None` off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|v| v > DEAD)
    }

    /// Copy of this board with (row, col) set to `value`.
    pub fn set_cell(&self, row: usize, col: usize, value: u8) -> Result<Self> {
        let index = self.index(row, col)?;
        let mut next = self.clone();
        next.cells[index] = value;
        Ok(next)
    }

    /// Click semantics: a dead cell is born, a live cell of any age dies.
    pub fn toggle(&self, row: usize, col: usize) -> Result<Self> {
        let index = self.index(row, col)?;
        let value = if self.cells[index] == DEAD { NEWBORN } else { DEAD };
        self.set_cell(row, col, value)
    }

    /// Drag-paint semantics: a dead cell is born, a live cell keeps its age.
    pub fn force_alive(&self, row: usize, col: usize) -> Result<Self> {
        let index = self.index(row, col)?;
        if self.cells[index] == DEAD {
            self.set_cell(row, col, NEWBORN)
        } else {
            Ok(self.clone())
        }
    }

    /// Copy of this board with every listed cell born (age 1). Coordinates
    /// past the edge are dropped, live cells keep their age.
    pub fn with_live_cells<I>(&self, cells: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut next = self.clone();
        for (row, col) in cells {
            if let Ok(index) = self.index(row, col) {
                if next.cells[index] == DEAD {
                    next.cells[index] = NEWBORN;
                }
            }
        }
        next
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(self.cols)
    }

    pub fn row(&self, row: usize) -> Option<&[u8]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Nested copy of the grid, one `Vec` per row.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.iter_rows().map(<[u8]>::to_vec).collect()
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v > DEAD).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&v| v == DEAD)
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}
