//! Error types for the Game of Life core.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("invalid board dimension: {rows}x{cols} (rows and cols must be positive)")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, LifeError>;
