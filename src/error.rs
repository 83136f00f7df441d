//! Error types for board-size input and tiling verification.

use thiserror::Error;

use crate::input::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Failures while obtaining the board size from the user.
#[derive(Debug, Error)]
pub enum InputError {
    /// The value parsed, but lies outside the supported board sizes.
    #[error("board size {value} is outside {}..={}", MIN_BOARD_SIZE, MAX_BOARD_SIZE)]
    OutOfRange { value: i64 },

    /// The input was not an integer.
    #[error("expected an integer board size, got {input:?}")]
    Malformed { input: String },

    /// Standard input ended before a line was read.
    #[error("no board size given: input closed")]
    Closed,

    #[error("failed to read board size")]
    Read(#[from] std::io::Error),
}

impl InputError {
    /// Out-of-range sizes are reported to the user and end the run cleanly;
    /// everything else is fatal.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

/// A square list that does not describe an exact tiling of its board.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TilingError {
    #[error("square #{index} ({size} at {x},{y}) extends past a {board_size}x{board_size} board")]
    OutOfBounds {
        index: usize,
        size: usize,
        x: usize,
        y: usize,
        board_size: usize,
    },

    #[error("cell ({x}, {y}) is covered by more than one square")]
    Overlap { x: usize, y: usize },

    #[error("{missing} cell(s) left uncovered")]
    Uncovered { missing: usize },

    #[error("grid cell ({x}, {y}) holds {found}, squares say {expected}")]
    GridMismatch {
        x: usize,
        y: usize,
        expected: usize,
        found: usize,
    },
}
