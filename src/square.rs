//! The placed-square value type.

use std::fmt;

/// A square placed on the board.
///
/// `x` is the row and `y` the column of the top-left cell, both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub size: usize,
    pub x: usize,
    pub y: usize,
}

impl Square {
    pub const fn new(size: usize, x: usize, y: usize) -> Self {
        Self { size, x, y }
    }

    /// Number of unit cells this square covers.
    pub const fn area(&self) -> usize {
        self.size * self.size
    }

    /// True if the square lies entirely inside a `board_size` x `board_size` board.
    pub const fn fits_within(&self, board_size: usize) -> bool {
        self.x + self.size <= board_size && self.y + self.size <= board_size
    }

    /// Iterates over the (row, column) coordinates of every covered cell.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let Self { size, x, y } = *self;
        (x..x + size).flat_map(move |row| (y..y + size).map(move |col| (row, col)))
    }
}

/// Formats as the `x y size` triple used in the result listing.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.size)
    }
}
