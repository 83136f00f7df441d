//! Heuristic pre-placement of large squares before the search starts.
//!
//! The rule is chosen from the parity and primality of the board size. Odd
//! composite multiples of three (9, 15) match no rule and start empty.

use tracing::info;

use crate::board::Board;
use crate::square::Square;

/// Which decomposition rule seeded a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Four quadrant squares of size N/2.
    EvenSplit,
    /// One ceil(N/2) square at the origin and two floor(N/2) squares along the axes.
    PrimeCorner,
    /// Same layout as `PrimeCorner`, for odd sizes not divisible by three.
    OddCorner,
    /// No squares pre-placed.
    Unseeded,
}

impl Strategy {
    /// Picks the first matching rule for a board of side `size`.
    pub fn for_size(size: usize) -> Self {
        if size % 2 == 0 {
            Self::EvenSplit
        } else if is_prime(size) {
            Self::PrimeCorner
        } else if size % 3 != 0 {
            Self::OddCorner
        } else {
            Self::Unseeded
        }
    }

    /// The squares this rule places on a board of side `size`.
    pub fn squares(self, size: usize) -> Vec<Square> {
        match self {
            Self::EvenSplit => {
                let half = size / 2;
                [(0, 0), (0, half), (half, 0), (half, half)]
                    .into_iter()
                    .map(|(x, y)| Square::new(half, x, y))
                    .collect()
            }
            Self::PrimeCorner | Self::OddCorner => {
                let large = size.div_ceil(2);
                let small = size / 2;
                vec![
                    Square::new(large, 0, 0),
                    Square::new(small, 0, large),
                    Square::new(small, large, 0),
                ]
            }
            Self::Unseeded => Vec::new(),
        }
    }
}

/// Trial division up to the integer square root.
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    (2usize..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

/// Builds the starting board for the search.
pub fn seed(size: usize) -> Board {
    let strategy = Strategy::for_size(size);
    let mut board = Board::new(size);

    for square in strategy.squares(size) {
        board.add_square(square.size, square.x, square.y);
    }

    info!(
        size,
        ?strategy,
        seeded = board.placed_count(),
        "seeded board"
    );
    board
}
