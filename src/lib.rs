//! Squared-square tiler library.
//!
//! Splits an N x N board into integer squares: a parity/primality heuristic
//! seeds the largest squares, then a breadth-first search fills the rest.

pub mod board;
pub mod error;
pub mod input;
pub mod seed;
pub mod solver;
pub mod square;

pub use board::Board;
pub use error::{InputError, TilingError};
pub use seed::Strategy;
pub use solver::{Placement, SearchStats};
pub use square::Square;

/// Seeds and searches a board of side `size`, returning the full tiling.
pub fn tile(size: usize) -> Board {
    solver::search(seed::seed(size))
}
