//! Board-size limits and parsing of the user-supplied size.

use std::io::BufRead;

use crate::error::InputError;

/// Smallest board the tiler accepts.
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest board the tiler accepts; keeps the breadth-first frontier tractable.
pub const MAX_BOARD_SIZE: usize = 20;

/// Message shown when the size is outside the supported range.
pub const OUT_OF_RANGE_MESSAGE: &str =
    "Error: The size of the square should be in the range from 2 to 20.";

/// Parses a board size, accepting surrounding whitespace.
///
/// Negative and oversized integers are `OutOfRange`; anything that is not an
/// integer is `Malformed`.
pub fn parse_board_size(text: &str) -> Result<usize, InputError> {
    let trimmed = text.trim();
    let value: i64 = trimmed.parse().map_err(|_| InputError::Malformed {
        input: trimmed.to_string(),
    })?;

    match usize::try_from(value) {
        Ok(size) if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) => Ok(size),
        _ => Err(InputError::OutOfRange { value }),
    }
}

/// Reads one line from `reader` and parses it as a board size.
pub fn read_board_size<R: BufRead>(mut reader: R) -> Result<usize, InputError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::Closed);
    }
    parse_board_size(&line)
}
