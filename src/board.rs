//! Board representation and placement operations.
//!
//! The grid is a flat row-major array where each cell holds the 1-based index
//! of the square covering it, or 0 for empty. The first empty cell is cached
//! after every placement so the search never has to look for it.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::error::TilingError;
use crate::square::Square;

/// Grid cell value: 0 for empty, otherwise a 1-based square index.
type CellIndex = u16;

/// Converts (row, column) to a flat grid index.
#[inline(always)]
const fn coord_to_idx(board_size: usize, x: usize, y: usize) -> usize {
    x * board_size + y
}

/// A partially or fully tiled N x N board.
///
/// Cloning produces an independent copy of the grid and square list, which is
/// how the search branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    grid: Vec<CellIndex>,
    squares: Vec<Square>,
    next_empty_cell: Option<(usize, usize)>,
}

impl Board {
    /// Creates an empty board of `size` x `size` cells.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            grid: vec![0; size * size],
            squares: Vec::new(),
            next_empty_cell: (size > 0).then_some((0, 0)),
        }
    }

    /// Side length of the board.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Squares in placement order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn placed_count(&self) -> usize {
        self.squares.len()
    }

    /// First uncovered cell in row-major order, or `None` when the board is full.
    pub const fn next_empty_cell(&self) -> Option<(usize, usize)> {
        self.next_empty_cell
    }

    pub const fn is_full(&self) -> bool {
        self.next_empty_cell.is_none()
    }

    /// Returns the 1-based index of the square covering (x, y), 0 if empty,
    /// or `None` outside the board.
    pub fn cell(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.grid
            .get(coord_to_idx(self.size, x, y))
            .map(|&index| usize::from(index))
    }

    /// Whether a `size` x `size` square fits at (x, y) without leaving the
    /// board or touching a covered cell.
    pub fn can_add(&self, size: usize, x: usize, y: usize) -> bool {
        if size == 0 || !Square::new(size, x, y).fits_within(self.size) {
            return false;
        }

        (x..x + size).all(|row| {
            let start = coord_to_idx(self.size, row, y);
            self.grid[start..start + size].iter().all(|&cell| cell == 0)
        })
    }

    /// Places a square and refreshes the cached empty cell.
    ///
    /// The caller must have checked [`Board::can_add`] first; placing over a
    /// covered cell corrupts the board.
    pub fn add_square(&mut self, size: usize, x: usize, y: usize) {
        debug_assert!(
            self.can_add(size, x, y),
            "square {size} at ({x}, {y}) does not fit"
        );

        // square counts never exceed size^2 <= 400
        let index = (self.squares.len() + 1) as CellIndex;
        for row in x..x + size {
            let start = coord_to_idx(self.size, row, y);
            self.grid[start..start + size].fill(index);
        }

        self.squares.push(Square::new(size, x, y));
        self.update_next_empty_cell();
    }

    /// Rescans from (0, 0); the search relies on the row-major tie-break.
    fn update_next_empty_cell(&mut self) {
        self.next_empty_cell = self
            .grid
            .iter()
            .position(|&cell| cell == 0)
            .map(|idx| (idx / self.size, idx % self.size));
    }

    /// Checks that the square list tiles the board exactly and agrees with
    /// the grid.
    pub fn verify(&self) -> Result<(), TilingError> {
        let mut covered: FxHashSet<(usize, usize)> = FxHashSet::default();

        for (position, square) in self.squares.iter().enumerate() {
            let index = position + 1;
            if !square.fits_within(self.size) {
                return Err(TilingError::OutOfBounds {
                    index,
                    size: square.size,
                    x: square.x,
                    y: square.y,
                    board_size: self.size,
                });
            }

            for (x, y) in square.cells() {
                if !covered.insert((x, y)) {
                    return Err(TilingError::Overlap { x, y });
                }
                let found = self.cell(x, y).unwrap_or_default();
                if found != index {
                    return Err(TilingError::GridMismatch {
                        x,
                        y,
                        expected: index,
                        found,
                    });
                }
            }
        }

        // grid cells claimed by no square
        for (idx, &cell) in self.grid.iter().enumerate() {
            let (x, y) = (idx / self.size, idx % self.size);
            if cell != 0 && !covered.contains(&(x, y)) {
                return Err(TilingError::GridMismatch {
                    x,
                    y,
                    expected: 0,
                    found: usize::from(cell),
                });
            }
        }

        let missing = self.size * self.size - covered.len();
        if missing > 0 {
            return Err(TilingError::Uncovered { missing });
        }

        Ok(())
    }

    /// Renders the board as rows of square sizes.
    ///
    /// Empty cells show as '.'. Columns are right-aligned to the width of the
    /// largest possible size.
    pub fn render(&self) -> String {
        let mut sizes = vec![0usize; self.size * self.size];
        for square in &self.squares {
            for (x, y) in square.cells() {
                sizes[coord_to_idx(self.size, x, y)] = square.size;
            }
        }

        let width = self.size.to_string().len();
        let mut output = String::new();
        for row in sizes.chunks(self.size.max(1)) {
            let line: Vec<String> = row
                .iter()
                .map(|&size| {
                    if size == 0 {
                        format!("{:>width$}", '.')
                    } else {
                        format!("{size:>width$}")
                    }
                })
                .collect();
            output.push_str(&line.join(" "));
            output.push('\n');
        }

        output
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Brute-force feasibility: every cell of the block exists and is empty.
    fn naive_can_add(board: &Board, size: usize, x: usize, y: usize) -> bool {
        size > 0
            && (x..x + size).all(|row| (y..y + size).all(|col| board.cell(row, col) == Some(0)))
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(5);
        assert_eq!(board.size(), 5);
        assert_eq!(board.placed_count(), 0);
        assert_eq!(board.next_empty_cell(), Some((0, 0)));
        assert!(!board.is_full());
        assert_eq!(board.cell(4, 4), Some(0));
        assert_eq!(board.cell(5, 0), None);
    }

    #[test]
    fn test_add_square_writes_one_based_index() {
        let mut board = Board::new(4);
        board.add_square(2, 0, 0);
        board.add_square(1, 0, 2);

        assert_eq!(board.cell(1, 1), Some(1));
        assert_eq!(board.cell(0, 2), Some(2));
        assert_eq!(board.cell(0, 3), Some(0));
        assert_eq!(board.squares(), &[Square::new(2, 0, 0), Square::new(1, 0, 2)]);
        assert_eq!(board.next_empty_cell(), Some((0, 3)));
    }

    #[test]
    fn test_next_empty_cell_scans_row_major() {
        let mut board = Board::new(3);
        board.add_square(1, 0, 0);
        board.add_square(1, 0, 1);
        board.add_square(1, 0, 2);
        assert_eq!(board.next_empty_cell(), Some((1, 0)));
    }

    #[test]
    fn test_full_board_has_no_empty_cell() {
        let mut board = Board::new(2);
        board.add_square(1, 0, 0);
        board.add_square(1, 0, 1);
        board.add_square(1, 1, 0);
        assert!(!board.is_full());
        board.add_square(1, 1, 1);
        assert!(board.is_full());
        assert_eq!(board.next_empty_cell(), None);
    }

    #[test]
    fn test_can_add_matches_brute_force_on_small_boards() {
        for n in 1..=6usize {
            // a few irregular occupancy layouts per board size
            let layouts: Vec<Vec<Square>> = vec![
                vec![],
                vec![Square::new(1, n / 2, n / 2)],
                vec![Square::new(n.div_ceil(2), 0, 0)],
                vec![Square::new(1, 0, n - 1), Square::new(1, n - 1, 0)],
            ];

            for layout in layouts {
                let mut board = Board::new(n);
                for square in &layout {
                    if board.can_add(square.size, square.x, square.y) {
                        board.add_square(square.size, square.x, square.y);
                    }
                }

                for size in 0..=n + 1 {
                    for x in 0..=n {
                        for y in 0..=n {
                            assert_eq!(
                                board.can_add(size, x, y),
                                naive_can_add(&board, size, x, y),
                                "n={n} size={size} at ({x}, {y}) with {layout:?}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Board::new(3);
        original.add_square(2, 0, 0);

        let mut branch = original.clone();
        branch.add_square(1, 0, 2);

        assert_eq!(original.placed_count(), 1);
        assert_eq!(original.cell(0, 2), Some(0));
        assert_eq!(branch.cell(0, 2), Some(2));
    }

    #[test]
    fn test_verify_accepts_exact_tiling() {
        let mut board = Board::new(3);
        board.add_square(2, 0, 0);
        for (x, y) in [(0, 2), (1, 2), (2, 0), (2, 1), (2, 2)] {
            board.add_square(1, x, y);
        }
        assert_eq!(board.verify(), Ok(()));
    }

    #[test]
    fn test_verify_reports_gaps() {
        let mut board = Board::new(3);
        board.add_square(2, 0, 0);
        assert_eq!(board.verify(), Err(TilingError::Uncovered { missing: 5 }));
    }

    #[test]
    fn test_verify_reports_overlap_and_bounds() {
        let mut board = Board::new(3);
        board.add_square(2, 0, 0);
        board.squares.push(Square::new(1, 1, 1));
        assert_eq!(board.verify(), Err(TilingError::Overlap { x: 1, y: 1 }));

        let mut board = Board::new(3);
        board.squares.push(Square::new(2, 2, 0));
        assert!(matches!(
            board.verify(),
            Err(TilingError::OutOfBounds { index: 1, .. })
        ));
    }

    #[test]
    fn test_verify_reports_stray_grid_cells() {
        let mut board = Board::new(2);
        board.add_square(2, 0, 0);
        board.squares.clear();
        assert_eq!(
            board.verify(),
            Err(TilingError::GridMismatch {
                x: 0,
                y: 0,
                expected: 0,
                found: 1
            })
        );
    }

    #[test]
    fn test_render_shows_sizes_and_gaps() {
        let mut board = Board::new(3);
        board.add_square(2, 0, 0);
        board.add_square(1, 0, 2);

        insta::assert_snapshot!(board.render(), @r"
        2 2 1
        2 2 .
        . . .
        ");
    }

    #[test]
    fn test_render_pads_two_digit_boards() {
        let mut board = Board::new(10);
        board.add_square(5, 0, 0);
        let first_row = board.render().lines().next().unwrap_or_default().to_string();
        assert_eq!(first_row, " 5  5  5  5  5  .  .  .  .  .");
    }
}
