//! Breadth-first search for a full tiling.
//!
//! The frontier is a FIFO queue of independent board snapshots. Each popped
//! board branches once per square size that fits at its first empty cell,
//! largest first, and the first branch that covers the whole board wins.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use crate::board::Board;
use crate::square::Square;

/// A square that the search just placed on one of its branches.
#[derive(Debug, Clone, Copy)]
pub struct Placement<'a> {
    /// Square count of the branch after placement.
    pub step: usize,
    pub square: Square,
    /// The branch, including the new square.
    pub board: &'a Board,
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Boards popped from the frontier and branched.
    pub expanded: usize,
    /// Branches created (one per placed square).
    pub branches: usize,
    /// Largest frontier length observed.
    pub peak_frontier: usize,
}

/// Searches from `seed` and returns the first full board found.
pub fn search(seed: Board) -> Board {
    search_with(seed, |_| {}).0
}

/// Like [`search`], calling `on_placement` for every branch created.
///
/// If the frontier runs dry without a full board the seed is returned as-is.
/// Every non-full board has a fitting 1x1 square at its empty cell, so this
/// only happens for degenerate boards smaller than 2x2.
pub fn search_with<F>(seed: Board, mut on_placement: F) -> (Board, SearchStats)
where
    F: FnMut(&Placement<'_>),
{
    let size = seed.size();
    let mut stats = SearchStats {
        peak_frontier: 1,
        ..SearchStats::default()
    };
    let fallback = seed.clone();
    let mut frontier = VecDeque::from([seed]);

    while let Some(head) = frontier.pop_front() {
        let Some((x, y)) = head.next_empty_cell() else {
            return finish(head, stats);
        };
        stats.expanded += 1;

        for candidate in (1..size).rev() {
            if !head.can_add(candidate, x, y) {
                continue;
            }

            let mut branch = head.clone();
            branch.add_square(candidate, x, y);
            stats.branches += 1;

            debug!(
                step = branch.placed_count(),
                x,
                y,
                size = candidate,
                "placed square"
            );
            on_placement(&Placement {
                step: branch.placed_count(),
                square: Square::new(candidate, x, y),
                board: &branch,
            });

            if branch.is_full() {
                return finish(branch, stats);
            }
            frontier.push_back(branch);
        }

        stats.peak_frontier = stats.peak_frontier.max(frontier.len());
    }

    warn!(size, "frontier exhausted without a full board");
    (fallback, stats)
}

fn finish(board: Board, stats: SearchStats) -> (Board, SearchStats) {
    info!(
        size = board.size(),
        squares = board.placed_count(),
        expanded = stats.expanded,
        branches = stats.branches,
        peak_frontier = stats.peak_frontier,
        "search finished"
    );
    (board, stats)
}
