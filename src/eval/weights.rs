//! Evaluation weights for Othello positions
//!
//! These constants are tunable, not derived. The one hierarchy that must
//! hold for sane play is that corners strictly dominate the penalty on
//! their adjacent cells, so the AI never trades a corner away to dodge an
//! X-square.

use crate::board::{Pos, BOARD_SIZE};

/// Static positional weights, row-major. Corners are the most valuable
/// squares because discs there can never be flipped; the X- and C-squares
/// next to them are penalized because occupying them usually hands the
/// corner to the opponent. Edges are moderate, the center near-neutral.
pub const CELL_WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [120, -40, 20, 5, 5, 20, -40, 120],
    [-40, -60, -5, -5, -5, -5, -60, -40],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [-40, -60, -5, -5, -5, -5, -60, -40],
    [120, -40, 20, 5, 5, 20, -40, 120],
];

/// Weight per point of mobility difference. Keeping options open while
/// constraining the opponent is worth a few positional points per move.
pub const MOBILITY_WEIGHT: i32 = 4;

/// Weight per stable (corner-anchored) disc.
pub const STABILITY_WEIGHT: i32 = 15;

/// Static weight of a single cell, used for move ordering.
#[inline]
#[must_use]
pub fn cell_weight(pos: Pos) -> i32 {
    CELL_WEIGHTS[pos.row as usize][pos.col as usize]
}
