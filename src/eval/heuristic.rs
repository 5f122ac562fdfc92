//! Heuristic evaluation function for Othello positions
//!
//! The score combines three additive terms:
//! - Positional: static cell weights, +1 for own discs, -1 for opponent's
//! - Mobility: legal-move count difference, scaled
//! - Stability: corner-anchored discs that can never be flipped, scaled
//!
//! The result is symmetric: `evaluate(board, side)` equals
//! `-evaluate(board, side.opponent())`.

use crate::board::{Bitboard, Board, Disc, Pos, BOARD_SIZE};
use crate::rules::legal_moves;

use super::weights::{CELL_WEIGHTS, MOBILITY_WEIGHT, STABILITY_WEIGHT};

/// Evaluate the board from the perspective of the given side.
///
/// Positive values favor `side`, negative values favor the opponent.
/// Higher is better; the scale is positional points, not discs.
#[must_use]
pub fn evaluate(board: &Board, side: Disc) -> i32 {
    let opponent = side.opponent();

    let positional = positional_score(board, side) - positional_score(board, opponent);

    let mobility =
        legal_moves(board, side).len() as i32 - legal_moves(board, opponent).len() as i32;

    let stability = stable_discs(board, side) as i32 - stable_discs(board, opponent) as i32;

    positional + MOBILITY_WEIGHT * mobility + STABILITY_WEIGHT * stability
}

/// Sum of static cell weights over one side's discs.
fn positional_score(board: &Board, side: Disc) -> i32 {
    let Some(discs) = board.discs(side) else {
        return 0;
    };

    discs
        .iter_ones()
        .map(|pos| CELL_WEIGHTS[pos.row as usize][pos.col as usize])
        .sum()
}

/// Count discs of `side` that are corner-anchored: on a corner, or part of
/// an unbroken same-side line running along a board edge from a corner.
///
/// This is an approximation, not an exact stable-disc computation.
/// Interior discs shielded on every line are not counted, and edge discs
/// counted here genuinely can never be flipped, so the count is a lower
/// bound on true stability.
#[must_use]
pub fn stable_discs(board: &Board, side: Disc) -> u32 {
    let last = (BOARD_SIZE - 1) as u8;
    let corners = [
        Pos::new(0, 0),
        Pos::new(0, last),
        Pos::new(last, 0),
        Pos::new(last, last),
    ];

    // Walk the two edges out of each occupied corner, marking discs in a
    // scratch bitboard so a fully owned edge is not counted twice.
    let mut stable = Bitboard::new();
    for corner in corners {
        if board.get(corner) != side {
            continue;
        }
        stable.set(corner);

        let along_row: i32 = if corner.col == 0 { 1 } else { -1 };
        let mut c = i32::from(corner.col) + along_row;
        while Pos::is_valid(corner.row.into(), c) {
            let pos = Pos::new(corner.row, c as u8);
            if board.get(pos) != side {
                break;
            }
            stable.set(pos);
            c += along_row;
        }

        let along_col: i32 = if corner.row == 0 { 1 } else { -1 };
        let mut r = i32::from(corner.row) + along_col;
        while Pos::is_valid(r, corner.col.into()) {
            let pos = Pos::new(r as u8, corner.col);
            if board.get(pos) != side {
                break;
            }
            stable.set(pos);
            r += along_col;
        }
    }

    stable.count()
}
