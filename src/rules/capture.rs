//! Capture rules for Othello
//!
//! A move is legal on an empty cell when, in at least one of the eight
//! directions, a contiguous run of opposing discs (length >= 1) is
//! immediately followed by one of the mover's own discs. Applying the move
//! flips every such run. Runs in different directions are independent and
//! are all computed from the pre-move board.

use crate::board::{Board, Disc, Pos, DIRECTIONS};

/// A single move flips at most 18 discs (six per ray is the geometric
/// limit, and at most three rays can reach that length at once).
pub const MAX_FLIPS: usize = 18;

/// Discs flipped by one move, recorded for incremental hash updates.
#[derive(Debug, Clone, Copy)]
pub struct FlipInfo {
    pub positions: [Pos; MAX_FLIPS],
    pub count: u8,
}

impl FlipInfo {
    fn new() -> Self {
        Self {
            positions: [Pos { row: 0, col: 0 }; MAX_FLIPS],
            count: 0,
        }
    }

    #[inline]
    fn push(&mut self, pos: Pos) {
        self.positions[self.count as usize] = pos;
        self.count += 1;
    }

    /// Iterate over the flipped positions.
    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions[..self.count as usize].iter().copied()
    }
}

/// Scan one direction from `pos` and append the bounded opposing run to
/// `flips`. Returns true if the run exists (length >= 1 and terminated by
/// one of `side`'s discs before the edge or an empty cell).
fn scan_direction(
    board: &Board,
    pos: Pos,
    side: Disc,
    dr: i32,
    dc: i32,
    flips: &mut FlipInfo,
) -> bool {
    let opponent = side.opponent();
    let start = flips.count;

    let mut r = i32::from(pos.row) + dr;
    let mut c = i32::from(pos.col) + dc;

    while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == opponent {
        flips.push(Pos::new(r as u8, c as u8));
        r += dr;
        c += dc;
    }

    let bounded = flips.count > start
        && Pos::is_valid(r, c)
        && board.get(Pos::new(r as u8, c as u8)) == side;

    if !bounded {
        flips.count = start;
    }
    bounded
}

/// Check whether placing `side` at `pos` is a legal move.
///
/// Legal iff the cell is empty and at least one direction holds a maximal
/// contiguous opposing run bounded by a same-side disc.
#[must_use]
pub fn is_legal_move(board: &Board, pos: Pos, side: Disc) -> bool {
    if side == Disc::Empty || !board.is_empty(pos) {
        return false;
    }

    let opponent = side.opponent();
    for &(dr, dc) in &DIRECTIONS {
        let mut r = i32::from(pos.row) + dr;
        let mut c = i32::from(pos.col) + dc;
        let mut found = false;

        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == opponent {
            found = true;
            r += dr;
            c += dc;
        }

        if found && Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == side {
            return true;
        }
    }
    false
}

/// All legal moves for `side`, in row-major order.
///
/// Callers must not depend on the order for correctness; the search
/// re-sorts by its own ordering heuristics.
#[must_use]
pub fn legal_moves(board: &Board, side: Disc) -> Vec<Pos> {
    let mut moves = Vec::new();
    for idx in 0..crate::board::TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        if is_legal_move(board, pos, side) {
            moves.push(pos);
        }
    }
    moves
}

/// Compute the discs a move would flip, without mutating the board.
#[must_use]
pub fn flips_for_move(board: &Board, pos: Pos, side: Disc) -> FlipInfo {
    let mut flips = FlipInfo::new();
    if side == Disc::Empty || !board.is_empty(pos) {
        return flips;
    }
    for &(dr, dc) in &DIRECTIONS {
        scan_direction(board, pos, side, dr, dc, &mut flips);
    }
    flips
}

/// Apply a legal move: place `side` at `pos` and flip every bounded
/// opposing run. Returns the flipped discs.
///
/// If the move is illegal this is a no-op returning an empty `FlipInfo`;
/// callers are expected to check `is_legal_move` first.
pub fn apply_move(board: &mut Board, pos: Pos, side: Disc) -> FlipInfo {
    // All flips are computed from the pre-move board, so the placed disc is
    // never scanned as part of an opposing run.
    let flips = flips_for_move(board, pos, side);
    if flips.count == 0 {
        return flips;
    }

    board.place(pos, side);
    for flip_pos in flips.iter() {
        board.flip_to(flip_pos, side);
    }
    flips
}
