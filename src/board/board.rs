//! Board structure with the standard Othello start position

use super::bitboard::Bitboard;
use super::{Disc, Pos, BOARD_SIZE, TOTAL_CELLS};

/// Game board. Two bitboards, one per color.
///
/// The board is `Copy`: cloning it for search is two u64 copies, so the
/// search clones a child board per move instead of making/unmaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Black discs bitboard
    pub black: Bitboard,
    /// White discs bitboard
    pub white: Bitboard,
}

impl Board {
    /// Empty board with no discs placed.
    pub const fn empty() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Board with the standard start position: two diagonal pairs in the
    /// center four squares (White on d4/e5, Black on e4/d5).
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.place(Pos::new(3, 3), Disc::White);
        board.place(Pos::new(4, 4), Disc::White);
        board.place(Pos::new(3, 4), Disc::Black);
        board.place(Pos::new(4, 3), Disc::Black);
        board
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get disc at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Disc {
        if self.black.get(pos) {
            Disc::Black
        } else if self.white.get(pos) {
            Disc::White
        } else {
            Disc::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a disc without legality checking.
    /// Use `rules::apply_move` for game moves.
    #[inline]
    pub fn place(&mut self, pos: Pos, disc: Disc) {
        match disc {
            Disc::Black => self.black.set(pos),
            Disc::White => self.white.set(pos),
            Disc::Empty => {}
        }
    }

    /// Remove a disc
    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Flip the disc at `pos` to `disc`. The cell must hold the opponent.
    #[inline]
    pub fn flip_to(&mut self, pos: Pos, disc: Disc) {
        debug_assert_eq!(self.get(pos), disc.opponent());
        self.remove(pos);
        self.place(pos, disc);
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn discs(&self, disc: Disc) -> Option<&Bitboard> {
        match disc {
            Disc::Black => Some(&self.black),
            Disc::White => Some(&self.white),
            Disc::Empty => None,
        }
    }

    /// Count discs of one color
    #[inline]
    pub fn count(&self, disc: Disc) -> u32 {
        match disc {
            Disc::Black => self.black.count(),
            Disc::White => self.white.count(),
            Disc::Empty => TOTAL_CELLS as u32 - self.disc_count(),
        }
    }

    /// Total discs on board
    #[inline]
    pub fn disc_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Number of empty cells, which bounds the remaining plies.
    #[inline]
    pub fn empty_count(&self) -> u32 {
        TOTAL_CELLS as u32 - self.disc_count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
