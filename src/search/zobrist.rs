//! Zobrist hashing for position identification
//!
//! Zobrist hashing allows O(1) incremental hash updates when placing or
//! flipping discs, which keeps transposition table lookups cheap inside
//! the search.
//!
//! The key covers the packed board content plus the side to move; the
//! search depth lives in the table entry, not the key.

use crate::board::{Board, Disc, Pos, TOTAL_CELLS};

/// Zobrist hash table for position hashing.
///
/// Uses XOR-based hashing with precomputed pseudo-random values for each
/// (position, disc color) combination.
pub struct ZobristTable {
    /// Random values for black discs at each position
    black: [u64; TOTAL_CELLS],
    /// Random values for white discs at each position
    white: [u64; TOTAL_CELLS],
    /// Random value XORed when black is to move
    black_to_move: u64,
}

impl ZobristTable {
    /// Create a new Zobrist table with deterministic random values.
    ///
    /// Uses a linear congruential generator with a fixed seed so hashes
    /// are reproducible across runs. Constants from Knuth's MMIX LCG.
    #[must_use]
    pub fn new() -> Self {
        let mut seed: u64 = 0x1234_5678_9ABC_DEF0;
        let mut next_rand = || {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1);
            seed
        };

        let mut black = [0u64; TOTAL_CELLS];
        let mut white = [0u64; TOTAL_CELLS];

        for i in 0..TOTAL_CELLS {
            black[i] = next_rand();
            white[i] = next_rand();
        }

        Self {
            black,
            white,
            black_to_move: next_rand(),
        }
    }

    /// Compute the full hash for a board position.
    ///
    /// Iterates over all discs on the board. For incremental updates
    /// during search, use `update_place`, `update_flip` and `update_pass`.
    #[must_use]
    pub fn hash(&self, board: &Board, side_to_move: Disc) -> u64 {
        let mut h = 0u64;

        for pos in board.black.iter_ones() {
            h ^= self.black[pos.to_index()];
        }

        for pos in board.white.iter_ones() {
            h ^= self.white[pos.to_index()];
        }

        if side_to_move == Disc::Black {
            h ^= self.black_to_move;
        }

        h
    }

    /// Incrementally update hash after placing a disc.
    ///
    /// Also toggles the side-to-move component, since a placed disc ends
    /// the mover's turn.
    #[inline]
    #[must_use]
    pub fn update_place(&self, hash: u64, pos: Pos, disc: Disc) -> u64 {
        let idx = pos.to_index();
        let disc_hash = match disc {
            Disc::Black => self.black[idx],
            Disc::White => self.white[idx],
            Disc::Empty => 0,
        };
        hash ^ disc_hash ^ self.black_to_move
    }

    /// Incrementally update hash after flipping a disc to `to`.
    ///
    /// Removes the opponent's value and adds the new owner's value; the
    /// side-to-move component is untouched because flips happen within
    /// the same move.
    #[inline]
    #[must_use]
    pub fn update_flip(&self, hash: u64, pos: Pos, to: Disc) -> u64 {
        let idx = pos.to_index();
        match to {
            Disc::Black => hash ^ self.white[idx] ^ self.black[idx],
            Disc::White => hash ^ self.black[idx] ^ self.white[idx],
            Disc::Empty => hash,
        }
    }

    /// Toggle only the side-to-move component. Used when a side passes:
    /// the board is unchanged but the turn flips.
    #[inline]
    #[must_use]
    pub fn update_pass(&self, hash: u64) -> u64 {
        hash ^ self.black_to_move
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::apply_move;

    #[test]
    fn test_hash_deterministic() {
        let zt1 = ZobristTable::new();
        let zt2 = ZobristTable::new();
        let board = Board::new();
        assert_eq!(
            zt1.hash(&board, Disc::Black),
            zt2.hash(&board, Disc::Black)
        );
    }

    #[test]
    fn test_side_to_move_distinguished() {
        let zt = ZobristTable::new();
        let board = Board::new();
        assert_ne!(
            zt.hash(&board, Disc::Black),
            zt.hash(&board, Disc::White)
        );
    }

    #[test]
    fn test_incremental_matches_full() {
        let zt = ZobristTable::new();
        let mut board = Board::new();

        let hash = zt.hash(&board, Disc::Black);

        let mov = Pos::new(2, 3);
        let flips = apply_move(&mut board, mov, Disc::Black);

        let mut incremental = zt.update_place(hash, mov, Disc::Black);
        for pos in flips.iter() {
            incremental = zt.update_flip(incremental, pos, Disc::Black);
        }

        assert_eq!(incremental, zt.hash(&board, Disc::White));
    }

    #[test]
    fn test_pass_toggles_side_only() {
        let zt = ZobristTable::new();
        let board = Board::new();

        let black_hash = zt.hash(&board, Disc::Black);
        assert_eq!(zt.update_pass(black_hash), zt.hash(&board, Disc::White));
        assert_eq!(zt.update_pass(zt.update_pass(black_hash)), black_hash);
    }
}
