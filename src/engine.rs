//! AI engine facade over the search
//!
//! Wraps the alpha-beta searcher with a depth policy keyed off the number
//! of empty cells: conservative in the wide-open midgame, progressively
//! deeper as the board fills, and an exact solve once few enough empties
//! remain. The depth never exceeds the remaining plies, since the game
//! cannot be searched past its end.

use crate::board::{Board, Disc, Pos};
use crate::rules::has_any_move;
use crate::search::{SearchResult, Searcher, TTStats};
use std::time::Instant;

/// With this many empties or fewer the engine searches to the end of the
/// game, which is an exact solve of the endgame.
const ENDGAME_SOLVE_EMPTIES: u32 = 10;

/// Empty-cell count above which one ply is shaved off the configured
/// depth to keep early-midgame response times down (branching is widest
/// there).
const WIDE_OPEN_EMPTIES: u32 = 44;

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found; `None` means the side to move must pass
    pub best_move: Option<Pos>,
    /// Evaluation score of the position after the move
    pub score: i32,
    /// Depth the search ran at
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

/// AI engine for Othello.
///
/// # Example
///
/// ```
/// use othello::{AiEngine, Board, Disc};
///
/// let mut engine = AiEngine::with_config(8, 4);
/// let board = Board::new();
///
/// if let Some(pos) = engine.get_move(&board, Disc::Black) {
///     println!("AI plays at ({}, {})", pos.row, pos.col);
/// }
/// ```
pub struct AiEngine {
    /// Alpha-beta searcher with transposition table
    searcher: Searcher,
    /// Configured search depth for normal play
    max_depth: u8,
}

impl AiEngine {
    /// Create a new engine with default settings: 16 MB transposition
    /// table, depth 6.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(16, 6)
    }

    /// Create an engine with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `tt_size_mb` - Transposition table size in megabytes
    /// * `max_depth` - Search depth for normal play
    #[must_use]
    pub fn with_config(tt_size_mb: usize, max_depth: u8) -> Self {
        Self {
            searcher: Searcher::new(tt_size_mb),
            max_depth: max_depth.max(1),
        }
    }

    /// Get the best move for the given position.
    ///
    /// Returns `None` when `side` has no legal move; the caller converts
    /// this into a pass.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, side: Disc) -> Option<Pos> {
        self.get_move_with_stats(board, side).best_move
    }

    /// Get the best move together with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, side: Disc) -> MoveResult {
        let start = Instant::now();

        if !has_any_move(board, side) {
            return MoveResult {
                best_move: None,
                score: 0,
                depth: 0,
                time_ms: start.elapsed().as_millis() as u64,
                nodes: 0,
            };
        }

        let depth = self.depth_for(board);
        let result = self.searcher.search(board, side, depth);
        Self::from_search(result, start.elapsed().as_millis() as u64)
    }

    /// Depth policy by empty-cell count.
    pub fn depth_for(&self, board: &Board) -> u8 {
        let empties = board.empty_count();

        let depth = if empties <= ENDGAME_SOLVE_EMPTIES {
            empties as u8
        } else if empties > WIDE_OPEN_EMPTIES {
            self.max_depth.saturating_sub(1).max(1)
        } else {
            self.max_depth
        };

        // Never search past the end of the game.
        depth.min(empties as u8).max(1)
    }

    /// Set the search depth for normal play.
    pub fn set_max_depth(&mut self, depth: u8) {
        self.max_depth = depth.max(1);
    }

    /// Get the configured search depth.
    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Clear the transposition table. Call when starting a new game or
    /// when the engine switches sides, so stale perspectives cannot leak.
    pub fn clear_cache(&mut self) {
        self.searcher.clear_tt();
    }

    /// Transposition table statistics.
    #[must_use]
    pub fn tt_stats(&self) -> TTStats {
        self.searcher.tt_stats()
    }

    fn from_search(result: SearchResult, time_ms: u64) -> MoveResult {
        MoveResult {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            time_ms,
            nodes: result.nodes,
        }
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{apply_move, is_legal_move, legal_moves};

    #[test]
    fn test_engine_creation() {
        let engine = AiEngine::new();
        assert_eq!(engine.max_depth(), 6);
    }

    #[test]
    fn test_engine_with_config() {
        let engine = AiEngine::with_config(8, 4);
        assert_eq!(engine.max_depth(), 4);
    }

    #[test]
    fn test_engine_returns_legal_opening_move() {
        let board = Board::new();
        let mut engine = AiEngine::with_config(8, 3);
        let mov = engine.get_move(&board, Disc::Black).expect("opening has moves");
        assert!(is_legal_move(&board, mov, Disc::Black));
    }

    #[test]
    fn test_engine_no_moves_is_pass() {
        // White has no move on this board; the engine reports a pass.
        let mut board = Board::empty();
        board.place(Pos::new(0, 0), Disc::Black);
        board.place(Pos::new(0, 1), Disc::White);
        board.place(Pos::new(0, 3), Disc::White);

        let mut engine = AiEngine::with_config(8, 3);
        let result = engine.get_move_with_stats(&board, Disc::White);
        assert!(result.best_move.is_none());
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_depth_never_exceeds_remaining_plies() {
        let mut engine = AiEngine::with_config(8, 8);

        // Near-full board: only 3 empties left.
        let mut board = Board::empty();
        for idx in 0..61 {
            board.place(Pos::from_index(idx), Disc::Black);
        }
        assert_eq!(board.empty_count(), 3);
        assert!(engine.depth_for(&board) <= 3);

        engine.set_max_depth(2);
        assert!(engine.depth_for(&board) <= 3);
    }

    #[test]
    fn test_depth_policy_phases() {
        let engine = AiEngine::with_config(8, 6);

        // Start position is wide open: 60 empties, shaved depth.
        let start = Board::new();
        assert_eq!(engine.depth_for(&start), 5);

        // Midgame board: full configured depth.
        let mut mid = Board::new();
        let mut side = Disc::Black;
        for _ in 0..30 {
            if mid.empty_count() <= 40 {
                break;
            }
            let moves = legal_moves(&mid, side);
            if let Some(&mov) = moves.first() {
                apply_move(&mut mid, mov, side);
            }
            side = side.opponent();
        }
        assert_eq!(engine.depth_for(&mid), 6);
    }

    #[test]
    fn test_endgame_solve_depth() {
        let engine = AiEngine::with_config(8, 4);
        let mut board = Board::empty();
        for idx in 0..58 {
            board.place(Pos::from_index(idx), Disc::White);
        }
        // 6 empties: search to the end of the game.
        assert_eq!(engine.depth_for(&board), 6);
    }

    #[test]
    fn test_engine_deterministic() {
        let board = Board::new();
        let mut engine = AiEngine::with_config(8, 3);
        let first = engine.get_move(&board, Disc::Black);
        let second = engine.get_move(&board, Disc::Black);
        assert_eq!(first, second);
    }

    #[test]
    fn test_clear_cache() {
        let board = Board::new();
        let mut engine = AiEngine::with_config(8, 3);
        let _ = engine.get_move(&board, Disc::Black);
        engine.clear_cache();
        assert_eq!(engine.tt_stats().used, 0);
    }
}
