//! Minimax search with alpha-beta pruning
//!
//! Depth-limited minimax over the rules engine and evaluator, with:
//! - Alpha-beta pruning and static move ordering (corner-first)
//! - Transposition table probes keyed by Zobrist hash
//! - Pass handling: a side with no legal move passes without consuming
//!   search depth, since a forced pass is not a real ply
//!
//! Scores are always from the maximizing side's perspective, which is the
//! side the root search was invoked for.

use crate::board::{Board, Disc, Pos};
use crate::eval::{cell_weight, evaluate};
use crate::rules::{apply_move, has_any_move, legal_moves};

use super::tt::{EntryType, TranspositionTable};
use super::zobrist::ZobristTable;

/// Infinity bound for the alpha-beta window. Well above any reachable
/// evaluation but far from i32 overflow.
const INF: i32 = 1_000_000;

/// Search result containing the best move found and statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; `None` means the side to move must pass.
    pub best_move: Option<Pos>,
    /// Evaluation score of the position from the searched side's view
    pub score: i32,
    /// Depth the search was run at
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
}

/// Alpha-beta searcher with transposition table.
///
/// One searcher serves one maximizing side: TT scores are stored from the
/// perspective of the side `search` was called for, so callers create a
/// fresh searcher (or clear the table) when switching sides.
pub struct Searcher {
    zobrist: ZobristTable,
    tt: TranspositionTable,
    nodes: u64,
}

impl Searcher {
    /// Create a new searcher with the given transposition table size in
    /// megabytes.
    #[must_use]
    pub fn new(tt_size_mb: usize) -> Self {
        Self {
            zobrist: ZobristTable::new(),
            tt: TranspositionTable::new(tt_size_mb),
            nodes: 0,
        }
    }

    /// Search for the best move for `side`, looking `depth` plies ahead.
    ///
    /// If `side` has no legal move the result carries `best_move: None`
    /// and the static evaluation; the caller treats this as a pass, not
    /// an error.
    pub fn search(&mut self, board: &Board, side: Disc, depth: u8) -> SearchResult {
        let depth = depth.max(1);
        self.nodes = 0;

        let hash = self.zobrist.hash(board, side);
        let moves = self.ordered_moves(board, side, hash);

        if moves.is_empty() {
            return SearchResult {
                best_move: None,
                score: evaluate(board, side),
                depth,
                nodes: self.nodes,
            };
        }

        let mut alpha = -INF;
        let beta = INF;
        let mut best_move = None;
        let mut best_score = -INF;

        for mov in moves {
            let (child, child_hash) = self.make_child(board, mov, side, hash);
            let score =
                self.alpha_beta(&child, side.opponent(), depth - 1, alpha, beta, side, child_hash);

            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
            alpha = alpha.max(best_score);
        }

        // Root always searches a full window, so the score is exact.
        self.tt.store(hash, depth, best_score, EntryType::Exact, best_move);

        SearchResult {
            best_move,
            score: best_score,
            depth,
            nodes: self.nodes,
        }
    }

    /// Clear the transposition table.
    pub fn clear_tt(&mut self) {
        self.tt.clear();
    }

    /// Transposition table statistics.
    #[must_use]
    pub fn tt_stats(&self) -> super::tt::TTStats {
        self.tt.stats()
    }

    /// Recursive minimax with alpha-beta pruning.
    ///
    /// `max_side` is the side the root search was invoked for; scores are
    /// from its perspective at every node.
    #[allow(clippy::too_many_arguments)]
    fn alpha_beta(
        &mut self,
        board: &Board,
        side: Disc,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        max_side: Disc,
        hash: u64,
    ) -> i32 {
        self.nodes += 1;

        let moves = legal_moves(board, side);

        if moves.is_empty() {
            if !has_any_move(board, side.opponent()) {
                // Neither side can move: terminal position.
                return evaluate(board, max_side);
            }
            if depth == 0 {
                return evaluate(board, max_side);
            }
            // Forced pass: same depth, flipped side. The opponent is known
            // to have a move, so this cannot recurse twice in a row.
            return self.alpha_beta(
                board,
                side.opponent(),
                depth,
                alpha,
                beta,
                max_side,
                self.zobrist.update_pass(hash),
            );
        }

        if depth == 0 {
            return evaluate(board, max_side);
        }

        // Probe the table. Scores are usable only at the exact stored
        // depth (the cache key is board + side + remaining depth); the
        // stored move is always usable for ordering.
        let mut tt_move = None;
        if let Some(entry) = self.tt.probe(hash) {
            tt_move = entry.best_move;
            if entry.depth == depth {
                match entry.entry_type {
                    EntryType::Exact => return entry.score,
                    EntryType::LowerBound if entry.score >= beta => return entry.score,
                    EntryType::UpperBound if entry.score <= alpha => return entry.score,
                    _ => {}
                }
            }
        }

        let mut moves = moves;
        Self::sort_moves(&mut moves, tt_move);

        let maximizing = side == max_side;
        let (alpha_orig, beta_orig) = (alpha, beta);
        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for mov in moves {
            let (child, child_hash) = self.make_child(board, mov, side, hash);
            let score = self.alpha_beta(
                &child,
                side.opponent(),
                depth - 1,
                alpha,
                beta,
                max_side,
                child_hash,
            );

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                beta = beta.min(best_score);
            }

            if beta <= alpha {
                break;
            }
        }

        let entry_type = if best_score <= alpha_orig {
            EntryType::UpperBound
        } else if best_score >= beta_orig {
            EntryType::LowerBound
        } else {
            EntryType::Exact
        };
        self.tt.store(hash, depth, best_score, entry_type, best_move);

        best_score
    }

    /// Clone the board, apply the move and update the hash incrementally.
    fn make_child(&self, board: &Board, mov: Pos, side: Disc, hash: u64) -> (Board, u64) {
        let mut child = *board;
        let flips = apply_move(&mut child, mov, side);

        let mut child_hash = self.zobrist.update_place(hash, mov, side);
        for pos in flips.iter() {
            child_hash = self.zobrist.update_flip(child_hash, pos, side);
        }

        (child, child_hash)
    }

    /// Legal moves for `side`, pre-sorted for pruning.
    fn ordered_moves(&self, board: &Board, side: Disc, hash: u64) -> Vec<Pos> {
        let mut moves = legal_moves(board, side);
        Self::sort_moves(&mut moves, self.tt.get_best_move(hash));
        moves
    }

    /// Sort by static cell weight descending (corners first, X-squares
    /// last), with the TT move promoted to the front.
    fn sort_moves(moves: &mut [Pos], tt_move: Option<Pos>) {
        moves.sort_by_key(|&mov| {
            if Some(mov) == tt_move {
                i32::MIN
            } else {
                -cell_weight(mov)
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference minimax without pruning or memoization, used to verify
    /// that alpha-beta is a pure optimization.
    fn plain_minimax(board: &Board, side: Disc, depth: u8, max_side: Disc) -> i32 {
        let moves = legal_moves(board, side);

        if moves.is_empty() {
            if !has_any_move(board, side.opponent()) {
                return evaluate(board, max_side);
            }
            if depth == 0 {
                return evaluate(board, max_side);
            }
            return plain_minimax(board, side.opponent(), depth, max_side);
        }
        if depth == 0 {
            return evaluate(board, max_side);
        }

        let maximizing = side == max_side;
        let mut best = if maximizing { -INF } else { INF };
        for mov in moves {
            let mut child = *board;
            apply_move(&mut child, mov, side);
            let score = plain_minimax(&child, side.opponent(), depth - 1, max_side);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }

    /// A line position where black's reply forces white to pass:
    /// `B W . W` on the top row. Black's only move is (0,2); afterwards
    /// white has no legal move anywhere but black can continue at (0,4).
    fn forced_pass_board() -> Board {
        let mut board = Board::empty();
        board.place(Pos::new(0, 0), Disc::Black);
        board.place(Pos::new(0, 1), Disc::White);
        board.place(Pos::new(0, 3), Disc::White);
        board
    }

    #[test]
    fn test_depth_one_maximizes_immediate_eval() {
        let board = Board::new();
        let mut searcher = Searcher::new(1);
        let result = searcher.search(&board, Disc::Black, 1);

        let best = result.best_move.expect("opening position has moves");
        let mut best_eval = i32::MIN;
        for mov in legal_moves(&board, Disc::Black) {
            let mut child = board;
            apply_move(&mut child, mov, Disc::Black);
            best_eval = best_eval.max(evaluate(&child, Disc::Black));
        }

        let mut chosen_child = board;
        apply_move(&mut chosen_child, best, Disc::Black);
        assert_eq!(evaluate(&chosen_child, Disc::Black), best_eval);
        assert_eq!(result.score, best_eval);
    }

    #[test]
    fn test_alphabeta_matches_plain_minimax() {
        // Pruning is an optimization, not a behavior change: root scores
        // must agree with the unpruned reference at the same depth.
        let mut board = Board::new();
        apply_move(&mut board, Pos::new(2, 3), Disc::Black);
        apply_move(&mut board, Pos::new(2, 2), Disc::White);

        for depth in 1..=4u8 {
            let mut searcher = Searcher::new(1);
            let result = searcher.search(&board, Disc::Black, depth);
            let reference = plain_minimax(&board, Disc::Black, depth, Disc::Black);
            assert_eq!(
                result.score, reference,
                "alpha-beta diverged from minimax at depth {}",
                depth
            );
        }
    }

    #[test]
    fn test_no_legal_moves_returns_none() {
        // White to move on the forced-pass board has nothing: the search
        // reports a pass, not an error.
        let board = forced_pass_board();
        let mut searcher = Searcher::new(1);
        let result = searcher.search(&board, Disc::White, 4);
        assert!(result.best_move.is_none());
        assert_eq!(result.score, evaluate(&board, Disc::White));
    }

    #[test]
    fn test_pass_branch_searches_opponent_reply() {
        // Black plays (0,2), white must pass, black continues. The search
        // must route through the pass branch and agree with the reference
        // implementation rather than treating the position as terminal.
        let board = forced_pass_board();
        let mut searcher = Searcher::new(1);
        let result = searcher.search(&board, Disc::Black, 2);

        assert_eq!(result.best_move, Some(Pos::new(0, 2)));
        assert_eq!(
            result.score,
            plain_minimax(&board, Disc::Black, 2, Disc::Black)
        );
    }

    #[test]
    fn test_search_returns_legal_move() {
        let board = Board::new();
        let mut searcher = Searcher::new(1);
        for depth in [1, 3, 5] {
            let result = searcher.search(&board, Disc::Black, depth);
            let mov = result.best_move.expect("opening has moves");
            assert!(crate::rules::is_legal_move(&board, mov, Disc::Black));
        }
    }

    #[test]
    fn test_deeper_search_counts_more_nodes() {
        let board = Board::new();
        let mut shallow = Searcher::new(1);
        let mut deep = Searcher::new(1);
        let n1 = shallow.search(&board, Disc::Black, 1).nodes;
        let n4 = deep.search(&board, Disc::Black, 4).nodes;
        assert!(n4 > n1);
    }

    #[test]
    fn test_clear_tt() {
        let board = Board::new();
        let mut searcher = Searcher::new(1);
        let _ = searcher.search(&board, Disc::Black, 3);
        assert!(searcher.tt_stats().used > 0);
        searcher.clear_tt();
        assert_eq!(searcher.tt_stats().used, 0);
    }
}
