//! Terminal detection and winner scoring

use crate::board::{Board, Disc, Pos, TOTAL_CELLS};

use super::capture::is_legal_move;

/// Final outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameOutcome {
    BlackWins,
    WhiteWins,
    Draw,
}

/// Check whether `side` has at least one legal move.
///
/// Short-circuits on the first legal cell, so it is cheaper than
/// `legal_moves(..).is_empty()`.
#[must_use]
pub fn has_any_move(board: &Board, side: Disc) -> bool {
    for idx in 0..TOTAL_CELLS {
        if is_legal_move(board, Pos::from_index(idx), side) {
            return true;
        }
    }
    false
}

/// A position is terminal iff neither side has any legal move.
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    !has_any_move(board, Disc::Black) && !has_any_move(board, Disc::White)
}

/// Winner by strict disc count. Equal counts are a draw.
#[must_use]
pub fn winner(board: &Board) -> GameOutcome {
    let black = board.count(Disc::Black);
    let white = board.count(Disc::White);
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => GameOutcome::BlackWins,
        std::cmp::Ordering::Less => GameOutcome::WhiteWins,
        std::cmp::Ordering::Equal => GameOutcome::Draw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::legal_moves;

    #[test]
    fn test_start_not_terminal() {
        let board = Board::new();
        assert!(!is_terminal(&board));
        assert!(has_any_move(&board, Disc::Black));
        assert!(has_any_move(&board, Disc::White));
    }

    #[test]
    fn test_full_board_terminal() {
        // Fill the whole board with black: no empty cells, no moves.
        let mut board = Board::empty();
        for idx in 0..TOTAL_CELLS {
            board.place(Pos::from_index(idx), Disc::Black);
        }
        assert!(is_terminal(&board));
        assert_eq!(winner(&board), GameOutcome::BlackWins);
    }

    #[test]
    fn test_no_moves_for_either_side_is_terminal() {
        // Two separated discs of the same color: neither side can move
        // (white has no disc to flip, black has no opposing run).
        let mut board = Board::empty();
        board.place(Pos::new(0, 0), Disc::Black);
        board.place(Pos::new(7, 7), Disc::Black);
        assert!(legal_moves(&board, Disc::Black).is_empty());
        assert!(legal_moves(&board, Disc::White).is_empty());
        assert!(is_terminal(&board));
        assert_eq!(winner(&board), GameOutcome::BlackWins);
    }

    #[test]
    fn test_winner_by_strict_count() {
        let mut board = Board::empty();
        board.place(Pos::new(0, 0), Disc::Black);
        board.place(Pos::new(0, 1), Disc::White);
        board.place(Pos::new(0, 2), Disc::White);
        assert_eq!(winner(&board), GameOutcome::WhiteWins);
    }

    #[test]
    fn test_draw_on_equal_count() {
        let mut board = Board::empty();
        board.place(Pos::new(0, 0), Disc::Black);
        board.place(Pos::new(7, 7), Disc::White);
        assert_eq!(winner(&board), GameOutcome::Draw);
    }
}
