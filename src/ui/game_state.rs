//! Game session management for the Othello GUI
//!
//! Owns the board, the turn/pass bookkeeping, the move history for undo,
//! and the background AI search. The AI runs on a spawned thread with a
//! single in-flight search; results are tagged with a generation counter
//! so a result arriving after a reset is discarded instead of being
//! applied to a stale board.

use crate::board::{Board, Disc, Pos};
use crate::engine::{AiEngine, MoveResult};
use crate::history::GameRecord;
use crate::rules::{apply_move, has_any_move, is_legal_move, winner, GameOutcome};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::Instant;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Human vs AI
    HumanVsAi { human_color: Disc },
    /// AI plays both sides
    SelfPlay,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::HumanVsAi {
            human_color: Disc::Black,
        }
    }
}

/// Options for starting a new game.
#[derive(Debug, Clone, Copy)]
pub struct NewGameConfig {
    pub mode: GameMode,
    /// Side that moves first (Black by convention, but configurable)
    pub first_to_move: Disc,
    pub ai_depth: u8,
}

impl Default for NewGameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            first_to_move: Disc::Black,
            ai_depth: 6,
        }
    }
}

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingHumanMove,
    ComputerThinking,
    GameOver,
}

/// Why a requested move was rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PlayError {
    #[error("the game is over")]
    GameOver,
    #[error("the AI is still thinking")]
    AiThinking,
    #[error("it is not your turn")]
    NotYourTurn,
    #[error("illegal move at ({row}, {col})")]
    IllegalMove { row: u8, col: u8 },
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<(u64, MoveResult)>,
        started: Instant,
    },
}

/// Snapshot of the state before a move was applied: enough to undo it.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    pub board: Board,
    pub side_to_move: Disc,
    pub mov: Pos,
}

/// Main session state. Exclusively owns the board; the search only ever
/// receives copies.
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Disc,
    pub game_over: Option<GameOutcome>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<Snapshot>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
    pub ai_depth: u8,

    /// Bumped on every reset; stale search results carry an old value.
    generation: u64,
    /// Ensures a finished game is handed to the history store only once.
    record_taken: bool,
}

impl GameState {
    pub fn new(config: NewGameConfig) -> Self {
        Self {
            board: Board::new(),
            mode: config.mode,
            current_turn: config.first_to_move,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
            ai_depth: config.ai_depth.max(1),
            generation: 0,
            record_taken: false,
        }
    }

    /// Start a fresh game, discarding any pending search result.
    pub fn reset(&mut self, config: NewGameConfig) {
        self.board = Board::new();
        self.mode = config.mode;
        self.current_turn = config.first_to_move;
        self.game_over = None;
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.message = None;
        self.ai_depth = config.ai_depth.max(1);
        self.generation += 1;
        self.record_taken = false;
    }

    /// Current session phase.
    pub fn phase(&self) -> Phase {
        if self.game_over.is_some() {
            Phase::GameOver
        } else if self.is_ai_turn() {
            Phase::ComputerThinking
        } else {
            Phase::AwaitingHumanMove
        }
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::HumanVsAi { human_color } => self.current_turn == human_color,
            GameMode::SelfPlay => false,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::HumanVsAi { human_color } => self.current_turn != human_color,
            GameMode::SelfPlay => true,
        }
    }

    /// Check if a search is currently in flight
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Legal moves for the side to move; the board view renders these as
    /// hints.
    pub fn current_legal_moves(&self) -> Vec<Pos> {
        if self.game_over.is_some() {
            return Vec::new();
        }
        crate::rules::legal_moves(&self.board, self.current_turn)
    }

    /// Per-side disc counts for the score display.
    pub fn disc_counts(&self) -> (u32, u32) {
        (self.board.count(Disc::Black), self.board.count(Disc::White))
    }

    /// Attempt to play a human move at the given position.
    ///
    /// Illegal requests are rejected without mutating the board; the GUI
    /// shows the error and re-prompts.
    pub fn try_place_disc(&mut self, pos: Pos) -> Result<(), PlayError> {
        if self.game_over.is_some() {
            return Err(PlayError::GameOver);
        }
        if self.is_ai_thinking() {
            return Err(PlayError::AiThinking);
        }
        if !self.is_human_turn() {
            return Err(PlayError::NotYourTurn);
        }
        if !is_legal_move(&self.board, pos, self.current_turn) {
            return Err(PlayError::IllegalMove {
                row: pos.row,
                col: pos.col,
            });
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Execute a move for the side to move (human or AI). The pre-move
    /// state is snapshotted first so the move can be undone.
    fn execute_move(&mut self, pos: Pos) {
        let side = self.current_turn;

        self.move_history.push(Snapshot {
            board: self.board,
            side_to_move: side,
            mov: pos,
        });

        apply_move(&mut self.board, pos, side);
        self.last_move = Some(pos);
        self.message = None;

        self.advance_turn();
    }

    /// Turn bookkeeping after a completed move: flip the side to move,
    /// pass when the new side has no legal move, and end the game when
    /// neither side can move.
    fn advance_turn(&mut self) {
        let mover = self.current_turn;
        let mut next = mover.opponent();

        if !has_any_move(&self.board, next) {
            if !has_any_move(&self.board, mover) {
                self.game_over = Some(winner(&self.board));
                return;
            }
            self.message = Some(format!("{} passes", Self::side_name(next)));
            next = mover;
        }

        self.current_turn = next;
    }

    fn side_name(side: Disc) -> &'static str {
        match side {
            Disc::Black => "Black",
            Disc::White => "White",
            Disc::Empty => "Nobody",
        }
    }

    /// Start the background search for the AI's move.
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        // The search gets an immutable copy; the session board cannot be
        // touched while the result is in flight.
        let board = self.board;
        let side = self.current_turn;
        let depth = self.ai_depth;
        let generation = self.generation;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AiEngine::with_config(16, depth);
            let result = engine.get_move_with_stats(&board, side);
            let _ = tx.send((generation, result));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            started: Instant::now(),
        };
    }

    /// Poll for a finished search and apply its move.
    ///
    /// Results from a search started before the last reset are discarded:
    /// the generation tag no longer matches.
    pub fn check_ai_result(&mut self) {
        let received = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(tagged) => Some(tagged),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI search failed".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((generation, move_result)) = received {
            self.ai_state = AiState::Idle;

            if generation != self.generation {
                // Stale result from before a reset.
                return;
            }

            self.last_ai_result = Some(move_result.clone());

            if let Some(pos) = move_result.best_move {
                self.execute_move(pos);
            } else {
                // The searched side had no legal move. advance_turn
                // normally pre-empts this, but convert it into a pass
                // rather than an error either way.
                self.message = Some(format!("{} passes", Self::side_name(self.current_turn)));
                self.advance_after_pass();
            }
        }
    }

    fn advance_after_pass(&mut self) {
        let passer = self.current_turn;
        let next = passer.opponent();
        if !has_any_move(&self.board, next) {
            self.game_over = Some(winner(&self.board));
        } else {
            self.current_turn = next;
        }
    }

    /// Elapsed time of the in-flight search, if any.
    pub fn ai_thinking_elapsed(&self) -> Option<std::time::Duration> {
        match &self.ai_state {
            AiState::Thinking { started, .. } => Some(started.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Undo back to the previous human decision point.
    ///
    /// Pops the most recent snapshot; in human-vs-AI mode it keeps
    /// popping until the restored side to move is the human, so undo
    /// removes the AI's reply together with the human move that caused
    /// it and never leaves the session mid-computer-turn.
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }
        if self.move_history.is_empty() {
            self.message = Some("Nothing to undo".to_string());
            return;
        }

        loop {
            let Some(snapshot) = self.move_history.pop() else {
                break;
            };
            self.board = snapshot.board;
            self.current_turn = snapshot.side_to_move;

            match self.mode {
                GameMode::HumanVsAi { human_color } => {
                    if self.current_turn == human_color || self.move_history.is_empty() {
                        break;
                    }
                }
                GameMode::SelfPlay => break,
            }
        }

        self.game_over = None;
        self.record_taken = false;
        self.last_move = self.move_history.last().map(|s| s.mov);
        self.last_ai_result = None;
        self.message = None;
    }

    /// Hand out the record of a finished game, exactly once per game.
    /// The GUI forwards it to the history store.
    pub fn take_game_record(&mut self) -> Option<GameRecord> {
        let outcome = self.game_over?;
        if self.record_taken {
            return None;
        }
        self.record_taken = true;

        let (black, white) = self.disc_counts();
        Some(GameRecord {
            moves: self
                .move_history
                .iter()
                .map(|s| (s.side_to_move, s.mov))
                .collect(),
            outcome,
            black_discs: black,
            white_discs: white,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn human_black() -> NewGameConfig {
        NewGameConfig::default()
    }

    #[test]
    fn test_new_session_phase() {
        let state = GameState::new(human_black());
        assert_eq!(state.phase(), Phase::AwaitingHumanMove);
        assert!(state.is_human_turn());
        assert_eq!(state.disc_counts(), (2, 2));
    }

    #[test]
    fn test_human_move_switches_turn() {
        let mut state = GameState::new(human_black());
        state.try_place_disc(Pos::new(2, 3)).unwrap();
        assert_eq!(state.current_turn, Disc::White);
        assert_eq!(state.phase(), Phase::ComputerThinking);
        assert_eq!(state.last_move, Some(Pos::new(2, 3)));
    }

    #[test]
    fn test_illegal_move_rejected_without_mutation() {
        let mut state = GameState::new(human_black());
        let before = state.board;
        let err = state.try_place_disc(Pos::new(0, 0)).unwrap_err();
        assert_eq!(err, PlayError::IllegalMove { row: 0, col: 0 });
        assert_eq!(state.board, before);
        assert_eq!(state.current_turn, Disc::Black);
    }

    #[test]
    fn test_move_out_of_turn_rejected() {
        let mut state = GameState::new(NewGameConfig {
            mode: GameMode::HumanVsAi {
                human_color: Disc::White,
            },
            ..NewGameConfig::default()
        });
        // Black (the AI) moves first; the human may not play.
        let err = state.try_place_disc(Pos::new(2, 3)).unwrap_err();
        assert_eq!(err, PlayError::NotYourTurn);
    }

    #[test]
    fn test_undo_round_trip() {
        let mut state = GameState::new(NewGameConfig {
            mode: GameMode::SelfPlay,
            ..NewGameConfig::default()
        });
        let before_board = state.board;
        let before_turn = state.current_turn;

        // Drive a move through the session directly (self-play pops one).
        state.execute_move(Pos::new(2, 3));
        assert_ne!(state.board, before_board);

        state.undo();
        assert_eq!(state.board, before_board);
        assert_eq!(state.current_turn, before_turn);
        assert!(state.move_history.is_empty());
    }

    #[test]
    fn test_undo_lands_on_human_turn() {
        let mut state = GameState::new(human_black());
        // Human plays, then the AI reply is applied via execute_move.
        state.try_place_disc(Pos::new(2, 3)).unwrap();
        state.execute_move(Pos::new(2, 2)); // white (AI) reply

        assert_eq!(state.current_turn, Disc::Black);
        assert_eq!(state.move_history.len(), 2);

        // Undo removes both the AI reply and the preceding human move.
        state.undo();
        assert_eq!(state.move_history.len(), 0);
        assert_eq!(state.current_turn, Disc::Black);
        assert_eq!(state.board, Board::new());
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_undo_empty_history_is_noop() {
        let mut state = GameState::new(human_black());
        state.undo();
        assert_eq!(state.board, Board::new());
        assert!(state.message.is_some());
        assert_eq!(state.phase(), Phase::AwaitingHumanMove);
    }

    #[test]
    fn test_pass_handling() {
        // Top row `B W . W`: after black plays (0,2), white has no move
        // anywhere and the turn passes straight back to black.
        let mut state = GameState::new(human_black());
        state.board = Board::empty();
        state.board.place(Pos::new(0, 0), Disc::Black);
        state.board.place(Pos::new(0, 1), Disc::White);
        state.board.place(Pos::new(0, 3), Disc::White);

        state.try_place_disc(Pos::new(0, 2)).unwrap();

        assert_eq!(state.current_turn, Disc::Black);
        assert!(state.game_over.is_none());
        assert!(state.message.as_deref().unwrap_or("").contains("passes"));
    }

    #[test]
    fn test_double_pass_ends_game() {
        // Top row `B W .`: black plays (0,2) and flips the lone white
        // disc; with no white discs left neither side can move again.
        let mut state = GameState::new(human_black());
        state.board = Board::empty();
        state.board.place(Pos::new(0, 0), Disc::Black);
        state.board.place(Pos::new(0, 1), Disc::White);

        state.try_place_disc(Pos::new(0, 2)).unwrap();

        assert_eq!(state.game_over, Some(GameOutcome::BlackWins));
        assert_eq!(state.phase(), Phase::GameOver);
        assert!(state.try_place_disc(Pos::new(5, 5)).is_err());
    }

    #[test]
    fn test_game_record_taken_once() {
        let mut state = GameState::new(human_black());
        state.board = Board::empty();
        state.board.place(Pos::new(0, 0), Disc::Black);
        state.board.place(Pos::new(0, 1), Disc::White);
        state.try_place_disc(Pos::new(0, 2)).unwrap();

        let record = state.take_game_record().expect("game just finished");
        assert_eq!(record.outcome, GameOutcome::BlackWins);
        assert_eq!(record.moves.len(), 1);
        assert_eq!(record.moves[0], (Disc::Black, Pos::new(0, 2)));
        assert_eq!(record.black_discs, 3);
        assert_eq!(record.white_discs, 0);

        assert!(state.take_game_record().is_none());
    }

    #[test]
    fn test_reset_discards_pending_search() {
        let mut state = GameState::new(human_black());
        state.try_place_disc(Pos::new(2, 3)).unwrap();
        state.start_ai_thinking();
        assert!(state.is_ai_thinking());

        let old_generation = state.generation;
        state.reset(human_black());
        assert!(!state.is_ai_thinking());
        assert!(state.generation > old_generation);
        assert_eq!(state.board, Board::new());

        // Even if a stale result arrived now, it would be ignored: the
        // poll leaves the fresh board untouched.
        state.check_ai_result();
        assert_eq!(state.board, Board::new());
    }

    #[test]
    fn test_ai_result_applied() {
        let mut state = GameState::new(NewGameConfig {
            ai_depth: 2,
            ..NewGameConfig::default()
        });
        state.try_place_disc(Pos::new(2, 3)).unwrap();
        state.start_ai_thinking();

        // Wait for the background search to deliver.
        let deadline = Instant::now() + std::time::Duration::from_secs(30);
        while state.is_ai_thinking() && Instant::now() < deadline {
            state.check_ai_result();
            thread::sleep(std::time::Duration::from_millis(10));
        }

        assert!(!state.is_ai_thinking(), "search did not finish in time");
        assert_eq!(state.current_turn, Disc::Black);
        assert_eq!(state.move_history.len(), 2);
        assert!(state.last_ai_result.is_some());
    }

    #[test]
    fn test_self_play_both_sides_are_ai() {
        let state = GameState::new(NewGameConfig {
            mode: GameMode::SelfPlay,
            ..NewGameConfig::default()
        });
        assert!(state.is_ai_turn());
        assert!(!state.is_human_turn());
        assert_eq!(state.phase(), Phase::ComputerThinking);
    }

    #[test]
    fn test_white_first_config() {
        let state = GameState::new(NewGameConfig {
            first_to_move: Disc::White,
            ..NewGameConfig::default()
        });
        assert_eq!(state.current_turn, Disc::White);
        assert!(state.is_ai_turn());
    }
}
