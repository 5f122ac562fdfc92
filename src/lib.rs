//! Othello AI engine with a native GUI
//!
//! An Othello (Reversi) engine built around bitboards and depth-limited
//! minimax:
//! - Standard 8x8 board, Black moves first
//! - Capture-based rules: a move must outflank at least one opposing disc
//! - Auto-pass when a side has no legal move; two passes end the game
//! - Winner decided by final disc count
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Game rules (move legality, captures, terminal detection)
//! - [`eval`]: Position evaluation (cell weights, mobility, stability)
//! - [`search`]: Alpha-beta search with transposition table
//! - [`engine`]: Main AI engine integrating all components
//! - [`ui`]: Native GUI built on egui/eframe
//! - [`history`]: Bounded persistence of finished games
//!
//! # Quick Start
//!
//! ```
//! use othello::{AiEngine, Board, Disc};
//!
//! let board = Board::new();
//! let mut engine = AiEngine::with_config(8, 4);
//!
//! // AI opens as Black
//! if let Some(pos) = engine.get_move(&board, Disc::Black) {
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! # Search
//!
//! The search is minimax with alpha-beta pruning over a fixed depth,
//! with corner-first move ordering and a Zobrist-keyed transposition
//! table. A forced pass flips the side to move without consuming depth.
//! The engine deepens as the board fills and solves the endgame exactly
//! once few enough empty cells remain.

pub mod board;
pub mod engine;
pub mod eval;
pub mod history;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Disc, Pos, BOARD_SIZE};
pub use engine::{AiEngine, MoveResult};
pub use rules::GameOutcome;
