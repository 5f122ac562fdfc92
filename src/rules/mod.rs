//! Game rules for Othello
//!
//! This module implements the rule set:
//! - Move legality (a move must flip at least one opposing run)
//! - Capture computation and move application
//! - Terminal detection and winner scoring

pub mod capture;
pub mod terminal;

// Re-exports for convenient access
pub use capture::{apply_move, flips_for_move, is_legal_move, legal_moves, FlipInfo, MAX_FLIPS};
pub use terminal::{has_any_move, is_terminal, winner, GameOutcome};
