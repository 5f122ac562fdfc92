//! Position evaluation for Othello
//!
//! Contains:
//! - Static cell weights for move ordering and positional scoring
//! - The composite heuristic (positional + mobility + stability)

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, stable_discs};
pub use weights::{cell_weight, CELL_WEIGHTS, MOBILITY_WEIGHT, STABILITY_WEIGHT};
