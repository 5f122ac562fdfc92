//! Search module for the Othello AI
//!
//! Contains:
//! - Zobrist hashing for position identification
//! - Transposition table for caching search results
//! - Depth-limited minimax with alpha-beta pruning

pub mod alphabeta;
pub mod tt;
pub mod zobrist;

pub use alphabeta::{SearchResult, Searcher};
pub use tt::{EntryType, TTEntry, TTStats, TranspositionTable};
pub use zobrist::ZobristTable;
