//! Transposition table for caching search results
//!
//! The table stores search results indexed by Zobrist hash, allowing the
//! search to reuse results for positions reached through different move
//! orders. It is direct-mapped with a fixed slot count, so memory stays
//! bounded for the whole session; collisions are resolved by a
//! depth-preferred replacement policy.

use crate::board::Pos;

/// Entry type for score interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact score - the search completed inside the window
    Exact,
    /// Lower bound - score >= stored value (beta cutoff)
    LowerBound,
    /// Upper bound - score <= stored value (alpha fail-low)
    UpperBound,
}

/// Transposition table entry
#[derive(Debug, Clone, Copy)]
pub struct TTEntry {
    /// Zobrist hash of the position (board content + side to move)
    pub hash: u64,
    /// Remaining search depth for this entry
    pub depth: u8,
    /// Evaluation score
    pub score: i32,
    /// Type of score (exact, lower bound, upper bound)
    pub entry_type: EntryType,
    /// Best move found for this position
    pub best_move: Option<Pos>,
}

/// Direct-mapped transposition table.
///
/// Each hash maps to exactly one slot. An entry written for a key is never
/// mutated within a single search; it can only be replaced by a deeper
/// entry or by a different position hashing to the same slot.
pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
    size: usize,
}

impl TranspositionTable {
    /// Create a new transposition table with the given size in megabytes.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let entry_size = std::mem::size_of::<Option<TTEntry>>();
        let size = (size_mb * 1024 * 1024) / entry_size;

        // Ensure at least some entries
        let size = size.max(1024);

        Self {
            entries: vec![None; size],
            size,
        }
    }

    /// Probe the table for a position.
    ///
    /// Returns the stored entry if one exists for this exact hash. The
    /// caller decides whether the score is usable for its depth and
    /// window; the best move is always usable for ordering.
    #[must_use]
    pub fn probe(&self, hash: u64) -> Option<TTEntry> {
        let idx = (hash as usize) % self.size;
        let entry = self.entries[idx]?;
        if entry.hash == hash {
            Some(entry)
        } else {
            None
        }
    }

    /// Get best move from the table for move ordering.
    #[must_use]
    pub fn get_best_move(&self, hash: u64) -> Option<Pos> {
        self.probe(hash).and_then(|e| e.best_move)
    }

    /// Store a position in the table.
    ///
    /// Depth-preferred replacement: an entry is replaced if the slot is
    /// empty, holds the same position, or the new search is at least as
    /// deep as the existing entry.
    pub fn store(
        &mut self,
        hash: u64,
        depth: u8,
        score: i32,
        entry_type: EntryType,
        best_move: Option<Pos>,
    ) {
        let idx = (hash as usize) % self.size;

        let should_replace = match &self.entries[idx] {
            None => true,
            Some(e) => e.hash == hash || e.depth <= depth,
        };

        if should_replace {
            self.entries[idx] = Some(TTEntry {
                hash,
                depth,
                score,
                entry_type,
                best_move,
            });
        }
    }

    /// Clear all entries in the table. Call when starting a new game so
    /// scores evaluated for the previous maximizing side cannot leak in.
    pub fn clear(&mut self) {
        self.entries.fill(None);
    }

    /// Get statistics about table usage.
    #[must_use]
    pub fn stats(&self) -> TTStats {
        let used = self.entries.iter().filter(|e| e.is_some()).count();
        TTStats {
            size: self.size,
            used,
            usage_percent: (used as f64 / self.size as f64 * 100.0) as u8,
        }
    }
}

/// Statistics about transposition table usage.
#[derive(Debug, Clone, Copy)]
pub struct TTStats {
    /// Total number of slots in the table
    pub size: usize,
    /// Number of slots currently occupied
    pub used: usize,
    /// Percentage of table in use (0-100)
    pub usage_percent: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_probe() {
        let mut tt = TranspositionTable::new(1);
        let hash = 0x1234_5678_9ABC_DEF0;
        tt.store(hash, 5, 100, EntryType::Exact, Some(Pos::new(2, 3)));

        let entry = tt.probe(hash).unwrap();
        assert_eq!(entry.score, 100);
        assert_eq!(entry.depth, 5);
        assert_eq!(entry.entry_type, EntryType::Exact);
        assert_eq!(entry.best_move, Some(Pos::new(2, 3)));
    }

    #[test]
    fn test_probe_miss() {
        let tt = TranspositionTable::new(1);
        assert!(tt.probe(0xDEAD_BEEF).is_none());
    }

    #[test]
    fn test_get_best_move() {
        let mut tt = TranspositionTable::new(1);
        tt.store(0x42, 2, 55, EntryType::LowerBound, Some(Pos::new(0, 0)));
        assert_eq!(tt.get_best_move(0x42), Some(Pos::new(0, 0)));
        assert_eq!(tt.get_best_move(0x43), None);
    }

    #[test]
    fn test_depth_preferred_replacement() {
        let mut tt = TranspositionTable::new(1);
        // Two different positions colliding on the same slot.
        let size = tt.stats().size as u64;
        let hash_a = 7u64;
        let hash_b = 7u64 + size;

        tt.store(hash_a, 8, 10, EntryType::Exact, None);
        // Shallower entry for a colliding position must not evict.
        tt.store(hash_b, 3, 20, EntryType::Exact, None);
        assert_eq!(tt.probe(hash_a).unwrap().score, 10);
        assert!(tt.probe(hash_b).is_none());

        // Deeper entry does evict.
        tt.store(hash_b, 9, 20, EntryType::Exact, None);
        assert!(tt.probe(hash_a).is_none());
        assert_eq!(tt.probe(hash_b).unwrap().score, 20);
    }

    #[test]
    fn test_same_position_always_replaces() {
        let mut tt = TranspositionTable::new(1);
        tt.store(0x10, 8, 10, EntryType::Exact, None);
        tt.store(0x10, 2, 30, EntryType::UpperBound, Some(Pos::new(1, 1)));
        let entry = tt.probe(0x10).unwrap();
        assert_eq!(entry.score, 30);
        assert_eq!(entry.depth, 2);
    }

    #[test]
    fn test_clear() {
        let mut tt = TranspositionTable::new(1);
        tt.store(0x99, 3, 42, EntryType::Exact, None);
        tt.clear();
        assert!(tt.probe(0x99).is_none());
        assert_eq!(tt.stats().used, 0);
    }
}
