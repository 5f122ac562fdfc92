//! Bounded persistence of finished games
//!
//! Completed games are appended to a JSON file as compact records (move
//! list, outcome, final disc counts). The store keeps only the most
//! recent games, so the file stays small no matter how long the program
//! is used. A missing or corrupt file degrades to an empty history; it
//! never takes the game down.

use crate::board::{Disc, Pos};
use crate::rules::GameOutcome;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Maximum number of records retained on disk.
pub const MAX_RECORDS: usize = 50;

/// Record of one finished game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// Moves in play order; passes are implicit (consecutive moves by
    /// the same side).
    pub moves: Vec<(Disc, Pos)>,
    pub outcome: GameOutcome,
    pub black_discs: u32,
    pub white_discs: u32,
}

/// Errors from writing the history file.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("failed to write history file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode history: {0}")]
    Json(#[from] serde_json::Error),
}

/// File-backed store for finished games.
pub struct HistoryStore {
    path: PathBuf,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new("othello_history.json")
    }
}

impl HistoryStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load all stored records, oldest first.
    ///
    /// A missing file yields an empty history; a corrupt file is logged
    /// and treated the same way.
    #[must_use]
    pub fn load(&self) -> Vec<GameRecord> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                log::warn!("failed to read {}: {}", self.path.display(), err);
                return Vec::new();
            }
        };

        match serde_json::from_str(&data) {
            Ok(records) => records,
            Err(err) => {
                log::warn!("corrupt history file {}: {}", self.path.display(), err);
                Vec::new()
            }
        }
    }

    /// Append a record, dropping the oldest entries beyond the cap.
    pub fn append(&self, record: GameRecord) -> Result<(), HistoryError> {
        let mut records = self.load();
        records.push(record);

        if records.len() > MAX_RECORDS {
            let excess = records.len() - MAX_RECORDS;
            records.drain(..excess);
        }

        let data = serde_json::to_string_pretty(&records)?;
        std::fs::write(&self.path, data)?;
        Ok(())
    }
}
