//! Game history with undo/redo and export/import
//!
//! Keeps one [`GameState`] snapshot per position reached, starting with the
//! initial position. A cursor marks the position currently shown:
//!
//! ```text
//! snapshots: [S0] [S1] [S2] [S3]
//!                        ^ cursor = 2   (S3 is redo-able)
//! ```
//!
//! - **Push**: drops everything after the cursor, appends, moves the cursor
//! - **Undo/Redo**: only moves the cursor
//!
//! # Export Format
//!
//! [`GameRecord`] is the serialized form: a version tag, every snapshot and the
//! cursor. Importing validates the whole record before anything is replaced.

use super::{DrawReason, GameState, GameStatus};
use crate::constants::SNAPSHOT_VERSION;
use crate::error::{ChessEngineError, ChessEngineResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    snapshots: Vec<GameState>,
    cursor: usize,
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new(GameState::new())
    }
}

impl GameHistory {
    /// Start a history at `initial`
    pub fn new(initial: GameState) -> Self {
        GameHistory {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    /// The position at the cursor
    pub fn current(&self) -> &GameState {
        &self.snapshots[self.cursor]
    }

    /// Record a new position after the cursor, discarding any redo tail
    pub fn push(&mut self, state: GameState) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(state);
        self.cursor += 1;
    }

    /// Step back one position. Returns `false` at the initial position.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        debug!("[HISTORY] Undo to position {}", self.cursor);
        true
    }

    /// Step forward one position. Returns `false` when nothing was undone.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        debug!("[HISTORY] Redo to position {}", self.cursor);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of stored snapshots, redo tail included
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a history holds at least its initial position
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Forget everything and start over from `initial`
    pub fn reset(&mut self, initial: GameState) {
        *self = GameHistory::new(initial);
    }

    /// Serialize the full history as JSON
    pub fn export(&self) -> ChessEngineResult<String> {
        let record = GameRecord::from(self);
        Ok(serde_json::to_string(&record)?)
    }

    /// Parse and validate a history exported by [`GameHistory::export`]
    pub fn import(data: &str) -> ChessEngineResult<Self> {
        let record: GameRecord = serde_json::from_str(data)?;
        GameHistory::try_from(record)
    }
}

/// Serialized form of a [`GameHistory`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub version: u32,
    pub snapshots: Vec<GameState>,
    pub cursor: usize,
}

impl From<&GameHistory> for GameRecord {
    fn from(history: &GameHistory) -> Self {
        GameRecord {
            version: SNAPSHOT_VERSION,
            snapshots: history.snapshots.clone(),
            cursor: history.cursor,
        }
    }
}

impl TryFrom<GameRecord> for GameHistory {
    type Error = ChessEngineError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        if record.version != SNAPSHOT_VERSION {
            return Err(ChessEngineError::InvalidSnapshot {
                message: format!(
                    "unsupported record version {} (expected {})",
                    record.version, SNAPSHOT_VERSION
                ),
            });
        }
        if record.cursor >= record.snapshots.len() {
            return Err(ChessEngineError::InvalidSnapshot {
                message: format!(
                    "cursor {} outside {} snapshots",
                    record.cursor,
                    record.snapshots.len()
                ),
            });
        }
        for (index, snapshot) in record.snapshots.iter().enumerate() {
            snapshot
                .validate()
                .map_err(|err| ChessEngineError::InvalidSnapshot {
                    message: format!("snapshot {}: {}", index, err),
                })?;
        }
        for (index, pair) in record.snapshots.windows(2).enumerate() {
            if !follows(&pair[0], &pair[1]) {
                return Err(ChessEngineError::InvalidSnapshot {
                    message: format!(
                        "snapshot {} does not follow from snapshot {}",
                        index + 1,
                        index
                    ),
                });
            }
        }
        Ok(GameHistory {
            snapshots: record.snapshots,
            cursor: record.cursor,
        })
    }
}

/// `next` is `prev` after exactly one move, or after one side resigned or
/// both agreed a draw. Checked by replaying the step on a copy of `prev`.
fn follows(prev: &GameState, next: &GameState) -> bool {
    let played = prev.moves().len();
    if !next.moves().starts_with(prev.moves()) {
        return false;
    }
    let mut replay = prev.clone();
    let stepped = match next.moves().len() - played {
        1 => next
            .last_move()
            .is_some_and(|mv| replay.make_move(mv.from, mv.to, mv.promotion).is_ok()),
        0 => match next.status() {
            GameStatus::Resignation { winner } => replay.resign(winner.opponent()).is_ok(),
            GameStatus::Draw {
                reason: DrawReason::Agreement,
            } => replay.agree_draw().is_ok(),
            _ => false,
        },
        _ => false,
    };
    stepped && replay == *next
}
