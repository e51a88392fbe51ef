//! Game lifecycle management
//!
//! Creating, resetting, rewinding and persisting a game.

use crate::board::Board;
use crate::error::ChessEngineResult;
use crate::game::{GameHistory, GameState};
use crate::types::PieceColor;
use tracing::{info, warn};

/// A game session with undo/redo
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChessGame {
    pub(super) history: GameHistory,
}

impl ChessGame {
    /// Create a new game with the initial position
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary state
    pub fn from_state(state: GameState) -> Self {
        ChessGame {
            history: GameHistory::new(state),
        }
    }

    /// Start from a custom board with `turn` to move
    pub fn from_board(board: Board, turn: PieceColor) -> ChessEngineResult<Self> {
        Ok(Self::from_state(GameState::from_board(board, turn)?))
    }

    /// Throw the game away and set up the initial position
    pub fn reset(&mut self) {
        self.history.reset(GameState::new());
        info!("[CHESS_ENGINE] Game reset");
    }

    /// Take back the last move. Returns `false` at the start of the game.
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// Replay an undone move. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Serialize the whole history (every position plus the cursor) as JSON
    pub fn export_game(&self) -> ChessEngineResult<String> {
        self.history.export()
    }

    /// Replace this game with an exported one.
    ///
    /// # Errors
    ///
    /// Malformed or inconsistent data is rejected and the current game is kept.
    pub fn import_game(&mut self, data: &str) -> ChessEngineResult<()> {
        match GameHistory::import(data) {
            Ok(history) => {
                info!(
                    "[CHESS_ENGINE] Imported game with {} positions",
                    history.len()
                );
                self.history = history;
                Ok(())
            }
            Err(err) => {
                warn!("[CHESS_ENGINE] Import rejected: {}", err);
                Err(err)
            }
        }
    }
}
