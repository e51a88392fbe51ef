//! Game state queries and AI move generation

use super::ChessGame;
use crate::game::{GameState, GameStatus};
use crate::search::{get_next_move, search_async, SearchConfig, SearchResult};
use crate::types::*;

impl ChessGame {
    /// The position at the history cursor
    pub fn game_state(&self) -> &GameState {
        self.history.current()
    }

    pub fn current_turn(&self) -> PieceColor {
        self.game_state().current_turn()
    }

    pub fn status(&self) -> GameStatus {
        self.game_state().status()
    }

    pub fn is_check(&self) -> bool {
        self.game_state().is_check()
    }

    pub fn is_checkmate(&self) -> bool {
        self.game_state().is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.game_state().is_stalemate()
    }

    /// Get the AI's choice for the side to move; nothing is played
    pub fn reply(&self, config: &SearchConfig) -> Option<SearchResult> {
        get_next_move(self.game_state(), config)
    }

    /// Deterministic search as a future that yields between root moves
    pub async fn reply_async(&self, depth: u8) -> Option<SearchResult> {
        search_async(self.game_state(), depth).await
    }
}
