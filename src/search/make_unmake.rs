//! Move making and unmaking for search
//!
//! The search owns a private copy of the board and walks the tree by applying
//! moves and reverting them through the board's undo log. The live game state
//! is never touched.

use crate::board::{Board, BoardUndo};
use crate::game::GameState;
use crate::types::*;

/// Working copy the search mutates
#[derive(Debug, Clone)]
pub(crate) struct SearchContext {
    pub board: Board,
    pub to_move: PieceColor,
    pub nodes: u64,
}

impl SearchContext {
    pub fn new(state: &GameState) -> Self {
        SearchContext {
            board: state.board().clone(),
            to_move: state.current_turn(),
            nodes: 0,
        }
    }

    /// Make a move and hand the turn over (returns undo information)
    pub fn make_move(&mut self, mv: MoveCandidate) -> Option<BoardUndo> {
        let undo = self.board.apply(mv.from, mv.to, mv.promotion)?;
        self.to_move = self.to_move.opponent();
        Some(undo)
    }

    /// Unmake a move made by [`SearchContext::make_move`]
    pub fn unmake_move(&mut self, undo: BoardUndo) {
        self.board.revert(undo);
        self.to_move = self.to_move.opponent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_unmake_restores_context() {
        let state = GameState::new();
        let mut ctx = SearchContext::new(&state);
        let mv = MoveCandidate::new(Position::new(6, 0, 0), Position::new(5, 2, 0));

        let undo = ctx.make_move(mv).unwrap();
        assert_eq!(ctx.to_move, PieceColor::Black);
        assert!(ctx.board.is_empty(Position::new(6, 0, 0)));

        ctx.unmake_move(undo);
        assert_eq!(ctx.to_move, PieceColor::White);
        assert_eq!(&ctx.board, state.board());
    }
}
