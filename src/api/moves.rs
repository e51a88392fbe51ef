//! Move execution and validation

use super::ChessGame;
use crate::error::ChessEngineResult;
use crate::types::*;

impl ChessGame {
    /// Execute a move for the side to move, promoting to a queen if needed.
    ///
    /// # Errors
    ///
    /// Illegal requests (empty square, wrong side, illegal destination, finished
    /// game) are rejected and the game is left exactly as it was.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tri_chess::{ChessGame, Position};
    ///
    /// let mut game = ChessGame::new();
    /// game.make_move(Position::new(4, 1, 0), Position::new(4, 3, 0)).unwrap();
    /// assert!(game.make_move(Position::new(3, 1, 0), Position::new(3, 3, 0)).is_err());
    /// ```
    pub fn make_move(&mut self, from: Position, to: Position) -> ChessEngineResult<Move> {
        self.make_move_with_promotion(from, to, None)
    }

    /// Execute a move with an explicit promotion choice
    pub fn make_move_with_promotion(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceType>,
    ) -> ChessEngineResult<Move> {
        let mut next = self.history.current().clone();
        let mv = next.make_move(from, to, promotion)?;
        self.history.push(next);
        Ok(mv)
    }

    /// Execute a move produced by the generator or the search
    pub fn apply_candidate(&mut self, candidate: MoveCandidate) -> ChessEngineResult<Move> {
        self.make_move_with_promotion(candidate.from, candidate.to, candidate.promotion)
    }

    /// Is `from → to` legal for the side to move?
    pub fn is_legal_move(&self, from: Position, to: Position) -> bool {
        let state = self.game_state();
        !state.is_game_over()
            && state.piece_at(from).map(|p| p.color) == Some(state.current_turn())
            && state.legal_destinations(from).contains(&to)
    }

    /// Legal destinations for the piece on `from`
    pub fn legal_destinations(&self, from: Position) -> Vec<Position> {
        self.game_state().legal_destinations(from)
    }

    /// Every legal move for the side to move
    pub fn legal_moves(&self) -> Vec<MoveCandidate> {
        self.game_state().legal_moves()
    }

    /// `color` resigns
    pub fn resign(&mut self, color: PieceColor) -> ChessEngineResult<()> {
        let mut next = self.history.current().clone();
        next.resign(color)?;
        self.history.push(next);
        Ok(())
    }

    /// End the game as a draw by agreement
    pub fn agree_draw(&mut self) -> ChessEngineResult<()> {
        let mut next = self.history.current().clone();
        next.agree_draw()?;
        self.history.push(next);
        Ok(())
    }
}
