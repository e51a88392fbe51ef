//! Move executor
//!
//! The only code path that mutates a [`GameState`]. A move request walks
//! through three stages:
//!
//! ```text
//! Idle ──validate──▶ MoveValidated ──apply──▶ MoveApplied ──▶ Idle
//!                                                   └──────▶ GameOver
//! ```
//!
//! Validation never touches the state (the board is used as scratch space and
//! restored), so a rejected request leaves everything, including the turn,
//! exactly as it was.

use super::{DrawReason, GameState, GameStatus};
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::move_gen;
use crate::types::*;
use tracing::{debug, info};

/// A request that passed every legality check and may be applied.
///
/// Only obtainable from [`GameState::validate_move`]. Applying it to a state it
/// no longer fits (the piece moved, the turn passed, the game ended) is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedMove {
    piece: Piece,
    to: Position,
    promotion: Option<PieceType>,
}

impl ValidatedMove {
    pub fn from(&self) -> Position {
        self.piece.position
    }

    pub fn to(&self) -> Position {
        self.to
    }

    pub fn promotion(&self) -> Option<PieceType> {
        self.promotion
    }
}

impl GameState {
    /// Validate and apply a move for the side to move.
    ///
    /// `promotion` is only consulted when a pawn reaches its far rank; `None`
    /// (or a type a pawn cannot become) promotes to a queen.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the state untouched, if the game is over, the
    /// source square is empty, the piece belongs to the other side, or the
    /// destination is not a legal move for it.
    pub fn make_move(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceType>,
    ) -> ChessEngineResult<Move> {
        let validated = self.validate_move(from, to, promotion)?;
        Ok(self.commit(validated))
    }

    /// Apply a candidate produced by move generation or the search
    pub fn apply_candidate(&mut self, candidate: MoveCandidate) -> ChessEngineResult<Move> {
        self.make_move(candidate.from, candidate.to, candidate.promotion)
    }

    /// Idle → MoveValidated
    pub fn validate_move(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceType>,
    ) -> ChessEngineResult<ValidatedMove> {
        if self.status.is_game_over() {
            return Err(ChessEngineError::GameOver {
                message: self.status.message(),
            });
        }
        let piece = *self
            .board
            .get(from)
            .ok_or(ChessEngineError::NoPieceAtSquare { position: from })?;
        if piece.color != self.current_turn {
            return Err(ChessEngineError::WrongTurn {
                position: from,
                color: piece.color,
                turn: self.current_turn,
            });
        }
        if !move_gen::legal_destinations(&mut self.board, from).contains(&to) {
            return Err(ChessEngineError::InvalidMove { from, to });
        }
        Ok(ValidatedMove {
            piece,
            to,
            promotion: move_gen::promotion_for(&piece, to, promotion),
        })
    }

    /// MoveValidated → MoveApplied → Idle | GameOver
    ///
    /// The token is checked against the current state again, so a token kept
    /// from an earlier position cannot flip the turn without moving a piece.
    ///
    /// # Errors
    ///
    /// Everything [`GameState::validate_move`] reports, plus
    /// [`ChessEngineError::InvalidMove`] when the piece on the source square is
    /// no longer the piece the token was issued for.
    pub fn apply_validated(&mut self, validated: ValidatedMove) -> ChessEngineResult<Move> {
        let current = self.validate_move(validated.from(), validated.to, validated.promotion)?;
        if current.piece != validated.piece {
            return Err(ChessEngineError::InvalidMove {
                from: validated.from(),
                to: validated.to,
            });
        }
        Ok(self.commit(current))
    }

    fn commit(&mut self, validated: ValidatedMove) -> Move {
        let ValidatedMove {
            piece,
            to,
            promotion,
        } = validated;
        let from = piece.position;

        let captured = self
            .board
            .apply(from, to, promotion)
            .and_then(|undo| undo.captured);

        self.current_turn = self.current_turn.opponent();
        self.refresh_status();

        let record = Move {
            from,
            to,
            piece,
            captured,
            promotion,
            is_check: self.is_check,
            is_checkmate: self.status.is_checkmate(),
            is_castling: false,
            is_en_passant: false,
            is_layer_move: from.layer != to.layer,
        };
        self.moves.push(record);
        debug!("[EXECUTOR] {} played {}", piece.color, record);

        if self.status.is_game_over() {
            info!("[EXECUTOR] Game over: {}", self.status);
        }
        record
    }

    /// `color` gives up; the opponent wins
    pub fn resign(&mut self, color: PieceColor) -> ChessEngineResult<()> {
        self.end_game(GameStatus::Resignation {
            winner: color.opponent(),
        })
    }

    /// Both players agreed to a draw
    pub fn agree_draw(&mut self) -> ChessEngineResult<()> {
        self.end_game(GameStatus::Draw {
            reason: DrawReason::Agreement,
        })
    }

    fn end_game(&mut self, status: GameStatus) -> ChessEngineResult<()> {
        if self.status.is_game_over() {
            return Err(ChessEngineError::GameOver {
                message: self.status.message(),
            });
        }
        self.status = status;
        info!("[EXECUTOR] Game over: {}", self.status);
        Ok(())
    }
}
