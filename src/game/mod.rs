//! Authoritative game state
//!
//! [`GameState`] bundles the board with everything the rules need to know about
//! the game in progress: whose turn it is, whether that side is in check, the
//! result if the game has ended, and the list of moves played so far.
//!
//! # Module Structure
//!
//! - `executor` - move validation and application (the only mutation path)
//! - `game_over` - [`GameStatus`] and result reporting
//! - `history` - snapshot log with undo/redo and export/import
//!
//! Pieces partitioned by color are a view over the board
//! ([`GameState::pieces_of`]), not a second collection.

mod executor;
mod game_over;
pub mod history;

pub use executor::ValidatedMove;
pub use game_over::{DrawReason, GameStatus};
pub use history::{GameHistory, GameRecord};

use crate::board::Board;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::move_gen;
use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_turn: PieceColor,
    is_check: bool,
    status: GameStatus,
    moves: Vec<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting position, White to move
    pub fn new() -> Self {
        GameState {
            board: Board::standard(),
            current_turn: PieceColor::White,
            is_check: false,
            status: GameStatus::Active,
            moves: Vec::new(),
        }
    }

    /// Start from a custom position.
    ///
    /// Requires exactly one king per side. Check and game-over flags are
    /// computed for `turn` immediately.
    pub fn from_board(board: Board, turn: PieceColor) -> ChessEngineResult<Self> {
        check_king_counts(&board)?;
        let mut state = GameState {
            board,
            current_turn: turn,
            is_check: false,
            status: GameStatus::Active,
            moves: Vec::new(),
        };
        state.refresh_status();
        Ok(state)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> PieceColor {
        self.current_turn
    }

    /// The side to move is in check
    pub fn is_check(&self) -> bool {
        self.is_check
    }

    pub fn is_checkmate(&self) -> bool {
        self.status.is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.status.is_stalemate()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    /// Moves played so far, oldest first
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.board.get(pos)
    }

    pub fn pieces_of(&self, color: PieceColor) -> impl Iterator<Item = &Piece> + '_ {
        self.board.pieces_of(color)
    }

    /// Legal destinations for the piece on `from`, whoever's turn it is
    pub fn legal_destinations(&self, from: Position) -> Vec<Position> {
        let mut scratch = self.board.clone();
        move_gen::legal_destinations(&mut scratch, from)
    }

    /// Every legal move for the side to move; empty once the game is over
    pub fn legal_moves(&self) -> Vec<MoveCandidate> {
        if self.is_game_over() {
            return Vec::new();
        }
        let mut scratch = self.board.clone();
        move_gen::generate_legal_moves(&mut scratch, self.current_turn)
    }

    /// Check the invariants of a state that came from outside (imports): one
    /// king per side, grid/piece agreement, on-board move records, turn
    /// alternation, and check/status flags that match the board.
    ///
    /// A recorded result must be the one the board implies. The only results
    /// the board cannot show are a resignation or an agreed draw, accepted
    /// while the position itself is still playable.
    pub fn validate(&self) -> ChessEngineResult<()> {
        check_king_counts(&self.board)?;
        if !self.board.is_consistent() {
            return Err(invalid("board grid and piece list disagree"));
        }
        for (index, mv) in self.moves.iter().enumerate() {
            check_move_record(mv).map_err(|message| ChessEngineError::InvalidSnapshot {
                message: format!("move {}: {}", index, message),
            })?;
        }
        if self
            .moves
            .windows(2)
            .any(|pair| pair[0].piece.color == pair[1].piece.color)
        {
            return Err(invalid("moves do not alternate between the sides"));
        }
        if let Some(last) = self.moves.last() {
            if last.piece.color == self.current_turn {
                return Err(invalid("side to move also made the last move"));
            }
        }

        let mut derived = self.clone();
        derived.refresh_status();
        if derived.is_check != self.is_check {
            return Err(invalid("check flag does not match the board"));
        }
        let status_fits = derived.status == self.status
            || (derived.status == GameStatus::Active && self.status.is_declared());
        if !status_fits {
            return Err(ChessEngineError::InvalidSnapshot {
                message: format!(
                    "recorded result '{}' but the board shows '{}'",
                    self.status, derived.status
                ),
            });
        }
        Ok(())
    }

    /// Recompute check and terminal flags for the side to move
    pub(crate) fn refresh_status(&mut self) {
        let mover = self.current_turn;
        self.is_check = move_gen::is_king_in_check(&self.board, mover);
        self.status = if !move_gen::has_any_legal_move(&mut self.board, mover) {
            if self.is_check {
                GameStatus::Checkmate {
                    winner: mover.opponent(),
                }
            } else {
                GameStatus::Stalemate
            }
        } else if self.board.only_kings_remain() {
            GameStatus::Draw {
                reason: DrawReason::InsufficientMaterial,
            }
        } else {
            GameStatus::Active
        };
    }
}

fn invalid(message: &str) -> ChessEngineError {
    ChessEngineError::InvalidSnapshot {
        message: message.to_string(),
    }
}

fn check_move_record(mv: &Move) -> Result<(), &'static str> {
    let captured_at = mv.captured.map(|piece| piece.position);
    let on_board = [mv.from, mv.to, mv.piece.position]
        .into_iter()
        .chain(captured_at)
        .all(|pos| pos.is_valid());
    if !on_board {
        return Err("square off the board");
    }
    if mv.piece.position != mv.from {
        return Err("moved piece is not on the source square");
    }
    if captured_at.is_some_and(|pos| pos != mv.to) {
        return Err("captured piece is not on the destination square");
    }
    Ok(())
}

fn check_king_counts(board: &Board) -> ChessEngineResult<()> {
    for color in PieceColor::ALL {
        let count = board.count(color, PieceType::King);
        if count != 1 {
            return Err(ChessEngineError::KingCount { color, count });
        }
    }
    Ok(())
}
