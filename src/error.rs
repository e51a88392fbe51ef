//! Error types for the chess engine
//!
//! Ordinary rule violations (empty source, wrong turn, illegal destination) come
//! back as errors with the game state untouched. Structural problems such as a
//! corrupted import are reported the same way and abort the operation before any
//! state is replaced.

use crate::types::{PieceColor, Position};
use thiserror::Error;

/// Errors that can occur in the chess engine
#[derive(Error, Debug)]
pub enum ChessEngineError {
    /// No piece at the requested source square
    #[error("No piece at source square {position}")]
    NoPieceAtSquare { position: Position },

    /// The piece belongs to the side that is not on move
    #[error("Piece at {position} belongs to {color}, but it is {turn}'s turn")]
    WrongTurn {
        position: Position,
        color: PieceColor,
        turn: PieceColor,
    },

    /// Destination is not in the piece's legal set
    #[error("Invalid move: from {from} to {to}")]
    InvalidMove { from: Position, to: Position },

    /// The game already reached a terminal state
    #[error("Game is over: {message}")]
    GameOver { message: String },

    /// Coordinates outside the 8×8×3 board
    #[error("Invalid position ({x}, {y}, layer {layer})")]
    InvalidPosition { x: i32, y: i32, layer: i32 },

    /// Text that is not a square in `e2L0` notation
    #[error("Unknown square '{input}'")]
    UnknownSquare { input: String },

    /// Tried to place a piece on an occupied square
    #[error("Square {position} is already occupied")]
    SquareOccupied { position: Position },

    /// Position setup without exactly one king per side
    #[error("{color} must have exactly one king, found {count}")]
    KingCount { color: PieceColor, count: usize },

    /// The mode coordinator refused a move from this source
    #[error("Move not permitted: {message}")]
    MoveNotPermitted { message: String },

    /// Imported data violates a board or history invariant
    #[error("Invalid snapshot: {message}")]
    InvalidSnapshot { message: String },

    /// Snapshot (de)serialization failed
    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ChessEngineError {
    /// True for the plain "that move is not allowed" family
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            ChessEngineError::NoPieceAtSquare { .. }
                | ChessEngineError::WrongTurn { .. }
                | ChessEngineError::InvalidMove { .. }
                | ChessEngineError::GameOver { .. }
        )
    }
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
