//! Game status and result reporting
//!
//! Tracks whether the game is still running and, once it is not, how it ended.
//!
//! # Terminal States
//!
//! - **Checkmate**: the side to move is in check with no legal move
//! - **Stalemate**: the side to move has no legal move but is not in check
//! - **Resignation**: a player gave up
//! - **Draw**: agreed between the players, or only the two kings are left
//!
//! ```text
//! Active → Checkmate / Stalemate / Resignation / Draw
//! ```
//!
//! Every non-`Active` state is terminal; the executor refuses further moves.

use crate::types::PieceColor;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are being accepted
    #[default]
    Active,

    /// `winner` mated the side to move
    Checkmate { winner: PieceColor },

    /// Side to move has no legal move and is not in check
    Stalemate,

    /// The other side resigned
    Resignation { winner: PieceColor },

    Draw { reason: DrawReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawReason {
    /// Both players agreed
    Agreement,
    /// Only the two kings remain
    InsufficientMaterial,
}

impl GameStatus {
    /// Returns `true` for any state other than [`GameStatus::Active`]
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameStatus::Active)
    }

    pub fn is_checkmate(&self) -> bool {
        matches!(self, GameStatus::Checkmate { .. })
    }

    pub fn is_stalemate(&self) -> bool {
        matches!(self, GameStatus::Stalemate)
    }

    /// Stalemate and both draw kinds
    pub fn is_draw(&self) -> bool {
        matches!(self, GameStatus::Stalemate | GameStatus::Draw { .. })
    }

    /// Ended by the players rather than by the position: a resignation or an
    /// agreed draw
    pub fn is_declared(&self) -> bool {
        matches!(
            self,
            GameStatus::Resignation { .. }
                | GameStatus::Draw {
                    reason: DrawReason::Agreement
                }
        )
    }

    /// The winning side, if the game ended decisively
    pub fn winner(&self) -> Option<PieceColor> {
        match self {
            GameStatus::Checkmate { winner } | GameStatus::Resignation { winner } => Some(*winner),
            _ => None,
        }
    }

    /// Human-readable result line
    pub fn message(&self) -> String {
        match self {
            GameStatus::Active => "Game in progress".to_string(),
            GameStatus::Checkmate { winner } => format!("{} wins by checkmate!", winner),
            GameStatus::Stalemate => "Draw by stalemate".to_string(),
            GameStatus::Resignation { winner } => format!("{} wins by resignation", winner),
            GameStatus::Draw {
                reason: DrawReason::Agreement,
            } => "Draw by agreement".to_string(),
            GameStatus::Draw {
                reason: DrawReason::InsufficientMaterial,
            } => "Draw by insufficient material".to_string(),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
