//! Position evaluation
//!
//! Scores a position in centipawns from a chosen side's point of view. The score
//! is a weighted sum of:
//! - Material count (piece values)
//! - Mobility (legal move count)
//! - King safety (pawn shield, king freedom, check)
//! - Center and middle-layer control
//!
//! Evaluation is a pure function of the board and the side to move, so equal
//! positions always get equal scores.
//!
//! ## Module Organization
//!
//! - `material` - Material balance
//! - `king_safety` - Pawn shield and king mobility terms
//! - `position` - Mobility plus center/layer control

mod king_safety;
mod material;
mod position;

pub use king_safety::evaluate_king_safety;
pub use material::evaluate_material;
pub use position::{evaluate_center_control, evaluate_mobility};

use crate::board::Board;
use crate::constants::MATE_SCORE;
use crate::game::{GameState, GameStatus};
use crate::types::PieceColor;

/// Score `state` for `perspective`; positive means `perspective` is better off.
///
/// Finished games score `±MATE_SCORE` for a decisive result and 0 for a draw.
pub fn evaluate(state: &GameState, perspective: PieceColor) -> i32 {
    match state.status() {
        GameStatus::Active => {
            let mut scratch = state.board().clone();
            evaluate_board(&mut scratch, state.current_turn(), perspective)
        }
        GameStatus::Checkmate { winner } | GameStatus::Resignation { winner } => {
            if winner == perspective {
                MATE_SCORE
            } else {
                -MATE_SCORE
            }
        }
        GameStatus::Stalemate | GameStatus::Draw { .. } => 0,
    }
}

/// Heuristic score of a non-terminal position.
///
/// `to_move` only matters for the in-check penalty. Terminal detection is left to
/// the caller (the search already knows whether any move exists). The board is
/// scratch space for the legality tests and is restored before returning.
pub fn evaluate_board(
    board: &mut Board,
    to_move: PieceColor,
    perspective: PieceColor,
) -> i32 {
    let white = evaluate_material(board)
        + evaluate_mobility(board)
        + evaluate_king_safety(board, to_move)
        + evaluate_center_control(board);
    match perspective {
        PieceColor::White => white,
        PieceColor::Black => -white,
    }
}

/// +1 for White, -1 for Black
#[inline]
pub(crate) fn sign(color: PieceColor) -> i32 {
    match color {
        PieceColor::White => 1,
        PieceColor::Black => -1,
    }
}
