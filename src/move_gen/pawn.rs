//! Pawn move generation
//!
//! Handles pawn-specific move generation including:
//! - Single and double forward pushes
//! - Diagonal captures on the pawn's own layer
//! - Cross-layer diagonal captures onto an adjacent layer
//! - Promotion (handled during move execution, see [`promotion_for`])
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent (+y for White, -y for Black)
//! - **Double push**: from the start rank, if the pawn has never moved and both
//!   the square passed over and the destination are empty
//! - **Captures**: `(x ± 1, y + dir)` on the same layer, or on `layer ± 1`. A pawn
//!   never changes layer without capturing.
//! - **Promotion**: reaching the far rank on any layer

use crate::board::Board;
use crate::types::*;

/// Capture layer deltas, own layer first
const CAPTURE_LAYER_DELTAS: [i8; 3] = [0, 1, -1];

/// Generate pawn moves: pushes first, then captures
pub fn generate_pawn_moves(board: &Board, piece: &Piece, moves: &mut Vec<Position>) {
    let from = piece.position;
    let dir = piece.color.forward();

    if let Some(one) = from.offset(0, dir, 0) {
        if board.is_empty(one) {
            moves.push(one);
            if !piece.has_moved && from.y == piece.color.pawn_start_rank() {
                if let Some(two) = from.offset(0, 2 * dir, 0) {
                    if board.is_empty(two) {
                        moves.push(two);
                    }
                }
            }
        }
    }

    let enemy = piece.color.opponent();
    for dlayer in CAPTURE_LAYER_DELTAS {
        for dx in [-1, 1] {
            if let Some(target) = from.offset(dx, dir, dlayer) {
                if board.color_at(target) == Some(enemy) {
                    moves.push(target);
                }
            }
        }
    }
}

/// Type a piece becomes when moving to `to`.
///
/// Only pawns landing on their far rank promote. The requested type is honoured
/// when it is a legal promotion target; anything else becomes a queen.
pub fn promotion_for(
    piece: &Piece,
    to: Position,
    requested: Option<PieceType>,
) -> Option<PieceType> {
    if piece.piece_type != PieceType::Pawn || to.y != piece.color.promotion_rank() {
        return None;
    }
    Some(
        requested
            .filter(|kind| kind.is_promotion_target())
            .unwrap_or(PieceType::Queen),
    )
}
