//! King move generation
//!
//! Handles king-specific move generation. Kings move one square in any direction
//! on their own layer, or step straight to the same square of an adjacent layer.
//!
//! ## King Movement Rules
//!
//! - One square in any of the 8 directions on the current layer
//! - Layer step to `(x, y, layer ± 1)`, quiet only, like the rook
//! - Cannot move onto own pieces
//! - Moves into check are removed by the self-check filter, not here
//! - No castling in this variant

use super::sliding;
use crate::board::Board;
use crate::constants::KING_DIRS;
use crate::types::*;

pub fn generate_king_moves(board: &Board, piece: &Piece, moves: &mut Vec<Position>) {
    for (dx, dy) in KING_DIRS {
        if let Some(target) = piece.position.offset(dx, dy, 0) {
            if board.color_at(target) != Some(piece.color) {
                moves.push(target);
            }
        }
    }
    sliding::generate_layer_steps(board, piece, moves);
}
