//! Rook move generation
//!
//! Handles rook-specific move generation. Rooks slide along ranks and files of
//! their own layer until blocked, and may additionally step straight up or down
//! to the same square of an adjacent layer when that square is empty.
//!
//! ## Rook Movement Rules
//!
//! - Orthogonal rays on the current layer, stopping at the first occupied square
//! - Captures on the blocking square if it holds an opponent piece
//! - Layer step: `(x, y, layer ± 1)`, quiet only (never a capture)

use super::sliding;
use crate::board::Board;
use crate::constants::ROOK_DIRS;
use crate::types::*;

/// Generate rook moves: orthogonal rays first, then layer steps
pub fn generate_rook_moves(board: &Board, piece: &Piece, moves: &mut Vec<Position>) {
    sliding::generate_sliding_moves(board, piece, &ROOK_DIRS, moves);
    sliding::generate_layer_steps(board, piece, moves);
}
