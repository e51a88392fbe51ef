//! Knight move generation
//!
//! Knights move in an L-shape on their own layer and may also jump straight to
//! the same square on any other layer, adjacent or not.
//!
//! ## Knight Movement Rules
//!
//! - Knights jump over pieces (no blocking)
//! - 8 L-shaped destinations on the current layer, fewer near the edges
//! - Same-square jump to every other layer, empty or enemy-occupied
//! - Cannot land on own pieces

use crate::board::Board;
use crate::constants::{KNIGHT_OFFSETS, LAYER_COUNT};
use crate::types::*;

/// Generate knight moves: on-layer jumps first, then layer jumps in layer order
pub fn generate_knight_moves(board: &Board, piece: &Piece, moves: &mut Vec<Position>) {
    let from = piece.position;
    let lands = |target: Position| board.color_at(target) != Some(piece.color);

    for (dx, dy) in KNIGHT_OFFSETS {
        if let Some(target) = from.offset(dx, dy, 0) {
            if lands(target) {
                moves.push(target);
            }
        }
    }

    for layer in 0..LAYER_COUNT as u8 {
        if layer == from.layer {
            continue;
        }
        if let Some(target) = from.with_layer(layer) {
            if lands(target) {
                moves.push(target);
            }
        }
    }
}
