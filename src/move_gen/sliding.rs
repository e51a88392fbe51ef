//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens) and the
//! quiet layer step shared by rooks, queens and kings.
//!
//! ## Algorithm
//!
//! For every direction in the table we walk outward from the piece on its own
//! layer:
//! 1. Empty square: valid move, keep walking
//! 2. Opponent piece: valid capture, stop
//! 3. Own piece: stop without adding it
//!
//! Walking off the board ends the ray because [`Position::offset`] returns `None`.

use crate::board::Board;
use crate::constants::ADJACENT_LAYER_DELTAS;
use crate::types::*;

/// Walk every ray in `dirs` on the piece's own layer
pub fn generate_sliding_moves(
    board: &Board,
    piece: &Piece,
    dirs: &[(i8, i8)],
    moves: &mut Vec<Position>,
) {
    for &(dx, dy) in dirs {
        let mut current = piece.position;
        while let Some(next) = current.offset(dx, dy, 0) {
            match board.color_at(next) {
                None => moves.push(next),
                Some(color) => {
                    if color != piece.color {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

/// Same-square transition to each adjacent layer, only onto an empty square
pub fn generate_layer_steps(board: &Board, piece: &Piece, moves: &mut Vec<Position>) {
    for dlayer in ADJACENT_LAYER_DELTAS {
        if let Some(target) = piece.position.offset(0, 0, dlayer) {
            if board.is_empty(target) {
                moves.push(target);
            }
        }
    }
}
