//! Queen move generation
//!
//! The queen's set is the union of the rook set (including its quiet layer step)
//! and the bishop set.

use super::bishop::generate_bishop_moves;
use super::rook::generate_rook_moves;
use crate::board::Board;
use crate::types::*;

pub fn generate_queen_moves(board: &Board, piece: &Piece, moves: &mut Vec<Position>) {
    generate_rook_moves(board, piece, moves);
    generate_bishop_moves(board, piece, moves);
}
