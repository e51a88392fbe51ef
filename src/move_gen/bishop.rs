//! Bishop move generation
//!
//! Bishops slide diagonally on their own layer until blocked. They never change
//! layer.

use super::sliding;
use crate::board::Board;
use crate::constants::BISHOP_DIRS;
use crate::types::*;

pub fn generate_bishop_moves(board: &Board, piece: &Piece, moves: &mut Vec<Position>) {
    sliding::generate_sliding_moves(board, piece, &BISHOP_DIRS, moves);
}
