//! Material evaluation
//!
//! Sums piece values, White positive and Black negative.

use super::sign;
use crate::board::Board;

/// Evaluate material balance from White's side
pub fn evaluate_material(board: &Board) -> i32 {
    board
        .pieces()
        .map(|piece| sign(piece.color) * piece.piece_type.value())
        .sum()
}
