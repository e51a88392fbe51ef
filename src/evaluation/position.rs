//! Mobility and center/layer control

use super::sign;
use crate::board::Board;
use crate::constants::*;
use crate::move_gen::count_legal;
use crate::types::*;

/// Legal move count difference, weighted
pub fn evaluate_mobility(board: &mut Board) -> i32 {
    let white = count_legal(board, PieceColor::White) as i32;
    let black = count_legal(board, PieceColor::Black) as i32;
    (white - black) * MOBILITY_WEIGHT
}

/// Bonus for pieces on central squares and on the middle layer
pub fn evaluate_center_control(board: &Board) -> i32 {
    board
        .pieces()
        .filter(|piece| piece.piece_type != PieceType::King)
        .map(|piece| sign(piece.color) * square_bonus(piece.position))
        .sum()
}

fn square_bonus(pos: Position) -> i32 {
    let central = |c: u8| (3..=4).contains(&c);
    let extended = |c: u8| (2..=5).contains(&c);

    let mut bonus = if central(pos.x) && central(pos.y) {
        CENTER_BONUS
    } else if extended(pos.x) && extended(pos.y) {
        EXTENDED_CENTER_BONUS
    } else {
        0
    };
    if pos.layer == MIDDLE_LAYER {
        bonus += MIDDLE_LAYER_BONUS;
    }
    bonus
}
