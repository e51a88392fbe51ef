//! Move ordering for alpha-beta pruning
//!
//! Captures go first, most valuable victim and least valuable attacker ahead,
//! then promotions. The sort is stable, so moves with equal keys keep generation
//! order and the search tie-break stays deterministic.

use crate::board::Board;
use crate::types::*;
use std::cmp::Reverse;

/// Order moves for better alpha-beta pruning
pub(crate) fn order_moves(board: &Board, moves: &mut [MoveCandidate]) {
    moves.sort_by_cached_key(|mv| Reverse(order_score(board, mv)));
}

fn order_score(board: &Board, mv: &MoveCandidate) -> i32 {
    let mut score = 0;
    if let Some(victim) = board.get(mv.to) {
        let attacker = board.get(mv.from).map_or(0, |p| p.piece_type.value());
        // MVV-LVA; +1 keeps pawn-takes-pawn above quiet moves
        score += victim.piece_type.value() * 10 - attacker + 1;
    }
    if let Some(promotion) = mv.promotion {
        score += promotion.value();
    }
    score
}
