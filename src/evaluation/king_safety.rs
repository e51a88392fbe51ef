//! King safety
//!
//! Three terms per king:
//! - pawn shield: own pawns on the king's layer, one rank ahead, on the king's
//!   file or either neighbour
//! - cramp: how far the king's legal destination count falls short of the most
//!   a king can have
//! - check: flat penalty when the side to move is in check

use super::sign;
use crate::board::Board;
use crate::constants::*;
use crate::move_gen::{is_king_in_check, legal_destinations};
use crate::types::*;

/// King safety balance from White's side
pub fn evaluate_king_safety(board: &mut Board, to_move: PieceColor) -> i32 {
    let mut score = 0;
    for color in PieceColor::ALL {
        let Some(king) = board.king(color).copied() else {
            continue;
        };
        let shield = pawn_shield(board, &king) * PAWN_SHIELD_WEIGHT;
        let freedom = legal_destinations(board, king.position).len() as i32;
        let cramp = (MAX_KING_MOVES - freedom).max(0) * KING_CRAMP_WEIGHT;
        score += sign(color) * (shield - cramp);
    }
    if is_king_in_check(board, to_move) {
        score -= sign(to_move) * IN_CHECK_PENALTY;
    }
    score
}

fn pawn_shield(board: &Board, king: &Piece) -> i32 {
    let forward = king.color.forward();
    [-1, 0, 1]
        .into_iter()
        .filter_map(|dx| king.position.offset(dx, forward, 0))
        .filter_map(|pos| board.get(pos))
        .filter(|piece| piece.color == king.color && piece.piece_type == PieceType::Pawn)
        .count() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kings_only() -> Board {
        let mut board = Board::new();
        board
            .add_piece(PieceType::King, PieceColor::White, Position::new(4, 0, 0))
            .unwrap();
        board
            .add_piece(PieceType::King, PieceColor::Black, Position::new(4, 7, 0))
            .unwrap();
        board
    }

    #[test]
    fn test_symmetric_kings_cancel_out() {
        let mut board = kings_only();
        assert_eq!(evaluate_king_safety(&mut board, PieceColor::White), 0);
    }

    #[test]
    fn test_pawn_shield_rewards_cover() {
        let mut board = kings_only();
        board
            .add_piece(PieceType::Pawn, PieceColor::White, Position::new(3, 1, 0))
            .unwrap();
        board
            .add_piece(PieceType::Pawn, PieceColor::White, Position::new(5, 1, 0))
            .unwrap();
        // Same file but another layer: not a shield
        board
            .add_piece(PieceType::Pawn, PieceColor::White, Position::new(4, 1, 1))
            .unwrap();
        let white_king = *board.king(PieceColor::White).unwrap();
        assert_eq!(pawn_shield(&board, &white_king), 2);
        assert!(evaluate_king_safety(&mut board, PieceColor::White) > 0);
    }

    #[test]
    fn test_check_is_penalised() {
        let mut board = kings_only();
        board
            .add_piece(PieceType::Rook, PieceColor::Black, Position::new(0, 0, 0))
            .unwrap();
        let without_turn = evaluate_king_safety(&mut board, PieceColor::Black);
        let in_check = evaluate_king_safety(&mut board, PieceColor::White);
        assert_eq!(without_turn - in_check, IN_CHECK_PENALTY);
    }

    #[test]
    fn test_attacked_squares_cramp_the_king() {
        //! Squares the enemy covers do not count as king freedom
        let mut open = kings_only();
        let mut covered = kings_only();
        covered
            .add_piece(PieceType::Rook, PieceColor::Black, Position::new(0, 1, 0))
            .unwrap();
        open.add_piece(PieceType::Rook, PieceColor::Black, Position::new(0, 5, 0))
            .unwrap();
        let free = evaluate_king_safety(&mut open, PieceColor::Black);
        let cramped = evaluate_king_safety(&mut covered, PieceColor::Black);
        assert_eq!(free - cramped, 3 * KING_CRAMP_WEIGHT);
    }
}
