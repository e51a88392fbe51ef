//! Attack detection and check testing
//!
//! Provides functions to check if squares are under attack and if kings are in
//! check. A square is attacked when some opposing piece's pseudo-legal
//! destination set contains it, so this module reuses the ordinary per-piece
//! generators instead of keeping separate attack rules.
//!
//! ## Avoiding recursion
//!
//! Legality filtering needs "would this move leave my king in check?". That
//! question is answered by [`leaves_king_in_check`], which applies the move on
//! the board, asks [`is_king_in_check`], and reverts. The oracle itself only
//! ever looks at pseudo-legal sets, so it never calls back into the filtered
//! generator.

use super::push_pseudo_legal;
use crate::board::Board;
use crate::types::*;

/// Cheap geometric pre-check: could this piece's pattern touch `target` at all?
///
/// Pieces that fail this test are skipped before running their generator.
fn could_reach(piece: &Piece, target: Position) -> bool {
    let from = piece.position;
    let dx = (target.x as i8 - from.x as i8).abs();
    let dy = target.y as i8 - from.y as i8;
    let ady = dy.abs();
    let dlayer = (target.layer as i8 - from.layer as i8).abs();
    let same_layer = dlayer == 0;
    let same_square = dx == 0 && ady == 0;

    let orthogonal = same_layer && (dx == 0 || ady == 0) && !same_square;
    let diagonal = same_layer && dx == ady && dx > 0;
    let layer_step = same_square && dlayer == 1;

    match piece.piece_type {
        PieceType::Pawn => dx == 1 && dy == piece.color.forward() && dlayer <= 1,
        PieceType::Knight => {
            (same_layer && ((dx == 1 && ady == 2) || (dx == 2 && ady == 1)))
                || (same_square && !same_layer)
        }
        PieceType::Bishop => diagonal,
        PieceType::Rook => orthogonal || layer_step,
        PieceType::Queen => orthogonal || diagonal || layer_step,
        PieceType::King => (same_layer && dx <= 1 && ady <= 1 && !same_square) || layer_step,
    }
}

/// Check if a square is attacked by pieces of `by_color`
pub fn is_square_attacked(board: &Board, target: Position, by_color: PieceColor) -> bool {
    let mut destinations = Vec::with_capacity(32);
    board
        .pieces_of(by_color)
        .filter(|piece| could_reach(piece, target))
        .any(|piece| {
            destinations.clear();
            push_pseudo_legal(board, piece, &mut destinations);
            destinations.contains(&target)
        })
}

/// Is `color`'s king attacked?
///
/// A board without a king for `color` reports "not in check".
pub fn is_king_in_check(board: &Board, color: PieceColor) -> bool {
    match board.king(color) {
        Some(king) => is_square_attacked(board, king.position, color.opponent()),
        None => false,
    }
}

/// Would moving the piece on `from` to `to` leave its own king attacked?
///
/// Mutates the board, queries the oracle, and restores the board before
/// returning. An empty `from` answers `false`.
pub fn leaves_king_in_check(board: &mut Board, from: Position, to: Position) -> bool {
    let Some(color) = board.color_at(from) else {
        return false;
    };
    let Some(undo) = board.apply(from, to, None) else {
        return false;
    };
    let exposed = is_king_in_check(board, color);
    board.revert(undo);
    exposed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(pieces: &[(PieceType, PieceColor, Position)]) -> Board {
        let mut board = Board::new();
        for &(piece_type, color, position) in pieces {
            board.add_piece(piece_type, color, position).unwrap();
        }
        board
    }

    #[test]
    fn test_rook_attacks_along_file_until_blocked() {
        let board = board_with(&[
            (PieceType::King, PieceColor::White, Position::new(4, 0, 0)),
            (PieceType::Rook, PieceColor::Black, Position::new(4, 7, 0)),
        ]);
        assert!(is_king_in_check(&board, PieceColor::White));

        let blocked = board_with(&[
            (PieceType::King, PieceColor::White, Position::new(4, 0, 0)),
            (PieceType::Pawn, PieceColor::White, Position::new(4, 1, 0)),
            (PieceType::Rook, PieceColor::Black, Position::new(4, 7, 0)),
        ]);
        assert!(!is_king_in_check(&blocked, PieceColor::White));
    }

    #[test]
    fn test_knight_attacks_across_layers() {
        //! A knight on the same square two layers away gives check
        let board = board_with(&[
            (PieceType::King, PieceColor::Black, Position::new(3, 3, 0)),
            (PieceType::Knight, PieceColor::White, Position::new(3, 3, 2)),
        ]);
        assert!(is_king_in_check(&board, PieceColor::Black));
    }

    #[test]
    fn test_rook_layer_step_is_not_an_attack() {
        //! Quiet layer steps never capture, so they never attack
        let board = board_with(&[
            (PieceType::King, PieceColor::Black, Position::new(3, 3, 1)),
            (PieceType::Rook, PieceColor::White, Position::new(3, 3, 0)),
        ]);
        assert!(!is_king_in_check(&board, PieceColor::Black));
    }

    #[test]
    fn test_pawn_attacks_diagonally_onto_adjacent_layer() {
        let board = board_with(&[
            (PieceType::King, PieceColor::White, Position::new(2, 5, 2)),
            (PieceType::Pawn, PieceColor::Black, Position::new(3, 6, 1)),
        ]);
        assert!(is_king_in_check(&board, PieceColor::White));
    }

    #[test]
    fn test_missing_king_is_not_in_check() {
        let board = board_with(&[(PieceType::Queen, PieceColor::Black, Position::new(0, 0, 0))]);
        assert!(!is_king_in_check(&board, PieceColor::White));
    }

    #[test]
    fn test_leaves_king_in_check_restores_board() {
        //! Moving a pinned piece exposes the king; the board is untouched afterwards
        let mut board = board_with(&[
            (PieceType::King, PieceColor::White, Position::new(4, 0, 0)),
            (PieceType::Bishop, PieceColor::White, Position::new(4, 1, 0)),
            (PieceType::Rook, PieceColor::Black, Position::new(4, 7, 0)),
        ]);
        let before = board.clone();
        assert!(leaves_king_in_check(
            &mut board,
            Position::new(4, 1, 0),
            Position::new(5, 2, 0)
        ));
        assert_eq!(board, before);
        assert!(!leaves_king_in_check(
            &mut board,
            Position::new(4, 0, 0),
            Position::new(3, 0, 0)
        ));
        assert_eq!(board, before);
    }
}
