//! Move generation for the three-layer board
//!
//! Two levels of generation:
//! - **Pseudo-legal**: what a piece's pattern allows given board occupancy,
//!   ignoring whether the mover's king ends up attacked
//! - **Legal**: pseudo-legal moves that survive the self-check filter
//!
//! Generation order is fixed (pieces by id, destinations in each generator's
//! direction order) so everything built on top, the search tie-break in
//! particular, is reproducible.
//!
//! ## Module Organization
//!
//! - `pawn`, `knight`, `bishop`, `rook`, `queen`, `king` - per-piece patterns
//! - `sliding` - ray walking and quiet layer steps shared by several pieces
//! - `attack` - check oracle and the mutate/query/revert self-check test

mod attack;
mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;
mod sliding;

pub use attack::{is_king_in_check, is_square_attacked, leaves_king_in_check};
pub use pawn::promotion_for;

use crate::board::Board;
use crate::types::*;

/// Append a piece's pseudo-legal destinations to `moves`
pub(crate) fn push_pseudo_legal(board: &Board, piece: &Piece, moves: &mut Vec<Position>) {
    match piece.piece_type {
        PieceType::Pawn => pawn::generate_pawn_moves(board, piece, moves),
        PieceType::Knight => knight::generate_knight_moves(board, piece, moves),
        PieceType::Bishop => bishop::generate_bishop_moves(board, piece, moves),
        PieceType::Rook => rook::generate_rook_moves(board, piece, moves),
        PieceType::Queen => queen::generate_queen_moves(board, piece, moves),
        PieceType::King => king::generate_king_moves(board, piece, moves),
    }
}

/// All destinations the piece's pattern allows, ignoring self-check
pub fn pseudo_legal_destinations(board: &Board, piece: &Piece) -> Vec<Position> {
    let mut moves = Vec::with_capacity(32);
    push_pseudo_legal(board, piece, &mut moves);
    moves
}

/// Number of legal moves for `color`; the board is restored before returning
pub fn count_legal(board: &mut Board, color: PieceColor) -> usize {
    let movers: Vec<Piece> = board.pieces_of(color).copied().collect();
    let mut destinations = Vec::with_capacity(32);
    let mut count = 0;

    for piece in &movers {
        destinations.clear();
        push_pseudo_legal(board, piece, &mut destinations);
        count += destinations
            .iter()
            .filter(|&&to| !leaves_king_in_check(board, piece.position, to))
            .count();
    }
    count
}

/// Legal destinations of the piece on `from`; empty if the square is empty.
///
/// The board is used as scratch space for the self-check test and is left
/// exactly as it was found.
pub fn legal_destinations(board: &mut Board, from: Position) -> Vec<Position> {
    let Some(piece) = board.get(from).copied() else {
        return Vec::new();
    };
    let mut moves = pseudo_legal_destinations(board, &piece);
    moves.retain(|&to| !leaves_king_in_check(board, from, to));
    moves
}

/// Every legal move for `color`.
///
/// Moves that promote carry the default promotion (queen).
pub fn generate_legal_moves(board: &mut Board, color: PieceColor) -> Vec<MoveCandidate> {
    let movers: Vec<Piece> = board.pieces_of(color).copied().collect();
    let mut candidates = Vec::with_capacity(64);
    let mut destinations = Vec::with_capacity(32);

    for piece in &movers {
        destinations.clear();
        push_pseudo_legal(board, piece, &mut destinations);
        for &to in &destinations {
            if leaves_king_in_check(board, piece.position, to) {
                continue;
            }
            candidates.push(MoveCandidate {
                from: piece.position,
                to,
                promotion: promotion_for(piece, to, None),
            });
        }
    }
    candidates
}

/// Does `color` have at least one legal move? Stops at the first one found.
pub fn has_any_legal_move(board: &mut Board, color: PieceColor) -> bool {
    let movers: Vec<Piece> = board.pieces_of(color).copied().collect();
    let mut destinations = Vec::with_capacity(32);

    for piece in &movers {
        destinations.clear();
        push_pseudo_legal(board, piece, &mut destinations);
        if destinations
            .iter()
            .any(|&to| !leaves_king_in_check(board, piece.position, to))
        {
            return true;
        }
    }
    false
}
