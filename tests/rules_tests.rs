//! Rules Integration Tests
//!
//! Move legality on the three-layer board:
//! - Pawn pushes and blocking
//! - Knight layer jumps
//! - Rook layer steps
//! - Promotion on every layer
//! - Self-check filtering

use tri_chess::{Board, ChessEngineError, ChessGame, GameState, PieceColor, PieceType, Position};

fn pos(x: u8, y: u8, layer: u8) -> Position {
    Position::new(x, y, layer)
}

fn kings(white: Position, black: Position) -> Board {
    let mut board = Board::new();
    board
        .add_piece(PieceType::King, PieceColor::White, white)
        .unwrap();
    board
        .add_piece(PieceType::King, PieceColor::Black, black)
        .unwrap();
    board
}

// ============================================================================
// Starting Position
// ============================================================================

#[test]
fn test_starting_layout() {
    //! Full army on layer 0, one knight and one bishop per side on layer 1
    let state = GameState::new();
    let board = state.board();
    assert_eq!(board.pieces_of(PieceColor::White).count(), 18);
    assert_eq!(board.pieces_of(PieceColor::Black).count(), 18);
    assert_eq!(
        board.get(pos(2, 0, 1)).map(|p| p.piece_type),
        Some(PieceType::Knight)
    );
    assert_eq!(
        board.get(pos(5, 7, 1)).map(|p| (p.piece_type, p.color)),
        Some((PieceType::Bishop, PieceColor::Black))
    );
    assert!(board.pieces().all(|p| p.position.layer != 2));
    assert_eq!(state.current_turn(), PieceColor::White);
}

#[test]
fn test_rook_behind_pawn_cannot_advance() {
    //! Rook on a1L0 with its pawn still on a2L0 has nothing along the file
    let state = GameState::new();
    let moves = state.legal_destinations(pos(0, 0, 0));
    assert!(moves
        .iter()
        .all(|to| !(to.x == 0 && to.layer == 0 && to.y > 0)));
    assert_eq!(moves, vec![pos(0, 0, 1)]);
}

#[test]
fn test_knight_jumps_on_layer_and_between_layers() {
    let state = GameState::new();
    let mut moves = state.legal_destinations(pos(1, 0, 0));
    moves.sort_by_key(|p| (p.layer, p.y, p.x));
    assert_eq!(
        moves,
        vec![pos(0, 2, 0), pos(2, 2, 0), pos(1, 0, 1), pos(1, 0, 2)]
    );
}

#[test]
fn test_knight_layer_jump_blocked_by_own_piece() {
    //! The layer-1 knight on c1 cannot land on c1L0, which holds a bishop
    let state = GameState::new();
    let moves = state.legal_destinations(pos(2, 0, 1));
    assert!(!moves.contains(&pos(2, 0, 0)));
    assert!(moves.contains(&pos(2, 0, 2)));
}

#[test]
fn test_bishop_never_changes_layer() {
    let mut board = kings(pos(0, 0, 0), pos(7, 7, 2));
    board
        .add_piece(PieceType::Bishop, PieceColor::White, pos(3, 3, 1))
        .unwrap();
    let state = GameState::from_board(board, PieceColor::White).unwrap();
    let moves = state.legal_destinations(pos(3, 3, 1));
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|to| to.layer == 1));
}

#[test]
fn test_rook_layer_step_is_quiet_only() {
    let mut board = kings(pos(0, 0, 0), pos(7, 7, 0));
    board
        .add_piece(PieceType::Rook, PieceColor::White, pos(3, 3, 1))
        .unwrap();
    board
        .add_piece(PieceType::Pawn, PieceColor::Black, pos(3, 3, 2))
        .unwrap();
    let state = GameState::from_board(board, PieceColor::White).unwrap();
    let moves = state.legal_destinations(pos(3, 3, 1));
    assert!(moves.contains(&pos(3, 3, 0)));
    assert!(!moves.contains(&pos(3, 3, 2)));
}

#[test]
fn test_pawn_double_step_needs_clear_path() {
    let mut board = kings(pos(7, 0, 0), pos(7, 7, 0));
    board
        .add_piece(PieceType::Pawn, PieceColor::White, pos(4, 1, 0))
        .unwrap();
    board
        .add_piece(PieceType::Knight, PieceColor::Black, pos(4, 2, 0))
        .unwrap();
    let state = GameState::from_board(board, PieceColor::White).unwrap();
    assert!(state.legal_destinations(pos(4, 1, 0)).is_empty());
}

#[test]
fn test_pawn_captures_across_layers() {
    let mut board = kings(pos(7, 0, 0), pos(7, 7, 0));
    board
        .add_piece(PieceType::Pawn, PieceColor::White, pos(4, 3, 1))
        .unwrap();
    board
        .add_piece(PieceType::Knight, PieceColor::Black, pos(5, 4, 2))
        .unwrap();
    // Empty diagonal on another layer is not a move
    let state = GameState::from_board(board, PieceColor::White).unwrap();
    let moves = state.legal_destinations(pos(4, 3, 1));
    assert!(moves.contains(&pos(5, 4, 2)));
    assert!(moves.contains(&pos(4, 4, 1)));
    assert!(!moves.contains(&pos(3, 4, 0)));
    assert!(!moves.contains(&pos(3, 4, 2)));
}

// ============================================================================
// Promotion
// ============================================================================

#[test]
fn test_white_promotes_on_top_layer() {
    let mut board = kings(pos(0, 0, 0), pos(7, 4, 0));
    board
        .add_piece(PieceType::Pawn, PieceColor::White, pos(2, 6, 2))
        .unwrap();
    let mut game = ChessGame::from_board(board, PieceColor::White).unwrap();
    let mv = game
        .make_move_with_promotion(pos(2, 6, 2), pos(2, 7, 2), Some(PieceType::Rook))
        .unwrap();
    assert_eq!(mv.promotion, Some(PieceType::Rook));
    assert_eq!(
        game.game_state().piece_at(pos(2, 7, 2)).map(|p| p.piece_type),
        Some(PieceType::Rook)
    );
}

#[test]
fn test_black_promotion_falls_back_to_queen() {
    //! Asking for a king (or nothing) still yields a queen
    let mut board = kings(pos(0, 7, 2), pos(7, 7, 0));
    board
        .add_piece(PieceType::Pawn, PieceColor::Black, pos(6, 1, 1))
        .unwrap();
    board
        .add_piece(PieceType::Pawn, PieceColor::White, pos(0, 1, 0))
        .unwrap();
    let mut game = ChessGame::from_board(board, PieceColor::Black).unwrap();
    let mv = game
        .make_move_with_promotion(pos(6, 1, 1), pos(6, 0, 1), Some(PieceType::King))
        .unwrap();
    assert_eq!(mv.promotion, Some(PieceType::Queen));
    assert_eq!(
        game.game_state().piece_at(pos(6, 0, 1)).map(|p| p.piece_type),
        Some(PieceType::Queen)
    );
}

// ============================================================================
// Check
// ============================================================================

#[test]
fn test_pinned_piece_cannot_expose_king() {
    let mut board = kings(pos(4, 0, 0), pos(0, 7, 2));
    board
        .add_piece(PieceType::Knight, PieceColor::White, pos(4, 1, 0))
        .unwrap();
    board
        .add_piece(PieceType::Rook, PieceColor::Black, pos(4, 7, 0))
        .unwrap();
    let mut game = ChessGame::from_board(board, PieceColor::White).unwrap();
    let state = game.game_state();
    assert!(state.legal_destinations(pos(4, 1, 0)).is_empty());
    let err = game.make_move(pos(4, 1, 0), pos(4, 1, 1)).unwrap_err();
    assert!(matches!(err, ChessEngineError::InvalidMove { .. }));
}

#[test]
fn test_check_flag_follows_the_mover() {
    let mut board = kings(pos(4, 0, 0), pos(4, 7, 0));
    board
        .add_piece(PieceType::Rook, PieceColor::White, pos(0, 3, 0))
        .unwrap();
    let mut game = ChessGame::from_board(board, PieceColor::White).unwrap();
    let mv = game.make_move(pos(0, 3, 0), pos(4, 3, 0)).unwrap();
    assert!(mv.is_check);
    assert!(game.is_check());
    assert!(!game.is_checkmate());
}
