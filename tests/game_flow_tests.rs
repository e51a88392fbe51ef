//! Game Flow Integration Tests
//!
//! Tests for full game flows including:
//! - Turn alternation
//! - Checkmate and game over
//! - Undo/redo
//! - Export/import of the whole history

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use tri_chess::search::get_next_move_with_rng;
use tri_chess::{
    Board, ChessEngineError, ChessGame, GameStatus, PieceColor, PieceType, Position, SearchConfig,
};

fn pos(x: u8, y: u8, layer: u8) -> Position {
    Position::new(x, y, layer)
}

/// Queen mate on layer 1 with both layer escapes covered by rooks
fn mating_net() -> ChessGame {
    let mut board = Board::new();
    board
        .add_piece(PieceType::King, PieceColor::White, pos(4, 5, 1))
        .unwrap();
    board
        .add_piece(PieceType::Queen, PieceColor::White, pos(3, 5, 1))
        .unwrap();
    board
        .add_piece(PieceType::Rook, PieceColor::White, pos(0, 7, 0))
        .unwrap();
    board
        .add_piece(PieceType::Rook, PieceColor::White, pos(0, 7, 2))
        .unwrap();
    board
        .add_piece(PieceType::King, PieceColor::Black, pos(4, 7, 1))
        .unwrap();
    ChessGame::from_board(board, PieceColor::White).unwrap()
}

fn played_game() -> ChessGame {
    let mut game = ChessGame::new();
    for (from, to) in [
        (pos(4, 1, 0), pos(4, 3, 0)),
        (pos(4, 6, 0), pos(4, 4, 0)),
        (pos(1, 0, 0), pos(1, 0, 1)),
        (pos(2, 7, 1), pos(2, 7, 2)),
        (pos(5, 0, 1), pos(2, 3, 1)),
    ] {
        game.make_move(from, to).unwrap();
    }
    game
}

// ============================================================================
// Turn Alternation Tests
// ============================================================================

#[test]
fn test_turns_alternate_and_rejections_do_not_flip() {
    let mut game = ChessGame::new();
    assert_eq!(game.current_turn(), PieceColor::White);

    game.make_move(pos(4, 1, 0), pos(4, 3, 0)).unwrap();
    assert_eq!(game.current_turn(), PieceColor::Black);

    let err = game.make_move(pos(3, 1, 0), pos(3, 3, 0)).unwrap_err();
    assert!(matches!(err, ChessEngineError::WrongTurn { .. }));
    assert!(err.is_illegal_move());
    assert_eq!(game.current_turn(), PieceColor::Black);

    game.make_move(pos(4, 6, 0), pos(4, 4, 0)).unwrap();
    assert_eq!(game.current_turn(), PieceColor::White);
}

#[test]
fn test_random_playout_keeps_invariants() {
    //! Exactly one king per side and a consistent grid after every move
    let mut game = ChessGame::new();
    let mut rng = StdRng::seed_from_u64(11);
    let config = SearchConfig::new(1).with_random_moves(1.0, None);

    for _ in 0..60 {
        let Some(result) = get_next_move_with_rng(game.game_state(), &config, &mut rng) else {
            break;
        };
        let mover = game.current_turn();
        game.apply_candidate(result.mv).unwrap();
        assert_ne!(game.current_turn(), mover);

        let board = game.game_state().board();
        assert!(board.is_consistent());
        for color in [PieceColor::White, PieceColor::Black] {
            assert_eq!(board.count(color, PieceType::King), 1);
        }
        game.game_state().validate().unwrap();
    }
}

// ============================================================================
// Game Over Tests
// ============================================================================

#[test]
fn test_queen_mate_on_middle_layer() {
    let mut game = mating_net();
    assert!(!game.is_check());

    let mv = game.make_move(pos(3, 5, 1), pos(4, 6, 1)).unwrap();
    assert!(mv.is_check);
    assert!(mv.is_checkmate);
    assert!(game.is_checkmate());
    assert_eq!(
        game.status(),
        GameStatus::Checkmate {
            winner: PieceColor::White
        }
    );
    assert!(game.legal_moves().is_empty());

    let err = game.make_move(pos(4, 7, 1), pos(4, 6, 1)).unwrap_err();
    assert!(matches!(err, ChessEngineError::GameOver { .. }));
}

// ============================================================================
// History Tests
// ============================================================================

#[test]
fn test_undo_redo_through_the_facade() {
    let mut game = played_game();
    let end = game.game_state().clone();

    assert!(game.undo());
    assert!(game.undo());
    assert_eq!(game.current_turn(), PieceColor::Black);
    assert_eq!(game.game_state().moves().len(), 3);
    assert!(game.redo());
    assert!(game.redo());
    assert_eq!(game.game_state(), &end);

    // A new move after undo discards the redo line
    game.undo();
    game.make_move(pos(0, 1, 0), pos(0, 2, 0)).unwrap();
    assert!(!game.can_redo());
}

#[test]
fn test_export_import_round_trip() {
    let mut game = played_game();
    game.undo();
    let data = game.export_game().unwrap();

    let mut restored = ChessGame::new();
    restored.import_game(&data).unwrap();
    assert_eq!(restored, game);
    assert_eq!(restored.game_state(), game.game_state());

    for piece in game.game_state().board().pieces() {
        assert_eq!(
            restored.legal_destinations(piece.position),
            game.legal_destinations(piece.position),
            "legal moves differ for {:?}",
            piece
        );
    }
    assert!(restored.redo());
}

#[test]
fn test_corrupted_import_keeps_current_game() {
    let game = played_game();
    let data = game.export_game().unwrap();
    let mut target = ChessGame::new();
    target.make_move(pos(6, 0, 0), pos(5, 2, 0)).unwrap();
    let before = target.clone();

    // Turn no longer alternates
    let mut value: Value = serde_json::from_str(&data).unwrap();
    let last = value["snapshots"].as_array().unwrap().len() - 1;
    value["snapshots"][last]["current_turn"] = Value::from("White");
    let err = target.import_game(&value.to_string()).unwrap_err();
    assert!(matches!(err, ChessEngineError::InvalidSnapshot { .. }));
    assert_eq!(target, before);

    // Black king removed
    let mut value: Value = serde_json::from_str(&data).unwrap();
    let pieces = value["snapshots"][0]["board"]["pieces"]
        .as_array_mut()
        .unwrap();
    for slot in pieces.iter_mut() {
        if slot["piece_type"] == "King" && slot["color"] == "Black" {
            *slot = Value::Null;
        }
    }
    assert!(target.import_game(&value.to_string()).is_err());
    assert_eq!(target, before);

    // Cursor past the end
    let mut value: Value = serde_json::from_str(&data).unwrap();
    value["cursor"] = Value::from(99);
    assert!(target.import_game(&value.to_string()).is_err());

    // Not JSON at all
    assert!(matches!(
        target.import_game("garbage"),
        Err(ChessEngineError::Serialization(_))
    ));
    assert_eq!(target, before);
}

#[test]
fn test_import_rejects_result_the_board_does_not_show() {
    //! A drawn-by-material flag on a full board is refused
    let data = played_game().export_game().unwrap();
    let mut target = ChessGame::new();
    let before = target.clone();

    let mut value: Value = serde_json::from_str(&data).unwrap();
    value["snapshots"][1]["status"] = json!({ "Draw": { "reason": "InsufficientMaterial" } });
    let err = target.import_game(&value.to_string()).unwrap_err();
    assert!(matches!(err, ChessEngineError::InvalidSnapshot { .. }));
    assert_eq!(target, before);

    let mut value: Value = serde_json::from_str(&data).unwrap();
    value["snapshots"][2]["status"] = json!({ "Checkmate": { "winner": "Black" } });
    assert!(target.import_game(&value.to_string()).is_err());
    assert_eq!(target, before);
}

#[test]
fn test_import_rejects_off_board_move_record() {
    let data = played_game().export_game().unwrap();
    let mut target = ChessGame::new();
    let before = target.clone();

    let mut value: Value = serde_json::from_str(&data).unwrap();
    value["snapshots"][1]["moves"][0]["from"]["x"] = Value::from(200);
    let err = target.import_game(&value.to_string()).unwrap_err();
    assert!(matches!(err, ChessEngineError::InvalidSnapshot { .. }));
    assert_eq!(target, before);

    let mut value: Value = serde_json::from_str(&data).unwrap();
    let last = value["snapshots"].as_array().unwrap().len() - 1;
    value["snapshots"][last]["moves"][0]["piece"]["position"]["layer"] = Value::from(7);
    assert!(target.import_game(&value.to_string()).is_err());
    assert_eq!(target, before);
    assert!(target.game_state().last_move().is_none());
}

#[test]
fn test_import_rejects_broken_snapshot_chain() {
    let data = played_game().export_game().unwrap();
    let mut target = ChessGame::new();
    let before = target.clone();

    // A position dropped from the middle
    let mut value: Value = serde_json::from_str(&data).unwrap();
    value["snapshots"].as_array_mut().unwrap().remove(2);
    value["cursor"] = Value::from(0);
    assert!(target.import_game(&value.to_string()).is_err());
    assert_eq!(target, before);

    // A recorded move that does not lead to the next board
    let mut value: Value = serde_json::from_str(&data).unwrap();
    value["snapshots"][2]["moves"][1]["to"]["y"] = Value::from(5);
    assert!(target.import_game(&value.to_string()).is_err());
    assert_eq!(target, before);

    // Snapshots out of order
    let mut value: Value = serde_json::from_str(&data).unwrap();
    value["snapshots"].as_array_mut().unwrap().swap(1, 2);
    assert!(target.import_game(&value.to_string()).is_err());
    assert_eq!(target, before);
}

#[test]
fn test_import_keeps_declared_result() {
    let mut game = played_game();
    game.agree_draw().unwrap();
    let data = game.export_game().unwrap();

    let mut restored = ChessGame::new();
    restored.import_game(&data).unwrap();
    assert_eq!(restored, game);
    assert!(restored.status().is_draw());
}
