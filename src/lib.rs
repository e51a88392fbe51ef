//! Rules engine and computer opponent for three-layer chess
//!
//! The board is three stacked 8×8 layers. Pieces keep their usual moves on a
//! layer and gain piece-specific ways to change layer; see [`move_gen`] for the
//! exact rules.
//!
//! ## Module Organization
//!
//! - `board` - the 3×8×8 grid and piece store
//! - `move_gen` - per-piece move generation and the check oracle
//! - `game` - authoritative game state, move executor and history
//! - `evaluation` - heuristic position scoring
//! - `search` - fixed-depth alpha-beta search
//! - `ai` - difficulty/mode settings and turn coordination
//! - `api` - the [`ChessGame`] session facade
//! - `core` - persisted engine settings

pub mod ai;
pub mod api;
pub mod board;
pub mod constants;
pub mod core;
pub mod error;
pub mod evaluation;
pub mod game;
pub mod move_gen;
pub mod search;
pub mod types;

pub use ai::{AiConfig, Difficulty, GameMode, ModeCoordinator, MoveOrigin, TurnOutcome};
pub use api::ChessGame;
pub use board::Board;
pub use error::{ChessEngineError, ChessEngineResult};
pub use game::{DrawReason, GameHistory, GameRecord, GameState, GameStatus};
pub use search::{get_next_move, search, search_async, SearchConfig, SearchResult};
pub use types::{Move, MoveCandidate, Piece, PieceColor, PieceId, PieceType, Position};
