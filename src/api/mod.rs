//! Public API for the chess engine
//!
//! [`ChessGame`] is the facade a UI or network layer drives: it owns the game
//! history and routes every move through the executor.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new, reset, undo/redo, export/import)
//! - `moves` - Move execution and validation (make_move, is_legal_move)
//! - `state` - Game state queries and AI (game_state, reply)

mod game;
mod moves;
mod state;

pub use game::ChessGame;
