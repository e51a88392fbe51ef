//! Computer opponent configuration and turn coordination
//!
//! - `resource` - game mode and difficulty settings
//! - `coordinator` - decides who may move and runs the search on the AI's turn

mod coordinator;
mod resource;

pub use coordinator::{ModeCoordinator, MoveOrigin, TurnOutcome};
pub use resource::{AiConfig, Difficulty, GameMode};
