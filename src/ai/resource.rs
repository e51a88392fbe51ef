//! Game mode and difficulty settings
//!
//! Configures which sides the engine plays and how strong it plays them.
//!
//! # Game Modes
//!
//! - **LocalTwoPlayer**: two humans on one device, no AI
//! - **VsAi**: one human against the engine (specify the AI color)
//! - **Online**: one local human against a remote player
//!
//! # Difficulty Levels
//!
//! Difficulty selects a fixed search depth:
//!
//! | Difficulty   | Depth | Random moves |
//! |--------------|-------|--------------|
//! | Beginner     | 2 ply | 25% default  |
//! | Intermediate | 3 ply | never        |
//! | Expert       | 4 ply | never        |

use crate::constants::*;
use crate::search::SearchConfig;
use crate::types::PieceColor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// AI strength level
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Expert,
}

impl Difficulty {
    /// Search depth in plies
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Beginner => BEGINNER_DEPTH,
            Difficulty::Intermediate => INTERMEDIATE_DEPTH,
            Difficulty::Expert => EXPERT_DEPTH,
        }
    }

    /// Default chance of a random move at this level
    pub fn default_random_move_probability(self) -> f64 {
        match self {
            Difficulty::Beginner => DEFAULT_BEGINNER_RANDOM_MOVE_PROBABILITY,
            Difficulty::Intermediate | Difficulty::Expert => 0.0,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner (2 ply, occasional random moves)",
            Difficulty::Intermediate => "Intermediate (3 ply)",
            Difficulty::Expert => "Expert (4 ply)",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Who controls each side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Hot-seat play, both sides human
    LocalTwoPlayer,
    /// The given color is played by the engine
    VsAi { ai_color: PieceColor },
    /// The given color is the local player; the other arrives over the network
    Online { local_color: PieceColor },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::VsAi {
            ai_color: PieceColor::Black,
        }
    }
}

impl GameMode {
    /// The engine's color, if it plays at all
    pub fn ai_color(self) -> Option<PieceColor> {
        match self {
            GameMode::VsAi { ai_color } => Some(ai_color),
            GameMode::LocalTwoPlayer | GameMode::Online { .. } => None,
        }
    }

    /// Is `color` controlled by the engine?
    pub fn is_ai(self, color: PieceColor) -> bool {
        self.ai_color() == Some(color)
    }
}

/// Difficulty plus the knobs behind it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    /// Overrides the difficulty's default random-move chance
    pub random_move_probability: Option<f64>,
    /// Seed for reproducible random moves
    pub seed: Option<u64>,
}

impl AiConfig {
    pub fn new(difficulty: Difficulty) -> Self {
        AiConfig {
            difficulty,
            random_move_probability: None,
            seed: None,
        }
    }

    /// The search configuration this difficulty maps to
    pub fn search_config(&self) -> SearchConfig {
        let probability = self
            .random_move_probability
            .unwrap_or_else(|| self.difficulty.default_random_move_probability());
        SearchConfig::new(self.difficulty.depth()).with_random_moves(probability, self.seed)
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}
