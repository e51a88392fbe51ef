//! Engine settings
//!
//! Everything a front end may want to remember between sessions: who the engine
//! plays, how strong it is, how often a beginner blunders, and the self-play
//! limits used by the command-line driver.

use super::error::{CoreError, CoreResult};
use crate::ai::{AiConfig, Difficulty, GameMode};
use crate::constants::DEFAULT_BEGINNER_RANDOM_MOVE_PROBABILITY;
use serde::{Deserialize, Serialize};

/// User-tunable engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Chance a beginner engine plays a random legal move instead of searching
    pub beginner_random_move_probability: f64,
    /// Fixed RNG seed for reproducible games
    pub seed: Option<u64>,
    /// Stop self-play after this many plies
    pub max_plies: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            beginner_random_move_probability: DEFAULT_BEGINNER_RANDOM_MOVE_PROBABILITY,
            seed: None,
            max_plies: 200,
        }
    }
}

impl EngineSettings {
    /// Reject values the engine cannot use
    pub fn validate(&self) -> CoreResult<()> {
        let p = self.beginner_random_move_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(CoreError::InvalidSetting {
                name: "beginner_random_move_probability",
                message: format!("{} is not a probability", p),
            });
        }
        if self.max_plies == 0 {
            return Err(CoreError::InvalidSetting {
                name: "max_plies",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// AI configuration for `difficulty`
    pub fn ai_config(&self, difficulty: Difficulty) -> AiConfig {
        let random_move_probability = match difficulty {
            Difficulty::Beginner => Some(self.beginner_random_move_probability),
            Difficulty::Intermediate | Difficulty::Expert => None,
        };
        AiConfig {
            difficulty,
            random_move_probability,
            seed: self.seed,
        }
    }
}
