//! Turn coordination between humans, remote players and the engine
//!
//! The coordinator never changes the rules. It only decides whether a move
//! from a given source may be submitted right now, and on the engine's turn it
//! runs the search and feeds the result through the same executor path as any
//! other move.

use super::resource::{AiConfig, GameMode};
use crate::api::ChessGame;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::game::GameStatus;
use crate::search::get_next_move_with_rng;
use crate::types::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

/// Where a move request came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOrigin {
    /// Local input
    Human,
    /// Received from the network layer
    Remote,
    /// Chosen by the search
    Ai,
}

/// Result of [`ModeCoordinator::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Waiting for a human or remote move
    Waiting,
    /// The engine played this move
    Moved(Move),
    /// The game has ended
    GameOver(GameStatus),
    /// The engine found nothing to play
    NoMove,
}

pub struct ModeCoordinator {
    mode: GameMode,
    ai: AiConfig,
    rng: StdRng,
}

impl ModeCoordinator {
    pub fn new(mode: GameMode, ai: AiConfig) -> Self {
        let rng = match ai.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        ModeCoordinator { mode, ai, rng }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn ai_config(&self) -> &AiConfig {
        &self.ai
    }

    /// Is it the engine's turn in `game`?
    pub fn is_ai_turn(&self, game: &ChessGame) -> bool {
        !game.game_state().is_game_over() && self.mode.is_ai(game.current_turn())
    }

    /// Forward a human or remote move to the executor.
    ///
    /// # Errors
    ///
    /// [`ChessEngineError::MoveNotPermitted`] if `origin` does not control the
    /// side to move in this mode; otherwise whatever the executor reports.
    pub fn submit_move(
        &self,
        game: &mut ChessGame,
        from: Position,
        to: Position,
        promotion: Option<PieceType>,
        origin: MoveOrigin,
    ) -> ChessEngineResult<Move> {
        let turn = game.current_turn();
        if !self.controls(origin, turn) {
            return Err(ChessEngineError::MoveNotPermitted {
                message: format!("{:?} input cannot move for {} in {:?}", origin, turn, self.mode),
            });
        }
        game.make_move_with_promotion(from, to, promotion)
    }

    /// Let the engine move if it is its turn
    pub fn advance(&mut self, game: &mut ChessGame) -> ChessEngineResult<TurnOutcome> {
        let state = game.game_state();
        if state.is_game_over() {
            return Ok(TurnOutcome::GameOver(state.status()));
        }
        if !self.mode.is_ai(state.current_turn()) {
            return Ok(TurnOutcome::Waiting);
        }

        let config = self.ai.search_config();
        let Some(result) = get_next_move_with_rng(state, &config, &mut self.rng) else {
            debug!("[AI] No move for {}", state.current_turn());
            return Ok(TurnOutcome::NoMove);
        };
        let mv = game.apply_candidate(result.mv)?;
        info!(
            "[AI] {} plays {} (score {}, {} nodes{})",
            mv.piece.color,
            mv,
            result.score,
            result.nodes,
            if result.randomized { ", random" } else { "" }
        );
        Ok(TurnOutcome::Moved(mv))
    }

    fn controls(&self, origin: MoveOrigin, turn: PieceColor) -> bool {
        match (origin, self.mode) {
            (MoveOrigin::Human, GameMode::LocalTwoPlayer) => true,
            (MoveOrigin::Human, GameMode::VsAi { ai_color }) => turn != ai_color,
            (MoveOrigin::Human, GameMode::Online { local_color }) => turn == local_color,
            (MoveOrigin::Remote, GameMode::Online { local_color }) => turn != local_color,
            (MoveOrigin::Ai, GameMode::VsAi { ai_color }) => turn == ai_color,
            _ => false,
        }
    }
}
