//! Alpha-beta search
//!
//! This module implements the computer opponent's move choice:
//! - Negamax variant of alpha-beta pruning at a fixed depth
//! - Stable move ordering (captures by MVV-LVA first)
//! - Optional random move for beginner play
//!
//! Search runs on a private copy of the board. Equal inputs give an equal move
//! and score: generation order is fixed, ordering is stable, and among root
//! moves with the same score the first one wins.
//!
//! ## Module Organization
//!
//! - `alphabeta` - Core alpha-beta search algorithm
//! - `ordering` - Move ordering heuristics
//! - `make_unmake` - Move making/unmaking on the working copy

mod alphabeta;
mod make_unmake;
mod ordering;

use crate::constants::*;
use crate::evaluation::evaluate;
use crate::game::GameState;
use crate::move_gen::generate_legal_moves;
use crate::types::*;
use alphabeta::alphabeta;
use futures_lite::future::yield_now;
use make_unmake::SearchContext;
use ordering::order_moves;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How the search picks a move
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies to search; 0 is treated as 1
    pub depth: u8,
    /// Chance of playing a uniformly random legal move instead of searching
    pub random_move_probability: f64,
    /// Seed for the random move roll; `None` draws from the OS
    pub seed: Option<u64>,
}

impl SearchConfig {
    /// Plain deterministic search at `depth`
    pub fn new(depth: u8) -> Self {
        SearchConfig {
            depth,
            random_move_probability: 0.0,
            seed: None,
        }
    }

    pub fn with_random_moves(mut self, probability: f64, seed: Option<u64>) -> Self {
        self.random_move_probability = probability;
        self.seed = seed;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(INTERMEDIATE_DEPTH)
    }
}

/// The move the search settled on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub mv: MoveCandidate,
    /// Score from the mover's side; `±(MATE_SCORE - plies)` for forced mates
    pub score: i32,
    /// Nodes visited
    pub nodes: u64,
    /// The move was picked at random rather than searched
    pub randomized: bool,
}

/// Pick a move for the side to move.
///
/// Returns `None` when the game is over or the side to move has no legal move.
pub fn get_next_move(state: &GameState, config: &SearchConfig) -> Option<SearchResult> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    get_next_move_with_rng(state, config, &mut rng)
}

/// [`get_next_move`] with a caller-supplied random source
pub fn get_next_move_with_rng<R: Rng>(
    state: &GameState,
    config: &SearchConfig,
    rng: &mut R,
) -> Option<SearchResult> {
    if state.is_game_over() {
        return None;
    }
    if let Some(random) = random_move(state, config, rng) {
        return Some(random);
    }
    search(state, config.depth)
}

/// Fixed-depth search without any randomness
#[cfg(not(feature = "parallel"))]
pub fn search(state: &GameState, depth: u8) -> Option<SearchResult> {
    search_sequential(state, depth)
}

/// Fixed-depth search without any randomness, root moves spread over threads
#[cfg(feature = "parallel")]
pub fn search(state: &GameState, depth: u8) -> Option<SearchResult> {
    search_parallel(state, depth)
}

/// Single-threaded search, one root move after another
pub fn search_sequential(state: &GameState, depth: u8) -> Option<SearchResult> {
    let mut root = RootSearch::new(state, depth)?;
    while root.step() {}
    root.finish()
}

/// [`search`] as a future that yields back to the executor after every root
/// move, so a UI loop can keep running while the AI thinks.
///
/// Dropping the future abandons the search; it only ever touched a copy.
pub async fn search_async(state: &GameState, depth: u8) -> Option<SearchResult> {
    let mut root = RootSearch::new(state, depth)?;
    while root.step() {
        yield_now().await;
    }
    root.finish()
}

/// Root moves searched concurrently, each on its own copy of the board.
///
/// Each root move gets a full window so its score is exact. The chosen move and
/// score match the sequential search; only the node count differs.
#[cfg(feature = "parallel")]
pub fn search_parallel(state: &GameState, depth: u8) -> Option<SearchResult> {
    use rayon::prelude::*;

    let depth = depth.max(1);
    let mut ctx = SearchContext::new(state);
    let mut moves = generate_legal_moves(&mut ctx.board, ctx.to_move);
    if moves.is_empty() {
        return None;
    }
    order_moves(&ctx.board, &mut moves);

    let scored: Vec<(MoveCandidate, i32, u64)> = moves
        .par_iter()
        .filter_map(|&mv| {
            let mut branch = ctx.clone();
            let undo = branch.make_move(mv)?;
            let score = -alphabeta(&mut branch, depth - 1, 1, -AB_INF, AB_INF);
            branch.unmake_move(undo);
            Some((mv, score, branch.nodes))
        })
        .collect();

    let nodes = scored.iter().map(|&(_, _, n)| n).sum::<u64>() + 1;
    let mut best: Option<(MoveCandidate, i32)> = None;
    for &(mv, score, _) in &scored {
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }
    let (mv, score) = best?;
    debug!(
        "[SEARCH] Parallel depth {}: {} (score {}, {} nodes)",
        depth, mv, score, nodes
    );
    Some(SearchResult {
        mv,
        score,
        nodes,
        randomized: false,
    })
}

/// Root of one search, advanced one root move at a time
struct RootSearch {
    ctx: SearchContext,
    moves: Vec<MoveCandidate>,
    next: usize,
    depth: u8,
    alpha: i32,
    best: Option<(MoveCandidate, i32)>,
}

impl RootSearch {
    fn new(state: &GameState, depth: u8) -> Option<Self> {
        if state.is_game_over() {
            return None;
        }
        let mut ctx = SearchContext::new(state);
        let mut moves = generate_legal_moves(&mut ctx.board, ctx.to_move);
        if moves.is_empty() {
            return None;
        }
        order_moves(&ctx.board, &mut moves);
        ctx.nodes = 1;
        Some(RootSearch {
            ctx,
            moves,
            next: 0,
            depth: depth.max(1),
            alpha: -AB_INF,
            best: None,
        })
    }

    /// Search the next root move. Returns `false` once every move is done.
    fn step(&mut self) -> bool {
        let Some(&mv) = self.moves.get(self.next) else {
            return false;
        };
        self.next += 1;

        if let Some(undo) = self.ctx.make_move(mv) {
            let score = -alphabeta(&mut self.ctx, self.depth - 1, 1, -AB_INF, -self.alpha);
            self.ctx.unmake_move(undo);

            // Strictly better only: the first of equal moves is kept
            if self.best.map_or(true, |(_, best)| score > best) {
                self.best = Some((mv, score));
                self.alpha = self.alpha.max(score);
            }
        }
        self.next < self.moves.len()
    }

    fn finish(self) -> Option<SearchResult> {
        let (mv, score) = self.best?;
        debug!(
            "[SEARCH] Depth {}: {} (score {}, {} nodes)",
            self.depth, mv, score, self.ctx.nodes
        );
        Some(SearchResult {
            mv,
            score,
            nodes: self.ctx.nodes,
            randomized: false,
        })
    }
}

/// Roll for a beginner blunder; on success pick any legal move uniformly
fn random_move<R: Rng>(
    state: &GameState,
    config: &SearchConfig,
    rng: &mut R,
) -> Option<SearchResult> {
    let probability = config.random_move_probability;
    if !probability.is_finite() || probability <= 0.0 {
        return None;
    }
    if !rng.random_bool(probability.min(1.0)) {
        return None;
    }
    let moves = state.legal_moves();
    if moves.is_empty() {
        return None;
    }
    let mv = moves[rng.random_range(0..moves.len())];
    debug!("[SEARCH] Random move {}", mv);
    Some(SearchResult {
        mv,
        score: evaluate(state, state.current_turn()),
        nodes: 0,
        randomized: true,
    })
}
