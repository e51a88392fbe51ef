//! Alpha-beta search with negamax
//!
//! Scores are always from the point of view of the side to move at the node, so
//! a child's score is negated on the way up. The root therefore reports scores
//! from the root mover's side.
//!
//! Terminal nodes:
//! - side to move has no legal move and is in check: `-(MATE_SCORE - ply)`, so a
//!   mate found nearer the root is worth more to the winner
//! - no legal move, not in check (stalemate), or only kings left: 0

use super::make_unmake::SearchContext;
use super::ordering::order_moves;
use crate::constants::*;
use crate::evaluation::evaluate_board;
use crate::move_gen::{generate_legal_moves, has_any_legal_move, is_king_in_check};

/// Negamax search of `depth` plies below the current node
pub(crate) fn alphabeta(
    ctx: &mut SearchContext,
    depth: u8,
    ply: i32,
    mut alpha: i32,
    beta: i32,
) -> i32 {
    ctx.nodes += 1;
    let mover = ctx.to_move;

    if depth == 0 {
        if !has_any_legal_move(&mut ctx.board, mover) {
            return terminal_score(ctx, ply);
        }
        if ctx.board.only_kings_remain() {
            return 0;
        }
        return evaluate_board(&mut ctx.board, mover, mover);
    }

    let mut moves = generate_legal_moves(&mut ctx.board, mover);
    if moves.is_empty() {
        return terminal_score(ctx, ply);
    }
    if ctx.board.only_kings_remain() {
        return 0;
    }
    order_moves(&ctx.board, &mut moves);

    let mut best = -AB_INF;
    for mv in moves {
        let Some(undo) = ctx.make_move(mv) else {
            continue;
        };
        let score = -alphabeta(ctx, depth - 1, ply + 1, -beta, -alpha);
        ctx.unmake_move(undo);

        best = best.max(score);
        alpha = alpha.max(best);
        if alpha >= beta {
            break;
        }
    }
    best
}

/// Score of a node whose side to move has no legal move
pub(crate) fn terminal_score(ctx: &SearchContext, ply: i32) -> i32 {
    if is_king_in_check(&ctx.board, ctx.to_move) {
        -(MATE_SCORE - ply)
    } else {
        0
    }
}
