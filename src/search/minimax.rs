//! Depth-limited minimax search.
//!
//! The recursion scores leaves from the root agent's perspective and
//! combines children with `max` at the agent's nodes and `min` at the
//! opponent's. Among equal-valued moves the first in ascending square
//! order wins, so results are fully deterministic.

use std::time::Instant;

use crate::errors::MoveResult;
use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{Player, Square};
use crate::move_generation::legal_move_apply::forecast_move;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::search::board_scoring::BoardScorer;

/// Root result of a fixed-depth search.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    pub best_move: Option<Square>,
    pub value: f64,
    pub nodes: u64,
    /// True when the deadline cut the search short; `best_move` is then the
    /// best fully evaluated root child so far.
    pub aborted: bool,
}

/// Fixed-depth minimax from the active player's perspective.
///
/// `deadline` is polled at every node entry; an expired deadline aborts the
/// remaining exploration and the best fully evaluated move is kept.
pub fn minimax_root<S: BoardScorer>(
    board: &BoardState,
    generator: &LegalMoveGenerator,
    scorer: &S,
    depth: u8,
    deadline: Option<Instant>,
) -> MoveResult<SearchOutcome> {
    let agent = board.active_player;
    let moves = generator.legal_moves_active(board);
    let mut nodes = 1u64;

    if moves.is_empty() || depth == 0 {
        return Ok(SearchOutcome {
            best_move: None,
            value: scorer.score(generator, board, agent),
            nodes,
            aborted: false,
        });
    }

    let mut best_move = None;
    let mut best_value = f64::NEG_INFINITY;

    for mv in moves {
        if deadline_expired(deadline) {
            return Ok(SearchOutcome {
                best_move,
                value: best_value,
                nodes,
                aborted: true,
            });
        }

        let child = forecast_move(board, generator, mv)?;
        let Some(value) =
            minimax_value(&child, generator, scorer, depth - 1, agent, deadline, &mut nodes)?
        else {
            return Ok(SearchOutcome {
                best_move,
                value: best_value,
                nodes,
                aborted: true,
            });
        };

        if best_move.is_none() || value > best_value {
            best_value = value;
            best_move = Some(mv);
        }
    }

    Ok(SearchOutcome {
        best_move,
        value: best_value,
        nodes,
        aborted: false,
    })
}

/// Recursive node value; `None` signals deadline expiry, not an error.
fn minimax_value<S: BoardScorer>(
    board: &BoardState,
    generator: &LegalMoveGenerator,
    scorer: &S,
    depth: u8,
    agent: Player,
    deadline: Option<Instant>,
    nodes: &mut u64,
) -> MoveResult<Option<f64>> {
    if deadline_expired(deadline) {
        return Ok(None);
    }
    *nodes += 1;

    if depth == 0 || generator.is_terminal(board) {
        return Ok(Some(scorer.score(generator, board, agent)));
    }

    let maximizing = board.active_player == agent;
    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };

    for mv in generator.legal_moves_active(board) {
        let child = forecast_move(board, generator, mv)?;
        let Some(value) =
            minimax_value(&child, generator, scorer, depth - 1, agent, deadline, nodes)?
        else {
            return Ok(None);
        };

        if maximizing {
            best = best.max(value);
        } else {
            best = best.min(value);
        }
    }

    Ok(Some(best))
}

#[inline]
pub(crate) fn deadline_expired(deadline: Option<Instant>) -> bool {
    match deadline {
        Some(limit) => Instant::now() >= limit,
        None => false,
    }
}
