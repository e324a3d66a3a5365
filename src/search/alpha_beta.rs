//! Alpha-beta pruned search with iterative deepening.
//!
//! The recursion mirrors `minimax` with an `(alpha, beta)` window passed
//! down; cutoffs never change the value returned at the root, only which of
//! several value-tied moves is kept. The deepening driver re-runs the search
//! at increasing depth and keeps the best move of the deepest *completed*
//! depth; a depth interrupted by the deadline is discarded wholesale.

use std::time::Instant;

use crate::errors::MoveResult;
use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{Player, Square};
use crate::move_generation::legal_move_apply::forecast_move;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::search::board_scoring::BoardScorer;
use crate::search::minimax::deadline_expired;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub movetime_ms: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 25,
            movetime_ms: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best_move: Option<Square>,
    pub best_score: f64,
    pub reached_depth: u8,
    pub nodes: u64,
    pub elapsed_ms: u64,
}

/// Iterative deepening driven by a config-supplied move time.
pub fn iterative_deepening_search<S: BoardScorer>(
    board: &BoardState,
    generator: &LegalMoveGenerator,
    scorer: &S,
    config: SearchConfig,
) -> MoveResult<SearchResult> {
    let started_at = Instant::now();
    let deadline = config
        .movetime_ms
        .map(|ms| started_at + std::time::Duration::from_millis(ms));
    iterative_deepening_search_until(board, generator, scorer, config.max_depth, deadline)
}

/// Iterative deepening against an absolute deadline.
pub fn iterative_deepening_search_until<S: BoardScorer>(
    board: &BoardState,
    generator: &LegalMoveGenerator,
    scorer: &S,
    max_depth: u8,
    deadline: Option<Instant>,
) -> MoveResult<SearchResult> {
    let started_at = Instant::now();
    let mut result = SearchResult::default();

    for depth in 1..=max_depth {
        if deadline_expired(deadline) {
            break;
        }

        let mut nodes = 0u64;
        let Some((best_move, best_score)) =
            alpha_beta_root(board, generator, scorer, depth, deadline, &mut nodes)?
        else {
            // Interrupted mid-depth: keep the previous completed depth.
            break;
        };

        result.best_move = best_move;
        result.best_score = best_score;
        result.reached_depth = depth;
        result.nodes = nodes;

        // A proven win or loss cannot change at deeper depths.
        if best_score.is_infinite() || best_move.is_none() {
            break;
        }
    }

    result.elapsed_ms = started_at.elapsed().as_millis() as u64;
    Ok(result)
}

/// One full-width alpha-beta search at a fixed depth.
///
/// Returns `Ok(None)` when the deadline expired before the depth completed.
pub fn alpha_beta_root<S: BoardScorer>(
    board: &BoardState,
    generator: &LegalMoveGenerator,
    scorer: &S,
    depth: u8,
    deadline: Option<Instant>,
    nodes: &mut u64,
) -> MoveResult<Option<(Option<Square>, f64)>> {
    let agent = board.active_player;
    let moves = generator.legal_moves_active(board);
    *nodes += 1;

    if moves.is_empty() || depth == 0 {
        return Ok(Some((None, scorer.score(generator, board, agent))));
    }

    let mut alpha = f64::NEG_INFINITY;
    let beta = f64::INFINITY;
    let mut best_move = None;
    let mut best_value = f64::NEG_INFINITY;

    for mv in moves {
        if deadline_expired(deadline) {
            return Ok(None);
        }

        let child = forecast_move(board, generator, mv)?;
        let Some(value) = alpha_beta_value(
            &child,
            generator,
            scorer,
            depth - 1,
            alpha,
            beta,
            agent,
            deadline,
            nodes,
        )?
        else {
            return Ok(None);
        };

        if best_move.is_none() || value > best_value {
            best_value = value;
            best_move = Some(mv);
        }
        if best_value > alpha {
            alpha = best_value;
        }
    }

    Ok(Some((best_move, best_value)))
}

#[allow(clippy::too_many_arguments)]
fn alpha_beta_value<S: BoardScorer>(
    board: &BoardState,
    generator: &LegalMoveGenerator,
    scorer: &S,
    depth: u8,
    mut alpha: f64,
    mut beta: f64,
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
        let Some(value) = alpha_beta_value(
            &child,
            generator,
            scorer,
            depth - 1,
            alpha,
            beta,
            agent,
            deadline,
            nodes,
        )?
        else {
            return Ok(None);
        };

        if maximizing {
            if value > best {
                best = value;
            }
            if best >= beta {
                break;
            }
            if best > alpha {
                alpha = best;
            }
        } else {
            if value < best {
                best = value;
            }
            if best <= alpha {
                break;
            }
            if best < beta {
                beta = best;
            }
        }
    }

    Ok(Some(best))
}
