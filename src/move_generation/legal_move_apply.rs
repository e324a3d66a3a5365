//! Move application and forecasting.
//!
//! `apply_move` advances a board in place; `forecast_move` produces the
//! successor on an independent copy so search can explore without touching
//! the live game. Both validate against the current legal-move set.
//!
//! A placement (the mover's first move) blocks its destination like any
//! other move but does not count toward `move_count`, so the blocked-bit
//! count always equals `move_count` plus the number of placed players.

use crate::errors::{IsolationError, MoveResult};
use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::Square;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;

/// Apply `mv` for the active player, mutating `board`.
pub fn apply_move(
    board: &mut BoardState,
    generator: &LegalMoveGenerator,
    mv: Square,
) -> MoveResult<()> {
    if mv >= board.cell_count() {
        return Err(IsolationError::OutOfBounds);
    }

    let mover = board.active_player;
    if generator.legal_move_mask(board, mover) & (1u64 << mv) == 0 {
        return Err(IsolationError::IllegalMove {
            player: mover,
            attempted: mv,
        });
    }

    let was_placed = board.locations[mover.index()].is_some();
    board.blocked |= 1u64 << mv;
    board.locations[mover.index()] = Some(mv);
    board.active_player = mover.opponent();
    if was_placed {
        board.move_count += 1;
    }

    Ok(())
}

/// Successor of `board` after `mv`, leaving `board` untouched.
pub fn forecast_move(
    board: &BoardState,
    generator: &LegalMoveGenerator,
    mv: Square,
) -> MoveResult<BoardState> {
    let mut next = board.clone();
    apply_move(&mut next, generator, mv)?;
    Ok(next)
}
