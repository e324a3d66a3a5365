//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search remains modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.
//!
//! Contract: a scorer must return `f64::NEG_INFINITY` when `player` has
//! already lost in the given state, `f64::INFINITY` when it has already won,
//! and a finite value otherwise.

use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::Player;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;

pub trait BoardScorer: Send + Sync {
    /// Score `board` from the perspective of `player`.
    fn score(&self, generator: &LegalMoveGenerator, board: &BoardState, player: Player) -> f64;
}

/// Returns the terminal value when the game is decided, `None` otherwise.
#[inline]
fn terminal_value(
    generator: &LegalMoveGenerator,
    board: &BoardState,
    player: Player,
) -> Option<f64> {
    if generator.is_loser(board, player) {
        return Some(f64::NEG_INFINITY);
    }
    if generator.is_winner(board, player) {
        return Some(f64::INFINITY);
    }
    None
}

/// Uninformative baseline: zero for every non-terminal state.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullScorer;

impl BoardScorer for NullScorer {
    fn score(&self, generator: &LegalMoveGenerator, board: &BoardState, player: Player) -> f64 {
        terminal_value(generator, board, player).unwrap_or(0.0)
    }
}

/// Own mobility: the number of moves open to `player`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenMoveScorer;

impl BoardScorer for OpenMoveScorer {
    fn score(&self, generator: &LegalMoveGenerator, board: &BoardState, player: Player) -> f64 {
        terminal_value(generator, board, player).unwrap_or_else(|| {
            f64::from(generator.legal_move_mask(board, player).count_ones())
        })
    }
}

/// Mobility differential: own move count minus the opponent's.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImprovedScorer;

impl BoardScorer for ImprovedScorer {
    fn score(&self, generator: &LegalMoveGenerator, board: &BoardState, player: Player) -> f64 {
        terminal_value(generator, board, player).unwrap_or_else(|| {
            let own = generator.legal_move_mask(board, player).count_ones();
            let opp = generator
                .legal_move_mask(board, player.opponent())
                .count_ones();
            f64::from(own) - f64::from(opp)
        })
    }
}

/// Squared distance of `player` from the far board corner; zero before
/// placement.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterScorer;

impl BoardScorer for CenterScorer {
    fn score(&self, generator: &LegalMoveGenerator, board: &BoardState, player: Player) -> f64 {
        if let Some(value) = terminal_value(generator, board, player) {
            return value;
        }
        let Some(square) = board.location(player) else {
            return 0.0;
        };
        let dy = f64::from(board.height) - f64::from(board.row_of(square));
        let dx = f64::from(board.width) - f64::from(board.col_of(square));
        dy * dy + dx * dx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::apply_move;

    fn stuck_board() -> (BoardState, LegalMoveGenerator) {
        let mut board = BoardState::new(2, 1).unwrap();
        let generator = LegalMoveGenerator::for_board(&board);
        apply_move(&mut board, &generator, 0).unwrap();
        apply_move(&mut board, &generator, 1).unwrap();
        (board, generator)
    }

    #[test]
    fn lost_states_score_negative_infinity() {
        let (board, generator) = stuck_board();
        for scorer in [
            &NullScorer as &dyn BoardScorer,
            &OpenMoveScorer,
            &ImprovedScorer,
            &CenterScorer,
        ] {
            assert_eq!(
                scorer.score(&generator, &board, Player::One),
                f64::NEG_INFINITY
            );
            assert_eq!(scorer.score(&generator, &board, Player::Two), f64::INFINITY);
        }
    }

    #[test]
    fn open_move_scorer_counts_mobility() {
        let mut board = BoardState::new_default();
        let generator = LegalMoveGenerator::for_board(&board);
        let p1 = board.square_at(2, 3).unwrap();
        let p2 = board.square_at(0, 5).unwrap();
        apply_move(&mut board, &generator, p1).unwrap();
        apply_move(&mut board, &generator, p2).unwrap();

        assert_eq!(OpenMoveScorer.score(&generator, &board, Player::One), 8.0);
    }

    #[test]
    fn improved_scorer_is_antisymmetric_in_mobility() {
        let mut board = BoardState::new_default();
        let generator = LegalMoveGenerator::for_board(&board);
        let p1 = board.square_at(2, 3).unwrap();
        let p2 = board.square_at(0, 0).unwrap();
        apply_move(&mut board, &generator, p1).unwrap();
        apply_move(&mut board, &generator, p2).unwrap();

        let one = ImprovedScorer.score(&generator, &board, Player::One);
        let two = ImprovedScorer.score(&generator, &board, Player::Two);
        assert_eq!(one, -two);
        // (2, 3) has eight exits, the (0, 0) corner only two.
        assert_eq!(one, 6.0);
    }

    #[test]
    fn center_scorer_uses_squared_distance() {
        let mut board = BoardState::new_default();
        let generator = LegalMoveGenerator::for_board(&board);
        let p1 = board.square_at(3, 3).unwrap();
        apply_move(&mut board, &generator, p1).unwrap();

        let expected = (7.0 - 3.0) * (7.0 - 3.0) + (7.0 - 3.0) * (7.0 - 3.0);
        assert_eq!(CenterScorer.score(&generator, &board, Player::One), expected);
        // Player two is unplaced and scores the neutral value.
        assert_eq!(CenterScorer.score(&generator, &board, Player::Two), 0.0);
    }
}
