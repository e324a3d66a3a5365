//! Greedy one-ply engine.
//!
//! Scores every forecast successor with its scorer and takes the best,
//! equivalent to a minimax agent at depth one. Ties break toward the lowest
//! destination square so results stay deterministic.

use crate::engines::engine_trait::{Engine, EngineOutput, TurnClock};
use crate::game_state::board_state::BoardState;
use crate::move_generation::legal_move_apply::forecast_move;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::search::board_scoring::{BoardScorer, OpenMoveScorer};

pub struct GreedyEngine<S: BoardScorer = OpenMoveScorer> {
    scorer: S,
}

impl GreedyEngine<OpenMoveScorer> {
    pub fn new() -> Self {
        Self {
            scorer: OpenMoveScorer,
        }
    }
}

impl Default for GreedyEngine<OpenMoveScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BoardScorer> GreedyEngine<S> {
    pub fn new_with_scorer(scorer: S) -> Self {
        Self { scorer }
    }
}

impl<S: BoardScorer> Engine for GreedyEngine<S> {
    fn name(&self) -> &str {
        "Isolation Greedy"
    }

    fn choose_move(
        &mut self,
        board: &BoardState,
        _clock: &TurnClock,
    ) -> Result<EngineOutput, String> {
        let generator = LegalMoveGenerator::for_board(board);
        let mover = board.active_player;
        let legal_moves = generator.legal_moves_active(board);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string greedy_engine legal_moves {}",
            legal_moves.len()
        ));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let mut best_value = f64::NEG_INFINITY;
        let mut best_move = None;

        for mv in legal_moves {
            let child = forecast_move(board, &generator, mv).map_err(|e| e.to_string())?;
            let value = self.scorer.score(&generator, &child, mover);
            if best_move.is_none() || value > best_value {
                best_value = value;
                best_move = Some(mv);
            }
        }

        out.info_lines
            .push(format!("info string greedy_engine best_score {}", best_value));
        out.best_move = best_move;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_types::Player;
    use crate::move_generation::legal_move_apply::apply_move;

    #[test]
    fn greedy_maximizes_post_move_mobility() {
        let mut board = BoardState::new_default();
        let generator = LegalMoveGenerator::for_board(&board);
        let p1 = board.square_at(2, 3).unwrap();
        let p2 = board.square_at(0, 5).unwrap();
        apply_move(&mut board, &generator, p1).unwrap();
        apply_move(&mut board, &generator, p2).unwrap();

        let mut engine = GreedyEngine::new();
        let clock = TurnClock::start(None);
        let chosen = engine.choose_move(&board, &clock).unwrap().best_move.unwrap();

        let best = generator
            .legal_moves_active(&board)
            .into_iter()
            .map(|mv| {
                let child = forecast_move(&board, &generator, mv).unwrap();
                generator.legal_move_mask(&child, Player::One).count_ones()
            })
            .max()
            .unwrap();
        let chosen_child = forecast_move(&board, &generator, chosen).unwrap();
        assert_eq!(
            generator
                .legal_move_mask(&chosen_child, Player::One)
                .count_ones(),
            best
        );
    }

    #[test]
    fn greedy_is_deterministic() {
        let mut board = BoardState::new_default();
        let generator = LegalMoveGenerator::for_board(&board);
        let p1 = board.square_at(3, 3).unwrap();
        let p2 = board.square_at(6, 6).unwrap();
        apply_move(&mut board, &generator, p1).unwrap();
        apply_move(&mut board, &generator, p2).unwrap();

        let clock = TurnClock::start(None);
        let mut engine = GreedyEngine::new();
        let first = engine.choose_move(&board, &clock).unwrap().best_move;
        let second = engine.choose_move(&board, &clock).unwrap().best_move;
        assert_eq!(first, second);
        assert!(first.is_some());
    }
}
