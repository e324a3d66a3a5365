//! Iterative deepening alpha-beta engine.
//!
//! Spends the turn budget by re-searching at increasing depth, keeping the
//! best move of the deepest completed depth. The clock is polled inside the
//! search at every node, so a single deep iteration cannot overrun the turn.

use crate::engines::engine_minimax::DEFAULT_MARGIN_MS;
use crate::engines::engine_trait::{Engine, EngineOutput, TurnClock};
use crate::game_state::board_state::BoardState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::search::alpha_beta::iterative_deepening_search_until;
use crate::search::board_scoring::{BoardScorer, ImprovedScorer};

pub struct AlphaBetaEngine<S: BoardScorer = ImprovedScorer> {
    max_depth: u8,
    margin_ms: u64,
    scorer: S,
}

impl AlphaBetaEngine<ImprovedScorer> {
    pub fn new(max_depth: u8) -> Self {
        Self::new_with_scorer(max_depth, ImprovedScorer)
    }
}

impl<S: BoardScorer> AlphaBetaEngine<S> {
    pub fn new_with_scorer(max_depth: u8, scorer: S) -> Self {
        Self {
            max_depth,
            margin_ms: DEFAULT_MARGIN_MS,
            scorer,
        }
    }

    pub fn set_margin_ms(&mut self, margin_ms: u64) {
        self.margin_ms = margin_ms;
    }
}

impl<S: BoardScorer> Engine for AlphaBetaEngine<S> {
    fn name(&self) -> &str {
        "Isolation AlphaBeta"
    }

    fn choose_move(
        &mut self,
        board: &BoardState,
        clock: &TurnClock,
    ) -> Result<EngineOutput, String> {
        let generator = LegalMoveGenerator::for_board(board);
        let deadline = clock.deadline_with_margin(self.margin_ms);

        let result = iterative_deepening_search_until(
            board,
            &generator,
            &self.scorer,
            self.max_depth,
            deadline,
        )
        .map_err(|e| e.to_string())?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string alpha_beta_engine depth {} score {} nodes {} time {}",
            result.reached_depth, result.best_score, result.nodes, result.elapsed_ms
        ));
        out.best_move = result.best_move;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::apply_move;

    fn midgame_board() -> (BoardState, LegalMoveGenerator) {
        let mut board = BoardState::new_default();
        let generator = LegalMoveGenerator::for_board(&board);
        let p1 = board.square_at(2, 3).unwrap();
        let p2 = board.square_at(0, 5).unwrap();
        apply_move(&mut board, &generator, p1).unwrap();
        apply_move(&mut board, &generator, p2).unwrap();
        (board, generator)
    }

    #[test]
    fn returns_a_legal_move_within_budget() {
        let (board, generator) = midgame_board();
        let mut engine = AlphaBetaEngine::new(6);
        engine.set_margin_ms(20);
        let clock = TurnClock::start(Some(150));
        let out = engine.choose_move(&board, &clock).unwrap();
        assert!(!clock.expired());
        let mv = out.best_move.unwrap();
        assert!(generator.legal_moves_active(&board).contains(&mv));
    }

    #[test]
    fn identical_engines_choose_identically_without_time_pressure() {
        let (board, _) = midgame_board();
        let clock = TurnClock::start(None);
        let mut first = AlphaBetaEngine::new(4);
        let mut second = AlphaBetaEngine::new(4);
        assert_eq!(
            first.choose_move(&board, &clock).unwrap().best_move,
            second.choose_move(&board, &clock).unwrap().best_move
        );
    }
}
