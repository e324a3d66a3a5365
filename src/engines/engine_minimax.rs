//! Fixed-depth minimax engine.
//!
//! Runs one depth-limited search per turn, polling the turn clock so an
//! overrunning search degrades to the best fully evaluated move instead of
//! forfeiting on time.

use crate::engines::engine_trait::{Engine, EngineOutput, TurnClock};
use crate::game_state::board_state::BoardState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::search::board_scoring::{BoardScorer, ImprovedScorer};
use crate::search::minimax::minimax_root;

/// Safety margin subtracted from the turn budget so the search returns
/// before the harness clock runs out.
pub const DEFAULT_MARGIN_MS: u64 = 10;

pub struct MinimaxEngine<S: BoardScorer = ImprovedScorer> {
    search_depth: u8,
    margin_ms: u64,
    scorer: S,
}

impl MinimaxEngine<ImprovedScorer> {
    pub fn new(search_depth: u8) -> Self {
        Self::new_with_scorer(search_depth, ImprovedScorer)
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn new_with_scorer(search_depth: u8, scorer: S) -> Self {
        Self {
            search_depth,
            margin_ms: DEFAULT_MARGIN_MS,
            scorer,
        }
    }

    pub fn set_margin_ms(&mut self, margin_ms: u64) {
        self.margin_ms = margin_ms;
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "Isolation Minimax"
    }

    fn choose_move(
        &mut self,
        board: &BoardState,
        clock: &TurnClock,
    ) -> Result<EngineOutput, String> {
        let generator = LegalMoveGenerator::for_board(board);
        let deadline = clock.deadline_with_margin(self.margin_ms);

        let outcome = minimax_root(board, &generator, &self.scorer, self.search_depth, deadline)
            .map_err(|e| e.to_string())?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string minimax_engine depth {} score {} nodes {}{}",
            self.search_depth,
            outcome.value,
            outcome.nodes,
            if outcome.aborted { " aborted" } else { "" }
        ));
        out.best_move = outcome.best_move;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::apply_move;

    #[test]
    fn returns_a_legal_move_under_no_time_pressure() {
        let mut board = BoardState::new_default();
        let generator = LegalMoveGenerator::for_board(&board);
        let p1 = board.square_at(2, 3).unwrap();
        let p2 = board.square_at(0, 5).unwrap();
        apply_move(&mut board, &generator, p1).unwrap();
        apply_move(&mut board, &generator, p2).unwrap();

        let mut engine = MinimaxEngine::new(3);
        let clock = TurnClock::start(None);
        let out = engine.choose_move(&board, &clock).unwrap();
        let mv = out.best_move.unwrap();
        assert!(generator.legal_moves_active(&board).contains(&mv));
    }

    #[test]
    fn reports_no_move_when_stuck() {
        let mut board = BoardState::new(2, 1).unwrap();
        let generator = LegalMoveGenerator::for_board(&board);
        apply_move(&mut board, &generator, 0).unwrap();
        apply_move(&mut board, &generator, 1).unwrap();

        let mut engine = MinimaxEngine::new(3);
        let clock = TurnClock::start(None);
        let out = engine.choose_move(&board, &clock).unwrap();
        assert_eq!(out.best_move, None);
    }
}
