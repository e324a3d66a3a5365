//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! integration testing, and baseline comparison series.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, TurnClock};
use crate::game_state::board_state::BoardState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible tests and series.
    pub fn new_seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Isolation Random"
    }

    fn choose_move(
        &mut self,
        board: &BoardState,
        _clock: &TurnClock,
    ) -> Result<EngineOutput, String> {
        let generator = LegalMoveGenerator::for_board(board);
        let legal_moves = generator.legal_moves_active(board);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if legal_moves.is_empty() {
            out.best_move = None;
            return Ok(out);
        }

        let picked = legal_moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or("failed to choose a random move")?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::apply_move;

    #[test]
    fn chosen_move_is_always_legal() {
        let mut board = BoardState::new_default();
        let generator = LegalMoveGenerator::for_board(&board);
        let mut engine = RandomEngine::new_seeded(7);
        let clock = TurnClock::start(None);

        for _ in 0..12 {
            let legal = generator.legal_moves_active(&board);
            if legal.is_empty() {
                break;
            }
            let out = engine.choose_move(&board, &clock).unwrap();
            let mv = out.best_move.unwrap();
            assert!(legal.contains(&mv));
            apply_move(&mut board, &generator, mv).unwrap();
        }
    }

    #[test]
    fn seeded_engines_replay_identically() {
        let board = BoardState::new_default();
        let clock = TurnClock::start(None);
        let mut first = RandomEngine::new_seeded(99);
        let mut second = RandomEngine::new_seeded(99);
        for _ in 0..5 {
            let a = first.choose_move(&board, &clock).unwrap().best_move;
            let b = second.choose_move(&board, &clock).unwrap().best_move;
            assert_eq!(a, b);
        }
    }
}
