//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose`

use knight_isolation::engines::engine_alpha_beta::AlphaBetaEngine;
use knight_isolation::engines::engine_minimax::MinimaxEngine;
use knight_isolation::engines::engine_trait::Engine;
use knight_isolation::search::board_scoring::{ImprovedScorer, OpenMoveScorer};
use knight_isolation::utils::match_harness::{
    play_match_series, MatchConfig, MatchSeriesConfig,
};

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    // Customize these two lines to experiment with different engines/scorers/depths.
    let player1 = || {
        Box::new(AlphaBetaEngine::new_with_scorer(25, ImprovedScorer)) as Box<dyn Engine>
    };
    let player2 = || {
        Box::new(MinimaxEngine::new_with_scorer(3, OpenMoveScorer)) as Box<dyn Engine>
    };

    let stats = play_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games: 10,
            base_seed: 1234,
            per_game: MatchConfig {
                time_limit_ms: Some(150),
                ..MatchConfig::default()
            },
            verbose,
        },
    );

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
}
