//! Head-to-head engine match harness.
//!
//! Runs two `Engine` implementations against each other from the empty
//! board, enforcing per-turn time budgets and move legality. Every game
//! ends in one of three ways: the mover has no legal moves at the start of
//! its turn (`Forfeit`, the engine is never invoked), the engine returns
//! after its clock ran out (`Timeout`), or the engine returns something
//! outside the legal-move set (`IllegalMove`). No error escapes the play
//! loop; misbehavior is resolved into a loss for the offending side.

use std::fmt;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::{Engine, TurnClock};
use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{Player, Square};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::utils::game_record::GameRecord;

/// How the losing side lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The loser had no legal moves on its turn.
    Forfeit,
    /// The loser's engine returned after its clock expired.
    Timeout,
    /// The loser's engine returned a move outside the legal set (or erred).
    IllegalMove,
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOutcome::Forfeit => write!(f, "forfeit"),
            MatchOutcome::Timeout => write!(f, "timeout"),
            MatchOutcome::IllegalMove => write!(f, "illegal move"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub width: u8,
    pub height: u8,
    /// Per-turn budget in milliseconds; `None` disables the clock entirely
    /// (interactive play).
    pub time_limit_ms: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            width: 7,
            height: 7,
            time_limit_ms: Some(150),
        }
    }
}

#[derive(Debug)]
pub struct MatchResult {
    pub winner: Player,
    pub outcome: MatchOutcome,
    pub move_history: Vec<Square>,
    pub final_state: BoardState,
    pub record: GameRecord,
    pub move_counts: [u32; 2],
    pub think_time_ns: [u128; 2],
}

/// Play a single game; `engine_one` moves first.
pub fn play_match(
    engine_one: &mut dyn Engine,
    engine_two: &mut dyn Engine,
    config: &MatchConfig,
) -> MatchResult {
    engine_one.new_game();
    engine_two.new_game();

    let mut board = BoardState::new(config.width, config.height)
        .unwrap_or_else(|_| BoardState::new_default());
    let generator = LegalMoveGenerator::for_board(&board);
    let mut record = GameRecord::new(&board);
    let mut move_history = Vec::new();
    let mut move_counts = [0u32; 2];
    let mut think_time_ns = [0u128; 2];

    let (winner, outcome) = loop {
        let mover = board.active_player;
        let legal_moves = generator.legal_moves(&board, mover);

        if legal_moves.is_empty() {
            break (mover.opponent(), MatchOutcome::Forfeit);
        }

        let engine: &mut dyn Engine = match mover {
            Player::One => &mut *engine_one,
            Player::Two => &mut *engine_two,
        };

        let clock = TurnClock::start(config.time_limit_ms);
        let started = Instant::now();
        let output = engine.choose_move(&board, &clock);
        let expired = clock.expired();

        move_counts[mover.index()] += 1;
        think_time_ns[mover.index()] += started.elapsed().as_nanos();

        if expired {
            break (mover.opponent(), MatchOutcome::Timeout);
        }

        let chosen = output.ok().and_then(|out| out.best_move);
        let Some(mv) = chosen.filter(|mv| legal_moves.contains(mv)) else {
            break (mover.opponent(), MatchOutcome::IllegalMove);
        };

        // Validated above; application cannot fail.
        if apply_move(&mut board, &generator, mv).is_err() {
            break (mover.opponent(), MatchOutcome::IllegalMove);
        }

        move_history.push(mv);
        record.push(&board);
    };

    record.set_winner(winner);
    MatchResult {
        winner,
        outcome,
        move_history,
        final_state: board,
        record,
        move_counts,
        think_time_ns,
    }
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub outcomes: Vec<MatchOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms
        )
    }
}

/// Play a series of games and aggregate win/time statistics.
///
/// Which contestant moves first alternates deterministically from
/// `base_seed`, so a series is reproducible.
pub fn play_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> MatchSeriesStats
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut order_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);
    let mut total_time_ns = [0u128; 2];

    for i in 0..config.games {
        let player1_starts = order_rng.random_bool(0.5);
        if config.verbose {
            println!(
                "[series] game {}/{} first_to_move={}",
                i + 1,
                config.games,
                if player1_starts { "player1" } else { "player2" }
            );
        }

        let mut one = player1_factory();
        let mut two = player2_factory();
        let result = if player1_starts {
            play_match(one.as_mut(), two.as_mut(), &config.per_game)
        } else {
            play_match(two.as_mut(), one.as_mut(), &config.per_game)
        };

        // Map seat-relative results back to the contestants.
        let player1_seat = if player1_starts {
            Player::One
        } else {
            Player::Two
        };
        if result.winner == player1_seat {
            stats.player1_wins += 1;
        } else {
            stats.player2_wins += 1;
        }
        stats.player1_moves += result.move_counts[player1_seat.index()];
        stats.player2_moves += result.move_counts[player1_seat.opponent().index()];
        total_time_ns[0] += result.think_time_ns[player1_seat.index()];
        total_time_ns[1] += result.think_time_ns[player1_seat.opponent().index()];
        stats.outcomes.push(result.outcome);

        if config.verbose {
            println!(
                "[series] game {} winner={} outcome={}",
                i + 1,
                if result.winner == player1_seat {
                    "player1"
                } else {
                    "player2"
                },
                result.outcome
            );
        }
    }

    stats.player1_avg_move_time_ms = avg_ms(total_time_ns[0], stats.player1_moves);
    stats.player2_avg_move_time_ms = avg_ms(total_time_ns[1], stats.player2_moves);
    stats
}

fn avg_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        total_ns as f64 / f64::from(moves) / 1_000_000.0
    }
}
