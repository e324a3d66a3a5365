use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use knight_isolation::game_state::board_state::BoardState;
use knight_isolation::move_generation::knight_moves::KnightAttackTable;
use knight_isolation::move_generation::legal_move_apply::{apply_move, forecast_move};
use knight_isolation::move_generation::legal_move_generator::LegalMoveGenerator;

/// Mid-game position reached by a fixed opening sequence.
fn midgame_board() -> (BoardState, LegalMoveGenerator) {
    let mut board = BoardState::new_default();
    let generator = LegalMoveGenerator::for_board(&board);
    for &(row, col) in &[(2, 3), (0, 5), (4, 4), (1, 3), (3, 2), (2, 1)] {
        let sq = board.square_at(row, col).expect("placement in bounds");
        apply_move(&mut board, &generator, sq).expect("scripted move is legal");
    }
    (board, generator)
}

fn bench_attack_table_build(c: &mut Criterion) {
    c.bench_function("attack_table_build_7x7", |b| {
        b.iter(|| KnightAttackTable::new(black_box(7), black_box(7)))
    });
}

fn bench_legal_moves(c: &mut Criterion) {
    let (board, generator) = midgame_board();

    let mut group = c.benchmark_group("legal_moves");
    group.throughput(Throughput::Elements(1));
    group.bench_function("midgame", |b| {
        b.iter(|| generator.legal_moves_active(black_box(&board)))
    });
    group.finish();
}

fn bench_forecast(c: &mut Criterion) {
    let (board, generator) = midgame_board();
    let mv = generator.legal_moves_active(&board)[0];

    c.bench_function("forecast_move", |b| {
        b.iter(|| forecast_move(black_box(&board), &generator, black_box(mv)))
    });
}

criterion_group!(
    benches,
    bench_attack_table_build,
    bench_legal_moves,
    bench_forecast
);
criterion_main!(benches);
