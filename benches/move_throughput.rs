use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spider_engine::{GameRng, GameState, Intent, SpiderConfig, SuitCount};

/// Fresh game for the given suit count
fn fresh_game(suits: SuitCount, seed: u64) -> GameState {
    let config = SpiderConfig::new().with_suits(suits);
    GameState::new(config, &mut GameRng::new(seed)).unwrap()
}

/// Play the first legal move (or deal) up to `steps` times
fn play_greedy(game: &mut GameState, steps: usize) {
    for _ in 0..steps {
        let intent = match game.legal_moves().first() {
            Some(&intent) => intent,
            None if game.can_deal_row() => Intent::Deal,
            None => break,
        };
        game.apply(intent);
    }
}

/// Shuffle and deal a new game
fn bench_new_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("new_game");

    for suits in [SuitCount::One, SuitCount::Two, SuitCount::Four] {
        group.bench_with_input(BenchmarkId::from_parameter(suits.count()), &suits, |b, &suits| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(fresh_game(suits, seed))
            });
        });
    }

    group.finish();
}

/// Enumerate legal moves on a mid-game position
fn bench_legal_moves(c: &mut Criterion) {
    let mut game = fresh_game(SuitCount::Four, 17);
    play_greedy(&mut game, 40);

    c.bench_function("legal_moves", |b| {
        b.iter(|| black_box(game.legal_moves()));
    });
}

/// Deal a row then undo it
fn bench_deal_undo(c: &mut Criterion) {
    let mut game = fresh_game(SuitCount::Two, 3);

    c.bench_function("deal_then_undo", |b| {
        b.iter(|| {
            game.deal_row();
            game.undo();
        });
    });
}

/// Greedy play of 100 actions, then unwinding the whole log
fn bench_play_and_unwind(c: &mut Criterion) {
    c.bench_function("play_100_and_unwind", |b| {
        b.iter(|| {
            let mut game = fresh_game(SuitCount::One, 9);
            play_greedy(&mut game, 100);
            while game.undo() {}
            black_box(game)
        });
    });
}

criterion_group!(
    benches,
    bench_new_game,
    bench_legal_moves,
    bench_deal_undo,
    bench_play_and_unwind
);
criterion_main!(benches);
