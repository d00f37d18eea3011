use chinese_checkers::rules::{legal_paths, HeuristicKind};
use chinese_checkers::{
    search, Board, ComputerPlayer, EngineConfig, Game, ScoringScheme, Side,
};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Positions from a short depth-1 self-play game
fn corpus() -> Vec<Board> {
    let config = EngineConfig { depth: 1, ..EngineConfig::default() };
    let mut game = Game::new(
        ComputerPlayer::new(Side::Player1, config),
        ComputerPlayer::new(Side::Player2, config),
        24,
    );
    let mut boards = vec![game.board().clone()];
    while let Ok(None) = game.play_turn() {
        boards.push(game.board().clone());
    }
    boards
}

fn bench_move_generation(c: &mut Criterion) {
    let boards = corpus();
    c.bench_function("movegen/legal_paths", |b| {
        b.iter(|| {
            let mut total = 0;
            for board in &boards {
                for side in [Side::Player1, Side::Player2] {
                    total += legal_paths(board, side, &HeuristicKind::AcceptAll).len();
                }
            }
            black_box(total)
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let mut boards = corpus();
    let filter = HeuristicKind::Forward;
    for (name, scheme) in [
        ("search/depth2_distance", ScoringScheme::Distance),
        ("search/depth2_positional", ScoringScheme::Positional),
    ] {
        c.bench_function(name, |b| {
            b.iter(|| {
                let mut acc = 0i64;
                for board in boards.iter_mut() {
                    let result = search(board, 2, Side::Player1, &filter, scheme);
                    acc += i64::from(result.score);
                }
                black_box(acc)
            })
        });
    }
}

criterion_group!(benches, bench_move_generation, bench_search);
criterion_main!(benches);
