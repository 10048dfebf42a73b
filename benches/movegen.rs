use criterion::{black_box, criterion_group, criterion_main, Criterion};
use heimlich::actions::{weak_compositions, AgentMoveAction};
use heimlich::board::{Board, DieFace};
use heimlich::core::{GameConfig, GameRng};
use heimlich::game::HeimlichGame;

fn movegen_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");
    group.sample_size(100);

    group.bench_function("compositions_6_over_7", |b| {
        b.iter(|| weak_compositions(black_box(6), black_box(7)))
    });

    let mut board = Board::new(7).expect("board");
    board.set_last_die_roll(Some(DieFace::Steps(6)));
    group.bench_function("agent_moves_six", |b| {
        b.iter(|| AgentMoveAction::possible_actions(black_box(&board), true))
    });

    board.set_last_die_roll(Some(DieFace::OneToThree));
    group.bench_function("agent_moves_one_to_three", |b| {
        b.iter(|| AgentMoveAction::possible_actions(black_box(&board), true))
    });

    group.finish();
}

fn playout_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("playout");
    group.sample_size(20);

    group.bench_function("random_4p_cards", |b| {
        let start = HeimlichGame::from_config(GameConfig::new(4).with_cards(true)).expect("game");
        let mut rng = GameRng::new(7);
        b.iter(|| {
            let mut game = start.clone();
            for _ in 0..500 {
                if game.is_game_over() {
                    break;
                }
                let actions = game.possible_actions();
                let action = rng.choose(&actions).expect("legal action").clone();
                game.apply_action(&action).expect("apply");
            }
            game
        })
    });

    group.finish();
}

criterion_group!(benches, movegen_benchmarks, playout_benchmarks);
criterion_main!(benches);
