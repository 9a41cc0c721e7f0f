use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use casual_chess::game_state::position::Position;
use casual_chess::move_generation::legal_move_generator::LegalMoveGenerator;
use casual_chess::search::alpha_beta::{search_best_move, SearchConfig};
use casual_chess::search::board_scoring::PieceSquareScorer;

const CASES: &[(&str, &str)] = &[
    (
        "startpos",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "italian",
        "r1bqk1nr/pppp1ppp/2n5/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 0 1",
    ),
    (
        "kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
];

fn bench_search(c: &mut Criterion) {
    let generator = LegalMoveGenerator;
    let scorer = PieceSquareScorer;

    let mut group = c.benchmark_group("alpha_beta");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    for (name, fen) in CASES {
        let position = Position::from_fen(fen).expect("benchmark FEN should parse");
        for depth in [2u8, 3] {
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{name}_d{depth}")),
                &depth,
                |b, &depth| {
                    b.iter(|| {
                        let mut scratch = position.clone();
                        let mut rng = StdRng::seed_from_u64(7);
                        let side = scratch.side_to_move;
                        let result = search_best_move(
                            &mut scratch,
                            side,
                            &generator,
                            &scorer,
                            SearchConfig { depth },
                            &mut rng,
                        );
                        black_box(result.best_move)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
