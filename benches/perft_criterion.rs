use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use slate_chess::game_state::board::Board;
use slate_chess::game_state::chess_types::Color;
use slate_chess::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const CASES_QUICK: &[BenchCase] = &[BenchCase {
    name: "startpos",
    fen: STARTPOS_FEN,
    expected_nodes: &[20, 400, 8902],
}];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTPOS_FEN,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "open_center",
        fen: "r1bqkbnr/ppp2ppp/2n5/3pp3/4P3/5N2/PPPP1PPP/RNBQKB1R",
        expected_nodes: &[],
    },
];

fn selected_cases() -> (&'static str, &'static [BenchCase]) {
    match std::env::var("SLATE_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => ("standard", CASES_STANDARD),
        _ => ("quick", CASES_QUICK),
    }
}

fn bench_perft(c: &mut Criterion) {
    let (suite_name, cases) = selected_cases();

    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in cases {
        let board = Board::from_fen(case.fen).expect("benchmark FEN should parse");
        let depths = if case.expected_nodes.is_empty() { 3 } else { case.expected_nodes.len() };

        for depth_idx in 0..depths {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let nodes = perft(&board, Color::White, depth);
            if let Some(expected) = case.expected_nodes.get(depth_idx) {
                assert_eq!(nodes, *expected, "node mismatch for {} depth {}", case.name, depth);
            }

            group.throughput(Throughput::Elements(nodes));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                &depth,
                |b, &depth| b.iter(|| black_box(perft(black_box(&board), Color::White, depth))),
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
