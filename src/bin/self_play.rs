//! Random (white) versus minimax (black) self-play runner.
//!
//! Usage:
//! `cargo run --release --bin self_play`
//! `cargo run --release --bin self_play -- --depth 3 --seed 7 --plies 80 --verbose`
//!
//! Set `RUST_LOG=debug` to see every ply.

use slate_chess::engines::engine_minimax::MinimaxEngine;
use slate_chess::engines::engine_random::RandomEngine;
use slate_chess::search::minimax::SearchConfig;
use slate_chess::utils::engine_match_harness::{play_engine_match, MatchConfig};

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str) -> Result<Option<T>, String> {
    match args.iter().position(|a| a == flag) {
        None => Ok(None),
        Some(i) => {
            let raw = args
                .get(i + 1)
                .ok_or_else(|| format!("{flag} expects a value"))?;
            raw.parse::<T>()
                .map(Some)
                .map_err(|_| format!("invalid {flag} value '{raw}'"))
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let depth = parse_arg::<u8>(&args, "--depth")?.unwrap_or(3).max(1);
    let plies = parse_arg::<u16>(&args, "--plies")?.unwrap_or(60);
    let seed = parse_arg::<u64>(&args, "--seed")?;

    let config = SearchConfig::with_depth(depth);
    let (mut white, mut black) = match seed {
        Some(seed) => (
            RandomEngine::with_seed(seed),
            MinimaxEngine::with_seed(config, seed),
        ),
        None => (RandomEngine::new(), MinimaxEngine::new(config)),
    };

    let record = play_engine_match(&mut white, &mut black, MatchConfig { max_plies: plies })?;

    if verbose {
        println!("{}", record.report());
    } else {
        println!("outcome: {:?} after {} plies", record.outcome, record.moves.len());
    }
    println!("{}", record.final_board);
    Ok(())
}
