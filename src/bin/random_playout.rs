//! Plays one seeded random game and prints the final board.
//!
//! Run with:
//! `cargo run --release --bin random_playout`
//! `cargo run --release --bin random_playout -- --seed 42 --plies 200 --verbose`
//!
//! `RUST_LOG` overrides the log filter picked by `--verbose`.

use tracing_subscriber::EnvFilter;

use hex_chess::game_state::config::RulesConfig;
use hex_chess::utils::playout_harness::{run_playout, PlayoutConfig};
use hex_chess::utils::render_game_state::render_game_state;

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Result<Option<T>, String> {
    match args.iter().position(|a| a == flag) {
        None => Ok(None),
        Some(idx) => {
            let raw = args
                .get(idx + 1)
                .ok_or_else(|| format!("{flag} needs a value"))?;
            raw.parse()
                .map(Some)
                .map_err(|_| format!("invalid value for {flag}: {raw}"))
        }
    }
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let defaults = PlayoutConfig::default();
    let config = PlayoutConfig {
        max_plies: parse_flag(&args, "--plies")?.unwrap_or(defaults.max_plies),
        seed: parse_flag(&args, "--seed")?.unwrap_or(defaults.seed),
        rules: if args.iter().any(|a| a == "--geometry-only") {
            RulesConfig::geometry_only()
        } else {
            RulesConfig::default()
        },
    };

    let result = run_playout(&config);

    println!("{}", render_game_state(&result.final_state));
    println!(
        "seed {} plies {} outcome {:?}",
        config.seed,
        result.played_moves.len(),
        result.outcome
    );
    if verbose {
        for (ply, mv) in result.played_moves.iter().enumerate() {
            println!(
                "{:>4}: {} -> ({}, {}) {:?}",
                ply + 1,
                mv.source_tag,
                mv.axial.q,
                mv.axial.r,
                mv.move_type
            );
        }
    }
    Ok(())
}
