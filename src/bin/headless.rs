//! Headless simulator: plays games with a random-intent autoplayer and prints a
//! JSON summary on stdout. Logs go to stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

use tick_tetris::core::{Engine, EngineConfig, SimpleRng};
use tick_tetris::types::Intent;

#[derive(Debug, Parser)]
#[command(name = "headless", about = "Run tick-tetris games without a terminal")]
struct Cli {
    #[arg(long, default_value_t = 1, help = "Number of games to play")]
    games: u32,

    #[arg(
        long,
        default_value_t = 12345,
        help = "Seed for the first game; game n uses seed + n"
    )]
    seed: u32,

    #[arg(long, default_value_t = 200_000, help = "Tick cap per game")]
    max_ticks: u64,

    #[arg(long, help = "Path to a JSON engine config")]
    config: Option<PathBuf>,

    #[arg(
        short = 'v',
        long,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE)"
    )]
    verbose: u8,
}

#[derive(Debug, Serialize)]
struct GameSummary {
    game: u32,
    seed: u32,
    score: u32,
    level: u32,
    lines: u32,
    pieces: u32,
    ticks: u64,
    /// `gameOver`, or `falling` when the tick cap stopped the game
    phase: &'static str,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    config: EngineConfig,
    games: Vec<GameSummary>,
    best_score: u32,
    mean_score: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let mut games = Vec::with_capacity(cli.games as usize);
    for game in 0..cli.games {
        let seed = cli.seed.wrapping_add(game);
        let summary = play(game, seed, config, cli.max_ticks)?;
        info!(
            game,
            seed,
            score = summary.score,
            lines = summary.lines,
            ticks = summary.ticks,
            "game finished"
        );
        games.push(summary);
    }

    let best_score = games.iter().map(|g| g.score).max().unwrap_or(0);
    let mean_score = if games.is_empty() {
        0.0
    } else {
        games.iter().map(|g| g.score as f64).sum::<f64>() / games.len() as f64
    };

    let summary = RunSummary {
        config,
        games,
        best_score,
        mean_score,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn play(game: u32, seed: u32, config: EngineConfig, max_ticks: u64) -> Result<GameSummary> {
    let mut engine = Engine::with_config(config, seed)?;
    // Separate stream so the autoplayer never perturbs the piece sequence.
    let mut player = SimpleRng::new(seed ^ 0x9e37_79b9);

    while !engine.is_game_over() && engine.state().ticks < max_ticks {
        engine.tick(pick_intent(&mut player));
    }

    let state = engine.state();
    Ok(GameSummary {
        game,
        seed,
        score: state.score,
        level: state.level,
        lines: state.lines,
        pieces: state.pieces,
        ticks: state.ticks,
        phase: engine.phase().as_str(),
    })
}

/// Mostly idle, like a human between key presses.
fn pick_intent(rng: &mut SimpleRng) -> Intent {
    match rng.next_range(16) {
        0 => Intent::ShiftLeft,
        1 => Intent::ShiftRight,
        2 => Intent::RotateCcw,
        3 | 4 => Intent::SoftDrop,
        _ => Intent::None,
    }
}
