//! sos-engine: play, watch or replay games of SOS from the terminal.
//!
//! ## Usage
//!
//! - `sos-engine play` - Run the text protocol on stdin/stdout
//! - `sos-engine demo` - Watch two computer players (the default)
//! - `sos-engine replay <file>` - Replay a recorded game log

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sos_engine::board::{Board, GameMode};
use sos_engine::constants::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE, is_valid_size};
use sos_engine::player::{ControlMode, PlayerId};
use sos_engine::protocol::SosEngine;
use sos_engine::random::FastRandSource;
use sos_engine::recorder::GameLog;
use sos_engine::replay::Replay;

/// sos-engine: the SOS grid game
#[derive(Parser)]
#[command(name = "sos-engine")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the text command protocol on stdin/stdout
    Play {
        /// Board size
        #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,

        /// Write the game log here when the session ends
        #[arg(short, long)]
        record: Option<PathBuf>,
    },
    /// Play a computer-vs-computer game and print it
    Demo {
        /// Board size
        #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,

        /// Scoring mode
        #[arg(short, long, value_enum, default_value = "general")]
        mode: ModeArg,

        /// Seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Replay a recorded game log and show the result
    Replay {
        /// Path to a `.sos` game log
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Simple,
    General,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Simple => GameMode::Simple,
            ModeArg::General => GameMode::General,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout belongs to the protocol.
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Play { size, record }) => run_play(size, record),
        Some(Commands::Demo { size, mode, seed }) => run_demo(size, mode.into(), seed),
        Some(Commands::Replay { file }) => run_replay(file),
        None => run_demo(DEFAULT_BOARD_SIZE, GameMode::General, None),
    }
}

fn check_size(size: usize) -> Result<()> {
    if !is_valid_size(size) {
        bail!("board size {size} must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE}");
    }
    Ok(())
}

fn run_play(size: usize, record: Option<PathBuf>) -> Result<()> {
    check_size(size)?;
    let mut engine = SosEngine::new(size);
    engine.run().context("protocol session failed")?;

    if let Some(path) = record {
        engine
            .log()
            .write_to(&path)
            .with_context(|| format!("failed to write game log to {}", path.display()))?;
    }
    Ok(())
}

fn run_demo(size: usize, mode: GameMode, seed: Option<u64>) -> Result<()> {
    check_size(size)?;
    let source = match seed {
        Some(seed) => FastRandSource::with_seed(seed),
        None => FastRandSource::new(),
    };
    let mut board = Board::with_source(size, source);
    board.set_mode(mode);
    board.player_mut(PlayerId::One).set_control(ControlMode::Computer);
    board.player_mut(PlayerId::Two).set_control(ControlMode::Computer);

    let placed = board.play_computer_turns();
    info!(placed, state = %board.state(), "demo finished");

    println!("SOS {size}x{size}, {mode} mode\n");
    println!("{board}");
    print!("{}", GameLog::from_events(board.events()).text());
    Ok(())
}

fn run_replay(file: PathBuf) -> Result<()> {
    let replay = Replay::from_file(&file)
        .with_context(|| format!("failed to load game log {}", file.display()))?;
    let board = replay.board().context("game log does not replay cleanly")?;

    println!(
        "{} moves on a {}x{} board, {} mode\n",
        replay.moves.len(),
        replay.size,
        replay.size,
        replay.mode
    );
    println!("{board}");
    println!(
        "Result: {} (Player 1: {}, Player 2: {})",
        board.state(),
        board.score(PlayerId::One),
        board.score(PlayerId::Two)
    );
    Ok(())
}
