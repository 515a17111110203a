//! Line-oriented text protocol for driving a board from another program.
//!
//! The framing follows GTP: each request is an optional numeric id, a
//! command and its arguments on one line. Each response is `=` (success)
//! or `?` (failure), the id if one was given, a space, the message and a
//! blank line.
//!
//! ## Supported Commands
//!
//! - `name` / `version` - Engine identification
//! - `list_commands` / `known_command <cmd>` - Command discovery
//! - `quit` - Exit the loop
//! - `newgame [size]` - Start a new game, optionally at a new size
//! - `mode <simple|general>` - Set the scoring mode (empty board only)
//! - `symbol <1|2> <S|O>` - Select a player's symbol
//! - `control <1|2> <human|computer>` - Set who controls a player
//! - `play <row> <col>` - Place the active player's symbol
//! - `genmove` - Play one random move for the player on turn
//! - `showboard` - Render the grid
//! - `state` / `score` - Game state and scores
//! - `log` - The game log so far
//!
//! ## Example
//!
//! ```ignore
//! use sos_engine::protocol::SosEngine;
//! let mut engine = SosEngine::new(3);
//! engine.run();
//! ```

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::board::{Board, GameMode, Placement};
use crate::constants::{ENGINE_NAME, MAX_BOARD_SIZE, MIN_BOARD_SIZE, is_valid_size};
use crate::player::{ControlMode, PlayerId};
use crate::recorder::{GameLog, Recorder};
use crate::tile::Symbol;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "control",
    "genmove",
    "known_command",
    "list_commands",
    "log",
    "mode",
    "name",
    "newgame",
    "play",
    "quit",
    "score",
    "showboard",
    "state",
    "symbol",
    "version",
];

/// Protocol engine state.
pub struct SosEngine {
    board: Board,
    /// Everything the board has emitted since the last `newgame`.
    log: GameLog,
}

impl SosEngine {
    pub fn new(size: usize) -> Self {
        Self::with_board(Board::new(size))
    }

    pub fn with_board(board: Board) -> Self {
        let mut engine = Self {
            board,
            log: GameLog::new(),
        };
        engine.sync_log();
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The recorded log of the current game.
    pub fn log(&self) -> &GameLog {
        &self.log
    }

    /// Run the command loop on stdin/stdout until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the command loop over arbitrary streams.
    pub fn serve(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            if !success {
                warn!(%command, %message, "command failed");
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            write!(output, "{prefix}{id_str} {message}\n\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a command and return (success, response).
    pub fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        debug!(command, ?args, "executing");
        let response = match command {
            "name" => (true, ENGINE_NAME.to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => match args.first() {
                None => (false, "missing argument".to_string()),
                Some(cmd) => {
                    let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                    (true, known.to_string())
                }
            },

            "quit" => (true, String::new()),

            "newgame" => match args.first() {
                None => {
                    self.board.reset();
                    self.log.clear();
                    (true, String::new())
                }
                Some(arg) => match arg.parse::<usize>() {
                    Ok(size) if is_valid_size(size) => {
                        self.board.resize(size);
                        self.log.clear();
                        (true, String::new())
                    }
                    Ok(size) => (
                        false,
                        format!(
                            "unacceptable size {size}, must be {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}"
                        ),
                    ),
                    Err(_) => (false, "invalid size".to_string()),
                },
            },

            "mode" => match args.first().and_then(|m| GameMode::parse(m)) {
                None => (false, "expected simple or general".to_string()),
                Some(mode) => {
                    if self.board.set_mode(mode) {
                        (true, mode.to_string())
                    } else {
                        (false, "mode can only change on an empty board".to_string())
                    }
                }
            },

            "symbol" => match (parse_player(args.first()), args.get(1).and_then(|s| Symbol::parse(s))) {
                (Some(id), Some(symbol)) => {
                    self.board.player_mut(id).set_symbol(symbol);
                    (true, String::new())
                }
                _ => (false, "usage: symbol <1|2> <S|O>".to_string()),
            },

            "control" => match (
                parse_player(args.first()),
                args.get(1).and_then(|c| ControlMode::parse(c)),
            ) {
                (Some(id), Some(control)) => {
                    self.board.player_mut(id).set_control(control);
                    let placed = self.board.play_computer_turns();
                    (true, placed.to_string())
                }
                _ => (false, "usage: control <1|2> <human|computer>".to_string()),
            },

            "play" => {
                let coords = match args {
                    [row, col] => row.parse::<usize>().ok().zip(col.parse::<usize>().ok()),
                    _ => None,
                };
                match coords {
                    Some((row, col)) if row < self.board.size() && col < self.board.size() => {
                        match self.board.play_move(row, col) {
                            Placement::Placed => (true, self.board.state().to_string()),
                            Placement::Occupied => (false, "cell is occupied".to_string()),
                            Placement::GameOver => (false, "game is over".to_string()),
                        }
                    }
                    Some(_) => (false, "coordinates off the board".to_string()),
                    _ => (false, "usage: play <row> <col>".to_string()),
                }
            }

            "genmove" => match self.board.computer_move() {
                Some(at) => {
                    self.board.play_computer_turns();
                    (true, at.to_string())
                }
                None => (false, "no move available".to_string()),
            },

            "showboard" => (true, format!("\n{}", self.board)),

            "state" => (true, self.board.state().to_string()),

            "score" => (
                true,
                format!(
                    "{} {}",
                    self.board.score(PlayerId::One),
                    self.board.score(PlayerId::Two)
                ),
            ),

            "log" => {
                self.sync_log();
                (true, self.log.text().trim_end().to_string())
            }

            _ => (false, format!("unknown command: {command}")),
        };
        self.sync_log();
        response
    }

    fn sync_log(&mut self) {
        let events = self.board.drain_events();
        for event in &events {
            self.log.record(event);
        }
    }
}

fn parse_player(arg: Option<&&str>) -> Option<PlayerId> {
    arg.and_then(|a| a.parse::<u8>().ok())
        .and_then(PlayerId::from_number)
}
