//! Reading recorded game logs back into a board.
//!
//! A log is the text produced by [`crate::recorder::GameLog`]. Only three
//! kinds of line matter for replay: the board size, the mode and the moves.
//! Anything else, such as the closing result message, is skipped.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

use crate::board::{Board, GameMode, Placement};
use crate::constants::{DEFAULT_MODE, is_valid_size};
use crate::player::{ControlMode, PlayerId};
use crate::tile::Symbol;
use crate::triple::Coord;

static INIT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Board has been initialized at size ([0-9]+)\.$").expect("init pattern")
});

static MODE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Game mode has been switched to (Simple|General)\.$").expect("mode pattern")
});

static MOVE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Player ([12]) \(([SO]), (Human|Computer)\): \(([0-9]+),([0-9]+)\)$")
        .expect("move pattern")
});

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("log has no board size line")]
    MissingSize,
    #[error("line {line}: unplayable board size {text}")]
    InvalidSize { line: usize, text: String },
    #[error("line {line}: unreadable coordinate {text}")]
    BadCoordinate { line: usize, text: String },
    #[error("line {line}: move {at} is off a board of size {size}")]
    OutOfBounds { line: usize, at: Coord, size: usize },
    #[error("move {index}: {expected} is on turn but the log has {found}")]
    OutOfTurn {
        index: usize,
        expected: PlayerId,
        found: PlayerId,
    },
    #[error("move {index}: placement at {at} was not accepted ({placement:?})")]
    Rejected {
        index: usize,
        at: Coord,
        placement: Placement,
    },
    #[error("failed to read game log")]
    Io(#[from] io::Error),
}

/// One placement as written in the log.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RecordedMove {
    pub player: PlayerId,
    pub symbol: Symbol,
    pub control: ControlMode,
    pub at: Coord,
}

/// A parsed game log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Replay {
    pub size: usize,
    pub mode: GameMode,
    pub moves: Vec<RecordedMove>,
}

impl Replay {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse log text.
    ///
    /// A second size line starts the game over, as a board reset does. A
    /// mode line after the first move is ignored, as the board would.
    pub fn parse(text: &str) -> Result<Self, ReplayError> {
        let mut size = None;
        let mut mode = DEFAULT_MODE;
        let mut moves = Vec::new();

        for (i, raw) in text.lines().enumerate() {
            let line_no = i + 1;
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(caps) = INIT_LINE.captures(line) {
                let text = &caps[1];
                let parsed = text
                    .parse::<usize>()
                    .ok()
                    .filter(|&s| is_valid_size(s))
                    .ok_or_else(|| ReplayError::InvalidSize {
                        line: line_no,
                        text: text.to_string(),
                    })?;
                size = Some(parsed);
                mode = DEFAULT_MODE;
                moves.clear();
            } else if let Some(caps) = MODE_LINE.captures(line) {
                if moves.is_empty() {
                    mode = GameMode::parse(&caps[1]).unwrap_or(DEFAULT_MODE);
                } else {
                    warn!(line = line_no, "mode change after first move ignored");
                }
            } else if let Some(caps) = MOVE_LINE.captures(line) {
                let size = size.ok_or(ReplayError::MissingSize)?;
                let at = Coord::new(
                    coordinate(&caps[4], line_no)?,
                    coordinate(&caps[5], line_no)?,
                );
                if at.row >= size || at.col >= size {
                    return Err(ReplayError::OutOfBounds {
                        line: line_no,
                        at,
                        size,
                    });
                }
                moves.push(RecordedMove {
                    player: if &caps[1] == "1" {
                        PlayerId::One
                    } else {
                        PlayerId::Two
                    },
                    symbol: Symbol::parse(&caps[2]).unwrap_or(Symbol::S),
                    control: ControlMode::parse(&caps[3]).unwrap_or_default(),
                    at,
                });
            } else {
                debug!(line = line_no, text = line, "skipping log line");
            }
        }

        let size = size.ok_or(ReplayError::MissingSize)?;
        Ok(Replay { size, mode, moves })
    }

    /// Re-play the recorded moves on a fresh board.
    ///
    /// Each move is applied as a fixed placement using the recorded symbol
    /// and control label, so computer moves are reproduced exactly rather
    /// than drawn again. The returned board's events reproduce the log.
    pub fn board(&self) -> Result<Board, ReplayError> {
        let mut board = Board::new(self.size);
        if board.mode() != self.mode {
            board.set_mode(self.mode);
        }

        for (index, mv) in self.moves.iter().enumerate() {
            let expected = board.turn_id();
            if expected != mv.player {
                return Err(ReplayError::OutOfTurn {
                    index,
                    expected,
                    found: mv.player,
                });
            }

            let player = board.player_mut(mv.player);
            player.set_symbol(mv.symbol);
            player.set_control(mv.control);
            let placement = board.play_move(mv.at.row, mv.at.col);
            // Never let the board draw its own computer moves during replay.
            board.player_mut(mv.player).set_control(ControlMode::Human);

            if placement != Placement::Placed {
                return Err(ReplayError::Rejected {
                    index,
                    at: mv.at,
                    placement,
                });
            }
        }
        Ok(board)
    }
}

fn coordinate(text: &str, line: usize) -> Result<usize, ReplayError> {
    text.parse().map_err(|_| ReplayError::BadCoordinate {
        line,
        text: text.to_string(),
    })
}
