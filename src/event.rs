//! Structured events emitted by the board.
//!
//! Each event renders (via `Display`) as exactly one line of the recorded
//! game log, without the trailing newline.

use std::fmt;

use crate::board::GameMode;
use crate::player::{ControlMode, PlayerId};
use crate::tile::Symbol;
use crate::triple::Coord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh grid was created (construction, reset or resize).
    BoardInitialized { size: usize },
    /// The scoring mode was changed on an empty board.
    ModeChanged(GameMode),
    /// A tile was placed. One per accepted placement, human or computer.
    Move {
        player: PlayerId,
        symbol: Symbol,
        control: ControlMode,
        at: Coord,
    },
    /// The game reached a terminal state. Emitted once per game.
    GameOver(String),
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::BoardInitialized { size } => {
                write!(f, "Board has been initialized at size {size}.")
            }
            GameEvent::ModeChanged(mode) => write!(f, "Game mode has been switched to {mode}."),
            GameEvent::Move {
                player,
                symbol,
                control,
                at,
            } => write!(f, "{player} ({symbol}, {control}): {at}"),
            GameEvent::GameOver(message) => write!(f, "{message}"),
        }
    }
}
