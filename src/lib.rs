//! sos-engine: game-state engine for the two-player SOS grid game.
//!
//! Players take turns placing `S` or `O` on an N×N grid (3 ≤ N ≤ 9). Every
//! straight line of three cells reading S-O-S, across, down or diagonally,
//! scores a point for the player who completed it. In *Simple* mode the
//! first point wins. In *General* mode the game runs until the grid is
//! full and the higher score wins.
//!
//! ## Modules
//!
//! - [`constants`] - Board limits and defaults
//! - [`tile`] - Cell values and placeable symbols
//! - [`player`] - Player identity, symbol, control mode and score
//! - [`triple`] - Coordinates, scoring triples and the triple index
//! - [`random`] - Injectable randomness for computer players
//! - [`board`] - The board, move protocol and game state machine
//! - [`event`] - Events emitted by the board
//! - [`recorder`] - Event sinks and the text game log
//! - [`replay`] - Parsing and replaying recorded logs
//! - [`protocol`] - Text command protocol
//!
//! ## Example
//!
//! ```
//! use sos_engine::board::{Board, GameMode, GameState};
//! use sos_engine::recorder::GameLog;
//!
//! let mut board = Board::new(3);
//! board.set_mode(GameMode::Simple);
//! board.play_move(0, 0); // Player 1 places S
//! board.play_move(0, 1); // Player 2 places O
//! board.play_move(0, 2); // Player 1 places S and wins
//! assert_eq!(board.state(), GameState::PlayerOneWon);
//!
//! let log = GameLog::from_events(board.events());
//! assert!(log.text().ends_with("Player 1 has won!\n"));
//! ```

pub mod board;
pub mod constants;
pub mod event;
pub mod player;
pub mod protocol;
pub mod random;
pub mod recorder;
pub mod replay;
pub mod tile;
pub mod triple;
