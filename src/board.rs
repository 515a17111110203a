//! The SOS game board: grid, players, turn order and game state machine.
//!
//! Every placement, human or computer, goes through the same sequence:
//! place the tile, rescan the whole grid for S-O-S triples, credit each
//! newly found triple to the player on turn, evaluate the end of the game,
//! then hand the turn over. Registered triples are deduplicated, so
//! rescanning an unchanged board never changes the score.

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, info, trace};

use crate::constants::{
    DEFAULT_BOARD_SIZE, DEFAULT_MODE, MAX_BOARD_SIZE, MIN_BOARD_SIZE, is_valid_size,
};
use crate::event::GameEvent;
use crate::player::{Player, PlayerId};
use crate::random::{FastRandSource, RandomSource};
use crate::recorder::Recorder;
use crate::tile::{Symbol, Tile};
use crate::triple::{Coord, Direction, Triple, TripleIndex};

/// How the winner is decided.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// First triple wins.
    Simple,
    /// Most triples once the board is full wins.
    General,
}

impl GameMode {
    /// Parse `simple` / `general` (case-insensitive).
    pub fn parse(s: &str) -> Option<GameMode> {
        if s.eq_ignore_ascii_case("simple") {
            Some(GameMode::Simple)
        } else if s.eq_ignore_ascii_case("general") {
            Some(GameMode::General)
        } else {
            None
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Simple => write!(f, "Simple"),
            GameMode::General => write!(f, "General"),
        }
    }
}

/// Where the game is in its lifecycle.
///
/// `Init` and `Playing` accept moves; the other three are terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GameState {
    Init,
    Playing,
    Draw,
    PlayerOneWon,
    PlayerTwoWon,
}

impl GameState {
    pub fn won_by(id: PlayerId) -> GameState {
        match id {
            PlayerId::One => GameState::PlayerOneWon,
            PlayerId::Two => GameState::PlayerTwoWon,
        }
    }

    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, GameState::Init | GameState::Playing)
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        !self.is_open()
    }

    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameState::PlayerOneWon => Some(PlayerId::One),
            GameState::PlayerTwoWon => Some(PlayerId::Two),
            _ => None,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::Init => write!(f, "init"),
            GameState::Playing => write!(f, "playing"),
            GameState::Draw => write!(f, "draw"),
            GameState::PlayerOneWon => write!(f, "player 1 won"),
            GameState::PlayerTwoWon => write!(f, "player 2 won"),
        }
    }
}

/// What happened to a requested placement.
///
/// None of these are errors: tapping a filled cell or clicking after the
/// game ended are ordinary inputs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    /// The tile was placed (and any computer replies were played).
    Placed,
    /// The cell already holds a tile; nothing changed.
    Occupied,
    /// The game is over; nothing changed.
    GameOver,
}

/// An SOS board with both players and the game state machine.
#[derive(Debug)]
pub struct Board {
    size: usize,
    /// Row-major cells, `size * size` long.
    cells: Vec<Tile>,
    players: [Player; 2],
    turn: PlayerId,
    mode: GameMode,
    state: GameState,
    triples: TripleIndex,
    /// Events not yet handed to a recorder.
    events: Vec<GameEvent>,
    source: Box<dyn RandomSource>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl Board {
    /// Create an empty board with entropy-seeded computer moves.
    ///
    /// # Panics
    /// If `size` is outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    pub fn new(size: usize) -> Self {
        Self::with_source(size, FastRandSource::new())
    }

    /// Create an empty board whose computer moves come from `source`.
    ///
    /// # Panics
    /// If `size` is outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    pub fn with_source(size: usize, source: impl RandomSource + 'static) -> Self {
        assert_size(size);
        let mut board = Board {
            size,
            cells: Vec::new(),
            players: [Player::new(PlayerId::One), Player::new(PlayerId::Two)],
            turn: PlayerId::One,
            mode: DEFAULT_MODE,
            state: GameState::Init,
            triples: TripleIndex::new(),
            events: Vec::new(),
            source: Box::new(source),
        };
        board.reset();
        board
    }

    /// Start a new game on the current grid size.
    ///
    /// Clears tiles, scores, registered triples and pending events. The mode
    /// and both players' symbol and control settings are kept.
    pub fn reset(&mut self) {
        self.cells = vec![Tile::Empty; self.size * self.size];
        for player in &mut self.players {
            player.reset_score();
        }
        self.turn = PlayerId::One;
        self.state = GameState::Init;
        self.triples.clear();
        self.events.clear();
        self.events.push(GameEvent::BoardInitialized { size: self.size });
        // The log restarts here; carry a non-default mode into it.
        if self.mode != DEFAULT_MODE {
            self.events.push(GameEvent::ModeChanged(self.mode));
        }
        info!(size = self.size, mode = %self.mode, "board initialized");
    }

    /// Start a new game on a grid of a different size.
    ///
    /// # Panics
    /// If `size` is outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    pub fn resize(&mut self, size: usize) {
        assert_size(size);
        self.size = size;
        self.reset();
    }

    /// Change the scoring mode. Ignored unless every cell is empty.
    ///
    /// Returns true if the mode was applied.
    pub fn set_mode(&mut self, mode: GameMode) -> bool {
        if self.cells.iter().any(|t| !t.is_empty()) {
            debug!(requested = %mode, current = %self.mode, "mode change ignored on non-empty board");
            return false;
        }
        self.mode = mode;
        self.events.push(GameEvent::ModeChanged(mode));
        true
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Tile at (`row`, `col`).
    ///
    /// # Panics
    /// If the position is off the board.
    pub fn tile(&self, row: usize, col: usize) -> Tile {
        self.cells[self.idx(Coord::new(row, col))]
    }

    pub fn tile_at(&self, at: Coord) -> Tile {
        self.cells[self.idx(at)]
    }

    /// All empty cells in row-major order.
    pub fn empty_tiles(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_empty())
            .map(|(i, _)| Coord::new(i / self.size, i % self.size))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|t| !t.is_empty())
    }

    pub fn has_winner(&self) -> bool {
        self.state.winner().is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    /// The player whose move it is.
    pub fn turn(&self) -> &Player {
        self.player(self.turn)
    }

    pub fn turn_id(&self) -> PlayerId {
        self.turn
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Mutable access for symbol and control changes.
    ///
    /// Switching the player on turn to computer control does not move by
    /// itself; call [`Board::play_computer_turns`] afterwards.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    pub fn score(&self, id: PlayerId) -> u32 {
        self.player(id).score()
    }

    /// Triples credited so far in this game.
    pub fn triples(&self) -> &TripleIndex {
        &self.triples
    }

    /// Events emitted since the last reset or drain.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Hand all pending events to `recorder`, oldest first.
    pub fn flush_to<R: Recorder + ?Sized>(&mut self, recorder: &mut R) {
        for event in self.events.drain(..) {
            recorder.record(&event);
        }
    }

    // -------------------------------------------------------------------------
    // Moves
    // -------------------------------------------------------------------------

    /// Place the active player's selected symbol at (`row`, `col`).
    ///
    /// On success the turn passes to the other player (unless the game just
    /// ended), and any computer-controlled players then move until a human
    /// is on turn or the game is over.
    ///
    /// # Panics
    /// If the position is off the board.
    pub fn play_move(&mut self, row: usize, col: usize) -> Placement {
        let at = Coord::new(row, col);
        let idx = self.idx(at);

        if self.state.is_terminal() {
            debug!(%at, "move ignored after game over");
            return Placement::GameOver;
        }
        if !self.cells[idx].is_empty() {
            debug!(%at, "move ignored on occupied cell");
            return Placement::Occupied;
        }

        let symbol = self.turn().symbol();
        self.place(at, symbol);
        if self.state.is_open() {
            self.turn = self.turn.other();
        }
        self.play_computer_turns();
        Placement::Placed
    }

    /// Play one random placement for the player on turn.
    ///
    /// The cell and the symbol are both drawn uniformly from the board's
    /// random source; the symbol also becomes the player's selection. The
    /// turn passes on only if the game is still open and the placement did
    /// not take the last empty cell. Returns the cell played, or `None` if
    /// the game is over or the board is full.
    pub fn computer_move(&mut self) -> Option<Coord> {
        if self.state.is_terminal() {
            return None;
        }
        let empty = self.empty_tiles();
        if empty.is_empty() {
            return None;
        }

        let at = self.source.pick_coord(&empty);
        let symbol = self.source.pick_symbol();
        self.players[self.turn.index()].set_symbol(symbol);
        self.place(at, symbol);

        if empty.len() > 1 && self.state.is_open() {
            self.turn = self.turn.other();
        }
        Some(at)
    }

    /// Let computer-controlled players move until a human is on turn, the
    /// board is full or the game is over. Returns the number of placements.
    pub fn play_computer_turns(&mut self) -> usize {
        let mut placed = 0;
        while self.state.is_open() && !self.is_full() && self.turn().is_computer() {
            if self.computer_move().is_none() {
                break;
            }
            placed += 1;
        }
        placed
    }

    // -------------------------------------------------------------------------
    // Triple detection
    // -------------------------------------------------------------------------

    /// Every S-O-S triple currently on the grid, registered or not.
    pub fn find_triples(&self) -> Vec<Triple> {
        let mut found = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let start = Coord::new(row, col);
                for dir in Direction::ALL {
                    if !dir.fits(row, col, self.size) {
                        continue;
                    }
                    let window = dir.window(start);
                    if self.reads_sos(&window) {
                        trace!(?dir, %start, "triple on grid");
                        found.push(Triple::new(window));
                    }
                }
            }
        }
        found
    }

    /// Register any triples not yet credited and give one point per new
    /// triple to the player on turn. Returns how many were new.
    ///
    /// Running this twice on an unchanged board registers nothing the
    /// second time.
    pub fn register_triples(&mut self) -> usize {
        let mut added = 0;
        for triple in self.find_triples() {
            if self.triples.insert(triple) {
                self.players[self.turn.index()].increment_score();
                added += 1;
                debug!(%triple, player = %self.turn, "triple registered");
            }
        }
        added
    }

    fn reads_sos(&self, window: &[Coord; 3]) -> bool {
        let [a, b, c] = *window;
        self.tile_at(a) == Tile::S && self.tile_at(b) == Tile::O && self.tile_at(c) == Tile::S
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn idx(&self, at: Coord) -> usize {
        assert!(
            at.row < self.size && at.col < self.size,
            "{at} out of bounds for board size {}",
            self.size
        );
        at.row * self.size + at.col
    }

    /// Put `symbol` on an empty cell for the player on turn, then score and
    /// update the game state. Does not touch the turn.
    fn place(&mut self, at: Coord, symbol: Symbol) {
        let idx = self.idx(at);
        debug_assert!(self.cells[idx].is_empty());
        self.cells[idx] = Tile::from(symbol);

        let player = self.turn;
        let control = self.turn().control();
        debug!(%player, %symbol, %control, %at, "tile placed");
        self.events.push(GameEvent::Move {
            player,
            symbol,
            control,
            at,
        });

        self.register_triples();
        self.update_state();
    }

    fn update_state(&mut self) {
        let full = self.is_full();
        let next = match self.mode {
            GameMode::Simple => {
                let scorer = [self.turn, self.turn.other()]
                    .into_iter()
                    .find(|&id| self.score(id) >= 1);
                match scorer {
                    Some(id) => GameState::won_by(id),
                    None if full => GameState::Draw,
                    None => GameState::Playing,
                }
            }
            GameMode::General if !full => GameState::Playing,
            GameMode::General => match self.score(PlayerId::One).cmp(&self.score(PlayerId::Two)) {
                Ordering::Greater => GameState::PlayerOneWon,
                Ordering::Less => GameState::PlayerTwoWon,
                Ordering::Equal => GameState::Draw,
            },
        };

        self.state = next;
        if next.is_terminal() {
            let message = self.result_message();
            info!(state = %next, "{message}");
            self.events.push(GameEvent::GameOver(message));
        }
    }

    /// Text announcing the final result, as written to the game log.
    fn result_message(&self) -> String {
        match (self.state.winner(), self.mode) {
            (Some(winner), GameMode::Simple) => format!("{winner} has won!"),
            (Some(winner), GameMode::General) => {
                let loser = winner.other();
                format!(
                    "{winner} has won with {} points! {loser} finished with {} points.",
                    self.score(winner),
                    self.score(loser)
                )
            }
            (None, _) => "The game ended in a draw.".to_string(),
        }
    }
}

fn assert_size(size: usize) {
    assert!(
        is_valid_size(size),
        "board size {size} outside {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}"
    );
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.size {
            write!(f, "{col} ")?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{row} ")?;
            for col in 0..self.size {
                write!(f, "{} ", self.tile(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::player::ControlMode;

    /// Replays a fixed list of computer choices.
    #[derive(Debug)]
    struct Scripted {
        coords: VecDeque<Coord>,
        symbols: VecDeque<Symbol>,
    }

    impl Scripted {
        fn new(coords: &[(usize, usize)], symbols: &[Symbol]) -> Self {
            Self {
                coords: coords.iter().map(|&c| Coord::from(c)).collect(),
                symbols: symbols.iter().copied().collect(),
            }
        }
    }

    impl RandomSource for Scripted {
        fn pick_coord(&mut self, candidates: &[Coord]) -> Coord {
            let c = self.coords.pop_front().expect("script ran out of coords");
            assert!(candidates.contains(&c), "scripted {c} is not empty");
            c
        }

        fn pick_symbol(&mut self) -> Symbol {
            self.symbols.pop_front().expect("script ran out of symbols")
        }
    }

    /// Select `symbol` for whoever is on turn, then play at (row, col).
    fn put(board: &mut Board, row: usize, col: usize, symbol: Symbol) -> Placement {
        let id = board.turn_id();
        board.player_mut(id).set_symbol(symbol);
        board.play_move(row, col)
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(5);
        assert_eq!(board.size(), 5);
        assert_eq!(board.state(), GameState::Init);
        assert_eq!(board.mode(), GameMode::General);
        assert_eq!(board.empty_tiles().len(), 25);
        assert_eq!(board.turn_id(), PlayerId::One);
        assert!(!board.is_full());
        assert_eq!(board.events(), &[GameEvent::BoardInitialized { size: 5 }]);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_size_too_small() {
        let _ = Board::new(2);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_move_out_of_bounds() {
        let mut board = Board::new(3);
        board.play_move(0, 3);
    }

    #[test]
    fn test_mode_locked_after_first_move() {
        let mut board = Board::new(9);
        assert!(board.set_mode(GameMode::Simple));
        assert!(board.set_mode(GameMode::General));
        board.play_move(1, 1);
        assert!(!board.set_mode(GameMode::Simple));
        assert_eq!(board.mode(), GameMode::General);
    }

    #[test]
    fn test_occupied_cell_is_noop() {
        let mut board = Board::new(9);
        assert_eq!(board.play_move(1, 1), Placement::Placed);
        let events = board.events().len();
        assert_eq!(board.play_move(1, 1), Placement::Occupied);
        assert_eq!(board.tile(1, 1), Tile::S);
        assert_eq!(board.turn_id(), PlayerId::Two);
        assert_eq!(board.events().len(), events);
    }

    #[test]
    fn test_symbol_selection_applies_to_next_tile() {
        let mut board = Board::new(9);
        board.player_mut(PlayerId::One).set_symbol(Symbol::O);
        board.play_move(0, 0);
        assert_eq!(board.tile(0, 0), Tile::O);
    }

    #[test]
    fn test_first_move_starts_playing() {
        let mut board = Board::new(4);
        board.play_move(0, 0);
        assert_eq!(board.state(), GameState::Playing);
    }

    #[test]
    fn test_each_direction_detected() {
        let cases: [[(usize, usize); 3]; 4] = [
            [(2, 1), (2, 2), (2, 3)],
            [(0, 4), (1, 4), (2, 4)],
            [(1, 1), (2, 2), (3, 3)],
            [(0, 4), (1, 3), (2, 2)],
        ];
        for cells in cases {
            let mut board = Board::new(5);
            put(&mut board, cells[0].0, cells[0].1, Symbol::S);
            put(&mut board, cells[1].0, cells[1].1, Symbol::O);
            put(&mut board, cells[2].0, cells[2].1, Symbol::S);
            let expected = Triple::new(cells.map(Coord::from));
            assert_eq!(board.triples().len(), 1, "cells {cells:?}");
            assert!(board.triples().contains(&expected));
            assert_eq!(board.score(PlayerId::One), 1);
        }
    }

    #[test]
    fn test_pattern_is_literal_sos() {
        let mut board = Board::new(3);
        put(&mut board, 0, 0, Symbol::O);
        put(&mut board, 0, 1, Symbol::S);
        put(&mut board, 0, 2, Symbol::O);
        assert!(board.triples().is_empty());
        assert!(board.find_triples().is_empty());
    }

    #[test]
    fn test_rescan_is_idempotent() {
        let mut board = Board::new(5);
        put(&mut board, 0, 0, Symbol::S);
        put(&mut board, 0, 1, Symbol::O);
        put(&mut board, 0, 2, Symbol::S);
        let scores = (board.score(PlayerId::One), board.score(PlayerId::Two));
        assert_eq!(board.register_triples(), 0);
        assert_eq!(board.register_triples(), 0);
        assert_eq!(board.triples().len(), 1);
        assert_eq!(
            (board.score(PlayerId::One), board.score(PlayerId::Two)),
            scores
        );
    }

    #[test]
    fn test_credit_goes_to_player_on_turn() {
        // Player 1 lays the first S, Player 2 the O and then the closing S.
        let mut board = Board::new(3);
        put(&mut board, 0, 0, Symbol::S);
        put(&mut board, 0, 1, Symbol::O);
        put(&mut board, 2, 2, Symbol::S);
        put(&mut board, 0, 2, Symbol::S);
        assert_eq!(board.score(PlayerId::One), 0);
        assert_eq!(board.score(PlayerId::Two), 1);
        assert_eq!(board.state(), GameState::Playing);
        assert_eq!(board.turn_id(), PlayerId::One);
    }

    #[test]
    fn test_simple_double_triple_still_wins() {
        let mut board = Board::new(3);
        board.set_mode(GameMode::Simple);
        put(&mut board, 0, 2, Symbol::S);
        put(&mut board, 0, 1, Symbol::O);
        put(&mut board, 2, 0, Symbol::S);
        put(&mut board, 1, 0, Symbol::O);
        put(&mut board, 0, 0, Symbol::S);
        assert_eq!(board.score(PlayerId::One), 2);
        assert_eq!(board.state(), GameState::PlayerOneWon);
        assert!(board.has_winner());
        // Winner keeps the turn; later input is ignored.
        assert_eq!(board.turn_id(), PlayerId::One);
        assert_eq!(board.play_move(2, 2), Placement::GameOver);
        assert!(board.tile(2, 2).is_empty());
    }

    #[test]
    fn test_general_waits_for_full_board() {
        let mut board = Board::new(3);
        put(&mut board, 0, 0, Symbol::S);
        put(&mut board, 0, 1, Symbol::O);
        put(&mut board, 0, 2, Symbol::S);
        assert_eq!(board.score(PlayerId::One), 1);
        assert_eq!(board.state(), GameState::Playing);
    }

    #[test]
    fn test_general_message_reports_points() {
        let mut board = Board::new(3);
        for row in 0..3 {
            for col in 0..3 {
                board.play_move(row, col);
            }
        }
        assert_eq!(board.state(), GameState::PlayerOneWon);
        assert_eq!(
            board.events().last(),
            Some(&GameEvent::GameOver(
                "Player 1 has won with 4 points! Player 2 finished with 0 points.".into()
            ))
        );
    }

    #[test]
    fn test_reset_clears_game() {
        let mut board = Board::new(3);
        board.set_mode(GameMode::Simple);
        put(&mut board, 0, 0, Symbol::S);
        put(&mut board, 0, 1, Symbol::O);
        put(&mut board, 0, 2, Symbol::S);
        assert!(board.is_finished());

        board.reset();
        assert_eq!(board.state(), GameState::Init);
        assert_eq!(board.score(PlayerId::One), 0);
        assert!(board.triples().is_empty());
        assert_eq!(board.empty_tiles().len(), 9);
        assert_eq!(board.turn_id(), PlayerId::One);
        assert_eq!(board.mode(), GameMode::Simple);
        assert_eq!(
            board.events(),
            &[
                GameEvent::BoardInitialized { size: 3 },
                GameEvent::ModeChanged(GameMode::Simple),
            ]
        );
    }

    #[test]
    fn test_resize_rebuilds_grid() {
        let mut board = Board::new(3);
        board.play_move(1, 1);
        board.resize(7);
        assert_eq!(board.size(), 7);
        assert_eq!(board.empty_tiles().len(), 49);
        assert_eq!(board.state(), GameState::Init);
    }

    #[test]
    fn test_computer_reply_after_human_move() {
        let mut board = Board::with_source(3, Scripted::new(&[(2, 2)], &[Symbol::S]));
        board
            .player_mut(PlayerId::Two)
            .set_control(ControlMode::Computer);

        board.play_move(0, 0);
        assert_eq!(board.tile(2, 2), Tile::S);
        assert_eq!(board.player(PlayerId::Two).symbol(), Symbol::S);
        assert_eq!(board.empty_tiles().len(), 7);
        assert_eq!(board.turn_id(), PlayerId::One);
    }

    #[test]
    fn test_computer_last_cell_keeps_turn() {
        let mut board = Board::with_source(3, Scripted::new(&[(2, 2)], &[Symbol::O]));
        for (row, col) in [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1)] {
            put(&mut board, row, col, Symbol::S);
        }
        assert_eq!(board.turn_id(), PlayerId::One);
        assert_eq!(board.computer_move(), Some(Coord::new(2, 2)));
        assert!(board.is_full());
        assert_eq!(board.turn_id(), PlayerId::One);
        assert_eq!(board.state(), GameState::Draw);
        assert_eq!(board.computer_move(), None);
    }

    #[test]
    fn test_computer_vs_computer_finishes() {
        let mut board = Board::with_source(6, FastRandSource::with_seed(11));
        board.player_mut(PlayerId::One).set_control(ControlMode::Computer);
        board.player_mut(PlayerId::Two).set_control(ControlMode::Computer);
        let placed = board.play_computer_turns();
        assert_eq!(placed, 36);
        assert!(board.is_full());
        assert!(board.is_finished());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3);
        board.play_move(0, 0);
        board.play_move(1, 1);
        assert_eq!(board.to_string(), "  0 1 2 \n0 S . . \n1 . O . \n2 . . . \n");
    }

    #[test]
    fn test_debug_includes_source() {
        let board = Board::with_source(3, Scripted::new(&[(2, 2)], &[Symbol::O]));
        let dump = format!("{board:?}");
        assert!(dump.starts_with("Board {"));
        assert!(dump.contains("Scripted"));
        assert!(dump.contains("state: Init"));
    }
}
