//! Player identity, symbol selection, control mode and score.

use std::fmt;

use crate::tile::Symbol;

/// Which of the two seats a player occupies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The other seat.
    #[inline]
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// 1 or 2, as shown in logs.
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    pub fn from_number(n: u8) -> Option<PlayerId> {
        match n {
            1 => Some(PlayerId::One),
            2 => Some(PlayerId::Two),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Who decides a player's moves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ControlMode {
    #[default]
    Human,
    /// Moves are chosen uniformly at random by the board.
    Computer,
}

impl ControlMode {
    /// Parse `human` / `computer` (case-insensitive).
    pub fn parse(s: &str) -> Option<ControlMode> {
        if s.eq_ignore_ascii_case("human") {
            Some(ControlMode::Human)
        } else if s.eq_ignore_ascii_case("computer") {
            Some(ControlMode::Computer)
        } else {
            None
        }
    }
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlMode::Human => write!(f, "Human"),
            ControlMode::Computer => write!(f, "Computer"),
        }
    }
}

/// One of the two participants.
///
/// The symbol selection can change at any time; the next tile this player
/// places uses whatever is selected then. Only the board touches the score.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    symbol: Symbol,
    control: ControlMode,
    score: u32,
}

impl Player {
    /// Player 1 starts with `S`, Player 2 with `O`, both human.
    pub fn new(id: PlayerId) -> Self {
        let symbol = match id {
            PlayerId::One => Symbol::S,
            PlayerId::Two => Symbol::O,
        };
        Self {
            id,
            symbol,
            control: ControlMode::Human,
            score: 0,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn set_symbol(&mut self, symbol: Symbol) {
        self.symbol = symbol;
    }

    pub fn control(&self) -> ControlMode {
        self.control
    }

    pub fn set_control(&mut self, control: ControlMode) {
        self.control = control;
    }

    pub fn is_computer(&self) -> bool {
        self.control == ControlMode::Computer
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn increment_score(&mut self) {
        self.score += 1;
    }

    pub(crate) fn reset_score(&mut self) {
        self.score = 0;
    }
}

/// Renders as `Player 1 (S, Human)`, the prefix of a recorded move line.
impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.id, self.symbol, self.control)
    }
}
