//! Cell values and placeable symbols.

use std::fmt;

/// A symbol a player can place.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    S,
    O,
}

impl Symbol {
    pub const ALL: [Symbol; 2] = [Symbol::S, Symbol::O];

    /// Parse `S` or `O` (case-insensitive).
    pub fn parse(s: &str) -> Option<Symbol> {
        match s {
            "S" | "s" => Some(Symbol::S),
            "O" | "o" => Some(Symbol::O),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::S => write!(f, "S"),
            Symbol::O => write!(f, "O"),
        }
    }
}

/// Contents of a single grid cell.
///
/// A cell only ever moves from `Empty` to one of the symbol values.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tile {
    #[default]
    Empty,
    S,
    O,
}

impl Tile {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Tile::Empty
    }

    /// The symbol on this tile, or `None` if empty.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Tile::Empty => None,
            Tile::S => Some(Symbol::S),
            Tile::O => Some(Symbol::O),
        }
    }
}

impl From<Symbol> for Tile {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::S => Tile::S,
            Symbol::O => Tile::O,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Empty => write!(f, "."),
            Tile::S => write!(f, "S"),
            Tile::O => write!(f, "O"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_parse() {
        assert_eq!(Symbol::parse("S"), Some(Symbol::S));
        assert_eq!(Symbol::parse("o"), Some(Symbol::O));
        assert_eq!(Symbol::parse("X"), None);
        assert_eq!(Symbol::parse(""), None);
    }

    #[test]
    fn test_tile_from_symbol() {
        assert_eq!(Tile::from(Symbol::S), Tile::S);
        assert_eq!(Tile::from(Symbol::O).symbol(), Some(Symbol::O));
        assert!(Tile::default().is_empty());
        assert_eq!(Tile::Empty.symbol(), None);
    }
}
