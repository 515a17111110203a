//! Grid coordinates, scoring triples and the set of registered triples.

use std::collections::BTreeSet;
use std::fmt;

use crate::constants::TRIPLE_LEN;

/// A cell position, 0-indexed from the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Renders as `(row,col)` with no space, matching the log format.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// The four line directions a triple can run in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Down and to the right.
    Diagonal,
    /// Down and to the left.
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Whether a full window of three cells starting at (`row`, `col`) fits
    /// on a board of width `size`.
    pub fn fits(self, row: usize, col: usize, size: usize) -> bool {
        let span = TRIPLE_LEN - 1;
        match self {
            Direction::Horizontal => row < size && col + span < size,
            Direction::Vertical => row + span < size && col < size,
            Direction::Diagonal => row + span < size && col + span < size,
            Direction::AntiDiagonal => row + span < size && col >= span && col < size,
        }
    }

    /// The three cells of the window starting at `start`, in reading order.
    ///
    /// Callers must check [`Direction::fits`] first.
    pub fn window(self, start: Coord) -> [Coord; 3] {
        let Coord { row, col } = start;
        match self {
            Direction::Horizontal => [start, Coord::new(row, col + 1), Coord::new(row, col + 2)],
            Direction::Vertical => [start, Coord::new(row + 1, col), Coord::new(row + 2, col)],
            Direction::Diagonal => [
                start,
                Coord::new(row + 1, col + 1),
                Coord::new(row + 2, col + 2),
            ],
            Direction::AntiDiagonal => [
                start,
                Coord::new(row + 1, col - 1),
                Coord::new(row + 2, col - 2),
            ],
        }
    }
}

/// Three collinear cells that read S-O-S.
///
/// Cells are kept sorted so two triples over the same cells compare equal
/// no matter which end they were discovered from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    cells: [Coord; 3],
}

impl Triple {
    pub fn new(mut cells: [Coord; 3]) -> Self {
        cells.sort_unstable();
        Self { cells }
    }

    pub fn cells(&self) -> &[Coord; 3] {
        &self.cells
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.cells;
        write!(f, "[{a}, {b}, {c}]")
    }
}

/// Triples already credited in the current game.
///
/// Entries are never removed except by clearing the whole index on reset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TripleIndex {
    triples: BTreeSet<Triple>,
}

impl TripleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Add a triple. Returns false if it was already registered.
    pub fn insert(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Triples in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> + '_ {
        self.triples.iter()
    }

    pub(crate) fn clear(&mut self) {
        self.triples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triple_equality_ignores_order() {
        let a = Triple::new([Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]);
        let b = Triple::new([Coord::new(0, 2), Coord::new(0, 1), Coord::new(0, 0)]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_index_dedup() {
        let mut index = TripleIndex::new();
        let t = Triple::new([Coord::new(2, 0), Coord::new(1, 1), Coord::new(0, 2)]);
        assert!(index.insert(t));
        assert!(!index.insert(Triple::new([
            Coord::new(0, 2),
            Coord::new(1, 1),
            Coord::new(2, 0)
        ])));
        assert_eq!(index.len(), 1);
        assert!(index.contains(&t));
    }

    #[test]
    fn test_window_bounds() {
        // n = 3: only one horizontal start per row, at col 0
        assert!(Direction::Horizontal.fits(2, 0, 3));
        assert!(!Direction::Horizontal.fits(0, 1, 3));
        assert!(Direction::Vertical.fits(0, 2, 3));
        assert!(!Direction::Vertical.fits(1, 0, 3));
        assert!(Direction::Diagonal.fits(0, 0, 3));
        assert!(!Direction::Diagonal.fits(0, 1, 3));
        assert!(Direction::AntiDiagonal.fits(0, 2, 3));
        assert!(!Direction::AntiDiagonal.fits(0, 1, 3));
        assert!(!Direction::AntiDiagonal.fits(1, 2, 3));
    }

    #[test]
    fn test_window_cells() {
        let cells = Direction::AntiDiagonal.window(Coord::new(0, 2));
        assert_eq!(cells, [Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)]);
        let cells = Direction::Diagonal.window(Coord::new(1, 1));
        assert_eq!(cells[2], Coord::new(3, 3));
    }

    #[test]
    fn test_coord_display() {
        assert_eq!(Coord::new(3, 7).to_string(), "(3,7)");
        let t = Triple::new([Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]);
        assert_eq!(t.to_string(), "[(0,0), (1,0), (2,0)]");
    }
}
