//! Grid coordinates, compass directions and neighbour enumeration
//!
//! Positions are signed so that offsets applied at the padding ring never
//! underflow; lookups outside the grid simply find no tile.

use std::fmt;

use crate::spatial::tiles::Tile;

/// Row/column coordinate inside a padded grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index, growing southwards
    pub row: i32,
    /// Column index, growing eastwards
    pub col: i32,
}

impl Position {
    /// Create a position from its row and column
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Position one step away in `direction`
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.offset();
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Direction leading from `self` to an orthogonally adjacent `other`
    pub fn direction_to(self, other: Self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.step(direction) == other)
    }

    /// Array index `[row, col]` if both components are non-negative
    pub fn as_index(self) -> Option<[usize; 2]> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        Some([row, col])
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four compass directions a pipe can open towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row - 1
    North,
    /// Towards row + 1
    South,
    /// Towards col + 1
    East,
    /// Towards col - 1
    West,
}

impl Direction {
    /// All directions in a fixed order
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Relative `(row, col)` offset of one step in this direction
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (-1, 0),
            Self::South => (1, 0),
            Self::East => (0, 1),
            Self::West => (0, -1),
        }
    }
}

/// The 8 positions surrounding `pos`, row by row, excluding `pos` itself
pub const fn neighbors8(pos: Position) -> [Position; 8] {
    let Position { row, col } = pos;
    [
        Position::new(row - 1, col - 1),
        Position::new(row - 1, col),
        Position::new(row - 1, col + 1),
        Position::new(row, col - 1),
        Position::new(row, col + 1),
        Position::new(row + 1, col - 1),
        Position::new(row + 1, col),
        Position::new(row + 1, col + 1),
    ]
}

/// Absolute positions the tile at `pos` connects to
///
/// Returns `None` for ground, the unresolved start or unrecognised symbols.
pub fn connected_positions(pos: Position, tile: Tile) -> Option<[Position; 2]> {
    let [first, second] = tile.openings()?;
    Some([pos.step(first), pos.step(second)])
}
