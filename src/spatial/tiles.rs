//! Tile classification and the fixed pipe connectivity table
//!
//! Every symbol in a pipe sketch maps to a [`Tile`]. Only the six pipe shapes
//! carry openings; ground, the start marker and anything unrecognised connect
//! to nothing until the start is resolved from its neighbours.

use crate::spatial::position::Direction;

/// The six pipe shapes, each opening towards exactly two directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pipe {
    /// `|` connecting north and south
    Vertical,
    /// `-` connecting east and west
    Horizontal,
    /// `L` connecting north and east
    BendNE,
    /// `J` connecting north and west
    BendNW,
    /// `7` connecting south and west
    BendSW,
    /// `F` connecting south and east
    BendSE,
}

impl Pipe {
    /// All pipe shapes in symbol table order
    pub const ALL: [Self; 6] = [
        Self::Vertical,
        Self::Horizontal,
        Self::BendNE,
        Self::BendNW,
        Self::BendSW,
        Self::BendSE,
    ];

    /// The two directions this pipe opens towards
    pub const fn openings(self) -> [Direction; 2] {
        match self {
            Self::Vertical => [Direction::North, Direction::South],
            Self::Horizontal => [Direction::East, Direction::West],
            Self::BendNE => [Direction::North, Direction::East],
            Self::BendNW => [Direction::North, Direction::West],
            Self::BendSW => [Direction::South, Direction::West],
            Self::BendSE => [Direction::South, Direction::East],
        }
    }

    /// Whether one of the openings faces `direction`
    pub fn opens_towards(self, direction: Direction) -> bool {
        self.openings().contains(&direction)
    }

    /// The pipe shape whose openings are exactly `a` and `b`, in either order
    pub fn from_openings(a: Direction, b: Direction) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|pipe| a != b && pipe.opens_towards(a) && pipe.opens_towards(b))
    }

    /// Sketch symbol for this shape
    pub const fn symbol(self) -> char {
        match self {
            Self::Vertical => '|',
            Self::Horizontal => '-',
            Self::BendNE => 'L',
            Self::BendNW => 'J',
            Self::BendSW => '7',
            Self::BendSE => 'F',
        }
    }

    /// Parse a sketch symbol into a pipe shape
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '|' => Some(Self::Vertical),
            '-' => Some(Self::Horizontal),
            'L' => Some(Self::BendNE),
            'J' => Some(Self::BendNW),
            '7' => Some(Self::BendSW),
            'F' => Some(Self::BendSE),
            _ => None,
        }
    }
}

/// Classification of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// A pipe with a known shape
    Pipe(Pipe),
    /// `.` with no pipe, also used for the padding ring
    Ground,
    /// `S`, a pipe of unknown shape
    Start,
    /// Any symbol outside the sketch alphabet
    Unknown(char),
}

impl Tile {
    /// Symbol used for ground tiles
    pub const GROUND_SYMBOL: char = '.';
    /// Symbol used for the start marker
    pub const START_SYMBOL: char = 'S';

    /// Classify a sketch symbol; never fails
    pub const fn from_symbol(symbol: char) -> Self {
        match symbol {
            Self::GROUND_SYMBOL => Self::Ground,
            Self::START_SYMBOL => Self::Start,
            other => match Pipe::from_symbol(other) {
                Some(pipe) => Self::Pipe(pipe),
                None => Self::Unknown(other),
            },
        }
    }

    /// Sketch symbol for this tile
    pub const fn symbol(self) -> char {
        match self {
            Self::Pipe(pipe) => pipe.symbol(),
            Self::Ground => Self::GROUND_SYMBOL,
            Self::Start => Self::START_SYMBOL,
            Self::Unknown(symbol) => symbol,
        }
    }

    /// Static connectivity rule, absent for everything but pipes
    pub const fn openings(self) -> Option<[Direction; 2]> {
        match self {
            Self::Pipe(pipe) => Some(pipe.openings()),
            Self::Ground | Self::Start | Self::Unknown(_) => None,
        }
    }
}
