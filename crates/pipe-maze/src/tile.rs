//! Tile symbols and the connectivity table.
//!
//! Every maze character maps to a [`Symbol`], and every symbol maps to the
//! set of cardinal directions its pipe opens towards.

use serde::{Deserialize, Serialize};

use crate::error::MazeError;

/// Cardinal direction on the grid. Row indices grow towards the south.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions in walk-preference order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// (row, col) offset of one step in this direction
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    fn mask(self) -> u8 {
        match self {
            Direction::North => 0b0001,
            Direction::South => 0b0010,
            Direction::East => 0b0100,
            Direction::West => 0b1000,
        }
    }
}

/// A set of cardinal directions, stored as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Directions(u8);

impl Directions {
    pub const EMPTY: Directions = Directions(0);

    pub fn of(dirs: &[Direction]) -> Self {
        dirs.iter().fold(Self::EMPTY, |set, &d| set.with(d))
    }

    pub fn with(self, dir: Direction) -> Self {
        Directions(self.0 | dir.mask())
    }

    pub fn contains(self, dir: Direction) -> bool {
        self.0 & dir.mask() != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate members in North, South, East, West order
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.contains(d))
    }
}

impl FromIterator<Direction> for Directions {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, |set, d| set.with(d))
    }
}

/// A maze tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub enum Symbol {
    /// `|`
    Vertical,
    /// `-`
    Horizontal,
    /// `L`
    BendNE,
    /// `J`
    BendNW,
    /// `7`
    BendSW,
    /// `F`
    BendSE,
    /// `.`
    Ground,
    /// `S`, a pipe of unknown shape
    Start,
}

impl Symbol {
    /// Every symbol that is a two-legged pipe.
    pub const PIPES: [Symbol; 6] = [
        Symbol::Vertical,
        Symbol::Horizontal,
        Symbol::BendNE,
        Symbol::BendNW,
        Symbol::BendSW,
        Symbol::BendSE,
    ];

    /// Directions this tile connects to.
    ///
    /// `Start` reports no connections: its shape is only known once it has
    /// been resolved from the neighbouring tiles.
    pub fn connections(self) -> Directions {
        use Direction::*;
        match self {
            Symbol::Vertical => Directions::of(&[North, South]),
            Symbol::Horizontal => Directions::of(&[East, West]),
            Symbol::BendNE => Directions::of(&[North, East]),
            Symbol::BendNW => Directions::of(&[North, West]),
            Symbol::BendSW => Directions::of(&[South, West]),
            Symbol::BendSE => Directions::of(&[South, East]),
            Symbol::Ground | Symbol::Start => Directions::EMPTY,
        }
    }

    /// Check whether this tile has a leg in the given direction
    pub fn connects(self, dir: Direction) -> bool {
        self.connections().contains(dir)
    }

    /// The pipe whose legs are exactly `dirs`, if any
    pub fn from_connections(dirs: Directions) -> Option<Symbol> {
        Self::PIPES
            .into_iter()
            .find(|pipe| pipe.connections() == dirs)
    }

    pub fn to_char(self) -> char {
        match self {
            Symbol::Vertical => '|',
            Symbol::Horizontal => '-',
            Symbol::BendNE => 'L',
            Symbol::BendNW => 'J',
            Symbol::BendSW => '7',
            Symbol::BendSE => 'F',
            Symbol::Ground => '.',
            Symbol::Start => 'S',
        }
    }

    pub fn from_char(ch: char) -> Option<Symbol> {
        match ch {
            '|' => Some(Symbol::Vertical),
            '-' => Some(Symbol::Horizontal),
            'L' => Some(Symbol::BendNE),
            'J' => Some(Symbol::BendNW),
            '7' => Some(Symbol::BendSW),
            'F' => Some(Symbol::BendSE),
            '.' => Some(Symbol::Ground),
            'S' => Some(Symbol::Start),
            _ => None,
        }
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> char {
        symbol.to_char()
    }
}

impl TryFrom<char> for Symbol {
    type Error = MazeError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Symbol::from_char(ch).ok_or(MazeError::UnknownCharacter(ch))
    }
}
