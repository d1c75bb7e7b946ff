use serde::{Deserialize, Serialize};

use crate::dims::Dims;

/// One of the four grid directions.
///
/// The discriminant is the direction index used for rotation, `North` is `0` and the indexes
/// go clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    pub const COUNT: usize = 4;

    pub fn get_in_order() -> [Direction; 4] {
        use Direction::*;
        [North, East, South, West]
    }

    pub fn from_index(index: usize) -> Direction {
        Self::get_in_order()[index % Self::COUNT]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn offset(self) -> Dims {
        match self {
            Self::North => Dims(0, 1),
            Self::East => Dims(1, 0),
            Self::South => Dims(0, -1),
            Self::West => Dims(-1, 0),
        }
    }

    /// Next direction in the rotation order, wrapping from `West` back to `North`.
    pub fn next(self) -> Direction {
        Self::from_index(self.index() + 1)
    }

    pub fn reverse(self) -> Direction {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// All four directions, starting at `self` and continuing in rotation order.
    pub fn rotation(self) -> impl Iterator<Item = Direction> {
        (0..Self::COUNT).map(move |i| Self::from_index(self.index() + i))
    }
}

/// Outgoing passages of a single location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    north: bool,
    east: bool,
    south: bool,
    west: bool,
}

impl Cell {
    pub fn new() -> Cell {
        Cell::default()
    }

    pub fn make_passage(&mut self, dir: Direction) {
        match dir {
            Direction::North => self.north = true,
            Direction::East => self.east = true,
            Direction::South => self.south = true,
            Direction::West => self.west = true,
        }
    }

    pub fn is_open(&self, dir: Direction) -> bool {
        match dir {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    pub fn open_count(&self) -> usize {
        Direction::get_in_order()
            .into_iter()
            .filter(|&dir| self.is_open(dir))
            .count()
    }
}
