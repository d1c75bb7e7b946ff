use std::collections::VecDeque;

use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::{
    algorithms::GeneratorError,
    array::Array2D,
    dims::Dims,
    gameboard::cell::{Cell, Direction},
};

/// Square grid of locations with one-way passages between neighbors.
///
/// A passage from `a` to `b` is recorded on `a` only. Traversal (see
/// [`crate::algorithms::solve`]) follows those forward records, while anything asking whether two
/// locations are joined at all has to look at both ends, see [`MazeBoard::is_linked`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeBoard {
    pub(crate) cells: Array2D<Cell>,
}

impl MazeBoard {
    pub fn new(width: i32) -> Result<Self, GeneratorError> {
        if width <= 0 {
            return Err(GeneratorError::InvalidSize(width));
        }

        Ok(MazeBoard {
            cells: Array2D::new(Cell::new(), width as usize, width as usize),
        })
    }

    pub fn width(&self) -> i32 {
        self.cells.size().0
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.cells.get(pos).is_some()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        self.cells.iter_pos()
    }

    /// Returns the direction leading from `cell` to `cell2`, `None` if they are not adjacent.
    pub fn which_way_between(cell: Dims, cell2: Dims) -> Option<Direction> {
        match cell2 - cell {
            Dims(0, 1) => Some(Direction::North),
            Dims(1, 0) => Some(Direction::East),
            Dims(0, -1) => Some(Direction::South),
            Dims(-1, 0) => Some(Direction::West),
            _ => None,
        }
    }

    /// Neighbor of `pos` in the given direction, if it lies inside the grid.
    pub fn neighbor(&self, pos: Dims, dir: Direction) -> Option<Dims> {
        let next = pos + dir.offset();
        self.is_in_bounds(next).then_some(next)
    }

    /// Neighbors joined with `pos`, whichever end holds the passage record.
    pub fn linked_neighbors(&self, pos: Dims) -> SmallVec<[Dims; 4]> {
        Direction::get_in_order()
            .into_iter()
            .filter(|&dir| self.is_linked(pos, dir))
            .filter_map(|dir| self.neighbor(pos, dir))
            .collect()
    }

    /// Records a one-way passage from `a` to the adjacent location `b`.
    ///
    /// Nothing happens when the locations are not adjacent or `a` lies outside the grid.
    pub fn add_passage(&mut self, a: Dims, b: Dims) {
        if let Some(dir) = Self::which_way_between(a, b) {
            self.add_passage_towards(a, dir);
        }
    }

    /// Sets the passage flag of `a` in the given direction. Out-of-grid origin is ignored.
    pub fn add_passage_towards(&mut self, a: Dims, dir: Direction) {
        if let Some(cell) = self.cells.get_mut(a) {
            cell.make_passage(dir);
        }
    }

    /// Whether a passage was recorded on `pos` towards `dir`. This does not look at the neighbor.
    pub fn has_passage(&self, pos: Dims, dir: Direction) -> bool {
        self.cells.get(pos).is_some_and(|cell| cell.is_open(dir))
    }

    /// Whether `pos` and its neighbor in `dir` are joined, no matter which of them holds the
    /// passage record.
    pub fn is_linked(&self, pos: Dims, dir: Direction) -> bool {
        match self.neighbor(pos, dir) {
            Some(other) => self.has_passage(pos, dir) || self.has_passage(other, dir.reverse()),
            None => false,
        }
    }

    pub fn passage_count(&self) -> usize {
        self.cells.iter().map(Cell::open_count).sum()
    }

    /// Number of distinct joined neighbor pairs.
    pub fn link_count(&self) -> usize {
        self.iter_pos()
            .map(|pos| {
                [Direction::North, Direction::East]
                    .into_iter()
                    .filter(|&dir| self.is_linked(pos, dir))
                    .count()
            })
            .sum()
    }

    /// Locations reachable from `from` when passages are walked in either direction.
    pub fn linked_component(&self, from: Dims) -> HashSet<Dims> {
        let mut seen = HashSet::with_capacity(self.cell_count());
        if !self.is_in_bounds(from) {
            return seen;
        }

        let mut queue = VecDeque::new();
        seen.insert(from);
        queue.push_back(from);
        while let Some(pos) = queue.pop_front() {
            for next in self.linked_neighbors(pos) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        seen
    }

    /// Whether the undirected links form a spanning tree of the grid, so there is exactly one
    /// way between any two locations.
    pub fn is_perfect(&self) -> bool {
        self.link_count() + 1 == self.cell_count()
            && self.linked_component(Dims::ZERO).len() == self.cell_count()
    }
}

#[cfg(test)]
mod tests {
    use super::MazeBoard;
    use crate::{dims::Dims, gameboard::Direction};

    #[test]
    fn add_passage_sets_forward_flag_only() {
        let mut board = MazeBoard::new(10).unwrap();
        board.add_passage(Dims(1, 2), Dims(2, 2));

        assert!(board.has_passage(Dims(1, 2), Direction::East));
        assert!(!board.has_passage(Dims(1, 2), Direction::North));
        assert!(!board.has_passage(Dims(2, 2), Direction::West));
        assert_eq!(board.passage_count(), 1);
    }

    #[test]
    fn add_passage_in_every_direction() {
        let mut board = MazeBoard::new(10).unwrap();
        let here = Dims(1, 2);
        board.add_passage(here, Dims(1, 3));
        board.add_passage(here, Dims(0, 2));
        board.add_passage(here, Dims(1, 1));

        assert!(board.has_passage(here, Direction::North));
        assert!(board.has_passage(here, Direction::West));
        assert!(board.has_passage(here, Direction::South));
        assert!(!board.has_passage(here, Direction::East));
    }

    #[test]
    fn add_passage_ignores_non_adjacent() {
        let mut board = MazeBoard::new(4).unwrap();
        board.add_passage(Dims(0, 0), Dims(2, 0));
        board.add_passage(Dims(0, 0), Dims(1, 1));
        board.add_passage(Dims(0, 0), Dims(0, 0));
        board.add_passage(Dims(-1, 0), Dims(0, 0));

        assert_eq!(board.passage_count(), 0);
    }

    #[test]
    fn links_are_seen_from_both_ends() {
        let mut board = MazeBoard::new(3).unwrap();
        board.add_passage(Dims(1, 1), Dims(1, 2));

        assert!(board.is_linked(Dims(1, 1), Direction::North));
        assert!(board.is_linked(Dims(1, 2), Direction::South));
        assert!(!board.has_passage(Dims(1, 2), Direction::South));
        assert!(!board.is_linked(Dims(2, 2), Direction::East));
    }

    #[test]
    fn invalid_width_is_rejected() {
        assert!(MazeBoard::new(0).is_err());
        assert!(MazeBoard::new(-3).is_err());
    }

    #[test]
    fn perfect_board_detection() {
        let mut board = MazeBoard::new(2).unwrap();
        board.add_passage(Dims(0, 0), Dims(0, 1));
        board.add_passage(Dims(0, 1), Dims(1, 1));
        assert!(!board.is_perfect());

        board.add_passage(Dims(1, 0), Dims(1, 1));
        assert!(board.is_perfect());

        // a cycle, four links for four locations
        board.add_passage(Dims(0, 0), Dims(1, 0));
        assert!(!board.is_perfect());
    }

    #[test]
    fn both_records_of_one_link_count_once() {
        let mut board = MazeBoard::new(2).unwrap();
        board.add_passage(Dims(0, 0), Dims(1, 0));
        board.add_passage(Dims(1, 0), Dims(0, 0));

        assert_eq!(board.passage_count(), 2);
        assert_eq!(board.link_count(), 1);
        assert_eq!(board.linked_component(Dims(1, 0)).len(), 2);
    }

    #[test]
    fn linked_neighbors_follow_either_record() {
        let mut board = MazeBoard::new(3).unwrap();
        board.add_passage(Dims(1, 1), Dims(1, 2));
        board.add_passage(Dims(2, 1), Dims(1, 1));
        board.add_passage(Dims(0, 0), Dims(0, 1));

        let linked = board.linked_neighbors(Dims(1, 1));
        assert_eq!(linked.as_slice(), &[Dims(1, 2), Dims(2, 1)]);
        assert_eq!(board.linked_neighbors(Dims(0, 1)).as_slice(), &[Dims(0, 0)]);
        assert!(board.linked_neighbors(Dims(2, 2)).is_empty());
        assert!(board.linked_neighbors(Dims(5, 5)).is_empty());
    }
}
