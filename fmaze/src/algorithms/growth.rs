use super::{
    locations::{Counts, LocationSets},
    GeneratorError, RandomSource,
};
use crate::{
    dims::Dims,
    gameboard::{Direction, MazeBoard},
    progress::Progress,
};

/// Incremental maze growth.
///
/// Every step either reaches one new location from the active one, or retires the active one
/// into the done set. The active location is the one reached by the previous step, and a random
/// frontier location after a failed step. This keeps carving long corridors until they run into
/// a dead end.
#[derive(Debug, Clone)]
pub struct Growth {
    board: MazeBoard,
    sets: LocationSets,
    cursor: Option<Dims>,
}

impl Growth {
    pub fn new(width: i32, start: Dims) -> Result<Self, GeneratorError> {
        let board = MazeBoard::new(width)?;
        if !board.is_in_bounds(start) {
            return Err(GeneratorError::OutOfBounds(start));
        }

        Ok(Self::from_parts(board, LocationSets::new(width, start)))
    }

    /// Resumes growth from an explicit state, with no active location.
    pub fn from_parts(board: MazeBoard, sets: LocationSets) -> Self {
        Growth {
            board,
            sets,
            cursor: None,
        }
    }

    pub fn board(&self) -> &MazeBoard {
        &self.board
    }

    pub fn into_board(self) -> MazeBoard {
        self.board
    }

    pub fn sets(&self) -> &LocationSets {
        &self.sets
    }

    pub fn counts(&self) -> Counts {
        self.sets.counts()
    }

    /// Location reached by the last step, `None` after a failed one.
    pub fn cursor(&self) -> Option<Dims> {
        self.cursor
    }

    pub fn is_finished(&self) -> bool {
        self.sets.unexplored.is_empty()
    }

    pub fn progress(&self) -> Progress {
        let from = self.board.cell_count();
        let mut progress = Progress::new(from - self.sets.unexplored.len(), from);
        progress.is_done = self.is_finished();
        progress
    }

    /// Opens a passage from `here` to its neighbor in `dir`, if that neighbor is unexplored.
    ///
    /// Returns the neighbor on success. The location sets are left untouched.
    pub fn expand_location(&mut self, here: Dims, dir: Direction) -> Option<Dims> {
        let there = here + dir.offset();
        if !self.sets.unexplored.contains(there) {
            return None;
        }

        self.board.add_passage(here, there);
        Some(there)
    }

    /// Performs a single growth step from `last_expanded`, or from a random frontier location
    /// when it's `None`.
    ///
    /// Returns the newly reached location, or `None` when the active location had no unexplored
    /// neighbor and was moved to done.
    pub fn expand_once(
        &mut self,
        last_expanded: Option<Dims>,
        rng: &mut impl RandomSource,
    ) -> Option<Dims> {
        let here = match last_expanded {
            Some(here) => here,
            None => match self.sets.frontier.choose(rng) {
                Some(here) => here,
                None => {
                    if !self.is_finished() {
                        log::warn!(
                            "Frontier is empty with {} unexplored locations left",
                            self.sets.unexplored.len()
                        );
                    }
                    return None;
                }
            },
        };

        let first = Direction::from_index(rng.uniform(Direction::COUNT));
        for dir in first.rotation() {
            if let Some(there) = self.expand_location(here, dir) {
                self.sets.reach(there);
                return Some(there);
            }
        }

        self.sets.retire(here);
        None
    }

    /// [`Growth::expand_once`] driven by the cursor, which is updated with the result.
    pub fn step(&mut self, rng: &mut impl RandomSource) -> Option<Dims> {
        self.cursor = self.expand_once(self.cursor, rng);
        self.cursor
    }

    /// Steps until nothing is left unexplored, calling `observer` after every step.
    ///
    /// Returns the number of steps taken.
    pub fn run(
        &mut self,
        rng: &mut impl RandomSource,
        mut observer: impl FnMut(&Growth),
    ) -> usize {
        let mut steps = 0;
        while !self.is_finished() {
            let before = self.counts();
            let reached = self.step(rng);
            steps += 1;
            observer(self);

            log::trace!("step {}: {:?} -> {:?}", steps, reached, self.counts());
            if reached.is_none() && self.counts() == before {
                // only possible with a frontier that can't reach the unexplored locations
                break;
            }
        }

        steps
    }
}
