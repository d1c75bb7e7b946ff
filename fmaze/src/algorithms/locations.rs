use hashbrown::HashMap;

use super::{list::choose_randomly_from, RandomSource};
use crate::dims::Dims;

/// Unordered collection of grid locations with constant time membership, removal and uniform
/// random choice.
///
/// Removing a location moves the last stored location into its slot, everything else keeps its
/// place.
#[derive(Debug, Clone, Default)]
pub struct LocationSet {
    items: Vec<Dims>,
    index: HashMap<Dims, usize>,
}

impl LocationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, pos: Dims) -> bool {
        self.index.contains_key(&pos)
    }

    pub fn position(&self, pos: Dims) -> Option<usize> {
        self.index.get(&pos).copied()
    }

    /// Adds the location at the end, returns `false` if it was already present.
    pub fn insert(&mut self, pos: Dims) -> bool {
        if self.contains(pos) {
            return false;
        }

        self.index.insert(pos, self.items.len());
        self.items.push(pos);
        true
    }

    /// Removes the location, returns `false` if it wasn't present.
    pub fn remove(&mut self, pos: Dims) -> bool {
        let Some(idx) = self.index.remove(&pos) else {
            return false;
        };

        self.items.swap_remove(idx);
        if let Some(&moved) = self.items.get(idx) {
            self.index.insert(moved, idx);
        }
        true
    }

    pub fn choose(&self, rng: &mut impl RandomSource) -> Option<Dims> {
        choose_randomly_from(&self.items, self.items.len(), rng).copied()
    }

    pub fn as_slice(&self) -> &[Dims] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = Dims> + '_ {
        self.items.iter().copied()
    }
}

impl FromIterator<Dims> for LocationSet {
    fn from_iter<I: IntoIterator<Item = Dims>>(iter: I) -> Self {
        let mut set = LocationSet::new();
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

/// Sizes of the three location sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub done: usize,
    pub frontier: usize,
    pub unexplored: usize,
}

impl Counts {
    pub fn total(&self) -> usize {
        self.done + self.frontier + self.unexplored
    }

    /// `[done, frontier, unexplored]`
    pub fn as_array(&self) -> [usize; 3] {
        [self.done, self.frontier, self.unexplored]
    }
}

/// Working state of the generator, a partition of the grid.
///
/// - `unexplored`: not reached by any passage yet
/// - `frontier`: reached, may still open a passage into an unexplored neighbor
/// - `done`: has no unexplored neighbor left
///
/// Locations only ever move unexplored -> frontier -> done.
#[derive(Debug, Clone, Default)]
pub struct LocationSets {
    pub done: LocationSet,
    pub frontier: LocationSet,
    pub unexplored: LocationSet,
}

impl LocationSets {
    /// Frontier holds just `start`, everything else in the `width`×`width` grid is unexplored.
    pub fn new(width: i32, start: Dims) -> Self {
        let cell_count = (width.max(0) as usize).pow(2);

        let mut sets = LocationSets {
            done: LocationSet::with_capacity(cell_count),
            frontier: LocationSet::with_capacity(cell_count),
            unexplored: LocationSet::with_capacity(cell_count),
        };

        sets.frontier.insert(start);
        for pos in Dims::iter_fill(Dims::ZERO, Dims(width, width)) {
            if pos != start {
                sets.unexplored.insert(pos);
            }
        }

        sets
    }

    pub fn from_parts(
        done: impl IntoIterator<Item = Dims>,
        frontier: impl IntoIterator<Item = Dims>,
        unexplored: impl IntoIterator<Item = Dims>,
    ) -> Self {
        LocationSets {
            done: done.into_iter().collect(),
            frontier: frontier.into_iter().collect(),
            unexplored: unexplored.into_iter().collect(),
        }
    }

    pub fn counts(&self) -> Counts {
        Counts {
            done: self.done.len(),
            frontier: self.frontier.len(),
            unexplored: self.unexplored.len(),
        }
    }

    /// Moves `pos` from unexplored to frontier.
    pub fn reach(&mut self, pos: Dims) {
        self.unexplored.remove(pos);
        self.frontier.insert(pos);
    }

    /// Moves `pos` from frontier to done.
    pub fn retire(&mut self, pos: Dims) {
        self.frontier.remove(pos);
        self.done.insert(pos);
    }

    /// Checks that the sets are pairwise disjoint and together cover exactly the grid.
    pub fn is_partition_of(&self, width: i32) -> bool {
        let in_grid = |pos: Dims| pos.all_non_negative() && pos.0 < width && pos.1 < width;
        let sets = [&self.done, &self.frontier, &self.unexplored];

        let disjoint = sets.iter().enumerate().all(|(i, set)| {
            set.iter()
                .all(|pos| sets.iter().skip(i + 1).all(|other| !other.contains(pos)))
        });

        disjoint
            && sets.iter().all(|set| set.iter().all(in_grid))
            && self.counts().total() == (width.max(0) as usize).pow(2)
    }
}
