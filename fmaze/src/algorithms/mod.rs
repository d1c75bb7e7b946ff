pub mod growth;
pub mod list;
pub mod locations;
pub mod random;
pub mod solver;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{dims::Dims, gameboard::Maze};
pub use growth::Growth;
pub use locations::{Counts, LocationSet, LocationSets};
pub use random::{seeded, Random, RandomSource};
pub use solver::solve;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid maze width: {0}")]
    InvalidSize(i32),
    #[error("Position {0:?} is outside of the maze")]
    OutOfBounds(Dims),
    #[error("Generation stopped with {0} locations still unexplored")]
    Incomplete(usize),
}

/// What maze to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeSpec {
    /// Length of the grid side.
    pub width: i32,

    /// Entrance, where the growth starts. Defaults to `(0, 0)`.
    #[serde(default)]
    pub start: Option<Dims>,

    /// Exit. Defaults to the opposite corner.
    #[serde(default)]
    pub end: Option<Dims>,

    /// Seed of the maze.
    ///
    /// Used for deterministic generation.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl MazeSpec {
    pub fn new(width: i32) -> Self {
        MazeSpec {
            width,
            start: None,
            end: None,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn start(&self) -> Dims {
        self.start.unwrap_or(Dims::ZERO)
    }

    pub fn end(&self) -> Dims {
        self.end.unwrap_or(Dims(self.width - 1, self.width - 1))
    }
}

/// Generates complete mazes from a [`MazeSpec`].
#[derive(Debug, Clone)]
pub struct Generator {
    spec: MazeSpec,
}

impl Generator {
    pub fn new(spec: MazeSpec) -> Self {
        Generator { spec }
    }

    pub fn spec(&self) -> &MazeSpec {
        &self.spec
    }

    /// Prepares the growth state and the random generator, returning the seed in use.
    pub fn prepare(&self) -> Result<(Growth, Random, u64), GeneratorError> {
        let growth = Growth::new(self.spec.width, self.spec.start())?;

        let end = self.spec.end();
        if !growth.board().is_in_bounds(end) {
            return Err(GeneratorError::OutOfBounds(end));
        }

        let (rng, seed) = seeded(self.spec.seed);
        Ok((growth, rng, seed))
    }

    /// Runs the growth to completion, `observer` sees the state after every step.
    pub fn generate(&self, observer: impl FnMut(&Growth)) -> Result<Maze, GeneratorError> {
        let (mut growth, mut rng, seed) = self.prepare()?;
        log::debug!("Generating {}×{} maze, seed {}", self.spec.width, self.spec.width, seed);

        let steps = growth.run(&mut rng, observer);
        if !growth.is_finished() {
            return Err(GeneratorError::Incomplete(growth.counts().unexplored));
        }
        log::debug!("Maze generated in {} steps", steps);

        Ok(Maze {
            board: growth.into_board(),
            start: self.spec.start(),
            end: self.spec.end(),
        })
    }
}
