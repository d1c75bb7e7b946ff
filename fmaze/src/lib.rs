//! Perfect maze generation by randomized frontier growth, and path solving over the result.

pub mod algorithms;
pub mod array;
pub mod dims;
pub mod gameboard;
pub mod progress;

pub use algorithms::{solve, Generator, GeneratorError, MazeSpec};
pub use dims::Dims;
pub use gameboard::{Direction, Maze, MazeBoard};
