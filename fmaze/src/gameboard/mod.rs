pub mod board;
pub use board::MazeBoard;
pub mod cell;
pub use cell::{Cell, Direction};
pub mod maze;
pub use maze::Maze;
pub mod ser;
pub use ser::SerializableMaze;
