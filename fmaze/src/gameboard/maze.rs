use crate::{algorithms::solve, dims::Dims, gameboard::board::MazeBoard};

/// Finished maze together with its entrance and exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub board: MazeBoard,
    pub start: Dims,
    pub end: Dims,
}

impl Maze {
    pub fn width(&self) -> i32 {
        self.board.width()
    }

    /// Path from the entrance to the exit, following the recorded passages.
    pub fn solve(&self) -> Option<Vec<Dims>> {
        solve(&self.board, self.start, self.end)
    }
}
