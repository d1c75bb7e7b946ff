use serde::{Deserialize, Serialize};

use crate::{
    algorithms::GeneratorError,
    dims::Dims,
    gameboard::{Direction, Maze, MazeBoard},
};

/// Snapshot of a maze (and optionally its solution) for export.
///
/// Passages are listed as `(origin, direction)` records, keeping the one-way storage intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableMaze {
    pub width: i32,
    pub start: Dims,
    pub end: Dims,
    pub passages: Vec<(Dims, Direction)>,
    #[serde(default)]
    pub solution: Option<Vec<Dims>>,
}

impl SerializableMaze {
    pub fn new(maze: &Maze, solution: Option<Vec<Dims>>) -> Self {
        let board = &maze.board;
        let passages = board
            .iter_pos()
            .flat_map(|pos| {
                Direction::get_in_order()
                    .into_iter()
                    .filter(move |&dir| board.has_passage(pos, dir))
                    .map(move |dir| (pos, dir))
            })
            .collect();

        Self {
            width: maze.width(),
            start: maze.start,
            end: maze.end,
            passages,
            solution,
        }
    }

    pub fn to_board(&self) -> Result<MazeBoard, GeneratorError> {
        let mut board = MazeBoard::new(self.width)?;
        for &(pos, dir) in &self.passages {
            board.add_passage_towards(pos, dir);
        }

        Ok(board)
    }

    pub fn to_maze(&self) -> Result<Maze, GeneratorError> {
        Ok(Maze {
            board: self.to_board()?,
            start: self.start,
            end: self.end,
        })
    }
}
