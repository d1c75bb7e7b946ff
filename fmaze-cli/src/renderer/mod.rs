pub mod helpers;

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    style::{ContentStyle, PrintStyledContent, StyledContent},
    QueueableCommand as _,
};
use fmaze::{array::Array2D, Dims, Direction, Maze, MazeBoard};

use crate::settings::ColorScheme;
use helpers::{double_line_corner, from_maze_to_real, maze_render_size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall(char),
    Open,
    Solution,
    Cursor,
}

impl Tile {
    pub fn glyph(self) -> char {
        match self {
            Tile::Wall(c) => c,
            Tile::Open => ' ',
            Tile::Solution => '•',
            Tile::Cursor => '@',
        }
    }

    pub fn style(self, colors: &ColorScheme) -> ContentStyle {
        match self {
            Tile::Wall(_) => colors.walls(),
            Tile::Open => colors.passages(),
            Tile::Solution => colors.solutions(),
            Tile::Cursor => colors.cursors(),
        }
    }
}

/// Tile offset of a maze direction, tile rows grow southwards.
fn real_offset(dir: Direction) -> Dims {
    let Dims(x, y) = dir.offset();
    Dims(x, -y)
}

/// Border tile next to `pos`, trying the sides in the given order.
fn border_opening(pos: Dims, width: i32, sides: [Direction; 4]) -> Option<Dims> {
    sides
        .into_iter()
        .find(|&dir| {
            let next = pos + dir.offset();
            !(next.all_non_negative() && next.0 < width && next.1 < width)
        })
        .map(|dir| from_maze_to_real(pos, width) + real_offset(dir))
}

/// Text picture of a maze, one tile per character.
#[derive(Debug, Clone)]
pub struct MazeImage {
    tiles: Array2D<Tile>,
}

impl MazeImage {
    /// Draws the board alone. Two locations are joined when either of them holds the passage.
    pub fn new(board: &MazeBoard, entrance: Dims, exit: Dims) -> Self {
        use Direction::*;

        let width = board.width();
        let size = maze_render_size(width);
        let mut walls = Array2D::new(true, size.0 as usize, size.1 as usize);

        for pos in board.iter_pos() {
            let real = from_maze_to_real(pos, width);
            walls[real] = false;
            for dir in [North, East] {
                if board.is_linked(pos, dir) {
                    walls[real + real_offset(dir)] = false;
                }
            }
        }

        let openings = [
            border_opening(entrance, width, [West, East, South, North]),
            border_opening(exit, width, [East, West, North, South]),
        ];
        for opening in openings.into_iter().flatten() {
            walls[opening] = false;
        }

        let is_wall = |pos: Dims| walls.get(pos).copied().unwrap_or(false);
        let mut tiles = Array2D::new(Tile::Open, size.0 as usize, size.1 as usize);
        for pos in walls.iter_pos() {
            if is_wall(pos) {
                tiles[pos] = Tile::Wall(double_line_corner(
                    is_wall(pos + Dims(-1, 0)),
                    is_wall(pos + Dims(0, -1)),
                    is_wall(pos + Dims(1, 0)),
                    is_wall(pos + Dims(0, 1)),
                ));
            }
        }

        MazeImage { tiles }
    }

    pub fn from_maze(maze: &Maze) -> Self {
        Self::new(&maze.board, maze.start, maze.end)
    }

    pub fn size(&self) -> Dims {
        self.tiles.size()
    }

    pub fn tile(&self, real: Dims) -> Option<Tile> {
        self.tiles.get(real).copied()
    }

    /// Marks the path locations and the links between them, including the border openings
    /// at its ends.
    pub fn with_solution(mut self, path: &[Dims], width: i32) -> Self {
        let reals: Vec<_> = path.iter().map(|&pos| from_maze_to_real(pos, width)).collect();

        for pair in reals.windows(2) {
            let middle = Dims((pair[0].0 + pair[1].0) / 2, (pair[0].1 + pair[1].1) / 2);
            self.mark(middle, Tile::Solution);
        }
        for &real in &reals {
            self.mark(real, Tile::Solution);
        }

        if let (Some(&first), Some(&last)) = (reals.first(), reals.last()) {
            for end in [first, last] {
                for step in [Dims(-1, 0), Dims(1, 0), Dims(0, -1), Dims(0, 1)] {
                    let border = end + step;
                    let on_edge = border.0 == 0
                        || border.1 == 0
                        || border.0 == self.size().0 - 1
                        || border.1 == self.size().1 - 1;
                    if on_edge && self.tile(border) == Some(Tile::Open) {
                        self.mark(border, Tile::Solution);
                    }
                }
            }
        }

        self
    }

    pub fn with_cursor(mut self, cursor: Option<Dims>, width: i32) -> Self {
        if let Some(cursor) = cursor {
            self.mark(from_maze_to_real(cursor, width), Tile::Cursor);
        }
        self
    }

    fn mark(&mut self, real: Dims, tile: Tile) {
        if let Some(slot) = self.tiles.get_mut(real) {
            *slot = tile;
        }
    }

    /// Plain rows, without any styling.
    pub fn lines(&self) -> Vec<String> {
        (0..self.size().1)
            .map(|y| {
                (0..self.size().0)
                    .map(|x| self.tiles[Dims(x, y)].glyph())
                    .collect()
            })
            .collect()
    }

    fn queue_row(&self, out: &mut impl Write, y: i32, colors: &ColorScheme) -> io::Result<()> {
        for x in 0..self.size().0 {
            let tile = self.tiles[Dims(x, y)];
            out.queue(PrintStyledContent(StyledContent::new(
                tile.style(colors),
                tile.glyph(),
            )))?;
        }
        Ok(())
    }

    /// Queues the picture as an animation frame, every row placed at its own line from the top
    /// left corner.
    pub fn queue_frame(&self, out: &mut impl Write, colors: &ColorScheme) -> io::Result<()> {
        for y in 0..self.size().1 {
            out.queue(MoveTo(0, y as u16))?;
            self.queue_row(out, y, colors)?;
        }
        out.flush()
    }

    /// Writes the picture at the current position, one row per line.
    pub fn print(&self, out: &mut impl Write, colors: &ColorScheme) -> io::Result<()> {
        for y in 0..self.size().1 {
            self.queue_row(out, y, colors)?;
            writeln!(out)?;
        }
        out.flush()
    }
}
