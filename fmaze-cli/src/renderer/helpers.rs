use fmaze::Dims;

/// Size of the drawn maze, every location and every link between two of them takes one tile.
pub fn maze_render_size(width: i32) -> Dims {
    Dims(width * 2 + 1, width * 2 + 1)
}

/// Tile of the given maze location. Maze `y` grows north, tile rows grow down.
pub fn from_maze_to_real(pos: Dims, width: i32) -> Dims {
    Dims(pos.0 * 2 + 1, (width - 1 - pos.1) * 2 + 1)
}

pub fn double_line_corner(left: bool, top: bool, right: bool, bottom: bool) -> char {
    match (left, top, right, bottom) {
        (false, false, false, false) => '▪',
        (false, false, false, true) => '║',
        (false, false, true, false) => '═',
        (false, false, true, true) => '╔',
        (false, true, false, false) => '║',
        (false, true, false, true) => '║',
        (false, true, true, false) => '╚',
        (false, true, true, true) => '╠',
        (true, false, false, false) => '═',
        (true, false, false, true) => '╗',
        (true, false, true, false) => '═',
        (true, false, true, true) => '╦',
        (true, true, false, false) => '╝',
        (true, true, false, true) => '╣',
        (true, true, true, false) => '╩',
        (true, true, true, true) => '╬',
    }
}
