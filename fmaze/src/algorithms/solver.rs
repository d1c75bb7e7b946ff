use hashbrown::HashSet;

use crate::{
    dims::Dims,
    gameboard::{Direction, MazeBoard},
};

/// Finds the path from `start` to `goal`, following only the passages recorded on the location
/// being left.
///
/// Directions are tried in `North, East, South, West` order and the first path found wins, which
/// on a perfect maze is the only one. A link recorded solely on the far side is never walked
/// backwards, so such a maze can have no path here even though it is connected.
///
/// The search is depth first with an explicit stack, so corridors as long as the whole grid
/// don't exhaust the call stack.
pub fn solve(board: &MazeBoard, start: Dims, goal: Dims) -> Option<Vec<Dims>> {
    // every frame is a location on the current path and the next direction to try from it
    let mut stack: Vec<(Dims, usize)> = vec![(start, 0)];
    let mut visited = HashSet::new();
    visited.insert(start);

    while let Some((pos, next_dir)) = stack.last_mut() {
        if *pos == goal {
            return Some(stack.iter().map(|&(pos, _)| pos).collect());
        }

        let from = *pos;
        let open = (*next_dir..Direction::COUNT)
            .map(Direction::from_index)
            .find(|&dir| board.has_passage(from, dir));

        match open {
            Some(dir) => {
                *next_dir = dir.index() + 1;
                let next = from + dir.offset();
                if visited.insert(next) {
                    stack.push((next, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::solve;
    use crate::{
        dims::Dims,
        gameboard::{Direction, MazeBoard},
    };

    fn board_from(width: i32, layout: &[(Dims, &[Direction])]) -> MazeBoard {
        let mut board = MazeBoard::new(width).unwrap();
        for (pos, dirs) in layout {
            for dir in *dirs {
                board.add_passage_towards(*pos, *dir);
            }
        }
        board
    }

    #[test]
    fn solves_easy_maze() {
        use Direction::*;
        let board = board_from(2, &[(Dims(0, 0), &[North]), (Dims(0, 1), &[East])]);

        assert_eq!(
            solve(&board, Dims(0, 0), Dims(1, 1)),
            Some(vec![Dims(0, 0), Dims(0, 1), Dims(1, 1)])
        );
    }

    #[test]
    fn solves_hard_maze() {
        use Direction::*;
        let board = board_from(
            3,
            &[
                (Dims(0, 0), &[North, East]),
                (Dims(0, 1), &[North]),
                (Dims(0, 2), &[East]),
                (Dims(1, 1), &[East]),
                (Dims(1, 2), &[South]),
                (Dims(2, 1), &[North, South]),
            ],
        );

        assert_eq!(
            solve(&board, Dims(0, 0), Dims(2, 2)),
            Some(vec![
                Dims(0, 0),
                Dims(0, 1),
                Dims(0, 2),
                Dims(1, 2),
                Dims(1, 1),
                Dims(2, 1),
                Dims(2, 2),
            ])
        );
    }

    #[test]
    fn backtracks_out_of_dead_ends() {
        use Direction::*;
        // east first leads nowhere, the goal is behind the north passage
        let board = board_from(
            3,
            &[
                (Dims(0, 0), &[East, North]),
                (Dims(1, 0), &[East]),
                (Dims(0, 1), &[North]),
            ],
        );

        assert_eq!(
            solve(&board, Dims(0, 0), Dims(0, 2)),
            Some(vec![Dims(0, 0), Dims(0, 1), Dims(0, 2)])
        );
    }

    #[test]
    fn start_is_goal() {
        let board = MazeBoard::new(2).unwrap();
        assert_eq!(solve(&board, Dims(1, 1), Dims(1, 1)), Some(vec![Dims(1, 1)]));
    }

    #[test]
    fn unreachable_goal_has_no_path() {
        use Direction::*;
        let board = board_from(2, &[(Dims(0, 0), &[North])]);
        assert_eq!(solve(&board, Dims(0, 0), Dims(1, 1)), None);
    }

    #[test]
    fn reverse_records_are_not_followed() {
        let mut board = MazeBoard::new(2).unwrap();
        board.add_passage(Dims(0, 1), Dims(0, 0));
        board.add_passage(Dims(0, 1), Dims(1, 1));

        // linked both ways for rendering, one way for solving
        assert!(board.is_linked(Dims(0, 0), Direction::North));
        assert_eq!(solve(&board, Dims(0, 0), Dims(1, 1)), None);
        assert_eq!(
            solve(&board, Dims(0, 1), Dims(1, 1)),
            Some(vec![Dims(0, 1), Dims(1, 1)])
        );
    }

    #[test]
    fn directed_cycle_terminates() {
        let mut board = MazeBoard::new(2).unwrap();
        board.add_passage(Dims(0, 0), Dims(1, 0));
        board.add_passage(Dims(1, 0), Dims(0, 0));

        assert_eq!(solve(&board, Dims(0, 0), Dims(1, 1)), None);
    }

    #[test]
    fn long_corridor() {
        // serpentine through the whole grid, every step carried by a forward record
        let width = 64;
        let mut board = MazeBoard::new(width).unwrap();
        let mut path = Vec::new();
        for y in 0..width {
            let xs: Vec<i32> = if y % 2 == 0 {
                (0..width).collect()
            } else {
                (0..width).rev().collect()
            };
            path.extend(xs.into_iter().map(|x| Dims(x, y)));
        }
        for pair in path.windows(2) {
            board.add_passage(pair[0], pair[1]);
        }

        let found = solve(&board, path[0], *path.last().unwrap()).unwrap();
        assert_eq!(found.len(), (width * width) as usize);
        assert_eq!(found, path);
    }
}
