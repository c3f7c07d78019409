use super::Solution;
use crate::maze::{Coord, Direction, Maze};

/// One cell on the current candidate path, with the next direction still to try.
struct Frame {
    coord: Coord,
    next_dir: usize,
}

/// Depth-first search with an explicit frame stack.
///
/// Neighbors are tried in [`Direction::EXPLORATION_ORDER`]. The search stops as soon as the goal
/// is entered; a frame whose directions are exhausted is popped off the path.
pub fn solve_dfs(maze: &Maze, start: Coord, goal: Coord) -> Solution {
    let mut solution = Solution::empty(maze);
    if !maze.is_in_bounds(start) || !maze.is_in_bounds(goal) {
        return solution;
    }

    solution.visited[start] = true;
    if start == goal {
        solution.path.push(start);
        return solution;
    }

    let mut stack = vec![Frame {
        coord: start,
        next_dir: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(&dir) = Direction::EXPLORATION_ORDER.get(frame.next_dir) else {
            // Dead end, backtrack
            tracing::trace!("[dfs] Backtracking from {:?}", frame.coord);
            stack.pop();
            continue;
        };
        frame.next_dir += 1;
        let current = frame.coord;

        let Some(next) = maze.neighbor(current, dir) else {
            continue;
        };
        if solution.visited[next] || !maze.is_connected(current, next) {
            continue;
        }

        solution.visited[next] = true;
        solution.attempted[next] = true;
        stack.push(Frame {
            coord: next,
            next_dir: 0,
        });

        if next == goal {
            solution.path = stack.iter().map(|frame| frame.coord).collect();
            return solution;
        }
    }

    solution
}
