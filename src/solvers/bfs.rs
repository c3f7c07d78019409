use std::collections::VecDeque;

use super::Solution;
use crate::maze::{Coord, Direction, Grid, Maze};

/// Breadth-first search; the returned path has the fewest possible edges.
pub fn solve_bfs(maze: &Maze, start: Coord, goal: Coord) -> Solution {
    let mut solution = Solution::empty(maze);
    if !maze.is_in_bounds(start) || !maze.is_in_bounds(goal) {
        return solution;
    }

    // For each discovered cell, the cell it was discovered from
    let mut came_from: Grid<Option<Coord>> = Grid::new(maze.width(), maze.height(), None);
    let mut frontier = VecDeque::from([start]);
    solution.visited[start] = true;

    while let Some(current) = frontier.pop_front() {
        if current == goal {
            // Walk back to the start, then flip into start-to-goal order
            let mut path = vec![current];
            let mut cursor = current;
            while let Some(prev) = came_from[cursor] {
                path.push(prev);
                cursor = prev;
            }
            path.reverse();
            solution.path = path;
            return solution;
        }

        for dir in Direction::EXPLORATION_ORDER {
            let Some(next) = maze.neighbor(current, dir) else {
                continue;
            };
            if solution.visited[next] || !maze.is_connected(current, next) {
                continue;
            }
            solution.visited[next] = true;
            solution.attempted[next] = true;
            came_from[next] = Some(current);
            frontier.push_back(next);
        }
    }

    tracing::debug!("[bfs] Frontier exhausted without reaching {:?}", goal);
    solution
}
