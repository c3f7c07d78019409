mod bfs;
mod dfs;

use crate::maze::{Coord, Grid, Maze};
use bfs::solve_bfs;
use dfs::solve_dfs;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    #[default]
    Dfs,
    Bfs,
}

impl Solver {
    /// Short name used in status messages.
    pub fn short_name(&self) -> &'static str {
        match self {
            Solver::Dfs => "DFS",
            Solver::Bfs => "BFS",
        }
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
        }
    }
}

/// Outcome of one solve attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Cells from start to goal, each consecutive pair joined by an open edge.
    /// Empty when the goal was not reached.
    pub path: Vec<Coord>,
    /// Cells the search has marked to avoid revisiting or requeuing them
    pub visited: Grid<bool>,
    /// Cells the search explored as candidates, whether or not they ended up on the path.
    /// The start cell is never included.
    pub attempted: Grid<bool>,
}

impl Solution {
    fn empty(maze: &Maze) -> Self {
        Solution {
            path: Vec::new(),
            visited: Grid::new(maze.width(), maze.height(), false),
            attempted: Grid::new(maze.width(), maze.height(), false),
        }
    }

    pub fn is_solved(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves along the path.
    pub fn edge_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Find a path from the top-left to the bottom-right cell of `maze` using only open edges.
pub fn solve_maze(maze: &Maze, solver: Solver) -> Solution {
    let start = maze.start();
    let goal = maze.goal();

    let solution = match solver {
        Solver::Dfs => solve_dfs(maze, start, goal),
        Solver::Bfs => solve_bfs(maze, start, goal),
    };
    tracing::debug!(
        "[solve] {} finished: solved={}, path length={}, attempted={}",
        solver.short_name(),
        solution.is_solved(),
        solution.path.len(),
        solution.attempted.iter().filter(|&&a| a).count()
    );
    solution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate_maze_seeded;

    fn assert_valid_path(maze: &Maze, solution: &Solution) {
        assert!(solution.is_solved());
        assert_eq!(solution.path.first(), Some(&maze.start()));
        assert_eq!(solution.path.last(), Some(&maze.goal()));
        solution
            .path
            .windows(2)
            .for_each(|pair| assert!(maze.is_connected(pair[0], pair[1])));
    }

    #[test]
    fn test_both_solvers_find_valid_paths() {
        for seed in 0..20 {
            let maze = generate_maze_seeded(10, 10, Some(seed)).unwrap();
            let dfs = solve_maze(&maze, Solver::Dfs);
            let bfs = solve_maze(&maze, Solver::Bfs);
            assert_valid_path(&maze, &dfs);
            assert_valid_path(&maze, &bfs);
            assert!(bfs.edge_count() <= dfs.edge_count());
        }
    }

    #[test]
    fn test_paths_agree_on_a_tree() {
        // A spanning tree has exactly one simple path between any two cells
        for seed in 0..10 {
            let maze = generate_maze_seeded(8, 5, Some(seed)).unwrap();
            assert_eq!(
                solve_maze(&maze, Solver::Dfs).path,
                solve_maze(&maze, Solver::Bfs).path
            );
        }
    }

    #[test]
    fn test_two_cell_maze() {
        let maze = generate_maze_seeded(2, 1, Some(3)).unwrap();
        for solver in [Solver::Dfs, Solver::Bfs] {
            assert_eq!(solve_maze(&maze, solver).path, vec![(0, 0), (1, 0)]);
        }
    }

    #[test]
    fn test_single_cell_maze() {
        let maze = generate_maze_seeded(1, 1, Some(0)).unwrap();
        for solver in [Solver::Dfs, Solver::Bfs] {
            let solution = solve_maze(&maze, solver);
            assert_eq!(solution.path, vec![(0, 0)]);
            assert_eq!(solution.edge_count(), 0);
        }
    }

    #[test]
    fn test_walled_maze_is_unsolved() {
        let maze = Maze::new(3, 3).unwrap();
        for solver in [Solver::Dfs, Solver::Bfs] {
            let solution = solve_maze(&maze, solver);
            assert!(!solution.is_solved());
            assert!(solution.path.is_empty());
            assert!(solution.attempted.iter().all(|&a| !a));
        }
    }

    #[test]
    fn test_shortest_path_with_cycles() {
        // Fully open 3x3 grid: many paths exist, BFS must take a shortest one
        let mut maze = Maze::new(3, 3).unwrap();
        (0..maze.edges().len()).for_each(|i| maze.open_edge(i));
        let bfs = solve_maze(&maze, Solver::Bfs);
        let dfs = solve_maze(&maze, Solver::Dfs);
        assert_valid_path(&maze, &bfs);
        assert_valid_path(&maze, &dfs);
        assert_eq!(bfs.edge_count(), 4);
        assert!(bfs.edge_count() <= dfs.edge_count());
    }

    #[test]
    fn test_display() {
        assert_eq!(Solver::Dfs.to_string(), "Depth-First Search (DFS)");
        assert_eq!(Solver::Bfs.short_name(), "BFS");
        assert_eq!(Solver::default(), Solver::Dfs);
    }
}
