use rand::rngs::StdRng;

use crate::{
    error::MazeError,
    generators::{generate_maze, get_rng},
    maze::{Coord, Grid, Maze},
    solvers::{Solver, solve_maze},
};

/// One discrete user signal from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NewMaze,
    Solve,
    SelectSolver(Solver),
}

/// Feedback for the last command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Prompt,
    NewMazeGenerated,
    Solving,
    Solved,
    /// The search ran out of cells without reaching the goal
    NoPath,
    SolverSelected(Solver),
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Prompt => write!(
                f,
                "Press D for DFS, B for BFS, N for a new maze, or S to solve."
            ),
            Status::NewMazeGenerated => write!(f, "New maze generated. Press S to solve."),
            Status::Solving => write!(f, "Solving..."),
            Status::Solved => write!(f, "Maze solved. Press N for a new maze."),
            Status::NoPath => write!(f, "No path found. Press N for a new maze."),
            Status::SolverSelected(solver) => write!(
                f,
                "{} selected. Press S to solve or N for a new maze.",
                solver.short_name()
            ),
        }
    }
}

/// Owns the current maze and everything derived from solving it.
///
/// The presentation layer only reads through the accessors and changes state through
/// [`Session::dispatch`].
pub struct Session {
    maze: Maze,
    solver: Solver,
    solved: bool,
    /// Cells on the latest solution, start to goal
    solution: Vec<Coord>,
    /// 1-based position of each cell on the latest solution
    solution_order: Grid<Option<usize>>,
    /// Search bookkeeping from the latest solve
    visited: Grid<bool>,
    /// Cells the latest solve explored, shown as an overlay
    attempted: Grid<bool>,
    status: Status,
    rng: StdRng,
}

impl Session {
    /// Start a session with a freshly generated maze, DFS selected.
    ///
    /// With `seed`, every maze generated by this session is reproducible.
    pub fn new(width: u16, height: u16, seed: Option<u64>) -> Result<Self, MazeError> {
        let mut rng = get_rng(seed);
        let maze = generate_maze(width, height, &mut rng)?;
        tracing::info!(
            "[session] Created {}x{} session (seed: {:?})",
            width,
            height,
            seed
        );
        Ok(Session {
            solution: Vec::new(),
            solution_order: Grid::new(width, height, None),
            visited: Grid::new(width, height, false),
            attempted: Grid::new(width, height, false),
            maze,
            solver: Solver::default(),
            solved: false,
            status: Status::Prompt,
            rng,
        })
    }

    /// Apply one command. Commands never fail; the outcome shows up in the state and [`Session::status`].
    pub fn dispatch(&mut self, command: Command) {
        tracing::debug!("[session] Dispatching {:?}", command);
        match command {
            Command::NewMaze => self.new_maze(),
            Command::Solve => self.solve(),
            Command::SelectSolver(solver) => self.select_solver(solver),
        }
    }

    /// Replace the maze and drop every trace of the previous one.
    pub fn new_maze(&mut self) {
        let (width, height) = (self.maze.width(), self.maze.height());
        // Dimensions were validated when the session was created
        if let Ok(maze) = generate_maze(width, height, &mut self.rng) {
            self.maze = maze;
        }
        self.clear_solution();
        self.solved = false;
        self.status = Status::NewMazeGenerated;
        tracing::info!("[session] New {}x{} maze generated", width, height);
    }

    /// Solve with the selected solver. A no-op once the maze is solved.
    pub fn solve(&mut self) {
        if self.solved {
            tracing::debug!("[session] Already solved, ignoring solve");
            return;
        }
        self.status = Status::Solving;
        self.clear_solution();

        let result = solve_maze(&self.maze, self.solver);
        self.visited = result.visited;
        self.attempted = result.attempted;
        if result.path.is_empty() {
            self.status = Status::NoPath;
            tracing::warn!("[session] {} found no path", self.solver.short_name());
            return;
        }

        for (i, &coord) in result.path.iter().enumerate() {
            self.solution_order[coord] = Some(i + 1);
        }
        self.solution = result.path;
        self.solved = true;
        self.status = Status::Solved;
        tracing::info!(
            "[session] Solved with {} in {} steps",
            self.solver.short_name(),
            self.solution.len() - 1
        );
    }

    /// Pick the solver for the next solve. An existing solution is left alone.
    pub fn select_solver(&mut self, solver: Solver) {
        self.solver = solver;
        self.status = Status::SolverSelected(solver);
        tracing::info!("[session] Selected solver: {}", solver);
    }

    fn clear_solution(&mut self) {
        let (width, height) = (self.maze.width(), self.maze.height());
        self.solution.clear();
        self.solution_order = Grid::new(width, height, None);
        self.visited = Grid::new(width, height, false);
        self.attempted = Grid::new(width, height, false);
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn width(&self) -> u16 {
        self.maze.width()
    }

    pub fn height(&self) -> u16 {
        self.maze.height()
    }

    pub fn solver(&self) -> Solver {
        self.solver
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn solution(&self) -> &[Coord] {
        &self.solution
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_start(&self, coord: Coord) -> bool {
        coord == self.maze.start()
    }

    pub fn is_goal(&self, coord: Coord) -> bool {
        coord == self.maze.goal()
    }

    pub fn is_attempted(&self, coord: Coord) -> bool {
        self.attempted.get(coord).copied().unwrap_or(false)
    }

    pub fn is_visited(&self, coord: Coord) -> bool {
        self.visited.get(coord).copied().unwrap_or(false)
    }

    /// 1-based position of `coord` on the solution, for cells other than start and goal.
    pub fn solution_order(&self, coord: Coord) -> Option<usize> {
        if self.is_start(coord) || self.is_goal(coord) {
            return None;
        }
        self.solution_order.get(coord).copied().flatten()
    }
}
