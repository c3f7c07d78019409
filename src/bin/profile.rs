use std::time::Instant;

use mazeworld::{
    session::{Command, Session},
    solvers::{Solver, solve_maze},
};
use tracing_subscriber::EnvFilter;

/// Headless generate-and-solve loop: `profile [ITERATIONS] [WIDTH HEIGHT]`.
fn main() -> Result<(), mazeworld::AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1);
    let width = args.next().and_then(|s| s.parse::<u16>().ok()).unwrap_or(255);
    let height = args.next().and_then(|s| s.parse::<u16>().ok()).unwrap_or(255);

    let mut session = Session::new(width, height, None)?;
    for iter in 0..num_iters {
        let started = Instant::now();
        session.dispatch(Command::NewMaze);
        tracing::info!("[profile] iter {}: generated in {:?}", iter, started.elapsed());

        // Both solvers run against the same maze
        for solver in [Solver::Dfs, Solver::Bfs] {
            let started = Instant::now();
            let solution = solve_maze(session.maze(), solver);
            tracing::info!(
                "[profile] iter {}: {} solved={} in {:?}, {} steps",
                iter,
                solver.short_name(),
                solution.is_solved(),
                started.elapsed(),
                solution.edge_count()
            );
        }
    }
    Ok(())
}
