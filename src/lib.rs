//! Maze generation with randomized Kruskal and maze solving with depth-first and
//! breadth-first search, plus a small terminal front-end.

pub mod app;
pub mod config;
pub mod error;
pub mod generators;
pub mod maze;
pub mod session;
pub mod solvers;

pub use error::{AppError, MazeError};
pub use session::{Command, Session, Status};
