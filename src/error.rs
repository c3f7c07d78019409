use thiserror::Error;

/// Errors raised when building a maze.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: u16, height: u16 },
}

/// Errors raised while reading the command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("unexpected argument {0:?}")]
    UnexpectedArgument(String),
}

/// Top-level error of the binaries.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Maze(#[from] MazeError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, AppError>;
