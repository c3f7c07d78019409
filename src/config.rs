use std::path::PathBuf;

use crate::error::ConfigError;

/// Settings of the interactive front-end, read from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maze width in cells
    pub width: u8,
    /// Maze height in cells
    pub height: u8,
    /// Seed for the session RNG; `None` draws from the OS
    pub seed: Option<u64>,
    /// Directory the log file is written to
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 30,
            height: 30,
            seed: None,
            log_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    pub const LOG_FILE_NAME: &'static str = "mazeworld.log";

    pub const USAGE: &'static str =
        "Usage: mazeworld [WIDTH HEIGHT] [--seed N] [--log-dir DIR]\n\
         WIDTH and HEIGHT are between 1 and 255 (default 30x30).";

    /// Parse `mazeworld [WIDTH HEIGHT] [--seed N] [--log-dir DIR]`, without the executable name.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Config::default();
        let mut dims = Vec::with_capacity(2);
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--seed"))?;
                    let seed = value.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                        name: "--seed",
                        value: value.clone(),
                        reason: e.to_string(),
                    })?;
                    config.seed = Some(seed);
                }
                "--log-dir" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--log-dir"))?;
                    config.log_dir = PathBuf::from(value);
                }
                _ if dims.len() < 2 && !arg.starts_with("--") => dims.push(arg),
                _ => return Err(ConfigError::UnexpectedArgument(arg)),
            }
        }

        match dims.as_slice() {
            [] => {}
            [width, height] => {
                config.width = parse_dimension("WIDTH", width)?;
                config.height = parse_dimension("HEIGHT", height)?;
            }
            [_] => return Err(ConfigError::MissingValue("HEIGHT")),
            _ => unreachable!("at most two dimensions are collected"),
        }

        Ok(config)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(Self::LOG_FILE_NAME)
    }
}

fn parse_dimension(name: &'static str, value: &str) -> Result<u8, ConfigError> {
    let error = |reason: &str| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
        reason: reason.to_string(),
    };
    match value.trim().parse::<u8>() {
        Ok(0) | Err(_) => Err(error("expected a number between 1 and 255")),
        Ok(n) => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.width, 30);
        assert_eq!(config.log_path(), PathBuf::from("./mazeworld.log"));
    }

    #[test]
    fn test_dimensions_and_flags() {
        let config =
            Config::from_args(["12", "7", "--seed", "99", "--log-dir", "/tmp/logs"]).unwrap();
        assert_eq!(config.width, 12);
        assert_eq!(config.height, 7);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/logs"));
    }

    #[test]
    fn test_flags_before_dimensions() {
        let config = Config::from_args(["--seed", "1", "3", "4"]).unwrap();
        assert_eq!((config.width, config.height, config.seed), (3, 4, Some(1)));
    }

    #[test]
    fn test_zero_and_oversized_dimensions_rejected() {
        assert!(matches!(
            Config::from_args(["0", "5"]),
            Err(ConfigError::InvalidValue { name: "WIDTH", .. })
        ));
        assert!(matches!(
            Config::from_args(["5", "256"]),
            Err(ConfigError::InvalidValue { name: "HEIGHT", .. })
        ));
    }

    #[test]
    fn test_malformed_arguments() {
        assert_eq!(
            Config::from_args(["5"]),
            Err(ConfigError::MissingValue("HEIGHT"))
        );
        assert_eq!(
            Config::from_args(["--seed"]),
            Err(ConfigError::MissingValue("--seed"))
        );
        assert!(matches!(
            Config::from_args(["--seed", "abc"]),
            Err(ConfigError::InvalidValue { name: "--seed", .. })
        ));
        assert_eq!(
            Config::from_args(["1", "2", "3"]),
            Err(ConfigError::UnexpectedArgument("3".to_string()))
        );
        assert_eq!(
            Config::from_args(["--verbose"]),
            Err(ConfigError::UnexpectedArgument("--verbose".to_string()))
        );
    }
}
