use crate::consts;
use crate::world::Bounds;
use log::LevelFilter;
use serde::Deserialize;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Dimensions of the grid and its contents
    #[serde(default)]
    pub(crate) world: WorldConfig,

    /// Settings about the animation
    #[serde(default)]
    pub(crate) display: DisplayConfig,

    /// Settings about the log file
    #[serde(default)]
    pub(crate) logging: LoggingConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("autosnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read, if the file's contents
    /// could not be deserialized, or if the world settings are unusable.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        let config = toml::from_str::<Config>(&content)?;
        config.world.validate()?;
        Ok(config)
    }
}

/// The fixed parameters of the simulated world
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct WorldConfig {
    /// Number of columns in the grid
    pub(crate) width: u16,

    /// Number of rows in the grid
    pub(crate) height: u16,

    /// Number of cells in the snake, head included
    pub(crate) snake_length: u16,

    /// Number of food items placed at the start of each epoch
    pub(crate) food_count: usize,
}

impl WorldConfig {
    pub(crate) fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    /// Check that a world can be built from these settings: the snake must
    /// fit on the grid when stretched out horizontally, and the food and
    /// snake together must leave at least one cell free.
    pub(crate) fn validate(&self) -> Result<(), WorldConfigError> {
        let WorldConfig {
            width,
            height,
            snake_length,
            food_count,
        } = *self;
        if width < 2 || height < 2 {
            return Err(WorldConfigError::GridTooSmall { width, height });
        }
        if snake_length == 0 {
            return Err(WorldConfigError::NoSnake);
        }
        if snake_length >= width {
            return Err(WorldConfigError::SnakeTooLong {
                snake_length,
                width,
            });
        }
        let cells = self.bounds().area();
        if food_count.saturating_add(usize::from(snake_length)) >= cells {
            return Err(WorldConfigError::Overcrowded {
                food_count,
                snake_length,
                cells,
            });
        }
        Ok(())
    }
}

impl Default for WorldConfig {
    fn default() -> WorldConfig {
        WorldConfig {
            width: consts::DEFAULT_GRID_WIDTH,
            height: consts::DEFAULT_GRID_HEIGHT,
            snake_length: consts::DEFAULT_SNAKE_LENGTH,
            food_count: consts::DEFAULT_FOOD_COUNT,
        }
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct DisplayConfig {
    /// Snake movements per second
    pub(crate) fps: NonZeroU32,
}

impl DisplayConfig {
    /// Time between movements of the snake
    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_secs(1) / self.fps.get()
    }
}

impl Default for DisplayConfig {
    fn default() -> DisplayConfig {
        DisplayConfig {
            fps: NonZeroU32::new(consts::DEFAULT_FPS).unwrap_or(NonZeroU32::MIN),
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct LoggingConfig {
    /// File to write log messages to.  Nothing is logged if this is unset.
    pub(crate) file: Option<PathBuf>,

    /// Least severe level of messages to log
    pub(crate) level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> LoggingConfig {
        LoggingConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error("invalid world settings")]
    World(#[from] WorldConfigError),
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum WorldConfigError {
    #[error("grid must be at least 2x2 cells, but is {width}x{height}")]
    GridTooSmall { width: u16, height: u16 },
    #[error("snake length must be at least 1")]
    NoSnake,
    #[error("snake of length {snake_length} does not fit in a grid {width} cells wide")]
    SnakeTooLong { snake_length: u16, width: u16 },
    #[error(
        "{food_count} food and a snake of length {snake_length} leave no free cell in a grid of {cells} cells"
    )]
    Overcrowded {
        food_count: usize,
        snake_length: u16,
        cells: usize,
    },
}
