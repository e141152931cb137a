//! Error types for board mutation and configuration loading

use std::path::PathBuf;

/// Errors raised when a move or a game operation is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("cell ({x}, {y}) is outside the {size}x{size} board")]
    OutOfBounds { x: i32, y: i32, size: usize },

    #[error("cell ({x}, {y}) is already occupied")]
    Occupied { x: u8, y: u8 },

    #[error("cannot place an empty stone")]
    EmptyStone,

    #[error("game is over")]
    GameOver,

    #[error("not your turn")]
    NotYourTurn,

    #[error("board size {0} is not supported (expected 5..=25)")]
    InvalidBoardSize(usize),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
