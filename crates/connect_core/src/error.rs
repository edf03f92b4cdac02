//! Error types for board construction and engine configuration.

use thiserror::Error;

use crate::types::Column;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid board dimensions {width}x{height} (each side must be 1..={max})")]
    InvalidDimensions {
        width: usize,
        height: usize,
        max: usize,
    },

    #[error("column {column} is outside the board (width {width})")]
    ColumnOutOfRange { column: Column, width: usize },

    #[error("column {0} is full")]
    ColumnFull(Column),

    #[error("the game is already over")]
    GameOver,

    #[error("invalid diagram: {0}")]
    InvalidDiagram(String),

    #[error("invalid move string at position {index}: {reason}")]
    InvalidMoveString { index: usize, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
