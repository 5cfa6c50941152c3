// error.rs - Error types for the simulation core

use thiserror::Error;

/// Errors returned by grid edits, scheduling, and configuration.
#[derive(Debug, Error)]
pub enum LifeError {
    /// Coordinates fall outside the grid.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Tick intervals must be at least one millisecond.
    #[error("tick interval must be positive, got {0}ms")]
    InvalidInterval(u64),

    /// A cell literal other than 0 or 1.
    #[error("cell value {0} is not 0 or 1")]
    InvalidCell(u8),

    #[error("random threshold {0} is outside [0, 1)")]
    InvalidThreshold(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The simulation task is no longer running.
    #[error("simulation task has shut down")]
    Disconnected,
}

pub type Result<T> = std::result::Result<T, LifeError>;
