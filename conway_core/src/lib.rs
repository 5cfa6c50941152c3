// lib.rs - Conway's Game of Life simulation core
//
// Grid model, neighbour topology, rule engine, grid editor and the
// pause/resume scheduler. Rendering lives in the host (conway_app).

pub mod config;
pub mod editor;
pub mod error;
pub mod grid;
pub mod rules;
pub mod runner;
pub mod scheduler;
pub mod session;
pub mod topology;

pub use config::{LifeConfig, SpeedPreset};
pub use editor::{clear, randomize, randomize_with, toggle_cell};
pub use error::{LifeError, Result};
pub use grid::{COLS, Cell, Grid, ROWS, create_empty_grid};
pub use rules::step;
pub use runner::{SimulationHandle, spawn};
pub use scheduler::{RunState, Scheduler};
pub use session::{Session, Snapshot};
pub use topology::NEIGHBOR_OFFSETS;
