// session.rs - The host's single "current grid" slot plus its scheduler
//
// Every write (tick or edit) replaces `grid` with a new value. Nothing else
// holds a mutable reference to it, so the last write wins and a tick always
// reads a fully formed generation.

use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use crate::config::LifeConfig;
use crate::editor;
use crate::error::Result;
use crate::grid::{COLS, Grid, ROWS};
use crate::scheduler::Scheduler;

/// What the host renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot<const R: usize = { ROWS }, const C: usize = { COLS }> {
    pub grid: Grid<R, C>,
    pub generation: u64,
    pub running: bool,
    pub interval: Duration,
}

#[derive(Debug, Clone)]
pub struct Session<const R: usize = { ROWS }, const C: usize = { COLS }> {
    grid: Grid<R, C>,
    generation: u64,
    scheduler: Scheduler,
    next_tick: Option<Instant>,
}

impl<const R: usize, const C: usize> Session<R, C> {
    pub fn new(interval: Duration) -> Result<Self> {
        Ok(Self {
            grid: Grid::empty(),
            generation: 0,
            scheduler: Scheduler::new(interval)?,
            next_tick: None,
        })
    }

    pub fn from_config(config: &LifeConfig) -> Result<Self> {
        Self::new(config.initial_interval())
    }

    pub fn grid(&self) -> &Grid<R, C> {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn interval(&self) -> Duration {
        self.scheduler.interval()
    }

    /// When the pending timer fires, if one is scheduled.
    pub fn next_tick(&self) -> Option<Instant> {
        self.next_tick
    }

    pub fn snapshot(&self) -> Snapshot<R, C> {
        Snapshot {
            grid: self.grid,
            generation: self.generation,
            running: self.is_running(),
            interval: self.interval(),
        }
    }

    /// Starts the simulation and runs the first tick immediately.
    pub fn start(&mut self, now: Instant) -> bool {
        if !self.scheduler.start() {
            return false;
        }
        self.fire(now);
        true
    }

    /// Pauses. A timer already pending is left to fire as a no-op.
    pub fn stop(&mut self) -> bool {
        self.scheduler.stop()
    }

    /// Takes effect at the next reschedule; a pending timer keeps its deadline.
    pub fn set_interval(&mut self, interval: Duration) -> Result<()> {
        self.scheduler.set_interval(interval)
    }

    /// Handles a fired timer. Returns whether a new generation was published.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.scheduler.on_tick(&self.grid) {
            Some((next, delay)) => {
                self.grid = next;
                self.generation += 1;
                self.next_tick = Some(now + delay);
                debug!(generation = self.generation, live = self.grid.live_count(), "tick");
                true
            }
            None => {
                self.next_tick = None;
                false
            }
        }
    }

    pub fn toggle(&mut self, row: usize, col: usize) -> Result<()> {
        self.grid = editor::toggle_cell(&self.grid, row, col)?;
        Ok(())
    }

    pub fn randomize(&mut self, threshold: f64) {
        self.replace(editor::randomize(threshold));
    }

    pub fn clear(&mut self) {
        self.replace(editor::clear());
    }

    /// Swaps in a grid supplied by the host.
    pub fn load(&mut self, grid: Grid<R, C>) {
        self.replace(grid);
    }

    fn replace(&mut self, grid: Grid<R, C>) {
        self.grid = grid;
        self.generation = 0;
    }
}
