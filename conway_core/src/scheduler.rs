// scheduler.rs - Paused/Running state machine for the simulation loop
//
// The scheduler never owns a timer. Whoever drives it (the tokio runner, or a
// UI frame loop) asks it on every fired timer whether to compute the next
// generation and how long to wait before the following one.

use std::time::Duration;

use tracing::info;

use crate::error::{LifeError, Result};
use crate::grid::Grid;
use crate::rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Paused,
    Running,
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    state: RunState,
    interval: Duration,
}

impl Scheduler {
    pub fn new(interval: Duration) -> Result<Self> {
        check_interval(interval)?;
        Ok(Self { state: RunState::Paused, interval })
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Paused -> Running. Returns `false` when already running, in which case
    /// the caller must not fire an extra tick.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = RunState::Running;
        info!(interval_ms = self.interval.as_millis() as u64, "simulation started");
        true
    }

    /// Running -> Paused. Ticks already scheduled still fire but do nothing.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state = RunState::Paused;
        info!("simulation paused");
        true
    }

    /// Changes the delay used when scheduling the next tick.
    pub fn set_interval(&mut self, interval: Duration) -> Result<()> {
        check_interval(interval)?;
        if interval != self.interval {
            info!(
                from_ms = self.interval.as_millis() as u64,
                to_ms = interval.as_millis() as u64,
                "tick interval changed"
            );
            self.interval = interval;
        }
        Ok(())
    }

    /// Handles one fired timer.
    ///
    /// Paused: returns `None` and the tick chain ends. Running: returns the
    /// next generation and the delay before the following tick.
    pub fn on_tick<const R: usize, const C: usize>(
        &self,
        current: &Grid<R, C>,
    ) -> Option<(Grid<R, C>, Duration)> {
        match self.state {
            RunState::Paused => None,
            RunState::Running => Some((rules::step(current), self.interval)),
        }
    }
}

fn check_interval(interval: Duration) -> Result<()> {
    if interval.as_millis() == 0 {
        return Err(LifeError::InvalidInterval(interval.as_millis() as u64));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker() -> Grid<5, 5> {
        Grid::from_bits([
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 1, 1, 1, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ])
        .unwrap()
    }

    #[test]
    fn starts_paused() {
        let scheduler = Scheduler::new(Duration::from_millis(100)).unwrap();
        assert_eq!(scheduler.state(), RunState::Paused);
        assert!(!scheduler.is_running());
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut scheduler = Scheduler::new(Duration::from_millis(100)).unwrap();
        assert!(scheduler.start());
        assert!(!scheduler.start());
        assert!(scheduler.is_running());
        assert!(scheduler.stop());
        assert!(!scheduler.stop());
        assert!(!scheduler.is_running());
    }

    #[test]
    fn paused_tick_ends_the_chain() {
        let scheduler = Scheduler::new(Duration::from_millis(100)).unwrap();
        assert!(scheduler.on_tick(&blinker()).is_none());
    }

    #[test]
    fn running_tick_steps_and_reschedules() {
        let mut scheduler = Scheduler::new(Duration::from_millis(100)).unwrap();
        scheduler.start();
        let (next, delay) = scheduler.on_tick(&blinker()).unwrap();
        assert_eq!(next, rules::step(&blinker()));
        assert_eq!(delay, Duration::from_millis(100));
    }

    #[test]
    fn interval_change_applies_to_the_next_reschedule_without_restart() {
        let mut scheduler = Scheduler::new(Duration::from_millis(100)).unwrap();
        scheduler.start();
        scheduler.set_interval(Duration::from_millis(1000)).unwrap();
        assert!(scheduler.is_running());
        let (_, delay) = scheduler.on_tick(&blinker()).unwrap();
        assert_eq!(delay, Duration::from_millis(1000));
    }

    #[test]
    fn set_interval_does_not_change_run_state() {
        let mut scheduler = Scheduler::new(Duration::from_millis(100)).unwrap();
        scheduler.set_interval(Duration::from_millis(50)).unwrap();
        assert!(!scheduler.is_running());
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert!(matches!(Scheduler::new(Duration::ZERO), Err(LifeError::InvalidInterval(0))));

        let mut scheduler = Scheduler::new(Duration::from_millis(100)).unwrap();
        assert!(scheduler.set_interval(Duration::from_micros(500)).is_err());
        assert_eq!(scheduler.interval(), Duration::from_millis(100));
    }
}
