// runner.rs - Drives a Session on a tokio task
//
// The task is the only writer of the session. Hosts send commands over an
// unbounded channel (so UI threads never block) and read published state
// from a watch channel.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{debug, warn};

use crate::config::LifeConfig;
use crate::error::{LifeError, Result};
use crate::grid::{COLS, Grid, ROWS};
use crate::session::{Session, Snapshot};

#[derive(Debug)]
enum Command<const R: usize, const C: usize> {
    Start,
    Stop,
    SetInterval(Duration),
    Toggle { row: usize, col: usize },
    Randomize(f64),
    Clear,
    Reset,
    Load(Box<Grid<R, C>>),
    Shutdown,
}

/// Cloneable handle to a running simulation task.
#[derive(Debug, Clone)]
pub struct SimulationHandle<const R: usize = { ROWS }, const C: usize = { COLS }> {
    commands: mpsc::UnboundedSender<Command<R, C>>,
    snapshots: watch::Receiver<Snapshot<R, C>>,
}

/// Spawns the simulation task on the current tokio runtime.
pub fn spawn<const R: usize, const C: usize>(
    config: &LifeConfig,
) -> Result<(SimulationHandle<R, C>, JoinHandle<()>)> {
    let session = Session::from_config(config)?;
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (snapshot_tx, snapshot_rx) = watch::channel(session.snapshot());

    let task = tokio::spawn(run(session, command_rx, snapshot_tx));
    let handle = SimulationHandle { commands: command_tx, snapshots: snapshot_rx };
    Ok((handle, task))
}

impl<const R: usize, const C: usize> SimulationHandle<R, C> {
    pub fn start(&self) -> Result<()> {
        self.send(Command::Start)
    }

    pub fn stop(&self) -> Result<()> {
        self.send(Command::Stop)
    }

    pub fn set_interval(&self, interval: Duration) -> Result<()> {
        if interval.as_millis() == 0 {
            warn!(interval_us = interval.as_micros() as u64, "rejected tick interval");
            return Err(LifeError::InvalidInterval(interval.as_millis() as u64));
        }
        self.send(Command::SetInterval(interval))
    }

    pub fn set_interval_ms(&self, interval_ms: u64) -> Result<()> {
        self.set_interval(Duration::from_millis(interval_ms))
    }

    pub fn toggle(&self, row: usize, col: usize) -> Result<()> {
        if let Err(err) = Grid::<R, C>::empty().check_bounds(row, col) {
            warn!(row, col, "rejected toggle outside the grid");
            return Err(err);
        }
        self.send(Command::Toggle { row, col })
    }

    pub fn randomize(&self, threshold: f64) -> Result<()> {
        self.send(Command::Randomize(threshold))
    }

    pub fn clear(&self) -> Result<()> {
        self.send(Command::Clear)
    }

    /// Pauses and clears as a single command, so no tick can land in between.
    pub fn reset(&self) -> Result<()> {
        self.send(Command::Reset)
    }

    pub fn load(&self, grid: Grid<R, C>) -> Result<()> {
        self.send(Command::Load(Box::new(grid)))
    }

    /// Asks the task to exit once it has drained earlier commands.
    pub fn shutdown(&self) -> Result<()> {
        self.send(Command::Shutdown)
    }

    /// Latest published state.
    pub fn snapshot(&self) -> Snapshot<R, C> {
        *self.snapshots.borrow()
    }

    /// A receiver that is notified on every publish.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<R, C>> {
        self.snapshots.clone()
    }

    fn send(&self, command: Command<R, C>) -> Result<()> {
        self.commands.send(command).map_err(|_| LifeError::Disconnected)
    }
}

async fn run<const R: usize, const C: usize>(
    mut session: Session<R, C>,
    mut commands: mpsc::UnboundedReceiver<Command<R, C>>,
    snapshots: watch::Sender<Snapshot<R, C>>,
) {
    debug!(rows = R, cols = C, "simulation task started");
    loop {
        let deadline = session.next_tick();
        // Commands queued before a due tick are applied first.
        tokio::select! {
            biased;

            command = commands.recv() => {
                let Some(command) = command else { break };
                if !apply(&mut session, command) {
                    break;
                }
            }
            _ = wait_until(deadline) => {
                session.fire(Instant::now());
            }
        }
        snapshots.send_if_modified(|current| {
            let next = session.snapshot();
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
    }
    debug!(generation = session.generation(), "simulation task stopped");
}

/// Applies one command. Returns `false` when the task should exit.
fn apply<const R: usize, const C: usize>(
    session: &mut Session<R, C>,
    command: Command<R, C>,
) -> bool {
    match command {
        Command::Start => {
            session.start(Instant::now());
        }
        Command::Stop => {
            session.stop();
        }
        Command::SetInterval(interval) => {
            if let Err(err) = session.set_interval(interval) {
                warn!(%err, "ignored interval change");
            }
        }
        Command::Toggle { row, col } => {
            if let Err(err) = session.toggle(row, col) {
                warn!(%err, "ignored toggle");
            }
        }
        Command::Randomize(threshold) => session.randomize(threshold),
        Command::Clear => session.clear(),
        Command::Reset => {
            session.stop();
            session.clear();
        }
        Command::Load(grid) => session.load(*grid),
        Command::Shutdown => return false,
    }
    true
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
