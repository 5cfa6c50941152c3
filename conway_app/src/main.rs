// main.rs - Conway's Game of Life, egui host for the conway_core simulation
// The simulation runs on a tokio task; this window only sends it commands and
// paints whatever snapshot it last published.

use eframe::egui;
use egui::Color32;
use tracing_subscriber::EnvFilter;

use conway_core::{LifeConfig, SimulationHandle};

mod ui;        // eframe::App impl: controls and grid painter

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => LifeConfig::load(path)?,
        None => LifeConfig::default(),
    };

    let runtime = tokio::runtime::Runtime::new()?;
    let app = GameOfLife::new(runtime, config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )?;
    Ok(())
}

/// Window state. The grid itself lives in the simulation task.
pub struct GameOfLife {
    pub handle: SimulationHandle,
    pub config: LifeConfig,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub border_color: Color32,
    pub selected_interval_ms: u64,
    pub last_dragged: Option<(usize, usize)>,   // Cell most recently toggled by the current drag

    // Keeps the worker threads alive for as long as the window is open.
    _runtime: tokio::runtime::Runtime,
}

impl GameOfLife {
    fn new(runtime: tokio::runtime::Runtime, config: LifeConfig) -> conway_core::Result<Self> {
        let (handle, _task): (SimulationHandle, _) = {
            let _guard = runtime.enter();
            conway_core::spawn(&config)?
        };
        tracing::info!(
            rows = conway_core::ROWS,
            cols = conway_core::COLS,
            interval_ms = config.initial_interval_ms,
            "simulation ready"
        );

        Ok(Self {
            handle,
            selected_interval_ms: config.initial_interval_ms,
            config,
            live_color: Color32::WHITE,
            dead_color: Color32::from_rgb(0x11, 0x00, 0x00),
            border_color: Color32::from_rgb(0xa6, 0x4a, 0x95),
            last_dragged: None,
            _runtime: runtime,
        })
    }

    /// Logs a rejected command; the UI only ever sends in-range values.
    fn report(&self, result: conway_core::Result<()>) {
        if let Err(err) = result {
            tracing::error!(%err, "simulation command failed");
        }
    }
}

impl Drop for GameOfLife {
    fn drop(&mut self) {
        let _ = self.handle.shutdown();
    }
}
