// ui.rs - Controls and grid painter for the egui host

use std::time::Duration;

use eframe::egui;
use egui::{Rect, Stroke, Vec2};

use conway_core::{COLS, ROWS, Snapshot};
use crate::GameOfLife;

const MAX_CELL_SIZE: f32 = 30.0;
const MIN_CELL_SIZE: f32 = 2.0;
const SPACING: f32 = 1.0;

/// Cell edge length for the current window, shrinking the grid to fit.
///
/// Never below `MIN_CELL_SIZE`, so a tiny window cannot yield a negative painter size.
fn cell_size(screen: Vec2) -> f32 {
    ((screen.x - 50.0) / COLS as f32)
        .min((screen.y - 150.0) / ROWS as f32)
        .min(MAX_CELL_SIZE)
        .max(MIN_CELL_SIZE)
}

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let snapshot = self.handle.snapshot();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if snapshot.running { "⏸ Pause" } else { "▶ Play" };
                if ui.button(button_text).clicked() {
                    let result = if snapshot.running {
                        self.handle.stop()
                    } else {
                        self.handle.start()
                    };
                    self.report(result);
                }

                if ui.button("🎲 Randomize").clicked() {
                    self.report(self.handle.randomize(self.config.random_threshold));
                }

                if ui.button("⏹ Clear").clicked() {
                    self.report(self.handle.reset());
                }

                ui.separator();

                // Speed selector
                ui.label("Speed:");
                let selected_label = self
                    .config
                    .speed_presets
                    .iter()
                    .find(|p| p.interval_ms == self.selected_interval_ms)
                    .map(|p| p.label.clone())
                    .unwrap_or_else(|| format!("{} ms", self.selected_interval_ms));
                let previous = self.selected_interval_ms;
                egui::ComboBox::from_id_source("speed_selector")
                    .selected_text(selected_label)
                    .show_ui(ui, |ui| {
                        for preset in &self.config.speed_presets {
                            ui.selectable_value(
                                &mut self.selected_interval_ms,
                                preset.interval_ms,
                                preset.label.as_str(),
                            );
                        }
                    });
                if self.selected_interval_ms != previous {
                    self.report(self.handle.set_interval_ms(self.selected_interval_ms));
                }

                ui.separator();

                ui.label(format!("Generation: {}", snapshot.generation));
            });

            ui.separator();

            ui.label("Click or drag across cells to toggle them, even while the simulation runs.");

            ui.separator();

            self.draw_grid(ctx, ui, &snapshot);

            ui.separator();

            // Statistics
            let total = ROWS * COLS;
            let live_cells = snapshot.grid.live_count();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            });
        });

        // Keep polling for new generations while running
        if snapshot.running {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}

impl GameOfLife {
    fn draw_grid(&mut self, ctx: &egui::Context, ui: &mut egui::Ui, snapshot: &Snapshot) {
        let box_size = cell_size(ctx.screen_rect().size());
        let pitch = box_size + SPACING;

        let total_size = Vec2::new(pitch * COLS as f32 - SPACING, pitch * ROWS as f32 - SPACING);
        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click_and_drag());
        let origin = response.rect.min;

        painter.rect_filled(Rect::from_min_size(origin, total_size), 0.0, self.dead_color);

        for (row, col, cell) in snapshot.grid.iter_cells() {
            let rect = Rect::from_min_size(
                origin + Vec2::new(col as f32 * pitch, row as f32 * pitch),
                Vec2::splat(box_size),
            );
            let color = if cell.is_alive() { self.live_color } else { self.dead_color };
            painter.rect_filled(rect, 3.0, color);
            painter.rect_stroke(rect, 3.0, Stroke::new(0.5, self.border_color));
        }

        // Pressing toggles the cell under the pointer; dragging toggles each
        // newly entered cell once.
        if !response.is_pointer_button_down_on() {
            self.last_dragged = None;
            return;
        }
        let Some(pos) = response.interact_pointer_pos() else { return };
        let offset = pos - origin;
        if offset.x < 0.0 || offset.y < 0.0 {
            return;
        }
        let (row, col) = ((offset.y / pitch) as usize, (offset.x / pitch) as usize);
        if row >= ROWS || col >= COLS || self.last_dragged == Some((row, col)) {
            return;
        }
        self.last_dragged = Some((row, col));
        self.report(self.handle.toggle(row, col));
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_size_is_capped() {
        assert_eq!(cell_size(Vec2::new(10_000.0, 10_000.0)), MAX_CELL_SIZE);
    }

    #[test]
    fn cell_size_has_a_floor_for_tiny_windows() {
        assert_eq!(cell_size(Vec2::new(20.0, 20.0)), MIN_CELL_SIZE);
    }

    #[test]
    fn cell_size_follows_the_tighter_axis() {
        let width_bound = cell_size(Vec2::new(50.0 + COLS as f32 * 10.0, 10_000.0));
        assert_eq!(width_bound, 10.0);
        let height_bound = cell_size(Vec2::new(10_000.0, 150.0 + ROWS as f32 * 12.0));
        assert_eq!(height_bound, 12.0);
    }
}
